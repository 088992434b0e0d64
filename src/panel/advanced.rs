use crate::entropy::context::EntropyContext;
use crate::panel::builder::{Detail, MIN_PANEL_WIDTH, PanelOpts, build_panel};
use crate::panel::frame::FrameStyle;
use crate::panel::layout::center_line;
use crate::traits::model::{Category, TraitDescriptor};

struct Template {
    banner: &'static [&'static str],
    art: &'static [&'static str],
}

const QUANTUM: Template = Template {
    banner: &["═══ ψ QUANTUM CAT ψ ═══", "⟨ alive | dead ⟩"],
    art: &[
        "  ∿∿∿      /\\_/\\      ∿∿∿  ",
        "   ψ      ( @.@ )      ψ   ",
        "  ⟨|       > ψ <       |⟩  ",
        "         /|⟩   ⟨|\\         ",
        "  ∿∿∿   (_|     |_)   ∿∿∿  ",
    ],
};

const BLOCKCHAIN: Template = Template {
    banner: &["═══ ₿ BLOCKCHAIN CAT ₿ ═══", "[ proof of purr ]"],
    art: &[
        "[#]──[#]──[#]──[#]",
        "      /\\_/\\       ",
        "     ( $.$ )      ",
        "      > ₿ <       ",
        "    /[0101]\\      ",
        "   (_|____|_)     ",
        "[#]──[#]──[#]──[#]",
    ],
};

const CYBER: Template = Template {
    banner: &["▓▓▓ CYBER CAT ▓▓▓", ">> jacked in <<"],
    art: &[
        "01001  10110  01101",
        "      /\\_/\\        ",
        "     ( ◉.◉ )       ",
        "      > ▼ <        ",
        "    //|▓▓▓|\\\\      ",
        "   (_/ 010 \\_)     ",
        "10110  01101  01001",
    ],
};

const SCHRODINGER: Template = Template {
    banner: &["═══ SCHRÖDINGER'S CAT ═══", "open the box?"],
    art: &[
        "┌──────────┬──────────┐",
        "│  /\\_/\\   │  /\\_/\\   │",
        "│ ( o.o )  │ ( x.x )  │",
        "│  > ^ <   │  > ~ <   │",
        "│  alive   │   dead   │",
        "└──────────┴──────────┘",
    ],
};

fn template(category: Category) -> Option<&'static Template> {
    match category {
        Category::Quantum => Some(&QUANTUM),
        Category::Blockchain => Some(&BLOCKCHAIN),
        Category::Cyber => Some(&CYBER),
        Category::Schrodinger => Some(&SCHRODINGER),
        Category::Generic => None,
    }
}

/// Dense themed panel: banner, fixed illustration, trait summary.
///
/// Generic subjects fall back to the row builder inside a themed frame.
pub(crate) fn build_advanced(
    traits: &TraitDescriptor,
    entropy: Option<&EntropyContext>,
    width: usize,
) -> String {
    let width = width.max(MIN_PANEL_WIDTH);
    let Some(tpl) = template(traits.category) else {
        return build_panel(
            traits,
            entropy,
            &PanelOpts {
                width,
                detail: Detail::Medium,
                frame: FrameStyle::Themed {
                    title: "GENERIC CAT".to_string(),
                },
            },
        );
    };

    let mut lines: Vec<String> = Vec::new();
    lines.extend(tpl.banner.iter().map(|s| s.to_string()));
    lines.push(String::new());
    lines.extend(tpl.art.iter().map(|s| s.to_string()));
    lines.push(String::new());
    lines.extend(summary(traits, entropy));

    lines
        .iter()
        .map(|line| center_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn summary(traits: &TraitDescriptor, entropy: Option<&EntropyContext>) -> Vec<String> {
    let mut out = vec![
        format!("Rarity: {} | Mood: {}", traits.rarity, traits.expression),
        format!("Pattern: {} | Eyes: {}", traits.pattern, traits.eye_style),
    ];
    if !traits.accessories.is_empty() {
        let names: Vec<&str> = traits.accessories.iter().map(|a| a.label()).collect();
        out.push(format!("Wearing: {}", names.join(", ")));
    }
    let block = entropy
        .and_then(|e| e.block_height)
        .map(|h| format!("#{h}"))
        .unwrap_or_else(|| "-".to_string());
    let state = entropy
        .and_then(|e| e.quantum_state)
        .map(|s| s.label())
        .unwrap_or("unmeasured");
    out.push(format!("Block: {block} | State: {state}"));
    if let Some(e) = entropy.and_then(|e| e.entropy_scalar) {
        out.push(format!("Entropy: {e:.2}"));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/panel/advanced.rs"]
mod tests;
