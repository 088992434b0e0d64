use crate::entropy::context::{EntropyContext, QuantumState};
use crate::entropy::seed::render_seed;
use crate::panel::frame::FrameStyle;
use crate::panel::glyphs;
use crate::traits::model::{Markings, TraitDescriptor, fold_key};

/// Narrowest panel: two borders plus room for a short row.
pub const MIN_PANEL_WIDTH: usize = 6;

/// How many trait-info lines a panel carries.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Detail {
    /// Rarity and pattern only.
    #[default]
    Low,
    /// Adds mood and eyes.
    Medium,
    /// Adds feature tags, chain and quantum labels, markings and category labels.
    High,
}

impl Detail {
    /// Parse `low`, `medium` or `high`; anything else is `Low`.
    pub fn parse(s: &str) -> Self {
        match fold_key(s).as_str() {
            "medium" | "med" => Self::Medium,
            "high" | "full" => Self::High,
            _ => Self::Low,
        }
    }
}

/// Panel options.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PanelOpts {
    /// Width in characters; clamped up to [`MIN_PANEL_WIDTH`].
    pub width: usize,
    /// Trait-info detail level.
    pub detail: Detail,
    /// Border style.
    pub frame: FrameStyle,
}

impl Default for PanelOpts {
    fn default() -> Self {
        Self {
            width: 50,
            detail: Detail::Low,
            frame: FrameStyle::Simple,
        }
    }
}

/// Row-by-row panel. Every line is exactly `opts.width` characters (after clamping).
pub(crate) fn build_panel(
    traits: &TraitDescriptor,
    entropy: Option<&EntropyContext>,
    opts: &PanelOpts,
) -> String {
    let width = opts.width.max(MIN_PANEL_WIDTH);
    let frame = &opts.frame;

    let mut content = Vec::new();
    if traits.special {
        content.push(data_strip(traits, entropy));
    }
    head_block(traits, &mut content);
    body_block(traits, &mut content);
    for acc in traits.accessories.iter() {
        content.push(glyphs::accessory(acc, traits.category).to_string());
    }
    info_lines(traits, entropy, opts.detail, &mut content);

    let mut rows = Vec::with_capacity(content.len() + 2);
    rows.push(frame.top(width));
    rows.extend(content.iter().map(|line| frame.row(line, width)));
    rows.push(frame.bottom(width));
    rows.join("\n")
}

/// Binary of the block height, or the hex render seed without one.
fn data_strip(traits: &TraitDescriptor, entropy: Option<&EntropyContext>) -> String {
    match entropy.and_then(|e| e.block_height) {
        Some(height) => format!("{height:b}"),
        None => format!("{:016x}", render_seed(traits, entropy)),
    }
}

fn head_block(traits: &TraitDescriptor, out: &mut Vec<String>) {
    let (l, r) = glyphs::eyes(traits.eye_style);
    out.push(glyphs::ears(traits.rarity).to_string());
    out.push(format!("( {l}.{r} )"));
    out.push(format!(" > {} < ", glyphs::mouth(traits.expression)));
}

fn body_block(traits: &TraitDescriptor, out: &mut Vec<String>) {
    let (open, close) = glyphs::body_outline(traits.rarity);
    let coat = glyphs::pattern(traits.pattern);
    let coat = if traits.special {
        format!("★{coat}★")
    } else {
        coat.to_string()
    };
    out.push(format!("{open} {coat} {close}"));
    out.push(glyphs::PAWS.to_string());
}

fn info_lines(
    traits: &TraitDescriptor,
    entropy: Option<&EntropyContext>,
    detail: Detail,
    out: &mut Vec<String>,
) {
    out.push(format!(
        "Rarity: {} | Pattern: {}",
        traits.rarity, traits.pattern
    ));
    if detail >= Detail::Medium {
        out.push(format!(
            "Mood: {} | Eyes: {}",
            traits.expression, traits.eye_style
        ));
    }
    if detail < Detail::High {
        return;
    }

    let f = &traits.features;
    out.push(format!("Fur: {} | Ears: {}", f.fur_length, f.ear_shape));
    out.push(format!("Tail: {} | Paws: {}", f.tail_type, f.paw_style));
    out.push(format!("Muzzle: {}", f.muzzle_shape));
    if let Some(e) = entropy.filter(|e| e.has_chain_data()) {
        out.push(match e.block_height {
            Some(h) => format!("⛓ Block #{h}"),
            None => "⛓ Chain-linked".to_string(),
        });
    }
    if let Some(state) = entropy.and_then(|e| e.quantum_state)
        && state != QuantumState::default()
    {
        out.push(glyphs::quantum_label(state).to_string());
    }
    if f.markings != Markings::None {
        out.push(format!("Markings: {}", f.markings));
    }
    out.extend(
        glyphs::category_labels(traits.category)
            .iter()
            .map(|s| s.to_string()),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/panel/builder.rs"]
mod tests;
