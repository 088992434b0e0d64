//! Symbol tables of the text backend, keyed by the shared trait vocabulary.

use crate::entropy::context::QuantumState;
use crate::traits::model::{Accessory, Category, EyeStyle, Expression, Pattern, Rarity};

pub(crate) fn ears(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "/\\_/\\",
        Rarity::Rare => "/^\\_/^\\",
        Rarity::Epic => "/▲\\_/▲\\",
        Rarity::Legendary => "♛ /\\_/\\ ♛",
    }
}

pub(crate) fn eyes(style: EyeStyle) -> (char, char) {
    match style {
        EyeStyle::Normal => ('o', 'o'),
        EyeStyle::Happy => ('^', '^'),
        EyeStyle::Sleepy => ('-', '-'),
        EyeStyle::Surprised => ('O', 'O'),
        EyeStyle::Wink => ('^', 'o'),
        EyeStyle::Star => ('*', '*'),
        EyeStyle::Quantum => ('@', '@'),
    }
}

pub(crate) fn mouth(expression: Expression) -> char {
    match expression {
        Expression::Happy => 'w',
        Expression::Sad => 'n',
        Expression::Surprised => 'o',
        Expression::Grumpy => '-',
        Expression::Neutral => '^',
        Expression::Sleepy => '~',
        Expression::Curious => '?',
    }
}

pub(crate) fn pattern(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::None => "   ",
        Pattern::Striped => "≡≡≡",
        Pattern::Spotted => "•°•",
        Pattern::Tabby => "~≈~",
        Pattern::Quantum => "ψ⟩ψ",
        Pattern::Calico => "▓░▒",
    }
}

/// Opening and closing body-outline glyphs.
pub(crate) fn body_outline(rarity: Rarity) -> (&'static str, &'static str) {
    match rarity {
        Rarity::Common => ("(", ")"),
        Rarity::Rare => ("{", "}"),
        Rarity::Epic => ("[", "]"),
        Rarity::Legendary => ("⟪", "⟫"),
    }
}

pub(crate) const PAWS: &str = "(\")_(\")";

pub(crate) fn accessory(acc: Accessory, category: Category) -> &'static str {
    match (acc, category) {
        (Accessory::Hat, Category::Blockchain) => "*[=]* miner lamp",
        (Accessory::Hat, Category::Cyber) => "/▀▀▀\\ hood",
        (Accessory::Hat, _) => "▄█▄ top hat",
        (Accessory::Bowtie, _) => ">◆< bowtie",
        (Accessory::Glasses, Category::Cyber) => "[▬▬] visor",
        (Accessory::Glasses, _) => "(○-○) glasses",
        (Accessory::Collar, _) => "─●─ collar",
    }
}

pub(crate) fn quantum_label(state: QuantumState) -> &'static str {
    match state {
        QuantumState::Superposition => "State: superposition |ψ⟩",
        QuantumState::Entangled => "State: entangled ⟨ψ|ψ⟩",
        QuantumState::Observed => "State: observed",
        QuantumState::Unobserved => "State: unobserved",
    }
}

pub(crate) fn category_labels(category: Category) -> &'static [&'static str] {
    match category {
        Category::Quantum => &["Wavefunction: ψ", "Spin: ½"],
        Category::Blockchain => &["Ledger: on-chain", "Proof: work"],
        Category::Cyber => &["Net: jacked-in", "Firmware: 2.0.77"],
        Category::Schrodinger => &["Box: sealed", "Alive: ½ | Dead: ½"],
        Category::Generic => &[],
    }
}
