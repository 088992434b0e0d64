use serde::Serialize;
use smallvec::SmallVec;

use crate::foundation::core::Rgba8;

/// Lowercase, trimmed, `_`/space folded to `-`.
pub(crate) fn fold_key(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

macro_rules! loose_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal [$($alias:literal),*] ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Parse a loosely-typed tag. Returns `None` for unknown tags.
            pub fn parse(s: &str) -> Option<Self> {
                let key = $crate::traits::model::fold_key(s);
                match key.as_str() {
                    $( $label $(| $alias)* => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Canonical lowercase label.
            pub fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub(crate) use loose_enum;

loose_enum! {
    /// Visual theme of the subject.
    Category {
        /// Radial field, wave strokes, particles.
        Quantum => "quantum" ["theme-a"],
        /// Grid with block-height binary, circuitry, chain links.
        Blockchain => "blockchain" ["crypto", "theme-b"],
        /// Glyph rain, hexagons, symbol stickers.
        Cyber => "cyber" ["cyberpunk", "matrix", "theme-c"],
        /// Split box with localized wave packets.
        Schrodinger => "schrodinger" ["schroedinger", "box", "theme-d"],
        /// Plain theme used when nothing else applies.
        Generic => "generic" [],
    }
    default Generic
}

loose_enum! {
    /// Rarity tier. Ordered: each tier draws strictly more effect primitives than the one below.
    Rarity {
        /// Base tier.
        Common => "common" [],
        /// Faint aura ring.
        Rare => "rare" ["uncommon"],
        /// Soft circles and a rune ring.
        Epic => "epic" [],
        /// Sparkles and a gold ring.
        Legendary => "legendary" ["mythic"],
    }
    default Common
}

loose_enum! {
    /// Facial expression; selects the mouth shape.
    Expression {
        /// Up-curved mouth.
        Happy => "happy" [],
        /// Down-curved mouth.
        Sad => "sad" [],
        /// Open round mouth.
        Surprised => "surprised" ["shocked"],
        /// Straight line.
        Grumpy => "grumpy" ["angry"],
        /// Small default curve.
        Neutral => "neutral" [],
        /// Small default curve, sleepy text eyes.
        Sleepy => "sleepy" ["tired"],
        /// Small default curve.
        Curious => "curious" [],
    }
    default Neutral
}

loose_enum! {
    /// Eye glyph axis of the text backend.
    EyeStyle {
        /// `o o`
        Normal => "normal" [],
        /// `^ ^`
        Happy => "happy" [],
        /// `- -`
        Sleepy => "sleepy" [],
        /// `O O`
        Surprised => "surprised" [],
        /// `^ o`
        Wink => "wink" [],
        /// `* *`
        Star => "star" ["stars"],
        /// `@ @`
        Quantum => "quantum" ["swirl"],
    }
    default Normal
}

loose_enum! {
    /// Coat pattern of the text backend.
    Pattern {
        /// Blank coat.
        None => "none" [],
        /// `≡≡≡`
        Striped => "striped" ["stripes"],
        /// `•°•`
        Spotted => "spotted" ["spots"],
        /// `~≈~`
        Tabby => "tabby" [],
        /// `ψ⟩ψ`
        Quantum => "quantum" [],
        /// `▓░▒`
        Calico => "calico" [],
    }
    default None
}

loose_enum! {
    /// Accessory tag. Declaration order is the fixed draw order.
    Accessory {
        /// Hat, lamp or hood depending on category.
        Hat => "hat" [],
        /// Bowtie under the chin.
        Bowtie => "bowtie" ["bow-tie", "bow"],
        /// Glasses across the eyes.
        Glasses => "glasses" ["sunglasses"],
        /// Collar with a tag.
        Collar => "collar" [],
    }
    default Hat
}

loose_enum! {
    /// Fur length feature tag.
    FurLength {
        /// Default.
        Short => "short" [],
        /// Medium coat.
        Medium => "medium" [],
        /// Long coat.
        Long => "long" [],
        /// Hairless.
        Hairless => "hairless" ["sphynx"],
    }
    default Short
}

loose_enum! {
    /// Ear shape feature tag.
    EarShape {
        /// Default.
        Pointed => "pointed" [],
        /// Rounded tips.
        Rounded => "rounded" ["round"],
        /// Folded forward.
        Folded => "folded" ["fold"],
        /// Long tufts.
        Tufted => "tufted" ["lynx"],
    }
    default Pointed
}

loose_enum! {
    /// Tail type feature tag.
    TailType {
        /// Default.
        Long => "long" [],
        /// Fluffy plume.
        Fluffy => "fluffy" [],
        /// Short bob.
        Bobbed => "bobbed" ["bob", "short"],
        /// Curled.
        Curled => "curled" ["curly"],
    }
    default Long
}

loose_enum! {
    /// Paw style feature tag.
    PawStyle {
        /// Default.
        Standard => "standard" [],
        /// White socks.
        Mittens => "mittens" ["socks"],
        /// Extra toes.
        Polydactyl => "polydactyl" [],
        /// Tufted toes.
        Tufted => "tufted" [],
    }
    default Standard
}

loose_enum! {
    /// Muzzle shape feature tag.
    MuzzleShape {
        /// Default.
        Round => "round" [],
        /// Narrow wedge.
        Wedge => "wedge" ["pointed"],
        /// Flat face.
        Flat => "flat" [],
    }
    default Round
}

loose_enum! {
    /// Facial marking feature tag.
    Markings {
        /// Default.
        None => "none" [],
        /// Blaze down the nose.
        Blaze => "blaze" [],
        /// Dark mask.
        Mask => "mask" [],
        /// Tabby "M" on the forehead.
        TabbyM => "tabby-m" ["m"],
        /// Moustache patch.
        Moustache => "moustache" ["mustache"],
    }
    default None
}

/// Physical feature tags, read by the panel's high-detail tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FeatureTags {
    /// Fur length.
    pub fur_length: FurLength,
    /// Ear shape.
    pub ear_shape: EarShape,
    /// Tail type.
    pub tail_type: TailType,
    /// Paw style.
    pub paw_style: PawStyle,
    /// Muzzle shape.
    pub muzzle_shape: MuzzleShape,
    /// Facial markings.
    pub markings: Markings,
}

/// Ordered colour slots. `primary` paints body and head, `secondary` inner ears and spots,
/// `accent` tail caps and highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Palette {
    /// Slot 0.
    pub primary: Rgba8,
    /// Slot 1.
    pub secondary: Rgba8,
    /// Slot 2.
    pub accent: Rgba8,
}

impl Palette {
    /// Palette from three slots.
    pub const fn new(primary: Rgba8, secondary: Rgba8, accent: Rgba8) -> Self {
        Self {
            primary,
            secondary,
            accent,
        }
    }

    /// Slot by index (0 primary, 1 secondary, 2 accent).
    pub fn slot_mut(&mut self, idx: usize) -> Option<&mut Rgba8> {
        match idx {
            0 => Some(&mut self.primary),
            1 => Some(&mut self.secondary),
            2 => Some(&mut self.accent),
            _ => None,
        }
    }
}

/// Set of accessories, kept in the fixed draw order regardless of input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AccessorySet(SmallVec<[Accessory; 4]>);

impl AccessorySet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, keeping draw order and collapsing duplicates.
    pub fn insert(&mut self, acc: Accessory) {
        if let Err(pos) = self.0.binary_search(&acc) {
            self.0.insert(pos, acc);
        }
    }

    /// Membership test.
    pub fn contains(&self, acc: Accessory) -> bool {
        self.0.binary_search(&acc).is_ok()
    }

    /// Iterate in draw order (hat, bowtie, glasses, collar).
    pub fn iter(&self) -> impl Iterator<Item = Accessory> + '_ {
        self.0.iter().copied()
    }

    /// Number of accessories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no accessory is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Accessory> for AccessorySet {
    fn from_iter<I: IntoIterator<Item = Accessory>>(iter: I) -> Self {
        let mut set = Self::new();
        for acc in iter {
            set.insert(acc);
        }
        set
    }
}

/// Normalized subject identity. Every field is populated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TraitDescriptor {
    /// Visual theme.
    pub category: Category,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Colour slots.
    pub palette: Palette,
    /// Accessories in draw order.
    pub accessories: AccessorySet,
    /// Expression.
    pub expression: Expression,
    /// Text-backend eye glyphs.
    pub eye_style: EyeStyle,
    /// Text-backend coat pattern.
    pub pattern: Pattern,
    /// Special flag: data strip and star-wrapped pattern on panels.
    pub special: bool,
    /// Physical feature tags.
    pub features: FeatureTags,
}

impl Default for TraitDescriptor {
    fn default() -> Self {
        let category = Category::default();
        Self {
            category,
            rarity: Rarity::default(),
            palette: crate::traits::palette::default_palette(category),
            accessories: AccessorySet::new(),
            expression: Expression::default(),
            eye_style: EyeStyle::default(),
            pattern: Pattern::default(),
            special: false,
            features: FeatureTags::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/traits/model.rs"]
mod tests;
