use crate::foundation::core::Rgba8;
use crate::traits::model::Category;

/// Background algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Backdrop {
    RadialWaves,
    BinaryGrid,
    GlyphRain,
    SplitBox,
    Soft,
}

/// Decoration drawn over the body ellipse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BodyDeco {
    Waves,
    Circuitry,
    Glyphs,
    Spots,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TailTip {
    /// Translucent stroke trailing the tail.
    Trail,
    /// Solid accent-coloured cap.
    Cap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PupilStyle {
    Solid,
    Glyph,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HatStyle {
    TopHat,
    MinerLamp,
    Hood,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EffectStyle {
    Particles,
    ChainLinks,
    GlyphRain,
    BoxTicks,
    None,
}

/// Draw parameters of one category. Layers branch on these fields instead of on the category.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CategoryStyle {
    pub backdrop: Backdrop,
    pub bg_outer: Rgba8,
    pub bg_inner: Rgba8,
    pub ink: Rgba8,
    pub body: BodyDeco,
    pub tail_tip: TailTip,
    pub pupil: PupilStyle,
    pub whisker_trail: bool,
    pub hat: HatStyle,
    pub effect: EffectStyle,
    /// Characters used wherever the category scatters symbols.
    pub glyphs: &'static [char],
}

static QUANTUM: CategoryStyle = CategoryStyle {
    backdrop: Backdrop::RadialWaves,
    bg_outer: Rgba8::rgb(0x0b, 0x0a, 0x2a),
    bg_inner: Rgba8::rgb(0x2a, 0x1f, 0x6e),
    ink: Rgba8::new(0x50, 0xc8, 0xf0, 0x8c),
    body: BodyDeco::Waves,
    tail_tip: TailTip::Trail,
    pupil: PupilStyle::Solid,
    whisker_trail: true,
    hat: HatStyle::TopHat,
    effect: EffectStyle::Particles,
    glyphs: &['+', '*', '<', '>'],
};

static BLOCKCHAIN: CategoryStyle = CategoryStyle {
    backdrop: Backdrop::BinaryGrid,
    bg_outer: Rgba8::rgb(0x11, 0x11, 0x11),
    bg_inner: Rgba8::rgb(0x2b, 0x2b, 0x2b),
    ink: Rgba8::new(0xf7, 0x93, 0x1a, 0x5a),
    body: BodyDeco::Circuitry,
    tail_tip: TailTip::Cap,
    pupil: PupilStyle::Solid,
    whisker_trail: false,
    hat: HatStyle::MinerLamp,
    effect: EffectStyle::ChainLinks,
    glyphs: &['$', 'B', '#'],
};

static CYBER: CategoryStyle = CategoryStyle {
    backdrop: Backdrop::GlyphRain,
    bg_outer: Rgba8::rgb(0x05, 0x0a, 0x05),
    bg_inner: Rgba8::rgb(0x0d, 0x1f, 0x12),
    ink: Rgba8::rgb(0x00, 0xff, 0x41),
    body: BodyDeco::Glyphs,
    tail_tip: TailTip::Trail,
    pupil: PupilStyle::Glyph,
    whisker_trail: false,
    hat: HatStyle::Hood,
    effect: EffectStyle::GlyphRain,
    glyphs: &['0', '1', '<', '>', '/', '=', '+', '*', '|'],
};

static SCHRODINGER: CategoryStyle = CategoryStyle {
    backdrop: Backdrop::SplitBox,
    bg_outer: Rgba8::rgb(0x1a, 0x1a, 0x24),
    bg_inner: Rgba8::rgb(0x34, 0x34, 0x4a),
    ink: Rgba8::new(0x40, 0xe0, 0xd0, 0xb4),
    body: BodyDeco::Spots,
    tail_tip: TailTip::Cap,
    pupil: PupilStyle::Solid,
    whisker_trail: true,
    hat: HatStyle::TopHat,
    effect: EffectStyle::BoxTicks,
    glyphs: &['+', '-'],
};

static GENERIC: CategoryStyle = CategoryStyle {
    backdrop: Backdrop::Soft,
    bg_outer: Rgba8::rgb(0xf4, 0xe9, 0xd4),
    bg_inner: Rgba8::rgb(0xff, 0xf9, 0xee),
    ink: Rgba8::new(0xb8, 0xa0, 0x78, 0x80),
    body: BodyDeco::Spots,
    tail_tip: TailTip::Cap,
    pupil: PupilStyle::Solid,
    whisker_trail: false,
    hat: HatStyle::TopHat,
    effect: EffectStyle::None,
    glyphs: &['*'],
};

pub(crate) fn style_for(category: Category) -> &'static CategoryStyle {
    match category {
        Category::Quantum => &QUANTUM,
        Category::Blockchain => &BLOCKCHAIN,
        Category::Cyber => &CYBER,
        Category::Schrodinger => &SCHRODINGER,
        Category::Generic => &GENERIC,
    }
}
