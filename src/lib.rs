//! nekoforge turns a collectible-cat trait descriptor, optionally mixed with blockchain entropy,
//! into reproducible artwork.
//!
//! Two backends share one trait vocabulary:
//!
//! - a raster compositor drawing eight ordered layers onto an RGBA surface, exported as PNG, an
//!   SVG wrapper or a luminance character grid ([`render`], [`RenderHandle`])
//! - a panel compositor laying the same subject out as fixed-width text ([`render_panel`],
//!   [`render_advanced_panel`])
//!
//! Inputs are lenient: unknown or malformed trait values fall back to defaults and malformed
//! entropy fields are dropped one at a time. Identical inputs always produce identical output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod entropy;
pub(crate) mod export;
pub(crate) mod panel;
pub(crate) mod raster;
pub(crate) mod session;
pub(crate) mod traits;

pub use crate::foundation::core::{BezPath, Point, Rect, Rgba8, SurfaceSize, Vec2};
pub use crate::foundation::error::{ForgeError, ForgeResult};
pub use crate::foundation::math::Rng64;

pub use crate::traits::model::{
    Accessory, AccessorySet, Category, EarShape, Expression, EyeStyle, FeatureTags, FurLength,
    Markings, MuzzleShape, Palette, Pattern, PawStyle, Rarity, TailType, TraitDescriptor,
};
pub use crate::traits::normalize::normalize;
pub use crate::traits::palette::{default_palette, rarity_colour};
pub use crate::traits::partial::{PartialFeatureTags, PartialTraitDescriptor};

pub use crate::entropy::context::{
    BlockHash, DEFAULT_ENTROPY_SCALAR, EntropyContext, EntropyInput, QuantumState,
    normalize_scalar,
};
pub use crate::entropy::seed::render_seed;

pub use crate::raster::compositor::{Frame, LayerKind, RenderOpts};
pub use crate::raster::painter::{DrawLog, PrimitiveKind};

pub use crate::panel::builder::{Detail, MIN_PANEL_WIDTH, PanelOpts};
pub use crate::panel::frame::FrameStyle;
pub use crate::panel::layout::center_line;

pub use crate::export::ascii::{DEFAULT_GRID_COLUMNS, character_grid};
pub use crate::export::png::{decode_png, encode_png};
pub use crate::export::svg::vector_document;

pub use crate::session::batch::{BatchOpts, RenderRequest, THREADS_ENV, render_many};
pub use crate::session::handle::{ExportFormat, RenderHandle};
pub use crate::session::render::{
    render, render_advanced_panel, render_panel, render_with_opts, try_render,
};
