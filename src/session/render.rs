use tracing::warn;

use crate::entropy::context::{EntropyContext, EntropyInput};
use crate::foundation::core::SurfaceSize;
use crate::foundation::error::ForgeResult;
use crate::panel::advanced::build_advanced;
use crate::panel::builder::{PanelOpts, build_panel};
use crate::raster::compositor::{RenderOpts, compose};
use crate::session::handle::RenderHandle;
use crate::traits::normalize::normalize;
use crate::traits::partial::PartialTraitDescriptor;

/// Render a subject with default options.
///
/// Never fails: an unavailable surface or an internal error yields an empty handle.
pub fn render(
    traits: &PartialTraitDescriptor,
    entropy: Option<&EntropyInput>,
    size: SurfaceSize,
) -> RenderHandle {
    render_with_opts(traits, entropy, size, &RenderOpts::default())
}

/// [`render`] with explicit raster options.
#[tracing::instrument(skip_all, fields(width = size.width, height = size.height))]
pub fn render_with_opts(
    traits: &PartialTraitDescriptor,
    entropy: Option<&EntropyInput>,
    size: SurfaceSize,
    opts: &RenderOpts,
) -> RenderHandle {
    match try_render(traits, entropy, size, opts) {
        Ok(handle) => handle,
        Err(err) => {
            warn!(error = %err, "render failed; returning empty handle");
            RenderHandle::empty()
        }
    }
}

/// Like [`render_with_opts`], but surfaces the failure.
pub fn try_render(
    traits: &PartialTraitDescriptor,
    entropy: Option<&EntropyInput>,
    size: SurfaceSize,
    opts: &RenderOpts,
) -> ForgeResult<RenderHandle> {
    let traits = normalize(traits);
    let entropy = entropy.map(EntropyContext::from_input);
    let (frame, log) = compose(&traits, entropy.as_ref(), size, opts)?;
    Ok(RenderHandle::new(frame, log, opts.ascii_columns))
}

/// Character panel of a subject. Every line is exactly the clamped panel width.
#[tracing::instrument(skip_all, fields(width = opts.width, detail = ?opts.detail))]
pub fn render_panel(
    traits: &PartialTraitDescriptor,
    entropy: Option<&EntropyInput>,
    opts: &PanelOpts,
) -> String {
    let traits = normalize(traits);
    let entropy = entropy.map(EntropyContext::from_input);
    build_panel(&traits, entropy.as_ref(), opts)
}

/// Themed dense panel for the subject's category.
#[tracing::instrument(skip_all, fields(width = width))]
pub fn render_advanced_panel(
    traits: &PartialTraitDescriptor,
    entropy: Option<&EntropyInput>,
    width: usize,
) -> String {
    let traits = normalize(traits);
    let entropy = entropy.map(EntropyContext::from_input);
    build_advanced(&traits, entropy.as_ref(), width)
}

#[cfg(test)]
#[path = "../../tests/unit/session/render.rs"]
mod tests;
