use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::entropy::context::EntropyInput;
use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::raster::compositor::RenderOpts;
use crate::session::handle::RenderHandle;
use crate::session::render::render_with_opts;
use crate::traits::partial::PartialTraitDescriptor;

/// Environment override for the batch pool size.
pub const THREADS_ENV: &str = "NEKOFORGE_THREADS";

/// One subject to render: `{"traits": {...}, "entropy": {...}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    /// Raw trait descriptor. Anything but an object reads as empty.
    #[serde(deserialize_with = "loose_traits")]
    pub traits: PartialTraitDescriptor,
    /// Optional chain entropy. Anything but an object reads as absent.
    #[serde(deserialize_with = "loose_entropy")]
    pub entropy: Option<EntropyInput>,
}

fn loose_traits<'de, D>(d: D) -> Result<PartialTraitDescriptor, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        v @ Value::Object(_) => serde_json::from_value(v).unwrap_or_default(),
        _ => PartialTraitDescriptor::default(),
    })
}

fn loose_entropy<'de, D>(d: D) -> Result<Option<EntropyInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        v @ Value::Object(_) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

/// Options of [`render_many`].
#[derive(Clone, Debug)]
pub struct BatchOpts {
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Raster options shared by every request.
    pub render: RenderOpts,
}

impl Default for BatchOpts {
    /// Reads `NEKOFORGE_THREADS` once; unset, unparsable or zero means rayon defaults.
    fn default() -> Self {
        let threads = std::env::var(THREADS_ENV)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0);
        Self {
            threads,
            render: RenderOpts::default(),
        }
    }
}

/// Render independent requests in parallel on a dedicated pool.
///
/// Results are in input order and identical to rendering each request on its own. Individual
/// failures become empty handles; only pool construction errors are returned.
#[tracing::instrument(skip_all, fields(requests = requests.len(), threads = ?opts.threads))]
pub fn render_many(
    requests: &[RenderRequest],
    size: SurfaceSize,
    opts: &BatchOpts,
) -> ForgeResult<Vec<RenderHandle>> {
    let pool = build_thread_pool(opts.threads)?;
    let handles: Vec<RenderHandle> = pool.install(|| {
        requests
            .par_iter()
            .map(|req| render_with_opts(&req.traits, req.entropy.as_ref(), size, &opts.render))
            .collect()
    });
    debug!(
        empty = handles.iter().filter(|h| h.is_empty()).count(),
        "batch finished"
    );
    Ok(handles)
}

fn build_thread_pool(threads: Option<usize>) -> ForgeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ForgeError::validation(
            "render_many 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ForgeError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/batch.rs"]
mod tests;
