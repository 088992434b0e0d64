//! Trait vocabulary shared by both backends, plus the lenient input model and its normalizer.

pub(crate) mod model;
pub(crate) mod normalize;
pub(crate) mod palette;
pub(crate) mod partial;
