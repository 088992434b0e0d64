//! Public entry points: normalize, compose, wrap the result in a handle.

pub(crate) mod batch;
pub(crate) mod handle;
pub(crate) mod render;
