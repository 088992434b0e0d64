//! Optional chain-derived inputs and seed derivation.

pub(crate) mod context;
pub(crate) mod seed;
