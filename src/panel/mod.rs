//! Text backend: fixed-width character panels built from the same trait vocabulary.

pub(crate) mod advanced;
pub(crate) mod builder;
pub(crate) mod frame;
pub(crate) mod glyphs;
pub(crate) mod layout;
