//! Arithmetic helpers shared across the codec layers.

pub(crate) mod modular;
