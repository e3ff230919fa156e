#![deny(clippy::unwrap_used)]
pub mod math;

pub use math::{Vector2f, ZeroLengthError, DEFAULT_PRECISION};
