pub mod vector2f;

pub use vector2f::*;

/// Decimal digits kept after a rotation unless a vector says otherwise.
pub const DEFAULT_PRECISION: i32 = 10;

/// Clockwise difference between two `atan2` headings given in degrees,
/// folded into `[0, 360)`.
pub fn clockwise_degrees(from: f64, to: f64) -> f32 {
    let diff = (from - to) as f32;
    match diff {
        d if d < 0. => d + 360.,
        d => d,
    }
}
