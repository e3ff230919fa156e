use std::{
    f64::consts::PI,
    fmt,
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

use tracing::{debug, trace};

use super::{clockwise_degrees, DEFAULT_PRECISION};

/// Returned by [`Vector2f::try_normalized`] when the vector has no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroLengthError;

impl fmt::Display for ZeroLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot normalize a vector of length zero")
    }
}

impl std::error::Error for ZeroLengthError {}

/// A position, direction or rotation in 2D space.
///
/// Angles follow a clockwise convention (y grows downward on screen), so
/// rotating `RIGHT` by 90 degrees gives `DOWN`.
#[derive(Clone, Copy, Debug)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
    /// number of decimal digits kept after a rotation
    pub precision: i32,
}

impl Vector2f {
    pub const ZERO: Self = Self::new(0., 0.);
    pub const ONE: Self = Self::new(1., 1.);
    pub const NEGATIVE_ONE: Self = Self::new(-1., -1.);
    pub const UP: Self = Self::new(0., 1.);
    pub const DOWN: Self = Self::new(0., -1.);
    pub const LEFT: Self = Self::new(-1., 0.);
    pub const RIGHT: Self = Self::new(1., 0.);

    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Exact component comparison, same as `==`.
    pub fn equals(&self, other: &Vector2f) -> bool {
        self == other
    }

    pub fn debug_string(&self) -> String {
        self.to_string()
    }

    pub fn println_debug_string(&self) {
        println!("{}", self.debug_string());
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_to(&mut self, target: Vector2f) {
        self.set(target.x, target.y);
    }

    /// A fresh vector with the same components. The precision goes back to the
    /// default, a plain `let c = v` keeps it.
    pub fn copy(&self) -> Self {
        Self::new(self.x, self.y)
    }

    pub fn magnitude(&self) -> f32 {
        let (x, y) = (self.x as f64, self.y as f64);
        (x.powi(2) + y.powi(2)).sqrt() as f32
    }

    /// Scales the vector so its magnitude becomes `mag`. A negative `mag` flips
    /// the direction. A zero vector ends up with NaN components.
    pub fn set_magnitude(&mut self, mag: f32) {
        let current = self.magnitude();
        if current == 0. {
            debug!("set_magnitude on a zero length vector, components become NaN");
        }
        self.set(mag / current * self.x, mag / current * self.y);
    }

    /// In place version of [`Vector2f::normalized`], keeps the precision.
    pub fn normalize(&mut self) {
        let unit = self.normalized();
        self.set_to(unit);
    }

    /// Unit vector with the same direction and the default precision. A zero
    /// vector gives NaN components.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0. {
            debug!("normalizing a zero length vector, components become NaN");
        }
        Self::new(self.x / mag, self.y / mag)
    }

    pub fn try_normalized(&self) -> Result<Self, ZeroLengthError> {
        if self.magnitude() == 0. {
            return Err(ZeroLengthError);
        }
        Ok(self.normalized())
    }

    /// Clamps x into `[min_x, max_x]` and y into `[min_y, max_y]`. The max bound
    /// is checked first, so it wins when `min > max`.
    pub fn restrict(&mut self, min_x: f32, max_x: f32, min_y: f32, max_y: f32) {
        let clamped = self.restricted(min_x, max_x, min_y, max_y);
        self.set_to(clamped);
    }

    /// Same clamp as [`Vector2f::restrict`], returned with the default precision.
    pub fn restricted(&self, min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self::new(
            clamp_max_first(self.x, min_x, max_x),
            clamp_max_first(self.y, min_y, max_y),
        )
    }

    /// Older clamp where the y result is derived from x clamped into the y
    /// bounds. Kept for callers that depend on it.
    pub fn restricted_from_x(
        &self,
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
    ) -> Self {
        Self::new(
            clamp_max_first(self.x, min_x, max_x),
            clamp_max_first(self.x, min_y, max_y),
        )
    }

    /// Clockwise angle in degrees from `UP` to this vector, in `[0, 360)`.
    pub fn absolute_angle(&self) -> f32 {
        Self::angle(Self::UP, *self)
    }

    /// In place version of [`Vector2f::rotated`], keeps the precision.
    pub fn rotate(&mut self, degrees: f32) {
        let (x, y) = self.rotated_components(degrees);
        self.set(x, y);
    }

    /// Rotates about the origin, clockwise for positive `degrees`. Each
    /// component is rounded to this vector's `precision` decimal digits, the
    /// returned vector itself gets the default precision.
    pub fn rotated(&self, degrees: f32) -> Self {
        let (x, y) = self.rotated_components(degrees);
        Self::new(x, y)
    }

    fn rotated_components(&self, degrees: f32) -> (f32, f32) {
        let radians = (360. - degrees) as f64 * (PI / 180.);
        let (sin, cos) = radians.sin_cos();
        let (x, y) = (self.x as f64, self.y as f64);
        trace!(degrees, precision = self.precision, "rotating vector");
        (
            round_to(x * cos - y * sin, self.precision),
            round_to(x * sin + y * cos, self.precision),
        )
    }

    pub fn add(&mut self, other: Vector2f) {
        self.set(self.x + other.x, self.y + other.y);
    }

    pub fn add_scalar(&mut self, num: f32) {
        self.set(self.x + num, self.y + num);
    }

    pub fn subt(&mut self, other: Vector2f) {
        self.set(self.x - other.x, self.y - other.y);
    }

    pub fn subt_scalar(&mut self, num: f32) {
        self.set(self.x - num, self.y - num);
    }

    pub fn mult(&mut self, other: Vector2f) {
        self.set(self.x * other.x, self.y * other.y);
    }

    pub fn mult_scalar(&mut self, num: f32) {
        self.set(self.x * num, self.y * num);
    }

    pub fn div(&mut self, other: Vector2f) {
        self.set(self.x / other.x, self.y / other.y);
    }

    pub fn div_scalar(&mut self, num: f32) {
        self.set(self.x / num, self.y / num);
    }

    pub fn distance_to(&self, target: Vector2f) -> f32 {
        Self::distance(*self, target)
    }

    /// Moves `distance` along the straight line to `target`. Moving towards
    /// our own position yields NaN components.
    pub fn move_towards(&mut self, target: Vector2f, distance: f32) {
        let mut movement = Self::new(target.x - self.x, target.y - self.y);
        movement.normalize();
        movement.set_magnitude(distance);
        self.add(movement);
    }

    /// Clockwise angle in degrees from `from` to `to`, in `[0, 360)`.
    pub fn angle(from: Vector2f, to: Vector2f) -> f32 {
        clockwise_degrees(
            (from.y as f64).atan2(from.x as f64).to_degrees(),
            (to.y as f64).atan2(to.x as f64).to_degrees(),
        )
    }

    pub fn distance(a: Vector2f, b: Vector2f) -> f32 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).abs().sqrt()
    }

    pub fn dot_product(a: Vector2f, b: Vector2f) -> f32 {
        a.x * b.x + a.y * b.y
    }

    /// The perpendicular dot product, swapping the arguments flips its sign.
    pub fn cross_product(a: Vector2f, b: Vector2f) -> f32 {
        a.x * b.y - a.y * b.x
    }

    /// `t` is not clamped, values outside `[0, 1]` extrapolate.
    pub fn lerp(a: Vector2f, b: Vector2f, t: f32) -> Self {
        Self::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

fn clamp_max_first(value: f32, min: f32, max: f32) -> f32 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Narrows to f32 first, then rounds to `digits` decimals. Past 308 digits
/// the scale factor overflows f64 and every value rounds to zero.
fn round_to(value: f64, digits: i32) -> f32 {
    let factor = 10f64.powi(digits);
    if factor.is_infinite() {
        return 0.;
    }
    ((value as f32 as f64 * factor).round() / factor) as f32
}

impl Default for Vector2f {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Vector2f {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

impl AddAssign for Vector2f {
    fn add_assign(&mut self, rhs: Self) {
        self.add(rhs);
    }
}

impl AddAssign<f32> for Vector2f {
    fn add_assign(&mut self, rhs: f32) {
        self.add_scalar(rhs);
    }
}

impl SubAssign for Vector2f {
    fn sub_assign(&mut self, rhs: Self) {
        self.subt(rhs);
    }
}

impl SubAssign<f32> for Vector2f {
    fn sub_assign(&mut self, rhs: f32) {
        self.subt_scalar(rhs);
    }
}

impl MulAssign for Vector2f {
    fn mul_assign(&mut self, rhs: Self) {
        self.mult(rhs);
    }
}

impl MulAssign<f32> for Vector2f {
    fn mul_assign(&mut self, rhs: f32) {
        self.mult_scalar(rhs);
    }
}

impl DivAssign for Vector2f {
    fn div_assign(&mut self, rhs: Self) {
        self.div(rhs);
    }
}

impl DivAssign<f32> for Vector2f {
    fn div_assign(&mut self, rhs: f32) {
        self.div_scalar(rhs);
    }
}
