// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Two-component float and integer vectors.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::stream::{FloatReader, FloatWriter, StreamError};

/// Two-component `f32` vector (screen/UV space).
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vector2f {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vector2f {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(-1, -1)`.
    pub const NEG_ONE: Self = Self::new(-1.0, -1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Replicates `xy` into both components.
    pub const fn splat(xy: f32) -> Self {
        Self::new(xy, xy)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Reads `x, y` as two little-endian `f32`s (8 bytes).
    pub fn read_from<R: FloatReader>(input: &mut R) -> Result<Self, StreamError> {
        let x = input.read_f32()?;
        let y = input.read_f32()?;
        Ok(Self::new(x, y))
    }

    /// Writes `x, y` as two little-endian `f32`s.
    pub fn write_to<W: FloatWriter>(&self, out: &mut W) {
        out.write_f32(self.x);
        out.write_f32(self.y);
    }

    /// Sum of component-wise products.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Magnitude.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns `self` scaled to unit length.
    ///
    /// A zero-length vector is a precondition violation (debug-asserted).
    pub fn normalized(&self) -> Self {
        let mag = self.length();
        debug_assert!(mag > 0.0, "cannot normalize a zero-length Vector2f");
        *self * (1.0 / mag)
    }
}

impl From<[f32; 2]> for Vector2f {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl Add for Vector2f {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2f {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vector2f {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Vector2f {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Mul<f32> for Vector2f {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2f> for f32 {
    type Output = Vector2f;
    fn mul(self, rhs: Vector2f) -> Vector2f {
        rhs * self
    }
}

impl Div<f32> for Vector2f {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2f {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2f {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2f {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector2f {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vector2f {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Two-component `i32` vector (pixel/grid space).
///
/// Arithmetic follows `i32` semantics: division truncates toward zero and
/// overflow panics in debug builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Vector2i {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
}

impl Vector2i {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a vector from components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Narrows a float vector, truncating each component toward zero.
    ///
    /// Out-of-range components saturate at `i32::MIN`/`i32::MAX`; `NaN` maps
    /// to `0`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_vector2f_truncated(v: Vector2f) -> Self {
        Self::new(v.x as i32, v.y as i32)
    }

    /// Widens to a float vector.
    ///
    /// Exact for magnitudes up to `2^24`; larger values round to the nearest
    /// representable `f32`.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vector2f(self) -> Vector2f {
        Vector2f::new(self.x as f32, self.y as f32)
    }
}

impl Add for Vector2i {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2i {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vector2i {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Vector2i {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Mul<i32> for Vector2i {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
