// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Three-component float vector.

use core::f32::consts::PI;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::stream::{FloatReader, FloatWriter, StreamError};

/// Three-component `f32` vector used for positions, directions, and scales.
///
/// * World axes: `+Z` is up, `+Y` is forward, `+X` is right. The named
///   constants ([`Vector3f::UP`], [`Vector3f::FORWARD`], …) follow this.
/// * [`Vector3f::cross`] is right-handed: `RIGHT × FORWARD = UP`.
/// * `#[repr(C)]` with no padding, so the layout matches `[f32; 3]` and the
///   platform interchange struct [`crate::InteropVec3f`].
///
/// Ordering helpers (`any_lt`, `any_le`, `any_gt`, `any_ge`) return `true`
/// when **any** component satisfies the predicate. They are deliberately not
/// a `PartialOrd` impl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vector3f {
    /// X component (right).
    pub x: f32,
    /// Y component (forward).
    pub y: f32,
    /// Z component (up).
    pub z: f32,
}

impl Vector3f {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// `(-1, -1, -1)`.
    pub const NEG_ONE: Self = Self::new(-1.0, -1.0, -1.0);

    /// World up, `+Z`.
    pub const UP: Self = Self::new(0.0, 0.0, 1.0);
    /// World down, `-Z`.
    pub const DOWN: Self = Self::new(0.0, 0.0, -1.0);
    /// World forward, `+Y`.
    pub const FORWARD: Self = Self::new(0.0, 1.0, 0.0);
    /// World back, `-Y`.
    pub const BACK: Self = Self::new(0.0, -1.0, 0.0);
    /// World right, `+X`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// World left, `-X`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// `180/π` in every component; multiply to convert radians to degrees.
    pub const RAD_TO_DEG: Self = Self::splat(180.0 / PI);
    /// `π/180` in every component; multiply to convert degrees to radians.
    pub const DEG_TO_RAD: Self = Self::splat(PI / 180.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Replicates `xyz` into every component.
    pub const fn splat(xyz: f32) -> Self {
        Self::new(xyz, xyz, xyz)
    }

    /// Resets every component to `0`.
    pub fn zero_out(&mut self) {
        *self = Self::ZERO;
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Reads `x, y, z` as three little-endian `f32`s (12 bytes).
    pub fn read_from<R: FloatReader>(input: &mut R) -> Result<Self, StreamError> {
        let x = input.read_f32()?;
        let y = input.read_f32()?;
        let z = input.read_f32()?;
        Ok(Self::new(x, y, z))
    }

    /// Writes `x, y, z` as three little-endian `f32`s.
    pub fn write_to<W: FloatWriter>(&self, out: &mut W) {
        out.write_f32(self.x);
        out.write_f32(self.y);
        out.write_f32(self.z);
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product:
    /// `(a.y·b.z − a.z·b.y, a.z·b.x − a.x·b.z, a.x·b.y − a.y·b.x)`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Magnitude.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scales `self` to unit length in place.
    ///
    /// A zero-length vector is a precondition violation (debug-asserted).
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns `self` scaled to unit length.
    ///
    /// A zero-length vector is a precondition violation (debug-asserted).
    pub fn normalized(&self) -> Self {
        let mag = self.length();
        debug_assert!(mag > 0.0, "cannot normalize a zero-length Vector3f");
        *self * (1.0 / mag)
    }

    /// `true` when `length() > threshold`.
    ///
    /// Note this tests for a non-negligible magnitude, not for unit length.
    /// See [`crate::NORMALIZED_THRESHOLD`] for the conventional threshold.
    pub fn is_normalized(&self, threshold: f32) -> bool {
        self.length() > threshold
    }

    /// `true` when every component is finite and at least one is not
    /// negligible (`|c| >= f32::EPSILON`).
    pub fn can_be_normalized(&self) -> bool {
        let finite = self.x.is_finite() && self.y.is_finite() && self.z.is_finite();
        let negligible = self.x.abs() < f32::EPSILON
            && self.y.abs() < f32::EPSILON
            && self.z.abs() < f32::EPSILON;
        finite && !negligible
    }

    /// `true` when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// `true` if any component of `self` is `<` the matching component of `other`.
    pub fn any_lt(&self, other: &Self) -> bool {
        self.x < other.x || self.y < other.y || self.z < other.z
    }

    /// `true` if any component of `self` is `<=` the matching component of `other`.
    pub fn any_le(&self, other: &Self) -> bool {
        self.x <= other.x || self.y <= other.y || self.z <= other.z
    }

    /// `true` if any component of `self` is `>` the matching component of `other`.
    pub fn any_gt(&self, other: &Self) -> bool {
        self.x > other.x || self.y > other.y || self.z > other.z
    }

    /// `true` if any component of `self` is `>=` the matching component of `other`.
    pub fn any_ge(&self, other: &Self) -> bool {
        self.x >= other.x || self.y >= other.y || self.z >= other.z
    }

    /// Linear interpolation `a + (b - a) · t`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        *a + (*b - *a) * t
    }

    /// [`Vector3f::lerp`] followed by normalization.
    pub fn nlerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::lerp(a, b, t).normalized()
    }

    /// Angle between `a` and `b` in radians, in `[0, π]`.
    ///
    /// Returns `0` when either vector has zero magnitude. The cosine ratio is
    /// clamped to `[-1, 1]` so rounding on (anti)parallel inputs cannot
    /// produce `NaN`.
    pub fn angle_diff(a: &Self, b: &Self) -> f32 {
        let mag1 = a.length();
        let mag2 = b.length();
        if mag1 == 0.0 || mag2 == 0.0 {
            return 0.0;
        }
        let cos = (a.dot(b) / (mag1 * mag2)).clamp(-1.0, 1.0);
        libm::acosf(cos)
    }

    /// Spherical linear interpolation from `a` to `b`.
    ///
    /// - `t <= 0` returns `a`, `t >= 1` returns `b`.
    /// - For obtuse pairs (`a · b < 0`) the arc is taken towards `-b`.
    /// - When the normalized dot product has magnitude `>= 1` (parallel or
    ///   anti-parallel inputs, or a zero vector) `a` is returned unchanged.
    ///
    /// The trigonometry runs in `f64`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn slerp(a: &Self, b: &Self, t: f32) -> Self {
        if t <= 0.0 {
            return *a;
        }
        if t >= 1.0 {
            return *b;
        }

        let mag = (a.dot(a) * b.dot(b)).sqrt();
        let prod = a.dot(b) / mag;

        if prod.abs() < 1.0 {
            let sign: f64 = if prod < 0.0 { -1.0 } else { 1.0 };
            let theta = libm::acos(sign * f64::from(prod));
            let s1 = libm::sin(sign * f64::from(t) * theta);
            let d = 1.0 / libm::sin(theta);
            let s0 = libm::sin((1.0 - f64::from(t)) * theta);

            let blend = |ac: f32, bc: f32| ((f64::from(ac) * s0 + f64::from(bc) * s1) * d) as f32;
            return Self::new(blend(a.x, b.x), blend(a.y, b.y), blend(a.z, b.z));
        }
        *a
    }
}

impl From<[f32; 3]> for Vector3f {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Vector3f> for [f32; 3] {
    fn from(value: Vector3f) -> Self {
        value.to_array()
    }
}

impl AsRef<[f32; 3]> for Vector3f {
    fn as_ref(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }
}

impl AsMut<[f32; 3]> for Vector3f {
    fn as_mut(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }
}

impl Index<usize> for Vector3f {
    type Output = f32;

    /// Component by index (`0 = x`, `1 = y`, `2 = z`); panics past `2`.
    fn index(&self, idx: usize) -> &f32 {
        &self.as_ref()[idx]
    }
}

impl IndexMut<usize> for Vector3f {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.as_mut()[idx]
    }
}

impl Neg for Vector3f {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

macro_rules! vector3_binary_ops {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident, $sym:tt;)*) => {$(
        impl $op for Vector3f {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(self.x $sym rhs.x, self.y $sym rhs.y, self.z $sym rhs.z)
            }
        }

        impl $op<f32> for Vector3f {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: f32) -> Self {
                Self::new(self.x $sym rhs, self.y $sym rhs, self.z $sym rhs)
            }
        }

        impl $op<Vector3f> for f32 {
            type Output = Vector3f;
            #[inline]
            fn $method(self, rhs: Vector3f) -> Vector3f {
                Vector3f::new(self $sym rhs.x, self $sym rhs.y, self $sym rhs.z)
            }
        }

        impl $assign for Vector3f {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl $assign<f32> for Vector3f {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                *self = *self $sym rhs;
            }
        }
    )*};
}

vector3_binary_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use core::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn basis_constants_are_right_handed() {
        assert_eq!(Vector3f::RIGHT.cross(&Vector3f::FORWARD), Vector3f::UP);
        assert_eq!(Vector3f::FORWARD.cross(&Vector3f::UP), Vector3f::RIGHT);
        assert_eq!(-Vector3f::UP, Vector3f::DOWN);
        assert_eq!(-Vector3f::FORWARD, Vector3f::BACK);
        assert_eq!(-Vector3f::RIGHT, Vector3f::LEFT);
    }

    #[test]
    fn degree_vectors_convert() {
        let deg = Vector3f::splat(PI) * Vector3f::RAD_TO_DEG;
        assert!((deg.x - 180.0).abs() <= 1e-4);
        let rad = Vector3f::splat(90.0) * Vector3f::DEG_TO_RAD;
        assert!((rad.z - FRAC_PI_2).abs() <= 1e-6);
    }

    #[test]
    fn commuted_scalar_ops() {
        let v = Vector3f::new(1.0, 2.0, 4.0);
        assert_eq!((1.0 + v).to_array(), [2.0, 3.0, 5.0]);
        assert_eq!((1.0 - v).to_array(), [0.0, -1.0, -3.0]);
        assert_eq!((2.0 * v).to_array(), [2.0, 4.0, 8.0]);
        assert_eq!((4.0 / v).to_array(), [4.0, 2.0, 1.0]);
        assert_eq!((v - 1.0).to_array(), [0.0, 1.0, 3.0]);
        assert_eq!((v / 2.0).to_array(), [0.5, 1.0, 2.0]);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vector3f::ONE;
        v += Vector3f::new(1.0, 2.0, 3.0);
        v -= 1.0;
        v *= Vector3f::new(2.0, 2.0, 0.5);
        v /= 2.0;
        assert_eq!(v.to_array(), [1.0, 2.0, 0.75]);
        v.zero_out();
        assert!(v.is_zero());
    }

    #[test]
    fn indexing_reads_and_writes_components() {
        let mut v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn indexing_past_z_panics() {
        let v = Vector3f::ZERO;
        let _ = v[3];
    }

    #[test]
    fn any_component_ordering() {
        let a = Vector3f::new(0.0, 5.0, 5.0);
        let b = Vector3f::ONE;
        assert!(a.any_lt(&b));
        assert!(a.any_gt(&b));
        assert!(a.any_le(&b));
        assert!(a.any_ge(&b));
        assert!(!b.any_lt(&b));
        assert!(b.any_le(&b));
    }

    #[test]
    fn is_normalized_checks_magnitude_threshold() {
        assert!(Vector3f::new(10.0, 0.0, 0.0).is_normalized(crate::NORMALIZED_THRESHOLD));
        assert!(!Vector3f::splat(1e-6).is_normalized(crate::NORMALIZED_THRESHOLD));
    }

    #[test]
    fn can_be_normalized_rejects_tiny_and_infinite() {
        assert!(Vector3f::UP.can_be_normalized());
        assert!(!Vector3f::splat(1e-9).can_be_normalized());
        assert!(!Vector3f::new(f32::INFINITY, 0.0, 0.0).can_be_normalized());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero-length")]
    fn normalize_zero_asserts_in_debug() {
        let mut v = Vector3f::ZERO;
        v.normalize();
    }

    #[test]
    fn angle_diff_degenerate_is_zero() {
        assert_eq!(Vector3f::angle_diff(&Vector3f::ZERO, &Vector3f::UP), 0.0);
        assert_eq!(Vector3f::angle_diff(&Vector3f::UP, &Vector3f::ZERO), 0.0);
        assert_eq!(Vector3f::angle_diff(&Vector3f::UP, &Vector3f::UP), 0.0);
        let right_angle = Vector3f::angle_diff(&Vector3f::UP, &Vector3f::RIGHT);
        assert!((right_angle - FRAC_PI_2).abs() <= 1e-6);
    }

    #[test]
    fn slerp_parallel_returns_a() {
        let a = Vector3f::new(2.0, 0.0, 0.0);
        let b = Vector3f::new(5.0, 0.0, 0.0);
        assert_eq!(Vector3f::slerp(&a, &b, 0.5), a);
        assert_eq!(Vector3f::slerp(&Vector3f::ZERO, &b, 0.5), Vector3f::ZERO);
    }

    #[test]
    fn slerp_quarter_turn_midpoint() {
        let mid = Vector3f::slerp(&Vector3f::RIGHT, &Vector3f::FORWARD, 0.5);
        let expected = core::f32::consts::FRAC_1_SQRT_2;
        assert!((mid.x - expected).abs() <= 1e-6);
        assert!((mid.y - expected).abs() <= 1e-6);
        assert!(mid.z.abs() <= 1e-6);
    }

    #[test]
    fn slerp_obtuse_pair_heads_towards_negated_target() {
        let a = Vector3f::RIGHT;
        let b = Vector3f::new(-1.0, 1.0, 0.0).normalized();
        let r = Vector3f::slerp(&a, &b, 0.5);
        assert!((r.length() - 1.0).abs() <= 1e-5);
        // Arc from +X towards -b = (1, -1)/√2 bends into -Y.
        assert!(r.y < 0.0);
    }
}
