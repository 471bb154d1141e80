// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Homogeneous four-component vector.
//!
//! Every arithmetic operator goes through [`ActiveLanes`]; swapping the
//! backend (see [`crate::lanes`]) never changes this file.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::lanes::{ActiveLanes, Compare, Lane4, Lanes};
use crate::stream::{FloatReader, FloatWriter, StreamError};
use crate::vec3::Vector3f;

/// Four-component `f32` vector, 16-byte aligned.
///
/// Points carry `w = 1` and directions `w = 0` (see
/// [`Vector4f::from_point`] / [`Vector4f::from_direction`]); the arithmetic
/// itself treats `w` like any other lane.
///
/// Equality is lane-wise (`NaN` never compares equal); `!=` is its negation.
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
#[repr(C, align(16))]
pub struct Vector4f {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// Homogeneous W component.
    pub w: f32,
}

impl Vector4f {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// `(1, 1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// `(-1, -1, -1, -1)`.
    pub const NEG_ONE: Self = Self::new(-1.0, -1.0, -1.0, -1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Replicates `xyzw` into every component.
    pub const fn splat(xyzw: f32) -> Self {
        Self::new(xyzw, xyzw, xyzw, xyzw)
    }

    /// Lifts a position: `(v.x, v.y, v.z, 1)`.
    pub const fn from_point(v: Vector3f) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }

    /// Lifts a direction: `(v.x, v.y, v.z, 0)`.
    pub const fn from_direction(v: Vector3f) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Drops `w`. No perspective divide is applied.
    pub const fn to_vector3(self) -> Vector3f {
        Vector3f::new(self.x, self.y, self.z)
    }

    /// Resets every component to `0`.
    pub fn zero_out(&mut self) {
        *self = Self::ZERO;
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    const fn from_lanes(l: Lane4) -> Self {
        Self::new(l[0], l[1], l[2], l[3])
    }

    /// Reads `x, y, z, w` as four little-endian `f32`s (16 bytes).
    pub fn read_from<R: FloatReader>(input: &mut R) -> Result<Self, StreamError> {
        let x = input.read_f32()?;
        let y = input.read_f32()?;
        let z = input.read_f32()?;
        let w = input.read_f32()?;
        Ok(Self::new(x, y, z, w))
    }

    /// Writes `x, y, z, w` as four little-endian `f32`s.
    pub fn write_to<W: FloatWriter>(&self, out: &mut W) {
        out.write_f32(self.x);
        out.write_f32(self.y);
        out.write_f32(self.z);
        out.write_f32(self.w);
    }

    /// Dot product over all four lanes.
    pub fn dot(&self, other: &Self) -> f32 {
        ActiveLanes::dot(self.to_array(), other.to_array())
    }

    /// Squared magnitude over all four lanes.
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
        debug_assert!(mag > 0.0, "cannot normalize a zero-length Vector4f");
        *self * (1.0 / mag)
    }

    /// `true` when `length() > threshold`.
    ///
    /// Like [`Vector3f::is_normalized`], this is a magnitude check.
    pub fn is_normalized(&self, threshold: f32) -> bool {
        self.length() > threshold
    }

    /// `true` if any lane of `self` is `<` the matching lane of `other`.
    pub fn any_lt(&self, other: &Self) -> bool {
        ActiveLanes::any(self.to_array(), other.to_array(), Compare::Lt)
    }

    /// `true` if any lane of `self` is `<=` the matching lane of `other`.
    pub fn any_le(&self, other: &Self) -> bool {
        ActiveLanes::any(self.to_array(), other.to_array(), Compare::Le)
    }

    /// `true` if any lane of `self` is `>` the matching lane of `other`.
    pub fn any_gt(&self, other: &Self) -> bool {
        ActiveLanes::any(self.to_array(), other.to_array(), Compare::Gt)
    }

    /// `true` if any lane of `self` is `>=` the matching lane of `other`.
    pub fn any_ge(&self, other: &Self) -> bool {
        ActiveLanes::any(self.to_array(), other.to_array(), Compare::Ge)
    }

    /// Linear interpolation `a + (b - a) · t`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        *a + (*b - *a) * t
    }

    /// [`Vector4f::lerp`] followed by normalization.
    pub fn nlerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::lerp(a, b, t).normalized()
    }
}

impl PartialEq for Vector4f {
    fn eq(&self, other: &Self) -> bool {
        ActiveLanes::all_eq(self.to_array(), other.to_array())
    }
}

impl From<[f32; 4]> for Vector4f {
    fn from(value: [f32; 4]) -> Self {
        Self::from_lanes(value)
    }
}

impl From<Vector4f> for [f32; 4] {
    fn from(value: Vector4f) -> Self {
        value.to_array()
    }
}

impl AsRef<[f32; 4]> for Vector4f {
    fn as_ref(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }
}

impl AsMut<[f32; 4]> for Vector4f {
    fn as_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }
}

impl Index<usize> for Vector4f {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.as_ref()[idx]
    }
}

impl IndexMut<usize> for Vector4f {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.as_mut()[idx]
    }
}

impl Neg for Vector4f {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_lanes(ActiveLanes::neg(self.to_array()))
    }
}

macro_rules! vector4_binary_ops {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident;)*) => {$(
        impl $op for Vector4f {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_lanes(ActiveLanes::$method(self.to_array(), rhs.to_array()))
            }
        }

        impl $op<f32> for Vector4f {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: f32) -> Self {
                Self::from_lanes(ActiveLanes::$method(self.to_array(), ActiveLanes::splat(rhs)))
            }
        }

        impl $op<Vector4f> for f32 {
            type Output = Vector4f;
            #[inline]
            fn $method(self, rhs: Vector4f) -> Vector4f {
                Vector4f::from_lanes(ActiveLanes::$method(ActiveLanes::splat(self), rhs.to_array()))
            }
        }

        impl $assign for Vector4f {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }

        impl $assign<f32> for Vector4f {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                *self = $op::$method(*self, rhs);
            }
        }
    )*};
}

vector4_binary_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn layout_is_sixteen_aligned_bytes() {
        assert_eq!(core::mem::size_of::<Vector4f>(), 16);
        assert_eq!(core::mem::align_of::<Vector4f>(), 16);
    }

    #[test]
    fn lifting_and_narrowing() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(Vector4f::from_point(v).to_array(), [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(Vector4f::from_direction(v).to_array(), [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(Vector4f::from_point(v).to_vector3(), v);
    }

    #[test]
    fn operators_cover_all_four_lanes() {
        let a = Vector4f::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4f::splat(2.0);
        assert_eq!((a + b).to_array(), [3.0, 4.0, 5.0, 6.0]);
        assert_eq!((a - b).to_array(), [-1.0, 0.0, 1.0, 2.0]);
        assert_eq!((a * b).to_array(), [2.0, 4.0, 6.0, 8.0]);
        assert_eq!((a / b).to_array(), [0.5, 1.0, 1.5, 2.0]);
        assert_eq!((a * 0.5).to_array(), [0.5, 1.0, 1.5, 2.0]);
        assert_eq!((8.0 / a).to_array(), [8.0, 4.0, 8.0 / 3.0, 2.0]);
        assert_eq!((10.0 - a).to_array(), [9.0, 8.0, 7.0, 6.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vector4f::ONE;
        v += 1.0;
        v *= Vector4f::new(1.0, 2.0, 3.0, 4.0);
        v -= Vector4f::ONE;
        v /= 0.5;
        assert_eq!(v.to_array(), [2.0, 6.0, 10.0, 14.0]);
        v.zero_out();
        assert_eq!(v, Vector4f::ZERO);
    }

    #[test]
    fn equality_is_lane_wise() {
        let a = Vector4f::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a, Vector4f::from([1.0, 2.0, 3.0, 4.0]));
        assert_ne!(a, Vector4f::new(1.0, 2.0, 3.0, 5.0));
        let nan = Vector4f::splat(f32::NAN);
        assert_ne!(nan, nan);
        assert_eq!(Vector4f::splat(0.0), Vector4f::splat(-0.0));
    }

    #[test]
    fn length_uses_all_four_lanes() {
        let v = Vector4f::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.length_squared(), 4.0);
        assert_eq!(v.length(), 2.0);
        assert!((v.normalized().length() - 1.0).abs() <= 1e-6);
    }

    #[test]
    fn any_predicates() {
        let a = Vector4f::new(0.0, 0.0, 0.0, 9.0);
        let b = Vector4f::splat(1.0);
        assert!(a.any_lt(&b));
        assert!(a.any_gt(&b));
        assert!(!b.any_gt(&b));
        assert!(b.any_ge(&b));
        assert!(b.any_le(&b));
    }

    #[test]
    fn indexing() {
        let mut v = Vector4f::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        v[0] = -1.0;
        assert_eq!(v.x, -1.0);
    }

    #[test]
    fn stream_round_trip_and_truncation() {
        let v = Vector4f::new(0.25, -1.5, 1e-30, f32::MAX);
        let mut buf = Vec::new();
        v.write_to(&mut buf);
        assert_eq!(buf.len(), 16);
        let mut bytes = Bytes::from(buf);
        assert_eq!(Vector4f::read_from(&mut bytes).unwrap(), v);

        let mut short = Bytes::from_static(&[0; 12]);
        assert!(Vector4f::read_from(&mut short).is_err());
    }

    #[test]
    fn lerp_and_nlerp() {
        let a = Vector4f::ZERO;
        let b = Vector4f::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(Vector4f::lerp(&a, &b, 0.5).to_array(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(Vector4f::nlerp(&a, &b, 0.25).to_array(), [1.0, 0.0, 0.0, 0.0]);
    }
}
