// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Relative angle in radians.

use core::f32::consts::TAU;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::math::{deg_to_rad, rad_to_deg};

/// A radian-valued angle.
///
/// The stored value is unconstrained until [`RelAngle::make_rel`] or
/// [`RelAngle::as_rel`] maps it into `[0, 2π)`. Equality and ordering compare
/// the raw stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct RelAngle {
    angle: f32,
}

impl RelAngle {
    /// Wraps a raw radian value without canonicalizing it.
    pub const fn new(angle: f32) -> Self {
        Self { angle }
    }

    /// Same as [`RelAngle::new`]; reads better next to [`RelAngle::from_degrees`].
    pub const fn from_radians(angle: f32) -> Self {
        Self::new(angle)
    }

    /// Converts `degrees` to radians and wraps the result.
    pub fn from_degrees(degrees: f32) -> Self {
        Self::new(deg_to_rad(degrees))
    }

    /// Maps `angle` into `[0, 2π)`.
    ///
    /// Subtracts `trunc(angle / 2π) · 2π`, then adds `2π` once if the
    /// remainder is still negative. When `f32` rounding leaves that result
    /// outside `[0, 2π)` (tiny negatives round up to `2π`, huge magnitudes
    /// lose the quotient entirely) the reduction is redone in `f64`.
    /// Non-finite inputs yield `NaN`.
    pub fn make_relative_angle(angle: f32) -> f32 {
        let mut ret = angle - libm::truncf(angle / TAU) * TAU;
        if ret < 0.0 {
            ret += TAU;
        }
        if ret.is_nan() || (0.0..TAU).contains(&ret) {
            return ret;
        }
        #[allow(clippy::cast_possible_truncation)]
        let wide = f64::from(angle).rem_euclid(f64::from(TAU)) as f32;
        // Narrowing can round a remainder just below 2π up to 2π.
        if wide < TAU {
            wide
        } else {
            0.0
        }
    }

    /// Stored value in radians.
    pub const fn as_radians(self) -> f32 {
        self.angle
    }

    /// Stored value converted to degrees.
    pub fn as_degrees(self) -> f32 {
        rad_to_deg(self.angle)
    }

    /// Arc cosine of the stored value itself.
    ///
    /// The stored angle is passed straight to `acos`; it is *not* the cosine
    /// of the angle. Values outside `[-1, 1]` yield `NaN`.
    pub fn arc_cosine(self) -> f32 {
        libm::acosf(self.angle)
    }

    /// Canonicalizes the stored value into `[0, 2π)` in place.
    pub fn make_rel(&mut self) {
        self.angle = Self::make_relative_angle(self.angle);
    }

    /// Returns a canonicalized copy, leaving `self` untouched.
    pub fn as_rel(self) -> Self {
        Self::new(Self::make_relative_angle(self.angle))
    }
}

impl From<f32> for RelAngle {
    fn from(angle: f32) -> Self {
        Self::new(angle)
    }
}

impl From<RelAngle> for f32 {
    fn from(angle: RelAngle) -> Self {
        angle.angle
    }
}

macro_rules! rel_angle_ops {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident, $sym:tt;)*) => {$(
        impl $op for RelAngle {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(self.angle $sym rhs.angle)
            }
        }

        impl $op<f32> for RelAngle {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: f32) -> Self {
                Self::new(self.angle $sym rhs)
            }
        }

        impl $assign for RelAngle {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.angle = self.angle $sym rhs.angle;
            }
        }

        impl $assign<f32> for RelAngle {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                self.angle = self.angle $sym rhs;
            }
        }
    )*};
}

rel_angle_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}
