// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar math helpers shared by the vector and angle types.
//!
//! Split by cost:
//! - branch-light utilities (`min`/`max`/`clamp`, rounding, conversions),
//! - `fast_*` polynomial trig with pinned error budgets ([`trig`]),
//! - `slow_*`/`arc_*` full-precision transcendentals routed through `libm` so
//!   results do not depend on the host libc,
//! - bit helpers ([`bits`]).

use core::f32::consts::PI;

mod bits;
mod trig;

pub use bits::{floor_power_of_two, pop_count, PopCount};
pub use trig::{fast_arc_cos_r, fast_cos_r, fast_sin_r, FAST_ACOS_MAX_ERROR, FAST_SIN_COS_MAX_ERROR};

/// Returns the smaller of `a` and `b` (`b` when they compare equal or unordered).
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of `a` and `b` (`b` when they compare equal or unordered).
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps `val` into `[lo, hi]` as `max(lo, min(hi, val))`.
///
/// `lo <= hi` is a precondition: it is asserted in debug builds and the result
/// is unspecified in release builds.
#[inline]
pub fn clamp<T: PartialOrd + Copy>(lo: T, val: T, hi: T) -> T {
    debug_assert!(lo <= hi, "invalid clamp range: lo > hi");
    max(lo, min(hi, val))
}

/// Converts radians to degrees (`rad · 180 / π`).
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Converts degrees to radians (`deg · π / 180`).
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Largest integral value not greater than `val`.
#[inline]
pub fn floor_f(val: f32) -> f32 {
    libm::floorf(val)
}

/// Smallest integral value not less than `val`, derived from [`floor_f`].
#[inline]
#[allow(clippy::float_cmp)]
pub fn ceiling_f(val: f32) -> f32 {
    let tmp = floor_f(val);
    if tmp == val {
        tmp
    } else {
        tmp + 1.0
    }
}

/// Rounds to the nearest integral value.
///
/// Negative inputs use `ceiling_f(v - 0.5)`, everything else `floor_f(v + 0.5)`.
/// Both halves go through the single-precision helpers, so results carry
/// `f32` precision even though the signature is `f64`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn round(val: f64) -> f64 {
    if val < 0.0 {
        f64::from(ceiling_f((val - 0.5) as f32))
    } else {
        f64::from(floor_f((val + 0.5) as f32))
    }
}

/// Square root in double precision.
#[inline]
pub fn sqrt_d(val: f64) -> f64 {
    libm::sqrt(val)
}

/// Reciprocal square root in double precision.
#[inline]
pub fn inv_sqrt_d(val: f64) -> f64 {
    1.0 / sqrt_d(val)
}

/// Square root computed through [`sqrt_d`] and rounded to `f32`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn sqrt_f(val: f32) -> f32 {
    sqrt_d(f64::from(val)) as f32
}

/// Reciprocal square root computed through [`sqrt_d`] and rounded to `f32`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn inv_sqrt_f(val: f32) -> f32 {
    (1.0 / sqrt_d(f64::from(val))) as f32
}

/// Full-precision cosine (radians).
#[inline]
pub fn slow_cosine_r(val: f32) -> f32 {
    libm::cosf(val)
}

/// Full-precision sine (radians).
#[inline]
pub fn slow_sine_r(val: f32) -> f32 {
    libm::sinf(val)
}

/// Full-precision tangent (radians).
#[inline]
pub fn slow_tangent_r(val: f32) -> f32 {
    libm::tanf(val)
}

/// Arc sine in radians; `NaN` outside `[-1, 1]`.
#[inline]
pub fn arc_sine_r(val: f32) -> f32 {
    libm::asinf(val)
}

/// Arc tangent in radians.
#[inline]
pub fn arc_tangent_r(val: f32) -> f32 {
    libm::atanf(val)
}

/// Arc cosine in radians; `NaN` outside `[-1, 1]`.
#[inline]
pub fn arc_cosine_r(val: f32) -> f32 {
    libm::acosf(val)
}

/// `a` raised to `b`, evaluated as `exp(b · ln a)` in single precision.
///
/// Only meaningful for `a > 0`.
#[inline]
pub fn pow_f(a: f32, b: f32) -> f32 {
    libm::expf(b * libm::logf(a))
}

/// `a` raised to `b`, evaluated as `exp(b · ln a)` in double precision.
#[inline]
pub fn pow_d(a: f32, b: f32) -> f64 {
    libm::exp(f64::from(b) * libm::log(f64::from(a)))
}
