// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fast `sin`/`cos`/`acos` approximations for float32.
//!
//! These trade a small, pinned error budget for avoiding the platform
//! transcendentals in per-frame code.
//!
//! Strategy:
//! - range-reduce to `[-π, π]` by subtracting the nearest multiple of `TAU`
//! - fold into `[-π/2, π/2]` using `sin(π - x) = sin(x)`
//! - evaluate an odd Taylor polynomial through `x^11` (truncation error
//!   below `6e-8` on the folded interval)
//! - `acos` uses the Abramowitz & Stegun 4.4.45 cubic (`|ε| ≤ 5e-5`)

use core::f32::consts::{FRAC_PI_2, PI, TAU};

/// Maximum absolute error of [`fast_sin_r`]/[`fast_cos_r`] for `|x| ≤ 8π`.
///
/// Beyond that range the error grows with the rounding of the range
/// reduction (roughly one `f32` ULP of `x`).
pub const FAST_SIN_COS_MAX_ERROR: f32 = 1.0e-5;

/// Maximum absolute error of [`fast_arc_cos_r`] over `[-1, 1]`.
pub const FAST_ACOS_MAX_ERROR: f32 = 1.0e-4;

const INV_FACT_3: f32 = 1.0 / 6.0;
const INV_FACT_5: f32 = 1.0 / 120.0;
const INV_FACT_7: f32 = 1.0 / 5_040.0;
const INV_FACT_9: f32 = 1.0 / 362_880.0;
const INV_FACT_11: f32 = 1.0 / 39_916_800.0;

const ACOS_A0: f32 = 1.570_728_8;
const ACOS_A1: f32 = -0.212_114_4;
const ACOS_A2: f32 = 0.074_261_0;
const ACOS_A3: f32 = -0.018_729_3;

/// Reduces `angle` into `[-π, π]`.
#[inline]
fn reduce(angle: f32) -> f32 {
    angle - TAU * libm::roundf(angle / TAU)
}

/// Odd polynomial for `sin` on `[-π/2, π/2]`.
#[inline]
fn sin_poly(x: f32) -> f32 {
    let x2 = x * x;
    x * (1.0
        + x2 * (-INV_FACT_3
            + x2 * (INV_FACT_5 + x2 * (-INV_FACT_7 + x2 * (INV_FACT_9 - x2 * INV_FACT_11)))))
}

/// Approximate sine of `val` (radians).
///
/// Within [`FAST_SIN_COS_MAX_ERROR`] of the exact value for `|val| ≤ 8π`.
/// Non-finite inputs yield `NaN`.
#[inline]
pub fn fast_sin_r(val: f32) -> f32 {
    let r = reduce(val);
    let folded = if r > FRAC_PI_2 {
        PI - r
    } else if r < -FRAC_PI_2 {
        -PI - r
    } else {
        r
    };
    sin_poly(folded)
}

/// Approximate cosine of `val` (radians).
///
/// Evaluated as `sin(π/2 - |r|)` on the reduced angle `r`, so it shares the
/// error budget of [`fast_sin_r`].
#[inline]
pub fn fast_cos_r(val: f32) -> f32 {
    sin_poly(FRAC_PI_2 - reduce(val).abs())
}

/// Approximate arc cosine of `val`, in radians.
///
/// Inputs are clamped to `[-1, 1]`; `NaN` propagates. The result lies in
/// `[0, π]` and is within [`FAST_ACOS_MAX_ERROR`] of the exact value.
#[inline]
pub fn fast_arc_cos_r(val: f32) -> f32 {
    let x = val.clamp(-1.0, 1.0);
    let ax = x.abs();
    let poly = ACOS_A0 + ax * (ACOS_A1 + ax * (ACOS_A2 + ax * ACOS_A3));
    let positive = libm::sqrtf(1.0 - ax) * poly;
    if x < 0.0 {
        PI - positive
    } else {
        positive
    }
}
