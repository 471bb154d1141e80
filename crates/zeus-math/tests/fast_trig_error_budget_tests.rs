// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use std::f32::consts::PI;

use zeus_math::math::{
    arc_cosine_r, fast_arc_cos_r, fast_cos_r, fast_sin_r, slow_cosine_r, slow_sine_r,
    FAST_ACOS_MAX_ERROR, FAST_SIN_COS_MAX_ERROR,
};

#[test]
fn sin_cos_error_budget_pinned_against_libm_oracle() {
    // Oracle: pure-Rust `libm` in f64, so the reference does not depend on the
    // host libc.
    const SAMPLES: u32 = 16_384;
    let span = 16.0 * PI;

    let mut worst_sin = (0.0_f64, 0.0_f32);
    let mut worst_cos = (0.0_f64, 0.0_f32);
    for i in 0..=SAMPLES {
        let angle = -8.0 * PI + span * (i as f32) / (SAMPLES as f32);
        let reference = f64::from(angle);

        let sin_err = (f64::from(fast_sin_r(angle)) - libm::sin(reference)).abs();
        let cos_err = (f64::from(fast_cos_r(angle)) - libm::cos(reference)).abs();
        if sin_err > worst_sin.0 {
            worst_sin = (sin_err, angle);
        }
        if cos_err > worst_cos.0 {
            worst_cos = (cos_err, angle);
        }
    }

    assert!(
        worst_sin.0 <= f64::from(FAST_SIN_COS_MAX_ERROR),
        "sin error {} at angle {}",
        worst_sin.0,
        worst_sin.1
    );
    assert!(
        worst_cos.0 <= f64::from(FAST_SIN_COS_MAX_ERROR),
        "cos error {} at angle {}",
        worst_cos.0,
        worst_cos.1
    );
}

#[test]
fn acos_error_budget_pinned_against_libm_oracle() {
    const SAMPLES: i32 = 8_192;
    let mut worst = (0.0_f64, 0.0_f32);
    for i in -SAMPLES..=SAMPLES {
        let x = i as f32 / SAMPLES as f32;
        let err = (f64::from(fast_arc_cos_r(x)) - libm::acos(f64::from(x))).abs();
        if err > worst.0 {
            worst = (err, x);
        }
    }
    assert!(
        worst.0 <= f64::from(FAST_ACOS_MAX_ERROR),
        "acos error {} at x = {}",
        worst.0,
        worst.1
    );
}

#[test]
fn acos_stays_in_range_and_is_monotonic() {
    let mut prev = fast_arc_cos_r(-1.0);
    assert!(prev <= PI);
    for i in -999..=1000 {
        let x = i as f32 / 1000.0;
        let y = fast_arc_cos_r(x);
        assert!((0.0..=PI).contains(&y), "acos({x}) = {y} out of range");
        assert!(y <= prev, "acos not monotonic at {x}: {y} > {prev}");
        prev = y;
    }
}

#[test]
fn slow_transcendentals_match_libm() {
    for i in -64..=64 {
        let x = i as f32 * 0.1;
        assert_eq!(slow_sine_r(x).to_bits(), libm::sinf(x).to_bits());
        assert_eq!(slow_cosine_r(x).to_bits(), libm::cosf(x).to_bits());
    }
    for i in -10..=10 {
        let x = i as f32 * 0.1;
        assert_eq!(arc_cosine_r(x).to_bits(), libm::acosf(x).to_bits());
    }
}
