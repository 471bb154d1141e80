// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::float_cmp, clippy::unwrap_used)]
use std::f32::consts::TAU;

use proptest::prelude::*;

use zeus_math::cpu::{cpu_features, detect_cpu};
use zeus_math::lanes::ACTIVE_BACKEND;
use zeus_math::math::{clamp, floor_power_of_two, max, min, pop_count, round};
use zeus_math::RelAngle;

proptest! {
    #[test]
    fn clamp_stays_within_bounds(a in -1.0e6_f32..1.0e6, b in -1.0e6_f32..1.0e6, v in any::<i32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        #[allow(clippy::cast_precision_loss)]
        let val = v as f32;
        let c = clamp(lo, val, hi);
        prop_assert!(lo <= c && c <= hi);
        if (lo..=hi).contains(&val) {
            prop_assert_eq!(c, val);
        }
        prop_assert_eq!(c, max(lo, min(hi, val)));
    }

    #[test]
    fn pop_count_matches_count_ones(x in any::<u64>()) {
        prop_assert_eq!(pop_count(x), x.count_ones());
        #[allow(clippy::cast_possible_truncation)]
        let (b, h, w) = (x as u8, x as u16, x as u32);
        prop_assert_eq!(pop_count(b), b.count_ones());
        prop_assert_eq!(pop_count(h), h.count_ones());
        prop_assert_eq!(pop_count(w), w.count_ones());
        #[allow(clippy::cast_possible_wrap)]
        let signed = x as i64;
        prop_assert_eq!(pop_count(signed), signed.count_ones());
    }

    #[test]
    fn floor_power_of_two_brackets_input(x in 1_i32..=i32::MAX) {
        let p = floor_power_of_two(x);
        prop_assert_eq!(p.count_ones(), 1);
        prop_assert!(p <= x);
        prop_assert!(i64::from(p) * 2 > i64::from(x));
    }

    #[test]
    fn round_is_within_half_of_input(v in -1.0e6_f64..1.0e6) {
        let r = round(v);
        prop_assert_eq!(r.fract(), 0.0);
        // The f32 path can add one ulp of the narrowed input.
        prop_assert!((r - v).abs() <= 0.5 + 0.07);
    }

    #[test]
    fn relative_angle_lands_in_one_turn(a in any::<f32>().prop_filter("finite", |v| v.is_finite())) {
        let r = RelAngle::make_relative_angle(a);
        prop_assert!((0.0..TAU).contains(&r), "{a} -> {r}");
    }

    #[test]
    fn relative_angle_is_congruent_to_input(a in -1.0e3_f32..1.0e3) {
        let r = RelAngle::make_relative_angle(a);
        let turns = (f64::from(a) - f64::from(r)) / f64::from(TAU);
        prop_assert!((turns - turns.round()).abs() <= 1.0e-3, "{a} -> {r}, turns {turns}");
    }

    #[test]
    fn as_rel_is_idempotent(a in any::<f32>().prop_filter("finite", |v| v.is_finite())) {
        let once = RelAngle::new(a).as_rel();
        prop_assert_eq!(once.as_rel(), once);
    }
}

#[test]
fn relative_angle_rounding_edges() {
    for a in [-1.0e-8_f32, -f32::MIN_POSITIVE, f32::MAX] {
        let r = RelAngle::new(a).as_rel().as_radians();
        assert!((0.0..TAU).contains(&r), "{a} -> {r}");
    }
}

#[test]
fn round_ties_move_away_from_zero() {
    assert_eq!(round(2.5), 3.0);
    assert_eq!(round(0.5), 1.0);
    assert_eq!(round(-2.5), -3.0);
    assert_eq!(round(-0.5), -1.0);
    assert_eq!(round(-2.4), -2.0);
}

#[test]
fn cpu_info_is_detected_once_across_threads() {
    let here = cpu_features();
    let addr = std::ptr::from_ref(here) as usize;
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| std::ptr::from_ref(detect_cpu()) as usize))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), addr);
    }
}

#[test]
fn active_backend_is_supported_by_host() {
    assert!(ACTIVE_BACKEND.is_supported_by(cpu_features()));
}
