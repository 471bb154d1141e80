// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Portable per-lane backend.

use super::{BackendKind, Compare, Lane4, Lanes};

/// Plain per-lane `f32` arithmetic; the fallback on every target.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarLanes;

impl Lanes for ScalarLanes {
    const KIND: BackendKind = BackendKind::Scalar;

    #[inline]
    fn add(a: Lane4, b: Lane4) -> Lane4 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
    }

    #[inline]
    fn sub(a: Lane4, b: Lane4) -> Lane4 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
    }

    #[inline]
    fn mul(a: Lane4, b: Lane4) -> Lane4 {
        [a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]]
    }

    #[inline]
    fn div(a: Lane4, b: Lane4) -> Lane4 {
        [a[0] / b[0], a[1] / b[1], a[2] / b[2], a[3] / b[3]]
    }

    #[inline]
    fn neg(a: Lane4) -> Lane4 {
        [-a[0], -a[1], -a[2], -a[3]]
    }

    #[inline]
    fn dot(a: Lane4, b: Lane4) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
    }

    #[inline]
    #[allow(clippy::float_cmp)]
    fn all_eq(a: Lane4, b: Lane4) -> bool {
        a[0] == b[0] && a[1] == b[1] && a[2] == b[2] && a[3] == b[3]
    }

    #[inline]
    fn any(a: Lane4, b: Lane4, op: Compare) -> bool {
        a.iter().zip(b.iter()).any(|(&l, &r)| op.eval(l, r))
    }
}
