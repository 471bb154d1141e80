// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! 128-bit packed SSE2 backend (x86_64).
//!
//! SSE and SSE2 are part of the x86_64 baseline, so every intrinsic used here
//! is available on any CPU this module is compiled for. Lanes move in and out
//! of registers through unaligned loads/stores on `[f32; 4]`.
#![allow(unsafe_code, unused_unsafe)]

use core::arch::x86_64::{
    __m128, _mm_add_ps, _mm_add_ss, _mm_cmpeq_ps, _mm_cmpge_ps, _mm_cmpgt_ps, _mm_cmple_ps,
    _mm_cmplt_ps, _mm_cvtss_f32, _mm_div_ps, _mm_loadu_ps, _mm_movehl_ps, _mm_movemask_ps,
    _mm_mul_ps, _mm_set1_ps, _mm_shuffle_ps, _mm_storeu_ps, _mm_sub_ps, _mm_xor_ps,
};

use super::{BackendKind, Compare, Lane4, Lanes};

/// Packed SSE2 arithmetic over `__m128` registers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sse2Lanes;

#[inline]
fn load(lanes: &Lane4) -> __m128 {
    // SAFETY: `lanes` points to four initialized, contiguous `f32`s; the
    // unaligned load has no alignment requirement.
    unsafe { _mm_loadu_ps(lanes.as_ptr()) }
}

#[inline]
fn store(reg: __m128) -> Lane4 {
    let mut out = [0.0_f32; 4];
    // SAFETY: `out` has room for exactly four `f32`s; the unaligned store has
    // no alignment requirement.
    unsafe { _mm_storeu_ps(out.as_mut_ptr(), reg) };
    out
}

impl Lanes for Sse2Lanes {
    const KIND: BackendKind = BackendKind::Sse2;

    #[inline]
    fn add(a: Lane4, b: Lane4) -> Lane4 {
        // SAFETY: SSE is part of the x86_64 baseline.
        store(unsafe { _mm_add_ps(load(&a), load(&b)) })
    }

    #[inline]
    fn sub(a: Lane4, b: Lane4) -> Lane4 {
        // SAFETY: SSE is part of the x86_64 baseline.
        store(unsafe { _mm_sub_ps(load(&a), load(&b)) })
    }

    #[inline]
    fn mul(a: Lane4, b: Lane4) -> Lane4 {
        // SAFETY: SSE is part of the x86_64 baseline.
        store(unsafe { _mm_mul_ps(load(&a), load(&b)) })
    }

    #[inline]
    fn div(a: Lane4, b: Lane4) -> Lane4 {
        // SAFETY: SSE is part of the x86_64 baseline.
        store(unsafe { _mm_div_ps(load(&a), load(&b)) })
    }

    #[inline]
    fn neg(a: Lane4) -> Lane4 {
        // XOR with the sign mask rather than `0 - a`, which would turn +0.0
        // into +0.0 instead of -0.0.
        // SAFETY: SSE is part of the x86_64 baseline.
        store(unsafe { _mm_xor_ps(load(&a), _mm_set1_ps(-0.0)) })
    }

    #[inline]
    fn dot(a: Lane4, b: Lane4) -> f32 {
        // SAFETY: SSE is part of the x86_64 baseline.
        unsafe {
            let prod = _mm_mul_ps(load(&a), load(&b));
            // [p1, p0, p3, p2]
            let swapped = _mm_shuffle_ps::<0b10_11_00_01>(prod, prod);
            // [p0+p1, p0+p1, p2+p3, p2+p3]
            let pairs = _mm_add_ps(prod, swapped);
            // [p2+p3, p2+p3, ..]
            let high = _mm_movehl_ps(pairs, pairs);
            _mm_cvtss_f32(_mm_add_ss(pairs, high))
        }
    }

    #[inline]
    fn all_eq(a: Lane4, b: Lane4) -> bool {
        // SAFETY: SSE is part of the x86_64 baseline.
        let mask = unsafe { _mm_movemask_ps(_mm_cmpeq_ps(load(&a), load(&b))) };
        mask == 0b1111
    }

    #[inline]
    fn any(a: Lane4, b: Lane4, op: Compare) -> bool {
        let (ra, rb) = (load(&a), load(&b));
        // SAFETY: SSE is part of the x86_64 baseline.
        let mask = unsafe {
            match op {
                Compare::Lt => _mm_movemask_ps(_mm_cmplt_ps(ra, rb)),
                Compare::Le => _mm_movemask_ps(_mm_cmple_ps(ra, rb)),
                Compare::Gt => _mm_movemask_ps(_mm_cmpgt_ps(ra, rb)),
                Compare::Ge => _mm_movemask_ps(_mm_cmpge_ps(ra, rb)),
            }
        };
        mask != 0
    }

    #[inline]
    fn splat(value: f32) -> Lane4 {
        // SAFETY: SSE is part of the x86_64 baseline.
        store(unsafe { _mm_set1_ps(value) })
    }
}
