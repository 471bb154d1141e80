// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! 4-lane `f32` arithmetic backends.
//!
//! [`Lanes`] is the single arithmetic surface `Vector4f` is written against.
//! Two implementations exist:
//! - [`ScalarLanes`]: plain per-lane arithmetic, available on every target.
//! - `Sse2Lanes`: 128-bit packed SSE2 intrinsics, x86_64 only.
//!
//! [`ActiveLanes`] is resolved once here, at build time, from the `simd`
//! cargo feature and the target architecture. No other module inspects
//! `cfg(target_arch)` to pick a code path.
//!
//! Parity contract:
//! - `add`/`sub`/`mul`/`div`/`neg` and every comparison are bit-identical
//!   across backends (both are IEEE-754 single precision, round-to-nearest).
//! - `dot` may differ in the last bits: the packed backend sums lanes
//!   pairwise, the scalar backend sums sequentially.

mod scalar;
#[cfg(target_arch = "x86_64")]
mod sse2;

pub use scalar::ScalarLanes;
#[cfg(target_arch = "x86_64")]
pub use sse2::Sse2Lanes;

use crate::cpu::CpuInfo;

/// Four `f32` lanes in `x, y, z, w` order.
pub type Lane4 = [f32; 4];

/// Lane-wise ordering predicate used by [`Lanes::any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compare {
    /// `a < b`
    Lt,
    /// `a <= b`
    Le,
    /// `a > b`
    Gt,
    /// `a >= b`
    Ge,
}

impl Compare {
    /// Evaluates the predicate for a single pair of lanes.
    #[inline]
    pub fn eval(self, a: f32, b: f32) -> bool {
        match self {
            Self::Lt => a < b,
            Self::Le => a <= b,
            Self::Gt => a > b,
            Self::Ge => a >= b,
        }
    }
}

/// Identifies a lane backend for diagnostics and capability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Portable per-lane arithmetic.
    Scalar,
    /// 128-bit packed SSE2 arithmetic.
    Sse2,
}

impl BackendKind {
    /// Short, stable backend name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sse2 => "sse2",
        }
    }

    /// Returns `true` when `cpu` reports every feature this backend needs.
    pub fn is_supported_by(self, cpu: &CpuInfo) -> bool {
        match self {
            Self::Scalar => true,
            Self::Sse2 => cpu.sse1 && cpu.sse2,
        }
    }
}

/// Arithmetic over four `f32` lanes.
///
/// Implementations are stateless; every method is an associated function so
/// callers select a backend purely through the type parameter.
pub trait Lanes {
    /// Which backend this is.
    const KIND: BackendKind;

    /// Lane-wise `a + b`.
    fn add(a: Lane4, b: Lane4) -> Lane4;
    /// Lane-wise `a - b`.
    fn sub(a: Lane4, b: Lane4) -> Lane4;
    /// Lane-wise `a * b`.
    fn mul(a: Lane4, b: Lane4) -> Lane4;
    /// Lane-wise `a / b`.
    fn div(a: Lane4, b: Lane4) -> Lane4;
    /// Lane-wise negation (sign-bit flip, so `-0.0` and `NaN` signs match scalar `-x`).
    fn neg(a: Lane4) -> Lane4;
    /// Sum of lane-wise products.
    fn dot(a: Lane4, b: Lane4) -> f32;
    /// `true` when every lane compares equal.
    fn all_eq(a: Lane4, b: Lane4) -> bool;
    /// `true` when `op` holds for at least one lane.
    fn any(a: Lane4, b: Lane4, op: Compare) -> bool;

    /// Replicates `value` into all four lanes.
    #[inline]
    fn splat(value: f32) -> Lane4 {
        [value; 4]
    }
}

/// The backend `Vector4f` is compiled against.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub type ActiveLanes = Sse2Lanes;

/// The backend `Vector4f` is compiled against.
#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub type ActiveLanes = ScalarLanes;

/// Kind of [`ActiveLanes`], for logging and capability checks.
pub const ACTIVE_BACKEND: BackendKind = <ActiveLanes as Lanes>::KIND;
