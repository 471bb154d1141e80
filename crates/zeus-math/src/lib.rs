// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! zeus-math: value-type linear algebra primitives for the Zeus engine.
//!
//! The crate provides the arithmetic kernel consumed by the engine's
//! transform, projection, and collision code: 2D/3D/4D vectors, a relative
//! angle wrapper, and the scalar helpers they depend on. Every type is a
//! `Copy` value with operator overloads; nothing allocates and nothing is
//! shared between operations.
//!
//! `Vector4f` arithmetic is routed through a 4-lane backend (see [`lanes`]).
//! The backend is picked once at build time: packed SSE2 on x86_64 when the
//! `simd` feature is enabled (the default), plain per-lane scalar code
//! otherwise.
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

/// Scalar helpers: clamp/min/max, rounding, square roots, fast trig, bit counting.
pub mod math;

/// Host CPU capability detection (written once, read-only afterwards).
pub mod cpu;
/// 4-lane float backends used by [`Vector4f`].
pub mod lanes;
/// Little-endian float stream collaborators used to decode vectors.
pub mod stream;

mod angle;
mod interop;
mod spline;
mod transform;
mod vec2;
mod vec3;
mod vec4;

// Re-exports for stable public API
/// Radian angle wrapper with `[0, 2π)` canonicalization.
pub use angle::RelAngle;
/// Plain-data interchange structs for platform/asset code.
pub use interop::{InteropVec3f, InteropVec4f};
/// Curve and triangle interpolation helpers.
pub use spline::{
    bary_to_world, bezier_point, catmull_rom_spline_point, catmull_rom_spline_point_f,
    deg_to_rad_vec, rad_to_deg_vec, round_catmull_rom_spline_point,
};
/// Camera/orientation construction.
pub use transform::{look_at, Transform};
/// Two-component vectors.
pub use vec2::{Vector2f, Vector2i};
/// Three-component vector.
pub use vec3::Vector3f;
/// Four-component (homogeneous) vector.
pub use vec4::Vector4f;

/// Default magnitude threshold used by `is_normalized` callers.
///
/// Matches the historical default argument of the engine's vector types.
pub const NORMALIZED_THRESHOLD: f32 = 1e-4;
