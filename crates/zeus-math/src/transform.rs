// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rigid orientation + position, and camera-style `look_at` construction.

use crate::vec3::Vector3f;

/// Orthonormal basis plus an origin.
///
/// - `basis` holds the local axes as columns: `[right, forward, up]`,
///   matching the world convention of [`Vector3f`] (`+X` right, `+Y`
///   forward, `+Z` up).
/// - Points transform as `origin + right·x + forward·y + up·z`.
///
/// # Examples
/// ```
/// use zeus_math::{look_at, Vector3f};
/// let t = look_at(&Vector3f::ZERO, &Vector3f::new(0.0, 5.0, 0.0), &Vector3f::UP);
/// assert_eq!(t.forward(), Vector3f::FORWARD);
/// assert_eq!(t.right(), Vector3f::RIGHT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Local axes as columns: right, forward, up.
    pub basis: [Vector3f; 3],
    /// Position of the local origin in world space.
    pub origin: Vector3f,
}

impl Transform {
    /// World-aligned basis at the origin.
    pub const IDENTITY: Self = Self {
        basis: [Vector3f::RIGHT, Vector3f::FORWARD, Vector3f::UP],
        origin: Vector3f::ZERO,
    };

    /// Builds a transform from explicit axes and origin. No orthonormalization
    /// is performed.
    pub const fn from_basis(
        right: Vector3f,
        forward: Vector3f,
        up: Vector3f,
        origin: Vector3f,
    ) -> Self {
        Self {
            basis: [right, forward, up],
            origin,
        }
    }

    /// Local `+X` axis.
    pub const fn right(&self) -> Vector3f {
        self.basis[0]
    }

    /// Local `+Y` axis.
    pub const fn forward(&self) -> Vector3f {
        self.basis[1]
    }

    /// Local `+Z` axis.
    pub const fn up(&self) -> Vector3f {
        self.basis[2]
    }

    /// Rotates a direction into world space (origin ignored).
    pub fn transform_direction(&self, v: &Vector3f) -> Vector3f {
        self.basis[0] * v.x + self.basis[1] * v.y + self.basis[2] * v.z
    }

    /// Maps a local point into world space.
    pub fn transform_point(&self, p: &Vector3f) -> Vector3f {
        self.origin + self.transform_direction(p)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Candidates whose cross product with forward is shorter than this fraction
/// of their own length count as parallel to forward.
const PARALLEL_EPSILON: f32 = 1.0e-3;

/// Builds a transform at `pos` whose forward axis points at `look_pos`.
///
/// - If `look_pos - pos` cannot be normalized, forward falls back to
///   [`Vector3f::FORWARD`].
/// - The up hint is the first of `up`, [`Vector3f::UP`], [`Vector3f::FORWARD`]
///   with `|forward × c| > 1e-3 · |c|`. Zero, non-finite and near-parallel
///   hints are skipped.
/// - The basis comes from cross products only: `right = forward × hint`,
///   `up = right × forward`, then `right = forward × up` again so all three
///   axes are unit length and mutually orthogonal to `f32` rounding.
pub fn look_at(pos: &Vector3f, look_pos: &Vector3f, up: &Vector3f) -> Transform {
    let dir = *look_pos - *pos;
    let look = if dir.can_be_normalized() {
        dir.normalized()
    } else {
        Vector3f::FORWARD
    };

    let hint = [*up, Vector3f::UP, Vector3f::FORWARD]
        .into_iter()
        .find(|c| look.cross(c).length() > PARALLEL_EPSILON * c.length())
        .unwrap_or(Vector3f::UP);

    let side = look.cross(&hint).normalized();
    let up_vec = side.cross(&look).normalized();
    let right = look.cross(&up_vec).normalized();
    Transform::from_basis(right, look, up_vec, *pos)
}
