// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Curve evaluation and triangle-space helpers over [`Vector3f`].
//!
//! All curve functions take four control points `a, b, c, d` and a parameter
//! `t`. Catmull-Rom variants interpolate the `b..c` segment and clamp `t` to
//! `[0, 1]` (returning `b` or `c` outright at the ends).

use crate::vec3::Vector3f;

/// Cubic Bézier point at `t`, evaluated with de Casteljau's algorithm.
///
/// `a` and `d` are the end points; `b` and `c` are the handles.
pub fn bezier_point(a: &Vector3f, b: &Vector3f, c: &Vector3f, d: &Vector3f, t: f32) -> Vector3f {
    let ab = Vector3f::lerp(a, b, t);
    let bc = Vector3f::lerp(b, c, t);
    let cd = Vector3f::lerp(c, d, t);
    let abc = Vector3f::lerp(&ab, &bc, t);
    let bcd = Vector3f::lerp(&bc, &cd, t);
    Vector3f::lerp(&abc, &bcd, t)
}

/// Uniform Catmull-Rom value on the `b..c` segment of a scalar sequence.
pub fn catmull_rom_spline_point_f(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return b;
    }
    if t >= 1.0 {
        return c;
    }
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * b)
        + (c - a) * t
        + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
        + (3.0 * b - a - 3.0 * c + d) * t3)
}

/// Uniform Catmull-Rom point on the `b..c` segment.
pub fn catmull_rom_spline_point(
    a: &Vector3f,
    b: &Vector3f,
    c: &Vector3f,
    d: &Vector3f,
    t: f32,
) -> Vector3f {
    if t <= 0.0 {
        return *b;
    }
    if t >= 1.0 {
        return *c;
    }
    let t2 = t * t;
    let t3 = t2 * t;
    (*b * 2.0
        + (*c - *a) * t
        + (*a * 2.0 - *b * 5.0 + *c * 4.0 - *d) * t2
        + (*b * 3.0 - *a - *c * 3.0 + *d) * t3)
        * 0.5
}

/// Catmull-Rom variant whose tangents keep a constant length along the curve.
///
/// The tangent directions at `b` and `c` are the usual `c - a` and `d - b`,
/// but each is normalized and rescaled to the `b..c` chord length before the
/// Hermite blend. Unevenly spaced control points therefore do not make the
/// segment overshoot. A degenerate direction contributes a zero tangent.
pub fn round_catmull_rom_spline_point(
    a: &Vector3f,
    b: &Vector3f,
    c: &Vector3f,
    d: &Vector3f,
    t: f32,
) -> Vector3f {
    if t <= 0.0 {
        return *b;
    }
    if t >= 1.0 {
        return *c;
    }
    let chord = (*c - *b).length();
    let b_vel = unit_or_zero(*c - *a) * chord;
    let c_vel = unit_or_zero(*d - *b) * chord;

    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    *b * h00 + b_vel * h10 + *c * h01 + c_vel * h11
}

fn unit_or_zero(v: Vector3f) -> Vector3f {
    if v.can_be_normalized() {
        v.normalized()
    } else {
        Vector3f::ZERO
    }
}

/// Maps barycentric weights `bary = (u, v, w)` on triangle `p0 p1 p2` to a
/// world position: `p0·u + p1·v + p2·w`.
///
/// Weights are not renormalized.
pub fn bary_to_world(p0: &Vector3f, p1: &Vector3f, p2: &Vector3f, bary: &Vector3f) -> Vector3f {
    *p0 * bary.x + *p1 * bary.y + *p2 * bary.z
}

/// Component-wise radians → degrees.
pub fn rad_to_deg_vec(rad: &Vector3f) -> Vector3f {
    *rad * Vector3f::RAD_TO_DEG
}

/// Component-wise degrees → radians.
pub fn deg_to_rad_vec(deg: &Vector3f) -> Vector3f {
    *deg * Vector3f::DEG_TO_RAD
}
