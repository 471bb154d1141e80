// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Plain-data vector structs for platform and asset boundaries.
//!
//! These carry no behavior; they exist so FFI and serialized layouts can name
//! a fixed `[f32; N]` shape independent of the engine vector types.

use bytemuck::{Pod, Zeroable};

use crate::vec3::Vector3f;
use crate::vec4::Vector4f;

/// Three floats in `x, y, z` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct InteropVec3f {
    /// Components in `x, y, z` order.
    pub vec: [f32; 3],
}

/// Four floats in `x, y, z, w` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct InteropVec4f {
    /// Components in `x, y, z, w` order.
    pub vec: [f32; 4],
}

impl From<Vector3f> for InteropVec3f {
    fn from(v: Vector3f) -> Self {
        bytemuck::cast(v)
    }
}

impl From<InteropVec3f> for Vector3f {
    fn from(v: InteropVec3f) -> Self {
        bytemuck::cast(v)
    }
}

impl From<Vector4f> for InteropVec4f {
    fn from(v: Vector4f) -> Self {
        Self { vec: v.to_array() }
    }
}

impl From<InteropVec4f> for Vector4f {
    fn from(v: InteropVec4f) -> Self {
        Self::from(v.vec)
    }
}
