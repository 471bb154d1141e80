// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sequential little-endian `f32` streams.
//!
//! Vectors decode from asset/save streams as consecutive IEEE-754 single
//! precision floats in component order (`x, y, z[, w]`), 4 bytes each. The
//! stream itself belongs to the caller; this module only names the two
//! capabilities the vector types need and implements them for `bytes`.

use bytes::{Buf, BufMut};
use thiserror::Error;

/// Size in bytes of one encoded component.
pub const F32_BYTES: usize = 4;

/// Errors raised while decoding floats from a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The stream ended before a full `f32` could be read.
    #[error("unexpected end of stream: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes required for the next value.
        needed: usize,
        /// Bytes left in the stream.
        remaining: usize,
    },
}

/// Source of little-endian `f32` values.
pub trait FloatReader {
    /// Reads the next value, advancing the stream by 4 bytes.
    fn read_f32(&mut self) -> Result<f32, StreamError>;
}

/// Sink for little-endian `f32` values.
pub trait FloatWriter {
    /// Appends `value` as 4 little-endian bytes.
    fn write_f32(&mut self, value: f32);
}

impl<B: Buf> FloatReader for B {
    #[inline]
    fn read_f32(&mut self) -> Result<f32, StreamError> {
        let remaining = self.remaining();
        if remaining < F32_BYTES {
            return Err(StreamError::UnexpectedEof {
                needed: F32_BYTES,
                remaining,
            });
        }
        Ok(self.get_f32_le())
    }
}

impl<B: BufMut> FloatWriter for B {
    #[inline]
    fn write_f32(&mut self, value: f32) {
        self.put_f32_le(value);
    }
}
