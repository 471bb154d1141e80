// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Integer bit helpers: population count and power-of-two flooring.

/// Population count via parallel bit summing.
///
/// Implemented for every integer type of width 1–8 bytes. Signed values are
/// reinterpreted as their unsigned counterpart, so `-1_i8` counts 8 bits.
///
/// Enum-backed flag sets participate by forwarding to their `repr` integer,
/// see [`impl_pop_count_for_enum!`](crate::impl_pop_count_for_enum):
///
/// ```
/// use zeus_math::math::PopCount;
///
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Flags {
///     Both = 0b0000_0101,
/// }
///
/// zeus_math::impl_pop_count_for_enum!(Flags => u8);
///
/// assert_eq!(Flags::Both.pop_count(), 2);
/// ```
pub trait PopCount: Copy {
    /// Returns the number of set bits in `self`.
    fn pop_count(self) -> u32;
}

macro_rules! impl_pop_count {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {$(
        impl PopCount for $ty {
            #[inline]
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_lossless
            )]
            fn pop_count(self) -> u32 {
                // 0101.., 00110011.., 00001111.., and the sum of 256^k.
                const M1: $unsigned = 0x5555_5555_5555_5555_u64 as $unsigned;
                const M2: $unsigned = 0x3333_3333_3333_3333_u64 as $unsigned;
                const M4: $unsigned = 0x0f0f_0f0f_0f0f_0f0f_u64 as $unsigned;
                const H01: $unsigned = 0x0101_0101_0101_0101_u64 as $unsigned;
                const TOP_BYTE_SHIFT: usize = (core::mem::size_of::<$unsigned>() - 1) * 8;

                let mut cx = self as $unsigned;
                cx -= (cx >> 1) & M1;
                cx = (cx & M2) + ((cx >> 2) & M2);
                cx = (cx + (cx >> 4)) & M4;
                (cx.wrapping_mul(H01) >> TOP_BYTE_SHIFT) as u32
            }
        }
    )*};
}

impl_pop_count!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
);

/// Implements [`PopCount`] for fieldless `#[repr(int)]` enums by counting the
/// bits of the discriminant.
///
/// Each entry is `Enum => repr`, where `repr` matches the enum's `#[repr]`.
/// The enum must be `Copy`.
#[macro_export]
macro_rules! impl_pop_count_for_enum {
    ($($ty:ty => $repr:ty),* $(,)?) => {$(
        impl $crate::math::PopCount for $ty {
            #[inline]
            fn pop_count(self) -> u32 {
                $crate::math::PopCount::pop_count(self as $repr)
            }
        }
    )*};
}

/// Free-function form of [`PopCount::pop_count`].
#[inline]
pub fn pop_count<T: PopCount>(value: T) -> u32 {
    value.pop_count()
}

/// Largest power of two less than or equal to `x`.
///
/// `x >= 1` is a precondition, asserted in debug builds; the result for
/// non-positive inputs is unspecified.
#[inline]
pub fn floor_power_of_two(x: i32) -> i32 {
    debug_assert!(x >= 1, "floor_power_of_two requires x >= 1, got {x}");
    let mut v = x;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v - (v >> 1)
}
