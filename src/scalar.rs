//! Scalar helper functions.
//!
//! The mathematical constants live on the [`Float`] trait (eg. [`Float::PI`]).

use crate::Float;

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// # use fastmath::*;
/// approx::assert_relative_eq!(degrees(std::f64::consts::PI), 180.0);
/// ```
#[inline]
pub fn degrees<T: Float>(radians: T) -> T {
    radians * (T::from_f64(180.0) / T::PI)
}

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// # use fastmath::*;
/// approx::assert_relative_eq!(radians(180.0f64), std::f64::consts::PI);
/// ```
#[inline]
pub fn radians<T: Float>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64(180.0))
}

/// Maps `x` from the range `min..=max` to `0..=1`.
#[inline]
pub fn normalize_range<T: Float>(x: T, min: T, max: T) -> T {
    (x - min) / (max - min)
}

/// Scales `x` by `bias`, then offsets it by `shift`.
#[inline]
pub fn shift_bias<T: Float>(x: T, shift: T, bias: T) -> T {
    x * bias + shift
}

/// Returns 0 if `|x|` is within `zone`, and `x` otherwise.
#[inline]
pub fn deadzone<T: Float>(x: T, zone: T) -> T {
    if x.abs() <= zone {
        T::ZERO
    } else {
        x
    }
}

/// Rounds `value` up to the next multiple of `mask + 1`.
///
/// `mask + 1` must be a power of two.
#[inline]
pub const fn align_up_with_mask(value: usize, mask: usize) -> usize {
    (value + mask) & !mask
}

/// Rounds `value` down to a multiple of `mask + 1`.
///
/// `mask + 1` must be a power of two.
#[inline]
pub const fn align_down_with_mask(value: usize, mask: usize) -> usize {
    value & !mask
}

/// Rounds `value` up to a multiple of `alignment`, which must be a power of two.
///
/// # Examples
///
/// ```
/// # use fastmath::*;
/// assert_eq!(align_up(13, 8), 16);
/// assert_eq!(align_up(16, 8), 16);
/// ```
#[inline]
pub const fn align_up(value: usize, alignment: usize) -> usize {
    align_up_with_mask(value, alignment - 1)
}

/// Rounds `value` down to a multiple of `alignment`, which must be a power of two.
#[inline]
pub const fn align_down(value: usize, alignment: usize) -> usize {
    align_down_with_mask(value, alignment - 1)
}

/// Returns whether `value` is a multiple of `alignment`, which must be a power of two.
#[inline]
pub const fn is_aligned(value: usize, alignment: usize) -> bool {
    value & (alignment - 1) == 0
}

/// Divides `value` by `alignment`, rounding up.
#[inline]
pub const fn divide_by_multiple(value: usize, alignment: usize) -> usize {
    (value + alignment - 1) / alignment
}

/// Integer types that can be rounded up to a power of two.
pub trait NextPow2: Sized {
    /// Returns the smallest power of two greater than or equal to `self`.
    ///
    /// Unlike [`u32::next_power_of_two`], 0 maps to 0, and values above the largest power of two
    /// wrap around to 0 instead of panicking.
    fn next_highest_pow2(self) -> Self;
}

impl NextPow2 for u32 {
    fn next_highest_pow2(self) -> Self {
        let mut v = self.wrapping_sub(1);
        v |= v >> 1;
        v |= v >> 2;
        v |= v >> 4;
        v |= v >> 8;
        v |= v >> 16;
        v.wrapping_add(1)
    }
}

impl NextPow2 for u64 {
    fn next_highest_pow2(self) -> Self {
        let mut v = self.wrapping_sub(1);
        v |= v >> 1;
        v |= v >> 2;
        v |= v >> 4;
        v |= v >> 8;
        v |= v >> 16;
        v |= v >> 32;
        v.wrapping_add(1)
    }
}
