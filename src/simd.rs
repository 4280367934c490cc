//! Vectorized kernels for `f32` operations.
//!
//! Which implementation is compiled in depends on the target features enabled at build time. The
//! `no-intrinsics` feature forces the portable one.

#[cfg(target_arch = "x86")]
#[allow(unused_imports)]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
#[allow(unused_imports)]
use core::arch::x86_64::*;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse4.1",
        not(feature = "no-intrinsics"),
    ))] {
        /// Dot product of two 4-element vectors.
        #[inline]
        pub(crate) fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
            unsafe {
                let a = _mm_loadu_ps(a.as_ptr());
                let b = _mm_loadu_ps(b.as_ptr());
                // Multiply all 4 lanes, write the sum into lane 0.
                _mm_cvtss_f32(_mm_dp_ps::<0xf1>(a, b))
            }
        }
    } else if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse3",
        not(feature = "no-intrinsics"),
    ))] {
        /// Dot product of two 4-element vectors.
        #[inline]
        pub(crate) fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
            unsafe {
                let prod = _mm_mul_ps(_mm_loadu_ps(a.as_ptr()), _mm_loadu_ps(b.as_ptr()));
                let sum = _mm_hadd_ps(prod, prod);
                _mm_cvtss_f32(_mm_hadd_ps(sum, sum))
            }
        }
    } else if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2",
        not(feature = "no-intrinsics"),
    ))] {
        /// Dot product of two 4-element vectors.
        #[inline]
        pub(crate) fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
            unsafe {
                let prod = _mm_mul_ps(_mm_loadu_ps(a.as_ptr()), _mm_loadu_ps(b.as_ptr()));
                // (x+z, y+w, ..), then (x+z) + (y+w)
                let sum = _mm_add_ps(prod, _mm_movehl_ps(prod, prod));
                let sum = _mm_add_ss(sum, _mm_shuffle_ps::<0b01>(sum, sum));
                _mm_cvtss_f32(sum)
            }
        }
    } else {
        /// Dot product of two 4-element vectors.
        #[inline]
        pub(crate) fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
            a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
        }
    }
}
