//! Numeric traits that [`Vector`], [`Matrix`] and [`Quat`] are generic over.
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix
//! [`Quat`]: crate::Quat

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Four quadrant arctangent of `self` (y) and `other` (x).
    fn atan2(self, other: Self) -> Self;

    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Copy,
    {
        (self.sin(), self.cos())
    }
}

/// Types that support the hyperbolic functions.
pub trait Hyperbolic {
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support computing their absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Lossy conversion between primitive numeric types, with the semantics of an `as` cast.
///
/// Used for element-type conversion, eg. by [`Vector::cast`](crate::Vector::cast).
pub trait Cast<U> {
    fn cast(self) -> U;
}

/// A trait for numeric types that support basic signed arithmetic operations.
///
/// Implemented for the signed integer types, [`f32`] and [`f64`].
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
    /// Sums up the element-wise products of `a` and `b`.
    ///
    /// This is the kernel behind [`Vector::dot`](crate::Vector::dot). Types with a faster way of
    /// computing it for some lengths override it.
    #[doc(hidden)]
    #[inline]
    fn dot_array<const N: usize>(a: [Self; N], b: [Self; N]) -> Self {
        a.into_iter()
            .zip(b)
            .fold(Self::ZERO, |acc, (a, b)| acc + a * b)
    }
}

/// Floating-point numbers.
///
/// Geometric operations (normalization, rotations, projections) require this.
pub trait Float: Number + Trig + Hyperbolic + Sqrt + Abs + MinMax + PartialOrd {
    /// Archimedes' constant (π).
    const PI: Self;
    /// π/2
    const PI_OVER_TWO: Self;
    /// 2π
    const TWO_PI: Self;
    /// The cosine of half a radian.
    const COS_ONE_OVER_TWO: Self;
    /// Machine epsilon.
    const EPSILON: Self;
    const INFINITY: Self;

    /// Natural logarithm.
    fn ln(self) -> Self;
    /// Raises `self` to the power `n`.
    fn powf(self, n: Self) -> Self;
    /// Converts an [`f64`] literal to `Self`, rounding if needed.
    fn from_f64(value: f64) -> Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0 => f32, f64);

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! signed_int {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                #[inline]
                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }

            impl Number for $types {}
        )+
    };
}
signed_int!(i8, i16, i32, i64, i128, isize);

impl Number for f64 {}

impl Number for f32 {
    #[inline]
    fn dot_array<const N: usize>(a: [f32; N], b: [f32; N]) -> f32 {
        if let (Ok(a), Ok(b)) = (<[f32; 4]>::try_from(&a[..]), <[f32; 4]>::try_from(&b[..])) {
            return crate::simd::dot4(a, b);
        }

        a.into_iter().zip(b).fold(0.0, |acc, (a, b)| acc + a * b)
    }
}

macro_rules! float {
    ($($types:ident),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    $types::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    $types::max(self, other)
                }
            }

            impl Abs for $types {
                #[inline]
                fn abs(self) -> Self {
                    $types::abs(self)
                }
            }

            impl Sqrt for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    $types::sqrt(self)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    $types::sin(self)
                }

                fn cos(self) -> Self {
                    $types::cos(self)
                }

                fn tan(self) -> Self {
                    $types::tan(self)
                }

                fn asin(self) -> Self {
                    $types::asin(self)
                }

                fn acos(self) -> Self {
                    $types::acos(self)
                }

                fn atan(self) -> Self {
                    $types::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    $types::atan2(self, other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    $types::sin_cos(self)
                }
            }

            impl Hyperbolic for $types {
                fn sinh(self) -> Self {
                    $types::sinh(self)
                }

                fn cosh(self) -> Self {
                    $types::cosh(self)
                }

                fn tanh(self) -> Self {
                    $types::tanh(self)
                }

                fn asinh(self) -> Self {
                    $types::asinh(self)
                }

                fn acosh(self) -> Self {
                    $types::acosh(self)
                }

                fn atanh(self) -> Self {
                    $types::atanh(self)
                }
            }

            impl Float for $types {
                const PI: Self = std::$types::consts::PI;
                const PI_OVER_TWO: Self = std::$types::consts::FRAC_PI_2;
                const TWO_PI: Self = std::$types::consts::TAU;
                const COS_ONE_OVER_TWO: Self = 0.877_582_561_890_372_8_f64 as $types;
                const EPSILON: Self = $types::EPSILON;
                const INFINITY: Self = $types::INFINITY;

                #[inline]
                fn ln(self) -> Self {
                    $types::ln(self)
                }

                #[inline]
                fn powf(self, n: Self) -> Self {
                    $types::powf(self, n)
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $types
                }
            }
        )+
    };
}
float!(f32, f64);

macro_rules! cast {
    ($from:ty => $($to:ty),+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}
macro_rules! cast_all {
    ($($from:ty),+) => {
        $(
            cast!($from => u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
        )+
    };
}
cast_all!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
