use std::{array, fmt, ops::Sub};

use crate::{
    scalar,
    traits::{Abs, Cast, Float, Hyperbolic, Number, Trig},
    One, Zero,
};

mod ops;
pub(crate) mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::from_iter_padded`] takes the leading elements from an iterator and fills the rest
///   with zero. Chaining iterators concatenates scalars and shorter vectors.
/// - [`Vector::resize`] widens (zero-filling) or narrows a vector.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can
///   be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// Vector elements can be accessed and inspected in a few different ways:
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`.
///   - Aliases `r`, `g`, `b`, and `a` are also provided, as well as `s`, `t` and `u`, `v` for
///     2-dimensional vectors. All of them refer to the same storage.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying elements as a slice or
///   array.
/// - A [`From`] impl allows conversion from a [`Vector`] to an array of the same length.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] allow the same
///   operations without requiring type annotations.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Comparison
///
/// `==` compares every element exactly. `<`, `>` and friends compare lexicographically, starting at
/// element 0. Element-wise comparisons ([`Vector::less_than`], [`Vector::equal`], ...) return
/// a `Vector<bool, N>` instead, which can be reduced with [`Vector::any`] and [`Vector::all`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    #[doc(alias = "UNIT_X")]
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    #[doc(alias = "UNIT_X")]
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    #[doc(alias = "UNIT_Y")]
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    #[doc(alias = "UNIT_X")]
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    #[doc(alias = "UNIT_Y")]
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    #[doc(alias = "UNIT_Z")]
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    #[doc(alias = "UNIT_X")]
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    #[doc(alias = "UNIT_Y")]
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    #[doc(alias = "UNIT_Z")]
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    #[doc(alias = "UNIT_W")]
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from the first `N` elements yielded by `iter`.
    ///
    /// If `iter` yields fewer than `N` elements, the remaining ones are set to zero. Surplus
    /// elements are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let v = Vec4::from_iter_padded([1, 2]);
    /// assert_eq!(v, vec4(1, 2, 0, 0));
    ///
    /// // Concatenation: a scalar, a 2D vector, and a scalar that no longer fits.
    /// let v = Vec3::from_iter_padded([7].into_iter().chain(vec2(8, 9)).chain([10]));
    /// assert_eq!(v, vec3(7, 8, 9));
    /// ```
    pub fn from_iter_padded<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Zero,
    {
        let mut iter = iter.into_iter();
        Self::from_fn(|_| iter.next().unwrap_or(T::ZERO))
    }

    /// Returns a vector with the contents of `self`, but a potentially different length.
    ///
    /// Elements not present in `self` will be initialized with [`T::ZERO`][`Zero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(vec2(1, 2).resize::<4>(), vec4(1, 2, 0, 0));
    /// assert_eq!(vec4(1, 2, 3, 4).resize::<2>(), vec2(1, 2));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero,
    {
        Vector::from_iter_padded(self.0)
    }

    /// Overwrites the leading elements of `self` with the elements of `other`.
    ///
    /// Exactly `min(N, M)` elements are copied. If `other` is shorter than `self`, the elements of
    /// `self` past its length are left as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mut v = vec4(1, 2, 3, 4);
    /// v.assign(vec2(8, 9));
    /// assert_eq!(v, vec4(8, 9, 3, 4));
    /// ```
    pub fn assign<const M: usize>(&mut self, other: Vector<T, M>) {
        for (dest, src) in self.0.iter_mut().zip(other.0) {
            *dest = src;
        }
    }

    /// Converts each element to `U`, like an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(vec2(1.5f32, -2.0).cast::<i32>(), vec2(1, -2));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(T::cast)
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        self.map(|a| match other.next() {
            Some(b) => (a, b),
            None => unreachable!(),
        })
    }

    /// Builds a new vector from the elements at `indices`.
    ///
    /// # Panics
    ///
    /// Panics if any index is `N` or larger.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let v = vec4(1, 2, 3, 4);
    /// assert_eq!(v.swizzle([3, 0]), vec2(4, 1));
    /// assert_eq!(v.swizzle([2, 2, 2]), vec3(3, 3, 3));
    /// ```
    pub fn swizzle<const M: usize>(&self, indices: [usize; M]) -> Vector<T, M>
    where
        T: Copy,
    {
        Vector(indices.map(|i| {
            assert!(i < N, "swizzle index {i} out of range for {N}-element vector");
            self.0[i]
        }))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// For 4-element [`f32`] vectors, this uses SSE instructions when the target supports them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        T::dot_array(self.0, other.0)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    #[doc(alias = "length_sqr")]
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Float,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A vector of length 0 is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        let length = self.length();
        if length > T::ZERO {
            self / length
        } else {
            self
        }
    }

    /// Returns whether the length of `self` is 1, within [`Float::EPSILON`].
    pub fn is_normalized(&self) -> bool
    where
        T: Float,
    {
        self.is_normalized_within(T::EPSILON)
    }

    /// Returns whether the squared length of `self` differs from 1 by less than `epsilon`.
    pub fn is_normalized_within(&self, epsilon: T) -> bool
    where
        T: Float,
    {
        (T::ONE - self.length2()).abs() < epsilon
    }

    /// Like [`Vector::is_normalized`], but tolerates the rounding error of [`Vector::normalize`].
    ///
    /// Used for precondition checks on directions and rotation axes.
    pub(crate) fn is_normalized_approx(&self) -> bool
    where
        T: Float,
    {
        self.is_normalized_within(T::EPSILON * T::from_f64(16.0))
    }

    /// Element-wise absolute value.
    pub fn abs(self) -> Self
    where
        T: Abs,
    {
        self.map(T::abs)
    }

    /// Element-wise `<`.
    pub fn less_than(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.zip(other).map(|(a, b)| a < b)
    }

    /// Element-wise `<=`.
    pub fn less_than_equal(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.zip(other).map(|(a, b)| a <= b)
    }

    /// Element-wise `>`.
    pub fn greater_than(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.zip(other).map(|(a, b)| a > b)
    }

    /// Element-wise `>=`.
    pub fn greater_than_equal(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.zip(other).map(|(a, b)| a >= b)
    }

    /// Element-wise tolerant equality: `|self - other| <= epsilon`.
    ///
    /// An `epsilon` of zero tests for exact equality.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let a = vec3(1.0, 2.0, 3.0);
    /// let b = vec3(1.05, 2.0, 4.0);
    /// assert_eq!(a.equal(b, 0.1), vec3(true, true, false));
    /// assert_eq!(a.equal(b, 0.0), vec3(false, true, false));
    /// ```
    pub fn equal(self, other: Self, epsilon: T) -> Vector<bool, N>
    where
        T: Abs + Sub<Output = T> + PartialOrd + Copy,
    {
        self.equal_elementwise(other, Vector::splat(epsilon))
    }

    /// Like [`Vector::equal`], but with a separate tolerance for each element.
    pub fn equal_elementwise(self, other: Self, epsilon: Self) -> Vector<bool, N>
    where
        T: Abs + Sub<Output = T> + PartialOrd + Copy,
    {
        (self - other).abs().less_than_equal(epsilon)
    }

    /// Element-wise negation of [`Vector::equal`].
    pub fn not_equal(self, other: Self, epsilon: T) -> Vector<bool, N>
    where
        T: Abs + Sub<Output = T> + PartialOrd + Copy,
    {
        self.equal(other, epsilon).negate()
    }

    /// Element-wise negation of [`Vector::equal_elementwise`].
    pub fn not_equal_elementwise(self, other: Self, epsilon: Self) -> Vector<bool, N>
    where
        T: Abs + Sub<Output = T> + PartialOrd + Copy,
    {
        self.equal_elementwise(other, epsilon).negate()
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Returns whether any element is `true`.
    #[inline]
    pub fn any(self) -> bool {
        self.0.into_iter().any(|b| b)
    }

    /// Returns whether every element is `true`.
    #[inline]
    pub fn all(self) -> bool {
        self.0.into_iter().all(|b| b)
    }

    /// Flips every element. Same as the `!` operator.
    #[inline]
    pub fn negate(self) -> Self {
        !self
    }
}

macro_rules! elementwise {
    ($($(#[$attr:meta])* $name:ident => $f:path,)+) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name(self) -> Self {
                self.map($f)
            }
        )+
    };
}

impl<T: Float, const N: usize> Vector<T, N> {
    elementwise! {
        /// Converts each element from radians to degrees.
        degrees => scalar::degrees,
        /// Converts each element from degrees to radians.
        radians => scalar::radians,
        sin => Trig::sin,
        cos => Trig::cos,
        tan => Trig::tan,
        asin => Trig::asin,
        acos => Trig::acos,
        atan => Trig::atan,
        sinh => Hyperbolic::sinh,
        cosh => Hyperbolic::cosh,
        tanh => Hyperbolic::tanh,
        asinh => Hyperbolic::asinh,
        acosh => Hyperbolic::acosh,
        atanh => Hyperbolic::atanh,
    }

    /// Element-wise four quadrant arctangent of `self` (y) and `x`.
    pub fn atan2(self, x: Self) -> Self {
        self.zip(x).map(|(y, x)| y.atan2(x))
    }
}

impl<T> Vector<T, 1> {
    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a single element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let v = vec2(-1.0, 2.0).truncate();
    /// assert_eq!(v, vec1(-1.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, ..] = self.into_array();
        [x].into()
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
