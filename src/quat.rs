mod ops;
mod view;

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{vec3, Cast, Float, Mat3, Mat4, Matrix, Number, One, Vec3, Vector, Zero};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of a real part `w` and 3 imaginary parts `x`, `y` and `z`, representing
/// `w + xi + yj + zk`.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// The type does not enforce unit length. Operations that can change the length (eg.
/// [`Quat::lerp`] or repeated multiplication) should be followed by [`Quat::normalize`].
///
/// # Layout
///
/// The components are stored as 4 contiguous values in the order `w`, `x`, `y`, `z`. Indexing
/// follows that order, so `q[0]` is `w`.
///
/// Components can be accessed by name, either as `w`, `x`, `y` and `z`, or as the scalar part `s`
/// (an alias of `w`) and the vector part `vec`:
///
/// ```
/// # use fastmath::*;
/// let mut q = Quat::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(q.w, 1.0);
/// assert_eq!(q.s, 1.0);
/// assert_eq!(q.vec, vec3(2.0, 3.0, 4.0));
/// q.vec.y = 5.0;
/// assert_eq!(q.y, 5.0);
/// assert_eq!(q[2], 5.0);
/// ```
///
/// # Rotating vectors
///
/// Multiplying a quaternion with a vector (`q * v`) rotates the vector. Multiplying a vector with a
/// quaternion (`v * q`) applies the *inverse* rotation.
///
/// ```
/// # use fastmath::*;
/// # use approx::assert_relative_eq;
/// let q = Quatd::from_rotation_z(radians(90.0));
/// assert_relative_eq!(q * Vec3::X, Vec3::Y, epsilon = 1e-12);
/// assert_relative_eq!(Vec3d::Y * q, Vec3::X, epsilon = 1e-12);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T>(Vector<T, 4>);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity `(1, 0, 0, 0)`.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self(Vector([T::ONE, T::ZERO, T::ZERO, T::ZERO]));
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and its imaginary parts `x`, `y` and `z`.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self(Vector([w, x, y, z]))
    }

    /// Creates a quaternion from a scalar (real) part and a vector (imaginary) part.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let q = Quat::from_scalar_vector(1, vec3(2, 3, 4));
    /// assert_eq!(q, Quat::new(1, 2, 3, 4));
    /// ```
    pub fn from_scalar_vector(s: T, vec: Vec3<T>) -> Self {
        let [x, y, z] = vec.into_array();
        Self::new(s, x, y, z)
    }

    /// Returns the components as a [`Vector`] in `w, x, y, z` order.
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.0
    }

    /// Returns the components as an array in `w, x, y, z` order.
    #[inline]
    pub fn into_array(self) -> [T; 4] {
        self.0.into_array()
    }

    /// Returns a reference to the components in `w, x, y, z` order.
    #[inline]
    pub fn as_array(&self) -> &[T; 4] {
        self.0.as_array()
    }

    /// Converts each component to `U`, like an `as` cast.
    pub fn cast<U>(self) -> Quat<U>
    where
        T: Cast<U>,
    {
        Quat(self.0.cast())
    }

    /// Applies a closure to each component.
    pub fn map<U, F>(self, f: F) -> Quat<U>
    where
        F: FnMut(T) -> U,
    {
        Quat(self.0.map(f))
    }
}

impl<T: Number> Quat<T> {
    /// Computes the 4-component dot product of `self` and `other`.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.0.dot(other.0)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it.
    #[doc(alias = "length_sqr")]
    pub fn length2(&self) -> T {
        self.0.length2()
    }

    /// Returns the conjugate of this quaternion, which has the vector part negated.
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the multiplicative inverse of this quaternion (`conjugate / dot(self, self)`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let q = Quat::new(1.0, 1.0, 1.0, 1.0);
    /// assert_eq!(q.inverse(), Quat::new(0.25, -0.25, -0.25, -0.25));
    /// assert_eq!(q * q.inverse(), Quat::IDENTITY);
    /// ```
    pub fn inverse(self) -> Self {
        self.conjugate() / self.dot(self)
    }

    /// Component-wise `<`.
    pub fn less_than(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialOrd,
    {
        self.0.less_than(other.0)
    }

    /// Component-wise `<=`.
    pub fn less_than_equal(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialOrd,
    {
        self.0.less_than_equal(other.0)
    }

    /// Component-wise `>`.
    pub fn greater_than(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialOrd,
    {
        self.0.greater_than(other.0)
    }

    /// Component-wise `>=`.
    pub fn greater_than_equal(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialOrd,
    {
        self.0.greater_than_equal(other.0)
    }
}

impl<T: Float> Quat<T> {
    fn half() -> T {
        T::from_f64(0.5)
    }

    /// Creates a quaternion that rotates by `angle` radians around `axis`.
    ///
    /// `axis` must be normalized. This is checked with a debug assertion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(Quatf::from_axis_angle(Vec3::Y, 0.0), Quat::IDENTITY);
    /// ```
    #[doc(alias = "axis_angle")]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        debug_assert!(axis.is_normalized_approx(), "rotation axis must be normalized");
        let (s, c) = (angle * Self::half()).sin_cos();
        Self::from_scalar_vector(c, axis * s)
    }

    /// Creates a quaternion that rotates by `angle` radians around the X axis.
    pub fn from_rotation_x(angle: T) -> Self {
        Self::from_axis_angle(Vec3::X, angle)
    }

    /// Creates a quaternion that rotates by `angle` radians around the Y axis.
    pub fn from_rotation_y(angle: T) -> Self {
        Self::from_axis_angle(Vec3::Y, angle)
    }

    /// Creates a quaternion that rotates by `angle` radians around the Z axis.
    pub fn from_rotation_z(angle: T) -> Self {
        Self::from_axis_angle(Vec3::Z, angle)
    }

    /// Creates the product `from_rotation_x(x) * from_rotation_y(y) * from_rotation_z(z)`.
    ///
    /// When applied to a vector, the rotation around Z happens first and the one around X last.
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Creates a quaternion from Euler angles `(pitch, yaw, roll)` in radians.
    ///
    /// The result rotates around X by `pitch` first, then around Y by `yaw`, and around Z by
    /// `roll` last. [`Quat::euler_angles`] recovers the angles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// # use approx::assert_relative_eq;
    /// let angles = vec3(0.1, 0.2, 0.3);
    /// let q = Quatd::from_euler_angles(angles);
    /// assert_relative_eq!(
    ///     q,
    ///     Quat::from_rotation_z(0.3) * Quat::from_rotation_y(0.2) * Quat::from_rotation_x(0.1),
    ///     epsilon = 1e-12,
    /// );
    /// assert_relative_eq!(q.euler_angles(), angles, epsilon = 1e-12);
    /// ```
    #[doc(alias = "euler")]
    pub fn from_euler_angles(angles: Vec3<T>) -> Self {
        let half = angles * Self::half();
        let (c, s) = (half.cos(), half.sin());

        Self::new(
            c.x * c.y * c.z + s.x * s.y * s.z,
            s.x * c.y * c.z - c.x * s.y * s.z,
            c.x * s.y * c.z + s.x * c.y * s.z,
            c.x * c.y * s.z - s.x * s.y * c.z,
        )
    }

    /// Creates the shortest-arc rotation that rotates direction `u` onto direction `v`.
    ///
    /// Both vectors must be normalized. This is checked with a debug assertion.
    ///
    /// If `u` and `v` point in (nearly) opposite directions, the rotation is by 180° around an
    /// arbitrary axis perpendicular to `u`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// # use approx::assert_relative_eq;
    /// let q = Quatf::from_rotation_arc(Vec3::X, Vec3::Y);
    /// assert_relative_eq!(q, Quat::from_axis_angle(Vec3::Z, radians(90.0)));
    /// assert_relative_eq!(q * Vec3::X, Vec3::Y, epsilon = 1e-6);
    /// ```
    pub fn from_rotation_arc(u: Vec3<T>, v: Vec3<T>) -> Self {
        debug_assert!(u.is_normalized_approx(), "`u` must be normalized");
        debug_assert!(v.is_normalized_approx(), "`v` must be normalized");

        let uv = (u.dot(u) * v.dot(v)).sqrt();
        let s = uv + u.dot(v);
        let q = if s < T::from_f64(1e-6) * uv {
            log::trace!("rotation arc between opposite vectors, picking a perpendicular axis");
            let axis = if u.x.abs() > u.z.abs() {
                vec3(-u.y, u.x, T::ZERO)
            } else {
                vec3(T::ZERO, -u.z, u.y)
            };
            Self::from_scalar_vector(T::ZERO, axis)
        } else {
            Self::from_scalar_vector(s, u.cross(v))
        };

        q * (T::ONE / q.length())
    }

    /// Creates a quaternion from a 3x3 rotation matrix.
    ///
    /// The matrix must be a proper rotation (orthonormal with determinant 1). The conversion
    /// branches on the trace and the largest diagonal element to stay numerically stable.
    pub fn from_mat3(m: Mat3<T>) -> Self {
        let quarter = T::from_f64(0.25);
        let two = T::ONE + T::ONE;
        let trace = m.trace();

        if trace > T::ZERO {
            let s = Self::half() / (trace + T::ONE).sqrt();
            return Self::new(
                quarter / s,
                (m[(2, 1)] - m[(1, 2)]) * s,
                (m[(0, 2)] - m[(2, 0)]) * s,
                (m[(1, 0)] - m[(0, 1)]) * s,
            );
        }

        if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
            let s = two * (T::ONE + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt();
            Self::new(
                (m[(2, 1)] - m[(1, 2)]) / s,
                quarter * s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
            )
        } else if m[(1, 1)] > m[(2, 2)] {
            let s = two * (T::ONE + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt();
            Self::new(
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                quarter * s,
                (m[(1, 2)] + m[(2, 1)]) / s,
            )
        } else {
            let s = two * (T::ONE + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt();
            Self::new(
                (m[(1, 0)] - m[(0, 1)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                quarter * s,
            )
        }
    }

    /// Creates a quaternion from the rotational (upper-left 3x3) part of a 4x4 matrix.
    pub fn from_mat4(m: Mat4<T>) -> Self {
        Self::from_mat3(m.resize())
    }

    /// Converts this quaternion to a 3x3 rotation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(Quatf::IDENTITY.to_mat3(), Mat3f::IDENTITY);
    /// ```
    pub fn to_mat3(self) -> Mat3<T> {
        let [w, x, y, z] = self.into_array();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        let (one, two) = (T::ONE, T::ONE + T::ONE);

        Matrix::from_rows([
            [one - two * (yy + zz), two * (xy - wz), two * (xz + wy)],
            [two * (xy + wz), one - two * (xx + zz), two * (yz - wx)],
            [two * (xz - wy), two * (yz + wx), one - two * (xx + yy)],
        ])
    }

    /// Converts this quaternion to a 4x4 rotation matrix.
    pub fn to_mat4(self) -> Mat4<T> {
        self.to_mat3().resize()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// A quaternion of length 0 normalizes to [`Quat::IDENTITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(Quat::new(0.0, 0.0, 2.0, 0.0).normalize(), Quat::new(0.0, 0.0, 1.0, 0.0));
    /// assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize(), Quatf::IDENTITY);
    /// ```
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length > T::ZERO {
            self / length
        } else {
            log::trace!("normalizing a zero quaternion, returning the identity");
            Self::IDENTITY
        }
    }

    /// Returns whether the length of `self` is 1, within [`Float::EPSILON`].
    pub fn is_normalized(&self) -> bool {
        self.is_normalized_within(T::EPSILON)
    }

    /// Returns whether the squared length of `self` differs from 1 by less than `epsilon`.
    pub fn is_normalized_within(&self, epsilon: T) -> bool {
        (T::ONE - self.length2()).abs() < epsilon
    }

    /// Returns the rotation angle in radians, in the range `0..2π`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// # use approx::assert_relative_eq;
    /// let q = Quatd::from_axis_angle(Vec3::X, 1.5);
    /// assert_relative_eq!(q.angle(), 1.5, epsilon = 1e-12);
    /// ```
    pub fn angle(&self) -> T {
        let two = T::ONE + T::ONE;
        if self.w.abs() > T::COS_ONE_OVER_TWO {
            let a = self.vec.length().asin() * two;
            if self.w < T::ZERO {
                T::TWO_PI - a
            } else {
                a
            }
        } else {
            self.w.acos() * two
        }
    }

    /// Returns the rotation axis, or [`Vec3::Z`] if the rotation is the identity.
    pub fn axis(&self) -> Vec3<T> {
        self.axis_or(Vec3::Z)
    }

    /// Returns the rotation axis, or `default` if the rotation is the identity.
    pub fn axis_or(&self, default: Vec3<T>) -> Vec3<T> {
        let sin2 = T::ONE - self.w * self.w;
        if sin2 <= T::ZERO {
            return default;
        }
        self.vec * (T::ONE / sin2.sqrt())
    }

    /// Returns the rotation around the X axis, as stored by [`Quat::from_euler_angles`].
    ///
    /// Computed as `atan2(2(yz + wx), w² - x² - y² + z²)`, where the second argument is the
    /// `(2, 2)` entry of the rotation matrix. When both arguments vanish (gimbal lock) the result
    /// falls back to `2 * atan2(x, w)`.
    pub fn pitch(&self) -> T {
        let [w, x, y, z] = self.into_array();
        let two = T::ONE + T::ONE;
        let cos = w * w - x * x - y * y + z * z;
        let sin = two * (y * z + w * x);
        if Vector([cos, sin]).equal(Vector::ZERO, T::EPSILON).all() {
            // Gimbal lock.
            return two * x.atan2(w);
        }
        sin.atan2(cos)
    }

    /// Returns the rotation around the Y axis, as stored by [`Quat::from_euler_angles`].
    pub fn yaw(&self) -> T {
        let [w, x, y, z] = self.into_array();
        let two = T::ONE + T::ONE;
        (-two * (x * z - w * y)).clamp(-T::ONE, T::ONE).asin()
    }

    /// Returns the rotation around the Z axis, as stored by [`Quat::from_euler_angles`].
    pub fn roll(&self) -> T {
        let [w, x, y, z] = self.into_array();
        let two = T::ONE + T::ONE;
        let cos = w * w + x * x - y * y - z * z;
        let sin = two * (x * y + w * z);
        if Vector([cos, sin]).equal(Vector::ZERO, T::EPSILON).all() {
            return T::ZERO;
        }
        sin.atan2(cos)
    }

    /// Returns the Euler angles `(pitch, yaw, roll)` in radians.
    pub fn euler_angles(&self) -> Vec3<T> {
        vec3(self.pitch(), self.yaw(), self.roll())
    }

    /// Computes the exponential of this quaternion.
    ///
    /// Only the vector part is taken into account, which makes this the inverse of [`Quat::ln`]
    /// for unit quaternions.
    pub fn exp(self) -> Self {
        let v = self.vec;
        let a = v.length();
        if a < T::EPSILON {
            return Self::IDENTITY;
        }
        let (sin, cos) = a.sin_cos();
        Self::from_scalar_vector(cos, v * (sin / a))
    }

    /// Computes the natural logarithm of this quaternion.
    ///
    /// If the vector part is 0, the result is real for positive `w`, and has `π` as its `x`
    /// component for negative `w`. For `w == 0` the logarithm is undefined and every component of
    /// the result is infinite.
    #[doc(alias = "log")]
    pub fn ln(self) -> Self {
        let v = self.vec;
        let l = v.length();
        if l < T::EPSILON {
            let (o, w) = (T::ZERO, self.w);
            return if w > o {
                Self::new(w.ln(), o, o, o)
            } else if w < o {
                Self::new((-w).ln(), T::PI, o, o)
            } else {
                log::debug!("logarithm of a zero quaternion");
                Self::new(T::INFINITY, T::INFINITY, T::INFINITY, T::INFINITY)
            };
        }

        let t = l.atan2(self.w) / l;
        let l2 = l * l + self.w * self.w;
        Self::from_scalar_vector(Self::half() * l2.ln(), v * t)
    }

    /// Raises this quaternion to the power `exp`.
    ///
    /// The result of a power of 0 is [`Quat::IDENTITY`]. For unit quaternions, this scales the
    /// rotation angle by `exp`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// # use approx::assert_relative_eq;
    /// let q = Quatd::from_rotation_y(1.0);
    /// assert_relative_eq!(q.powf(2.0), q * q, epsilon = 1e-12);
    /// assert_eq!(q.powf(0.0), Quat::IDENTITY);
    /// ```
    #[doc(alias = "pow")]
    pub fn powf(self, exp: T) -> Self {
        if exp.abs() < T::EPSILON {
            return Self::IDENTITY;
        }

        let l = self.length();
        if l < T::EPSILON {
            return Self::IDENTITY;
        }

        let cos = self.w / l;
        let a = if cos.abs() > T::from_f64(std::f64::consts::FRAC_1_SQRT_2) {
            let length2 = self.vec.length2();
            if length2 < T::EPSILON {
                return Self::new(self.w.powf(exp), T::ZERO, T::ZERO, T::ZERO);
            }
            let a = (length2.sqrt() / l).asin();
            // `asin` only covers the first half of the range.
            if cos < T::ZERO {
                T::PI - a
            } else {
                a
            }
        } else {
            cos.acos()
        };

        let a2 = a * exp;
        let div = a2.sin() / a.sin();
        let l2 = l.powf(exp - T::ONE);
        let divl2 = div * l2;
        Self::from_scalar_vector(a2.cos() * l * l2, self.vec * divl2)
    }

    /// Computes the square root of this quaternion (`self.powf(0.5)`).
    pub fn sqrt(self) -> Self {
        self.powf(Self::half())
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// `t` must be in range `0..=1`. This is checked with a debug assertion. The result is not
    /// normalized.
    pub fn lerp(self, other: Self, t: T) -> Self {
        debug_assert!(t >= T::ZERO && t <= T::ONE, "interpolation factor must be in 0..=1");
        self * (T::ONE - t) + other * t
    }

    /// Spherically interpolates between `self` and `other`, along the shorter arc.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// # use approx::assert_relative_eq;
    /// let a = Quatd::from_rotation_x(0.2);
    /// let b = Quatd::from_rotation_x(1.0);
    /// assert_relative_eq!(a.slerp(b, 0.5), Quat::from_rotation_x(0.6), epsilon = 1e-12);
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self {
        let mut c = self.dot(other);
        let mut other = other;
        if c < T::ZERO {
            other = -other;
            c = -c;
        }

        // `sin(a)` vanishes for (anti)parallel inputs.
        if c > T::ONE - T::EPSILON {
            return self.lerp(other, t);
        }

        let a = c.acos();
        (self * ((T::ONE - t) * a).sin() + other * (t * a).sin()) / a.sin()
    }

    /// Spherical cubic interpolation between `self` and `other`, using the control points `s0`
    /// and `s1` (see [`Quat::intermediate`]).
    pub fn squad(self, other: Self, s0: Self, s1: Self, t: T) -> Self {
        let two = T::ONE + T::ONE;
        self.slerp(other, t)
            .slerp(s0.slerp(s1, t), two * t * (T::ONE - t))
    }

    /// Computes the control point for `q1` when interpolating the sequence `q0`, `q1`, `q2` with
    /// [`Quat::squad`].
    pub fn intermediate(q0: Self, q1: Self, q2: Self) -> Self {
        let q1_inv = q1.inverse();
        let four = T::from_f64(4.0);
        (-((q2 * q1_inv).ln() + (q0 * q1_inv).ln()) / four).exp() * q1
    }

    /// Component-wise comparison with a tolerance of `epsilon`.
    ///
    /// Components compare equal if they differ by at most `epsilon`.
    pub fn equal(self, other: Self, epsilon: T) -> Vector<bool, 4> {
        self.0.equal(other.0, epsilon)
    }

    /// Component-wise comparison with a tolerance per component.
    pub fn equal_elementwise(self, other: Self, epsilon: Vector<T, 4>) -> Vector<bool, 4> {
        self.0.equal_elementwise(other.0, epsilon)
    }

    /// Negation of [`Quat::equal`].
    pub fn not_equal(self, other: Self, epsilon: T) -> Vector<bool, 4> {
        self.0.not_equal(other.0, epsilon)
    }

    /// Negation of [`Quat::equal_elementwise`].
    pub fn not_equal_elementwise(self, other: Self, epsilon: Vector<T, 4>) -> Vector<bool, 4> {
        self.0.not_equal_elementwise(other.0, epsilon)
    }
}

impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T> From<[T; 4]> for Quat<T> {
    /// Creates a quaternion from its components in `w, x, y, z` order.
    #[inline]
    fn from(wxyz: [T; 4]) -> Self {
        Self(Vector(wxyz))
    }
}

impl<T> From<Quat<T>> for [T; 4] {
    #[inline]
    fn from(q: Quat<T>) -> Self {
        q.into_array()
    }
}

impl<T: Float> From<Quat<T>> for Mat3<T> {
    fn from(q: Quat<T>) -> Self {
        q.to_mat3()
    }
}

impl<T: Float> From<Quat<T>> for Mat4<T> {
    fn from(q: Quat<T>) -> Self {
        q.to_mat4()
    }
}

impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.w)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{radians, vec4, Mat3d, Mat3f, Mat4d, Vec3d};

    use super::*;

    fn init_logger() {
        env_logger::builder()
            .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
            .is_test(true)
            .try_init()
            .ok();
    }

    fn random_rotation(rng: &mut fastrand::Rng) -> Quatd {
        Quat::new(
            rng.f64() * 2.0 - 1.0,
            rng.f64() * 2.0 - 1.0,
            rng.f64() * 2.0 - 1.0,
            rng.f64() * 2.0 - 1.0,
        )
        .normalize()
    }

    #[test]
    fn layout() {
        let mut q = Quat::new(1, 2, 3, 4);
        assert_eq!(q.as_array(), &[1, 2, 3, 4]);
        assert_eq!((q.w, q.x, q.y, q.z), (1, 2, 3, 4));
        assert_eq!(q.s, 1);
        assert_eq!(q.vec, vec3(2, 3, 4));
        q.s = 5;
        q.vec.z = 6;
        assert_eq!(q, Quat::new(5, 2, 3, 6));
        assert_eq!(q[0], 5);
        q[1] = 7;
        assert_eq!(q.x, 7);
        assert_eq!(bytemuck::cast::<_, [i32; 4]>(q), [5, 7, 3, 6]);
    }

    #[test]
    fn fmt() {
        let q = Quat::new(1, 2, 3, 4);
        assert_eq!(format!("{:?}", q), "Quat { w: 1, x: 2, y: 3, z: 4 }");
        assert_eq!(q.to_string(), "(1, 2, 3, 4)");
    }

    #[test]
    fn constants() {
        assert_eq!(Quatf::IDENTITY, Quat::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(Quatf::default(), Quatf::IDENTITY);
        assert_eq!(Quat::<i32>::IDENTITY.into_array(), [1, 0, 0, 0]);
        assert_eq!(Quat::new(1.5f32, 2.0, -2.5, 0.0).cast::<i32>(), Quat::new(1, 2, -2, 0));
    }

    #[test]
    fn axis_angle() {
        for angle in [0.0, 0.5, 1.0, 2.0, 3.0] {
            let q = Quatd::from_axis_angle(vec3(0.0, 0.6, 0.8), angle);
            assert!(q.is_normalized_within(1e-12));
            assert_relative_eq!(q.angle(), angle, epsilon = 1e-12);
        }
        assert_eq!(Quatd::from_axis_angle(Vec3::X, 0.0), Quat::IDENTITY);

        let q = Quatd::from_axis_angle(vec3(0.0, 0.6, 0.8), 1.0);
        assert_relative_eq!(q.axis(), vec3(0.0, 0.6, 0.8), epsilon = 1e-12);
        assert_eq!(Quatd::IDENTITY.axis(), Vec3::Z);
        assert_eq!(Quatd::IDENTITY.axis_or(Vec3::X), Vec3::X);

        // Angles past π use the other branch.
        let q = Quatd::from_axis_angle(Vec3::Y, 5.5);
        assert_relative_eq!(q.angle(), 5.5, epsilon = 1e-12);
    }

    #[test]
    fn rotation_axes() {
        let angle = radians(90.0);
        assert_relative_eq!(Quatd::from_rotation_x(angle) * Vec3::Y, Vec3::Z, epsilon = 1e-12);
        assert_relative_eq!(Quatd::from_rotation_y(angle) * Vec3::Z, Vec3::X, epsilon = 1e-12);
        assert_relative_eq!(Quatd::from_rotation_z(angle) * Vec3::X, Vec3::Y, epsilon = 1e-12);

        let xyz = Quatd::from_rotation_xyz(0.1, 0.2, 0.3);
        let v = vec3(1.0, 2.0, 3.0);
        assert_relative_eq!(
            xyz * v,
            Quatd::from_rotation_x(0.1)
                * (Quatd::from_rotation_y(0.2) * (Quatd::from_rotation_z(0.3) * v)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn matrices_agree() {
        let angle = 0.8;
        assert_relative_eq!(
            Quatd::from_rotation_x(angle).to_mat4(),
            Mat4d::rotation_x(angle),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Quatd::from_rotation_y(angle).to_mat4(),
            Mat4d::rotation_y(angle),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Mat4d::from(Quatd::from_rotation_z(angle)),
            Mat4d::rotation_z(angle),
            epsilon = 1e-12
        );

        let axis = vec3(0.0, 0.6, 0.8);
        assert_relative_eq!(
            Quatd::from_axis_angle(axis, angle).to_mat4(),
            Mat4d::rotation_axis_angle(axis, angle),
            epsilon = 1e-12
        );
    }

    #[test]
    fn matrix_round_trip() {
        assert_eq!(Quatf::IDENTITY.to_mat3(), Mat3f::IDENTITY);
        assert_eq!(Quatf::from_mat3(Mat3f::IDENTITY), Quatf::IDENTITY);
        assert_eq!(Mat3f::from(Quatf::IDENTITY), Mat3f::IDENTITY);

        let mut rng = fastrand::Rng::with_seed(0x9e37);
        for _ in 0..200 {
            let q = random_rotation(&mut rng);
            let back = Quat::from_mat3(q.to_mat3());
            // `q` and `-q` are the same rotation.
            let back = if back.dot(q) < 0.0 { -back } else { back };
            assert_relative_eq!(back, q, epsilon = 1e-9);
            assert_relative_eq!(Quat::from_mat4(q.to_mat4()).to_mat3(), q.to_mat3(), epsilon = 1e-9);

            let v = vec3(rng.f64(), rng.f64(), rng.f64());
            assert_relative_eq!(q * v, q.to_mat3() * v, epsilon = 1e-12);
        }

        // Exercise each branch: trace > 0, and each of the diagonal elements being the largest.
        for q in [
            Quatd::from_rotation_x(3.0),
            Quatd::from_rotation_y(3.0),
            Quatd::from_rotation_z(3.0),
            Quatd::from_rotation_z(0.5),
        ] {
            let back = Quat::from_mat3(q.to_mat3());
            let back = if back.dot(q) < 0.0 { -back } else { back };
            assert_relative_eq!(back, q, epsilon = 1e-12);
        }
        let _: Mat3d = Quatd::IDENTITY.into();
    }

    #[test]
    fn euler_angles() {
        let angles = vec3(0.3, -0.4, 0.5);
        let q = Quatd::from_euler_angles(angles);
        assert!(q.is_normalized_within(1e-12));
        assert_relative_eq!(q.pitch(), 0.3, epsilon = 1e-12);
        assert_relative_eq!(q.yaw(), -0.4, epsilon = 1e-12);
        assert_relative_eq!(q.roll(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            q,
            Quat::from_rotation_z(0.5) * Quat::from_rotation_y(-0.4) * Quat::from_rotation_x(0.3),
            epsilon = 1e-12
        );

        assert_eq!(Quatd::IDENTITY.euler_angles(), Vec3d::ZERO);
    }

    #[test]
    fn rotation_arc() {
        init_logger();

        let q = Quatd::from_rotation_arc(Vec3::X, Vec3::Y);
        assert_relative_eq!(q, Quat::from_axis_angle(Vec3::Z, radians(90.0)), epsilon = 1e-12);

        let u = vec3(0.0, 0.6, 0.8);
        let v = vec3(0.8, 0.0, -0.6);
        assert_relative_eq!(Quatd::from_rotation_arc(u, v) * u, v, epsilon = 1e-12);

        // Opposite directions rotate by 180° around some perpendicular axis.
        for u in [Vec3::X, Vec3::Y, Vec3::Z, -Vec3d::X] {
            let q = Quatd::from_rotation_arc(u, -u);
            assert!(q.is_normalized_within(1e-12));
            assert_eq!(q.w, 0.0);
            assert_eq!(q.vec.dot(u), 0.0);
            assert_relative_eq!(q * u, -u, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalize() {
        init_logger();

        assert_eq!(Quatd::new(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
        assert_eq!(Quatd::new(2.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
        let q = Quatd::new(1.0, 2.0, 3.0, 4.0).normalize();
        assert!(q.is_normalized_within(1e-12));
        assert_relative_eq!(q.normalize(), q, epsilon = 1e-12);
        assert!(!Quatd::new(1.0, 1.0, 0.0, 0.0).is_normalized());
    }

    #[test]
    fn conjugate_inverse() {
        let q = Quatd::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quat::new(1.0, -2.0, -3.0, -4.0));
        assert_relative_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(q.inverse() * q, Quat::IDENTITY, epsilon = 1e-12);

        let r = Quatd::from_rotation_y(0.7);
        assert_relative_eq!(r.inverse(), r.conjugate(), epsilon = 1e-12);
    }

    #[test]
    fn exp_ln() {
        init_logger();

        let mut rng = fastrand::Rng::with_seed(0x1234);
        for _ in 0..100 {
            let q = random_rotation(&mut rng);
            assert_relative_eq!(q.ln().exp(), q, epsilon = 1e-12);
            assert_relative_eq!(q.ln().w, 0.0, epsilon = 1e-12);
        }

        assert_eq!(Quatd::IDENTITY.exp(), Quat::IDENTITY);
        assert_eq!(Quatd::new(5.0, 0.0, 0.0, 0.0).exp(), Quat::IDENTITY);
        assert_eq!(Quatd::IDENTITY.ln(), Quat::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Quatd::new(-1.0, 0.0, 0.0, 0.0).ln(), Quat::new(0.0, std::f64::consts::PI, 0.0, 0.0));

        let singular = Quatd::new(0.0, 0.0, 0.0, 0.0).ln();
        assert!(singular.into_array().iter().all(|c| c.is_infinite()));
    }

    #[test]
    fn powf() {
        let mut rng = fastrand::Rng::with_seed(0xbeef);
        for _ in 0..100 {
            let q = random_rotation(&mut rng);
            assert_eq!(q.powf(0.0), Quat::IDENTITY);
            assert_relative_eq!(q.powf(1.0), q, epsilon = 1e-12);
            assert_relative_eq!(q.powf(2.0), q * q, epsilon = 1e-12);
            assert_relative_eq!(q.sqrt() * q.sqrt(), q, epsilon = 1e-12);
        }

        // Non-unit quaternions scale their length as well.
        let q = Quatd::from_rotation_x(0.4) * 2.0;
        assert_relative_eq!(q.powf(3.0), q * q * q, epsilon = 1e-12);

        // Real quaternions.
        assert_eq!(Quatd::new(4.0, 0.0, 0.0, 0.0).powf(0.5), Quat::new(2.0, 0.0, 0.0, 0.0));
        assert_eq!(Quatd::new(0.0, 0.0, 0.0, 0.0).powf(2.0), Quat::IDENTITY);
    }

    #[test]
    fn interpolation() {
        let a = Quatd::from_rotation_y(0.3);
        let b = Quatd::from_rotation_y(1.3);
        assert_relative_eq!(a.slerp(b, 0.0), a, epsilon = 1e-12);
        assert_relative_eq!(a.slerp(b, 1.0), b, epsilon = 1e-12);
        assert_relative_eq!(a.slerp(b, 0.25), Quat::from_rotation_y(0.55), epsilon = 1e-12);

        // Takes the shorter path when the quaternions lie in opposite hemispheres.
        assert_relative_eq!(a.slerp(-b, 0.25), Quat::from_rotation_y(0.55), epsilon = 1e-12);

        // Identical rotations fall back to `lerp`.
        let id = Quatd::IDENTITY;
        assert_eq!(id.slerp(id, 0.5), id.lerp(id, 0.5));

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_relative_eq!(Quatd::IDENTITY.lerp(-Quatd::IDENTITY, 0.5).length(), 0.0);

        // With control points at the endpoints, `squad` reduces to `slerp`.
        for t in [0.0, 0.2, 0.5, 0.9, 1.0] {
            assert_relative_eq!(a.squad(b, a, b, t), a.slerp(b, t), epsilon = 1e-12);
        }
    }

    #[test]
    fn slerp_opposite() {
        // `q` and `-q` are the same rotation, so there is nothing to interpolate.
        let q = Quatd::from_rotation_z(0.8);
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_relative_eq!(q.slerp(-q, t), q, epsilon = 1e-12);
            assert_relative_eq!(q.slerp(q, t), q, epsilon = 1e-12);
        }
        let id = Quatd::IDENTITY;
        assert_eq!(id.slerp(-id, 0.5), id);
    }

    #[test]
    fn slerp_f32() {
        let mut rng = fastrand::Rng::with_seed(23);
        let mut random = || {
            Quatf::new(
                rng.f32() * 2.0 - 1.0,
                rng.f32() * 2.0 - 1.0,
                rng.f32() * 2.0 - 1.0,
                rng.f32() * 2.0 - 1.0,
            )
            .normalize()
        };
        for _ in 0..2_000 {
            let a = random();
            let b = random();
            // Nearly identical, identical and opposite rotations hit the `lerp` fallback.
            let nudged = (a + Quat::new(1e-7, -1e-7, 0.0, 1e-7)).normalize();
            for b in [b, a, -a, nudged, -nudged] {
                let b_near = if a.dot(b) < 0.0 { -b } else { b };
                assert_relative_eq!(a.slerp(b, 0.0), a, epsilon = 1e-4);
                assert_relative_eq!(a.slerp(b, 1.0), b_near, epsilon = 1e-4);
                for t in [0.1, 0.5, 0.9] {
                    let q = a.slerp(b, t);
                    assert!(q.into_array().iter().all(|c| c.is_finite()), "{a} {b} {t}");
                    assert!(q.is_normalized_within(1e-4), "{a} {b} {t}");
                }
            }
        }
    }

    #[test]
    fn f32_axes() {
        init_logger();

        let mut rng = fastrand::Rng::with_seed(0x5eed);
        let mut random_direction = || loop {
            let v = vec3(rng.f32() - 0.5, rng.f32() - 0.5, rng.f32() - 0.5);
            if v.length2() > 1e-4 {
                return v.normalize();
            }
        };
        for _ in 0..10_000 {
            let axis = random_direction();
            let q = Quatf::from_axis_angle(axis, 1.0);
            assert!(q.is_normalized_within(1e-5));
            assert_relative_eq!(q * axis, axis, epsilon = 1e-5);

            let u = random_direction();
            let v = random_direction();
            let arc = Quatf::from_rotation_arc(u, v);
            assert!(arc.is_normalized_within(1e-4));
            assert_relative_eq!(arc * u, v, epsilon = 2e-3);
        }

        let q = Quatf::from_axis_angle(vec3(-0.03706247, -0.753145, -0.65680957), 1.0);
        assert_relative_eq!(q.angle(), 1.0, epsilon = 1e-5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rotation axis must be normalized")]
    fn unnormalized_axis() {
        Quatf::from_axis_angle(vec3(1.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn intermediate() {
        // For rotations around the same axis at equal steps, the control point is the middle one.
        let q0 = Quatd::from_rotation_z(0.2);
        let q1 = Quatd::from_rotation_z(0.7);
        let q2 = Quatd::from_rotation_z(1.2);
        assert_relative_eq!(Quat::intermediate(q0, q1, q2), q1, epsilon = 1e-12);

        let s1 = Quat::intermediate(q0, q1, q2);
        assert_relative_eq!(q0.squad(q1, q0, s1, 1.0), q1, epsilon = 1e-12);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "interpolation factor")]
    fn lerp_out_of_range() {
        Quatd::IDENTITY.lerp(Quatd::IDENTITY, 1.5);
    }

    #[test]
    fn comparisons() {
        let a = Quat::new(1.0, 2.0, 3.0, 4.0);
        let b = Quat::new(1.0, 3.0, 2.0, 4.5);
        assert_eq!(a.less_than(b), vec4(false, true, false, true));
        assert_eq!(a.less_than_equal(b), vec4(true, true, false, true));
        assert_eq!(a.greater_than(b), vec4(false, false, true, false));
        assert_eq!(a.greater_than_equal(b), vec4(true, false, true, false));
        assert_eq!(a.equal(b, 0.75), vec4(true, false, false, true));
        assert_eq!(a.not_equal(b, 0.75), vec4(false, true, true, false));
        assert_eq!(a.equal(a, 0.0), vec4(true, true, true, true));
        assert_eq!(
            a.equal_elementwise(b, vec4(0.5, 2.0, 0.5, 2.0)),
            vec4(true, true, false, true)
        );
        assert_eq!(
            a.not_equal_elementwise(b, vec4(0.5, 2.0, 0.5, 2.0)),
            vec4(false, false, true, false)
        );
    }
}
