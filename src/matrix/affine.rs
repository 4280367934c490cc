//! Affine transformation matrices.
//!
//! All matrices here transform column vectors, ie. they are applied as `matrix * vector`.

use crate::{Float, Matrix, Vec3};

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a matrix that translates points by `t`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let m = Mat4f::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
    /// // Directions (w = 0) are unaffected.
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
    /// ```
    #[doc(alias = "translate")]
    pub fn translation(t: Vec3<T>) -> Self {
        let mut m = Self::IDENTITY;
        m[(0, 3)] = t.x;
        m[(1, 3)] = t.y;
        m[(2, 3)] = t.z;
        m
    }

    /// Creates a matrix that scales each axis by the corresponding component of `s`.
    #[doc(alias = "scale")]
    pub fn scaling(s: Vec3<T>) -> Self {
        Self::from_diagonal([s.x, s.y, s.z, T::ONE])
    }

    /// Creates a matrix that rotates by `angle` radians around the X axis.
    #[doc(alias = "rotate_x")]
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        Self::from_rows([
            [l, o, o, o],
            [o, c, -s, o],
            [o, s, c, o],
            [o, o, o, l],
        ])
    }

    /// Creates a matrix that rotates by `angle` radians around the Y axis.
    #[doc(alias = "rotate_y")]
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        Self::from_rows([
            [c, o, s, o],
            [o, l, o, o],
            [-s, o, c, o],
            [o, o, o, l],
        ])
    }

    /// Creates a matrix that rotates by `angle` radians around the Z axis.
    #[doc(alias = "rotate_z")]
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        Self::from_rows([
            [c, -s, o, o],
            [s, c, o, o],
            [o, o, l, o],
            [o, o, o, l],
        ])
    }

    /// Creates a matrix that rotates by `angle` radians around `axis`, using Rodrigues' rotation
    /// formula.
    ///
    /// `axis` must be normalized. This is checked with a debug assertion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// # use approx::assert_relative_eq;
    /// let angle = 0.7f64;
    /// assert_relative_eq!(
    ///     Mat4::rotation_axis_angle(Vec3::Z, angle),
    ///     Mat4::rotation_z(angle),
    ///     epsilon = 1e-12,
    /// );
    /// ```
    #[doc(alias = "rotate_axis_angle")]
    pub fn rotation_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        debug_assert!(axis.is_normalized_approx(), "rotation axis must be normalized");

        let (s, c) = angle.sin_cos();
        let t = T::ONE - c;
        let [x, y, z] = axis.into_array();
        let (sx, sy, sz) = (s * x, s * y, s * z);
        let (xx, xy, xz) = (x * x, x * y, x * z);
        let (yy, yz, zz) = (y * y, y * z, z * z);
        let o = T::ZERO;

        Self::from_rows([
            [t * xx + c, t * xy - sz, t * xz + sy, o],
            [t * xy + sz, t * yy + c, t * yz - sx, o],
            [t * xz - sy, t * yz + sx, t * zz + c, o],
            [o, o, o, T::ONE],
        ])
    }
}
