//! Projection and view matrices.
//!
//! Every projection comes in four variants, one for each combination of [`Handedness`] and
//! [`DepthRange`]:
//!
//! - `lh01`: left-handed, depth mapped to `0..=1`
//! - `lh11`: left-handed, depth mapped to `-1..=1`
//! - `rh01`: right-handed, depth mapped to `0..=1`
//! - `rh11`: right-handed, depth mapped to `-1..=1`
//!
//! The variants are not interchangeable. The method without a suffix picks the variant selected by
//! [`HANDEDNESS`] and [`DEPTH_RANGE`].
//!
//! In a left-handed system the camera looks down +Z, in a right-handed one down -Z. Either way,
//! the near plane maps to the lower bound of the depth range and the far plane to 1.

use crate::{DepthRange, Float, Handedness, Matrix, Vec3, DEPTH_RANGE, HANDEDNESS};

/// Checks the extents passed to the frustum and orthographic factories.
fn check_extents<T: Float>(l: T, r: T, b: T, t: T, n: T, f: T) {
    debug_assert!((r - l).abs() > T::EPSILON, "left and right planes must not coincide");
    debug_assert!((t - b).abs() > T::EPSILON, "bottom and top planes must not coincide");
    debug_assert!((f - n).abs() > T::EPSILON, "near and far planes must not coincide");
}

fn check_fov<T: Float>(fovy: T, aspect: T, n: T, f: T) {
    debug_assert!(aspect.abs() > T::EPSILON, "aspect ratio must not be zero");
    debug_assert!(fovy.abs() < T::PI, "field of view must be less than 180 degrees");
    debug_assert!((f - n).abs() > T::EPSILON, "near and far planes must not coincide");
}

fn check_size<T: Float>(w: T, h: T, n: T, f: T) {
    debug_assert!(w.abs() > T::EPSILON, "width must not be zero");
    debug_assert!(h.abs() > T::EPSILON, "height must not be zero");
    debug_assert!((f - n).abs() > T::EPSILON, "near and far planes must not coincide");
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a left-handed perspective projection for the frustum with the given near plane
    /// extents, mapping depth to `0..=1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// # use approx::assert_relative_eq;
    /// let m = Mat4f::frustum_lh01(-100.0, 100.0, -100.0, 100.0, 1.0, 100.0);
    ///
    /// let near = m * vec4(-100.0, -100.0, 1.0, 1.0);
    /// assert_relative_eq!(near.truncate() / near.w, vec3(-1.0, -1.0, 0.0), epsilon = 1e-6);
    /// let far = m * vec4(0.0, 0.0, 100.0, 1.0);
    /// assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-6);
    /// ```
    pub fn frustum_lh01(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        check_extents(l, r, b, t, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two * n / (r - l), o, -(r + l) / (r - l), o],
            [o, two * n / (t - b), -(t + b) / (t - b), o],
            [o, o, f / (f - n), -(f * n) / (f - n)],
            [o, o, l1, o],
        ])
    }

    /// Creates a left-handed perspective projection for the frustum with the given near plane
    /// extents, mapping depth to `-1..=1`.
    pub fn frustum_lh11(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        check_extents(l, r, b, t, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two * n / (r - l), o, -(r + l) / (r - l), o],
            [o, two * n / (t - b), -(t + b) / (t - b), o],
            [o, o, (f + n) / (f - n), -(two * f * n) / (f - n)],
            [o, o, l1, o],
        ])
    }

    /// Creates a right-handed perspective projection for the frustum with the given near plane
    /// extents, mapping depth to `0..=1`.
    pub fn frustum_rh01(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        check_extents(l, r, b, t, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two * n / (r - l), o, (r + l) / (r - l), o],
            [o, two * n / (t - b), (t + b) / (t - b), o],
            [o, o, -f / (f - n), -(f * n) / (f - n)],
            [o, o, -l1, o],
        ])
    }

    /// Creates a right-handed perspective projection for the frustum with the given near plane
    /// extents, mapping depth to `-1..=1`.
    pub fn frustum_rh11(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        check_extents(l, r, b, t, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two * n / (r - l), o, (r + l) / (r - l), o],
            [o, two * n / (t - b), (t + b) / (t - b), o],
            [o, o, -(f + n) / (f - n), -(two * f * n) / (f - n)],
            [o, o, -l1, o],
        ])
    }

    /// Creates a perspective projection for a frustum, using the configured [`HANDEDNESS`] and
    /// [`DEPTH_RANGE`].
    pub fn frustum(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        match (HANDEDNESS, DEPTH_RANGE) {
            (Handedness::Left, DepthRange::ZeroToOne) => Self::frustum_lh01(l, r, b, t, n, f),
            (Handedness::Left, DepthRange::NegativeOneToOne) => Self::frustum_lh11(l, r, b, t, n, f),
            (Handedness::Right, DepthRange::ZeroToOne) => Self::frustum_rh01(l, r, b, t, n, f),
            (Handedness::Right, DepthRange::NegativeOneToOne) => {
                Self::frustum_rh11(l, r, b, t, n, f)
            }
        }
    }

    /// Creates a left-handed orthographic projection mapping depth to `0..=1`.
    pub fn orthographic_lh01(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        check_extents(l, r, b, t, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two / (r - l), o, o, -(r + l) / (r - l)],
            [o, two / (t - b), o, -(t + b) / (t - b)],
            [o, o, l1 / (f - n), -n / (f - n)],
            [o, o, o, l1],
        ])
    }

    /// Creates a left-handed orthographic projection mapping depth to `-1..=1`.
    pub fn orthographic_lh11(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        check_extents(l, r, b, t, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two / (r - l), o, o, -(r + l) / (r - l)],
            [o, two / (t - b), o, -(t + b) / (t - b)],
            [o, o, two / (f - n), -(f + n) / (f - n)],
            [o, o, o, l1],
        ])
    }

    /// Creates a right-handed orthographic projection mapping depth to `0..=1`.
    pub fn orthographic_rh01(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        check_extents(l, r, b, t, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two / (r - l), o, o, -(r + l) / (r - l)],
            [o, two / (t - b), o, -(t + b) / (t - b)],
            [o, o, -l1 / (f - n), -n / (f - n)],
            [o, o, o, l1],
        ])
    }

    /// Creates a right-handed orthographic projection mapping depth to `-1..=1`.
    pub fn orthographic_rh11(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        check_extents(l, r, b, t, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two / (r - l), o, o, -(r + l) / (r - l)],
            [o, two / (t - b), o, -(t + b) / (t - b)],
            [o, o, -two / (f - n), -(f + n) / (f - n)],
            [o, o, o, l1],
        ])
    }

    /// Creates an orthographic projection, using the configured [`HANDEDNESS`] and
    /// [`DEPTH_RANGE`].
    pub fn orthographic(l: T, r: T, b: T, t: T, n: T, f: T) -> Self {
        match (HANDEDNESS, DEPTH_RANGE) {
            (Handedness::Left, DepthRange::ZeroToOne) => Self::orthographic_lh01(l, r, b, t, n, f),
            (Handedness::Left, DepthRange::NegativeOneToOne) => {
                Self::orthographic_lh11(l, r, b, t, n, f)
            }
            (Handedness::Right, DepthRange::ZeroToOne) => {
                Self::orthographic_rh01(l, r, b, t, n, f)
            }
            (Handedness::Right, DepthRange::NegativeOneToOne) => {
                Self::orthographic_rh11(l, r, b, t, n, f)
            }
        }
    }

    /// Creates a left-handed perspective projection from a vertical field of view (in radians)
    /// and an aspect ratio (width / height), mapping depth to `0..=1`.
    pub fn perspective_fov_lh01(fovy: T, aspect: T, n: T, f: T) -> Self {
        check_fov(fovy, aspect, n, f);
        let (o, l1, half) = (T::ZERO, T::ONE, T::from_f64(0.5));
        let d = l1 / (fovy * half).tan();

        Self::from_rows([
            [d / aspect, o, o, o],
            [o, d, o, o],
            [o, o, f / (f - n), -(f * n) / (f - n)],
            [o, o, l1, o],
        ])
    }

    /// Creates a left-handed perspective projection from a vertical field of view (in radians)
    /// and an aspect ratio (width / height), mapping depth to `-1..=1`.
    pub fn perspective_fov_lh11(fovy: T, aspect: T, n: T, f: T) -> Self {
        check_fov(fovy, aspect, n, f);
        let (o, l1, two, half) = (T::ZERO, T::ONE, T::ONE + T::ONE, T::from_f64(0.5));
        let d = l1 / (fovy * half).tan();

        Self::from_rows([
            [d / aspect, o, o, o],
            [o, d, o, o],
            [o, o, (f + n) / (f - n), -(two * f * n) / (f - n)],
            [o, o, l1, o],
        ])
    }

    /// Creates a right-handed perspective projection from a vertical field of view (in radians)
    /// and an aspect ratio (width / height), mapping depth to `0..=1`.
    pub fn perspective_fov_rh01(fovy: T, aspect: T, n: T, f: T) -> Self {
        check_fov(fovy, aspect, n, f);
        let (o, l1, half) = (T::ZERO, T::ONE, T::from_f64(0.5));
        let d = l1 / (fovy * half).tan();

        Self::from_rows([
            [d / aspect, o, o, o],
            [o, d, o, o],
            [o, o, f / (n - f), -(f * n) / (f - n)],
            [o, o, -l1, o],
        ])
    }

    /// Creates a right-handed perspective projection from a vertical field of view (in radians)
    /// and an aspect ratio (width / height), mapping depth to `-1..=1`.
    pub fn perspective_fov_rh11(fovy: T, aspect: T, n: T, f: T) -> Self {
        check_fov(fovy, aspect, n, f);
        let (o, l1, two, half) = (T::ZERO, T::ONE, T::ONE + T::ONE, T::from_f64(0.5));
        let d = l1 / (fovy * half).tan();

        Self::from_rows([
            [d / aspect, o, o, o],
            [o, d, o, o],
            [o, o, -(f + n) / (f - n), -(two * f * n) / (f - n)],
            [o, o, -l1, o],
        ])
    }

    /// Creates a perspective projection from a vertical field of view, using the configured
    /// [`HANDEDNESS`] and [`DEPTH_RANGE`].
    pub fn perspective_fov(fovy: T, aspect: T, n: T, f: T) -> Self {
        match (HANDEDNESS, DEPTH_RANGE) {
            (Handedness::Left, DepthRange::ZeroToOne) => {
                Self::perspective_fov_lh01(fovy, aspect, n, f)
            }
            (Handedness::Left, DepthRange::NegativeOneToOne) => {
                Self::perspective_fov_lh11(fovy, aspect, n, f)
            }
            (Handedness::Right, DepthRange::ZeroToOne) => {
                Self::perspective_fov_rh01(fovy, aspect, n, f)
            }
            (Handedness::Right, DepthRange::NegativeOneToOne) => {
                Self::perspective_fov_rh11(fovy, aspect, n, f)
            }
        }
    }

    /// Creates a left-handed perspective projection from the width and height of the near plane,
    /// mapping depth to `0..=1`.
    pub fn perspective_lh01(w: T, h: T, n: T, f: T) -> Self {
        check_size(w, h, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two * n / w, o, o, o],
            [o, two * n / h, o, o],
            [o, o, f / (f - n), -(f * n) / (f - n)],
            [o, o, l1, o],
        ])
    }

    /// Creates a left-handed perspective projection from the width and height of the near plane,
    /// mapping depth to `-1..=1`.
    pub fn perspective_lh11(w: T, h: T, n: T, f: T) -> Self {
        check_size(w, h, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two * n / w, o, o, o],
            [o, two * n / h, o, o],
            [o, o, (f + n) / (f - n), -(two * f * n) / (f - n)],
            [o, o, l1, o],
        ])
    }

    /// Creates a right-handed perspective projection from the width and height of the near plane,
    /// mapping depth to `0..=1`.
    pub fn perspective_rh01(w: T, h: T, n: T, f: T) -> Self {
        check_size(w, h, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two * n / w, o, o, o],
            [o, two * n / h, o, o],
            [o, o, -f / (f - n), -(f * n) / (f - n)],
            [o, o, -l1, o],
        ])
    }

    /// Creates a right-handed perspective projection from the width and height of the near plane,
    /// mapping depth to `-1..=1`.
    pub fn perspective_rh11(w: T, h: T, n: T, f: T) -> Self {
        check_size(w, h, n, f);
        let (o, l1, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Self::from_rows([
            [two * n / w, o, o, o],
            [o, two * n / h, o, o],
            [o, o, -(f + n) / (f - n), -(two * f * n) / (f - n)],
            [o, o, -l1, o],
        ])
    }

    /// Creates a perspective projection from the size of the near plane, using the configured
    /// [`HANDEDNESS`] and [`DEPTH_RANGE`].
    pub fn perspective(w: T, h: T, n: T, f: T) -> Self {
        match (HANDEDNESS, DEPTH_RANGE) {
            (Handedness::Left, DepthRange::ZeroToOne) => Self::perspective_lh01(w, h, n, f),
            (Handedness::Left, DepthRange::NegativeOneToOne) => Self::perspective_lh11(w, h, n, f),
            (Handedness::Right, DepthRange::ZeroToOne) => Self::perspective_rh01(w, h, n, f),
            (Handedness::Right, DepthRange::NegativeOneToOne) => Self::perspective_rh11(w, h, n, f),
        }
    }

    /// Builds a view matrix from the orthonormal basis with forward axis `z`.
    fn view(eye: Vec3<T>, z: Vec3<T>, up: Vec3<T>) -> Self {
        let x = up.cross(z).normalize();
        let y = z.cross(x);
        let o = T::ZERO;

        Self::from_rows([
            [x.x, x.y, x.z, -x.dot(eye)],
            [y.x, y.y, y.z, -y.dot(eye)],
            [z.x, z.y, z.z, -z.dot(eye)],
            [o, o, o, T::ONE],
        ])
    }

    /// Creates a left-handed view matrix for a camera at `eye` looking at `target`.
    ///
    /// `up` is usually [`Vec3::Y`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let view = Mat4f::look_at_lh(Vec3::ZERO, Vec3::Z, Vec3::Y);
    /// assert_eq!(view, Mat4f::IDENTITY);
    /// ```
    pub fn look_at_lh(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        Self::view(eye, (target - eye).normalize(), up)
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking at `target`.
    ///
    /// `up` is usually [`Vec3::Y`].
    pub fn look_at_rh(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        Self::view(eye, (eye - target).normalize(), up)
    }

    /// Creates a view matrix for a camera at `eye` looking at `target`, using the configured
    /// [`HANDEDNESS`].
    pub fn look_at(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        match HANDEDNESS {
            Handedness::Left => Self::look_at_lh(eye, target, up),
            Handedness::Right => Self::look_at_rh(eye, target, up),
        }
    }

    /// Creates a left-handed view matrix for a camera at `eye` looking in `direction`.
    pub fn look_to_lh(eye: Vec3<T>, direction: Vec3<T>, up: Vec3<T>) -> Self {
        Self::view(eye, direction.normalize(), up)
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking in `direction`.
    pub fn look_to_rh(eye: Vec3<T>, direction: Vec3<T>, up: Vec3<T>) -> Self {
        Self::view(eye, (-direction).normalize(), up)
    }

    /// Creates a view matrix for a camera at `eye` looking in `direction`, using the configured
    /// [`HANDEDNESS`].
    pub fn look_to(eye: Vec3<T>, direction: Vec3<T>, up: Vec3<T>) -> Self {
        match HANDEDNESS {
            Handedness::Left => Self::look_to_lh(eye, direction, up),
            Handedness::Right => Self::look_to_rh(eye, direction, up),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{
        vec3, vec4, DepthRange, Handedness, Mat3d, Mat4d, Mat4f, Vec3, Vec4, DEPTH_RANGE,
        HANDEDNESS,
    };

    fn project(m: Mat4d, p: Vec4<f64>) -> Vec3<f64> {
        let clip = m * p;
        clip.truncate() / clip.w
    }

    const L: f64 = -100.0;
    const R: f64 = 100.0;
    const B: f64 = -50.0;
    const T: f64 = 50.0;
    const N: f64 = 1.0;
    const F: f64 = 100.0;

    /// Checks that the near corners map to `(±1, ±1, near_depth)` and the far plane to depth 1,
    /// with the camera looking down `dir` (+1 or -1 on the Z axis).
    fn check_frustum(m: Mat4d, dir: f64, near_depth: f64) {
        let eps = 1e-12;
        assert_relative_eq!(project(m, vec4(L, B, N * dir, 1.0)), vec3(-1.0, -1.0, near_depth), epsilon = eps);
        assert_relative_eq!(project(m, vec4(R, T, N * dir, 1.0)), vec3(1.0, 1.0, near_depth), epsilon = eps);
        let far = project(m, vec4(0.0, 0.0, F * dir, 1.0));
        assert_relative_eq!(far.z, 1.0, epsilon = eps);
    }

    #[test]
    fn frustum() {
        check_frustum(Mat4d::frustum_lh01(L, R, B, T, N, F), 1.0, 0.0);
        check_frustum(Mat4d::frustum_lh11(L, R, B, T, N, F), 1.0, -1.0);
        check_frustum(Mat4d::frustum_rh01(L, R, B, T, N, F), -1.0, 0.0);
        check_frustum(Mat4d::frustum_rh11(L, R, B, T, N, F), -1.0, -1.0);
    }

    #[test]
    fn asymmetric_frustum() {
        let m = Mat4d::frustum_lh01(0.0, 2.0, 0.0, 1.0, 1.0, 10.0);
        assert_relative_eq!(project(m, vec4(0.0, 0.0, 1.0, 1.0)), vec3(-1.0, -1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(project(m, vec4(2.0, 1.0, 1.0, 1.0)), vec3(1.0, 1.0, 0.0), epsilon = 1e-12);

        let m = Mat4d::frustum_rh11(0.0, 2.0, 0.0, 1.0, 1.0, 10.0);
        assert_relative_eq!(project(m, vec4(0.0, 0.0, -1.0, 1.0)), vec3(-1.0, -1.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(project(m, vec4(2.0, 1.0, -1.0, 1.0)), vec3(1.0, 1.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn orthographic() {
        let eps = 1e-12;
        for (m, dir, near_depth) in [
            (Mat4d::orthographic_lh01(L, R, B, T, N, F), 1.0, 0.0),
            (Mat4d::orthographic_lh11(L, R, B, T, N, F), 1.0, -1.0),
            (Mat4d::orthographic_rh01(L, R, B, T, N, F), -1.0, 0.0),
            (Mat4d::orthographic_rh11(L, R, B, T, N, F), -1.0, -1.0),
        ] {
            assert_eq!(m[3], vec4(0.0, 0.0, 0.0, 1.0));
            assert_relative_eq!(project(m, vec4(L, B, N * dir, 1.0)), vec3(-1.0, -1.0, near_depth), epsilon = eps);
            assert_relative_eq!(project(m, vec4(R, T, F * dir, 1.0)), vec3(1.0, 1.0, 1.0), epsilon = eps);
        }
    }

    #[test]
    fn perspective_fov() {
        let fovy = std::f64::consts::FRAC_PI_2;
        let eps = 1e-12;
        for (m, dir, near_depth) in [
            (Mat4d::perspective_fov_lh01(fovy, 2.0, N, F), 1.0, 0.0),
            (Mat4d::perspective_fov_lh11(fovy, 2.0, N, F), 1.0, -1.0),
            (Mat4d::perspective_fov_rh01(fovy, 2.0, N, F), -1.0, 0.0),
            (Mat4d::perspective_fov_rh11(fovy, 2.0, N, F), -1.0, -1.0),
        ] {
            // 90° vertical fov: the near plane spans -1..1 vertically and -2..2 horizontally.
            assert_relative_eq!(project(m, vec4(2.0, 1.0, N * dir, 1.0)), vec3(1.0, 1.0, near_depth), epsilon = eps);
            assert_relative_eq!(project(m, vec4(0.0, 0.0, F * dir, 1.0)).z, 1.0, epsilon = eps);
        }
    }

    #[test]
    fn perspective() {
        let eps = 1e-12;
        for (m, dir, near_depth) in [
            (Mat4d::perspective_lh01(4.0, 2.0, N, F), 1.0, 0.0),
            (Mat4d::perspective_lh11(4.0, 2.0, N, F), 1.0, -1.0),
            (Mat4d::perspective_rh01(4.0, 2.0, N, F), -1.0, 0.0),
            (Mat4d::perspective_rh11(4.0, 2.0, N, F), -1.0, -1.0),
        ] {
            assert_relative_eq!(project(m, vec4(-2.0, 1.0, N * dir, 1.0)), vec3(-1.0, 1.0, near_depth), epsilon = eps);
            assert_relative_eq!(project(m, vec4(0.0, 0.0, F * dir, 1.0)).z, 1.0, epsilon = eps);
        }

        // The size form is the fov form with `tan(fovy / 2) = h / 2n`.
        assert_relative_eq!(
            Mat4d::perspective_lh01(4.0, 2.0, N, F),
            Mat4d::perspective_fov_lh01(std::f64::consts::FRAC_PI_2, 2.0, N, F),
            epsilon = 1e-12
        );
    }

    #[test]
    fn dispatch() {
        let expected = match (HANDEDNESS, DEPTH_RANGE) {
            (Handedness::Left, DepthRange::ZeroToOne) => Mat4d::frustum_lh01(L, R, B, T, N, F),
            (Handedness::Left, _) => Mat4d::frustum_lh11(L, R, B, T, N, F),
            (Handedness::Right, DepthRange::ZeroToOne) => Mat4d::frustum_rh01(L, R, B, T, N, F),
            (Handedness::Right, _) => Mat4d::frustum_rh11(L, R, B, T, N, F),
        };
        assert_eq!(Mat4d::frustum(L, R, B, T, N, F), expected);
    }

    type Projection = fn(f64, f64, f64, f64, f64, f64) -> Mat4d;
    type Perspective = fn(f64, f64, f64, f64) -> Mat4d;
    type View = fn(Vec3<f64>, Vec3<f64>, Vec3<f64>) -> Mat4d;

    /// Checks every dispatcher against the explicit variant selected by the enabled features.
    fn check_conventions(
        (frustum, orthographic): (Projection, Projection),
        (perspective, perspective_fov): (Perspective, Perspective),
        (look_at, look_to): (View, View),
    ) {
        assert_eq!(Mat4d::frustum(L, R, B, T, N, F), frustum(L, R, B, T, N, F));
        assert_eq!(Mat4d::orthographic(L, R, B, T, N, F), orthographic(L, R, B, T, N, F));
        assert_eq!(Mat4d::perspective(4.0, 2.0, N, F), perspective(4.0, 2.0, N, F));
        assert_eq!(Mat4d::perspective_fov(1.0, 2.0, N, F), perspective_fov(1.0, 2.0, N, F));

        let eye = vec3(3.0, 4.0, -2.0);
        let target = vec3(-1.0, 2.0, 5.0);
        assert_eq!(Mat4d::look_at(eye, target, Vec3::Y), look_at(eye, target, Vec3::Y));
        assert_eq!(Mat4d::look_to(eye, Vec3::Z, Vec3::Y), look_to(eye, Vec3::Z, Vec3::Y));
    }

    #[test]
    #[cfg(not(any(feature = "right-handed", feature = "depth-negative-one-to-one")))]
    fn conventions_lh01() {
        assert_eq!((HANDEDNESS, DEPTH_RANGE), (Handedness::Left, DepthRange::ZeroToOne));
        check_conventions(
            (Mat4d::frustum_lh01, Mat4d::orthographic_lh01),
            (Mat4d::perspective_lh01, Mat4d::perspective_fov_lh01),
            (Mat4d::look_at_lh, Mat4d::look_to_lh),
        );
    }

    #[test]
    #[cfg(all(not(feature = "right-handed"), feature = "depth-negative-one-to-one"))]
    fn conventions_lh11() {
        assert_eq!((HANDEDNESS, DEPTH_RANGE), (Handedness::Left, DepthRange::NegativeOneToOne));
        check_conventions(
            (Mat4d::frustum_lh11, Mat4d::orthographic_lh11),
            (Mat4d::perspective_lh11, Mat4d::perspective_fov_lh11),
            (Mat4d::look_at_lh, Mat4d::look_to_lh),
        );
    }

    #[test]
    #[cfg(all(feature = "right-handed", not(feature = "depth-negative-one-to-one")))]
    fn conventions_rh01() {
        assert_eq!((HANDEDNESS, DEPTH_RANGE), (Handedness::Right, DepthRange::ZeroToOne));
        check_conventions(
            (Mat4d::frustum_rh01, Mat4d::orthographic_rh01),
            (Mat4d::perspective_rh01, Mat4d::perspective_fov_rh01),
            (Mat4d::look_at_rh, Mat4d::look_to_rh),
        );
    }

    #[test]
    #[cfg(all(feature = "right-handed", feature = "depth-negative-one-to-one"))]
    fn conventions_rh11() {
        assert_eq!((HANDEDNESS, DEPTH_RANGE), (Handedness::Right, DepthRange::NegativeOneToOne));
        check_conventions(
            (Mat4d::frustum_rh11, Mat4d::orthographic_rh11),
            (Mat4d::perspective_rh11, Mat4d::perspective_fov_rh11),
            (Mat4d::look_at_rh, Mat4d::look_to_rh),
        );
    }

    #[test]
    fn look_at() {
        assert_eq!(Mat4f::look_at_lh(Vec3::ZERO, Vec3::Z, Vec3::Y), Mat4f::IDENTITY);
        assert_eq!(Mat4f::look_at_rh(Vec3::ZERO, -Vec3::<f32>::Z, Vec3::Y), Mat4f::IDENTITY);

        // The eye ends up at the origin and the target straight ahead.
        let eye = vec3(3.0, 4.0, -2.0);
        let target = vec3(-1.0, 2.0, 5.0);
        let lh = Mat4d::look_at_lh(eye, target, Vec3::Y);
        let dist = (target - eye).length();
        assert_relative_eq!(lh * eye.extend(1.0), vec4(0.0, 0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(lh * target.extend(1.0), vec4(0.0, 0.0, dist, 1.0), epsilon = 1e-12);

        let rh = Mat4d::look_at_rh(eye, target, Vec3::Y);
        assert_relative_eq!(rh * target.extend(1.0), vec4(0.0, 0.0, -dist, 1.0), epsilon = 1e-12);

        // The rotational part is orthonormal.
        let rot = lh.resize::<3, 3>();
        assert_relative_eq!(rot * rot.transpose(), Mat3d::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn look_to() {
        let eye = vec3(1.0, 2.0, 3.0);
        let dir = vec3(0.0, 0.0, 2.0);
        assert_relative_eq!(
            Mat4d::look_to_lh(eye, dir, Vec3::Y),
            Mat4d::look_at_lh(eye, eye + dir, Vec3::Y),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Mat4d::look_to_rh(eye, dir, Vec3::Y),
            Mat4d::look_at_rh(eye, eye + dir, Vec3::Y),
            epsilon = 1e-12
        );
    }
}
