//! Scale, rotation and translation composed into a cached affine matrix.

use std::cell::Cell;

use crate::{Float, Mat4, Quat, Vec3, Vector};

/// A [`Transform`] with [`f32`] components.
pub type Transformf = Transform<f32>;
/// A [`Transform`] with [`f64`] components.
pub type Transformd = Transform<f64>;

/// An affine transformation built from a scale, a rotation around a pivot point, and a
/// translation.
///
/// The combined matrix is only recomputed when [`Transform::matrix`] is called after one of the
/// components has changed. When applied to a point, the scale is applied first, then the rotation
/// around [`Transform::rotation_origin`], then the translation.
///
/// # Examples
///
/// ```
/// # use fastmath::*;
/// # use approx::assert_relative_eq;
/// let mut transform = Transformd::default();
/// transform.set_scale(vec3(2.0, 2.0, 2.0));
/// transform.set_rotation(Quat::from_rotation_z(radians(90.0)));
/// transform.set_translation(vec3(0.0, 0.0, 5.0));
///
/// let p = transform.matrix() * vec4(1.0, 0.0, 0.0, 1.0);
/// assert_relative_eq!(p, vec4(0.0, 2.0, 5.0, 1.0), epsilon = 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Transform<T: Float> {
    scale: Vec3<T>,
    translation: Vec3<T>,
    rotation_origin: Vec3<T>,
    rotation: Quat<T>,
    matrix: Cell<Mat4<T>>,
    dirty: Cell<bool>,
}

impl<T: Float> Transform<T> {
    /// Creates a transform from its components.
    ///
    /// The matrix is built lazily on the first call to [`Transform::matrix`].
    pub fn new(
        scale: Vec3<T>,
        translation: Vec3<T>,
        rotation_origin: Vec3<T>,
        rotation: Quat<T>,
    ) -> Self {
        Self {
            scale,
            translation,
            rotation_origin,
            rotation,
            matrix: Cell::new(Mat4::IDENTITY),
            dirty: Cell::new(true),
        }
    }

    /// Returns the per-axis scale factors.
    #[inline]
    pub fn scale(&self) -> Vec3<T> {
        self.scale
    }

    /// Sets the per-axis scale factors.
    pub fn set_scale(&mut self, scale: Vec3<T>) {
        self.scale = scale;
        self.dirty.set(true);
    }

    /// Returns the offset applied after scaling and rotation.
    #[inline]
    pub fn translation(&self) -> Vec3<T> {
        self.translation
    }

    /// Sets the offset applied after scaling and rotation.
    pub fn set_translation(&mut self, translation: Vec3<T>) {
        self.translation = translation;
        self.dirty.set(true);
    }

    /// Returns the point that the rotation pivots around, before translation.
    #[inline]
    pub fn rotation_origin(&self) -> Vec3<T> {
        self.rotation_origin
    }

    /// Sets the pivot point of the rotation.
    pub fn set_rotation_origin(&mut self, rotation_origin: Vec3<T>) {
        self.rotation_origin = rotation_origin;
        self.dirty.set(true);
    }

    /// Returns the rotation, applied around [`Transform::rotation_origin`].
    #[inline]
    pub fn rotation(&self) -> Quat<T> {
        self.rotation
    }

    /// Sets the rotation.
    ///
    /// `rotation` should be normalized, otherwise it also scales.
    pub fn set_rotation(&mut self, rotation: Quat<T>) {
        self.rotation = rotation;
        self.dirty.set(true);
    }

    /// Returns the composed transformation matrix, rebuilding it if any component changed.
    pub fn matrix(&self) -> Mat4<T> {
        if self.dirty.get() {
            log::trace!("rebuilding transform matrix");
            self.matrix.set(self.compose());
            self.dirty.set(false);
        }
        self.matrix.get()
    }

    fn compose(&self) -> Mat4<T> {
        Mat4::translation(self.translation)
            * Mat4::translation(self.rotation_origin)
            * self.rotation.to_mat4()
            * Mat4::translation(-self.rotation_origin)
            * Mat4::scaling(self.scale)
    }
}

impl<T: Float> Default for Transform<T> {
    /// The identity transform.
    fn default() -> Self {
        Self::new(Vector::splat(T::ONE), Vec3::ZERO, Vec3::ZERO, Quat::IDENTITY)
    }
}
