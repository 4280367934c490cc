use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Number, Quat, Vector};

/// Hamilton product.
///
/// When applied to a vector, the right-hand rotation happens first.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [w1, x1, y1, z1] = self.into_array();
        let [w2, x2, y2, z2] = rhs.into_array();
        Quat::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a 3D vector.
impl<T: Number> Mul<Vector<T, 3>> for Quat<T> {
    type Output = Vector<T, 3>;

    fn mul(self, v: Vector<T, 3>) -> Self::Output {
        let two = T::ONE + T::ONE;
        let uv = self.vec.cross(v);
        let uuv = self.vec.cross(uv);
        v + (uv * self.w + uuv) * two
    }
}

/// Rotates the `x`, `y` and `z` components of a 4D vector, leaving `w` unchanged.
impl<T: Number> Mul<Vector<T, 4>> for Quat<T> {
    type Output = Vector<T, 4>;

    fn mul(self, v: Vector<T, 4>) -> Self::Output {
        (self * v.truncate()).extend(v.w)
    }
}

/// Rotates a 3D vector by the *inverse* of the quaternion.
impl<T: Number> Mul<Quat<T>> for Vector<T, 3> {
    type Output = Vector<T, 3>;

    fn mul(self, q: Quat<T>) -> Self::Output {
        q.inverse() * self
    }
}

/// Rotates a 4D vector by the *inverse* of the quaternion, leaving `w` unchanged.
impl<T: Number> Mul<Quat<T>> for Vector<T, 4> {
    type Output = Vector<T, 4>;

    fn mul(self, q: Quat<T>) -> Self::Output {
        q.inverse() * self
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<T: Number> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<T: Number> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Negates every component.
///
/// `-q` represents the same rotation as `q`.
impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<T: Number> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Dividing by zero is a logic error, checked with a debug assertion.
impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        debug_assert!(rhs != T::ZERO, "attempt to divide a quaternion by zero");
        Self(self.0.map(|c| c / rhs))
    }
}

impl<T: Number> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_mul {
    ($($types:ty),+) => {
        $(
            impl Mul<Quat<$types>> for $types {
                type Output = Quat<$types>;

                #[inline]
                fn mul(self, rhs: Quat<$types>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_mul!(i8, i16, i32, i64, isize, f32, f64);

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{radians, vec3, vec4, Quatd, Vec3};

    use super::*;

    #[test]
    fn hamilton_product() {
        let i = Quat::new(0, 1, 0, 0);
        let j = Quat::new(0, 0, 1, 0);
        let k = Quat::new(0, 0, 0, 1);
        let minus_one = Quat::new(-1, 0, 0, 0);
        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);

        let a = Quat::new(1, 2, 3, 4);
        let b = Quat::new(5, 6, 7, 8);
        assert_eq!(a * b, Quat::new(-60, 12, 30, 24));
        assert_eq!(b * a, Quat::new(-60, 20, 14, 32));
        assert_eq!(a * Quat::IDENTITY, a);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn componentwise() {
        let a = Quat::new(1, 2, 3, 4);
        let b = Quat::new(4, 3, 2, 1);
        assert_eq!(a + b, Quat::new(5, 5, 5, 5));
        assert_eq!(a - b, Quat::new(-3, -1, 1, 3));
        assert_eq!(-a, Quat::new(-1, -2, -3, -4));
        assert_eq!(a * 2, Quat::new(2, 4, 6, 8));
        assert_eq!(2 * a, a * 2);
        assert_eq!(Quat::new(2.0, 4.0, 6.0, 8.0) / 2.0, Quat::new(1.0, 2.0, 3.0, 4.0));

        let mut c = a;
        c += b;
        c -= b;
        c *= 3;
        c /= 3;
        assert_eq!(c, a);
    }

    #[test]
    fn rotate_vectors() {
        let q = Quatd::from_axis_angle(vec3(0.0, 0.6, 0.8), 1.2);
        let v = vec3(1.0, -2.0, 0.5);

        // Same as the sandwich product `q * v * q⁻¹`.
        let sandwich = q * Quat::from_scalar_vector(0.0, v) * q.inverse();
        assert_relative_eq!(q * v, sandwich.vec, epsilon = 1e-12);
        assert_relative_eq!((q * v).length(), v.length(), epsilon = 1e-12);

        // `v * q` undoes `q * v`.
        assert_relative_eq!((q * v) * q, v, epsilon = 1e-12);
        assert_relative_eq!(v * q, q.inverse() * v, epsilon = 1e-12);

        let w = vec4(1.0, -2.0, 0.5, 7.0);
        assert_relative_eq!(q * w, (q * v).extend(7.0), epsilon = 1e-12);
        assert_relative_eq!(w * q, (v * q).extend(7.0), epsilon = 1e-12);

        assert_eq!(Quatd::IDENTITY * v, v);
        let half_turn = Quatd::from_rotation_z(radians(180.0));
        assert_relative_eq!(half_turn * Vec3::X, -Vec3::<f64>::X, epsilon = 1e-12);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "divide a quaternion by zero")]
    fn divide_by_zero() {
        let _ = Quatd::IDENTITY / 0.0;
    }
}
