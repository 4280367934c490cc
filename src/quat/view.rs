use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{Quat, Vector};

#[repr(C)]
pub struct WXYZ<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

/// The real part `s` and the imaginary part `vec` of a quaternion.
#[repr(C)]
pub struct ScalarVector<T> {
    pub s: T,
    pub vec: Vector<T, 3>,
    _priv: (), // prevent external construction
}

impl<T> Deref for Quat<T> {
    type Target = WXYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for WXYZ<T> {
    type Target = ScalarVector<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for WXYZ<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
