//! Named element access for small vectors.
//!
//! Each vector derefs to a `#[repr(C)]` struct with the same layout as its element array, and
//! each of those derefs to the next set of names for the same elements.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct R<T> {
    pub r: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RG<T> {
    pub r: T,
    pub g: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (), // prevent external construction
}

/// Texture coordinates.
#[repr(C)]
pub struct ST<T> {
    pub s: T,
    pub t: T,
    _priv: (), // prevent external construction
}

/// Texture coordinates.
#[repr(C)]
pub struct UV<T> {
    pub u: T,
    pub v: T,
    _priv: (), // prevent external construction
}

/// Implements `Deref` and `DerefMut` from `$from` to the layout-compatible `$to`.
macro_rules! view {
    ($($from:ty => $to:ty;)+) => {
        $(
            impl<T> Deref for $from {
                type Target = $to;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $from {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

view! {
    Vector<T, 1> => X<T>;
    Vector<T, 2> => XY<T>;
    Vector<T, 3> => XYZ<T>;
    Vector<T, 4> => XYZW<T>;

    X<T> => R<T>;
    XY<T> => RG<T>;
    XYZ<T> => RGB<T>;
    XYZW<T> => RGBA<T>;

    RG<T> => ST<T>;
    ST<T> => UV<T>;
}
