//! Build-time conventions used by the projection and view matrix dispatchers.
//!
//! The conventions are selected with Cargo features:
//!
//! - `right-handed` switches [`HANDEDNESS`] from [`Handedness::Left`] to [`Handedness::Right`].
//! - `depth-negative-one-to-one` switches [`DEPTH_RANGE`] from [`DepthRange::ZeroToOne`] to
//!   [`DepthRange::NegativeOneToOne`].

/// Orientation of the coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    /// +Z points away from the viewer.
    Left,
    /// +Z points towards the viewer.
    Right,
}

/// Clip-space depth range produced by projection matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthRange {
    /// Near plane at 0, far plane at 1 (Direct3D, Vulkan, Metal, WebGPU).
    ZeroToOne,
    /// Near plane at -1, far plane at 1 (OpenGL).
    NegativeOneToOne,
}

/// The handedness used by [`Matrix::look_at`], [`Matrix::frustum`] and the other dispatchers.
///
/// [`Matrix::look_at`]: crate::Matrix::look_at
/// [`Matrix::frustum`]: crate::Matrix::frustum
pub const HANDEDNESS: Handedness = if cfg!(feature = "right-handed") {
    Handedness::Right
} else {
    Handedness::Left
};

/// The depth range used by [`Matrix::frustum`] and the other projection dispatchers.
///
/// [`Matrix::frustum`]: crate::Matrix::frustum
pub const DEPTH_RANGE: DepthRange = if cfg!(feature = "depth-negative-one-to-one") {
    DepthRange::NegativeOneToOne
} else {
    DepthRange::ZeroToOne
};
