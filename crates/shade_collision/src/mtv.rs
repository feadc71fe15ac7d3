//! Minimum translation vector

use shade_math::Float2;

use crate::axis::Axis;

/// Smallest single-axis push that separates two overlapping shapes.
///
/// Moving the first shape by [`translation`](Self::translation) resolves the
/// overlap. `ZERO` (also the `Default`) stands for "nothing to resolve".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct MinimumTranslationVector {
    pub axis: Axis,
    pub overlap: f32,
}

impl MinimumTranslationVector {
    pub const ZERO: Self = Self {
        axis: Axis::ZERO,
        overlap: 0.0,
    };

    #[inline]
    pub const fn new(axis: Axis, overlap: f32) -> Self {
        Self { axis, overlap }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.overlap == 0.0 || self.axis.is_degenerate()
    }

    /// Push to apply to the first shape
    #[inline]
    pub fn translation(&self) -> Float2 {
        self.axis.normal * self.overlap
    }
}
