//! Float axis-aligned box and collision resolution

use std::fmt;

use shade_math::{float2, Float2};

use crate::aabb_int::AxisAlignedBox2i;
use crate::axis::Axis;
use crate::mtv::MinimumTranslationVector;

/// 2D axis-aligned box with float coordinates.
///
/// `min <= max` per component is expected but never enforced. Inverted
/// boxes pass through every operation unchanged; check with [`is_valid`](Self::is_valid).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct AxisAlignedBox2 {
    pub min: Float2,
    pub max: Float2,
}

/// Which side of the overlap a collision is resolved on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resolve {
    Horizontal,
    Vertical,
}

/// `own` when it lies strictly inside `(lo, hi)`, otherwise `fallback`
#[inline]
fn pick(own: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    if lo < own && own < hi {
        own
    } else {
        fallback
    }
}

impl AxisAlignedBox2 {
    pub const ZERO: Self = Self::new(Float2::ZERO, Float2::ZERO);

    #[inline]
    pub const fn new(min: Float2, max: Float2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_center_size(center: Float2, size: Float2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Box with origin `(x, y)` and the given dimensions
    #[inline]
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(float2(x, y), float2(x + width, y + height))
    }

    /// Tightest box around `points`, `None` when there are none
    pub fn from_points(points: &[Float2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for &point in rest {
            bounds.merge_point(point);
        }
        Some(bounds)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Float2 {
        self.max - self.min
    }

    #[inline]
    pub fn half_size(&self) -> Float2 {
        self.size() * 0.5
    }

    #[inline]
    pub fn center(&self) -> Float2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Corners counter-clockwise from `min`
    pub fn corners(&self) -> [Float2; 4] {
        [
            self.min,
            float2(self.max.x, self.min.y),
            self.max,
            float2(self.min.x, self.max.y),
        ]
    }

    /// `min <= max` on both axes
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    #[inline]
    pub fn set_extents(&mut self, min: Float2, max: Float2) {
        self.min = min;
        self.max = max;
    }

    #[inline]
    pub fn translate(&mut self, offset: Float2) {
        self.min += offset;
        self.max += offset;
    }

    /// Grow to cover `other` as well
    pub fn merge(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Grow to cover `point` as well
    pub fn merge_point(&mut self, point: Float2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow by `dx` horizontally and `dy` vertically, half on each side
    pub fn inflate(&mut self, dx: f32, dy: f32) {
        let half = float2(dx, dy) * 0.5;
        self.min -= half;
        self.max += half;
    }

    /// Resize around the center by a per-axis factor
    pub fn scale(&mut self, factor: Float2) {
        let delta = self.size() * (factor - 1.0);
        self.inflate(delta.x, delta.y);
    }

    #[inline]
    pub fn scale_uniform(&mut self, factor: f32) {
        self.scale(Float2::splat(factor));
    }

    /// Point inside or on the boundary
    #[inline]
    pub fn contains(&self, point: Float2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    #[inline]
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Strict overlap test; boxes that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Overlap rectangle, `None` when the boxes do not intersect.
    ///
    /// Each bound of `self` is kept when it lies strictly inside `other` on
    /// that axis, otherwise the matching bound of `other` is used.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let (lo, hi) = (other.min, other.max);
        Some(Self::new(
            float2(
                pick(self.min.x, lo.x, hi.x, lo.x),
                pick(self.min.y, lo.y, hi.y, lo.y),
            ),
            float2(
                pick(self.max.x, lo.x, hi.x, hi.x),
                pick(self.max.y, lo.y, hi.y, hi.y),
            ),
        ))
    }

    /// Minimum translation that pushes `self` out of `other`, resolved along
    /// the axis with the smaller overlap. `None` when there is no overlap.
    pub fn collide(&self, other: &Self) -> Option<MinimumTranslationVector> {
        let overlap = self.intersection(other)?;
        let adjust = overlap.size();
        let resolve = if adjust.x < adjust.y {
            Resolve::Horizontal
        } else {
            Resolve::Vertical
        };
        Some(Self::resolve(&overlap, other, resolve))
    }

    /// Like [`collide`](Self::collide) but always resolved horizontally
    pub fn collide_x(&self, other: &Self) -> Option<MinimumTranslationVector> {
        let overlap = self.intersection(other)?;
        Some(Self::resolve(&overlap, other, Resolve::Horizontal))
    }

    /// Like [`collide`](Self::collide) but always resolved vertically
    pub fn collide_y(&self, other: &Self) -> Option<MinimumTranslationVector> {
        let overlap = self.intersection(other)?;
        Some(Self::resolve(&overlap, other, Resolve::Vertical))
    }

    fn resolve(overlap: &Self, other: &Self, resolve: Resolve) -> MinimumTranslationVector {
        let (x0, y0) = (overlap.min.x, overlap.min.y);
        let (x1, y1) = (overlap.max.x, overlap.max.y);
        let center = overlap.center();
        let other_center = other.center();

        // The normal points from `other` toward the overlap's side
        let (axis, amount) = match resolve {
            Resolve::Horizontal => {
                let axis = if center.x < other_center.x {
                    Axis::from_points(float2(x0, y0), float2(x0, y1))
                } else {
                    Axis::from_points(float2(x1, y1), float2(x1, y0))
                };
                (axis, overlap.width())
            }
            Resolve::Vertical => {
                let axis = if center.y > other_center.y {
                    Axis::from_points(float2(x0, y0), float2(x1, y0))
                } else {
                    Axis::from_points(float2(x1, y1), float2(x0, y1))
                };
                (axis, overlap.height())
            }
        };

        log::trace!("Resolved {:?} along {} by {}", resolve, axis.normal, amount);
        MinimumTranslationVector::new(axis, amount)
    }

    /// Smallest integer box covering `self`
    pub fn round_out(&self) -> AxisAlignedBox2i {
        AxisAlignedBox2i::new(self.min.floor().as_int(), self.max.ceil().as_int())
    }
}

impl From<AxisAlignedBox2i> for AxisAlignedBox2 {
    #[inline]
    fn from(b: AxisAlignedBox2i) -> Self {
        Self::new(b.min.as_float(), b.max.as_float())
    }
}

impl fmt::Display for AxisAlignedBox2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}; {}]", self.min, self.max)
    }
}
