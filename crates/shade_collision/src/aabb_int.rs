//! Integer axis-aligned box

use std::fmt;

use shade_math::{int2, Float2, Int2};

/// 2D axis-aligned box with integer coordinates.
///
/// Mirrors [`AxisAlignedBox2`](crate::AxisAlignedBox2) without collision
/// resolution. The same unchecked `min <= max` convention applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct AxisAlignedBox2i {
    pub min: Int2,
    pub max: Int2,
}

#[inline]
fn pick(own: i32, lo: i32, hi: i32, fallback: i32) -> i32 {
    if lo < own && own < hi {
        own
    } else {
        fallback
    }
}

impl AxisAlignedBox2i {
    pub const ZERO: Self = Self::new(Int2::ZERO, Int2::ZERO);

    #[inline]
    pub const fn new(min: Int2, max: Int2) -> Self {
        Self { min, max }
    }

    /// `size` is split as in [`inflate`](Self::inflate): an odd remainder goes to `max`
    pub fn from_center_size(center: Int2, size: Int2) -> Self {
        let mut b = Self::new(center, center);
        b.inflate(size.x, size.y);
        b
    }

    #[inline]
    pub fn from_rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(int2(x, y), int2(x + width, y + height))
    }

    pub fn from_points(points: &[Int2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for &point in rest {
            bounds.merge_point(point);
        }
        Some(bounds)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Int2 {
        self.max - self.min
    }

    /// Exact half extents, which may fall between integer coordinates
    #[inline]
    pub fn half_size(&self) -> Float2 {
        self.size().as_float() * 0.5
    }

    #[inline]
    pub fn center(&self) -> Float2 {
        (self.min.as_float() + self.max.as_float()) * 0.5
    }

    /// Widened to `i64` so large boxes cannot overflow
    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    pub fn corners(&self) -> [Int2; 4] {
        [
            self.min,
            int2(self.max.x, self.min.y),
            self.max,
            int2(self.min.x, self.max.y),
        ]
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    #[inline]
    pub fn set_extents(&mut self, min: Int2, max: Int2) {
        self.min = min;
        self.max = max;
    }

    #[inline]
    pub fn translate(&mut self, offset: Int2) {
        self.min += offset;
        self.max += offset;
    }

    pub fn merge(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn merge_point(&mut self, point: Int2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow by `dx`/`dy` split across both sides. `min` moves by the floored
    /// half, `max` by the floored half plus the remainder, so the total
    /// growth is exact. Edges clamp at the `i32` limits.
    pub fn inflate(&mut self, dx: i32, dy: i32) {
        let delta = int2(dx, dy);
        let half = int2(dx.div_euclid(2), dy.div_euclid(2));
        let remainder = int2(dx.rem_euclid(2), dy.rem_euclid(2));
        debug_assert_eq!(half * 2 + remainder, delta);
        self.min = self.min.zip_map(half, i32::saturating_sub);
        self.max = self.max.zip_map(half + remainder, i32::saturating_add);
    }

    /// Resize around the center, rounding the scaled size to whole units
    pub fn scale(&mut self, factor: Float2) {
        let size = self.size();
        let target = (size.as_float() * factor).round().as_int();
        let delta = target - size;
        self.inflate(delta.x, delta.y);
    }

    #[inline]
    pub fn scale_uniform(&mut self, factor: f32) {
        self.scale(Float2::splat(factor));
    }

    #[inline]
    pub fn contains(&self, point: Int2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    #[inline]
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let (lo, hi) = (other.min, other.max);
        Some(Self::new(
            int2(
                pick(self.min.x, lo.x, hi.x, lo.x),
                pick(self.min.y, lo.y, hi.y, lo.y),
            ),
            int2(
                pick(self.max.x, lo.x, hi.x, hi.x),
                pick(self.max.y, lo.y, hi.y, hi.y),
            ),
        ))
    }
}

impl fmt::Display for AxisAlignedBox2i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}; {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_math::float2;

    #[test]
    fn test_queries() {
        let b = AxisAlignedBox2i::from_rect(1, 2, 4, 6);
        assert_eq!(b.max, int2(5, 8));
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 6);
        assert_eq!(b.area(), 24);
        assert_eq!(b.center(), float2(3.0, 5.0));
        assert_eq!(b.half_size(), float2(2.0, 3.0));
        assert_eq!(b.corners()[3], int2(1, 8));
        assert!(b.is_valid());
        assert_eq!(b.to_string(), "[1, 2; 5, 8]");
    }

    #[test]
    fn test_contains_and_intersects() {
        let a = AxisAlignedBox2i::from_rect(0, 0, 10, 10);
        assert!(a.contains(int2(10, 10)));
        assert!(!a.contains(int2(11, 5)));

        let touching = AxisAlignedBox2i::from_rect(10, 0, 10, 10);
        assert!(!a.intersects(&touching));
        assert_eq!(a.intersection(&touching), None);

        let b = AxisAlignedBox2i::new(int2(5, 0), int2(15, 10));
        assert_eq!(a.intersection(&b), Some(AxisAlignedBox2i::new(int2(5, 0), int2(10, 10))));
        assert!(a.contains_box(&AxisAlignedBox2i::from_rect(2, 2, 3, 3)));
    }

    #[test]
    fn test_inflate_odd_remainder_goes_to_max() {
        let mut b = AxisAlignedBox2i::from_rect(0, 0, 4, 4);
        b.inflate(3, 2);
        assert_eq!(b, AxisAlignedBox2i::new(int2(-1, -1), int2(6, 5)));
        assert_eq!(b.size(), int2(7, 6));

        // Negative odd deltas still shrink by exactly |d|
        let mut s = AxisAlignedBox2i::from_rect(0, 0, 10, 10);
        s.inflate(-3, 0);
        assert_eq!(s, AxisAlignedBox2i::new(int2(2, 0), int2(9, 10)));
        assert_eq!(s.width(), 7);

        let mut z = b;
        z.inflate(0, 0);
        assert_eq!(z, b);
    }

    #[test]
    fn test_inflate_clamps_at_limits() {
        let mut b = AxisAlignedBox2i::new(int2(i32::MIN + 10, -5), int2(i32::MAX - 10, 5));
        b.inflate(i32::MAX, 100);
        assert_eq!(b, AxisAlignedBox2i::new(int2(i32::MIN, -55), int2(i32::MAX, 55)));

        // Shrinking past the limit clamps the moving edge too
        let mut s = AxisAlignedBox2i::new(int2(i32::MAX - 5, 0), int2(i32::MAX - 1, 0));
        s.inflate(-100, 0);
        assert_eq!(s, AxisAlignedBox2i::new(int2(i32::MAX, 0), int2(i32::MAX - 51, 0)));
    }

    #[test]
    fn test_from_center_size() {
        let b = AxisAlignedBox2i::from_center_size(int2(0, 0), int2(4, 5));
        assert_eq!(b, AxisAlignedBox2i::new(int2(-2, -2), int2(2, 3)));
    }

    #[test]
    fn test_scale_uniform_rounds() {
        let mut b = AxisAlignedBox2i::from_rect(0, 0, 4, 6);
        b.scale_uniform(1.5);
        assert_eq!(b.size(), int2(6, 9));
        assert_eq!(b, AxisAlignedBox2i::new(int2(-1, -1), int2(5, 8)));
    }

    #[test]
    fn test_merge() {
        let mut b = AxisAlignedBox2i::from_rect(0, 0, 1, 1);
        b.merge_point(int2(-4, 3));
        b.merge(&AxisAlignedBox2i::from_rect(2, -2, 1, 1));
        assert_eq!(b, AxisAlignedBox2i::new(int2(-4, -2), int2(3, 3)));
        assert_eq!(
            AxisAlignedBox2i::from_points(&[int2(1, 1), int2(-1, 4)]),
            Some(AxisAlignedBox2i::new(int2(-1, 1), int2(1, 4)))
        );
    }
}
