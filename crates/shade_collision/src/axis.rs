//! Separating axes

use std::fmt;

use shade_math::Float2;

/// Candidate separating axis derived from a box edge
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Axis {
    /// Unit-length `unit`, zero for a degenerate edge
    pub normal: Float2,
    /// `edge` rotated 90° clockwise, not normalized
    pub unit: Float2,
    /// Direction between two box corners
    pub edge: Float2,
}

impl Axis {
    pub const ZERO: Self = Self {
        normal: Float2::ZERO,
        unit: Float2::ZERO,
        edge: Float2::ZERO,
    };

    #[inline]
    pub const fn new(normal: Float2, unit: Float2, edge: Float2) -> Self {
        Self { normal, unit, edge }
    }

    /// Axis perpendicular to `edge`
    pub fn from_edge(edge: Float2) -> Self {
        let unit = edge.perpendicular();
        Self {
            normal: unit.normalize(),
            unit,
            edge,
        }
    }

    /// Axis for the edge `a - b`
    #[inline]
    pub fn from_points(a: Float2, b: Float2) -> Self {
        Self::from_edge(a - b)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal == Float2::ZERO
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "normal ({}) edge ({})", self.normal, self.edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_math::float2;

    #[test]
    fn test_from_edge() {
        let axis = Axis::from_edge(float2(0.0, -10.0));
        assert_eq!(axis.unit, float2(-10.0, 0.0));
        assert_eq!(axis.normal, float2(-1.0, 0.0));
        assert_eq!(axis.edge, float2(0.0, -10.0));
    }

    #[test]
    fn test_from_points() {
        let axis = Axis::from_points(float2(0.0, 0.0), float2(4.0, 0.0));
        assert_eq!(axis.edge, float2(-4.0, 0.0));
        assert_eq!(axis.normal, float2(0.0, 1.0));
    }

    #[test]
    fn test_degenerate_edge() {
        let axis = Axis::from_edge(Float2::ZERO);
        assert!(axis.is_degenerate());
        assert_eq!(axis, Axis::ZERO);
        assert_eq!(Axis::default(), Axis::ZERO);
    }
}
