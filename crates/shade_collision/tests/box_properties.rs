//! Property tests for the box types
//!
//! Merge only grows, inflating by zero is the identity, and collision
//! resolution follows the smaller overlap.

use proptest::prelude::*;
use shade_collision::prelude::*;
use shade_math::{float2, int2, Float2, Int2};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn float_box() -> impl Strategy<Value = AxisAlignedBox2> {
    (-100i32..100, -100i32..100, 1i32..50, 1i32..50)
        .prop_map(|(x, y, w, h)| AxisAlignedBox2::from_rect(x as f32, y as f32, w as f32, h as f32))
}

fn int_box() -> impl Strategy<Value = AxisAlignedBox2i> {
    (-1000i32..1000, -1000i32..1000, 0i32..500, 0i32..500)
        .prop_map(|(x, y, w, h)| AxisAlignedBox2i::from_rect(x, y, w, h))
}

fn float_point() -> impl Strategy<Value = Float2> {
    (-500.0f32..500.0, -500.0f32..500.0).prop_map(Float2::from)
}

fn int_point() -> impl Strategy<Value = Int2> {
    (-5000i32..5000, -5000i32..5000).prop_map(Int2::from)
}

proptest! {
    #[test]
    fn merge_point_is_monotonic(b in float_box(), p in float_point()) {
        let mut merged = b;
        merged.merge_point(p);
        prop_assert!(merged.contains(p));
        prop_assert!(merged.contains_box(&b));
        for corner in b.corners() {
            prop_assert!(merged.contains(corner));
        }
    }

    #[test]
    fn merge_box_is_monotonic(a in int_box(), b in int_box(), p in int_point()) {
        let mut merged = a;
        merged.merge(&b);
        prop_assert!(merged.contains_box(&a));
        prop_assert!(merged.contains_box(&b));

        merged.merge_point(p);
        prop_assert!(merged.contains(p));
        prop_assert!(merged.contains_box(&a));
    }

    #[test]
    fn inflate_by_zero_is_identity(f in float_box(), i in int_box()) {
        let mut g = f;
        g.inflate(0.0, 0.0);
        prop_assert_eq!(g, f);

        let mut j = i;
        j.inflate(0, 0);
        prop_assert_eq!(j, i);
    }

    #[test]
    fn int_inflate_grows_by_exact_amount(b in int_box(), dx in -20i32..20, dy in -20i32..20) {
        let mut inflated = b;
        inflated.inflate(dx, dy);
        prop_assert_eq!(inflated.size(), b.size() + int2(dx, dy));
    }

    #[test]
    fn intersection_is_inside_both(a in float_box(), b in float_box()) {
        match a.intersection(&b) {
            Some(overlap) => {
                prop_assert!(a.intersects(&b));
                prop_assert!(a.contains_box(&overlap));
                prop_assert!(b.contains_box(&overlap));
            }
            None => prop_assert!(!a.intersects(&b)),
        }
    }

    #[test]
    fn collide_uses_smaller_overlap(a in float_box(), b in float_box()) {
        init_logging();
        match (a.collide(&b), a.intersection(&b)) {
            (Some(mtv), Some(overlap)) => {
                let expected = if overlap.width() < overlap.height() {
                    overlap.width()
                } else {
                    overlap.height()
                };
                prop_assert_eq!(mtv.overlap, expected);
                prop_assert!(mtv.overlap > 0.0);
                prop_assert!((mtv.axis.normal.length() - 1.0).abs() < 1.0e-6);
            }
            (None, None) => prop_assert!(!a.intersects(&b)),
            (mtv, overlap) => prop_assert!(false, "collide {:?} disagrees with intersection {:?}", mtv, overlap),
        }
    }
}

#[test]
fn test_float_box_reference_cases() {
    let b = AxisAlignedBox2::new(float2(0.0, 0.0), float2(10.0, 10.0));
    assert!(b.contains(float2(5.0, 5.0)));
    assert!(b.contains(float2(10.0, 10.0)));
    assert!(!b.contains(float2(10.0001, 5.0)));

    let touching = AxisAlignedBox2::new(float2(10.0, 0.0), float2(20.0, 10.0));
    assert!(!b.intersects(&touching));

    let overlapping = AxisAlignedBox2::new(float2(5.0, 0.0), float2(15.0, 10.0));
    let mtv = b.collide(&overlapping).unwrap();
    assert_eq!(mtv.overlap, 5.0);
    assert_eq!(mtv.axis.normal, float2(-1.0, 0.0));
}

#[test]
fn test_int_box_converts_to_float_box() {
    let i = AxisAlignedBox2i::from_rect(-2, 3, 4, 5);
    let f = AxisAlignedBox2::from(i);
    assert_eq!(f, AxisAlignedBox2::from_rect(-2.0, 3.0, 4.0, 5.0));
    assert_eq!(f.round_out(), i);
}
