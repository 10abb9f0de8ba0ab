use cuboidviz_core::geom::{fourth_point, Vec2};
use proptest::prelude::*;

#[test]
fn completes_axis_aligned_square() {
    let d = fourth_point(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
    assert_eq!(Vec2::new(10.0, 0.0), d);
}

#[test]
fn collinear_input_gives_collinear_point() {
    // Degenerate "face": no error, the result lies on the same line.
    let d = fourth_point(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
    assert_eq!(Vec2::new(5.0, 5.0), d);
}

proptest! {
    #[test]
    fn closes_the_parallelogram(
        ax in -1e4f64..1e4, ay in -1e4f64..1e4,
        bx in -1e4f64..1e4, by in -1e4f64..1e4,
        cx in -1e4f64..1e4, cy in -1e4f64..1e4,
    ) {
        let (a, b, c) = (Vec2::new(ax, ay), Vec2::new(bx, by), Vec2::new(cx, cy));
        let d = fourth_point(a, b, c);
        let lhs = a + c;
        let rhs = b + d;
        prop_assert!((lhs.x - rhs.x).abs() <= 1e-9 * (1.0 + lhs.x.abs()));
        prop_assert!((lhs.y - rhs.y).abs() <= 1e-9 * (1.0 + lhs.y.abs()));
    }

    #[test]
    fn is_deterministic(ax in -1e4f64..1e4, ay in -1e4f64..1e4, bx in -1e4f64..1e4, by in -1e4f64..1e4) {
        let (a, b, c) = (Vec2::new(ax, ay), Vec2::new(bx, by), Vec2::new(ay, ax));
        let first = fourth_point(a, b, c);
        let second = fourth_point(a, b, c);
        prop_assert_eq!(first.x.to_bits(), second.x.to_bits());
        prop_assert_eq!(first.y.to_bits(), second.y.to_bits());
    }
}
