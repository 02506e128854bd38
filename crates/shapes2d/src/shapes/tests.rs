use super::rand::{draw_pair, ReplayToken, SampleCfg};
use super::{boundaries_intersect, Boundary, Pentagon, Shape, ShapeKind, Square};
use crate::error::ShapeError;
use crate::geom2::{segments_intersect, GeomCfg, Point};
use nalgebra::vector;
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y).unwrap()
}

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| pt(x, y)).collect()
}

fn scenario() -> (Square, Pentagon) {
    let square = Square::new("square1", pt(2.0, 2.0), 4.0).unwrap();
    let pentagon = Pentagon::new(
        "pentagon1",
        pts(&[(0.0, 0.0), (3.0, 0.0), (5.0, 2.0), (2.0, 4.0), (1.0, 2.0)]),
    )
    .unwrap();
    (square, pentagon)
}

#[test]
fn square_vertices_follow_center_and_side() {
    let (square, _) = scenario();
    assert_eq!(
        square.vertices().to_vec(),
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    );
    assert_eq!(square.vertex_at(2).unwrap(), pt(4.0, 4.0));
    assert!(matches!(square.vertex_at(4), Err(ShapeError::InvalidShape(_))));
}

#[test]
fn scenario_before_move_intersects() {
    let (square, pentagon) = scenario();
    // bottom edges overlap along (0,0)-(3,0)
    assert!(square.intersects(&pentagon).unwrap());
    assert!(pentagon.intersects(&square).unwrap());
}

#[test]
fn scenario_after_move_intersects() {
    let (mut square, mut pentagon) = scenario();
    square.translate(1.0, 1.0).unwrap();
    pentagon.translate(2.0, 2.0).unwrap();
    assert_eq!(square.center(), pt(3.0, 3.0));
    assert_eq!(
        square.vertices().to_vec(),
        pts(&[(1.0, 1.0), (5.0, 1.0), (5.0, 5.0), (1.0, 5.0)])
    );
    assert_eq!(
        pentagon.vertices().to_vec(),
        pts(&[(2.0, 2.0), (5.0, 2.0), (7.0, 4.0), (4.0, 6.0), (3.0, 4.0)])
    );
    // pentagon edge (2,2)-(5,2) ends on the square's right edge x=5
    assert!(segments_intersect(pt(5.0, 1.0), pt(5.0, 5.0), pt(2.0, 2.0), pt(5.0, 2.0)));
    assert!(square.intersects(&pentagon).unwrap());
    assert!(pentagon.intersects(&square).unwrap());
}

#[test]
fn far_apart_shapes_do_not_intersect() {
    let (mut square, pentagon) = scenario();
    square.translate(100.0, 0.0).unwrap();
    assert!(!square.intersects(&pentagon).unwrap());
}

#[test]
fn nested_shapes_do_not_intersect() {
    // boundary-only test: a pentagon strictly inside the square is disjoint
    let square = Square::new("big", pt(0.0, 0.0), 100.0).unwrap();
    let pentagon = Pentagon::new(
        "small",
        pts(&[(0.0, 0.0), (3.0, 0.0), (5.0, 2.0), (2.0, 4.0), (1.0, 2.0)]),
    )
    .unwrap();
    assert!(!square.intersects(&pentagon).unwrap());
}

#[test]
fn invalid_shapes_are_rejected() {
    assert!(matches!(
        Square::new("s", pt(0.0, 0.0), -1.0),
        Err(ShapeError::InvalidShape(_))
    ));
    assert!(matches!(
        Square::new("s", pt(0.0, 0.0), 0.0),
        Err(ShapeError::InvalidShape(_))
    ));
    assert!(matches!(
        Square::new("s", pt(0.0, 0.0), f64::NAN),
        Err(ShapeError::InvalidShape(_))
    ));
    // a point built around the validated constructor
    let bad = Point { x: f64::NAN, y: 0.0 };
    assert!(matches!(Square::new("s", bad, 1.0), Err(ShapeError::InvalidShape(_))));
    assert!(matches!(
        Pentagon::new("p", pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])),
        Err(ShapeError::InvalidShape(_))
    ));
    let mut six = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0), (1.0, 2.0), (0.0, 1.0)]);
    six.push(pt(0.0, 0.5));
    assert!(matches!(Pentagon::new("p", six), Err(ShapeError::InvalidShape(_))));
    let mut with_bad = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0), (1.0, 2.0)]);
    with_bad.push(bad);
    assert!(matches!(
        Pentagon::new("p", with_bad),
        Err(ShapeError::InvalidShape(_))
    ));
}

#[test]
fn non_finite_translation_is_rejected_and_leaves_shape_untouched() {
    let (mut square, mut pentagon) = scenario();
    let (s0, p0) = (square.clone(), pentagon.clone());
    assert!(matches!(
        square.translate(f64::NAN, 1.0),
        Err(ShapeError::InvalidShape(_))
    ));
    assert!(matches!(
        pentagon.translate(0.0, f64::INFINITY),
        Err(ShapeError::InvalidShape(_))
    ));
    assert_eq!(square, s0);
    assert_eq!(pentagon, p0);
}

#[test]
fn overflowing_translation_is_rejected_and_leaves_shape_untouched() {
    let mut square = Square::new("s", pt(1.7e308, 0.0), 1.0).unwrap();
    let s0 = square.clone();
    assert!(matches!(
        square.translate(1.7e308, 0.0),
        Err(ShapeError::InvalidShape(_))
    ));
    assert_eq!(square, s0);

    // center stays finite but a derived corner does not
    let mut wide = Square::new("w", pt(1.0e308, 0.0), 1.0e308).unwrap();
    let w0 = wide.clone();
    assert!(matches!(
        wide.translate(0.5e308, 0.0),
        Err(ShapeError::InvalidShape(_))
    ));
    assert_eq!(wide, w0);
    assert!(wide.vertices().iter().all(|v| v.is_valid()));

    // only the last vertex overflows; none of the others may move
    let mut pentagon = Pentagon::new(
        "p",
        pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0), (1.0, 2.0), (1.7e308, 1.0)]),
    )
    .unwrap();
    let p0 = pentagon.clone();
    assert!(matches!(
        pentagon.translate(1.7e308, 0.0),
        Err(ShapeError::InvalidShape(_))
    ));
    assert_eq!(pentagon, p0);
}

#[test]
fn square_with_non_finite_corners_is_rejected() {
    assert!(matches!(
        Square::new("b", pt(1.7e308, 0.0), 1.7e308),
        Err(ShapeError::InvalidShape(_))
    ));
    assert!(matches!(
        Square::new("b", pt(0.0, -1.7e308), 1.7e308),
        Err(ShapeError::InvalidShape(_))
    ));
}

#[test]
fn same_kind_comparisons_are_unsupported() {
    let (square, pentagon) = scenario();
    let square2 = Square::new("square2", pt(1.0, 1.0), 2.0).unwrap();
    assert_eq!(
        square.intersects(&square2),
        Err(ShapeError::UnsupportedComparison {
            lhs: ShapeKind::Square,
            rhs: ShapeKind::Square,
        })
    );
    assert_eq!(
        pentagon.intersects(&pentagon.clone()),
        Err(ShapeError::UnsupportedComparison {
            lhs: ShapeKind::Pentagon,
            rhs: ShapeKind::Pentagon,
        })
    );
    // the edge test itself has no such restriction
    assert!(boundaries_intersect(&square, &square2, GeomCfg::default()));
}

#[test]
fn shape_dispatcher_mirrors_variants() {
    let (square, pentagon) = scenario();
    let mut a = Shape::from(square);
    let b = Shape::from(pentagon);
    assert_eq!(a.kind(), ShapeKind::Square);
    assert_eq!(b.kind(), ShapeKind::Pentagon);
    assert_eq!(b.identifier(), "pentagon1");
    assert!(a.intersects(&b).unwrap());
    assert!(b.intersects(&a).unwrap());
    assert!(matches!(
        a.intersects(&a.clone()),
        Err(ShapeError::UnsupportedComparison { .. })
    ));
    a.translate(100.0, 100.0).unwrap();
    assert!(!a.intersects_with(&b, GeomCfg::with_eps(1e-9).unwrap()).unwrap());
    assert_eq!(a.edges().len(), 4);
    assert_eq!(b.edges().len(), 5);
}

#[test]
fn describe_lists_identifier_and_vertices() {
    let (square, pentagon) = scenario();
    assert_eq!(square.describe(), "Square square1: (0, 0), (4, 0), (4, 4), (0, 4)");
    assert_eq!(
        pentagon.describe(),
        "Pentagon pentagon1: (0, 0), (3, 0), (5, 2), (2, 4), (1, 2)"
    );
    assert_eq!(Shape::from(square.clone()).to_string(), square.describe());
}

#[test]
fn edges_wrap_last_to_first() {
    let (_, pentagon) = scenario();
    let edges = pentagon.edges();
    assert_eq!(edges[0], (pt(0.0, 0.0), pt(3.0, 0.0)));
    assert_eq!(edges[4], (pt(1.0, 2.0), pt(0.0, 0.0)));
}

#[test]
fn sampled_pairs_agree_in_both_directions() {
    let cfg = SampleCfg::default();
    let mut hits = 0;
    for index in 0..200 {
        let (s, p) = draw_pair(cfg, ReplayToken { seed: 11, index }).unwrap();
        let sp = s.intersects(&p).unwrap();
        assert_eq!(sp, p.intersects(&s).unwrap());
        assert_eq!(sp, boundaries_intersect(&p, &s, GeomCfg::default()));
        hits += sp as usize;
    }
    // the default config produces both outcomes
    assert!(hits > 0 && hits < 200);
}

fn grid_point() -> impl Strategy<Value = Point> {
    (-50i32..=50, -50i32..=50).prop_map(|(x, y)| Point {
        x: x as f64,
        y: y as f64,
    })
}

proptest! {
    #[test]
    fn square_translation_moves_every_vertex(
        c in grid_point(), side in 1i32..20, dx in -20i32..=20, dy in -20i32..=20
    ) {
        let mut s = Square::new("s", c, side as f64).unwrap();
        let before = s.vertices();
        s.translate(dx as f64, dy as f64).unwrap();
        for (b, a) in before.iter().zip(s.vertices().iter()) {
            prop_assert_eq!(a.x, b.x + dx as f64);
            prop_assert_eq!(a.y, b.y + dy as f64);
        }
    }

    #[test]
    fn pentagon_translation_moves_every_vertex(
        vs in proptest::collection::vec(grid_point(), 5), dx in -20i32..=20, dy in -20i32..=20
    ) {
        let mut p = Pentagon::new("p", vs.clone()).unwrap();
        p.translate_by(vector![dx as f64, dy as f64]).unwrap();
        for (b, a) in vs.iter().zip(p.vertices().iter()) {
            prop_assert_eq!(a.x, b.x + dx as f64);
            prop_assert_eq!(a.y, b.y + dy as f64);
        }
    }

    #[test]
    fn zero_translation_is_identity(c in grid_point(), side in 1i32..20) {
        let mut s = Square::new("s", c, side as f64).unwrap();
        let s0 = s.clone();
        s.translate(0.0, 0.0).unwrap();
        prop_assert_eq!(s, s0);
    }
}
