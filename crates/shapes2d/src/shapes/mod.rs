//! Square and pentagon shapes and their overlap test.
//!
//! Purpose
//! - Decompose each shape into its closed boundary edges and run the shared
//!   segment predicate over every edge pair.
//!
//! Model
//! - `Shape` is the closed set of supported variants. `intersects` is only
//!   defined between a square and a pentagon; same-kind pairs are rejected
//!   with `UnsupportedComparison`. The edge test itself (`boundaries_intersect`)
//!   is shape-agnostic and works for any two `Boundary` values.
//! - A square derives its vertices from center and side on every access; a
//!   pentagon stores its five vertices. Both expose the same `edges()`.

pub mod rand;
mod pentagon;
mod square;

use std::fmt;

use nalgebra::Vector2;

use crate::error::{Result, ShapeError};
use crate::geom2::{segments_intersect_eps, GeomCfg, Point};

pub use pentagon::{Pentagon, PENTAGON_VERTICES};
pub use square::Square;

/// Closed polygon boundary as an ordered edge loop.
pub trait Boundary {
    /// Consecutive vertex pairs, wrapping last to first.
    fn edges(&self) -> Vec<(Point, Point)>;

    /// Translate every vertex by `delta`, in place.
    fn translate_by(&mut self, delta: Vector2<f64>) -> Result<()>;
}

/// Edge loop of an ordered vertex list.
pub(crate) fn edge_loop(vertices: &[Point]) -> Vec<(Point, Point)> {
    let n = vertices.len();
    (0..n).map(|i| (vertices[i], vertices[(i + 1) % n])).collect()
}

/// Whether any edge of `a` intersects any edge of `b` (closed segments).
///
/// Short-circuits on the first hit. Only boundaries are compared, so one
/// shape strictly inside the other is reported as not intersecting.
pub fn boundaries_intersect<A, B>(a: &A, b: &B, cfg: GeomCfg) -> bool
where
    A: Boundary + ?Sized,
    B: Boundary + ?Sized,
{
    let theirs = b.edges();
    a.edges().iter().any(|&(a1, a2)| {
        theirs
            .iter()
            .any(|&(b1, b2)| segments_intersect_eps(a1, a2, b1, b2, cfg.eps_orient))
    })
}

/// Which variant a shape is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Pentagon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Square => f.write_str("square"),
            ShapeKind::Pentagon => f.write_str("pentagon"),
        }
    }
}

/// Owned shape of any supported kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Square(Square),
    Pentagon(Pentagon),
}

/// Borrowed view of a shape, accepted by the `intersects` family.
#[derive(Clone, Copy, Debug)]
pub enum ShapeRef<'a> {
    Square(&'a Square),
    Pentagon(&'a Pentagon),
}

impl ShapeRef<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeRef::Square(_) => ShapeKind::Square,
            ShapeRef::Pentagon(_) => ShapeKind::Pentagon,
        }
    }
}

impl<'a> From<&'a Square> for ShapeRef<'a> {
    fn from(s: &'a Square) -> Self {
        ShapeRef::Square(s)
    }
}

impl<'a> From<&'a Pentagon> for ShapeRef<'a> {
    fn from(p: &'a Pentagon) -> Self {
        ShapeRef::Pentagon(p)
    }
}

impl<'a> From<&'a Shape> for ShapeRef<'a> {
    fn from(s: &'a Shape) -> Self {
        match s {
            Shape::Square(sq) => ShapeRef::Square(sq),
            Shape::Pentagon(pg) => ShapeRef::Pentagon(pg),
        }
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}

impl From<Pentagon> for Shape {
    fn from(p: Pentagon) -> Self {
        Shape::Pentagon(p)
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        ShapeRef::from(self).kind()
    }

    pub fn identifier(&self) -> &str {
        match self {
            Shape::Square(s) => s.identifier(),
            Shape::Pentagon(p) => p.identifier(),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        match self {
            Shape::Square(s) => s.translate(dx, dy),
            Shape::Pentagon(p) => p.translate(dx, dy),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Shape::Square(s) => s.describe(),
            Shape::Pentagon(p) => p.describe(),
        }
    }

    /// Vertices in boundary order (derived for squares).
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Shape::Square(s) => s.vertices().to_vec(),
            Shape::Pentagon(p) => p.vertices().to_vec(),
        }
    }

    /// Dispatch to the variant's `intersects` with exact predicates.
    pub fn intersects<'a>(&self, other: impl Into<ShapeRef<'a>>) -> Result<bool> {
        self.intersects_with(other, GeomCfg::default())
    }

    pub fn intersects_with<'a>(
        &self,
        other: impl Into<ShapeRef<'a>>,
        cfg: GeomCfg,
    ) -> Result<bool> {
        match self {
            Shape::Square(s) => s.intersects_with(other, cfg),
            Shape::Pentagon(p) => p.intersects_with(other, cfg),
        }
    }
}

impl Boundary for Shape {
    fn edges(&self) -> Vec<(Point, Point)> {
        match self {
            Shape::Square(s) => s.edges(),
            Shape::Pentagon(p) => p.edges(),
        }
    }

    fn translate_by(&mut self, delta: Vector2<f64>) -> Result<()> {
        self.translate(delta.x, delta.y)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Shared delta check for `translate`.
pub(crate) fn check_delta(dx: f64, dy: f64) -> Result<Vector2<f64>> {
    if !dx.is_finite() || !dy.is_finite() {
        return Err(ShapeError::InvalidShape(format!(
            "translation delta must be finite, got ({dx}, {dy})"
        )));
    }
    Ok(Vector2::new(dx, dy))
}

/// `p` moved by `delta`; fails if the result leaves the finite range.
pub(crate) fn shifted(p: Point, delta: Vector2<f64>) -> Result<Point> {
    let mut q = p;
    q += delta;
    if !q.is_valid() {
        return Err(ShapeError::InvalidShape(format!(
            "translating {p} by ({}, {}) overflows to {q}",
            delta.x, delta.y
        )));
    }
    Ok(q)
}

/// `vertices` rendered as `(x, y), (x, y), ...`.
pub(crate) fn join_vertices(vertices: &[Point]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests;
