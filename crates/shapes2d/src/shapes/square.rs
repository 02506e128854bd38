//! Axis-aligned square given by center and side length.

use std::fmt;

use nalgebra::Vector2;

use super::{
    boundaries_intersect, check_delta, edge_loop, join_vertices, shifted, Boundary, ShapeKind,
    ShapeRef,
};
use crate::error::{Result, ShapeError};
use crate::geom2::{GeomCfg, Point};

/// Unit offsets from the center, in boundary order starting bottom-left.
const CORNERS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Axis-aligned square. Vertices are derived from `center` and
/// `side_length` on every access and never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    identifier: String,
    center: Point,
    side_length: f64,
}

impl Square {
    /// Fails with `InvalidShape` unless `side_length` is finite and positive
    /// and `center` has finite coordinates.
    pub fn new(identifier: impl Into<String>, center: Point, side_length: f64) -> Result<Self> {
        if !center.is_valid() {
            return Err(ShapeError::InvalidShape(format!(
                "square center must be a valid point, got {center}"
            )));
        }
        if !side_length.is_finite() || side_length <= 0.0 {
            return Err(ShapeError::InvalidShape(format!(
                "square side length must be a positive number, got {side_length}"
            )));
        }
        check_corners(center, side_length)?;
        Ok(Self {
            identifier: identifier.into(),
            center,
            side_length,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// Move the center by `(dx, dy)`; the side length is unchanged.
    ///
    /// Nothing moves unless the new center and all four corners stay finite.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        let center = shifted(self.center, check_delta(dx, dy)?)?;
        check_corners(center, self.side_length)?;
        self.center = center;
        Ok(())
    }

    /// Vertex `i` in `0..4`, freshly computed.
    pub fn vertex_at(&self, i: usize) -> Result<Point> {
        CORNERS
            .get(i)
            .map(|&corner| self.corner(corner))
            .ok_or_else(|| {
                ShapeError::InvalidShape(format!("square vertex index must be in 0..4, got {i}"))
            })
    }

    /// All four vertices in boundary order.
    pub fn vertices(&self) -> [Point; 4] {
        CORNERS.map(|corner| self.corner(corner))
    }

    #[inline]
    fn corner(&self, sign: (f64, f64)) -> Point {
        corner_of(self.center, self.side_length, sign)
    }

    /// Exact overlap test against a pentagon.
    pub fn intersects<'a>(&self, other: impl Into<ShapeRef<'a>>) -> Result<bool> {
        self.intersects_with(other, GeomCfg::default())
    }

    /// Boundary overlap test against a pentagon; every other kind fails with
    /// `UnsupportedComparison`.
    pub fn intersects_with<'a>(
        &self,
        other: impl Into<ShapeRef<'a>>,
        cfg: GeomCfg,
    ) -> Result<bool> {
        let other: ShapeRef<'_> = other.into();
        match other {
            ShapeRef::Pentagon(pentagon) => Ok(boundaries_intersect(self, pentagon, cfg)),
            other => Err(ShapeError::UnsupportedComparison {
                lhs: ShapeKind::Square,
                rhs: other.kind(),
            }),
        }
    }

    pub fn describe(&self) -> String {
        format!("Square {}: {}", self.identifier, join_vertices(&self.vertices()))
    }
}

#[inline]
fn corner_of(center: Point, side_length: f64, (sx, sy): (f64, f64)) -> Point {
    let half = side_length / 2.0;
    Point {
        x: center.x + sx * half,
        y: center.y + sy * half,
    }
}

/// Derived vertices must be finite too, not only center and side.
fn check_corners(center: Point, side_length: f64) -> Result<()> {
    match CORNERS
        .iter()
        .map(|&sign| corner_of(center, side_length, sign))
        .find(|v| !v.is_valid())
    {
        Some(v) => Err(ShapeError::InvalidShape(format!(
            "square with center {center} and side {side_length} has a non-finite corner {v}"
        ))),
        None => Ok(()),
    }
}

impl Boundary for Square {
    fn edges(&self) -> Vec<(Point, Point)> {
        edge_loop(&self.vertices())
    }

    fn translate_by(&mut self, delta: Vector2<f64>) -> Result<()> {
        self.translate(delta.x, delta.y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
