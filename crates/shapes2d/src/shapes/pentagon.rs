//! Pentagon given by five explicit vertices.

use std::fmt;

use nalgebra::Vector2;

use super::{
    boundaries_intersect, check_delta, edge_loop, join_vertices, shifted, Boundary, ShapeKind,
    ShapeRef,
};
use crate::error::{Result, ShapeError};
use crate::geom2::{GeomCfg, Point};

pub const PENTAGON_VERTICES: usize = 5;

/// Five vertices in boundary order. No convexity or simplicity is required.
#[derive(Clone, Debug, PartialEq)]
pub struct Pentagon {
    identifier: String,
    vertices: [Point; PENTAGON_VERTICES],
}

impl Pentagon {
    /// Fails with `InvalidShape` when any vertex is not a valid point or the
    /// count is not exactly five.
    pub fn new(identifier: impl Into<String>, vertices: Vec<Point>) -> Result<Self> {
        if let Some(bad) = vertices.iter().find(|v| !v.is_valid()) {
            return Err(ShapeError::InvalidShape(format!(
                "pentagon vertices must be valid points, got {bad}"
            )));
        }
        let count = vertices.len();
        let vertices: [Point; PENTAGON_VERTICES] = vertices.try_into().map_err(|_| {
            ShapeError::InvalidShape(format!("pentagon must have 5 vertices, got {count}"))
        })?;
        Ok(Self {
            identifier: identifier.into(),
            vertices,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn vertices(&self) -> &[Point; PENTAGON_VERTICES] {
        &self.vertices
    }

    /// Move every vertex by `(dx, dy)` in place.
    ///
    /// Nothing moves unless every shifted vertex stays finite.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        let delta = check_delta(dx, dy)?;
        let mut moved = self.vertices;
        for v in moved.iter_mut() {
            *v = shifted(*v, delta)?;
        }
        self.vertices = moved;
        Ok(())
    }

    /// Exact overlap test against a square.
    pub fn intersects<'a>(&self, other: impl Into<ShapeRef<'a>>) -> Result<bool> {
        self.intersects_with(other, GeomCfg::default())
    }

    /// Boundary overlap test against a square; every other kind fails with
    /// `UnsupportedComparison`.
    pub fn intersects_with<'a>(
        &self,
        other: impl Into<ShapeRef<'a>>,
        cfg: GeomCfg,
    ) -> Result<bool> {
        let other: ShapeRef<'_> = other.into();
        let square = match other {
            ShapeRef::Square(square) => square,
            other => {
                return Err(ShapeError::UnsupportedComparison {
                    lhs: ShapeKind::Pentagon,
                    rhs: other.kind(),
                })
            }
        };
        // square edges bind to the predicate's first segment
        Ok(boundaries_intersect(square, self, cfg))
    }

    pub fn describe(&self) -> String {
        format!("Pentagon {}: {}", self.identifier, join_vertices(&self.vertices))
    }
}

impl Boundary for Pentagon {
    fn edges(&self) -> Vec<(Point, Point)> {
        edge_loop(&self.vertices)
    }

    fn translate_by(&mut self, delta: Vector2<f64>) -> Result<()> {
        self.translate(delta.x, delta.y)
    }
}

impl fmt::Display for Pentagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
