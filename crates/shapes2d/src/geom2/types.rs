//! Basic 2D types and the tolerance config used by the predicates.
//!
//! - `Point`: validated, finite coordinate pair, mutable in place.
//! - `Orientation`: three-way turn classification of an ordered triple.
//! - `GeomCfg`: centralizes the collinearity tolerance (exact by default).

use std::fmt;
use std::ops::AddAssign;

use nalgebra::Vector2;

use crate::error::{Result, ShapeError};

/// Geometry configuration (tolerances).
///
/// `eps_orient` is the absolute slack on the orientation cross product:
/// `|v| <= eps_orient` counts as collinear. The default `0.0` keeps the
/// predicates exact. Build non-default configs with `with_eps`, which rejects
/// negative and non-finite slack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_orient: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_orient: 0.0 }
    }
}

impl GeomCfg {
    pub fn with_eps(eps_orient: f64) -> Result<Self> {
        if !eps_orient.is_finite() || eps_orient < 0.0 {
            return Err(ShapeError::InvalidTolerance { eps: eps_orient });
        }
        Ok(Self { eps_orient })
    }
}

/// A point in the plane. Both coordinates are finite after `Point::new`.
///
/// Fields stay public so shapes can translate their points in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Validated constructor; fails on NaN or infinite input.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ShapeError::InvalidCoordinate { x, y });
        }
        Ok(Self { x, y })
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl TryFrom<Vector2<f64>> for Point {
    type Error = ShapeError;

    fn try_from(v: Vector2<f64>) -> Result<Self> {
        Point::new(v.x, v.y)
    }
}

impl AddAssign<Vector2<f64>> for Point {
    #[inline]
    fn add_assign(&mut self, delta: Vector2<f64>) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Turn direction of an ordered triple `(p, q, r)`.
///
/// Labels follow the sign of `(q.y-p.y)*(r.x-q.x) - (q.x-p.x)*(r.y-q.y)`:
/// positive is `Clockwise`, negative `CounterClockwise` (y-up axes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Orientation of the triple with its first two points swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}
