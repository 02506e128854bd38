//! Exact 2D primitives for segment intersection.
//!
//! Purpose
//! - Provide the `Point` value type and the three predicates the overlap test
//!   is built from: orientation, on-segment, and segment intersection.
//!
//! Numerics
//! - Comparisons are exact by default: a cross product is collinear only when
//!   it is exactly zero. This is exact for integer and other exactly
//!   representable inputs and brittle under rounding. Callers that want slack
//!   pass a `GeomCfg` with `eps_orient > 0` to the `_eps` variants.

mod predicates;
mod types;

pub use predicates::{
    on_segment, orientation, orientation_eps, segments_intersect, segments_intersect_eps,
};
pub use types::{GeomCfg, Orientation, Point};
