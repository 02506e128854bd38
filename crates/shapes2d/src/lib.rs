//! Square/pentagon overlap via exact edge-pair segment tests.
//!
//! Layout
//! - `geom2`: points, orientation predicate, on-segment and segment tests.
//! - `shapes`: `Square`, `Pentagon`, the `Shape` sum type and its
//!   intersection dispatcher, plus reproducible random samplers.
//! - `error`: the single error enum shared by every fallible operation.
//!
//! API Policy
//! - The surface is deliberately small: construct, translate, `vertex_at`
//!   (square only), intersects, describe. Everything else is plumbing.

pub mod error;
pub mod geom2;
pub mod shapes;

pub use error::ShapeError;
pub use geom2::{GeomCfg, Orientation, Point};
pub use shapes::{Pentagon, Shape, ShapeKind, Square};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ShapeError;
    pub use crate::geom2::{
        on_segment, orientation, orientation_eps, segments_intersect, segments_intersect_eps,
        GeomCfg, Orientation, Point,
    };
    pub use crate::shapes::rand::{draw_pair, draw_pentagon, draw_square, ReplayToken, SampleCfg};
    pub use crate::shapes::{
        boundaries_intersect, Boundary, Pentagon, Shape, ShapeKind, ShapeRef, Square,
    };
    pub use nalgebra::Vector2 as Vec2;
}
