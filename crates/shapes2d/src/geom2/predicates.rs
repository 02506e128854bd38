//! Orientation, on-segment and segment-intersection predicates.
//!
//! Segments are closed: shared endpoints and collinear overlaps count as
//! intersections.

use super::types::{Orientation, Point};

/// Orientation of `(p, q, r)` with collinearity slack `eps` on the cross
/// product. `eps = 0.0` is the exact test. An exactly zero cross product is
/// collinear for any `eps`, including negative or NaN slack.
#[inline]
pub fn orientation_eps(p: Point, q: Point, r: Point, eps: f64) -> Orientation {
    let pq = q.to_vec2() - p.to_vec2();
    let qr = r.to_vec2() - q.to_vec2();
    let val = pq.y * qr.x - pq.x * qr.y;
    if val == 0.0 || val.abs() <= eps {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Shorthand for `orientation_eps(p, q, r, 0.0)`.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    orientation_eps(p, q, r, 0.0)
}

/// Whether `r` lies in the closed bounding box of `p`–`q`.
///
/// Pre: `r` is already known to be collinear with `p` and `q`; otherwise the
/// answer is only a bounding-box test.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
}

/// Closed segment test for `a1`–`a2` against `b1`–`b2` with collinearity
/// slack `eps`.
pub fn segments_intersect_eps(a1: Point, a2: Point, b1: Point, b2: Point, eps: f64) -> bool {
    let o1 = orientation_eps(a1, a2, b1, eps);
    let o2 = orientation_eps(a1, a2, b2, eps);
    let o3 = orientation_eps(b1, b2, a1, eps);
    let o4 = orientation_eps(b1, b2, a2, eps);

    // general position: each segment straddles the other's supporting line
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // collinear endpoint lying on the other segment
    (o1 == Orientation::Collinear && on_segment(a1, a2, b1))
        || (o2 == Orientation::Collinear && on_segment(a1, a2, b2))
        || (o3 == Orientation::Collinear && on_segment(b1, b2, a1))
        || (o4 == Orientation::Collinear && on_segment(b1, b2, a2))
}

/// Shorthand for `segments_intersect_eps(a1, a2, b1, b2, 0.0)`.
#[inline]
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    segments_intersect_eps(a1, a2, b1, b2, 0.0)
}
