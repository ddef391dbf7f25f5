//! Basic 2-D geometry shared by the pattern engine.
//!
//! All coordinates are in the document's linear unit. Comparisons between
//! points use [`POINT_TOLERANCE`]; scalar comparisons against zero use
//! [`fuzzy_is_zero`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for treating two points as coincident, in document units.
pub const POINT_TOLERANCE: f64 = 1e-3;

/// Identifier of a geometric object stored in the pattern document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point reached from `self` by travelling `length` at `angle` radians.
    pub fn polar(&self, length: f64, angle: f64) -> Point {
        Point {
            x: self.x + length * angle.cos(),
            y: self.y + length * angle.sin(),
        }
    }

    /// Angle in radians of the direction from `self` toward `other`.
    pub fn angle_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// True when the two points coincide within [`POINT_TOLERANCE`].
    pub fn fuzzy_eq(&self, other: &Point) -> bool {
        self.distance_to(other) < POINT_TOLERANCE
    }
}

/// Fuzzy test against zero for formula results and determinants.
pub fn fuzzy_is_zero(value: f64) -> bool {
    value.abs() < 1e-12
}

/// Intersection of the closed segments `a1-a2` and `b1-b2`, if any.
///
/// Overlapping collinear segments report no intersection; the engine only
/// needs transversal crossings.
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let r = Point::new(a2.x - a1.x, a2.y - a1.y);
    let s = Point::new(b2.x - b1.x, b2.y - b1.y);
    let denom = r.x * s.y - r.y * s.x;
    if fuzzy_is_zero(denom) {
        return None;
    }
    let qp = Point::new(b1.x - a1.x, b1.y - a1.y);
    let t = (qp.x * s.y - qp.y * s.x) / denom;
    let u = (qp.x * r.y - qp.y * r.x) / denom;
    if !(-1e-9..=1.0 + 1e-9).contains(&t) || !(-1e-9..=1.0 + 1e-9).contains(&u) {
        return None;
    }
    Some(Point::new(a1.x + t * r.x, a1.y + t * r.y))
}

/// Intersection of a ray (origin + direction angle) with the segment `b1-b2`.
///
/// Returns the intersection point and its distance from the ray origin.
pub fn ray_segment_intersection(
    origin: Point,
    angle: f64,
    b1: Point,
    b2: Point,
) -> Option<(Point, f64)> {
    let r = Point::new(angle.cos(), angle.sin());
    let s = Point::new(b2.x - b1.x, b2.y - b1.y);
    let denom = r.x * s.y - r.y * s.x;
    if fuzzy_is_zero(denom) {
        return None;
    }
    let qp = Point::new(b1.x - origin.x, b1.y - origin.y);
    let t = (qp.x * s.y - qp.y * s.x) / denom;
    let u = (qp.x * r.y - qp.y * r.x) / denom;
    if t < -1e-9 || !(-1e-9..=1.0 + 1e-9).contains(&u) {
        return None;
    }
    let p = Point::new(origin.x + t * r.x, origin.y + t * r.y);
    Some((p, t.max(0.0)))
}

/// Nearest intersection of a ray with a closed polygonal contour.
pub fn ray_contour_intersection(origin: Point, angle: f64, contour: &[Point]) -> Option<Point> {
    if contour.len() < 2 {
        return None;
    }
    let mut best: Option<(Point, f64)> = None;
    for i in 0..contour.len() {
        let b1 = contour[i];
        let b2 = contour[(i + 1) % contour.len()];
        if let Some((p, t)) = ray_segment_intersection(origin, angle, b1, b2) {
            // Ignore hits at the origin itself.
            if t < POINT_TOLERANCE {
                continue;
            }
            match best {
                Some((_, bt)) if bt <= t => {}
                _ => best = Some((p, t)),
            }
        }
    }
    best.map(|(p, _)| p)
}

/// Distance from `p` to the closed segment `a-b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = Point::new(b.x - a.x, b.y - a.y);
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if fuzzy_is_zero(len_sq) {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * ab.x, a.y + t * ab.y);
    p.distance_to(&proj)
}

/// True when `p` lies on an edge of the closed contour within tolerance.
pub fn point_on_contour(p: Point, contour: &[Point]) -> bool {
    if contour.len() < 2 {
        return false;
    }
    (0..contour.len()).any(|i| {
        let a = contour[i];
        let b = contour[(i + 1) % contour.len()];
        distance_to_segment(p, a, b) < POINT_TOLERANCE
    })
}
