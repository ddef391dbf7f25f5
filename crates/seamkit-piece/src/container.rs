//! Geometry container seam.
//!
//! The engine never owns curve data; it reads point-list approximations
//! through [`GeometrySource`]. [`ObjectArena`] is the in-memory
//! implementation used by callers and tests: plain records keyed by id.

use std::collections::HashMap;

use seamkit_core::{GeometryError, GeometryResult, ObjectId, Point};

/// Read-only access to the pattern document's geometric objects.
///
/// Implementations report [`GeometryError::MissingGeometry`] for unresolved
/// ids and [`GeometryError::EmptySegment`] where a curve exists but carries
/// no approximation. Missing geometry aborts pedantic runs; an empty curve
/// always degrades to a best-effort fallback.
pub trait GeometrySource {
    /// Full point-list approximation of a curve, in its natural direction.
    fn curve_points(&self, id: ObjectId) -> GeometryResult<Vec<Point>>;

    /// Sub-segment of a curve between two boundary points.
    ///
    /// `begin` and `end` are matched to the nearest approximation points;
    /// the returned list starts and ends on `begin`/`end` exactly. `reverse`
    /// flips the curve before the boundaries are located.
    fn segment_points(
        &self,
        id: ObjectId,
        begin: Point,
        end: Point,
        reverse: bool,
    ) -> GeometryResult<Vec<Point>>;

    /// Coordinates of a point object.
    fn point_coordinates(&self, id: ObjectId) -> GeometryResult<Point>;
}

/// One stored geometric object.
#[derive(Debug, Clone, PartialEq)]
pub enum ArenaObject {
    Point(Point),
    /// A curve reduced to its ordered point-list approximation.
    Curve(Vec<Point>),
}

/// In-memory geometry container keyed by object id.
#[derive(Debug, Clone, Default)]
pub struct ObjectArena {
    objects: HashMap<ObjectId, ArenaObject>,
}

impl ObjectArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_point(&mut self, id: ObjectId, point: Point) {
        self.objects.insert(id, ArenaObject::Point(point));
    }

    pub fn insert_curve(&mut self, id: ObjectId, points: Vec<Point>) {
        self.objects.insert(id, ArenaObject::Curve(points));
    }

    fn get(&self, id: ObjectId) -> GeometryResult<&ArenaObject> {
        self.objects
            .get(&id)
            .ok_or(GeometryError::MissingGeometry { id })
    }

    fn nearest_index(points: &[Point], target: Point, from: usize) -> usize {
        let mut best = from;
        let mut best_dist = f64::MAX;
        for (i, p) in points.iter().enumerate().skip(from) {
            let d = p.distance_to(&target);
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }
        best
    }
}

impl GeometrySource for ObjectArena {
    fn curve_points(&self, id: ObjectId) -> GeometryResult<Vec<Point>> {
        match self.get(id)? {
            ArenaObject::Curve(points) if points.is_empty() => {
                Err(GeometryError::EmptySegment { id })
            }
            ArenaObject::Curve(points) => Ok(points.clone()),
            ArenaObject::Point(p) => Ok(vec![*p]),
        }
    }

    fn segment_points(
        &self,
        id: ObjectId,
        begin: Point,
        end: Point,
        reverse: bool,
    ) -> GeometryResult<Vec<Point>> {
        let mut points = self.curve_points(id)?;
        if reverse {
            points.reverse();
        }
        let i0 = Self::nearest_index(&points, begin, 0);
        let i1 = Self::nearest_index(&points, end, i0);
        let mut segment = points[i0..=i1].to_vec();
        if segment.len() == 1 && !begin.fuzzy_eq(&end) {
            segment.push(segment[0]);
        }
        if let Some(first) = segment.first_mut() {
            *first = begin;
        }
        if let Some(last) = segment.last_mut() {
            *last = end;
        }
        Ok(segment)
    }

    fn point_coordinates(&self, id: ObjectId) -> GeometryResult<Point> {
        match self.get(id)? {
            ArenaObject::Point(p) => Ok(*p),
            ArenaObject::Curve(_) => Err(GeometryError::MissingGeometry { id }),
        }
    }
}
