//! Boundary-point resolution for curve segments.
//!
//! A curve node rarely starts and ends exactly at the sampled curve
//! endpoints: the true boundary is dictated by the neighboring nodes. The
//! resolver searches circularly for the nearest non-excluded neighbor and
//! refines the raw endpoint either to the neighbor point (when it lies on
//! the curve) or to the first intersection with the neighbor curve.

use std::cell::Cell;

use tracing::warn;

use seamkit_core::{segment_intersection, GeometryError, GeometryResult, ObjectId, Point};

use crate::container::GeometrySource;
use crate::node::{PieceNode, ToolKind};
use crate::path::{AllowancePoint, EngineContext, PiecePath};

/// Index of the nearest preceding non-excluded node, searching circularly.
///
/// Wraps at most once around the list; `None` when every other node is
/// excluded.
pub(crate) fn prev_non_excluded(nodes: &[PieceNode], start: usize) -> Option<usize> {
    let n = nodes.len();
    let mut i = start;
    for _ in 1..n {
        i = (i + n - 1) % n;
        if !nodes[i].excluded {
            return Some(i);
        }
    }
    None
}

/// Index of the nearest following non-excluded node, searching circularly.
pub(crate) fn next_non_excluded(nodes: &[PieceNode], start: usize) -> Option<usize> {
    let n = nodes.len();
    let mut i = start;
    for _ in 1..n {
        i = (i + 1) % n;
        if !nodes[i].excluded {
            return Some(i);
        }
    }
    None
}

/// First intersection of the current curve with a neighbor curve that is not
/// one of the current curve's own endpoints.
///
/// Both endpoints are excluded: on a closed contour the neighbor meets the
/// curve at both junctions, and a hit at the far endpoint would collapse the
/// segment.
fn first_intersection(current: &[Point], neighbor: &[Point]) -> Option<Point> {
    let (Some(&first), Some(&last)) = (current.first(), current.last()) else {
        return None;
    };
    for cur in current.windows(2) {
        for nb in neighbor.windows(2) {
            if let Some(hit) = segment_intersection(cur[0], cur[1], nb[0], nb[1]) {
                if !hit.fuzzy_eq(&first) && !hit.fuzzy_eq(&last) {
                    return Some(hit);
                }
            }
        }
    }
    None
}

/// Resolves the exact boundary points where curve segments begin and end.
pub struct NodeResolver<'a, G: GeometrySource> {
    source: &'a G,
    ctx: &'a EngineContext,
    /// Times the intersection refinement found nothing and the raw endpoint
    /// was kept. Lenient by design, but observable.
    fallback_count: Cell<u32>,
}

impl<'a, G: GeometrySource> NodeResolver<'a, G> {
    pub fn new(source: &'a G, ctx: &'a EngineContext) -> Self {
        Self {
            source,
            ctx,
            fallback_count: Cell::new(0),
        }
    }

    /// How often the no-intersection fallback fired since construction.
    pub fn fallback_count(&self) -> u32 {
        self.fallback_count.get()
    }

    /// Refined boundary point where the curve segment at `index` begins.
    pub fn start_boundary(
        &self,
        path: &PiecePath,
        index: usize,
    ) -> GeometryResult<AllowancePoint> {
        self.boundary(path, index, false)
    }

    /// Refined boundary point where the curve segment at `index` ends.
    pub fn end_boundary(&self, path: &PiecePath, index: usize) -> GeometryResult<AllowancePoint> {
        self.boundary(path, index, true)
    }

    fn boundary(
        &self,
        path: &PiecePath,
        index: usize,
        at_end: bool,
    ) -> GeometryResult<AllowancePoint> {
        let Some(node) = path.nodes.get(index) else {
            return Ok(AllowancePoint::default());
        };

        let mut points = self.fetch_curve(node.id)?;
        if node.reverse {
            points.reverse();
        }
        let raw = if at_end {
            points.last().copied()
        } else {
            points.first().copied()
        };
        let Some(raw) = raw else {
            return Ok(AllowancePoint::default());
        };

        let mut boundary = AllowancePoint::new(raw);
        if path.nodes.len() > 1 {
            let neighbor_index = if at_end {
                next_non_excluded(&path.nodes, index)
            } else {
                prev_non_excluded(&path.nodes, index)
            };
            if let Some(j) = neighbor_index {
                let neighbor = &path.nodes[j];
                match neighbor.kind {
                    ToolKind::Point => {
                        if let Some(coord) = self.fetch_point(neighbor.id)? {
                            if points.iter().any(|p| p.fuzzy_eq(&coord)) {
                                boundary = AllowancePoint::from_node(coord, neighbor);
                            }
                        }
                    }
                    ToolKind::Arc
                    | ToolKind::EllipticalArc
                    | ToolKind::Spline
                    | ToolKind::SplinePath => {
                        let neighbor_points = self.fetch_curve(neighbor.id)?;
                        if let Some(hit) = first_intersection(&points, &neighbor_points) {
                            boundary = AllowancePoint::new(hit);
                            boundary.turn_point = true;
                        } else if neighbor_points.len() > 1 {
                            self.fallback_count.set(self.fallback_count.get() + 1);
                            warn!(
                                "No intersection between curve {} and neighbor curve {} in path '{}', keeping unrefined boundary",
                                node.id, neighbor.id, path.name
                            );
                        }
                    }
                }
            }
        }
        Ok(boundary)
    }

    /// Fetches a curve's point list, applying the validation policy to
    /// missing-geometry failures.
    pub(crate) fn fetch_curve(&self, id: ObjectId) -> GeometryResult<Vec<Point>> {
        match self.source.curve_points(id) {
            Ok(points) => Ok(points),
            Err(e @ GeometryError::MissingGeometry { .. }) if self.ctx.mode.is_pedantic() => {
                Err(e)
            }
            Err(e) => {
                warn!("{}; treating curve as empty", e);
                Ok(Vec::new())
            }
        }
    }

    /// Fetches a curve sub-segment, applying the validation policy.
    pub(crate) fn fetch_segment(
        &self,
        id: ObjectId,
        begin: Point,
        end: Point,
        reverse: bool,
    ) -> GeometryResult<Vec<Point>> {
        match self.source.segment_points(id, begin, end, reverse) {
            Ok(points) => Ok(points),
            Err(e @ GeometryError::MissingGeometry { .. }) if self.ctx.mode.is_pedantic() => {
                Err(e)
            }
            Err(e) => {
                warn!("{}; treating segment as empty", e);
                Ok(Vec::new())
            }
        }
    }

    /// Fetches a point's coordinates, applying the validation policy.
    pub(crate) fn fetch_point(&self, id: ObjectId) -> GeometryResult<Option<Point>> {
        match self.source.point_coordinates(id) {
            Ok(p) => Ok(Some(p)),
            Err(e @ GeometryError::MissingGeometry { .. }) if self.ctx.mode.is_pedantic() => {
                Err(e)
            }
            Err(e) => {
                warn!("{}; skipping neighbor promotion", e);
                Ok(None)
            }
        }
    }
}
