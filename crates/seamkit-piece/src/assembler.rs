//! Seam-line flattening.
//!
//! Walks a path's non-excluded nodes in order and produces the flat point
//! sequence of the seam line. Output order equals node traversal order
//! exactly; nothing is deduplicated across node boundaries.

use seamkit_core::GeometryResult;

use crate::container::GeometrySource;
use crate::path::{ContourPoint, EngineContext, PiecePath};
use crate::resolver::NodeResolver;

/// Flattens piece paths into seam-line polylines.
pub struct PathAssembler<'a, G: GeometrySource> {
    resolver: NodeResolver<'a, G>,
}

impl<'a, G: GeometrySource> PathAssembler<'a, G> {
    pub fn new(source: &'a G, ctx: &'a EngineContext) -> Self {
        Self {
            resolver: NodeResolver::new(source, ctx),
        }
    }

    /// Access to the shared resolver, mainly for its fallback counter.
    pub fn resolver(&self) -> &NodeResolver<'a, G> {
        &self.resolver
    }

    /// Flattens `path` into seam-line points.
    ///
    /// Point nodes emit exactly one point carrying the node's turn-point
    /// flag. Curve nodes emit every point of their resolved segment, marked
    /// as curve points; the segment's first and last points inherit the
    /// resolved boundary's turn-point flag when they coincide with it and
    /// are forced to turn points otherwise.
    pub fn nodes_to_contour(&self, path: &PiecePath) -> GeometryResult<Vec<ContourPoint>> {
        let mut contour = Vec::new();

        for (i, node) in path.nodes.iter().enumerate() {
            if node.excluded {
                continue;
            }
            if !node.kind.is_curve() {
                if let Some(coord) = self.resolver.fetch_point(node.id)? {
                    let mut p = ContourPoint::new(coord);
                    p.turn_point = node.turn_point;
                    contour.push(p);
                }
                continue;
            }

            let begin = self.resolver.start_boundary(path, i)?;
            let end = self.resolver.end_boundary(path, i)?;
            let segment =
                self.resolver
                    .fetch_segment(node.id, begin.point, end.point, node.reverse)?;
            let last = segment.len().saturating_sub(1);
            for (k, point) in segment.into_iter().enumerate() {
                let mut p = ContourPoint::new(point);
                p.curve_point = true;
                if k == 0 {
                    p.turn_point = if point.fuzzy_eq(&begin.point) {
                        begin.turn_point
                    } else {
                        true
                    };
                } else if k == last {
                    p.turn_point = if point.fuzzy_eq(&end.point) {
                        end.turn_point
                    } else {
                        true
                    };
                }
                contour.push(p);
            }
        }

        Ok(contour)
    }
}
