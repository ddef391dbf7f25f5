//! Internal-path extension to the cutting contour.
//!
//! Internal paths (fold lines, pocket placements) can be configured to run
//! all the way to the piece's cutting contour. The extender casts a ray from
//! the path tip away from the path and meets the contour there.

use std::f64::consts::PI;

use tracing::warn;

use seamkit_core::{
    point_on_contour, ray_contour_intersection, GeometryError, GeometryResult, Point,
};

use crate::assembler::PathAssembler;
use crate::container::GeometrySource;
use crate::path::{ContourPoint, EngineContext, PiecePath, PiecePathKind};

/// Extends internal paths to a surrounding cutting contour.
pub struct InternalPathExtender<'a, G: GeometrySource> {
    source: &'a G,
    ctx: &'a EngineContext,
}

impl<'a, G: GeometrySource> InternalPathExtender<'a, G> {
    pub fn new(source: &'a G, ctx: &'a EngineContext) -> Self {
        Self { source, ctx }
    }

    /// Flattens `path` and, for internal paths configured to do so, extends
    /// its first/last point to `cutting_contour`.
    ///
    /// A missing required intersection aborts in pedantic mode; in
    /// permissive mode it is logged and that end is left unmodified.
    pub fn path_points(
        &self,
        path: &PiecePath,
        cutting_contour: &[Point],
    ) -> GeometryResult<Vec<ContourPoint>> {
        let assembler = PathAssembler::new(self.source, self.ctx);
        let mut points = assembler.nodes_to_contour(path)?;

        if path.kind != PiecePathKind::InternalPath
            || cutting_contour.len() < 2
            || points.len() < 2
        {
            return Ok(points);
        }

        if path.first_to_cutting_contour {
            match Self::tip_extension(&points, cutting_contour) {
                Some(hit) => {
                    let mut p = ContourPoint::new(hit);
                    p.turn_point = true;
                    points.insert(0, p);
                }
                None => self.handle_miss(path)?,
            }
        }

        if path.last_to_cutting_contour {
            let reversed: Vec<ContourPoint> = points.iter().rev().copied().collect();
            match Self::tip_extension(&reversed, cutting_contour) {
                Some(hit) => {
                    let mut p = ContourPoint::new(hit);
                    p.turn_point = true;
                    points.push(p);
                }
                None => self.handle_miss(path)?,
            }
        }

        Ok(points)
    }

    /// Where the path tip meets the contour.
    ///
    /// The tip direction points from the first point toward the next
    /// distinct point, reversed by 180 degrees. A tip already on the contour
    /// is used directly.
    fn tip_extension(points: &[ContourPoint], contour: &[Point]) -> Option<Point> {
        let first = points.first()?.point;
        let next = points
            .iter()
            .skip(1)
            .map(|p| p.point)
            .find(|p| !p.fuzzy_eq(&first))?;

        if point_on_contour(first, contour) {
            return Some(first);
        }
        let angle = first.angle_to(&next) + PI;
        ray_contour_intersection(first, angle, contour)
    }

    fn handle_miss(&self, path: &PiecePath) -> GeometryResult<()> {
        if self.ctx.mode.is_pedantic() {
            return Err(GeometryError::NoIntersection {
                path: path.name.clone(),
            });
        }
        warn!(
            "Path '{}' could not be extended to the cutting contour, leaving it as is",
            path.name
        );
        Ok(())
    }
}
