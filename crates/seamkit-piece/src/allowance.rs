//! Seam-allowance point generation.
//!
//! Produces the width-annotated point sequence consumers use to build the
//! cutting contour and place passmarks. Widths local to a vertex override
//! the piece's global default; along a curve segment the width is
//! interpolated linearly over cumulative arclength between the two boundary
//! widths.

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};

use seamkit_core::{GeometryResult, Point};

use crate::container::GeometrySource;
use crate::node::{NodeAngle, PieceNode};
use crate::path::{AllowancePoint, EngineContext, PiecePath};
use crate::resolver::NodeResolver;

/// Builds width-annotated seam-allowance point sequences.
pub struct SeamAllowanceBuilder<'a, G: GeometrySource> {
    ctx: &'a EngineContext,
    resolver: NodeResolver<'a, G>,
}

impl<'a, G: GeometrySource> SeamAllowanceBuilder<'a, G> {
    pub fn new(source: &'a G, ctx: &'a EngineContext) -> Self {
        Self {
            ctx,
            resolver: NodeResolver::new(source, ctx),
        }
    }

    /// Access to the shared resolver, mainly for its fallback counter.
    pub fn resolver(&self) -> &NodeResolver<'a, G> {
        &self.resolver
    }

    /// Walks `path` and produces its seam-allowance points.
    ///
    /// With `reverse` set the finished list is reversed pointwise; widths
    /// and flags stay attached to their points.
    pub fn allowance_points(
        &self,
        path: &PiecePath,
        reverse: bool,
    ) -> GeometryResult<Vec<AllowancePoint>> {
        let mut out = Vec::new();

        for (i, node) in path.nodes.iter().enumerate() {
            if node.excluded {
                continue;
            }
            if !node.kind.is_curve() {
                if let Some(coord) = self.resolver.fetch_point(node.id)? {
                    out.push(AllowancePoint::from_node(coord, node));
                }
                continue;
            }
            self.curve_allowance_points(path, i, node, &mut out)?;
        }

        if reverse {
            out.reverse();
        }
        Ok(out)
    }

    fn curve_allowance_points(
        &self,
        path: &PiecePath,
        index: usize,
        node: &PieceNode,
        out: &mut Vec<AllowancePoint>,
    ) -> GeometryResult<()> {
        let begin = self.resolver.start_boundary(path, index)?;
        let end = self.resolver.end_boundary(path, index)?;
        let segment =
            self.resolver
                .fetch_segment(node.id, begin.point, end.point, node.reverse)?;
        if segment.len() < 2 {
            return Ok(());
        }

        // Boundary widths: after-width of the begin vertex, before-width of
        // the end vertex. Negative means "use the global default".
        let w1 = begin.width_after;
        let w2 = end.width_before;
        let uniform_default = w1 < 0.0 && w2 < 0.0;
        let w1 = if w1 < 0.0 { self.ctx.default_width } else { w1 };
        let w2 = if w2 < 0.0 { self.ctx.default_width } else { w2 };

        let mut cumulative = Vec::with_capacity(segment.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in segment.windows(2) {
            total += pair[0].distance_to(&pair[1]);
            cumulative.push(total);
        }

        let last = segment.len() - 1;
        for (k, point) in segment.iter().enumerate() {
            if k == 0 || k == last {
                // Boundary points take the resolved vertex attributes
                // exactly, never interpolated values.
                let boundary = if k == 0 { &begin } else { &end };
                let mut sa = *boundary;
                sa.point = *point;
                sa.turn_point = if point.fuzzy_eq(&boundary.point) {
                    boundary.turn_point
                } else {
                    true
                };
                out.push(sa);
                continue;
            }

            let mut sa = AllowancePoint::new(*point);
            sa.angle = NodeAngle::ByLengthCurve;
            sa.curve_point = true;
            if !uniform_default {
                let fraction = if total > 0.0 { cumulative[k] / total } else { 0.0 };
                let width = w1 + (w2 - w1) * fraction;
                sa.width_before = width;
                sa.width_after = width;
            }
            out.push(sa);
        }
        Ok(())
    }
}

/// Prepares a closed polygon for offsetting: removes duplicate vertices and
/// enforces clockwise orientation so positive offsets grow outward.
fn prepare_polygon(vertices: &[Point]) -> Polyline {
    let mut clean: Vec<Point> = Vec::new();
    for p in vertices {
        match clean.last() {
            Some(last) if last.fuzzy_eq(p) => {}
            _ => clean.push(*p),
        }
    }
    if clean.len() > 1 && clean.first().unwrap().fuzzy_eq(clean.last().unwrap()) {
        clean.pop();
    }

    let mut signed_area = 0.0;
    for i in 0..clean.len() {
        let p1 = clean[i];
        let p2 = clean[(i + 1) % clean.len()];
        signed_area += p1.x * p2.y - p2.x * p1.y;
    }
    if signed_area > 0.0 {
        clean.reverse();
    }

    let mut polyline = Polyline::new();
    for p in clean {
        polyline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    polyline.set_is_closed(true);
    polyline
}

/// Offsets the seam line outward to form the uniform-width cutting contour.
///
/// The offset distance is the largest effective width over all points;
/// variable-width refinement stays with the annotated points themselves.
/// Returns an empty contour for degenerate input.
pub fn equidistant(points: &[AllowancePoint], default_width: f64) -> Vec<Point> {
    if points.len() < 3 {
        return Vec::new();
    }
    let width = points
        .iter()
        .flat_map(|p| {
            [
                p.effective_before(default_width),
                p.effective_after(default_width),
            ]
        })
        .fold(0.0_f64, f64::max);
    if width <= 0.0 {
        return points.iter().map(|p| p.point).collect();
    }

    let vertices: Vec<Point> = points.iter().map(|p| p.point).collect();
    let polyline = prepare_polygon(&vertices);
    if polyline.vertex_data.len() < 3 {
        return Vec::new();
    }

    let offsets = polyline.parallel_offset(width);
    offsets
        .iter()
        .max_by(|a, b| a.area().abs().total_cmp(&b.area().abs()))
        .map(|best| {
            best.vertex_data
                .iter()
                .map(|v| Point::new(v.x, v.y))
                .collect()
        })
        .unwrap_or_default()
}
