//! Turn-point propagation and fallback observability across components.

use seamkit_core::{GeometryResult, ObjectId, Point};
use seamkit_piece::{
    EngineContext, GeometrySource, ObjectArena, PathAssembler, PieceNode, PiecePath,
    PiecePathKind, ToolKind,
};

/// A geometry source that keeps segment endpoints on the raw samples instead
/// of snapping them to the requested boundaries. Models curve containers
/// whose sub-segment extraction is coarser than the resolver's refinement.
struct CoarseSource {
    inner: ObjectArena,
}

impl GeometrySource for CoarseSource {
    fn curve_points(&self, id: ObjectId) -> GeometryResult<Vec<Point>> {
        self.inner.curve_points(id)
    }

    fn segment_points(
        &self,
        id: ObjectId,
        _begin: Point,
        _end: Point,
        reverse: bool,
    ) -> GeometryResult<Vec<Point>> {
        let mut points = self.inner.curve_points(id)?;
        if reverse {
            points.reverse();
        }
        Ok(points)
    }

    fn point_coordinates(&self, id: ObjectId) -> GeometryResult<Point> {
        self.inner.point_coordinates(id)
    }
}

#[test]
fn test_coincident_boundary_inherits_turn_flag() {
    let mut arena = ObjectArena::new();
    let mut a = PieceNode::new(ObjectId(1), ToolKind::Point);
    a.turn_point = false;
    let mut b = PieceNode::new(ObjectId(3), ToolKind::Point);
    b.turn_point = false;
    arena.insert_point(ObjectId(1), Point::new(0.0, 0.0));
    arena.insert_curve(
        ObjectId(2),
        vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 1.0),
            Point::new(10.0, 0.0),
        ],
    );
    arena.insert_point(ObjectId(3), Point::new(10.0, 0.0));

    let mut path = PiecePath::new("test", PiecePathKind::MainPath);
    path.push(a);
    path.push(PieceNode::new(ObjectId(2), ToolKind::Spline));
    path.push(b);

    let ctx = EngineContext::new(1.0, Default::default());
    let assembler = PathAssembler::new(&arena, &ctx);
    let contour = assembler.nodes_to_contour(&path).unwrap();

    // The curve's first and last points coincide with the resolved
    // boundaries (nodes A and B, turn_point = false) and inherit that flag.
    assert!(!contour[1].turn_point);
    assert!(!contour[3].turn_point);
}

#[test]
fn test_non_coincident_boundary_is_forced_turn_point() {
    // The neighbor curve crosses at x = 3.7; the coarse source still returns
    // raw samples, so the emitted first point differs from the boundary.
    let mut inner = ObjectArena::new();
    inner.insert_curve(
        ObjectId(2),
        vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ],
    );
    inner.insert_curve(
        ObjectId(3),
        vec![Point::new(3.7, -5.0), Point::new(3.7, 5.0)],
    );
    let source = CoarseSource { inner };

    let mut path = PiecePath::new("test", PiecePathKind::MainPath);
    path.push(PieceNode::new(ObjectId(3), ToolKind::Spline));
    path.push(PieceNode::new(ObjectId(2), ToolKind::Spline));

    let ctx = EngineContext::new(1.0, Default::default());
    let assembler = PathAssembler::new(&source, &ctx);
    let contour = assembler.nodes_to_contour(&path).unwrap();

    // Points of curve 2 start at (0,0), which is not the refined boundary
    // (3.7, 0): the flag must be forced on.
    let curve2_first = contour
        .iter()
        .find(|p| p.point.fuzzy_eq(&Point::new(0.0, 0.0)))
        .unwrap();
    assert!(curve2_first.turn_point);
}

#[test]
fn test_fallback_counter_reaches_caller() {
    let mut arena = ObjectArena::new();
    // Two parallel curves that never intersect.
    arena.insert_curve(
        ObjectId(2),
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    );
    arena.insert_curve(
        ObjectId(3),
        vec![Point::new(0.0, 5.0), Point::new(10.0, 5.0)],
    );

    let mut path = PiecePath::new("test", PiecePathKind::MainPath);
    path.push(PieceNode::new(ObjectId(2), ToolKind::Spline));
    path.push(PieceNode::new(ObjectId(3), ToolKind::Spline));

    let ctx = EngineContext::new(1.0, Default::default());
    let assembler = PathAssembler::new(&arena, &ctx);
    let _ = assembler.nodes_to_contour(&path).unwrap();

    // Both curves look for boundary refinement against each other and fall
    // back at every boundary.
    assert!(assembler.resolver().fallback_count() > 0);
}
