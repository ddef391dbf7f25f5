//! Shared fixtures for the engine integration tests.

use seamkit_core::{ObjectId, Point};
use seamkit_piece::{ObjectArena, PieceNode, PiecePath, PiecePathKind, ToolKind};

/// Samples a circular arc as a point-list approximation.
pub fn arc_points(center: Point, radius: f64, start_deg: f64, end_deg: f64, steps: usize) -> Vec<Point> {
    (0..=steps)
        .map(|i| {
            let t = start_deg + (end_deg - start_deg) * (i as f64) / (steps as f64);
            center.polar(radius, t.to_radians())
        })
        .collect()
}

/// The reference fixture: point A at the arc start, a quarter arc of radius
/// 10 around the origin, point B at the arc end.
pub fn quarter_arc_path(arena: &mut ObjectArena) -> PiecePath {
    let a = Point::new(10.0, 0.0);
    let b = Point::new(0.0, 10.0);
    arena.insert_point(ObjectId(1), a);
    arena.insert_curve(ObjectId(2), arc_points(Point::new(0.0, 0.0), 10.0, 0.0, 90.0, 16));
    arena.insert_point(ObjectId(3), b);

    let mut path = PiecePath::new("front", PiecePathKind::MainPath);
    path.push(PieceNode::new(ObjectId(1), ToolKind::Point));
    path.push(PieceNode::new(ObjectId(2), ToolKind::Arc));
    path.push(PieceNode::new(ObjectId(3), ToolKind::Point));
    path
}
