//! Property tests for the algebraic laws of the engine.

use proptest::prelude::*;

use seamkit_core::{ObjectId, Point};
use seamkit_piece::{
    EngineContext, ObjectArena, PathAssembler, PieceNode, PiecePath, PiecePathKind,
    SeamAllowanceBuilder, ToolKind,
};

#[path = "engine/common.rs"]
mod common;

use common::quarter_arc_path;

proptest! {
    #[test]
    fn prop_reversal_law(w1 in 0.0f64..5.0, w2 in 0.0f64..5.0, global in 0.1f64..3.0) {
        let mut arena = ObjectArena::new();
        let mut path = quarter_arc_path(&mut arena);
        path.nodes[0].after_width = w1;
        path.nodes[2].before_width = w2;

        let ctx = EngineContext::new(global, Default::default());
        let builder = SeamAllowanceBuilder::new(&arena, &ctx);
        let forward = builder.allowance_points(&path, false).unwrap();
        let mut backward = builder.allowance_points(&path, true).unwrap();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_interpolated_widths_stay_in_range(w1 in 0.0f64..5.0, w2 in 0.0f64..5.0) {
        prop_assume!((w1 - w2).abs() > 1e-6);

        let mut arena = ObjectArena::new();
        let mut path = quarter_arc_path(&mut arena);
        path.nodes[0].after_width = w1;
        path.nodes[2].before_width = w2;

        let ctx = EngineContext::new(1.0, Default::default());
        let builder = SeamAllowanceBuilder::new(&arena, &ctx);
        let points = builder.allowance_points(&path, false).unwrap();

        let lo = w1.min(w2);
        let hi = w1.max(w2);
        let interior = &points[2..points.len() - 2];
        let increasing = w2 > w1;
        for pair in interior.windows(2) {
            if increasing {
                prop_assert!(pair[0].width_before < pair[1].width_before);
            } else {
                prop_assert!(pair[0].width_before > pair[1].width_before);
            }
        }
        for p in interior {
            prop_assert!(p.width_before > lo && p.width_before < hi);
        }
    }

    #[test]
    fn prop_idempotent(w1 in -1.0f64..5.0, reverse in any::<bool>()) {
        let mut arena = ObjectArena::new();
        let mut path = quarter_arc_path(&mut arena);
        path.nodes[0].after_width = w1;

        let ctx = EngineContext::new(1.0, Default::default());
        let builder = SeamAllowanceBuilder::new(&arena, &ctx);
        prop_assert_eq!(
            builder.allowance_points(&path, reverse).unwrap(),
            builder.allowance_points(&path, reverse).unwrap()
        );
    }

    #[test]
    fn prop_point_nodes_emit_in_order(excluded in proptest::collection::vec(any::<bool>(), 3..10)) {
        let mut arena = ObjectArena::new();
        let mut path = PiecePath::new("points", PiecePathKind::MainPath);
        for (i, skip) in excluded.iter().enumerate() {
            let id = ObjectId(i as u32 + 1);
            arena.insert_point(id, Point::new(i as f64, (i * i) as f64));
            let mut node = PieceNode::new(id, ToolKind::Point);
            node.excluded = *skip;
            path.push(node);
        }

        let ctx = EngineContext::new(1.0, Default::default());
        let assembler = PathAssembler::new(&arena, &ctx);
        let contour = assembler.nodes_to_contour(&path).unwrap();

        let expected: Vec<Point> = excluded
            .iter()
            .enumerate()
            .filter(|(_, skip)| !**skip)
            .map(|(i, _)| Point::new(i as f64, (i * i) as f64))
            .collect();
        prop_assert_eq!(contour.len(), expected.len());
        for (got, want) in contour.iter().zip(&expected) {
            prop_assert!(got.point.fuzzy_eq(want));
        }
    }
}
