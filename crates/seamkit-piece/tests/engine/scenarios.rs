//! End-to-end scenarios over a point / arc / point main path.

use seamkit_core::Point;
use seamkit_piece::{
    equidistant, EngineContext, ObjectArena, PathAssembler, SeamAllowanceBuilder,
    VisibilityEvaluator,
};

use crate::common::quarter_arc_path;

#[test]
fn test_seam_line_emission_counts() {
    let mut arena = ObjectArena::new();
    let path = quarter_arc_path(&mut arena);

    let ctx = EngineContext::new(1.0, Default::default());
    let assembler = PathAssembler::new(&arena, &ctx);
    let contour = assembler.nodes_to_contour(&path).unwrap();

    // One point per point node plus the 17 sampled arc points, in order.
    assert_eq!(contour.len(), 2 + 17);
    assert!(!contour[0].curve_point);
    assert!(contour[1..18].iter().all(|p| p.curve_point));
    assert!(!contour[18].curve_point);
    assert!(contour[0].point.fuzzy_eq(&Point::new(10.0, 0.0)));
    assert!(contour[18].point.fuzzy_eq(&Point::new(0.0, 10.0)));
}

#[test]
fn test_uniform_global_width() {
    let mut arena = ObjectArena::new();
    let path = quarter_arc_path(&mut arena);

    let ctx = EngineContext::new(1.0, Default::default());
    let builder = SeamAllowanceBuilder::new(&arena, &ctx);
    let points = builder.allowance_points(&path, false).unwrap();

    assert_eq!(points.len(), 2 + 17);
    for p in &points {
        assert_eq!(p.effective_before(ctx.default_width), 1.0);
        assert_eq!(p.effective_after(ctx.default_width), 1.0);
    }
}

#[test]
fn test_variable_width_monotone_over_arclength() {
    let mut arena = ObjectArena::new();
    let mut path = quarter_arc_path(&mut arena);
    path.nodes[0].after_width = 2.0;
    path.nodes[2].before_width = 1.0;

    let ctx = EngineContext::new(1.0, Default::default());
    let builder = SeamAllowanceBuilder::new(&arena, &ctx);
    let points = builder.allowance_points(&path, false).unwrap();

    let arc = &points[1..18];
    // Boundary points carry the exact vertex widths, never interpolated.
    assert_eq!(arc[0].width_after, 2.0);
    assert_eq!(arc[16].width_before, 1.0);
    // Interior widths decrease strictly with arclength from A.
    for pair in arc[1..16].windows(2) {
        assert!(pair[0].width_before > pair[1].width_before);
    }
    for p in &arc[1..16] {
        assert!(p.width_before > 1.0 && p.width_before < 2.0);
        assert_eq!(p.width_before, p.width_after);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut arena = ObjectArena::new();
    let path = quarter_arc_path(&mut arena);

    let ctx = EngineContext::new(1.0, Default::default());
    let builder = SeamAllowanceBuilder::new(&arena, &ctx);
    let assembler = PathAssembler::new(&arena, &ctx);

    assert_eq!(
        builder.allowance_points(&path, false).unwrap(),
        builder.allowance_points(&path, false).unwrap()
    );
    assert_eq!(
        assembler.nodes_to_contour(&path).unwrap(),
        assembler.nodes_to_contour(&path).unwrap()
    );
}

#[test]
fn test_equidistant_contour_encloses_seam_line() {
    let mut arena = ObjectArena::new();
    let path = quarter_arc_path(&mut arena);

    let ctx = EngineContext::new(1.0, Default::default());
    let builder = SeamAllowanceBuilder::new(&arena, &ctx);
    let points = builder.allowance_points(&path, false).unwrap();
    let contour = equidistant(&points, ctx.default_width);

    assert!(contour.len() >= 3);
    let max_r = contour
        .iter()
        .map(|p| p.distance_to(&Point::new(0.0, 0.0)))
        .fold(f64::MIN, f64::max);
    // The widest part of the offset sits one width outside the arc.
    assert!(max_r > 10.5 && max_r < 11.5);
}

#[test]
fn test_visibility_of_real_paths() {
    let mut arena = ObjectArena::new();
    let mut path = quarter_arc_path(&mut arena);

    let ctx = EngineContext::new(1.0, Default::default());
    let eval = VisibilityEvaluator::new(&ctx);
    assert!(eval.is_visible(&path));

    path.visibility_trigger = "0".to_string();
    assert!(!eval.is_visible(&path));
}
