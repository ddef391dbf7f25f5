//! Piece paths and the flattened output point types.

use serde::{Deserialize, Serialize};

use seamkit_core::{LinearUnit, Point, ValidationMode, VariableTable};

use crate::node::{NodeAngle, PieceNode, DEFAULT_WIDTH};

/// Role of a path on a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PiecePathKind {
    /// The outer seam line of the piece.
    MainPath,
    /// A hand-drawn replacement for the computed seam allowance.
    CustomSeamAllowance,
    /// An auxiliary path (pocket placement, fold line, ...).
    InternalPath,
}

/// Pen style used when the path is drawn or plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PenStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    NoPen,
}

/// An ordered node sequence with its path-level configuration.
///
/// Node order is traversal/winding order. The engine never mutates a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecePath {
    pub name: String,
    pub kind: PiecePathKind,
    pub nodes: Vec<PieceNode>,
    /// The path is cut out (as opposed to only marked) on the fabric.
    pub cut: bool,
    pub pen_style: PenStyle,
    /// Formula deciding whether the path is drawn; empty means always.
    pub visibility_trigger: String,
    /// Extend the first point to the cutting contour (internal paths only).
    pub first_to_cutting_contour: bool,
    /// Extend the last point to the cutting contour (internal paths only).
    pub last_to_cutting_contour: bool,
}

impl PiecePath {
    pub fn new(name: impl Into<String>, kind: PiecePathKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nodes: Vec::new(),
            cut: false,
            pen_style: PenStyle::default(),
            visibility_trigger: String::new(),
            first_to_cutting_contour: false,
            last_to_cutting_contour: false,
        }
    }

    pub fn push(&mut self, node: PieceNode) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A flattened seam-line point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContourPoint {
    pub point: Point,
    /// Genuine direction change, preserved exactly by exporters.
    pub turn_point: bool,
    /// The point was sampled from a curve approximation.
    pub curve_point: bool,
}

impl ContourPoint {
    pub fn new(point: Point) -> Self {
        Self {
            point,
            turn_point: false,
            curve_point: false,
        }
    }
}

/// A seam-allowance point: position plus the width and passmark attributes
/// consumers need to build the cutting contour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllowancePoint {
    pub point: Point,
    /// Allowance width before this point; negative = global default.
    pub width_before: f64,
    /// Allowance width after this point; negative = global default.
    pub width_after: f64,
    pub angle: NodeAngle,
    pub turn_point: bool,
    pub curve_point: bool,
    pub manual_passmark_length: bool,
    pub passmark_length: f64,
    pub manual_passmark_width: bool,
    pub passmark_width: f64,
    pub manual_passmark_angle: bool,
    pub passmark_angle: f64,
    pub passmark_clockwise_opening: bool,
}

impl Default for AllowancePoint {
    fn default() -> Self {
        Self {
            point: Point::default(),
            width_before: DEFAULT_WIDTH,
            width_after: DEFAULT_WIDTH,
            angle: NodeAngle::default(),
            turn_point: false,
            curve_point: false,
            manual_passmark_length: false,
            passmark_length: 0.0,
            manual_passmark_width: false,
            passmark_width: 0.0,
            manual_passmark_angle: false,
            passmark_angle: 0.0,
            passmark_clockwise_opening: false,
        }
    }
}

impl AllowancePoint {
    pub fn new(point: Point) -> Self {
        Self {
            point,
            ..Self::default()
        }
    }

    /// Builds the full attribute set for a vertex from its node.
    pub fn from_node(point: Point, node: &PieceNode) -> Self {
        let mut sa = Self::new(point);
        sa.width_before = node.before_width;
        sa.width_after = node.after_width;
        sa.angle = node.angle;
        sa.turn_point = node.turn_point;
        if node.passmark.enabled {
            sa.manual_passmark_length = node.passmark.manual_length;
            sa.passmark_length = node.passmark.length;
            sa.manual_passmark_width = node.passmark.manual_width;
            sa.passmark_width = node.passmark.width;
            sa.manual_passmark_angle = node.passmark.manual_angle;
            sa.passmark_angle = node.passmark.angle;
            sa.passmark_clockwise_opening = node.passmark.clockwise_opening;
        }
        sa
    }

    /// Width before this point with the global default substituted.
    pub fn effective_before(&self, global_width: f64) -> f64 {
        if self.width_before < 0.0 {
            global_width
        } else {
            self.width_before
        }
    }

    /// Width after this point with the global default substituted.
    pub fn effective_after(&self, global_width: f64) -> f64 {
        if self.width_after < 0.0 {
            global_width
        } else {
            self.width_after
        }
    }
}

/// Per-computation settings and document state handed to the engine.
///
/// The variable table is an immutable snapshot; the engine never reaches for
/// process-wide state.
#[derive(Debug, Clone, Default)]
pub struct EngineContext {
    /// Global default seam-allowance width, in `unit`.
    pub default_width: f64,
    pub unit: LinearUnit,
    pub mode: ValidationMode,
    pub variables: VariableTable,
}

impl EngineContext {
    pub fn new(default_width: f64, unit: LinearUnit) -> Self {
        Self {
            default_width,
            unit,
            mode: ValidationMode::default(),
            variables: VariableTable::new(),
        }
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_variables(mut self, variables: VariableTable) -> Self {
        self.variables = variables;
        self
    }
}
