//! Piece-path node model.
//!
//! A node references one geometric object of the pattern document and carries
//! the per-vertex seam-allowance and passmark configuration. Nodes are
//! created and mutated by the editing layer; the engine only reads them.

use serde::{Deserialize, Serialize};
use tracing::warn;

use seamkit_core::{Calculator, ObjectId, VariableTable};

/// Sentinel width meaning "use the piece's global default".
pub const DEFAULT_WIDTH: f64 = -1.0;

/// Kind of tool a node references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    Point,
    Arc,
    EllipticalArc,
    Spline,
    SplinePath,
}

impl ToolKind {
    /// True for every kind that contributes a point-list segment rather than
    /// a single vertex.
    pub fn is_curve(self) -> bool {
        !matches!(self, Self::Point)
    }
}

/// How the seam-allowance width is interpreted at a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeAngle {
    #[default]
    ByLength,
    ByPointsIntersection,
    ByFirstEdgeSymmetry,
    BySecondEdgeSymmetry,
    ByFirstEdgeRightAngle,
    BySecondEdgeRightAngle,
    /// Interior curve points: width follows the curve, no corner treatment.
    ByLengthCurve,
}

/// Shape of a passmark on the cutting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PassmarkLineType {
    #[default]
    OneLine,
    TwoLines,
    ThreeLines,
    TMark,
    VMark,
    UMark,
    BoxMark,
    CheckMark,
}

/// Direction rule for the passmark base line.
///
/// Carried for consumers that pick their own mark direction; the mark
/// builder uses the straightforward rule unless a manual angle is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PassmarkAngleType {
    #[default]
    Straightforward,
    Bisector,
    Intersection,
}

/// Passmark configuration attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassmarkData {
    pub enabled: bool,
    pub line_type: PassmarkLineType,
    pub angle_type: PassmarkAngleType,
    /// When set, `length` overrides the computed mark length.
    pub manual_length: bool,
    pub length: f64,
    /// When set, `width` overrides the computed mark width.
    pub manual_width: bool,
    pub width: f64,
    /// When set, `angle` (radians) overrides the computed mark direction.
    pub manual_angle: bool,
    pub angle: f64,
    /// Orientation of one-sided marks (V, check).
    pub clockwise_opening: bool,
    /// Draw the companion mark on the seam line as well. Read by renderers,
    /// not by the mark builder.
    pub show_second: bool,
}

impl Default for PassmarkData {
    fn default() -> Self {
        Self {
            enabled: false,
            line_type: PassmarkLineType::default(),
            angle_type: PassmarkAngleType::default(),
            manual_length: false,
            length: 0.0,
            manual_width: false,
            width: 0.0,
            manual_angle: false,
            angle: 0.0,
            clockwise_opening: false,
            show_second: true,
        }
    }
}

/// One entry of a piece path.
///
/// Node ids are unique within a path; uniqueness is enforced by the editing
/// layer, not repaired here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceNode {
    pub id: ObjectId,
    pub kind: ToolKind,
    /// Traverse the referenced curve backwards. Meaningful for curves only.
    pub reverse: bool,
    /// Excluded nodes are skipped by every walk but keep their slot.
    pub excluded: bool,
    /// The vertex is a genuine direction change preserved by exporters.
    pub turn_point: bool,
    pub check_uniqueness: bool,
    /// Width formula before this vertex; empty means "use global default".
    pub before_width_formula: String,
    /// Width formula after this vertex; empty means "use global default".
    pub after_width_formula: String,
    /// Resolved numeric width before this vertex; negative = global default.
    pub before_width: f64,
    /// Resolved numeric width after this vertex; negative = global default.
    pub after_width: f64,
    pub angle: NodeAngle,
    pub passmark: PassmarkData,
}

impl PieceNode {
    pub fn new(id: ObjectId, kind: ToolKind) -> Self {
        Self {
            id,
            kind,
            reverse: false,
            excluded: false,
            turn_point: true,
            check_uniqueness: true,
            before_width_formula: String::new(),
            after_width_formula: String::new(),
            before_width: DEFAULT_WIDTH,
            after_width: DEFAULT_WIDTH,
            angle: NodeAngle::default(),
            passmark: PassmarkData::default(),
        }
    }

    /// Re-evaluates the node's width formulas against a variable snapshot.
    ///
    /// Formula failures are never fatal: the width falls back to the global
    /// default sentinel and a warning is logged. Negative formula results are
    /// clamped to zero.
    pub fn resolve_widths(&mut self, calculator: &Calculator, variables: &VariableTable) {
        self.before_width = Self::resolve_one(calculator, variables, &self.before_width_formula);
        self.after_width = Self::resolve_one(calculator, variables, &self.after_width_formula);
    }

    fn resolve_one(calculator: &Calculator, variables: &VariableTable, formula: &str) -> f64 {
        if formula.is_empty() {
            return DEFAULT_WIDTH;
        }
        match calculator.evaluate(formula, variables) {
            Ok(value) => value.max(0.0),
            Err(e) => {
                warn!("Width formula failed, using global default: {}", e);
                DEFAULT_WIDTH
            }
        }
    }
}
