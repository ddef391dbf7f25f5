//! # Seamkit Piece
//!
//! Piece-path geometry engine: converts the ordered node list of a garment
//! pattern piece into concrete 2-D polylines - the seam line, the
//! width-annotated seam-allowance sequence, the equidistant cutting contour
//! and passmark geometry.
//!
//! The engine is a pure function of its inputs: identical (nodes, curve
//! data, width parameters) always yield identical outputs. It takes
//! read-only borrows of the path and the [`container::GeometrySource`],
//! recomputes from scratch on every call and caches nothing.

pub mod allowance;
pub mod assembler;
pub mod container;
pub mod extender;
pub mod node;
pub mod passmark;
pub mod path;
pub mod resolver;
pub mod visibility;

pub use allowance::{equidistant, SeamAllowanceBuilder};
pub use assembler::PathAssembler;
pub use container::{ArenaObject, GeometrySource, ObjectArena};
pub use extender::InternalPathExtender;
pub use node::{
    NodeAngle, PassmarkAngleType, PassmarkData, PassmarkLineType, PieceNode, ToolKind,
    DEFAULT_WIDTH,
};
pub use passmark::{build_passmark, PassmarkLines};
pub use path::{AllowancePoint, ContourPoint, EngineContext, PenStyle, PiecePath, PiecePathKind};
pub use resolver::NodeResolver;
pub use visibility::VisibilityEvaluator;
