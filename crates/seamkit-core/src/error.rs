//! Error handling for the pattern engine
//!
//! Two error families cover the engine:
//! - [`GeometryError`] for inconsistent-document conditions (missing objects,
//!   empty curves, missing cutting-contour intersections)
//! - [`FormulaError`] for expression parsing and evaluation
//!
//! All error types use `thiserror`. Whether a geometry error aborts an
//! operation or degrades to a logged warning is decided by the caller's
//! [`ValidationMode`], never by the error type itself. Formula errors are
//! always soft: the engine substitutes the global default and warns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::ObjectId;

/// Errors raised while evaluating a width, angle or visibility formula.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// The expression could not be parsed.
    #[error("Failed to parse formula '{formula}': {message}")]
    Parse { formula: String, message: String },

    /// The expression parsed but could not be evaluated.
    #[error("Failed to evaluate formula '{formula}': {message}")]
    Eval { formula: String, message: String },

    /// The expression evaluated to an infinite or NaN value.
    #[error("Formula '{formula}' evaluated to a non-finite value {value}")]
    NonFinite { formula: String, value: f64 },
}

/// Errors raised by the piece-path geometry engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A referenced point or curve id cannot be resolved.
    #[error("Missing geometry object {id}")]
    MissingGeometry {
        /// Id of the unresolved object.
        id: ObjectId,
    },

    /// A curve's point list is empty where points are required.
    #[error("Curve {id} has an empty point list")]
    EmptySegment {
        /// Id of the empty curve.
        id: ObjectId,
    },

    /// An internal path could not be extended to the cutting contour.
    #[error("No intersection with the cutting contour for path '{path}'")]
    NoIntersection {
        /// Name of the offending path.
        path: String,
    },

    /// A formula failed to parse or evaluate.
    #[error(transparent)]
    Formula(#[from] FormulaError),
}

/// Result type alias for engine operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Policy selecting abort-vs-log-and-default behavior for document
/// inconsistencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Export/validation: missing geometry and missing intersections abort.
    Pedantic,
    /// Interactive editing: warn and continue with best-effort geometry.
    #[default]
    Permissive,
}

impl ValidationMode {
    pub fn is_pedantic(self) -> bool {
        matches!(self, Self::Pedantic)
    }
}
