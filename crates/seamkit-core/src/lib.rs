//! # Seamkit Core
//!
//! Foundation types for the seamkit pattern engine: 2-D geometry helpers,
//! linear units, the formula calculator and the shared error types.

pub mod calculator;
pub mod error;
pub mod geometry;
pub mod units;

pub use calculator::{Calculator, VariableTable};
pub use error::{FormulaError, GeometryError, GeometryResult, ValidationMode};
pub use geometry::{
    distance_to_segment, fuzzy_is_zero, point_on_contour, ray_contour_intersection,
    ray_segment_intersection, segment_intersection, ObjectId, Point, POINT_TOLERANCE,
};
pub use units::LinearUnit;
