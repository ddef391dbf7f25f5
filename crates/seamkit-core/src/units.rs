//! Linear unit handling
//!
//! Pattern documents declare one active linear unit; all stored lengths and
//! formula results are interpreted in it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Linear unit of a pattern document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinearUnit {
    /// Millimeters
    Mm,
    /// Centimeters
    Cm,
    /// Inches
    Inch,
}

impl Default for LinearUnit {
    fn default() -> Self {
        Self::Cm
    }
}

impl LinearUnit {
    /// Converts a value in this unit to millimeters.
    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            Self::Mm => value,
            Self::Cm => value * 10.0,
            Self::Inch => value * 25.4,
        }
    }

    /// Converts a value in millimeters to this unit.
    pub fn from_mm(self, value_mm: f64) -> f64 {
        match self {
            Self::Mm => value_mm,
            Self::Cm => value_mm / 10.0,
            Self::Inch => value_mm / 25.4,
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mm => write!(f, "mm"),
            Self::Cm => write!(f, "cm"),
            Self::Inch => write!(f, "in"),
        }
    }
}

impl FromStr for LinearUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(Self::Mm),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Cm),
            "in" | "inch" | "inches" => Ok(Self::Inch),
            _ => Err(format!("Unknown linear unit: {}", s)),
        }
    }
}
