//! Formula evaluation
//!
//! Width, angle and visibility formulas are arithmetic expressions over the
//! document's measurement and increment variables. Evaluation always happens
//! against an explicit, immutable variable-table snapshot passed in by the
//! caller; the calculator holds no global state.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::FormulaError;

/// Snapshot of the document's formula variables at the time of a computation.
pub type VariableTable = HashMap<String, f64>;

/// Stateless expression evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `formula` against `variables`.
    ///
    /// Parse failures, evaluation failures (including unknown variables) and
    /// non-finite results all surface as typed [`FormulaError`]s; the caller
    /// decides whether to abort or substitute a default.
    pub fn evaluate(&self, formula: &str, variables: &VariableTable) -> Result<f64, FormulaError> {
        let parsed = meval::Expr::from_str(formula).map_err(|e| FormulaError::Parse {
            formula: formula.to_string(),
            message: e.to_string(),
        })?;

        let mut ctx = meval::Context::new();
        for (name, value) in variables {
            ctx.var(name.clone(), *value);
        }

        let value = parsed
            .eval_with_context(ctx)
            .map_err(|e| FormulaError::Eval {
                formula: formula.to_string(),
                message: e.to_string(),
            })?;

        if !value.is_finite() {
            return Err(FormulaError::NonFinite {
                formula: formula.to_string(),
                value,
            });
        }

        Ok(value)
    }
}
