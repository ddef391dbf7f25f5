//! Formula-driven path visibility.
//!
//! A path may carry a trigger formula deciding whether it is drawn at all.
//! Evaluation fails open: a path is only hidden by a successfully evaluated
//! result of exactly zero.

use tracing::warn;

use seamkit_core::{fuzzy_is_zero, Calculator};

use crate::path::{EngineContext, PiecePath};

/// Evaluates per-path visibility triggers.
pub struct VisibilityEvaluator<'a> {
    ctx: &'a EngineContext,
    calculator: Calculator,
}

impl<'a> VisibilityEvaluator<'a> {
    pub fn new(ctx: &'a EngineContext) -> Self {
        Self {
            ctx,
            calculator: Calculator::new(),
        }
    }

    /// Whether `path` should be drawn.
    ///
    /// An empty trigger means always visible. Parse or evaluation failures
    /// are logged and treated as visible so a broken formula never makes a
    /// path disappear silently.
    pub fn is_visible(&self, path: &PiecePath) -> bool {
        let trigger = path.visibility_trigger.trim();
        if trigger.is_empty() {
            return true;
        }
        match self.calculator.evaluate(trigger, &self.ctx.variables) {
            Ok(value) => !fuzzy_is_zero(value),
            Err(e) => {
                warn!(
                    "Visibility trigger of path '{}' failed, treating as visible: {}",
                    path.name, e
                );
                true
            }
        }
    }
}
