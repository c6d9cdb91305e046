//! Parametrized scalar expressions
//!
//! Boundary values given as strings like `"(x*sin(y))*exp(-t^2)"` are
//! compiled once at construction and evaluated per step with the variables
//! `x`, `y`, `z` (node coordinates) and `t` (simulation time). An expression
//! that references no spatial variable is evaluated once per step at the
//! origin and broadcast to all target entities by the caller.

use crate::error::{ConfigError, EvaluationError};
use meval::{Context, Expr};

/// A compiled expression in `x`, `y`, `z`, `t`.
#[derive(Debug, Clone)]
pub struct SpatialFunction {
    source: String,
    expr: Expr,
    spatial: bool,
}

impl SpatialFunction {
    /// Compile an expression string
    ///
    /// Malformed expressions are rejected here, not at step time.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let expr: Expr = source.parse().map_err(|e| ConfigError::Expression {
            source_text: source.to_string(),
            source: e,
        })?;
        let spatial = references_spatial_variable(source);
        Ok(Self {
            source: source.to_string(),
            expr,
            spatial,
        })
    }

    /// Whether the expression references `x`, `y` or `z`
    pub fn depends_on_space(&self) -> bool {
        self.spatial
    }

    /// The expression as configured
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate at a point and time
    pub fn eval(&self, x: f64, y: f64, z: f64, t: f64) -> Result<f64, EvaluationError> {
        let mut ctx = Context::new();
        ctx.var("x", x).var("y", y).var("z", z).var("t", t);
        self.expr
            .eval_with_context(&ctx)
            .map_err(|e| EvaluationError::Expression {
                source_text: self.source.clone(),
                source: e,
            })
    }
}

/// Scan for the identifiers `x`, `y`, `z` standing alone.
///
/// Works on whole identifiers, so function names such as `exp` do not count
/// as a use of `x`.
fn references_spatial_variable(source: &str) -> bool {
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_alphabetic() || c == '_' {
            let mut ident = String::new();
            ident.push(c);
            while let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    ident.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if matches!(ident.as_str(), "x" | "y" | "z") {
                return true;
            }
        }
    }
    false
}
