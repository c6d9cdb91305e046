//! Crate-level error types.
//!
//! Configuration problems are reported eagerly, when a process or table is
//! constructed. Evaluation and solver failures surface at the step or run
//! where they occur and abort it; nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid or incomplete configuration, detected at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown variable name: {name}")]
    UnknownVariable { name: String },

    #[error("invalid value specification: {reason}")]
    InvalidValue { reason: String },

    #[error("cannot parse expression {source_text:?}")]
    Expression {
        source_text: String,
        #[source]
        source: meval::Error,
    },

    #[error("table {name:?}: {reason}")]
    Table { name: String, reason: String },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} as JSON")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing entry {pointer:?} in {path}")]
    MissingEntry { pointer: String, path: PathBuf },
}

/// Runtime failure while computing a per-step value.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("expression {source_text:?} failed to evaluate")]
    Expression {
        source_text: String,
        #[source]
        source: meval::Error,
    },
}

/// Failure reported by the external simulation engine during a run.
///
/// The search loop and the stepping loop both abort immediately on this;
/// already-applied fixities are left in their last-set state.
#[derive(Debug, Error)]
#[error("simulation run failed: {0}")]
pub struct SolverError(pub String);

/// Error surface of the top-level critical-head driver, which touches both
/// parameter files and the engine.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}
