//! Boundary-condition processes
//!
//! A process translates one declarative configuration block into per-step
//! operations on a model part: fixing degrees of freedom, assigning resolved
//! values, releasing fixity when its activation interval is left. Processes
//! are owned by the caller's time-stepping loop and driven through the
//! [`Process`] lifecycle.

pub mod assign_scalar;
pub mod assign_scalar_to_constraints;

pub use assign_scalar::AssignScalarProcess;
pub use assign_scalar_to_constraints::AssignScalarToConstraintsProcess;

use crate::error::EvaluationError;
use crate::interval::ActivationInterval;
use crate::model::ModelPart;
use crate::value::ValueSpec;
use serde::Deserialize;

fn default_local_axes() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// One entry of a process list, as found in the project parameters.
///
/// `constrained` stays `None` when the key is absent so that the constraints
/// variant, which has no degrees of freedom to hold, can reject the key when
/// it is written at all; the nodal process treats an absent key as `true`.
/// `local_axes` is accepted for compatibility with existing configuration
/// files but carries no behavior here.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessConfig {
    pub model_part_name: String,
    pub variable_name: String,
    #[serde(default)]
    pub interval: ActivationInterval,
    #[serde(default)]
    pub constrained: Option<bool>,
    pub value: ValueSpec,
    #[serde(default = "default_local_axes")]
    pub local_axes: serde_json::Value,
}

/// Per-step lifecycle of a boundary-condition process.
///
/// The stepping loop calls `initialize_solution_step` before solving a step
/// and `finalize_solution_step` after it, passing the model part the process
/// targets and the current simulation time.
pub trait Process {
    /// Called once before the solution loop starts
    fn before_solution_loop(
        &mut self,
        model_part: &mut ModelPart,
        time: f64,
    ) -> Result<(), EvaluationError> {
        self.initialize_solution_step(model_part, time)
    }

    /// Called at the start of every solution step
    fn initialize_solution_step(
        &mut self,
        model_part: &mut ModelPart,
        time: f64,
    ) -> Result<(), EvaluationError>;

    /// Called at the end of every solution step
    fn finalize_solution_step(&mut self, model_part: &mut ModelPart);
}
