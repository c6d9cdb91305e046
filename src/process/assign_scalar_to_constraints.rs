//! Scalar assignment over the constraints of a model part
//!
//! Variant of the nodal process for multipoint constraints. Constraints have
//! no degrees of freedom to hold, so fixation is forbidden by definition, and
//! only numeric constants are accepted in the "value" slot.

use crate::error::{ConfigError, EvaluationError};
use crate::interval::ActivationInterval;
use crate::model::ModelPart;
use crate::process::{Process, ProcessConfig};
use crate::value::ValueSpec;
use crate::variables::NodalVariable;

/// Constraint scalar boundary-condition process.
#[derive(Debug, Clone)]
pub struct AssignScalarToConstraintsProcess {
    model_part_name: String,
    variable: NodalVariable,
    interval: ActivationInterval,
    value: f64,
    step_is_active: bool,
}

impl AssignScalarToConstraintsProcess {
    /// Build the process from its configuration block
    ///
    /// Expression and table values are rejected: constraints only take
    /// numeric constants. The `constrained` key is likewise rejected when
    /// written at all, since constraints have nothing to fix.
    pub fn from_config(config: &ProcessConfig) -> Result<Self, ConfigError> {
        let variable = NodalVariable::from_name(&config.variable_name)?;
        if config.constrained.is_some() {
            return Err(ConfigError::InvalidValue {
                reason: "the constrained flag is not allowed for constraints".to_string(),
            });
        }
        let value = match config.value {
            ValueSpec::Constant(v) => v,
            ValueSpec::Function(_) | ValueSpec::Table(_) => {
                return Err(ConfigError::InvalidValue {
                    reason: "the value can only be a number for constraints".to_string(),
                })
            }
        };
        Ok(Self {
            model_part_name: config.model_part_name.clone(),
            variable,
            interval: config.interval,
            value,
            step_is_active: false,
        })
    }

    /// Name of the model part this process targets
    pub fn model_part_name(&self) -> &str {
        &self.model_part_name
    }

    /// Whether the process was active during the last initialized step
    pub fn is_active(&self) -> bool {
        self.step_is_active
    }
}

impl Process for AssignScalarToConstraintsProcess {
    fn initialize_solution_step(
        &mut self,
        model_part: &mut ModelPart,
        time: f64,
    ) -> Result<(), EvaluationError> {
        self.step_is_active = self.interval.contains(time);
        if !self.step_is_active {
            return Ok(());
        }
        for constraint in model_part.constraints_mut() {
            constraint.set_value(self.variable, self.value);
        }
        Ok(())
    }

    fn finalize_solution_step(&mut self, _model_part: &mut ModelPart) {
        self.step_is_active = false;
    }
}
