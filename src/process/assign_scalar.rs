//! Scalar assignment over the nodes of a model part
//!
//! While its activation interval holds the current time, this process fixes
//! the target degree of freedom on every node (if requested) and assigns the
//! resolved value: constants and table lookups uniformly, time-only
//! expressions evaluated once at the origin and broadcast, space-varying
//! expressions evaluated per node at its coordinates. Fixity applied during
//! an activation span is released exactly once, at the first step after the
//! interval has been left.

use crate::error::{ConfigError, EvaluationError};
use crate::interval::ActivationInterval;
use crate::model::ModelPart;
use crate::process::{Process, ProcessConfig};
use crate::value::ResolvedValue;
use crate::variables::NodalVariable;
use std::path::Path;

/// Nodal scalar boundary-condition process.
#[derive(Debug, Clone)]
pub struct AssignScalarProcess {
    model_part_name: String,
    variable: NodalVariable,
    interval: ActivationInterval,
    constrained: bool,
    value: ResolvedValue,
    step_is_active: bool,
    fixity_applied: bool,
}

impl AssignScalarProcess {
    /// Build the process from its configuration block
    ///
    /// Variable names, expressions and table files are all validated here;
    /// table filenames resolve relative to `base_dir`.
    pub fn from_config(config: &ProcessConfig, base_dir: &Path) -> Result<Self, ConfigError> {
        let variable = NodalVariable::from_name(&config.variable_name)?;
        let value = ResolvedValue::compile(&config.value, base_dir)?;
        Ok(Self {
            model_part_name: config.model_part_name.clone(),
            variable,
            interval: config.interval,
            constrained: config.constrained.unwrap_or(true),
            value,
            step_is_active: false,
            fixity_applied: false,
        })
    }

    /// Name of the model part this process targets
    pub fn model_part_name(&self) -> &str {
        &self.model_part_name
    }

    /// Variable this process assigns
    pub fn variable(&self) -> NodalVariable {
        self.variable
    }

    /// Whether the process was active during the last initialized step
    pub fn is_active(&self) -> bool {
        self.step_is_active
    }
}

impl Process for AssignScalarProcess {
    fn initialize_solution_step(
        &mut self,
        model_part: &mut ModelPart,
        time: f64,
    ) -> Result<(), EvaluationError> {
        self.step_is_active = self.interval.contains(time);
        if !self.step_is_active {
            return Ok(());
        }

        if self.constrained {
            model_part.apply_fixity(self.variable, true);
            self.fixity_applied = true;
        }

        if self.value.depends_on_space() {
            for node in model_part.nodes_mut() {
                let p = node.coords;
                let value = self.value.at(p.x, p.y, p.z, time)?;
                node.set_value(self.variable, value);
            }
        } else {
            let value = self.value.at(0.0, 0.0, 0.0, time)?;
            model_part.set_nodal_value(self.variable, value);
        }
        Ok(())
    }

    fn finalize_solution_step(&mut self, model_part: &mut ModelPart) {
        if !self.step_is_active && self.fixity_applied {
            model_part.apply_fixity(self.variable, false);
            self.fixity_applied = false;
        }
    }
}
