//! Nodal variable catalogue
//!
//! The processes only assign to a fixed set of scalar fields (plain scalars
//! and vector components). Variable names arriving from configuration are
//! resolved against this catalogue once, at construction; unknown names are
//! rejected there rather than at step time.

use crate::error::ConfigError;
use std::fmt;

/// A scalar degree of freedom a process may fix or assign on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodalVariable {
    WaterPressure,
    HydraulicHead,
    Temperature,
    DisplacementX,
    DisplacementY,
    DisplacementZ,
    VelocityX,
    VelocityY,
    VelocityZ,
}

impl NodalVariable {
    /// Resolve a configuration-file variable name
    ///
    /// # Arguments
    /// * `name` - Variable identifier as written in the process block
    ///
    /// # Returns
    /// The matching variable, or `ConfigError::UnknownVariable`
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "WATER_PRESSURE" => Ok(NodalVariable::WaterPressure),
            "HYDRAULIC_HEAD" => Ok(NodalVariable::HydraulicHead),
            "TEMPERATURE" => Ok(NodalVariable::Temperature),
            "DISPLACEMENT_X" => Ok(NodalVariable::DisplacementX),
            "DISPLACEMENT_Y" => Ok(NodalVariable::DisplacementY),
            "DISPLACEMENT_Z" => Ok(NodalVariable::DisplacementZ),
            "VELOCITY_X" => Ok(NodalVariable::VelocityX),
            "VELOCITY_Y" => Ok(NodalVariable::VelocityY),
            "VELOCITY_Z" => Ok(NodalVariable::VelocityZ),
            _ => Err(ConfigError::UnknownVariable {
                name: name.to_string(),
            }),
        }
    }

    /// Configuration-file name of this variable
    pub fn name(&self) -> &'static str {
        match self {
            NodalVariable::WaterPressure => "WATER_PRESSURE",
            NodalVariable::HydraulicHead => "HYDRAULIC_HEAD",
            NodalVariable::Temperature => "TEMPERATURE",
            NodalVariable::DisplacementX => "DISPLACEMENT_X",
            NodalVariable::DisplacementY => "DISPLACEMENT_Y",
            NodalVariable::DisplacementZ => "DISPLACEMENT_Z",
            NodalVariable::VelocityX => "VELOCITY_X",
            NodalVariable::VelocityY => "VELOCITY_Y",
            NodalVariable::VelocityZ => "VELOCITY_Z",
        }
    }

    /// All recognized variables (for validation messages and listings)
    pub fn all() -> &'static [NodalVariable] {
        &[
            NodalVariable::WaterPressure,
            NodalVariable::HydraulicHead,
            NodalVariable::Temperature,
            NodalVariable::DisplacementX,
            NodalVariable::DisplacementY,
            NodalVariable::DisplacementZ,
            NodalVariable::VelocityX,
            NodalVariable::VelocityY,
            NodalVariable::VelocityZ,
        ]
    }
}

impl fmt::Display for NodalVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
