//! Value specifications
//!
//! The "value" slot of a process block holds one of three things, told apart
//! by the literal type of the JSON it carries: a number (constant), a string
//! (expression in `x`, `y`, `z`, `t`) or an object (CSV table descriptor).
//! The discriminant is checked once at parse time.

use crate::error::{ConfigError, EvaluationError};
use crate::function::SpatialFunction;
use crate::table::{LookupTable, TableDescriptor};
use serde::de::{self, Deserialize, Deserializer};
use std::path::Path;

/// Parsed form of the "value" slot, before any file IO or compilation.
#[derive(Debug, Clone)]
pub enum ValueSpec {
    Constant(f64),
    Function(String),
    Table(TableDescriptor),
}

impl<'de> Deserialize<'de> for ValueSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        match raw {
            serde_json::Value::Number(n) => {
                let value = n
                    .as_f64()
                    .ok_or_else(|| de::Error::custom("value is not representable as f64"))?;
                Ok(ValueSpec::Constant(value))
            }
            serde_json::Value::String(s) => Ok(ValueSpec::Function(s)),
            serde_json::Value::Object(_) => serde_json::from_value(raw)
                .map(ValueSpec::Table)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "value must be a number, an expression string or a table descriptor, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// A value specification after compilation: expressions parsed, tables read.
#[derive(Debug, Clone)]
pub enum ResolvedValue {
    Constant(f64),
    Function(SpatialFunction),
    Table(LookupTable),
}

impl ResolvedValue {
    /// Compile a spec, reading table files relative to `base_dir`
    pub fn compile(spec: &ValueSpec, base_dir: &Path) -> Result<Self, ConfigError> {
        match spec {
            ValueSpec::Constant(v) => Ok(ResolvedValue::Constant(*v)),
            ValueSpec::Function(source) => {
                SpatialFunction::parse(source).map(ResolvedValue::Function)
            }
            ValueSpec::Table(descriptor) => {
                LookupTable::read(descriptor, base_dir).map(ResolvedValue::Table)
            }
        }
    }

    /// Whether per-entity evaluation is needed (space-varying expressions)
    pub fn depends_on_space(&self) -> bool {
        match self {
            ResolvedValue::Function(f) => f.depends_on_space(),
            _ => false,
        }
    }

    /// Value at a point and time
    pub fn at(&self, x: f64, y: f64, z: f64, t: f64) -> Result<f64, EvaluationError> {
        match self {
            ResolvedValue::Constant(v) => Ok(*v),
            ResolvedValue::Function(f) => f.eval(x, y, z, t),
            ResolvedValue::Table(table) => Ok(table.value_at(t)),
        }
    }
}
