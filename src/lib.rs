//! Orchestration layer around an external geomechanics FEM engine
//!
//! Two facilities, both glue rather than numerics:
//!
//! - a critical-head search driver that reruns a piping simulation over a
//!   list of candidate river heads, warm-starting each run from the previous
//!   one, and reports the last head with an inactive erosion pipe;
//! - scalar boundary-condition processes that turn a declarative JSON block
//!   into per-step fixity and value assignments on a model part's nodes or
//!   constraints (constants, `x,y,z,t` expressions, CSV lookup tables).
//!
//! Element formulations, the nonlinear solver and the constitutive laws all
//! live behind the [`search::PipingRun`] seam and are out of scope here.

pub mod error;
pub mod function;
pub mod interval;
pub mod model;
pub mod params;
pub mod process;
pub mod search;
pub mod table;
pub mod value;
pub mod variables;

pub use error::{ConfigError, DriverError, EvaluationError, SolverError};
pub use function::SpatialFunction;
pub use interval::ActivationInterval;
pub use model::{Constraint, ModelPart, Node};
pub use process::{AssignScalarProcess, AssignScalarToConstraintsProcess, Process, ProcessConfig};
pub use search::{
    critical_head_loop, critical_head_search, head_candidates, CriticalHead, PipingRun, RunReport,
};
pub use table::{LookupTable, TableDescriptor};
pub use value::{ResolvedValue, ValueSpec};
pub use variables::NodalVariable;
