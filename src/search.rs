//! Critical-head search
//!
//! Finds the threshold river head at which a backward-erosion pipe becomes
//! hydraulically active. Candidate heads are scanned in increasing order,
//! running the full simulation once per candidate; each run is warm-started
//! from the previous run's model state, which the engine hands back and the
//! search threads forward explicitly. The result is the last head for which
//! the pipe stayed inactive, paired with the pipe length recorded there.

use crate::error::{DriverError, SolverError};
use crate::params;
use std::path::Path;

/// Default spacing between candidate heads (m).
pub const DEFAULT_HEAD_STEP: f64 = 0.1;

/// Outcome of one engine run at a given head.
pub struct RunReport<M> {
    /// Whether every pipe element reported an open erosion channel
    pub pipe_active: bool,
    /// Aggregate erosion-pipe length (m)
    pub pipe_length: f64,
    /// Model state at the end of the run, to warm-start the next one
    pub model: M,
}

/// The narrow seam to the external simulation engine.
///
/// Implementations are expected to persist `head` into their working
/// directory's project parameters (see [`params::set_reference_head`]) before
/// running, and to continue from `warm` when one is given.
pub trait PipingRun {
    /// Engine-side model state carried between runs
    type Model;

    fn run(
        &mut self,
        head: f64,
        warm: Option<Self::Model>,
    ) -> Result<RunReport<Self::Model>, SolverError>;
}

/// Search result: the last head with an inactive pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalHead {
    pub head: f64,
    pub pipe_length: f64,
}

/// Candidate heads from `target - 1.0` up to (excluding) `target + 2.0`.
///
/// The sequence is strictly increasing; `step` must be positive and defaults
/// to [`DEFAULT_HEAD_STEP`] in the driver.
pub fn head_candidates(target: f64, step: f64) -> Vec<f64> {
    assert!(step > 0.0, "head step must be positive, got {}", step);
    let stop = target + 2.0;
    let mut candidates = Vec::new();
    let mut head = target - 1.0;
    while head < stop {
        candidates.push(head);
        head += step;
    }
    candidates
}

/// Linear scan for the critical head.
///
/// Runs the engine at each candidate in order, threading the evolving model
/// forward. Stops at the first candidate with an active pipe and returns the
/// preceding candidate with its recorded pipe length; `None` if the pipe
/// never activates. Engine failures propagate immediately, with no retry and
/// no partial result.
pub fn critical_head_search<E: PipingRun>(
    engine: &mut E,
    candidates: &[f64],
) -> Result<Option<CriticalHead>, SolverError> {
    let mut warm = None;
    let mut lengths = Vec::with_capacity(candidates.len());
    for (i, &head) in candidates.iter().enumerate() {
        let report = engine.run(head, warm.take())?;
        lengths.push(report.pipe_length);
        if report.pipe_active {
            // When the very first candidate is already active there is no
            // preceding candidate; the index wraps to the end of each list.
            // Callers should not rely on the result in that case.
            let head_index = if i == 0 { candidates.len() - 1 } else { i - 1 };
            let length_index = if i == 0 { lengths.len() - 1 } else { i - 1 };
            return Ok(Some(CriticalHead {
                head: candidates[head_index],
                pipe_length: lengths[length_index],
            }));
        }
        warm = Some(report.model);
    }
    Ok(None)
}

/// Full critical-head run for one piping model.
///
/// Overwrites the pipe material parameters (`kappa`, `d70`) in the working
/// directory, enumerates candidates around `target_head` and runs the linear
/// search.
pub fn critical_head_loop<E: PipingRun>(
    engine: &mut E,
    work_dir: &Path,
    kappa: f64,
    d70: f64,
    target_head: f64,
) -> Result<Option<CriticalHead>, DriverError> {
    params::update_pipe_material(
        work_dir.join(params::MATERIAL_PARAMETERS_FILE),
        kappa,
        d70,
    )?;

    let candidates = head_candidates(target_head, DEFAULT_HEAD_STEP);
    println!(
        "Critical head search: {} candidates in [{:.2}, {:.2}]",
        candidates.len(),
        candidates.first().copied().unwrap_or(f64::NAN),
        candidates.last().copied().unwrap_or(f64::NAN)
    );

    let result = critical_head_search(engine, &candidates)?;
    match &result {
        Some(critical) => println!(
            "Critical head: {:.2} m (pipe length {:.2} m)",
            critical.head, critical.pipe_length
        ),
        None => println!("Critical head: not reached within the candidate range"),
    }
    Ok(result)
}
