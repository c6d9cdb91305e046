//! End-to-end critical-head search against a stub engine.
//!
//! The stub behaves like the real engine seam: it reads nothing but the head
//! it is handed, persists that head into the working directory's project
//! parameters before "running", and carries its model state forward between
//! runs. The driver edits the material file and scans the candidate heads.

use approx::assert_relative_eq;
use geo_piping::error::SolverError;
use geo_piping::params;
use geo_piping::search::{critical_head_loop, PipingRun, RunReport};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const MATERIALS: &str = r#"{
    "properties": [
        {"Material": {"Variables": {"PERMEABILITY_XX": 1e-10, "PERMEABILITY_YY": 1e-10}}},
        {"Material": {"Variables": {"DENSITY_WATER": 1000.0}}},
        {"Material": {"Variables": {"PIPE_D_70": 1e-4}}}
    ]
}"#;

const PROJECT: &str = r#"{
    "processes": {
        "constraints_process_list": [
            {"Parameters": {"model_part_name": "PorousDomain.Left_head", "reference_coordinate": 0.0}},
            {"Parameters": {"model_part_name": "PorousDomain.Right_head", "reference_coordinate": 0.0}}
        ]
    }
}"#;

fn scratch_work_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "geo_piping_it_{}_{}",
        std::process::id(),
        name
    ));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(params::MATERIAL_PARAMETERS_FILE), MATERIALS).unwrap();
    fs::write(dir.join(params::PROJECT_PARAMETERS_FILE), PROJECT).unwrap();
    dir
}

fn read_leaf(path: &Path, pointer: &str) -> f64 {
    let root: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    root.pointer(pointer).unwrap().as_f64().unwrap()
}

/// Pipe activates once the head reaches a threshold; each inactive run grows
/// the recorded pipe a little, carried through the warm-started model.
struct StubEngine {
    work_dir: PathBuf,
    threshold: f64,
    heads_seen: Vec<f64>,
}

#[derive(Clone, Copy)]
struct StubModel {
    pipe_length: f64,
}

impl PipingRun for StubEngine {
    type Model = StubModel;

    fn run(
        &mut self,
        head: f64,
        warm: Option<StubModel>,
    ) -> Result<RunReport<StubModel>, SolverError> {
        params::set_reference_head(self.work_dir.join(params::PROJECT_PARAMETERS_FILE), head)
            .map_err(|e| SolverError(e.to_string()))?;
        self.heads_seen.push(head);

        let previous = warm.map(|m| m.pipe_length).unwrap_or(0.0);
        let model = StubModel {
            pipe_length: previous + 0.25,
        };
        Ok(RunReport {
            pipe_active: head >= self.threshold,
            pipe_length: model.pipe_length,
            model,
        })
    }
}

#[test]
fn search_finds_the_head_below_the_activation_threshold() {
    let work_dir = scratch_work_dir("threshold");
    let mut engine = StubEngine {
        work_dir: work_dir.clone(),
        threshold: 11.35,
        heads_seen: Vec::new(),
    };

    let result = critical_head_loop(&mut engine, &work_dir, 1.157e-12, 3.0e-4, 11.3)
        .unwrap()
        .unwrap();

    // candidates run 10.3, 10.4, ... so the last inactive head is just under
    // the 11.35 threshold
    assert_relative_eq!(result.head, 11.3, epsilon = 1e-9);
    // one warm-started increment per inactive run before the transition
    let runs_before_transition = engine.heads_seen.len() - 1;
    assert_relative_eq!(result.pipe_length, 0.25 * runs_before_transition as f64);

    // the material file was edited before any run
    let materials = work_dir.join(params::MATERIAL_PARAMETERS_FILE);
    assert_relative_eq!(
        read_leaf(&materials, "/properties/0/Material/Variables/PERMEABILITY_XX"),
        1.157e-12
    );
    assert_relative_eq!(
        read_leaf(&materials, "/properties/2/Material/Variables/PIPE_D_70"),
        3.0e-4
    );

    // the last head the engine persisted is the first active candidate
    let project = work_dir.join(params::PROJECT_PARAMETERS_FILE);
    let persisted = read_leaf(
        &project,
        "/processes/constraints_process_list/0/Parameters/reference_coordinate",
    );
    assert_relative_eq!(persisted, *engine.heads_seen.last().unwrap());
    assert!(persisted >= engine.threshold);

    // candidates were visited in strictly increasing order
    assert!(engine.heads_seen.windows(2).all(|w| w[1] > w[0]));

    fs::remove_dir_all(work_dir).unwrap();
}

#[test]
fn search_reports_none_when_the_pipe_never_activates() {
    let work_dir = scratch_work_dir("no_transition");
    let mut engine = StubEngine {
        work_dir: work_dir.clone(),
        threshold: 1.0e6,
        heads_seen: Vec::new(),
    };

    let result = critical_head_loop(&mut engine, &work_dir, 1.157e-12, 3.0e-4, 11.3).unwrap();
    assert!(result.is_none());
    // the whole candidate range was scanned
    assert!(engine.heads_seen.len() >= 29);

    fs::remove_dir_all(work_dir).unwrap();
}
