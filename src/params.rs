//! Solver parameter-file editing
//!
//! The engine reads its material and project parameters from JSON files. The
//! critical-head driver rewrites a handful of numeric leaves in place before
//! each run: pipe permeability and grain size in the materials file, and the
//! river head on the polder-side constraint in the project parameters. The
//! surrounding schema is preserved untouched.

use crate::error::ConfigError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Conventional file names inside an engine working directory.
pub const MATERIAL_PARAMETERS_FILE: &str = "MaterialParameters.json";
pub const PROJECT_PARAMETERS_FILE: &str = "ProjectParameters.json";

fn read_json(path: &Path) -> Result<Value, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| ConfigError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_json(path: &Path, root: &Value) -> Result<(), ConfigError> {
    let contents = serde_json::to_string_pretty(root).map_err(|e| ConfigError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn variables_of<'a>(
    root: &'a mut Value,
    property_index: usize,
    path: &Path,
) -> Result<&'a mut serde_json::Map<String, Value>, ConfigError> {
    let pointer = format!("/properties/{}/Material/Variables", property_index);
    root.pointer_mut(&pointer)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| ConfigError::MissingEntry {
            pointer,
            path: path.to_path_buf(),
        })
}

/// Overwrite the pipe material parameters in a materials file.
///
/// Sets `PERMEABILITY_XX` and `PERMEABILITY_YY` on the first property block
/// and `PIPE_D_70` on the third, matching the layout of the piping models.
pub fn update_pipe_material<P: AsRef<Path>>(path: P, kappa: f64, d70: f64) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let mut root = read_json(path)?;

    let soil = variables_of(&mut root, 0, path)?;
    soil.insert("PERMEABILITY_XX".to_string(), Value::from(kappa));
    soil.insert("PERMEABILITY_YY".to_string(), Value::from(kappa));

    let pipe = variables_of(&mut root, 2, path)?;
    pipe.insert("PIPE_D_70".to_string(), Value::from(d70));

    write_json(path, &root)
}

/// Overwrite the polder-side river head in a project-parameters file.
///
/// The constraint list carries one entry per river side; the polder side is
/// the one whose `model_part_name` contains `"Left"`. If the first entry is
/// that side, its `reference_coordinate` is set, otherwise the second's.
pub fn set_reference_head<P: AsRef<Path>>(path: P, head: f64) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let mut root = read_json(path)?;

    let first_is_left = root
        .pointer("/processes/constraints_process_list/0/Parameters/model_part_name")
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::MissingEntry {
            pointer: "/processes/constraints_process_list/0/Parameters/model_part_name".to_string(),
            path: path.to_path_buf(),
        })?
        .contains("Left");

    let index = if first_is_left { 0 } else { 1 };
    let pointer = format!("/processes/constraints_process_list/{}/Parameters", index);
    let parameters = root
        .pointer_mut(&pointer)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| ConfigError::MissingEntry {
            pointer,
            path: path.to_path_buf(),
        })?;
    parameters.insert("reference_coordinate".to_string(), Value::from(head));

    write_json(path, &root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("geo_piping_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    const MATERIALS: &str = r#"{
        "properties": [
            {"Material": {"Variables": {"PERMEABILITY_XX": 1e-10, "PERMEABILITY_YY": 1e-10}}},
            {"Material": {"Variables": {"DENSITY_WATER": 1000.0}}},
            {"Material": {"Variables": {"PIPE_D_70": 1e-4, "PIPE_ETA": 0.25}}}
        ]
    }"#;

    #[test]
    fn pipe_material_leaves_are_overwritten_in_place() {
        let path = scratch_file("materials.json", MATERIALS);
        update_pipe_material(&path, 1.157e-12, 3.0e-4).unwrap();

        let root: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            root.pointer("/properties/0/Material/Variables/PERMEABILITY_XX")
                .unwrap()
                .as_f64()
                .unwrap(),
            1.157e-12
        );
        assert_eq!(
            root.pointer("/properties/0/Material/Variables/PERMEABILITY_YY")
                .unwrap()
                .as_f64()
                .unwrap(),
            1.157e-12
        );
        assert_eq!(
            root.pointer("/properties/2/Material/Variables/PIPE_D_70")
                .unwrap()
                .as_f64()
                .unwrap(),
            3.0e-4
        );
        // untouched neighbors survive
        assert_eq!(
            root.pointer("/properties/2/Material/Variables/PIPE_ETA")
                .unwrap()
                .as_f64()
                .unwrap(),
            0.25
        );
        fs::remove_file(path).unwrap();
    }

    fn project_parameters(first_name: &str, second_name: &str) -> String {
        format!(
            r#"{{
                "processes": {{
                    "constraints_process_list": [
                        {{"Parameters": {{"model_part_name": "{}", "reference_coordinate": 0.0}}}},
                        {{"Parameters": {{"model_part_name": "{}", "reference_coordinate": 0.0}}}}
                    ]
                }}
            }}"#,
            first_name, second_name
        )
    }

    #[test]
    fn head_goes_to_first_entry_when_it_is_the_left_side() {
        let path = scratch_file(
            "project_left_first.json",
            &project_parameters("PorousDomain.Left_head", "PorousDomain.Right_head"),
        );
        set_reference_head(&path, 10.4).unwrap();

        let root: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            root.pointer("/processes/constraints_process_list/0/Parameters/reference_coordinate")
                .unwrap()
                .as_f64()
                .unwrap(),
            10.4
        );
        assert_eq!(
            root.pointer("/processes/constraints_process_list/1/Parameters/reference_coordinate")
                .unwrap()
                .as_f64()
                .unwrap(),
            0.0
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn head_goes_to_second_entry_otherwise() {
        let path = scratch_file(
            "project_left_second.json",
            &project_parameters("PorousDomain.Right_head", "PorousDomain.Left_head"),
        );
        set_reference_head(&path, 11.3).unwrap();

        let root: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            root.pointer("/processes/constraints_process_list/1/Parameters/reference_coordinate")
                .unwrap()
                .as_f64()
                .unwrap(),
            11.3
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_entries_are_configuration_errors() {
        let path = scratch_file("materials_short.json", r#"{"properties": []}"#);
        assert!(matches!(
            update_pipe_material(&path, 1.0, 1.0),
            Err(ConfigError::MissingEntry { .. })
        ));
        fs::remove_file(path).unwrap();
    }
}
