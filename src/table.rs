//! CSV-backed lookup tables
//!
//! Time-indexed boundary values can be supplied as a two-column CSV file
//! described by a small descriptor object (`name`, `filename`, `delimiter`,
//! `skiprows`). The table is read once at process construction and queried
//! with piecewise-linear interpolation at each step.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_delimiter() -> String {
    ",".to_string()
}

/// Descriptor for a CSV table, as written in the "value" slot of a process
/// configuration block.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDescriptor {
    pub name: String,
    pub filename: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub skiprows: usize,
}

/// Ordered (time, value) samples with linear interpolation between them.
#[derive(Debug, Clone)]
pub struct LookupTable {
    samples: Vec<(f64, f64)>,
}

impl LookupTable {
    /// Build a table from explicit samples
    ///
    /// Times must be strictly increasing and at least one sample is required.
    pub fn from_samples(samples: Vec<(f64, f64)>) -> Result<Self, ConfigError> {
        if samples.is_empty() {
            return Err(ConfigError::Table {
                name: String::new(),
                reason: "table has no samples".to_string(),
            });
        }
        for pair in samples.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(ConfigError::Table {
                    name: String::new(),
                    reason: format!(
                        "sample times must be strictly increasing ({} then {})",
                        pair[0].0, pair[1].0
                    ),
                });
            }
        }
        Ok(Self { samples })
    }

    /// Read a table per its descriptor
    ///
    /// Relative filenames are resolved against `base_dir`.
    pub fn read(descriptor: &TableDescriptor, base_dir: &Path) -> Result<Self, ConfigError> {
        let path = {
            let p = Path::new(&descriptor.filename);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base_dir.join(p)
            }
        };
        let contents = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&contents, descriptor).map_err(|reason| ConfigError::Table {
            name: descriptor.name.clone(),
            reason,
        })
    }

    fn parse(contents: &str, descriptor: &TableDescriptor) -> Result<Self, String> {
        let mut samples = Vec::new();
        for (line_no, line) in contents.lines().enumerate().skip(descriptor.skiprows) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(descriptor.delimiter.as_str()).collect();
            if fields.len() < 2 {
                return Err(format!("line {}: expected 2 columns", line_no + 1));
            }
            let time: f64 = fields[0]
                .trim()
                .parse()
                .map_err(|_| format!("line {}: bad time {:?}", line_no + 1, fields[0]))?;
            let value: f64 = fields[1]
                .trim()
                .parse()
                .map_err(|_| format!("line {}: bad value {:?}", line_no + 1, fields[1]))?;
            samples.push((time, value));
        }
        Self::from_samples(samples).map_err(|e| match e {
            ConfigError::Table { reason, .. } => reason,
            other => other.to_string(),
        })
    }

    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Value at `time`, linearly interpolated between the enclosing samples
    /// and clamped to the first/last sample outside the sampled range.
    pub fn value_at(&self, time: f64) -> f64 {
        let first = self.samples[0];
        let last = self.samples[self.samples.len() - 1];
        if time <= first.0 {
            return first.1;
        }
        if time >= last.0 {
            return last.1;
        }
        // samples are strictly increasing, so an enclosing pair exists
        for pair in self.samples.windows(2) {
            let (t0, v0) = pair[0];
            let (t1, v1) = pair[1];
            if time <= t1 {
                let w = (time - t0) / (t1 - t0);
                return v0 + w * (v1 - v0);
            }
        }
        last.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn descriptor(delimiter: &str, skiprows: usize) -> TableDescriptor {
        TableDescriptor {
            name: "csv_table".to_string(),
            filename: "unused.csv".to_string(),
            delimiter: delimiter.to_string(),
            skiprows,
        }
    }

    #[test]
    fn parses_with_header_skip_and_custom_delimiter() {
        let contents = "time;value\n0.0;1.0\n2.0;3.0\n4.0;5.0\n";
        let table = LookupTable::parse(contents, &descriptor(";", 1)).unwrap();
        assert_eq!(table.num_samples(), 3);
        assert_relative_eq!(table.value_at(2.0), 3.0);
    }

    #[test]
    fn interpolates_between_samples() {
        let table = LookupTable::from_samples(vec![(0.0, 0.0), (2.0, 4.0), (3.0, 10.0)]).unwrap();
        assert_relative_eq!(table.value_at(1.0), 2.0);
        assert_relative_eq!(table.value_at(2.5), 7.0);
    }

    #[test]
    fn clamps_outside_the_sampled_range() {
        let table = LookupTable::from_samples(vec![(1.0, 2.0), (3.0, 6.0)]).unwrap();
        assert_relative_eq!(table.value_at(0.0), 2.0);
        assert_relative_eq!(table.value_at(10.0), 6.0);
    }

    #[test]
    fn rejects_empty_and_unordered_tables() {
        assert!(LookupTable::from_samples(vec![]).is_err());
        assert!(LookupTable::from_samples(vec![(1.0, 0.0), (1.0, 1.0)]).is_err());
        assert!(LookupTable::from_samples(vec![(2.0, 0.0), (1.0, 1.0)]).is_err());
    }

    #[test]
    fn rejects_malformed_rows() {
        assert!(LookupTable::parse("0.0,1.0\nnot_a_number,2.0\n", &descriptor(",", 0)).is_err());
        assert!(LookupTable::parse("0.0\n", &descriptor(",", 0)).is_err());
    }
}
