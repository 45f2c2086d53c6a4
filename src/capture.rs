/// Capture loading and validation
///
/// This module handles:
/// - Reading the run capture JSON emitted by the device engine
/// - Validating the parsed model upfront
///
/// Validation happens here and nowhere else, ensuring the report builders
/// receive a fully validated, immutable run description. Serials and test
/// names are the join keys for all aggregation and sorting, so an absent
/// identifier is rejected as a defect rather than papered over.
use crate::types::RunResult;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a run capture from disk and validate it
pub fn load_capture(path: &Path) -> Result<RunResult, String> {
    debug!("Loading run capture from {}", path.display());

    let file = File::open(path).map_err(|e| format!("Cannot open capture {}: {}", path.display(), e))?;
    let run: RunResult = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Malformed capture {}: {}", path.display(), e))?;

    validate(&run)?;

    debug!("Capture holds {} device(s), {} test record(s)", run.results.len(), run.total_tests());

    Ok(run)
}

/// Check the identifier preconditions the builders rely on
pub fn validate(run: &RunResult) -> Result<(), String> {
    for (serial, device) in &run.results {
        if serial.trim().is_empty() {
            return Err("Capture contains a device with an empty serial".to_string());
        }

        for record in &device.test_records {
            if record.test.class_name.is_empty() {
                return Err(format!("Device {}: test record with an empty class name", serial));
            }
            if record.test.method_name.is_empty() {
                return Err(format!(
                    "Device {}: test in {} has an empty method name",
                    serial, record.test.class_name
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;
