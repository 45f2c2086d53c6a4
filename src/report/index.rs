//! The cross-device index model.
//!
//! One Index per run: global totals plus a sorted list of per-device
//! summaries. Building it is a pure function of the capture; nothing is
//! mutated after construction.

use crate::report::format;
use crate::report::types::TestSummary;
use crate::types::{DeviceResult, RunResult};
use serde::Serialize;
use std::cmp::Ordering;

/// Decorative marker in front of the index tests line; rendering concern
/// carried through unchanged
const TESTS_MARKER: &str = "😎";

/// View-model for the run summary page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Index {
    pub title: String,

    /// e.g. "😎 3 large tests run across 2 devices"
    pub subtitle_tests_and_devices: String,

    pub tests_run: usize,
    pub passed: usize,
    pub failed: usize,

    /// e.g. "1m 02s at 2026-03-14 09:30"
    pub subtitle_duration: String,

    /// Sorted by display name ascending, unnamed devices last
    pub devices: Vec<DeviceSummary>,
}

/// One device's line on the index page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSummary {
    pub serial: String,

    /// Reported device name; None when the device carried details without one
    pub name: Option<String>,

    /// Sorted by class name, then method name
    pub tests: Vec<TestSummary>,

    pub test_count: usize,

    /// True when the device executed nothing and died with an exception
    pub execution_failed: bool,
}

impl DeviceSummary {
    /// Summarize one device; no artifact resolution happens at this level
    pub fn from_result(serial: &str, result: &DeviceResult) -> Self {
        let mut tests: Vec<TestSummary> = result
            .test_records
            .iter()
            .map(|record| TestSummary::from_identifier(&record.test, record.result.status))
            .collect();
        tests.sort_by(compare_tests);

        // A probed device keeps whatever name it reported, even none; an
        // unprobed device falls back to its serial
        let name = match &result.details {
            Some(details) => details.name.clone(),
            None => Some(serial.to_string()),
        };

        DeviceSummary {
            serial: serial.to_string(),
            name,
            test_count: tests.len(),
            tests,
            execution_failed: result.execution_failed(),
        }
    }

    /// Name shown in listings; the serial when no name was reported
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.serial)
    }
}

/// Display ordering for the index device list: named devices ascending,
/// unnamed devices after every named one, all ties broken by serial so the
/// order is total.
fn compare_devices(a: &DeviceSummary, b: &DeviceSummary) -> Ordering {
    match (&a.name, &b.name) {
        (None, None) => a.serial.cmp(&b.serial),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => left.cmp(right).then_with(|| a.serial.cmp(&b.serial)),
    }
}

/// Canonical test ordering: class name first, method name breaks ties
pub(crate) fn compare_tests(a: &TestSummary, b: &TestSummary) -> Ordering {
    a.class_name.cmp(&b.class_name).then_with(|| a.method_name.cmp(&b.method_name))
}

/// Build the index view-model for one run
pub fn build_index(run: &RunResult) -> Index {
    let mut tests_run = 0;
    let mut passed = 0;
    let mut devices = Vec::with_capacity(run.results.len());

    for (serial, result) in &run.results {
        devices.push(DeviceSummary::from_result(serial, result));
        tests_run += result.test_records.len();
        passed += result.passed_count();
    }

    devices.sort_by(compare_devices);

    // Always the complement of passed, never a second scan
    let failed = tests_run - passed;

    let device_count = run.results.len();
    let size_label = run.test_size.map(|size| format!(" {}", size.label())).unwrap_or_default();
    let subtitle_tests_and_devices = format!(
        "{} {}{} {} run across {} {}",
        TESTS_MARKER,
        tests_run,
        size_label,
        format::pluralize(tests_run, "test", "tests"),
        device_count,
        format::pluralize(device_count, "device", "devices"),
    );

    let subtitle_duration =
        format!("{} at {}", format::human_duration(run.duration_ms), format::date_to_string(&run.started));

    Index {
        title: run.title.clone(),
        subtitle_tests_and_devices,
        tests_run,
        passed,
        failed,
        subtitle_duration,
        devices,
    }
}
