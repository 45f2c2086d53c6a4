//! The per-device detail model.
//!
//! One DeviceReport per device per run: the same totals as the index line
//! plus full per-test detail, resolved artifact links and collapsed traces
//! for execution-level crashes.

use crate::report::artifacts::{self, ArtifactLink};
use crate::report::format;
use crate::report::index::compare_tests;
use crate::report::trace::{self, TraceInfo};
use crate::report::types::TestSummary;
use crate::types::{DeviceResult, TestRecord};
use serde::Serialize;
use std::path::Path;

/// Decorative marker in front of every device title; rendering concern
/// carried through unchanged
const DEVICE_MARKER: &str = "📱";

/// Decorative marker in front of the tests-run line, same as the index page
const TESTS_MARKER: &str = "😎";

/// View-model for one device's report page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceReport {
    pub serial: String,

    /// Marker-prefixed display name, e.g. "📱Pixel 6 API 34"
    pub title: String,

    /// Hardware line, absent when the engine never probed the device
    pub device_summary: Option<String>,

    /// e.g. "😎 3 tests run"
    pub subtitle_tests_run: String,

    pub tests_run: usize,
    pub passed: usize,
    pub failed: usize,

    /// e.g. "1m 02s at 2026-03-14 09:30"
    pub subtitle_duration: String,

    /// Sorted by class name, then method name
    pub tests: Vec<TestDetail>,

    pub has_exceptions: bool,

    /// Execution-level failures, collapsed for display
    pub exceptions: Vec<TraceInfo>,
}

/// Full detail for one test on the device page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestDetail {
    #[serde(flatten)]
    pub summary: TestSummary,

    /// Formatted wall-clock duration of this test
    pub duration: String,

    pub has_screenshots: bool,
    pub screenshots: Vec<ArtifactLink>,

    pub has_files: bool,
    pub files: Vec<ArtifactLink>,

    /// Output-root-relative link to the stitched capture, when one exists
    pub animated_capture: Option<String>,

    /// Collapsed per-test throwable, when the test raised one
    pub exception: Option<TraceInfo>,
}

impl TestDetail {
    fn from_record(record: &TestRecord, output_root: &Path) -> Self {
        let outcome = &record.result;
        TestDetail {
            summary: TestSummary::from_identifier(&record.test, outcome.status),
            duration: format::human_duration(outcome.duration_ms),
            has_screenshots: !outcome.screenshots.is_empty(),
            screenshots: artifacts::artifact_links(&outcome.screenshots, output_root),
            has_files: !outcome.files.is_empty(),
            files: artifacts::artifact_links(&outcome.files, output_root),
            animated_capture: outcome
                .animated_capture
                .as_deref()
                .map(|path| artifacts::relative_href(path, output_root)),
            exception: trace::process_stack_trace(outcome.exception.as_ref()),
        }
    }
}

/// Build the report view-model for one device
pub fn build_device_report(serial: &str, result: &DeviceResult, output_root: &Path) -> DeviceReport {
    let mut tests: Vec<TestDetail> =
        result.test_records.iter().map(|record| TestDetail::from_record(record, output_root)).collect();
    tests.sort_by(|a, b| compare_tests(&a.summary, &b.summary));

    let tests_run = result.test_records.len();
    let passed = result.passed_count();
    let failed = tests_run - passed;

    let display_name =
        result.details.as_ref().and_then(|details| details.name.as_deref()).unwrap_or(serial);
    let title = format!("{}{}", DEVICE_MARKER, display_name.replace('_', " "));

    let subtitle_tests_run =
        format!("{} {} {} run", TESTS_MARKER, tests_run, format::pluralize(tests_run, "test", "tests"));
    let subtitle_duration =
        format!("{} at {}", format::human_duration(result.duration_ms), format::date_to_string(&result.started));

    let exceptions: Vec<TraceInfo> = result.exceptions.iter().map(trace::process).collect();

    DeviceReport {
        serial: serial.to_string(),
        title,
        device_summary: result.details.as_ref().map(format::device_summary_line),
        subtitle_tests_run,
        tests_run,
        passed,
        failed,
        subtitle_duration,
        tests,
        has_exceptions: !exceptions.is_empty(),
        exceptions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::StatusClass;
    use crate::types::*;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn outcome(status: TestStatus) -> TestOutcome {
        TestOutcome {
            status,
            exception: None,
            screenshots: vec![],
            files: vec![],
            animated_capture: None,
            duration_ms: 2_000,
        }
    }

    fn record(class_name: &str, method_name: &str, status: TestStatus) -> TestRecord {
        TestRecord {
            test: TestIdentifier {
                class_name: class_name.to_string(),
                method_name: method_name.to_string(),
            },
            result: outcome(status),
        }
    }

    fn device(records: Vec<TestRecord>) -> DeviceResult {
        DeviceResult {
            details: None,
            started: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
            duration_ms: 62_000,
            test_records: records,
            exceptions: vec![],
        }
    }

    fn details(name: Option<&str>) -> DeviceDetails {
        DeviceDetails {
            name: name.map(|n| n.to_string()),
            manufacturer: "Google".to_string(),
            model: "Pixel 6".to_string(),
            version: "14".to_string(),
            api_level: 34,
            language: Some("en".to_string()),
            region: Some("US".to_string()),
            is_emulator: true,
        }
    }

    #[test]
    fn test_counts_and_subtitles() {
        let result = device(vec![
            record("com.example.T", "a", TestStatus::Pass),
            record("com.example.T", "b", TestStatus::Fail),
            record("com.example.T", "c", TestStatus::Error),
        ]);

        let report = build_device_report("emulator-5554", &result, Path::new("/out"));
        assert_eq!(report.tests_run, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.tests_run, report.passed + report.failed);
        assert_eq!(report.subtitle_tests_run, "😎 3 tests run");
        assert_eq!(report.subtitle_duration, "1m 02s at 2026-03-14 09:30");
    }

    #[test]
    fn test_title_uses_marker_and_opens_underscores() {
        let mut result = device(vec![]);
        result.details = Some(details(Some("Pixel_6_API_34")));

        let report = build_device_report("emulator-5554", &result, Path::new("/out"));
        assert_eq!(report.title, "📱Pixel 6 API 34");
        assert_eq!(
            report.device_summary.as_deref(),
            Some("Google Pixel 6, Android 14, API 34, en_US (emulator)")
        );
    }

    #[test]
    fn test_title_falls_back_to_serial() {
        // No details at all
        let report = build_device_report("emulator-5554", &device(vec![]), Path::new("/out"));
        assert_eq!(report.title, "📱emulator-5554");
        assert_eq!(report.device_summary, None);

        // Probed device that reported no name
        let mut nameless = device(vec![]);
        nameless.details = Some(details(None));
        let report = build_device_report("emulator-5554", &nameless, Path::new("/out"));
        assert_eq!(report.title, "📱emulator-5554");
        assert!(report.device_summary.is_some());
    }

    #[test]
    fn test_details_sorted_by_class_then_method() {
        let result = device(vec![
            record("com.example.Zeta", "a", TestStatus::Pass),
            record("com.example.Alpha", "z", TestStatus::Pass),
            record("com.example.Alpha", "a", TestStatus::Pass),
        ]);

        let report = build_device_report("S", &result, Path::new("/out"));
        let order: Vec<(&str, &str)> = report
            .tests
            .iter()
            .map(|t| (t.summary.class_name.as_str(), t.summary.method_name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("com.example.Alpha", "a"),
                ("com.example.Alpha", "z"),
                ("com.example.Zeta", "a"),
            ]
        );
    }

    #[test]
    fn test_artifacts_resolve_against_output_root() {
        let mut rec = record("com.example.T", "shot_taker", TestStatus::Pass);
        rec.result.screenshots = vec![
            PathBuf::from("/out/emulator-5554/com.example.T/shot_taker/001.png"),
            PathBuf::from("/out/emulator-5554/com.example.T/shot_taker/002.png"),
        ];
        rec.result.files = vec![PathBuf::from("/out/emulator-5554/com.example.T/shot_taker/log.txt")];
        rec.result.animated_capture = Some(PathBuf::from("/out/emulator-5554/com.example.T/shot_taker.gif"));

        let report = build_device_report("emulator-5554", &device(vec![rec]), Path::new("/out"));
        let detail = &report.tests[0];

        assert!(detail.has_screenshots);
        assert_eq!(detail.screenshots.len(), 2);
        assert_eq!(detail.screenshots[0].href, "emulator-5554/com.example.T/shot_taker/001.png");
        assert_eq!(detail.screenshots[0].name, "001.png");

        assert!(detail.has_files);
        assert_eq!(detail.files[0].name, "log.txt");

        assert_eq!(
            detail.animated_capture.as_deref(),
            Some("emulator-5554/com.example.T/shot_taker.gif")
        );
    }

    #[test]
    fn test_absent_artifacts_are_safe() {
        let report =
            build_device_report("S", &device(vec![record("com.example.T", "bare", TestStatus::Pass)]), Path::new("/out"));
        let detail = &report.tests[0];

        assert!(!detail.has_screenshots);
        assert!(detail.screenshots.is_empty());
        assert!(!detail.has_files);
        assert!(detail.files.is_empty());
        assert_eq!(detail.animated_capture, None);
        assert_eq!(detail.exception, None);
    }

    #[test]
    fn test_per_test_exception_is_collapsed() {
        let mut rec = record("com.example.T", "explodes", TestStatus::Error);
        rec.result.exception = Some(RawStackTrace {
            exception_class: "java.lang.IllegalStateException".to_string(),
            message: Some("fragment not attached".to_string()),
            frames: vec![
                "com.example.T.explodes(T.java:9)".to_string(),
                "androidx.test.runner.AndroidJUnitRunner.onStart(AndroidJUnitRunner.java:409)".to_string(),
            ],
            cause: None,
        });

        let report = build_device_report("S", &device(vec![rec]), Path::new("/out"));
        let exception = report.tests[0].exception.as_ref().unwrap();
        assert_eq!(exception.title, "java.lang.IllegalStateException: fragment not attached");
        assert_eq!(exception.frames, vec!["com.example.T.explodes(T.java:9)".to_string()]);
        assert_eq!(report.tests[0].summary.status, StatusClass::Error);
    }

    #[test]
    fn test_execution_exceptions_are_processed() {
        let mut result = device(vec![]);
        result.exceptions = vec![RawStackTrace {
            exception_class: "java.lang.RuntimeException".to_string(),
            message: Some("Unable to launch instrumentation".to_string()),
            frames: vec![],
            cause: None,
        }];

        let report = build_device_report("S", &result, Path::new("/out"));
        assert!(report.has_exceptions);
        assert_eq!(report.exceptions.len(), 1);
        assert_eq!(report.exceptions[0].title, "java.lang.RuntimeException: Unable to launch instrumentation");
        assert_eq!(report.tests_run, 0);
    }

    #[test]
    fn test_no_exceptions_flag() {
        let report = build_device_report("S", &device(vec![]), Path::new("/out"));
        assert!(!report.has_exceptions);
        assert!(report.exceptions.is_empty());
    }
}
