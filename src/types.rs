/// Core data structures for run captures
///
/// This module defines the raw data model for one instrumentation run, as
/// captured by the device engine and handed to ladle as JSON. ladle only
/// reads these; nothing here is mutated after parsing.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One instrumentation run across every device that participated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Report title, as configured on the engine invocation
    pub title: String,

    /// When the run started (UTC)
    pub started: DateTime<Utc>,

    /// Wall-clock duration of the whole run, in milliseconds
    pub duration_ms: u64,

    /// Requested test granularity, when the run was size-filtered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_size: Option<TestSize>,

    /// Per-device results keyed by serial (ordered, so iteration is deterministic)
    pub results: BTreeMap<String, DeviceResult>,
}

impl RunResult {
    /// Total number of test records across all devices
    pub fn total_tests(&self) -> usize {
        self.results.values().map(|device| device.test_records.len()).sum()
    }
}

/// Android test-size filter requested on the engine invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestSize {
    Small,
    Medium,
    Large,
}

impl TestSize {
    /// Lowercase label used in composed subtitle strings
    pub fn label(&self) -> &'static str {
        match self {
            TestSize::Small => "small",
            TestSize::Medium => "medium",
            TestSize::Large => "large",
        }
    }
}

/// Everything one device produced during the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceResult {
    /// Hardware facts reported by the device, when probing succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DeviceDetails>,

    /// When this device started executing (UTC)
    pub started: DateTime<Utc>,

    /// Wall-clock duration on this device, in milliseconds
    pub duration_ms: u64,

    /// One record per executed test method
    #[serde(default)]
    pub test_records: Vec<TestRecord>,

    /// Failures not attributable to a single test (install crash, launch crash)
    #[serde(default)]
    pub exceptions: Vec<RawStackTrace>,
}

impl DeviceResult {
    /// True when the device executed nothing and died with at least one exception
    pub fn execution_failed(&self) -> bool {
        self.test_records.is_empty() && !self.exceptions.is_empty()
    }

    /// Count of outcomes that count as passed
    pub fn passed_count(&self) -> usize {
        self.test_records.iter().filter(|record| record.result.status.counts_as_passed()).count()
    }
}

/// Identity of one test method
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TestIdentifier {
    /// Fully qualified class name, e.g. "com.example.app.LoginTest"
    pub class_name: String,

    /// Bare method name, e.g. "login_rejects_bad_password"
    pub method_name: String,
}

/// One executed test method and its recorded outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub test: TestIdentifier,
    pub result: TestOutcome,
}

/// Recorded result of one test method on one device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub status: TestStatus,

    /// Throwable captured by the instrumentation runner, when the test raised one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<RawStackTrace>,

    /// Screenshots taken while this test ran, absolute paths on disk
    #[serde(default)]
    pub screenshots: Vec<PathBuf>,

    /// Arbitrary files the test saved, absolute paths on disk
    #[serde(default)]
    pub files: Vec<PathBuf>,

    /// Stitched animated capture of the screenshots, when one was rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated_capture: Option<PathBuf>,

    /// Wall-clock duration of this test, in milliseconds
    #[serde(default)]
    pub duration_ms: u64,
}

/// Status assigned by the instrumentation runner
///
/// Closed set; ladle classifies with it but never decides pass/fail itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Pass,
    Fail,
    Error,
}

impl TestStatus {
    /// The single pass-counting policy: anything that is not FAIL counts as
    /// passed, ERROR included, matching the engine's own totals.
    pub fn counts_as_passed(&self) -> bool {
        !matches!(self, TestStatus::Fail)
    }
}

/// Device hardware facts, as probed before the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDetails {
    /// Marketing or AVD name; unset on some engineering builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub manufacturer: String,
    pub model: String,

    /// Android release string, e.g. "14"
    pub version: String,
    pub api_level: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default)]
    pub is_emulator: bool,
}

/// Raw captured throwable: class, message, unprocessed frames
///
/// Frames are in capture order, deepest frame first. `cause` nests the next
/// throwable in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStackTrace {
    /// Fully qualified exception class, e.g. "java.lang.IllegalStateException"
    pub exception_class: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Frame lines as captured, e.g. "com.example.app.LoginTest.login(LoginTest.java:42)"
    #[serde(default)]
    pub frames: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<RawStackTrace>>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
