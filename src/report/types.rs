//! Rendering types shared by the index and device report builders.
//!
//! These convert raw engine values into the display model the renderer
//! consumes. The status classification here is the single source of truth
//! for how an outcome renders; pass counting lives on the raw status enum.

use crate::report::format;
use crate::types::{TestIdentifier, TestStatus};
use serde::Serialize;

/// Rendering class for one outcome; doubles as the CSS class on the test row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Pass,
    Fail,
    Error,
}

impl StatusClass {
    /// Classify a raw engine status
    pub fn from_status(status: TestStatus) -> Self {
        match status {
            TestStatus::Pass => StatusClass::Pass,
            TestStatus::Fail => StatusClass::Fail,
            TestStatus::Error => StatusClass::Error,
        }
    }

    /// The CSS class emitted for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Pass => "pass",
            StatusClass::Fail => "fail",
            StatusClass::Error => "error",
        }
    }
}

/// Summary line for one test, as listed on the index page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestSummary {
    /// Fully qualified class name
    pub class_name: String,

    /// Raw method name
    pub method_name: String,

    /// Final segment of the class name, e.g. "LoginTest"
    pub class_simple_name: String,

    /// Method name with underscores opened up for reading
    pub pretty_method_name: String,

    /// DOM-safe anchor id, stable across runs
    pub test_id: String,

    pub status: StatusClass,
}

impl TestSummary {
    /// Build the display fields for one test
    pub fn from_identifier(test: &TestIdentifier, status: TestStatus) -> Self {
        TestSummary {
            class_name: test.class_name.clone(),
            method_name: test.method_name.clone(),
            class_simple_name: format::class_simple_name(&test.class_name).to_string(),
            pretty_method_name: format::pretty_method_name(&test.method_name),
            test_id: format::test_id(&test.class_name, &test.method_name),
            status: StatusClass::from_status(status),
        }
    }
}
