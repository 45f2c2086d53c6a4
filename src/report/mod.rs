//! Report view-model building - raw run captures to renderer-ready models.
//!
//! This module handles:
//! - Aggregating per-device outcomes into the cross-device index model
//! - Building one detail report model per device
//! - Status classification and DOM-safe identifier generation
//! - Duration/date formatting and stack-trace collapsing
//! - Artifact path resolution against the report output root
//! - Export of the built models as JSON template context
//!
//! The builders are pure functions over the parsed capture; rendering is the
//! external renderer's job and file copying is the engine's.
//!
//! # Module Organization
//!
//! - `types` - Rendering types shared by both builders (StatusClass, TestSummary)
//! - `format` - Duration, date, pluralization and name formatting
//! - `trace` - Stack-trace collapsing for compact display
//! - `artifacts` - Output-root-relative artifact links
//! - `index` - The cross-device index model
//! - `device` - The per-device detail model
//! - `export` - JSON context files for the renderer

mod artifacts;
mod device;
mod export;
mod format;
mod index;
mod trace;
mod types;

// Re-export rendering types
pub use types::{StatusClass, TestSummary};

// Re-export the builders and their models
pub use device::{DeviceReport, TestDetail, build_device_report};
pub use index::{DeviceSummary, Index, build_index};

// Re-export shared helpers
pub use artifacts::{ArtifactLink, artifact_links, relative_href};
pub use format::{human_duration, pluralize};
pub use trace::{TraceInfo, process_stack_trace};

// Re-export export functions
pub use export::{device_context_path, write_report_context};
