//! Report context export.
//!
//! Writes the built view-models as JSON under the report output root. These
//! files are the template context the external renderer consumes; ladle
//! itself renders nothing.

use crate::report::device::DeviceReport;
use crate::report::index::Index;
use log::debug;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Write index.json plus one device context file per device
pub fn write_report_context(index: &Index, reports: &[DeviceReport], output_root: &Path) -> std::io::Result<()> {
    fs::create_dir_all(output_root)?;

    let index_path = output_root.join("index.json");
    debug!("Writing index context to {}", index_path.display());
    let file = File::create(&index_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), index)?;

    for report in reports {
        let device_path = device_context_path(output_root, &report.serial);
        debug!("Writing device context to {}", device_path.display());
        let file = File::create(&device_path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    }

    Ok(())
}

/// Context file path for one device.
///
/// Serials of TCP-attached devices contain ':' , which some file systems
/// reject, so anything outside the portable set maps to '-'.
pub fn device_context_path(output_root: &Path, serial: &str) -> PathBuf {
    let safe: String = serial
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '-' })
        .collect();
    output_root.join(format!("device-{}.json", safe))
}
