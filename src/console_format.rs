/// Console formatting module - Pure rendering concerns
///
/// This module renders the per-device summary table printed after a build.
/// It accepts finished DeviceReport models and writes to any `std::io::Write`
/// destination:
/// - Console (stdout) with optional colors
/// - Byte buffers (for tests)
///
/// Device labels carry wide glyphs (the 📱 marker, CJK device names), so all
/// padding and truncation is done by display width, not byte or char count.
use crate::report::DeviceReport;
use std::io::{self, Write};
use std::sync::OnceLock;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TESTS_COL: usize = 6;
const PASSED_COL: usize = 7;
const FAILED_COL: usize = 7;
const STATUS_COL: usize = 8;
const COLUMN_GAPS: usize = 5;
const MIN_NAME_COL: usize = 12;

static CONSOLE_WIDTH_OVERRIDE: OnceLock<usize> = OnceLock::new();

/// Override the detected console width (for testing and CI logs)
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH_OVERRIDE.set(width);
}

fn console_width() -> usize {
    if let Some(width) = CONSOLE_WIDTH_OVERRIDE.get() {
        return *width;
    }
    terminal_size().map(|(Width(w), _)| w as usize).unwrap_or(100)
}

/// Writer for the summary table - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Write text, wrapped in an ANSI color code when colors are on
    fn write_colored(&mut self, text: &str, code: &str) -> io::Result<()> {
        if self.use_colors && !code.is_empty() {
            write!(self.writer, "\x1b[{}m{}\x1b[0m", code, text)
        } else {
            write!(self.writer, "{}", text)
        }
    }

    /// Render the whole device table
    pub fn write_summary_table(&mut self, reports: &[DeviceReport]) -> io::Result<()> {
        let name_width = name_column_width(reports);

        writeln!(
            self.writer,
            "{} {:>tests$} {:>passed$} {:>failed$}  Status",
            pad_to_width("Device", name_width),
            "Tests",
            "Passed",
            "Failed",
            tests = TESTS_COL,
            passed = PASSED_COL,
            failed = FAILED_COL,
        )?;

        for report in reports {
            let label = truncate_to_width(&device_label(report), name_width);
            write!(
                self.writer,
                "{} {:>tests$} {:>passed$} {:>failed$}  ",
                pad_to_width(&label, name_width),
                report.tests_run,
                report.passed,
                report.failed,
                tests = TESTS_COL,
                passed = PASSED_COL,
                failed = FAILED_COL,
            )?;
            let (status, color) = status_cell(report);
            self.write_colored(status, color)?;
            writeln!(self.writer)?;
        }

        Ok(())
    }
}

/// Label shown in the table's name column
pub(crate) fn device_label(report: &DeviceReport) -> String {
    format!("{} ({})", report.title, report.serial)
}

/// Table status text plus its ANSI color code ("" = plain)
pub(crate) fn status_cell(report: &DeviceReport) -> (&'static str, &'static str) {
    if report.tests_run == 0 && report.has_exceptions {
        ("crashed", "33")
    } else if report.failed > 0 {
        ("FAILED", "31")
    } else if report.tests_run == 0 {
        ("no tests", "")
    } else {
        ("ok", "32")
    }
}

/// Pad with trailing spaces up to the target display width
pub(crate) fn pad_to_width(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    let mut padded = text.to_string();
    for _ in current..width {
        padded.push(' ');
    }
    padded
}

/// Truncate to the target display width, ending with "..." when cut
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        out.push(c);
        used += char_width;
    }
    out.push_str("...");
    out
}

/// Width of the name column: widest label, clamped so the numeric columns
/// still fit on the console
pub(crate) fn name_column_width(reports: &[DeviceReport]) -> usize {
    let widest = reports
        .iter()
        .map(|report| UnicodeWidthStr::width(device_label(report).as_str()))
        .max()
        .unwrap_or(0)
        .max(UnicodeWidthStr::width("Device"));

    let tail = TESTS_COL + PASSED_COL + FAILED_COL + STATUS_COL + COLUMN_GAPS;
    let cap = console_width().saturating_sub(tail).max(MIN_NAME_COL);
    widest.min(cap)
}

/// Print the summary table to stdout
pub fn print_summary_table(reports: &[DeviceReport], use_colors: bool) -> io::Result<()> {
    let mut writer = TableWriter::new(io::stdout(), use_colors);
    writer.write_summary_table(reports)
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
