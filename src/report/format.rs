//! Formatting helpers shared by the index and device report builders.
//!
//! Everything here is a pure function from raw values to display strings.

use crate::types::DeviceDetails;
use chrono::{DateTime, Utc};

/// Render a millisecond duration as a compact human string.
///
/// Zero stays "0s", a nonzero sub-second duration becomes "<1s", and longer
/// durations grow components as needed: "45s", "1m 02s", "1h 01m 01s".
pub fn human_duration(ms: u64) -> String {
    if ms == 0 {
        return "0s".to_string();
    }

    let total_secs = ms / 1_000;
    if total_secs == 0 {
        return "<1s".to_string();
    }

    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Render a timestamp in the fixed, locale-stable report form
pub fn date_to_string(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

/// Singular when the count is exactly one, plural otherwise
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Final segment of a fully qualified class name
pub fn class_simple_name(class_name: &str) -> &str {
    class_name.rsplit('.').next().unwrap_or(class_name)
}

/// Method name with underscores opened up for reading; cosmetic only, never
/// used as a key
pub fn pretty_method_name(method_name: &str) -> String {
    method_name.replace('_', " ")
}

/// DOM-safe anchor id for one test.
///
/// Stable across runs and collision-free for distinct (class, method) pairs:
/// '-' cannot occur inside a Java/Kotlin identifier, so the joined form is
/// unambiguous.
pub fn test_id(class_name: &str, method_name: &str) -> String {
    format!("{}-{}", class_name.replace('.', "-"), method_name)
}

/// One-line hardware summary for the device page subtitle
pub fn device_summary_line(details: &DeviceDetails) -> String {
    let mut line = format!(
        "{} {}, Android {}, API {}",
        details.manufacturer, details.model, details.version, details.api_level
    );

    match (&details.language, &details.region) {
        (Some(language), Some(region)) => {
            line.push_str(&format!(", {}_{}", language, region));
        }
        (Some(language), None) => {
            line.push_str(&format!(", {}", language));
        }
        _ => {}
    }

    if details.is_emulator {
        line.push_str(" (emulator)");
    }

    line
}
