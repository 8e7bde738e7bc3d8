/// Display formatting utilities — human-readable byte counts and timestamps.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.
use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Units in ascending order. Formatting stops at the last one regardless of
/// how large the value still is.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count into a human-readable string with two decimals.
///
/// Uses binary units (KB = 1024) but labels them with common short forms,
/// dividing while the value is at least 1024: `0.00 B`, `2.00 KB`, `1.50 MB`.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Format a modification time as local `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}
