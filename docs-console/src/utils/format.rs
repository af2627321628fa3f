//! Display formatting shared by the table view and the CSV export.

use crate::config::{Clock, DisplaySettings};
use chrono::{DateTime, FixedOffset};

const SIZE_UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

/// Human-readable size: divide by 1024 until the value drops below 1024 or the
/// unit runs out at TB, always with two decimals.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, SIZE_UNITS[unit])
}

/// Greedy word wrap. Words are never split, so a line only exceeds
/// `max_line_length` when it holds a single word that is longer on its own.
pub fn wrap_text(text: &str, max_line_length: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() {
            current.push_str(word);
        } else if current_len + 1 + word_len <= max_line_length {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Calendar date and time of day for an epoch-seconds timestamp, in the
/// configured offset. `None` when chrono can't represent the instant.
pub fn format_timestamp(timestamp: i64, display: &DisplaySettings) -> Option<(String, String)> {
    let at: DateTime<FixedOffset> =
        DateTime::from_timestamp(timestamp, 0)?.with_timezone(&display.offset());

    let date = at.format("%-m/%-d/%Y").to_string();
    let time = match display.clock {
        Clock::TwentyFourHour => at.format("%H:%M").to_string(),
        Clock::TwelveHour => at.format("%I:%M %p").to_string(),
    };
    Some((date, time))
}

/// Date and time on one line, as the CSV export wants it.
pub fn format_date_time(timestamp: i64, display: &DisplaySettings) -> String {
    match format_timestamp(timestamp, display) {
        Some((date, time)) => format!("{} {}", date, time),
        None => timestamp.to_string(),
    }
}
