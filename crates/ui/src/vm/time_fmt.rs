use chrono::{DateTime, Utc};

/// Hours and minutes for chat bubbles.
#[must_use]
pub fn format_time(value: DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}
