//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, Utc};

/// Format a UTC timestamp as `YYYY-MM-DD HH:MM:SS`
/// Example: 2024-03-15T14:02:26.123Z -> "2024-03-15 14:02:26"
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
