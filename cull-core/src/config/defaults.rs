//! Named defaults for every configurable setting.

pub const DEFAULT_RETENTION_DAYS: i64 = 30;
pub const DEFAULT_WARN_LEAD_DAYS: i64 = 1;
pub const DEFAULT_PACING_MS: u64 = 200;
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_REFRESH_STATUS: u16 = 204;

/// Extensions that count as media when scanning an item's folder.
pub fn default_monitored_extensions() -> Vec<String> {
    [".mkv", ".mp4", ".avi", ".m4v", ".ts", ".webm"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
