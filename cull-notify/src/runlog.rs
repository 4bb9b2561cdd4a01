use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

/// Append-only, timestamped text log of one pass: the artifact attached to
/// the summary mail. Truncated at the start of each run so the mail always
/// covers exactly one pass.
///
/// Write failures are logged and swallowed; a broken log file must not stop
/// the pruning itself.
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the log and write the opening line.
    pub fn begin(&self, message: &str) {
        self.write(true, message);
    }

    /// Append one line.
    pub fn append(&self, message: &str) {
        self.write(false, message);
    }

    /// The full log content, for the mail body. Empty on read failure.
    pub fn read(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap_or_default()
    }

    fn write(&self, truncate: bool, message: &str) {
        let result = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(truncate)
            .append(!truncate)
            .open(&self.path)
            .and_then(|mut file| {
                writeln!(
                    file,
                    "{} - {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S"),
                    message
                )
            });
        if let Err(e) = result {
            tracing::error!(path = %self.path.display(), error = %e, "cannot write run log");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_truncates_and_append_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::new(dir.path().join("cull.log"));

        log.begin("run started");
        log.append("KEEPING - Heat (1995)");
        log.append("REMOVED - Alien (1979)");

        let content = log.read();
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains("KEEPING - Heat (1995)"));

        log.begin("second run");
        let content = log.read();
        assert_eq!(content.lines().count(), 1, "begin must truncate");
        assert!(content.contains("second run"));
    }

    #[test]
    fn every_line_is_timestamped() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::new(dir.path().join("cull.log"));

        log.begin("run started");
        let content = log.read();
        // "YYYY-MM-DD HH:MM:SS - message"
        assert!(content.contains(" - run started"));
    }

    #[test]
    fn unwritable_log_is_swallowed() {
        let log = RunLog::new("/nonexistent/dir/cull.log");
        log.begin("run started");
        assert_eq!(log.read(), "");
    }
}
