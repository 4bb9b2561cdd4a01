use std::path::{Path, PathBuf};

use cull_core::errors::AnchorError;

/// Find the first file in `dir` (non-recursive) whose name ends with one of
/// the monitored extensions, case-insensitively. A missing directory reads
/// as "no media": items not yet on disk simply have nothing to scan.
pub fn find_media_file(
    dir: &Path,
    extensions: &[String],
) -> Result<Option<PathBuf>, AnchorError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(AnchorError::Scan {
                dir: dir.display().to_string(),
                reason: e.to_string(),
            })
        }
    };

    for entry in entries {
        let entry = entry.map_err(|e| AnchorError::Scan {
            dir: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let lower = name.to_lowercase();
        if extensions
            .iter()
            .any(|ext| lower.ends_with(&ext.to_lowercase()))
        {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec![".mkv".to_string(), ".mp4".to_string()]
    }

    #[test]
    fn finds_media_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Movie.MKV"), b"").unwrap();
        std::fs::write(dir.path().join("cover.jpg"), b"").unwrap();

        let found = find_media_file(dir.path(), &exts()).unwrap();
        assert!(found.is_some());
        assert!(found.unwrap().to_string_lossy().ends_with("Movie.MKV"));
    }

    #[test]
    fn ignores_non_media_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();

        assert!(find_media_file(dir.path(), &exts()).unwrap().is_none());
    }

    #[test]
    fn missing_directory_reads_as_no_media() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("never-downloaded");

        assert!(find_media_file(&gone, &exts()).unwrap().is_none());
    }
}
