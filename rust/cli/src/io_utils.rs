//! File I/O helpers shared by the commands that read turn logs or write
//! simulation summaries.

use std::path::Path;

/// Reads a whole text file, turning the I/O error into a message that names
/// the path.
pub fn read_text(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))
}

/// Creates the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_parent_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("out.jsonl");
        ensure_parent_dir(&target).expect("create dirs");
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn read_text_reports_missing_file() {
        let err = read_text("/definitely/not/here.jsonl").unwrap_err();
        assert!(err.contains("/definitely/not/here.jsonl"));
    }
}
