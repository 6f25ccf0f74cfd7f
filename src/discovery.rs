//! Locate chat exports in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ChatviewError, Result};

/// File name that is never treated as a chat export.
const EXCLUDED: &str = "requirements.txt";

/// Lists the `.txt` files in `dir` that look like chat exports, sorted by name.
///
/// Subdirectories are not searched. An empty directory yields an empty list;
/// use [`first_chat_file`] when a missing export is an error.
pub fn discover_chat_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Follows symlinks; dangling links are skipped.
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(".txt") && !name.eq_ignore_ascii_case(EXCLUDED) {
            files.push(path);
        }
    }

    files.sort();
    debug!("Found {} chat exports in {}", files.len(), dir.display());
    Ok(files)
}

/// Returns the first chat export in `dir`.
pub fn first_chat_file(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    discover_chat_files(dir)?
        .into_iter()
        .next()
        .ok_or_else(|| ChatviewError::no_chat_files(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["b_chat.txt", "a_chat.txt", "Requirements.txt", "notes.md", "c.TXT"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let files = discover_chat_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a_chat.txt", "b_chat.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_follows_symlinks() {
        let source = tempdir().unwrap();
        let dir = tempdir().unwrap();
        let export = source.path().join("family.txt");
        fs::write(&export, "15/01/2024, 10:00 - Alice: hi").unwrap();
        std::os::unix::fs::symlink(&export, dir.path().join("family.txt")).unwrap();
        std::os::unix::fs::symlink(source.path().join("gone.txt"), dir.path().join("gone.txt"))
            .unwrap();

        let files = discover_chat_files(dir.path()).unwrap();
        assert_eq!(files, [dir.path().join("family.txt")]);
        assert_eq!(first_chat_file(dir.path()).unwrap(), files[0]);
        assert_eq!(crate::parser::parse_file(&files[0]).unwrap().len(), 1);
    }

    #[test]
    fn test_first_chat_file_empty_dir() {
        let dir = tempdir().unwrap();
        let err = first_chat_file(dir.path()).unwrap_err();
        assert!(err.is_no_chat_files());
    }

    #[test]
    fn test_discover_missing_dir() {
        let err = discover_chat_files("/definitely/not/here").unwrap_err();
        assert!(err.is_io());
    }
}
