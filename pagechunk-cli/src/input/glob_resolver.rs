//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// Paths keep the order of the patterns that produced them; a file matched
/// by several patterns is listed once, at its first position.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                matched.push(path);
            }
        }

        matched.sort();
        for path in matched {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles(patterns.to_vec()).into());
    }

    log::debug!("Resolved {} input files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_sorted() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.pdf"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[pattern]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_pattern_order_kept_and_duplicates_removed() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["a.txt", "z.txt"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }

        let z = temp_dir.path().join("z.txt").display().to_string();
        let all = temp_dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[z, all]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["z.txt", "a.txt"]);
    }

    #[test]
    fn test_repeated_pattern_lists_files_once() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..50 {
            fs::write(temp_dir.path().join(format!("doc{i:02}.txt")), "x").unwrap();
        }

        let all = temp_dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[all.clone(), all.clone(), all]).unwrap();
        assert_eq!(files.len(), 50);
        assert!(files.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_no_matches() {
        let err = resolve_patterns(&["/nonexistent/dir/*.pdf".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid file pattern"));
    }

    #[test]
    fn test_directories_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub.txt")).unwrap();
        fs::write(temp_dir.path().join("file.txt"), "x").unwrap();

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files.len(), 1);
    }
}
