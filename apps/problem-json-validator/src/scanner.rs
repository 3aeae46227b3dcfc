//! Input discovery and loading.

use std::fs;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{Violation, ViolationKind};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Directories to skip
const SKIP_DIRS: &[&str] = &["target", "node_modules", ".git", "vendor"];

/// Check if a path matches any of the exclude patterns
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

/// Check if path contains any skip directories
fn in_skip_dir(path: &Path) -> bool {
    path.components().any(|component| {
        matches!(component, Component::Normal(name)
            if SKIP_DIRS.iter().any(|skip| name.to_string_lossy() == *skip))
    })
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Collect `.json` files under `paths`.
///
/// Explicit file arguments are kept regardless of their extension; directories are
/// walked recursively. `-` is passed through untouched and means stdin.
#[must_use]
pub fn find_files(paths: &[PathBuf], exclude: &[String]) -> Vec<PathBuf> {
    let exclude_patterns: Vec<Pattern> = exclude
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pat) => Some(pat),
            Err(e) => {
                tracing::warn!(pattern = %p, error = %e, "ignoring invalid exclude pattern");
                None
            }
        })
        .collect();

    let mut files = Vec::new();
    for path in paths {
        if path.as_os_str() == STDIN_PATH || path.is_file() {
            if !matches_exclude(path, &exclude_patterns) {
                files.push(path.clone());
            }
            continue;
        }

        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
        {
            let file_path = entry.path();
            if in_skip_dir(file_path) || !file_path.is_file() || !is_json_file(file_path) {
                continue;
            }
            if matches_exclude(file_path, &exclude_patterns) {
                tracing::debug!(file = %file_path.display(), "excluded");
                continue;
            }
            files.push(file_path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();
    files
}

/// Read one input as UTF-8 text, enforcing `max_file_size`.
///
/// # Errors
/// Returns a file-level [`Violation`] when the input is too large or unreadable.
pub fn read_source(path: &Path, max_file_size: u64) -> Result<String, Violation> {
    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .take(max_file_size.saturating_add(1))
            .read_to_string(&mut content)
            .map_err(|e| unreadable(path, &e))?;
        let size = u64::try_from(content.len()).unwrap_or(u64::MAX);
        return if size > max_file_size {
            Err(too_large(path, size, max_file_size))
        } else {
            Ok(content)
        };
    }

    let metadata = fs::metadata(path).map_err(|e| unreadable(path, &e))?;
    if metadata.len() > max_file_size {
        return Err(too_large(path, metadata.len(), max_file_size));
    }
    fs::read_to_string(path).map_err(|e| unreadable(path, &e))
}

fn unreadable(path: &Path, e: &std::io::Error) -> Violation {
    Violation::file_level(path, ViolationKind::Unreadable, format!("cannot read: {e}"))
}

fn too_large(path: &Path, size: u64, limit: u64) -> Violation {
    Violation::file_level(
        path,
        ViolationKind::TooLarge,
        format!("size {size} exceeds limit {limit}"),
    )
}
