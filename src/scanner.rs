use crate::generator::IndexError;
use crate::size_format::format_file_size;
use crate::types::{FileEntry, SIZE_UNKNOWN};
use log::{debug, warn};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Names of the files directly inside `dir` that match `*.{extension}`, in
/// enumeration order. Any error while reading the directory aborts the scan.
pub fn find_matching_files(dir: &Path, extension: &str) -> Result<Vec<String>, IndexError> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| IndexError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;

        let Some(name) = entry.file_name().to_str() else {
            warn!(
                "Skipping {}: file name is not valid UTF-8",
                entry.path().display()
            );
            continue;
        };

        if !matches_extension(name, extension) {
            continue;
        }

        if !is_listable_file(&entry) {
            debug!("Skipping {name}: not a regular file");
            continue;
        }

        names.push(name.to_string());
    }

    Ok(names)
}

/// Shell glob semantics for `*.ext`: exact suffix, hidden names never match.
fn matches_extension(name: &str, extension: &str) -> bool {
    !name.starts_with('.')
        && name
            .strip_suffix(extension)
            .is_some_and(|stem| stem.ends_with('.'))
}

fn is_listable_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if file_type.is_symlink() {
        // Dangling links stay listed and end up as "Size unknown"
        return fs::metadata(entry.path()).map_or(true, |m| m.is_file());
    }
    false
}

/// Stat `dir/name` and build its entry. A failed stat is not fatal: the entry
/// keeps the full name and gets a placeholder size.
#[must_use]
pub fn collect_entry(dir: &Path, name: &str, extension: &str) -> FileEntry {
    match fs::metadata(dir.join(name)) {
        Ok(metadata) => {
            let size = metadata.len();
            let suffix = format!(".{extension}");
            let display_name = name.strip_suffix(&suffix).unwrap_or(name);

            FileEntry {
                name: name.to_string(),
                display_name: display_name.to_string(),
                size_bytes: Some(size),
                size_label: format_file_size(size),
            }
        }
        Err(e) => {
            warn!("Cannot read size of {name}: {e}");
            FileEntry {
                name: name.to_string(),
                display_name: name.to_string(),
                size_bytes: None,
                size_label: SIZE_UNKNOWN.to_string(),
            }
        }
    }
}
