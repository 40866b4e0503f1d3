use crate::html_renderer::{self, IndexPage};
use crate::scanner;
use crate::types::{FileEntry, PDF_EXTENSION};
use chrono::NaiveDateTime;
use colored::Colorize;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const OUTPUT_FILE: &str = "index.html";

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("cannot read directory {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scan `dir` for PDFs and overwrite `dir/index.html` with the listing.
/// Returns the entries in the order they were rendered.
pub fn generate_index(
    dir: &Path,
    generated_at: NaiveDateTime,
) -> Result<Vec<FileEntry>, IndexError> {
    let mut names = scanner::find_matching_files(dir, PDF_EXTENSION)?;
    sort_names(&mut names);

    let entries: Vec<FileEntry> = names
        .iter()
        .map(|name| scanner::collect_entry(dir, name, PDF_EXTENSION))
        .collect();

    let html = html_renderer::render_index(&IndexPage {
        entries: &entries,
        generated_at,
    });

    let output_path = dir.join(OUTPUT_FILE);
    debug!(
        "Writing {} entries to {}",
        entries.len(),
        output_path.display()
    );
    fs::write(&output_path, html).map_err(|source| IndexError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok(entries)
}

/// Case-insensitive ascending. Stable, so names equal under lowercase keep
/// enumeration order.
fn sort_names(names: &mut [String]) {
    names.sort_by_cached_key(|name| name.to_lowercase());
}

#[must_use]
pub fn summary_lines(entries: &[FileEntry]) -> Vec<String> {
    let mut lines = vec![format!(
        "{} Generated {} with {} PDF files",
        "✅".green(),
        OUTPUT_FILE,
        entries.len().to_string().green()
    )];

    if entries.is_empty() {
        lines.push(
            "⚠️  No PDF files found in current directory"
                .yellow()
                .to_string(),
        );
        return lines;
    }

    lines.push("📄 Found PDFs:".cyan().to_string());
    for entry in entries {
        lines.push(format!("   • {} ({})", entry.label(), entry.size_label));
    }
    lines
}

pub fn print_summary(entries: &[FileEntry]) {
    for line in summary_lines(entries) {
        println!("{line}");
    }
}
