//! Source file discovery
//!
//! Walks the tree below a root and collects every file with the configured
//! extension. Directories whose path (relative to the root) contains one of
//! the excluded markers are pruned before the walker descends into them.
//! This is a plain substring test, so `targets/` or `.github/` are pruned
//! as well.

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::MigrationConfig;

fn is_excluded_dir(entry: &DirEntry, root: &Path, markers: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    let relative = relative.to_string_lossy();
    markers.iter().any(|marker| relative.contains(marker.as_str()))
}

/// Collect the source files under `root`, sorted by file name within each directory
pub fn find_source_files(root: &Path, config: &MigrationConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, root, &config.excluded_dir_markers));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.path().is_file()
            && entry.file_name().to_string_lossy().ends_with(config.extension.as_str())
        {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), count = files.len(), "discovered source files");
    Ok(files)
}
