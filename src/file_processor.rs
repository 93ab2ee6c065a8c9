use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error_helpers::{describe_io_error, temp_file_error};
use crate::migrator::{Migration, MigrationStep, MigrationWarning, Migrator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Skipped,      // No console output calls
    Unchanged,    // Relevant, but nothing to rewrite
    Updated,      // Written back to disk
    WouldUpdate,  // Changed, but dry run
}

#[derive(Debug)]
pub struct FileReport {
    pub status: FileStatus,
    pub steps: Vec<MigrationStep>,
    pub warnings: Vec<MigrationWarning>,
    pub rewritten_calls: usize,
    pub original: String,
    pub migrated: String,
}

impl FileReport {
    /// Whether this file counts towards "files updated"
    pub fn is_changed(&self) -> bool {
        matches!(self.status, FileStatus::Updated | FileStatus::WouldUpdate)
    }
}

/// Totals for one run over a tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub found: usize,
    pub updated: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &FileReport) {
        if report.is_changed() {
            self.updated += 1;
        }
    }
}

pub struct FileProcessor {
    migrator: Migrator,
    dry_run: bool,
}

impl FileProcessor {
    pub fn new(migrator: Migrator, dry_run: bool) -> Self {
        Self { migrator, dry_run }
    }

    /// Migrate one file, writing it back unless this is a dry run
    pub fn process_file(&self, file_path: &Path) -> Result<FileReport> {
        let original = fs::read_to_string(file_path)
            .map_err(|e| anyhow::anyhow!(describe_io_error(file_path, "reading", &e)))?;

        let outcome = match self.migrator.migrate(&original)? {
            Migration::NotRelevant => {
                return Ok(FileReport {
                    status: FileStatus::Skipped,
                    steps: Vec::new(),
                    warnings: Vec::new(),
                    rewritten_calls: 0,
                    migrated: original.clone(),
                    original,
                });
            }
            Migration::Transformed(outcome) => outcome,
        };

        for warning in &outcome.warnings {
            tracing::debug!(file = %file_path.display(), "{}", warning);
        }

        let status = if outcome.content == original {
            FileStatus::Unchanged
        } else if self.dry_run {
            FileStatus::WouldUpdate
        } else {
            write_in_place(file_path, &outcome.content)?;
            tracing::info!(
                file = %file_path.display(),
                calls = outcome.rewritten_calls,
                "file updated"
            );
            FileStatus::Updated
        };

        Ok(FileReport {
            status,
            steps: outcome.steps,
            warnings: outcome.warnings,
            rewritten_calls: outcome.rewritten_calls,
            original,
            migrated: outcome.content,
        })
    }
}

/// Replace `file_path` with `content` through a temp file next to the real file.
///
/// Symlinks are resolved first so the link survives and its target is the
/// file that gets rewritten. The target's permissions are carried over.
fn write_in_place(file_path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(file_path)
        .map_err(|e| anyhow::anyhow!(describe_io_error(file_path, "writing", &e)))?;

    let parent_dir = target.parent().unwrap_or(Path::new("."));

    let permissions = fs::metadata(&target)
        .map_err(|e| anyhow::anyhow!(describe_io_error(&target, "writing", &e)))?
        .permissions();

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .map_err(|e| anyhow::anyhow!(temp_file_error(parent_dir, &e)))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temp file for {}", file_path.display()))?;
    temp_file
        .flush()
        .with_context(|| "Failed to flush temp file")?;

    fs::set_permissions(temp_file.path(), permissions)
        .with_context(|| format!("Failed to copy permissions of {}", target.display()))?;

    temp_file
        .persist(&target)
        .map_err(|e| anyhow::anyhow!(describe_io_error(&target, "writing", &e.error)))?;

    Ok(())
}
