//! Drives a migration over a directory tree and writes the progress transcript

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::config::MigrationConfig;
use crate::diff_formatter::DiffFormatter;
use crate::discovery::find_source_files;
use crate::file_processor::{FileProcessor, FileStatus, RunSummary};
use crate::migrator::Migrator;

/// Unchanged lines shown around each hunk of a dry-run preview
const PREVIEW_CONTEXT: usize = 1;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub dry_run: bool,
    pub use_color: bool,
}

/// Migrate every source file under `root`, one at a time in discovery order.
///
/// A file that fails to read or write is reported and counted in
/// `RunSummary::failed`; the remaining files are still processed.
pub fn run_migration(
    root: &Path,
    config: MigrationConfig,
    options: &RunOptions,
    out: &mut impl Write,
) -> Result<RunSummary> {
    let files = find_source_files(root, &config)?;
    let processor = FileProcessor::new(Migrator::new(config)?, options.dry_run);
    let color = options.use_color;

    if options.dry_run {
        write!(out, "{}", DiffFormatter::format_dry_run_header(color))?;
    }
    writeln!(out, "{}", DiffFormatter::format_found(files.len()))?;

    let mut summary = RunSummary {
        found: files.len(),
        ..Default::default()
    };

    for file_path in &files {
        write!(out, "{}", DiffFormatter::format_processing(file_path, color))?;

        match processor.process_file(file_path) {
            Ok(report) => {
                write!(out, "{}", DiffFormatter::format_file_report(&report, color))?;
                if report.status == FileStatus::WouldUpdate {
                    write!(
                        out,
                        "{}",
                        DiffFormatter::format_preview_diff(
                            &report.original,
                            &report.migrated,
                            PREVIEW_CONTEXT,
                            color
                        )
                    )?;
                }
                summary.record(&report);
            }
            Err(e) => {
                tracing::debug!(file = %file_path.display(), error = %e, "migration failed");
                write!(out, "{}", DiffFormatter::format_error(&e, color))?;
                summary.failed += 1;
            }
        }

        writeln!(out)?;
    }

    write!(
        out,
        "{}",
        DiffFormatter::format_summary(&summary, options.dry_run, color)
    )?;

    Ok(summary)
}
