use crate::file_processor::{FileReport, FileStatus, RunSummary};
use crate::migrator::MigrationStep;
use colored::*;
use similar::{ChangeTag, TextDiff};
use std::io::IsTerminal;

pub struct DiffFormatter;

impl DiffFormatter {
    /// Auto-detect if we should use colors
    pub fn should_use_color() -> bool {
        // Check NO_COLOR env var (https://no-color.org/)
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }

        std::io::stdout().is_terminal()
    }

    pub fn format_dry_run_header(use_color: bool) -> String {
        let text = "🔍 DRY-RUN MODE - no files will be modified\n";
        if use_color {
            format!("{}\n", text.bold().yellow())
        } else {
            format!("{}\n", text)
        }
    }

    pub fn format_found(count: usize) -> String {
        format!("Found {} Java file{}\n", count, if count == 1 { "" } else { "s" })
    }

    pub fn format_processing(file_path: &std::path::Path, use_color: bool) -> String {
        let path = file_path.display().to_string();
        if use_color {
            format!("Processing: {}\n", path.bold().cyan())
        } else {
            format!("Processing: {}\n", path)
        }
    }

    /// Per-file transcript lines, everything after the "Processing:" line
    pub fn format_file_report(report: &FileReport, use_color: bool) -> String {
        let mut output = String::new();

        if report.status == FileStatus::Skipped {
            let line = "  ⏭️  No System.out/err - skipping";
            output.push_str(&Self::paint(line, use_color, |s| s.dimmed()));
            return output;
        }

        for step in &report.steps {
            let line = match step {
                MigrationStep::AddedImports => "  ➕ Adding SLF4J imports".to_string(),
                MigrationStep::AddedLogger { class_name } => {
                    format!("  ➕ Adding logger for class {}", class_name)
                }
            };
            output.push_str(&Self::paint(&line, use_color, |s| s.green()));
        }

        for warning in &report.warnings {
            let line = format!("  ⚠️  {}", warning);
            output.push_str(&Self::paint(&line, use_color, |s| s.yellow()));
        }

        let line = match report.status {
            FileStatus::Updated => "  ✅ File updated",
            FileStatus::WouldUpdate => "  🔍 [DRY-RUN] Would update",
            FileStatus::Unchanged | FileStatus::Skipped => "  ℹ️  No changes needed",
        };
        let painted = match report.status {
            FileStatus::Updated => Self::paint(line, use_color, |s| s.green().bold()),
            FileStatus::WouldUpdate => Self::paint(line, use_color, |s| s.yellow().bold()),
            _ => Self::paint(line, use_color, |s| s.normal()),
        };
        output.push_str(&painted);

        output
    }

    pub fn format_error(err: &anyhow::Error, use_color: bool) -> String {
        let line = format!("  ❌ {:#}", err);
        Self::paint(&line, use_color, |s| s.red().bold())
    }

    /// Changed lines of a would-be update, with `context` unchanged lines around each hunk
    pub fn format_preview_diff(original: &str, migrated: &str, context: usize, use_color: bool) -> String {
        let diff = TextDiff::from_lines(original, migrated);
        let mut output = String::new();

        for (idx, group) in diff.grouped_ops(context).iter().enumerate() {
            if idx > 0 {
                output.push_str(&Self::paint("     ...", use_color, |s| s.dimmed()));
            }

            for op in group {
                for change in diff.iter_changes(op) {
                    let (indicator, line_no) = match change.tag() {
                        ChangeTag::Delete => ("-", change.old_index()),
                        ChangeTag::Insert => ("+", change.new_index()),
                        ChangeTag::Equal => (" ", change.new_index()),
                    };
                    let line_no = line_no.map(|n| (n + 1).to_string()).unwrap_or_default();
                    let content = change.value().trim_end_matches(['\r', '\n']);
                    let line = format!("    L{}: {} {}", line_no, indicator, content);

                    let painted = match change.tag() {
                        ChangeTag::Delete => Self::paint(&line, use_color, |s| s.red()),
                        ChangeTag::Insert => Self::paint(&line, use_color, |s| s.green()),
                        ChangeTag::Equal => Self::paint(&line, use_color, |s| s.dimmed()),
                    };
                    output.push_str(&painted);
                }
            }
        }

        output
    }

    pub fn format_summary(summary: &RunSummary, dry_run: bool, use_color: bool) -> String {
        let mut output = String::new();

        let prefix = if dry_run { "[DRY-RUN] " } else { "" };
        let counts = format!("{}/{}", summary.updated, summary.found);
        if use_color {
            output.push_str(&format!("\n{}Files updated: {}\n", prefix, counts.bold().white()));
        } else {
            output.push_str(&format!("\n{}Files updated: {}\n", prefix, counts));
        }

        if summary.failed > 0 {
            let line = format!("Files failed: {}", summary.failed);
            output.push_str(&Self::paint(&line, use_color, |s| s.red().bold()));
        }

        if dry_run {
            output.push_str("\n💡 Run without --dry-run to apply the changes\n");
        }

        output
    }

    fn paint(line: &str, use_color: bool, style: impl Fn(&str) -> ColoredString) -> String {
        if use_color {
            format!("{}\n", style(line))
        } else {
            format!("{}\n", line)
        }
    }
}
