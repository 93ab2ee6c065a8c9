//! slf4j-migrate: move Java sources from System.out/System.err to SLF4J
//!
//! This library exposes the migration pipeline for the integration and
//! property-based tests. The main binary is at src/main.rs.

pub mod cli;
pub mod config;
pub mod diff_formatter;
pub mod discovery;
pub mod error_helpers;
pub mod file_processor;
pub mod logger;
pub mod migrator;
pub mod rewrite_rules;
pub mod runner;

// Re-export commonly used types for convenience
pub use config::MigrationConfig;
pub use discovery::find_source_files;
pub use file_processor::{FileProcessor, FileReport, FileStatus, RunSummary};
pub use migrator::{Migration, MigrationOutcome, MigrationStep, MigrationWarning, Migrator};
pub use rewrite_rules::{CallForm, OutputStream};
pub use runner::{run_migration, RunOptions};
