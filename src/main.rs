use anyhow::Result;
use slf4j_migrate::cli::parse_args;
use slf4j_migrate::diff_formatter::DiffFormatter;
use slf4j_migrate::runner::{run_migration, RunOptions};
use slf4j_migrate::{logger, MigrationConfig};
use std::io;
use std::path::Path;

fn main() -> Result<()> {
    let args = parse_args()?;
    logger::init_logging()?;

    let options = RunOptions {
        dry_run: args.dry_run,
        use_color: DiffFormatter::should_use_color(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_migration(Path::new("."), MigrationConfig::default(), &options, &mut out)?;

    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} file(s) could not be migrated",
            summary.failed,
            summary.found
        );
    }

    Ok(())
}
