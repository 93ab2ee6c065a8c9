use anyhow::Result;
use clap::Parser;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "

License: MIT
Rust Edition: 2024"
);

#[derive(Parser)]
#[command(name = "slf4j-migrate")]
#[command(about = "Rewrite System.out/System.err calls in Java sources to SLF4J logging")]
#[command(long_about = "slf4j-migrate walks the current directory and migrates Java sources
from console output to SLF4J.

For every .java file that mentions System.out or System.err it:
  • Adds `import org.slf4j.Logger;` and `import org.slf4j.LoggerFactory;`
    after the last import, unless already present
  • Adds `private static final Logger log = LoggerFactory.getLogger(X.class);`
    right after the opening brace of the public class, unless already present
  • Rewrites System.out.println(...) to log.info(...)
  • Rewrites System.err.println(...) to log.error(...)

Directories whose path contains `target` or `.git` are never entered.
The migration is idempotent: running it twice changes nothing the second time.

Matching is regex based, not a Java parser. Calls it cannot rewrite are
left in place and reported as warnings.

LOGGING:
  Diagnostics go to stderr. Set RUST_LOG (e.g. RUST_LOG=slf4j_migrate=debug)
  for more detail.

EXAMPLES:
  slf4j-migrate --dry-run    Preview what would change
  slf4j-migrate              Apply the migration in place")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
struct Cli {
    /// Dry run mode (preview changes without applying)
    #[arg(short = 'd', long = "dry-run")]
    #[arg(help = "Preview changes without modifying files\nShows a diff of every file that would be updated.")]
    dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub dry_run: bool,
}

pub fn parse_args() -> Result<Args> {
    let cli = Cli::parse();
    Ok(Args {
        dry_run: cli.dry_run,
    })
}
