//! CLI entry point for the pattern lattice inspector

use clap::Parser;
use gridlattice::io::cli::{Cli, Inspector};
use gridlattice::io::error::WithPath;
use gridlattice::io::logging;
use std::io::Write;
use std::path::Path;

fn main() -> gridlattice::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    let report = Inspector::new(cli).run()?;
    std::io::stdout()
        .lock()
        .write_all(report.as_bytes())
        .with_path(Path::new("<stdout>"), "write report")
}
