//! CLI entry point for screen texture generation

use cinetile::io::cli::{Cli, init_logging};
use clap::Parser;

fn main() -> cinetile::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    cli.run()
}
