//! CLI entry point for tile and grout layout modelling

use clap::Parser;
use tilegrout::io::cli::{Cli, JobRunner};

fn main() -> tilegrout::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_module("tilegrout", cli.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut runner = JobRunner::new(cli);
    runner.run()
}
