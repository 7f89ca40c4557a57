//! CLI entry point for the bordered RGB cell pattern generator

use cellpattern::io::cli::{Cli, PatternJob};
use cellpattern::io::configuration::DEFAULT_LOG_FILTER;
use clap::Parser;

fn main() -> cellpattern::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    let job = PatternJob::new(cli);
    job.run()?;
    Ok(())
}
