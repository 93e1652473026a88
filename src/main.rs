//! icon-builder CLI: regenerate dist/ and the manifests; use --check-env to only verify prerequisites.

use anyhow::Result;
use clap::Parser;
use icon_builder::engine::arg_parser::Cli;
use icon_builder::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
