//! I/O Docs Generator - Command-line tool for generating Mashery I/O Docs.
//!
//! # Usage
//!
//! ```bash
//! iodocs-from-source [OPTIONS] --base-path <BASE_PATH> <PROJECT_PATH>
//! ```
//!
//! # Examples
//!
//! ```bash
//! iodocs-from-source ./my-api -b http://api.example.com/ --title "Example API" -o iodocs.json
//! iodocs-from-source ./my-api -b http://api.example.com/ -e extensions.yaml -v
//! ```

use anyhow::Result;
use clap::Parser;
use iodocs_from_source::cli;
use log::info;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // RUST_LOG still overrides the level chosen here
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    info!("I/O Docs Generator starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("I/O Docs generation completed successfully");

    Ok(())
}
