// src/bin/coursecloud.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use coursecloud_core::cli::{handlers, Cli};
use coursecloud_core::exit::CloudExit;

fn main() {
    match run() {
        Ok(code) => code.exit(),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(CloudExit::Error.code());
        }
    }
}

fn run() -> Result<CloudExit> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let engine = handlers::build_engine(&cli.data, cli.config.as_deref())?;
    handlers::dispatch(&engine, &cli.command, cli.json)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
