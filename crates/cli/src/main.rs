// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! acmatch CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use acmatch::cli::{Cli, Command};
use acmatch::error::ExitCode;

mod cmd_search;
mod cmd_stats;

fn init_logging() {
    let filter = EnvFilter::try_from_env("ACMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("acmatch: {}", e);
            match e.downcast_ref::<acmatch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Search(args)) => cmd_search::run(&cli, args),
        Some(Command::Stats(args)) => {
            cmd_stats::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
    }
}
