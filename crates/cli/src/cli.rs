// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use crate::trie::DuplicatePolicy;

/// Find every occurrence of many patterns in one pass
#[derive(Parser)]
#[command(name = "acmatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "ACMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report every pattern occurrence in the inputs
    Search(SearchArgs),
    /// Show dictionary and automaton sizes
    Stats(StatsArgs),
}

/// Dictionary sources given on the command line.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct PatternArgs {
    /// Pattern to search for (repeatable)
    #[arg(short = 'p', long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// File with one pattern per line (repeatable)
    #[arg(short = 'f', long = "pattern-file", value_name = "FILE")]
    pub pattern_files: Vec<PathBuf>,

    /// Report the first list index for duplicate patterns
    #[arg(long)]
    pub first_wins: bool,
}

impl PatternArgs {
    /// Duplicate policy from the flag, or `fallback` when unset.
    pub fn policy(&self, fallback: DuplicatePolicy) -> DuplicatePolicy {
        if self.first_wins {
            DuplicatePolicy::FirstWins
        } else {
            fallback
        }
    }
}

#[derive(clap::Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub dictionary: PatternArgs,

    /// Files to scan (`-` or none for stdin)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Print match counts only
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dictionary: PatternArgs,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
