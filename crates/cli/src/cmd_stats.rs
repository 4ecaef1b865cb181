// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stats command implementation.

use acmatch::cli::{Cli, StatsArgs};
use acmatch::config;
use acmatch::dictionary::Dictionary;
use acmatch::patterns;
use acmatch::reader::FileReader;

/// Print dictionary and automaton sizes.
pub fn run(cli: &Cli, args: &StatsArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;
    let list = patterns::collect(&config.patterns, &args.dictionary, &FileReader::new())?;
    let dictionary = Dictionary::with_policy(&list.patterns, list.policy);
    let automaton = dictionary.automaton();

    println!("patterns: {}", dictionary.len());
    println!("distinct: {}", dictionary.ids().len());
    println!("states: {}", automaton.state_count());
    println!("max depth: {}", automaton.max_depth());
    Ok(())
}
