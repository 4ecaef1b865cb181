// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search command implementation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use acmatch::cli::{Cli, SearchArgs};
use acmatch::color::resolve_color;
use acmatch::config;
use acmatch::dictionary::Dictionary;
use acmatch::error::{ExitCode, Result};
use acmatch::output::json::{JsonFormatter, JsonOutput};
use acmatch::output::text::TextFormatter;
use acmatch::output::{FormatOptions, InputReport, OutputFormat, total_matches};
use acmatch::patterns;
use acmatch::reader::{FileReader, STDIN_NAME};

/// Run the search command.
pub fn run(cli: &Cli, args: &SearchArgs) -> anyhow::Result<ExitCode> {
    let start = Instant::now();
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;
    let reader = FileReader::new();

    let list = patterns::collect(&config.patterns, &args.dictionary, &reader)?;
    let dictionary = Dictionary::with_policy(&list.patterns, list.policy);
    tracing::debug!(
        patterns = dictionary.len(),
        states = dictionary.automaton().state_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dictionary ready"
    );

    let inputs = input_paths(&args.inputs);

    // The automaton is read-only, so every input scans in parallel against it.
    let reports = inputs
        .par_iter()
        .map(|path| scan(&dictionary, &reader, path))
        .collect::<Result<Vec<_>>>()?;

    let total = total_matches(&reports);
    tracing::debug!(
        inputs = reports.len(),
        total,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "search finished"
    );

    let format = args
        .output
        .or(config.output.format)
        .unwrap_or_default();
    match format {
        OutputFormat::Text => {
            let options = FormatOptions {
                show_source: reports.len() > 1,
                count_only: args.count,
            };
            let mut formatter =
                TextFormatter::new(resolve_color(args.color, args.no_color), options);
            for report in &reports {
                formatter.write_report(report)?;
            }
            formatter.flush()?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout().lock());
            formatter.write(&JsonOutput::new(&reports, args.count))?;
        }
    }

    Ok(if total > 0 {
        ExitCode::Success
    } else {
        ExitCode::NoMatches
    })
}

/// Inputs to scan; standard input when none are given.
fn input_paths(inputs: &[PathBuf]) -> Vec<PathBuf> {
    if inputs.is_empty() {
        vec![PathBuf::from(STDIN_NAME)]
    } else {
        inputs.to_vec()
    }
}

fn scan<'d>(dictionary: &'d Dictionary, reader: &FileReader, path: &Path) -> Result<InputReport<'d>> {
    let text = if path == Path::new(STDIN_NAME) {
        reader.read_stdin()?
    } else {
        reader.read_text(path)?
    };
    tracing::trace!(input = %path.display(), chars = text.chars().count(), "scanning");

    Ok(InputReport {
        source: path.display().to_string(),
        matches: dictionary.find(&text)?,
    })
}
