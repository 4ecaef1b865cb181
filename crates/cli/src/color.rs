// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and match highlighting.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. otherwise color only when stdout is a TTY

use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Environment variable: disables color output (any value).
pub const NO_COLOR: &str = "NO_COLOR";
/// Environment variable: forces color output (any value).
pub const COLOR: &str = "COLOR";

/// Resolve color choice from flags and environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    if std::env::var_os(NO_COLOR).is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os(COLOR).is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for match output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Cyan input name.
    pub fn source() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow offsets.
    pub fn offset() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Bold red matched pattern.
    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
