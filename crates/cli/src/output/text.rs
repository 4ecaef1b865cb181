//! Text output formatter.
//!
//! One line per match, in scan order:
//! ```text
//! [<source>:]<start>,<end>: <pattern>
//! ```
//! With `--count`, one `[<source>:]<count>` line per input instead.

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{FormatOptions, InputReport};
use crate::color::scheme;
use crate::dictionary::WordMatch;

/// Text output formatter with color support.
pub struct TextFormatter<W> {
    out: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn new(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::with_writer(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn with_writer(out: W, options: FormatOptions) -> Self {
        Self { out, options }
    }

    /// Write all lines for one input (streaming).
    pub fn write_report(&mut self, report: &InputReport<'_>) -> std::io::Result<()> {
        if self.options.count_only {
            self.write_source(&report.source)?;
            writeln!(self.out, "{}", report.matches.len())?;
            return Ok(());
        }

        for m in &report.matches {
            self.write_source(&report.source)?;
            self.write_match(m)?;
        }
        Ok(())
    }

    fn write_source(&mut self, source: &str) -> std::io::Result<()> {
        if self.options.show_source {
            self.out.set_color(&scheme::source())?;
            write!(self.out, "{}", source)?;
            self.out.reset()?;
            write!(self.out, ":")?;
        }
        Ok(())
    }

    fn write_match(&mut self, m: &WordMatch<'_>) -> std::io::Result<()> {
        self.out.set_color(&scheme::offset())?;
        write!(self.out, "{},{}", m.start, m.end)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        self.out.set_color(&scheme::pattern())?;
        write!(self.out, "{}", m.pattern)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
