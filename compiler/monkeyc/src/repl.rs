//! Line-oriented token printer.
//!
//! Each line read from the input gets a fresh [`Scanner`]; its tokens are
//! written one per line until end of input. No state is kept between lines.
//! Illegal tokens are printed like any other token.

use std::io::{BufRead, Write};

use monkey_lexer::Scanner;

use crate::config::ReplConfig;
use crate::error::CliError;

/// Interactive driver over any input and output stream.
pub struct Repl<R, W> {
    input: R,
    output: W,
    config: ReplConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run until the input is exhausted.
    ///
    /// Writes the prompt, reads one line, prints its tokens, and repeats.
    /// Returns `Ok(())` at end of input.
    pub fn run(&mut self) -> Result<(), CliError> {
        let mut line = String::new();
        loop {
            self.output
                .write_all(self.config.prompt.as_bytes())
                .and_then(|()| self.output.flush())
                .map_err(CliError::Output)?;

            line.clear();
            let read = self.input.read_line(&mut line).map_err(CliError::Input)?;
            if read == 0 {
                tracing::debug!("input exhausted");
                return Ok(());
            }

            let source = line.trim_end_matches(['\n', '\r']);
            let count = write_tokens(&mut self.output, source).map_err(CliError::Output)?;
            tracing::debug!(tokens = count, "scanned line");
        }
    }

    /// Consume the driver and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Write every token of `source` before end of input, one per line.
///
/// Returns the number of tokens written.
pub fn write_tokens(out: &mut impl Write, source: &str) -> std::io::Result<usize> {
    let mut count = 0;
    for token in Scanner::new(source) {
        writeln!(out, "{token}")?;
        count += 1;
    }
    Ok(count)
}
