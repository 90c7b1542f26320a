//! Command handlers for the `monkey` CLI.
//!
//! Each handler writes to the stream it is given so it can be driven from
//! tests; `main` passes the locked stdout handle.

mod lex;

pub use lex::lex_file;

use std::io::Write;

use crate::config::{parse_args, Command, ReplConfig, USAGE};
use crate::error::CliError;
use crate::repl::Repl;

/// Parse `args` (without the program name) and run the selected command.
///
/// `env_prompt` is the value of `MONKEY_PROMPT`, if set. Output goes to
/// `out`; the REPL reads from stdin.
pub fn run(
    args: &[String],
    env_prompt: Option<String>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match parse_args(args, env_prompt)? {
        Command::Repl(config) => run_repl(config, out),
        Command::Lex(path) => lex_file(&path, out).map(|_| ()),
        Command::Help => print_usage(out),
        Command::Version => print_version(out),
    }
}

/// Run the interactive driver on stdin, writing to `out`.
pub fn run_repl(config: ReplConfig, out: &mut impl Write) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    Repl::new(stdin.lock(), out, config).run()
}

/// Write the usage text.
pub fn print_usage(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{USAGE}").map_err(CliError::Output)
}

/// Write the program name and version.
pub fn print_version(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "monkey {}", env!("CARGO_PKG_VERSION")).map_err(CliError::Output)
}

#[cfg(test)]
mod tests;
