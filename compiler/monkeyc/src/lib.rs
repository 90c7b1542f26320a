//! Command-line driver for the Monkey lexer.
//!
//! The scanner lives in [`monkey_lexer`]; this crate wraps it in an
//! interactive line-by-line token printer and a `lex` command for files.
//!
//! # Modules
//!
//! - [`config`]: argument parsing and REPL settings
//! - [`repl`]: the line-oriented driver loop
//! - [`commands`]: handlers invoked by the `monkey` binary
//! - [`error`]: [`CliError`]
//! - [`logging`]: `tracing` subscriber setup

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod repl;

pub use config::{parse_args, Command, ReplConfig};
pub use error::CliError;
pub use repl::Repl;
