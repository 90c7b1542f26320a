//! Command-line and environment configuration.
//!
//! Arguments are parsed by hand. The prompt can come from the
//! `MONKEY_PROMPT` environment variable or the `--prompt=` flag; the flag
//! wins. Log filtering is configured separately through `RUST_LOG`
//! (see [`crate::logging`]).

use std::path::PathBuf;

use crate::error::CliError;

/// Prompt written before each line when none is configured.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Environment variable overriding [`DEFAULT_PROMPT`].
pub const PROMPT_ENV: &str = "MONKEY_PROMPT";

/// Settings for the interactive token printer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ReplConfig {
    /// Build a config from an optional environment prompt.
    pub fn with_env_prompt(env_prompt: Option<String>) -> Self {
        env_prompt.map_or_else(Self::default, |prompt| Self { prompt })
    }
}

/// A parsed driver invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read lines from stdin and print their tokens.
    Repl(ReplConfig),
    /// Print the tokens of a whole file.
    Lex(PathBuf),
    Help,
    Version,
}

/// Parse arguments (without the program name).
///
/// `env_prompt` is the value of [`PROMPT_ENV`], if set. No arguments at all
/// starts the REPL.
pub fn parse_args(args: &[String], env_prompt: Option<String>) -> Result<Command, CliError> {
    let Some(command) = args.first() else {
        return Ok(Command::Repl(ReplConfig::with_env_prompt(env_prompt)));
    };

    match command.as_str() {
        "repl" => {
            let mut config = ReplConfig::with_env_prompt(env_prompt);
            for arg in &args[1..] {
                if let Some(prompt) = arg.strip_prefix("--prompt=") {
                    config.prompt = prompt.to_string();
                } else {
                    return Err(CliError::Usage(format!("unknown repl option '{arg}'")));
                }
            }
            Ok(Command::Repl(config))
        }
        "lex" => match &args[1..] {
            [path] => Ok(Command::Lex(PathBuf::from(path))),
            [] => Err(CliError::Usage("missing file path for 'lex'".to_string())),
            [_, extra, ..] => Err(CliError::Usage(format!(
                "unexpected argument '{extra}' for 'lex'"
            ))),
        },
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    }
}

/// Usage text printed by `monkey help` and on usage errors.
pub const USAGE: &str = "\
Usage: monkey [command]

Commands:
  repl [--prompt=<s>]   Print the tokens of each line read from stdin (default)
  lex <file>            Print the tokens of a file
  help                  Show this message
  version               Show the version

Environment:
  MONKEY_PROMPT         Prompt for the repl (default \">> \")
  RUST_LOG              Log filter, e.g. monkey_lexer=trace";

#[cfg(test)]
mod tests;
