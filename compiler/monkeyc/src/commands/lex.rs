//! `monkey lex`: print the token stream of a whole file.

use std::io::Write;
use std::path::Path;

use monkey_lexer::Scanner;

use crate::error::CliError;

/// Lex a file and write its tokens, one per line, under a header and
/// followed by a `<n> tokens` summary line.
///
/// Returns the number of tokens before end of input.
#[tracing::instrument(level = "debug", skip(out))]
pub fn lex_file(path: &Path, out: &mut impl Write) -> Result<usize, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut count = 0;
    writeln!(out, "Tokens for '{}':", path.display()).map_err(CliError::Output)?;
    for token in Scanner::new(&content) {
        writeln!(out, "  {token}").map_err(CliError::Output)?;
        count += 1;
    }
    writeln!(out, "{count} tokens").map_err(CliError::Output)?;

    tracing::debug!(bytes = content.len(), tokens = count, "scanned file");
    Ok(count)
}
