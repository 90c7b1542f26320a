//! Reserved-word resolution.
//!
//! The table is a `const` array, so it is immutable and shared by every
//! scanner without synchronization. Matching is exact and case-sensitive:
//! `Fn` and `LET` are ordinary identifiers.

use crate::token::TokenKind;

/// Reserved words and the kinds they resolve to.
pub const KEYWORDS: [(&str, TokenKind); 2] = [("fn", TokenKind::Function), ("let", TokenKind::Let)];

/// Look up a reserved word by exact spelling.
///
/// Returns `None` for anything not in [`KEYWORDS`].
#[inline]
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|&&(word, _)| word == text)
        .map(|&(_, kind)| kind)
}

/// Resolve an identifier-shaped run to its keyword kind, or
/// [`TokenKind::Ident`] if it is not reserved.
#[inline]
pub fn lookup_ident(text: &str) -> TokenKind {
    keyword(text).unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests;
