//! Lexical scanner for the Monkey language.
//!
//! Converts source text into a finite stream of classified [`Token`]s.
//! Scanning is defined over single bytes, not Unicode code points: any byte
//! outside the recognized ASCII set becomes a [`TokenKind::Illegal`] token.
//!
//! # Architecture
//!
//! - [`token`]: the closed set of [`TokenKind`]s and the [`Token`] value
//! - [`keywords`]: the static reserved-word table
//! - [`cursor`]: the forward-only byte window the scanner advances
//! - [`scanner`]: the pull-based [`Scanner`] state machine
//!
//! ```
//! use monkey_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("let five = 5;").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Let,
//!         TokenKind::Ident,
//!         TokenKind::Assign,
//!         TokenKind::Int,
//!         TokenKind::Semicolon,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```

pub mod cursor;
pub mod keywords;
pub mod scanner;
pub mod token;

pub use keywords::{keyword, lookup_ident, KEYWORDS};
pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind};
