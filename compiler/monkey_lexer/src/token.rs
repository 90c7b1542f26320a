//! Token kinds and the token value produced by the scanner.

use std::borrow::Cow;
use std::fmt;

/// Classification of a token.
///
/// The set is closed: every byte sequence the scanner sees maps onto exactly
/// one of these kinds. Error conditions are encoded as [`TokenKind::Illegal`],
/// never as `Result::Err`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte no other rule accepts.
    Illegal,
    /// End of input. Repeats forever once reached.
    EndOfInput,

    // Identifiers & Literals
    Ident,
    Int,

    // Operators
    Assign,      // =
    Plus,        // +
    Minus,       // -
    Bang,        // !
    Asterisk,    // *
    Slash,       // /
    LessThan,    // <
    GreaterThan, // >
    Equal,       // ==
    NotEqual,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function, // fn
    Let,      // let
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 22] = [
        TokenKind::Illegal,
        TokenKind::EndOfInput,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Function,
        TokenKind::Let,
    ];

    /// The fixed source spelling of this kind, if it has one.
    ///
    /// Operators, delimiters, and keywords always have the same text.
    /// Identifiers, integers, illegal bytes, and end of input do not.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Bang => Some("!"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::LessThan => Some("<"),
            TokenKind::GreaterThan => Some(">"),
            TokenKind::Equal => Some("=="),
            TokenKind::NotEqual => Some("!="),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::Illegal | TokenKind::EndOfInput | TokenKind::Ident | TokenKind::Int => {
                None
            }
        }
    }

    /// Stable type name used when rendering tokens.
    ///
    /// Fixed-spelling punctuation renders as its own spelling; everything
    /// else renders as an upper-case tag.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Bang
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::LessThan
            | TokenKind::GreaterThan
            | TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace => self.lexeme().unwrap_or_default(),
        }
    }

    /// Returns `true` for reserved-word kinds.
    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Function | TokenKind::Let)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of source text.
///
/// `text` borrows from the scanned input for every token except end of
/// input (empty) and illegal non-ASCII bytes, whose text is synthesized.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: Cow<'a, str>,
}

impl<'a> Token<'a> {
    /// Create a token whose text is a slice of the input.
    #[inline]
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Token {
            kind,
            text: Cow::Borrowed(text),
        }
    }

    /// The end-of-input token.
    pub const EOF: Token<'static> = Token {
        kind: TokenKind::EndOfInput,
        text: Cow::Borrowed(""),
    };

    /// Returns `true` if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Detach the token from the lifetime of the scanned input.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind.name(), self.text)
    }
}
