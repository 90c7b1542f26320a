//! Pull-based scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Every call starts with the cursor on an unconsumed byte. Whitespace is
//! skipped, the current byte is classified, and the cursor is left on the
//! first byte after the token. There is no mode beyond the cursor position.
//!
//! Dispatch order matters in two places:
//! - `==` and `!=` are checked before the single-byte `=` and `!`.
//! - Identifier and integer runs consume their own bytes, so they return
//!   without the trailing advance the single-byte arms perform.
//!
//! End of input is terminal: once reached, every further call returns it
//! again without moving the cursor.

use std::borrow::Cow;
use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::keywords::lookup_ident;
use crate::token::{Token, TokenKind};

/// Byte-cursor scanner over a single source string.
///
/// Built once per input and discarded after end of input; it never rewinds.
/// Scanning never fails: bytes no rule accepts become
/// [`TokenKind::Illegal`] tokens.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned on the first byte of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::EndOfInput`] with empty text when the input is
    /// exhausted, and keeps returning it on every later call.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        match self.cursor.current() {
            b'=' => self.maybe_double(b'=', TokenKind::Equal, TokenKind::Assign),
            b'!' => self.maybe_double(b'=', TokenKind::NotEqual, TokenKind::Bang),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::LessThan),
            b'>' => self.single(TokenKind::GreaterThan),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            0 if self.cursor.is_eof() => Token::EOF,
            b if is_letter(b) => self.identifier(),
            b if is_digit(b) => self.integer(),
            _ => self.illegal(),
        }
    }

    /// Byte offset of the next unconsumed byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    // ─── Whitespace ────────────────────────────────────────────────

    #[inline]
    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    // ─── Operators & Delimiters ───────────────────────────────────

    /// Consume one byte and emit `kind` with that byte as text.
    #[inline]
    fn single(&mut self, kind: TokenKind) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.advance();
        Token::new(kind, self.cursor.slice(start, self.cursor.position()))
    }

    /// Emit `double` if the next byte is `second`, consuming both;
    /// otherwise emit `single` for the current byte alone.
    fn maybe_double(&mut self, second: u8, double: TokenKind, single: TokenKind) -> Token<'a> {
        if self.cursor.peek() != second {
            return self.single(single);
        }
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();
        Token::new(double, self.cursor.slice(start, self.cursor.position()))
    }

    // ─── Runs ──────────────────────────────────────────────────────

    fn identifier(&mut self) -> Token<'a> {
        let text = self.cursor.eat_while(is_letter);
        Token::new(lookup_ident(text), text)
    }

    fn integer(&mut self) -> Token<'a> {
        let text = self.cursor.eat_while(is_digit);
        Token::new(TokenKind::Int, text)
    }

    // ─── Errors ────────────────────────────────────────────────────

    fn illegal(&mut self) -> Token<'a> {
        let byte = self.cursor.current();
        let position = self.cursor.position();
        tracing::trace!(byte, position, "illegal byte");
        self.cursor.advance();
        let text = if byte.is_ascii() {
            Cow::Borrowed(self.cursor.slice(position, position + 1))
        } else {
            Cow::Owned(char::from(byte).to_string())
        };
        Token {
            kind: TokenKind::Illegal,
            text,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Yields every token before end of input, then `None` forever.
    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan `input` to completion.
///
/// The returned vector always ends with exactly one end-of-input token.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// Identifier bytes: `a-z`, `A-Z`, and `_`. Digits are not included.
#[inline]
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Integer bytes: `0-9`.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Bytes skipped between tokens: space, tab, newline, carriage return.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
