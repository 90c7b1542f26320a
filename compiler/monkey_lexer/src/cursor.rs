//! Read window over the input bytes.
//!
//! The cursor holds the byte under scan (`current`), its index
//! (`position`), and the index of the next byte to read (`read_position`).
//! All three move together through [`Cursor::advance`]; nothing else
//! mutates them and nothing rewinds them.
//!
//! Past the end of the input `current` is the sentinel `0x00`. An interior
//! NUL byte also reads as `0x00`; [`Cursor::is_eof`] tells the two apart by
//! comparing `position` against the input length.

/// Byte returned by [`Cursor::current`] and [`Cursor::peek`] past the end of input.
pub const SENTINEL: u8 = 0;

/// Forward-only cursor over a source string, one byte at a time.
///
/// # Invariant
///
/// After construction `read_position == position + 1`, and `current` is
/// either `input[position]` or [`SENTINEL`] when `position` is past the end.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
    read_position: usize,
    current: u8,
}

impl<'a> Cursor<'a> {
    /// Create a cursor holding the first byte of `input`.
    ///
    /// Performs one [`advance`](Self::advance) up front, so `current` is
    /// valid before any token is requested.
    pub fn new(input: &'a str) -> Self {
        let mut cursor = Self {
            input,
            position: 0,
            read_position: 0,
            current: SENTINEL,
        };
        cursor.advance();
        cursor
    }

    /// Move the read window forward by exactly one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.byte_at(self.read_position);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// The byte that the next [`advance`](Self::advance) would load, without
    /// moving.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    /// The byte at `position`, or [`SENTINEL`] past the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Index of the byte held in `current`.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the next byte to read.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Returns `true` once `position` has passed the last input byte.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Advance while `pred` holds for `current`, returning the consumed run.
    ///
    /// # Contract
    ///
    /// `pred(SENTINEL)` must return `false`, so the loop stops at end of
    /// input. Every predicate the scanner uses is ASCII-only, which also
    /// keeps the run on `char` boundaries.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.position;
        while pred(self.current) {
            self.advance();
        }
        self.slice(start, self.position)
    }

    /// Source text between two byte offsets.
    ///
    /// Offsets are clamped to the input, and a range that does not fall on
    /// `char` boundaries yields an empty string.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let end = end.min(self.input.len());
        self.input.get(start.min(end)..end).unwrap_or_default()
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.input.as_bytes().get(index).copied().unwrap_or(SENTINEL)
    }
}
