//! Line cursor contract consumed by editor modes.
//!
//! A mode never owns the text it classifies. The host editor hands it a
//! cursor over one line at a time and expects exactly one token back per
//! call. [`CharStream`] is that cursor: a handful of required primitives
//! (remaining text, advance, back up, lexeme text, indentation) plus the
//! conveniences a hand-written scanner reaches for (`next`, `peek`, `eat`,
//! `eat_while`, anchored pattern matching), all derived from the primitives.
//!
//! [`StringStream`] is the reference implementation over a `&str` line. Hosts
//! with their own line storage implement [`CharStream`] directly.
//!
//! # Patterns
//!
//! Lookahead patterns are plain functions `fn(&str) -> Option<usize>` applied
//! to the remaining text of the line. A pattern returns the byte length of
//! its match when the text at the cursor matches, `None` otherwise. Matches
//! are always anchored at the cursor.

mod string_stream;

pub use string_stream::StringStream;

/// Character class predicate used by [`CharStream::eat_if`] and
/// [`CharStream::eat_while`].
pub type CharClass = fn(char) -> bool;

/// Anchored pattern: byte length of the match at the start of the text.
pub type Pattern = fn(&str) -> Option<usize>;

/// Cursor over a single line of text.
///
/// The cursor tracks two positions: the start of the current lexeme and the
/// read position. The host moves the lexeme start forward between tokens;
/// the mode only moves the read position.
pub trait CharStream {
    /// Text from the read position to the end of the line.
    fn rest(&self) -> &str;

    /// Move the read position forward by `bytes`.
    ///
    /// # Contract
    ///
    /// `bytes` must not exceed `self.rest().len()` and must land on a char
    /// boundary. All default methods uphold this.
    fn advance(&mut self, bytes: usize);

    /// Move the read position back by `chars` characters.
    fn back_up(&mut self, chars: usize);

    /// Text of the current lexeme (from lexeme start to read position).
    fn current(&self) -> &str;

    /// Indentation width of the whole line, in columns (tabs expanded).
    fn indentation(&self) -> usize;

    /// `true` when the read position is at the start of the line.
    fn sol(&self) -> bool;

    /// `true` when the read position is at the end of the line.
    fn eol(&self) -> bool {
        self.rest().is_empty()
    }

    /// Next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.advance(ch.len_utf8());
        Some(ch)
    }

    /// Consume the next character if it equals `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance(expected.len_utf8());
            true
        } else {
            false
        }
    }

    /// Consume the next character if it belongs to `class`.
    fn eat_if(&mut self, class: CharClass) -> Option<char> {
        let ch = self.peek()?;
        if class(ch) {
            self.advance(ch.len_utf8());
            Some(ch)
        } else {
            None
        }
    }

    /// Consume characters while they belong to `class`.
    ///
    /// Returns `true` if at least one character was consumed.
    fn eat_while(&mut self, class: CharClass) -> bool {
        let len: usize = self
            .rest()
            .chars()
            .take_while(|&c| class(c))
            .map(char::len_utf8)
            .sum();
        self.advance(len);
        len > 0
    }

    /// Consume whitespace (including no-break space).
    fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    /// Consume everything up to the end of the line.
    fn skip_to_end(&mut self) {
        let len = self.rest().len();
        self.advance(len);
    }

    /// Test for `literal` at the read position, consuming it when `consume`.
    fn match_str(&mut self, literal: &str, consume: bool) -> bool {
        if !self.rest().starts_with(literal) {
            return false;
        }
        if consume {
            self.advance(literal.len());
        }
        true
    }

    /// Apply an anchored `pattern` at the read position, consuming the
    /// match when `consume`.
    fn match_with(&mut self, pattern: Pattern, consume: bool) -> bool {
        match pattern(self.rest()) {
            Some(len) => {
                if consume {
                    self.advance(len);
                }
                true
            }
            None => false,
        }
    }
}

/// Column width of `text[..end]`, expanding tabs to `tab_size` stops.
///
/// Shared by [`StringStream::indentation`] and [`StringStream::column`];
/// exposed for hosts that need to agree with the stream on column math.
pub fn count_column(text: &str, end: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    let mut column = 0;
    let prefix = text.get(..end).unwrap_or(text);
    for ch in prefix.chars() {
        if ch == '\t' {
            column += tab_size - column % tab_size;
        } else {
            column += 1;
        }
    }
    column
}
