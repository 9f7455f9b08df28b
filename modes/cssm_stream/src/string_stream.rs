//! Reference [`CharStream`] over a borrowed line.

use crate::{count_column, CharStream};

/// Cursor over one line of a document.
///
/// Positions are byte offsets into the line and always sit on char
/// boundaries. The host calls [`start_token`](Self::start_token) before each
/// mode call so that [`current`](CharStream::current) covers exactly the
/// lexeme the mode consumed.
#[derive(Clone, Copy, Debug)]
pub struct StringStream<'a> {
    line: &'a str,
    /// Read position.
    pos: usize,
    /// Start of the current lexeme.
    start: usize,
    tab_size: usize,
}

impl<'a> StringStream<'a> {
    /// Create a stream at the start of `line`.
    ///
    /// `tab_size` is used for column and indentation math; zero is treated
    /// as one.
    pub fn new(line: &'a str, tab_size: usize) -> Self {
        Self {
            line,
            pos: 0,
            start: 0,
            tab_size: tab_size.max(1),
        }
    }

    /// Mark the read position as the start of the next lexeme.
    #[inline]
    pub fn start_token(&mut self) {
        self.start = self.pos;
    }

    /// Read position (byte offset into the line).
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Start of the current lexeme (byte offset into the line).
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The whole line this stream walks over.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Column of the lexeme start, tabs expanded.
    pub fn column(&self) -> usize {
        count_column(self.line, self.start, self.tab_size)
    }
}

impl CharStream for StringStream<'_> {
    #[inline]
    fn rest(&self) -> &str {
        &self.line[self.pos..]
    }

    fn advance(&mut self, bytes: usize) {
        debug_assert!(
            self.line.is_char_boundary(self.pos + bytes),
            "advance({bytes}) from {} splits a character",
            self.pos
        );
        self.pos = (self.pos + bytes).min(self.line.len());
    }

    fn back_up(&mut self, chars: usize) {
        if chars == 0 {
            return;
        }
        self.pos = self.line[..self.pos]
            .char_indices()
            .rev()
            .nth(chars - 1)
            .map_or(0, |(idx, _)| idx);
    }

    #[inline]
    fn current(&self) -> &str {
        let start = self.start.min(self.pos);
        &self.line[start..self.pos]
    }

    fn indentation(&self) -> usize {
        let end = self
            .line
            .char_indices()
            .find(|&(_, c)| !c.is_whitespace())
            .map_or(self.line.len(), |(idx, _)| idx);
        count_column(self.line, end, self.tab_size)
    }

    #[inline]
    fn sol(&self) -> bool {
        self.pos == 0
    }
}

#[cfg(test)]
mod tests;
