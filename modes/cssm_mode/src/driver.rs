//! Whole-document driver.
//!
//! Editors drive a mode one line and one token at a time. These helpers run
//! that loop over a complete document held in memory: one [`StringStream`]
//! per line, one [`ParseState`] carried from line to line.
//!
//! Columns are byte offsets within a line. Lines are split on `\n`; a
//! trailing `\r` is not part of the line.

use cssm_stream::{CharStream, StringStream};
use tracing::warn;

use crate::state::ParseState;
use crate::token::{Token, TokenKind, TokenStyle};
use crate::CssMode;

/// Calls that may fail to advance the stream before the driver skips a
/// character itself.
pub const MAX_STALLED_CALLS: usize = 10;

/// A token positioned in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineToken<'a> {
    /// Zero-based line number.
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    pub style: TokenStyle,
    pub kind: TokenKind,
}

/// The token under a cursor position, with the state right after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenAt {
    pub start: usize,
    pub end: usize,
    pub string: String,
    pub style: TokenStyle,
    pub kind: TokenKind,
    pub state: ParseState,
}

/// Lines of `text`, without terminators.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Read one token, retrying calls that consume nothing.
fn read_token(mode: &CssMode, stream: &mut StringStream<'_>, state: &mut ParseState) -> Token {
    for _ in 0..MAX_STALLED_CALLS {
        let token = mode.next_token(stream, state);
        if stream.pos() > stream.start() {
            return token;
        }
    }
    warn!(
        line = stream.line(),
        pos = stream.pos(),
        "mode failed to advance the stream, skipping a character"
    );
    stream.next();
    Token::bare(TokenKind::Unclassified)
}

/// Tokenize one line, advancing `state`.
fn run_line<'a>(
    mode: &CssMode,
    line_no: usize,
    line: &'a str,
    state: &mut ParseState,
    sink: &mut impl FnMut(LineToken<'a>),
) {
    let mut stream = StringStream::new(line, mode.config().tab_size);
    while !stream.eol() {
        stream.start_token();
        let token = read_token(mode, &mut stream, state);
        let (start, end) = (stream.start(), stream.pos());
        sink(LineToken {
            line: line_no,
            start,
            end,
            text: &line[start..end],
            style: token.style,
            kind: token.kind,
        });
    }
}

/// Tokenize a whole document, handing every token (whitespace included) to
/// `sink`.
///
/// Returns the state after the last line.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn run_mode<'a>(
    mode: &CssMode,
    text: &'a str,
    mut sink: impl FnMut(LineToken<'a>),
) -> ParseState {
    let mut state = mode.start_state(0);
    for (line_no, line) in lines(text).enumerate() {
        run_line(mode, line_no, line, &mut state, &mut sink);
    }
    state
}

/// All tokens of a document, whitespace included.
pub fn highlight<'a>(mode: &CssMode, text: &'a str) -> Vec<LineToken<'a>> {
    let mut tokens = Vec::new();
    run_mode(mode, text, |token| tokens.push(token));
    tokens
}

/// The token at column `ch` of `line`: the last token read before the
/// cursor, covering `ch` or ending exactly at it.
///
/// At column 0 the result is an empty token. `None` when `line` is past the
/// end of the document.
pub fn token_at(mode: &CssMode, text: &str, line: usize, ch: usize) -> Option<TokenAt> {
    let mut state = mode.start_state(0);
    let mut all = lines(text);
    for (line_no, before) in all.by_ref().take(line).enumerate() {
        run_line(mode, line_no, before, &mut state, &mut |_| {});
    }
    let target = all.next()?;

    let mut stream = StringStream::new(target, mode.config().tab_size);
    let mut token = Token::bare(TokenKind::Unclassified);
    while stream.pos() < ch && !stream.eol() {
        stream.start_token();
        token = read_token(mode, &mut stream, &mut state);
    }
    Some(TokenAt {
        start: stream.start(),
        end: stream.pos(),
        string: stream.current().to_string(),
        style: token.style,
        kind: token.kind,
        state,
    })
}

/// Indentation for `line` given the state at the end of the line before.
pub fn indent_line(mode: &CssMode, state: &ParseState, line: &str) -> usize {
    mode.indent(state, line.trim_start())
}

/// Recompute the leading whitespace of every line.
///
/// Each line is indented with spaces from the state after the already
/// reindented lines above it. Blank lines become empty. Running the result
/// through again changes nothing.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn reindent(mode: &CssMode, text: &str) -> String {
    let mut state = mode.start_state(0);
    let mut out = Vec::new();
    for (line_no, line) in lines(text).enumerate() {
        let content = line.trim_start();
        let line = if content.is_empty() {
            String::new()
        } else {
            let indent = indent_line(mode, &state, content);
            format!("{:indent$}{content}", "")
        };
        run_line(mode, line_no, &line, &mut state, &mut |_| {});
        out.push(line);
    }
    out.join("\n")
}

#[cfg(test)]
mod tests;
