//! Completion lists for the CSS-family modes.
//!
//! Given the token under the cursor and the parse state after it, pick the
//! keyword table that fits the position and return the entries that extend
//! the partial word. Completions always come from the full CSS tables,
//! whatever the dialect.

use cssm_mode::driver::{lines, token_at, TokenAt};
use cssm_mode::{CssMode, State, Style};
use cssm_tables::CssTables;
use tracing::debug;

/// Pseudo-classes offered after `:` in a selector.
pub const PSEUDO_CLASSES: &[&str] = &[
    "link",
    "visited",
    "active",
    "hover",
    "focus",
    "first-letter",
    "first-line",
    "first-child",
    "before",
    "after",
    "lang",
];

const IMPORTANT: &str = "!important";

/// Where a completion is requested.
#[derive(Clone, Copy, Debug)]
pub struct HintRequest<'a> {
    /// Full text of the cursor line.
    pub line: &'a str,
    /// Cursor column (byte offset in `line`).
    pub ch: usize,
    /// Token under the cursor, as returned by [`token_at`].
    pub token: &'a TokenAt,
}

/// Completion candidates and the column range they replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hints {
    pub list: Vec<&'static str>,
    pub from: usize,
    pub to: usize,
}

/// Table a completion list was drawn from.
#[derive(Clone, Copy, Debug)]
enum Source {
    PseudoClasses,
    Properties,
    Values,
    PropertyValues(&'static str),
    MediaQueries,
}

/// Completions for the position described by `request`.
///
/// `None` when the position offers nothing or no candidate extends the
/// word under the cursor.
pub fn css_hint(mode: &CssMode, request: &HintRequest<'_>) -> Option<Hints> {
    let token = request.token;

    if token.style.is(Style::Keyword) && IMPORTANT.starts_with(token.string.as_str()) {
        return Some(Hints {
            list: vec![IMPORTANT],
            from: token.start,
            to: token.end,
        });
    }

    let mut from = token.start;
    let mut to = request.ch;
    let mut word = token
        .string
        .get(..request.ch.saturating_sub(token.start))
        .unwrap_or(token.string.as_str());
    if !word.chars().all(is_word_char) {
        word = "";
        from = request.ch;
        to = request.ch;
    }

    let tables = mode.tables();
    let source = pick_source(tables, request)?;
    let list: Vec<&'static str> = candidates(tables, source)
        .into_iter()
        .filter(|name| name.starts_with(word))
        .collect();
    debug!(?source, word, count = list.len(), "css hint");

    if list.is_empty() {
        return None;
    }
    Some(Hints { list, from, to })
}

/// Completions at `line`:`ch` of a whole document.
pub fn hint_at(mode: &CssMode, text: &str, line: usize, ch: usize) -> Option<Hints> {
    let line_text = lines(text).nth(line)?;
    let token = token_at(mode, text, line, ch)?;
    css_hint(
        mode,
        &HintRequest {
            line: line_text,
            ch,
            token: &token,
        },
    )
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-')
}

fn pick_source(tables: &CssTables, request: &HintRequest<'_>) -> Option<Source> {
    let state = request.token.state.state();
    if state == State::Pseudo || request.token.style.is(Style::Variable3) {
        return Some(Source::PseudoClasses);
    }
    Some(match state {
        State::Block | State::MaybeProp => Source::Properties,
        State::Parens | State::At => Source::Values,
        State::Prop => match tables.property_values(&property_name(request.line, request.ch)) {
            Some(grammar) => Source::PropertyValues(grammar),
            None => Source::Values,
        },
        State::AtBlock | State::AtBlockParens => Source::MediaQueries,
        _ => return None,
    })
}

fn candidates(tables: &CssTables, source: Source) -> Vec<&'static str> {
    match source {
        Source::PseudoClasses => PSEUDO_CLASSES.to_vec(),
        Source::Properties => tables.property_keywords.iter().collect(),
        Source::Values => tables
            .value_keywords
            .iter()
            .chain(tables.color_keywords.iter())
            .collect(),
        Source::PropertyValues(grammar) => {
            let mut values = tables.expand_property_values(grammar);
            values.extend(["inherit", "initial"]);
            values.as_slice().to_vec()
        }
        Source::MediaQueries => tables
            .media_types
            .iter()
            .chain(tables.media_features.iter())
            .collect(),
    }
}

/// Name of the property whose value the cursor is in: the last word before
/// the last `:` left of the cursor.
pub fn property_name(line: &str, ch: usize) -> String {
    let before = line.get(..ch).unwrap_or(line);
    let Some(colon) = before.rfind(':') else {
        return String::new();
    };
    before[..colon]
        .replace('{', "{ ")
        .replace(';', "; ")
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string()
}
