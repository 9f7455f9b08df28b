//! Character classes and anchored lookahead patterns.
//!
//! Patterns follow the [`Pattern`](cssm_stream::Pattern) contract: they
//! inspect the text at the cursor and return the byte length of the match.
//! Word characters are ASCII (`[A-Za-z0-9_]`); whitespace is Unicode.

/// `[A-Za-z0-9_]`
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Identifier characters: word characters, `\` and `-`.
pub(crate) fn is_ident_char(c: char) -> bool {
    is_word_char(c) || c == '\\' || c == '-'
}

/// Numeric literal body: word characters, `.` and `%`.
pub(crate) fn is_unit_char(c: char) -> bool {
    is_word_char(c) || c == '.' || c == '%'
}

fn leading(text: &str, class: fn(char) -> bool) -> usize {
    text.chars()
        .take_while(|&c| class(c))
        .map(char::len_utf8)
        .sum()
}

fn leading_space(text: &str) -> usize {
    leading(text, char::is_whitespace)
}

/// Optional whitespace, then `expected`.
fn space_then(text: &str, expected: char) -> Option<usize> {
    let ws = leading_space(text);
    text[ws..]
        .starts_with(expected)
        .then_some(ws + expected.len_utf8())
}

/// `\s*\w*` after `!`. Always matches.
pub(crate) fn important_tail(text: &str) -> Option<usize> {
    let ws = leading_space(text);
    Some(ws + leading(&text[ws..], is_word_char))
}

/// `-` followed by at least one identifier character (`--name` once the
/// leading dash has been consumed).
pub(crate) fn custom_property_name(text: &str) -> Option<usize> {
    let body = text.strip_prefix('-')?;
    let len = leading(body, is_ident_char);
    (len > 0).then_some(1 + len)
}

/// `\s*:`
pub(crate) fn definition_colon(text: &str) -> Option<usize> {
    space_then(text, ':')
}

/// `\s*:` followed by whitespace or end of line.
pub(crate) fn property_colon(text: &str) -> Option<usize> {
    let len = definition_colon(text)?;
    match text[len..].chars().next() {
        None => Some(len),
        Some(c) if c.is_whitespace() => Some(len + c.len_utf8()),
        Some(_) => None,
    }
}

/// `\s*{`
pub(crate) fn brace_ahead(text: &str) -> Option<usize> {
    space_then(text, '{')
}

/// `\w+-`: vendor prefix lead-in such as `webkit-`.
pub(crate) fn vendor_prefix(text: &str) -> Option<usize> {
    let len = leading(text, is_word_char);
    (len > 0 && text[len..].starts_with('-')).then_some(len + 1)
}

/// `-?[_a-zA-Z][_a-zA-Z0-9-]*`
pub(crate) fn class_name(text: &str) -> Option<usize> {
    let dash = usize::from(text.starts_with('-'));
    let first = text[dash..].chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    let body = leading(&text[dash + 1..], |c| {
        c.is_ascii_alphanumeric() || c == '_' || c == '-'
    });
    Some(dash + 1 + body)
}

/// `rl(` or `rl-prefix(` after a `u`.
pub(crate) fn url_tail(text: &str) -> Option<usize> {
    ["rl(", "rl-prefix("]
        .into_iter()
        .find(|tail| text.starts_with(tail))
        .map(str::len)
}

/// `\s*["')]`: the argument of `url(` is quoted or empty.
pub(crate) fn quote_or_close_ahead(text: &str) -> Option<usize> {
    let ws = leading_space(text);
    match text[ws..].chars().next() {
        Some('"' | '\'' | ')') => Some(ws + 1),
        _ => None,
    }
}

/// `[\w-]+`
pub(crate) fn dollar_name(text: &str) -> Option<usize> {
    let len = leading(text, |c| is_word_char(c) || c == '-');
    (len > 0).then_some(len)
}

const LESS_AT_RULES: &[&str] = &[
    "charset",
    "document",
    "font-face",
    "import",
    "keyframes",
    "-moz-keyframes",
    "-ms-keyframes",
    "-o-keyframes",
    "-webkit-keyframes",
    "media",
    "namespace",
    "page",
    "supports",
];

/// A real at-rule name after `@`, ending at a word boundary.
pub(crate) fn less_at_rule(text: &str) -> Option<usize> {
    LESS_AT_RULES
        .iter()
        .filter(|name| text.starts_with(*name))
        .map(|name| name.len())
        .find(|&len| !text[len..].starts_with(is_word_char))
}

/// `@(-moz-)?document`
pub(crate) fn is_document_rule(name: &str) -> bool {
    matches!(name, "@document" | "@-moz-document")
}

/// `@(media|supports|(-moz-)?document|import)`
pub(crate) fn is_media_like_rule(name: &str) -> bool {
    matches!(
        name,
        "@media" | "@supports" | "@document" | "@-moz-document" | "@import"
    )
}

/// `@(-(moz|ms|o|webkit)-)?keyframes`
pub(crate) fn is_keyframes_rule(name: &str) -> bool {
    matches!(
        name,
        "@keyframes" | "@-moz-keyframes" | "@-ms-keyframes" | "@-o-keyframes" | "@-webkit-keyframes"
    )
}

/// `#` followed by exactly 3, 4, 6 or 8 hex digits.
///
/// The upper range runs `A` through `f`, so `G`-`Z`, `[`-`` ` `` and `_`
/// are accepted as digits too.
pub(crate) fn is_hex_color(text: &str) -> bool {
    let Some(digits) = text.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8)
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='f').contains(&c))
}

#[cfg(test)]
mod tests;
