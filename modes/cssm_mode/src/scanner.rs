//! Base tokenizer.
//!
//! Each call consumes one token from the stream and returns its display
//! style and grammar kind. Strings, comments and the raw argument of
//! `url(...)` can span lines; while one is open, the scanner resumes it
//! through [`ParseState::continuation`] instead of running the base rules.

mod hooks;
pub(crate) mod patterns;

use cssm_stream::CharStream;
use tracing::trace;

use crate::dialect::DialectConfig;
use crate::state::{Continuation, ParseState};
use crate::token::{Style, Token, TokenKind};

use patterns::{
    class_name, custom_property_name, definition_colon, important_tail, is_ident_char,
    is_unit_char, quote_or_close_ahead, url_tail, vendor_prefix,
};

/// Scan one token, resuming an open continuation if there is one.
pub(crate) fn scan<S: CharStream + ?Sized>(
    dialect: &DialectConfig,
    stream: &mut S,
    state: &mut ParseState,
) -> Token {
    match state.continuation {
        None => base(dialect, stream, state),
        Some(Continuation::String(quote)) => string(stream, state, quote),
        Some(Continuation::ParenString) => string(stream, state, ')'),
        Some(Continuation::Comment) => comment(stream, state),
        Some(Continuation::Parenthesized) => parenthesized(stream, state),
    }
}

fn base<S: CharStream + ?Sized>(
    dialect: &DialectConfig,
    stream: &mut S,
    state: &mut ParseState,
) -> Token {
    let Some(ch) = stream.next() else {
        return Token::bare(TokenKind::Unclassified);
    };

    if let Some(hook) = dialect.hook(ch) {
        if let Some(token) = hooks::run(hook, stream, state) {
            trace!(?hook, kind = %token.kind, "hook token");
            return token;
        }
    }

    match ch {
        '@' => {
            stream.eat_while(is_ident_char);
            Token::styled(Style::Def, TokenKind::AtRule)
        }
        '=' => Token::bare(TokenKind::Compare),
        '~' | '|' if stream.eat('=') => Token::bare(TokenKind::Compare),
        '"' | '\'' => {
            state.continuation = Some(Continuation::String(ch));
            string(stream, state, ch)
        }
        '#' => {
            stream.eat_while(is_ident_char);
            Token::styled(Style::Atom, TokenKind::Hash)
        }
        '!' => {
            stream.match_with(important_tail, true);
            Token::styled(Style::Keyword, TokenKind::Important)
        }
        '0'..='9' => number(stream),
        '.' if stream.eat_if(|c| c.is_ascii_digit()).is_some() => number(stream),
        '-' => dash(stream),
        ',' | '+' | '>' | '*' | '/' => Token::bare(TokenKind::SelectOp),
        '.' if stream.match_with(class_name, true) => {
            Token::styled(Style::Qualifier, TokenKind::Qualifier)
        }
        ':' | ';' | '{' | '}' | '[' | ']' | '(' | ')' => {
            TokenKind::punctuation(ch).map_or(Token::bare(TokenKind::Unclassified), Token::bare)
        }
        'u' if stream.match_with(url_tail, true) => parenthesized_function(stream, state),
        'd' if stream.match_str("omain(", true) => parenthesized_function(stream, state),
        'r' if stream.match_str("egexp(", true) => parenthesized_function(stream, state),
        _ if is_ident_char(ch) => {
            stream.eat_while(is_ident_char);
            Token::styled(Style::Property, TokenKind::Word)
        }
        _ => Token::bare(TokenKind::Unclassified),
    }
}

fn number<S: CharStream + ?Sized>(stream: &mut S) -> Token {
    stream.eat_while(is_unit_char);
    Token::styled(Style::Number, TokenKind::Unit)
}

/// Everything that can start with `-`: negative numbers, custom properties,
/// vendor prefixes.
fn dash<S: CharStream + ?Sized>(stream: &mut S) -> Token {
    if matches!(stream.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
        return number(stream);
    }
    if stream.match_with(custom_property_name, true) {
        stream.eat_while(is_ident_char);
        let kind = if stream.match_with(definition_colon, false) {
            TokenKind::VariableDefinition
        } else {
            TokenKind::Variable
        };
        return Token::styled(Style::Variable2, kind);
    }
    if stream.match_with(vendor_prefix, true) {
        return Token::styled(Style::Meta, TokenKind::Meta);
    }
    Token::bare(TokenKind::Unclassified)
}

/// `url`, `url-prefix`, `domain`, `regexp`: leave the `(` for the next call.
fn parenthesized_function<S: CharStream + ?Sized>(stream: &mut S, state: &mut ParseState) -> Token {
    stream.back_up(1);
    state.continuation = Some(Continuation::Parenthesized);
    Token::styled(Style::Property, TokenKind::Word)
}

/// Body of a quoted string, or of an unquoted `url(` argument when `quote`
/// is `)`. The closing `)` is left in the stream.
fn string<S: CharStream + ?Sized>(stream: &mut S, state: &mut ParseState, quote: char) -> Token {
    let mut escaped = false;
    let mut closed = false;
    while let Some(ch) = stream.next() {
        if ch == quote && !escaped {
            if quote == ')' {
                stream.back_up(1);
            }
            closed = true;
            break;
        }
        escaped = !escaped && ch == '\\';
    }
    // A trailing backslash continues the string on the next line.
    if closed || (!escaped && quote != ')') {
        state.continuation = None;
    }
    Token::styled(Style::String, TokenKind::String)
}

/// Body of a `/* ... */` comment, up to and including the terminator.
pub(crate) fn comment<S: CharStream + ?Sized>(stream: &mut S, state: &mut ParseState) -> Token {
    let mut maybe_end = false;
    while let Some(ch) = stream.next() {
        if maybe_end && ch == '/' {
            state.continuation = None;
            break;
        }
        maybe_end = ch == '*';
    }
    Token::styled(Style::Comment, TokenKind::Comment)
}

/// The `(` of `url(`. An unquoted, non-empty argument follows as a raw
/// string.
fn parenthesized<S: CharStream + ?Sized>(stream: &mut S, state: &mut ParseState) -> Token {
    stream.next();
    state.continuation = if stream.match_with(quote_or_close_ahead, false) {
        None
    } else {
        Some(Continuation::ParenString)
    };
    Token::bare(TokenKind::LParen)
}
