//! Dialect scanner hooks.

use cssm_stream::CharStream;

use super::comment;
use super::patterns::{brace_ahead, definition_colon, dollar_name, is_ident_char, less_at_rule};
use crate::dialect::Hook;
use crate::state::{Continuation, ParseState};
use crate::token::{Style, Token, TokenKind};

/// Run `hook` after its trigger character was consumed.
///
/// `None` means the hook declined; nothing beyond the trigger was consumed.
pub(super) fn run<S: CharStream + ?Sized>(
    hook: Hook,
    stream: &mut S,
    state: &mut ParseState,
) -> Option<Token> {
    match hook {
        Hook::BlockComment => stream.eat('*').then(|| open_comment(stream, state)),
        Hook::Comments => Some(comments(stream, state)),
        Hook::NestedPropertyColon => stream
            .match_with(brace_ahead, true)
            .then_some(Token::bare(TokenKind::LBrace)),
        Hook::DollarVariable => {
            stream.match_with(dollar_name, true);
            Some(variable(stream))
        }
        Hook::HashInterpolation => stream
            .eat('{')
            .then_some(Token::bare(TokenKind::Interpolation)),
        Hook::AtVariable => at_variable(stream),
        Hook::ParentSelector => Some(Token::styled(Style::Atom, TokenKind::Atom)),
    }
}

fn open_comment<S: CharStream + ?Sized>(stream: &mut S, state: &mut ParseState) -> Token {
    state.continuation = Some(Continuation::Comment);
    comment(stream, state)
}

/// `//` line comment, `/*` block comment, or a division operator.
fn comments<S: CharStream + ?Sized>(stream: &mut S, state: &mut ParseState) -> Token {
    if stream.eat('/') {
        stream.skip_to_end();
        Token::styled(Style::Comment, TokenKind::Comment)
    } else if stream.eat('*') {
        open_comment(stream, state)
    } else {
        Token::styled(Style::Operator, TokenKind::Operator)
    }
}

fn variable<S: CharStream + ?Sized>(stream: &mut S) -> Token {
    let kind = if stream.match_with(definition_colon, false) {
        TokenKind::VariableDefinition
    } else {
        TokenKind::Variable
    };
    Token::styled(Style::Variable2, kind)
}

/// LESS `@`: interpolation, variable, or a real at-rule left to the base
/// scanner.
fn at_variable<S: CharStream + ?Sized>(stream: &mut S) -> Option<Token> {
    if stream.eat('{') {
        return Some(Token::bare(TokenKind::Interpolation));
    }
    if stream.match_with(less_at_rule, false) {
        return None;
    }
    stream.eat_while(is_ident_char);
    Some(variable(stream))
}
