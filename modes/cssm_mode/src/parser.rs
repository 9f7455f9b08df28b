//! Grammar state machine.
//!
//! Each scanned token is fed to the handler of the current [`State`]. The
//! handler may restyle the token, open or close nesting contexts, and picks
//! the next state. Handlers that do not recognize a token hand it to the
//! handler of the innermost context ("pass"), sometimes after closing
//! contexts first ("pop and pass").
//!
//! Popping never removes the root context, so a stray `}` or `;` cannot
//! unbalance the stack.

use cssm_stream::CharStream;
use tracing::trace;

use crate::dialect::DialectConfig;
use crate::scanner::patterns::{
    is_document_rule, is_hex_color, is_keyframes_rule, is_media_like_rule, property_colon,
};
use crate::state::{ParseState, RestrictedAt, State};
use crate::token::{Style, TokenKind, TokenStyle};

/// What a handler sees of the token it is given.
struct Input<'s> {
    kind: TokenKind,
    text: &'s str,
    /// Unread text after the token.
    rest: &'s str,
    /// Indentation of the token's line, for contexts opened here.
    indentation: usize,
    /// Style proposed by the scanner.
    style: TokenStyle,
}

/// Outcome of one handler call.
struct Transition {
    next: State,
    style: TokenStyle,
}

impl Transition {
    fn keep(input: &Input<'_>, next: State) -> Self {
        Transition {
            next,
            style: input.style,
        }
    }

    fn restyle(next: State, style: impl Into<TokenStyle>) -> Self {
        Transition {
            next,
            style: style.into(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Parser {
    dialect: &'static DialectConfig,
    indent_unit: usize,
}

impl Parser {
    pub(crate) fn new(dialect: &'static DialectConfig, indent_unit: usize) -> Self {
        Parser {
            dialect,
            indent_unit,
        }
    }

    /// Feed one scanned token through the state machine and return the style
    /// to paint it with.
    pub(crate) fn step<S: CharStream + ?Sized>(
        &self,
        kind: TokenKind,
        style: TokenStyle,
        stream: &S,
        state: &mut ParseState,
    ) -> TokenStyle {
        let input = Input {
            kind,
            text: stream.current(),
            rest: stream.rest(),
            indentation: stream.indentation(),
            style,
        };
        let from = state.state;
        let transition = self.dispatch(from, &input, state);
        trace!(
            %from,
            to = %transition.next,
            %kind,
            text = input.text,
            depth = state.context.depth(),
            "transition"
        );
        state.state = transition.next;
        transition.style
    }

    fn dispatch(&self, at: State, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match at {
            State::Top => self.top(input, state),
            State::Block => self.block(input, state),
            State::MaybeProp => self.maybe_prop(input, state),
            State::Prop => self.prop(input, state),
            State::PropBlock => Self::prop_block(input, state),
            State::Parens => self.parens(input, state),
            State::Pseudo => self.pseudo(input, state),
            State::DocumentTypes => self.document_types(input, state),
            State::AtBlock => self.at_block(input, state),
            State::AtComponentBlock => self.at_component_block(input, state),
            State::AtBlockParens => self.at_block_parens(input, state),
            State::RestrictedAtBlockBefore => self.restricted_at_block_before(input, state),
            State::RestrictedAtBlock => self.restricted_at_block(input, state),
            State::Keyframes => self.keyframes(input, state),
            State::At => self.at(input, state),
            State::Interpolation => self.interpolation(input, state),
        }
    }

    // Context management

    fn push(&self, input: &Input<'_>, state: &mut ParseState, kind: State) -> State {
        Self::push_at(state, kind, input.indentation + self.indent_unit)
    }

    /// Open a context at the line's own indentation.
    fn push_flush(input: &Input<'_>, state: &mut ParseState, kind: State) -> State {
        Self::push_at(state, kind, input.indentation)
    }

    fn push_at(state: &mut ParseState, kind: State, indent: usize) -> State {
        state.context.push(kind, indent);
        trace!(%kind, indent, depth = state.context.depth(), "push context");
        kind
    }

    fn pop(state: &mut ParseState) -> State {
        if state.context.pop() {
            trace!(depth = state.context.depth(), "pop context");
        }
        state.context.current().kind
    }

    fn pass(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        let kind = state.context.current().kind;
        self.dispatch(kind, input, state)
    }

    fn pop_and_pass(&self, input: &Input<'_>, state: &mut ParseState, n: usize) -> Transition {
        for _ in 0..n {
            Self::pop(state);
        }
        self.pass(input, state)
    }

    fn nested_body(&self) -> State {
        if self.dialect.allow_nested {
            State::Block
        } else {
            State::Top
        }
    }

    // Word classification

    fn value_style(&self, word: &str) -> Style {
        let word = word.to_lowercase();
        if self.dialect.value_keywords.contains(&word) {
            Style::Atom
        } else if self.dialect.color_keywords.contains(&word) {
            Style::Keyword
        } else {
            Style::Variable
        }
    }

    fn media_query_style(&self, word: &str) -> TokenStyle {
        let word = word.to_lowercase();
        let d = self.dialect;
        let style = if matches!(word.as_str(), "only" | "not" | "and" | "or") {
            Style::Keyword
        } else if d.media_types.contains(&word) {
            Style::Attribute
        } else if d.media_features.contains(&word) {
            Style::Property
        } else if d.media_value_keywords.contains(&word) {
            Style::Keyword
        } else if d.property_keywords.contains(&word) {
            Style::Property
        } else if d.non_standard_property_keywords.contains(&word) {
            Style::String2
        } else if d.value_keywords.contains(&word) {
            Style::Atom
        } else if d.color_keywords.contains(&word) {
            Style::Keyword
        } else {
            return TokenStyle::ERROR;
        };
        style.into()
    }

    // States

    fn top(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        let current = state.context.current().kind;
        match input.kind {
            TokenKind::LBrace => Transition::keep(input, self.push(input, state, State::Block)),
            TokenKind::RBrace if state.context.parent().is_some() => {
                Transition::keep(input, Self::pop(state))
            }
            TokenKind::AtRule => self.at_rule(input, state),
            TokenKind::Hash => Transition::restyle(current, Style::Builtin),
            TokenKind::Word => Transition::restyle(current, Style::Tag),
            TokenKind::VariableDefinition => Transition::keep(input, State::MaybeProp),
            TokenKind::Interpolation => {
                Transition::keep(input, self.push(input, state, State::Interpolation))
            }
            TokenKind::Colon => Transition::keep(input, State::Pseudo),
            TokenKind::LParen if self.dialect.allow_nested => {
                Transition::keep(input, self.push(input, state, State::Parens))
            }
            _ => Transition::keep(input, current),
        }
    }

    fn at_rule(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        let name = input.text;
        let next = if self.dialect.supports_at_component && name.contains("@component") {
            self.push(input, state, State::AtComponentBlock)
        } else if is_document_rule(name) {
            self.push(input, state, State::DocumentTypes)
        } else if is_media_like_rule(name) {
            self.push(input, state, State::AtBlock)
        } else if let Some(restricted) = RestrictedAt::from_at_rule(name) {
            state.state_arg = Some(restricted);
            State::RestrictedAtBlockBefore
        } else if is_keyframes_rule(name) {
            State::Keyframes
        } else {
            self.push(input, state, State::At)
        };
        Transition::keep(input, next)
    }

    fn block(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::Word => {
                let word = input.text.to_lowercase();
                if self.dialect.property_keywords.contains(&word) {
                    Transition::restyle(State::MaybeProp, Style::Property)
                } else if self.dialect.non_standard_property_keywords.contains(&word) {
                    Transition::restyle(State::MaybeProp, Style::String2)
                } else if self.dialect.allow_nested {
                    let style = if property_colon(input.rest).is_some() {
                        Style::Property
                    } else {
                        Style::Tag
                    };
                    Transition::restyle(State::Block, style)
                } else {
                    Transition::restyle(State::MaybeProp, input.style.with_error())
                }
            }
            TokenKind::Meta => Transition::keep(input, State::Block),
            TokenKind::Hash | TokenKind::Qualifier if !self.dialect.allow_nested => {
                Transition::restyle(State::Block, TokenStyle::ERROR)
            }
            _ => self.top(input, state),
        }
    }

    fn maybe_prop(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        if input.kind == TokenKind::Colon {
            return Transition::keep(input, self.push(input, state, State::Prop));
        }
        self.pass(input, state)
    }

    fn prop(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::Semicolon => Transition::keep(input, Self::pop(state)),
            TokenKind::LBrace if self.dialect.allow_nested => {
                Transition::keep(input, self.push(input, state, State::PropBlock))
            }
            TokenKind::RBrace | TokenKind::LBrace => self.pop_and_pass(input, state, 1),
            TokenKind::LParen => Transition::keep(input, self.push(input, state, State::Parens)),
            TokenKind::Hash if !is_hex_color(input.text) => {
                Transition::restyle(State::Prop, input.style.with_error())
            }
            TokenKind::Word => Transition::restyle(State::Prop, self.value_style(input.text)),
            TokenKind::Interpolation => {
                Transition::keep(input, self.push(input, state, State::Interpolation))
            }
            _ => Transition::keep(input, State::Prop),
        }
    }

    fn prop_block(input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::RBrace => Transition::keep(input, Self::pop(state)),
            TokenKind::Word => Transition::restyle(State::MaybeProp, Style::Property),
            _ => Transition::keep(input, state.context.current().kind),
        }
    }

    fn parens(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::LBrace | TokenKind::RBrace => self.pop_and_pass(input, state, 1),
            TokenKind::RParen => Transition::keep(input, Self::pop(state)),
            TokenKind::LParen => Transition::keep(input, self.push(input, state, State::Parens)),
            TokenKind::Interpolation => {
                Transition::keep(input, self.push(input, state, State::Interpolation))
            }
            TokenKind::Word => Transition::restyle(State::Parens, self.value_style(input.text)),
            _ => Transition::keep(input, State::Parens),
        }
    }

    fn pseudo(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        if input.kind == TokenKind::Word {
            return Transition::restyle(state.context.current().kind, Style::Variable3);
        }
        self.pass(input, state)
    }

    fn document_types(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        if input.kind == TokenKind::Word && self.dialect.document_types.contains(input.text) {
            return Transition::restyle(state.context.current().kind, Style::Tag);
        }
        self.at_block(input, state)
    }

    fn at_block(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::LParen => {
                Transition::keep(input, self.push(input, state, State::AtBlockParens))
            }
            TokenKind::RBrace | TokenKind::Semicolon => self.pop_and_pass(input, state, 1),
            TokenKind::LBrace => {
                Self::pop(state);
                Transition::keep(input, self.push(input, state, self.nested_body()))
            }
            TokenKind::Word => Transition {
                next: state.context.current().kind,
                style: self.media_query_style(input.text),
            },
            _ => Transition::keep(input, state.context.current().kind),
        }
    }

    fn at_component_block(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::RBrace => self.pop_and_pass(input, state, 1),
            TokenKind::LBrace => {
                Self::pop(state);
                Transition::keep(input, Self::push_flush(input, state, self.nested_body()))
            }
            TokenKind::Word => Transition::restyle(state.context.current().kind, TokenStyle::ERROR),
            _ => Transition::keep(input, state.context.current().kind),
        }
    }

    fn at_block_parens(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::RParen => Transition::keep(input, Self::pop(state)),
            TokenKind::LBrace | TokenKind::RBrace => self.pop_and_pass(input, state, 2),
            _ => self.at_block(input, state),
        }
    }

    fn restricted_at_block_before(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::LBrace => {
                Transition::keep(input, self.push(input, state, State::RestrictedAtBlock))
            }
            TokenKind::Word if state.state_arg == Some(RestrictedAt::CounterStyle) => {
                Transition::restyle(State::RestrictedAtBlockBefore, Style::Variable)
            }
            _ => self.pass(input, state),
        }
    }

    fn restricted_at_block(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::RBrace => {
                state.state_arg = None;
                Transition::keep(input, Self::pop(state))
            }
            TokenKind::Word => {
                let word = input.text.to_lowercase();
                let allowed = match state.state_arg {
                    Some(RestrictedAt::FontFace) => self.dialect.font_properties.contains(&word),
                    Some(RestrictedAt::CounterStyle) => {
                        self.dialect.counter_descriptors.contains(&word)
                    }
                    Some(RestrictedAt::Other) | None => true,
                };
                let style = if allowed {
                    Style::Property.into()
                } else {
                    TokenStyle::ERROR
                };
                Transition::restyle(State::MaybeProp, style)
            }
            _ => Transition::keep(input, State::RestrictedAtBlock),
        }
    }

    fn keyframes(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::Word => Transition::restyle(State::Keyframes, Style::Variable),
            TokenKind::LBrace => Transition::keep(input, self.push(input, state, State::Top)),
            _ => self.pass(input, state),
        }
    }

    fn at(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::Semicolon => Transition::keep(input, Self::pop(state)),
            TokenKind::LBrace | TokenKind::RBrace => self.pop_and_pass(input, state, 1),
            TokenKind::Word => Transition::restyle(State::At, Style::Tag),
            TokenKind::Hash => Transition::restyle(State::At, Style::Builtin),
            _ => Transition::keep(input, State::At),
        }
    }

    fn interpolation(&self, input: &Input<'_>, state: &mut ParseState) -> Transition {
        match input.kind {
            TokenKind::RBrace => Transition::keep(input, Self::pop(state)),
            TokenKind::LBrace | TokenKind::Semicolon => self.pop_and_pass(input, state, 1),
            TokenKind::Word => Transition::restyle(State::Interpolation, Style::Variable),
            TokenKind::Variable | TokenKind::LParen | TokenKind::RParen => {
                Transition::keep(input, State::Interpolation)
            }
            _ => Transition::restyle(State::Interpolation, TokenStyle::ERROR),
        }
    }
}
