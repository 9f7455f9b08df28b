//! Parse state carried from token to token and line to line.

use std::fmt;

use crate::context::ContextStack;

/// Grammar state. Doubles as the kind of a nesting context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum State {
    Top,
    Block,
    PropBlock,
    MaybeProp,
    Prop,
    Parens,
    Pseudo,
    DocumentTypes,
    AtBlock,
    AtComponentBlock,
    AtBlockParens,
    RestrictedAtBlockBefore,
    RestrictedAtBlock,
    Keyframes,
    At,
    Interpolation,
}

impl State {
    /// Name hosts and completion helpers key on.
    pub const fn as_str(self) -> &'static str {
        match self {
            State::Top => "top",
            State::Block => "block",
            State::PropBlock => "propBlock",
            State::MaybeProp => "maybeprop",
            State::Prop => "prop",
            State::Parens => "parens",
            State::Pseudo => "pseudo",
            State::DocumentTypes => "documentTypes",
            State::AtBlock => "atBlock",
            State::AtComponentBlock => "atComponentBlock",
            State::AtBlockParens => "atBlock_parens",
            State::RestrictedAtBlockBefore => "restricted_atBlock_before",
            State::RestrictedAtBlock => "restricted_atBlock",
            State::Keyframes => "keyframes",
            State::At => "at",
            State::Interpolation => "interpolation",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At-rule whose body only admits a fixed descriptor list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RestrictedAt {
    /// `@font-face`: descriptors from the font property table.
    FontFace,
    /// `@counter-style`: descriptors from the counter descriptor table.
    CounterStyle,
    /// A longer name sharing one of those prefixes. Its body is not checked.
    Other,
}

impl RestrictedAt {
    /// Classify an at-rule name. Any name starting with `@font-face` or
    /// `@counter-style` opens a restricted block.
    pub fn from_at_rule(name: &str) -> Option<RestrictedAt> {
        match name {
            "@font-face" => Some(RestrictedAt::FontFace),
            "@counter-style" => Some(RestrictedAt::CounterStyle),
            _ if name.starts_with("@font-face") || name.starts_with("@counter-style") => {
                Some(RestrictedAt::Other)
            }
            _ => None,
        }
    }
}

/// Scanner override that spans tokens and lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Inside a string delimited by `'` or `"`.
    String(char),
    /// Inside a `/* ... */` comment.
    Comment,
    /// Right before the `(` of `url(`, `domain(` or `regexp(`.
    Parenthesized,
    /// Inside the raw, unquoted argument of `url(...)`, up to `)`.
    ParenString,
}

/// Everything the mode remembers between tokens.
///
/// Cloning a state snapshots it; hosts cache one per line so editing a line
/// only re-tokenizes from there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseState {
    pub(crate) continuation: Option<Continuation>,
    pub(crate) state: State,
    pub(crate) state_arg: Option<RestrictedAt>,
    pub(crate) context: ContextStack,
}

impl ParseState {
    pub(crate) fn new(state: State, base_indent: usize) -> Self {
        ParseState {
            continuation: None,
            state,
            state_arg: None,
            context: ContextStack::new(state, base_indent),
        }
    }

    /// Current grammar state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Active scanner override, if a string, comment or `url(` is open.
    pub fn continuation(&self) -> Option<Continuation> {
        self.continuation
    }

    /// Restricted at-rule being parsed, if any.
    pub fn state_arg(&self) -> Option<RestrictedAt> {
        self.state_arg
    }

    /// Nesting contexts.
    pub fn context(&self) -> &ContextStack {
        &self.context
    }
}
