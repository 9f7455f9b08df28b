//! Token kinds and display styles.
//!
//! Every token carries two independent classifications:
//!
//! - [`TokenKind`] is the grammar tag the scanner assigns. It drives the
//!   parser's state transitions and never reaches the screen.
//! - [`TokenStyle`] is the display category the host paints with. The
//!   scanner proposes one; the parser may replace it or flag it as an error.

use std::fmt;

/// Display category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    Atom,
    Attribute,
    Builtin,
    Comment,
    Def,
    Keyword,
    Meta,
    Number,
    Operator,
    Property,
    Qualifier,
    String,
    String2,
    Tag,
    Variable,
    Variable2,
    Variable3,
}

impl Style {
    /// Host-facing style name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Atom => "atom",
            Style::Attribute => "attribute",
            Style::Builtin => "builtin",
            Style::Comment => "comment",
            Style::Def => "def",
            Style::Keyword => "keyword",
            Style::Meta => "meta",
            Style::Number => "number",
            Style::Operator => "operator",
            Style::Property => "property",
            Style::Qualifier => "qualifier",
            Style::String => "string",
            Style::String2 => "string-2",
            Style::Tag => "tag",
            Style::Variable => "variable",
            Style::Variable2 => "variable-2",
            Style::Variable3 => "variable-3",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved style of a token: an optional category plus an error flag.
///
/// Renders as the space-separated label hosts expect: `"property"`,
/// `"property error"`, `"error"`, or the empty string for unstyled text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenStyle {
    pub base: Option<Style>,
    pub error: bool,
}

impl TokenStyle {
    /// No visual classification.
    pub const NONE: TokenStyle = TokenStyle {
        base: None,
        error: false,
    };

    /// A bare grammar error.
    pub const ERROR: TokenStyle = TokenStyle {
        base: None,
        error: true,
    };

    pub const fn new(style: Style) -> Self {
        TokenStyle {
            base: Some(style),
            error: false,
        }
    }

    /// Same category, flagged as an error.
    #[must_use]
    pub const fn with_error(self) -> Self {
        TokenStyle {
            base: self.base,
            error: true,
        }
    }

    /// `true` for unstyled text.
    pub const fn is_none(self) -> bool {
        self.base.is_none() && !self.error
    }

    /// `true` when the category is exactly `style` with no error flag.
    pub fn is(self, style: Style) -> bool {
        self.base == Some(style) && !self.error
    }
}

impl From<Style> for TokenStyle {
    fn from(style: Style) -> Self {
        TokenStyle::new(style)
    }
}

impl fmt::Display for TokenStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.base, self.error) {
            (Some(style), true) => write!(f, "{style} error"),
            (Some(style), false) => f.write_str(style.as_str()),
            (None, true) => f.write_str("error"),
            (None, false) => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Grammar tag of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier-like run, including function names before `(`.
    Word,
    /// `#name`: hex color or ID selector.
    Hash,
    String,
    Comment,
    /// Numeric literal with its unit.
    Unit,
    /// `!important` and friends.
    Important,
    /// `=`, `~=`, `|=`.
    Compare,
    /// Selector combinator or list separator.
    SelectOp,
    /// `.class`
    Qualifier,
    /// Vendor-prefix lead-in such as `-webkit-`.
    Meta,
    Variable,
    /// Variable or custom property immediately followed by `:`.
    VariableDefinition,
    /// Opening of an interpolation (`#{` or `@{`).
    Interpolation,
    Operator,
    /// LESS parent selector `&`.
    Atom,
    /// `@name`; the name is the token text.
    AtRule,
    Colon,
    Semicolon,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    /// Leading whitespace skipped before a token. Never reaches the parser.
    Whitespace,
    /// Anything the scanner does not recognize.
    Unclassified,
}

impl TokenKind {
    /// Grammar tag name.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Hash => "hash",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Unit => "unit",
            TokenKind::Important => "important",
            TokenKind::Compare => "compare",
            TokenKind::SelectOp => "select-op",
            TokenKind::Qualifier => "qualifier",
            TokenKind::Meta => "meta",
            TokenKind::Variable => "variable",
            TokenKind::VariableDefinition => "variable-definition",
            TokenKind::Interpolation => "interpolation",
            TokenKind::Operator => "operator",
            TokenKind::Atom => "atom",
            TokenKind::AtRule => "at-rule",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Unclassified => "unclassified",
        }
    }

    /// Punctuation kind for a single-character delimiter.
    pub const fn punctuation(ch: char) -> Option<TokenKind> {
        Some(match ch {
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A classified token: what the host paints and what the grammar saw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub style: TokenStyle,
    pub kind: TokenKind,
}

impl Token {
    pub const fn new(style: TokenStyle, kind: TokenKind) -> Self {
        Token { style, kind }
    }

    /// Unstyled token of `kind`.
    pub const fn bare(kind: TokenKind) -> Self {
        Token {
            style: TokenStyle::NONE,
            kind,
        }
    }

    /// Token whose style is a plain category.
    pub const fn styled(style: Style, kind: TokenKind) -> Self {
        Token {
            style: TokenStyle::new(style),
            kind,
        }
    }
}
