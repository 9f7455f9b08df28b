//! Mode factory and the per-token entry point.

use cssm_stream::CharStream;
use cssm_tables::{tables, CssTables};
use tracing::debug;

use crate::dialect::{Dialect, DialectConfig};
use crate::parser::Parser;
use crate::state::{ParseState, State};
use crate::token::{Token, TokenKind, TokenStyle};
use crate::{indent, scanner, ModeConfig, ModeError};

/// A configured CSS-family mode.
///
/// Holds no per-document data: all state lives in [`ParseState`] values the
/// host threads through [`CssMode::token`]. One mode can serve any number of
/// documents.
#[derive(Debug)]
pub struct CssMode {
    config: ModeConfig,
    dialect: &'static DialectConfig,
    parser: Parser,
}

impl CssMode {
    /// Characters that should trigger re-indentation when typed.
    pub const ELECTRIC_CHARS: &'static str = "}";
    pub const BLOCK_COMMENT_START: &'static str = "/*";
    pub const BLOCK_COMMENT_END: &'static str = "*/";
    /// Folding strategy name.
    pub const FOLD: &'static str = "brace";

    pub fn new(config: ModeConfig, dialect: Dialect) -> Result<Self, ModeError> {
        config.validate()?;
        debug!(%dialect, indent_unit = config.indent_unit, inline = config.inline, "css mode");
        let dialect = dialect.config();
        Ok(CssMode {
            config,
            dialect,
            parser: Parser::new(dialect, config.indent_unit),
        })
    }

    /// Mode for `dialect` with default options.
    pub fn with_dialect(dialect: Dialect) -> Self {
        let config = ModeConfig::default();
        let dialect = dialect.config();
        CssMode {
            config,
            dialect,
            parser: Parser::new(dialect, config.indent_unit),
        }
    }

    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    pub fn dialect(&self) -> &'static DialectConfig {
        self.dialect
    }

    /// Shared keyword tables.
    pub fn tables(&self) -> &'static CssTables {
        tables()
    }

    /// State for the first line of a document whose outermost content is
    /// indented `base_indent` columns.
    pub fn start_state(&self, base_indent: usize) -> ParseState {
        let state = if self.config.inline {
            State::Block
        } else {
            State::Top
        };
        ParseState::new(state, base_indent)
    }

    /// Consume one token and return its style.
    ///
    /// Leading whitespace is consumed as its own unstyled token.
    pub fn token<S: CharStream + ?Sized>(&self, stream: &mut S, state: &mut ParseState) -> TokenStyle {
        self.next_token(stream, state).style
    }

    /// Consume one token and return its style and grammar kind.
    pub fn next_token<S: CharStream + ?Sized>(
        &self,
        stream: &mut S,
        state: &mut ParseState,
    ) -> Token {
        if state.continuation.is_none() && stream.eat_space() {
            return Token::bare(TokenKind::Whitespace);
        }
        let before = state.continuation;
        let scanned = scanner::scan(self.dialect, stream, state);
        if state.continuation != before {
            debug!(from = ?before, to = ?state.continuation, "continuation");
        }
        let style = self
            .parser
            .step(scanned.kind, scanned.style, &*stream, state);
        Token::new(style, scanned.kind)
    }

    /// Indentation, in columns, for a line whose text after leading
    /// whitespace is `text_after`, given the state at the end of the
    /// previous line.
    pub fn indent(&self, state: &ParseState, text_after: &str) -> usize {
        indent::indentation(&state.context, text_after, self.config.indent_unit)
    }
}
