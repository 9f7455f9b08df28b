//! Syntax mode for CSS and its SCSS, LESS and GSS dialects.
//!
//! A mode is the piece of an editor that turns text into styled tokens and
//! suggests indentation. The host owns the text and the loop: it hands the
//! mode one line at a time through a [`CharStream`](cssm_stream::CharStream),
//! asks for one token per call, and keeps the [`ParseState`] between calls
//! and between lines.
//!
//! # Architecture
//!
//! ```text
//! line ──► scanner ──(style, kind)──► parser ──► style for the host
//!            ▲    dialect hooks          │
//!            │                           ▼
//!       continuation              state + context stack ──► indent
//! ```
//!
//! - `scanner`: one token per call, dialect hooks first.
//! - `parser`: the grammar state machine; restyles tokens and maintains
//!   the nesting context stack.
//! - `indent`: indentation from the context stack.
//! - [`driver`]: the host loop over a whole document, for tools and tests.
//!
//! # Usage
//!
//! ```
//! use cssm_mode::{driver, CssMode, Dialect};
//!
//! let mode = CssMode::with_dialect(Dialect::Scss);
//! let tokens = driver::highlight(&mode, "a { color: red; }");
//! assert_eq!(tokens[0].style.to_string(), "tag");
//! assert_eq!(driver::reindent(&mode, "a {\ncolor: red;\n}"), "a {\n  color: red;\n}");
//! ```

mod config;
mod context;
mod dialect;
pub mod driver;
mod error;
mod indent;
mod mode;
mod parser;
mod scanner;
mod state;
mod token;

pub use config::{ModeConfig, DEFAULT_INDENT_UNIT, DEFAULT_TAB_SIZE};
pub use context::{Context, ContextStack};
pub use dialect::{Dialect, DialectConfig, Hook};
pub use error::ModeError;
pub use mode::CssMode;
pub use state::{Continuation, ParseState, RestrictedAt, State};
pub use token::{Style, Token, TokenKind, TokenStyle};
