//! Command-line front end for the CSS-family modes.
//!
//! The binary (`cssm`) is a thin dispatcher over [`commands`]. Option
//! parsing and output rendering live here so integration tests can drive
//! them without spawning a process.

pub mod commands;

use std::path::Path;
use std::sync::Once;

use cssm_hint::Hints;
use cssm_mode::driver::LineToken;
use cssm_mode::{CssMode, Dialect, DialectConfig, ModeConfig, ModeError, TokenKind};
use cssm_stream::count_column;
use cssm_tables::KeywordSet;
use serde::Serialize;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only takes effect when `RUST_LOG` is set, e.g. `RUST_LOG=cssm_mode=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}

/// Options shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Explicit `--dialect=`; otherwise taken from the file extension.
    pub dialect: Option<Dialect>,
    pub config: ModeConfig,
    pub json: bool,
}

impl Options {
    /// Parse `--key=value` options, returning them with the remaining
    /// positional arguments.
    pub fn parse(args: &[String]) -> Result<(Options, Vec<&str>), String> {
        let mut options = Options::default();
        let mut positional = Vec::new();

        for arg in args {
            if let Some(name) = arg.strip_prefix("--dialect=") {
                let dialect = name.parse::<Dialect>().map_err(|e| e.to_string())?;
                options.dialect = Some(dialect);
            } else if let Some(n) = arg.strip_prefix("--indent-unit=") {
                let unit = parse_count("--indent-unit", n)?;
                options.config = options.config.with_indent_unit(unit);
            } else if let Some(n) = arg.strip_prefix("--tab-size=") {
                let size = parse_count("--tab-size", n)?;
                options.config = options.config.with_tab_size(size);
            } else if arg == "--inline" {
                options.config = options.config.with_inline(true);
            } else if arg == "--json" {
                options.json = true;
            } else if arg.starts_with('-') {
                return Err(format!("unknown option '{arg}'"));
            } else {
                positional.push(arg.as_str());
            }
        }

        Ok((options, positional))
    }

    /// Dialect for `path`: the explicit one, else by extension, else CSS.
    pub fn dialect_for(&self, path: Option<&str>) -> Dialect {
        self.dialect
            .or_else(|| path.and_then(|p| Dialect::from_path(Path::new(p))))
            .unwrap_or(Dialect::Css)
    }

    /// Build the mode for `path`.
    pub fn mode_for(&self, path: Option<&str>) -> Result<CssMode, ModeError> {
        CssMode::new(self.config, self.dialect_for(path))
    }
}

fn parse_count(option: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("{option} expects a column count, got '{value}'"))
}

/// Parse a `<line>:<ch>` cursor position (both zero-based).
pub fn parse_position(arg: &str) -> Option<(usize, usize)> {
    let (line, ch) = arg.split_once(':')?;
    Some((line.trim().parse().ok()?, ch.trim().parse().ok()?))
}

/// One line per token: position, style, grammar tag and text.
///
/// Whitespace tokens are left out. The column after `@` is the visual
/// column, tabs expanded to `tab_size`.
pub fn render_tokens(text: &str, tokens: &[LineToken<'_>], tab_size: usize) -> String {
    let lines: Vec<&str> = cssm_mode::driver::lines(text).collect();
    let mut out = String::new();
    for token in tokens.iter().filter(|t| t.kind != TokenKind::Whitespace) {
        let line = lines.get(token.line).copied().unwrap_or_default();
        let column = count_column(line, token.start, tab_size);
        let style = token.style.to_string();
        let style = if style.is_empty() { "-" } else { style.as_str() };
        out.push_str(&format!(
            "{}:{}-{} @{column}\t{style}\t{}\t{:?}\n",
            token.line, token.start, token.end, token.kind, token.text
        ));
    }
    out
}

/// JSON shape of a completion result.
#[derive(Debug, Serialize)]
pub struct HintsJson<'a> {
    pub line: usize,
    pub from: usize,
    pub to: usize,
    pub list: &'a [&'static str],
}

/// Completion candidates, one per line, after a range header.
pub fn render_hints(line: usize, hints: &Hints) -> String {
    let mut out = format!("{line}:{}-{}\n", hints.from, hints.to);
    for word in &hints.list {
        out.push_str(word);
        out.push('\n');
    }
    out
}

/// Plain completion word list for a dialect: every keyword table in a
/// fixed order, repeats kept.
pub fn hint_words(dialect: &DialectConfig) -> Vec<&'static str> {
    [
        dialect.document_types,
        dialect.media_types,
        dialect.media_features,
        dialect.media_value_keywords,
        dialect.property_keywords,
        dialect.non_standard_property_keywords,
        dialect.color_keywords,
        dialect.value_keywords,
    ]
    .into_iter()
    .flat_map(KeywordSet::iter)
    .collect()
}
