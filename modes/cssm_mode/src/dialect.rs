//! Dialect registry.
//!
//! Four dialects share one tokenizer and one state machine. They differ in
//! which keyword tables are consulted, whether rules may nest, whether GSS
//! `@component` blocks are recognized, and which characters trigger a
//! dialect-specific scanner hook. Each dialect's configuration is built once
//! and shared by every mode instance.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use cssm_tables::{empty, tables, KeywordSet};

use crate::ModeError;

/// A CSS-family language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    Css,
    Scss,
    Less,
    Gss,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [Dialect::Css, Dialect::Scss, Dialect::Less, Dialect::Gss];

    /// Short name.
    pub const fn name(self) -> &'static str {
        match self {
            Dialect::Css => "css",
            Dialect::Scss => "scss",
            Dialect::Less => "less",
            Dialect::Gss => "gss",
        }
    }

    /// Key the completion helper for this dialect is registered under.
    pub const fn helper_name(self) -> &'static str {
        self.name()
    }

    /// MIME type the host registers this dialect under.
    pub const fn mime(self) -> &'static str {
        match self {
            Dialect::Css => "text/css",
            Dialect::Scss => "text/x-scss",
            Dialect::Less => "text/x-less",
            Dialect::Gss => "text/x-gss",
        }
    }

    /// Dialect for a file extension (without the dot), case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Dialect> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| ext.eq_ignore_ascii_case(dialect.name()))
    }

    /// Dialect for a file path, by extension.
    pub fn from_path(path: &Path) -> Option<Dialect> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Dialect::from_extension)
    }

    /// Shared configuration for this dialect.
    pub fn config(self) -> &'static DialectConfig {
        let [css, scss, less, gss] = registry();
        match self {
            Dialect::Css => css,
            Dialect::Scss => scss,
            Dialect::Less => less,
            Dialect::Gss => gss,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = ModeError;

    /// Accepts a short name (`scss`) or a MIME type (`text/x-scss`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| s.eq_ignore_ascii_case(d.name()) || s.eq_ignore_ascii_case(d.mime()))
            .ok_or_else(|| ModeError::UnknownDialect(s.to_string()))
    }
}

/// Dialect-specific scanner extension, keyed by trigger character.
///
/// A hook runs after the scanner has consumed its trigger character. It
/// either produces the token or declines without consuming anything more,
/// in which case the shared rules classify the character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hook {
    /// `/`: block comments only.
    BlockComment,
    /// `/`: block comments, `//` line comments, division operator.
    Comments,
    /// `:` directly followed by `{` opens a nested property block.
    NestedPropertyColon,
    /// `$name` variables.
    DollarVariable,
    /// `#{` interpolation.
    HashInterpolation,
    /// `@name` variables and `@{` interpolation, leaving real at-rules alone.
    AtVariable,
    /// `&` parent selector.
    ParentSelector,
}

/// Immutable per-dialect configuration.
#[derive(Debug)]
pub struct DialectConfig {
    pub dialect: Dialect,
    pub document_types: &'static KeywordSet,
    pub media_types: &'static KeywordSet,
    pub media_features: &'static KeywordSet,
    pub media_value_keywords: &'static KeywordSet,
    pub property_keywords: &'static KeywordSet,
    pub non_standard_property_keywords: &'static KeywordSet,
    pub font_properties: &'static KeywordSet,
    pub counter_descriptors: &'static KeywordSet,
    pub color_keywords: &'static KeywordSet,
    pub value_keywords: &'static KeywordSet,
    /// Rules may nest inside declaration blocks.
    pub allow_nested: bool,
    /// `@component` opens a component block.
    pub supports_at_component: bool,
    hooks: &'static [(char, Hook)],
}

impl DialectConfig {
    /// Hook registered for `ch`, if any.
    pub fn hook(&self, ch: char) -> Option<Hook> {
        self.hooks
            .iter()
            .find(|&&(trigger, _)| trigger == ch)
            .map(|&(_, hook)| hook)
    }

    /// All registered hooks with their trigger characters.
    pub fn hooks(&self) -> &'static [(char, Hook)] {
        self.hooks
    }
}

const CSS_HOOKS: &[(char, Hook)] = &[('/', Hook::BlockComment)];

const SCSS_HOOKS: &[(char, Hook)] = &[
    ('/', Hook::Comments),
    (':', Hook::NestedPropertyColon),
    ('$', Hook::DollarVariable),
    ('#', Hook::HashInterpolation),
];

const LESS_HOOKS: &[(char, Hook)] = &[
    ('/', Hook::Comments),
    ('@', Hook::AtVariable),
    ('&', Hook::ParentSelector),
];

fn build(dialect: Dialect) -> DialectConfig {
    let t = tables();
    let mut config = DialectConfig {
        dialect,
        document_types: &t.document_types,
        media_types: &t.media_types,
        media_features: &t.media_features,
        media_value_keywords: &t.media_value_keywords,
        property_keywords: &t.property_keywords,
        non_standard_property_keywords: &t.non_standard_property_keywords,
        font_properties: &t.font_properties,
        counter_descriptors: &t.counter_descriptors,
        color_keywords: &t.color_keywords,
        value_keywords: &t.value_keywords,
        allow_nested: false,
        supports_at_component: false,
        hooks: CSS_HOOKS,
    };
    match dialect {
        Dialect::Css => {}
        Dialect::Scss | Dialect::Less => {
            config.document_types = empty();
            config.counter_descriptors = empty();
            config.allow_nested = true;
            config.hooks = if dialect == Dialect::Scss {
                SCSS_HOOKS
            } else {
                LESS_HOOKS
            };
        }
        Dialect::Gss => {
            config.media_value_keywords = empty();
            config.supports_at_component = true;
        }
    }
    config
}

static REGISTRY: OnceLock<[DialectConfig; 4]> = OnceLock::new();

fn registry() -> &'static [DialectConfig; 4] {
    REGISTRY.get_or_init(|| Dialect::ALL.map(build))
}

#[cfg(test)]
mod tests;
