//! Keyword tables for the CSS-family editor modes.
//!
//! Every table is built once, on first use, from the static word lists in
//! [`data`]. The tables are read-only afterwards and shared by every mode
//! instance.
//!
//! # Value Keywords
//!
//! The flat value keyword set is derived rather than listed:
//!
//! 1. every comma-separated item of every non-empty property grammar in
//!    [`data::CSS_PROPERTIES`], skipping items that contain `<`;
//! 2. every item of every placeholder expansion in
//!    [`data::COMMON_CSS_VALUES`] except `<color>`.
//!
//! Completion lists for a single property take the other road and expand
//! placeholders in place (see [`CssTables::expand_property_values`]), so
//! `<color>` expands to color names there but never feeds the flat set.

pub mod data;
mod keyword_set;

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

pub use keyword_set::{empty, KeywordSet};

/// All keyword tables, plus the raw grammars they were derived from.
#[derive(Debug)]
pub struct CssTables {
    pub document_types: KeywordSet,
    pub media_types: KeywordSet,
    pub media_features: KeywordSet,
    pub media_value_keywords: KeywordSet,
    /// Sorted property names.
    pub property_keywords: KeywordSet,
    pub non_standard_property_keywords: KeywordSet,
    pub font_properties: KeywordSet,
    pub counter_descriptors: KeywordSet,
    pub color_keywords: KeywordSet,
    pub value_keywords: KeywordSet,
    /// Property name to value grammar, in declaration order.
    pub css_properties: &'static [(&'static str, &'static str)],
    /// Placeholder name to expansion.
    pub common_css_values: &'static [(&'static str, &'static [&'static str])],
    grammar_index: FxHashMap<&'static str, &'static str>,
}

impl CssTables {
    /// Build every table from [`data`].
    pub fn new() -> Self {
        let mut property_names: Vec<&'static str> =
            data::CSS_PROPERTIES.iter().map(|&(name, _)| name).collect();
        property_names.sort_unstable();

        CssTables {
            document_types: KeywordSet::from_words(data::DOCUMENT_TYPES),
            media_types: KeywordSet::from_words(data::MEDIA_TYPES),
            media_features: KeywordSet::from_words(data::MEDIA_FEATURES),
            media_value_keywords: KeywordSet::from_words(data::MEDIA_VALUE_KEYWORDS),
            property_keywords: KeywordSet::from_words(&property_names),
            non_standard_property_keywords: KeywordSet::from_words(
                data::NON_STANDARD_PROPERTY_KEYWORDS,
            ),
            font_properties: KeywordSet::from_words(data::FONT_PROPERTIES),
            counter_descriptors: KeywordSet::from_words(data::COUNTER_DESCRIPTORS),
            color_keywords: KeywordSet::from_words(data::COLOR_KEYWORDS),
            value_keywords: derive_value_keywords(data::CSS_PROPERTIES, data::COMMON_CSS_VALUES),
            css_properties: data::CSS_PROPERTIES,
            common_css_values: data::COMMON_CSS_VALUES,
            grammar_index: data::CSS_PROPERTIES.iter().copied().collect(),
        }
    }

    /// Raw value grammar of `property`, if it is a known property.
    ///
    /// An empty string means the property is known but has no keyword
    /// values.
    pub fn property_values(&self, property: &str) -> Option<&'static str> {
        self.grammar_index.get(property).copied()
    }

    /// Expansion of a placeholder such as `<border-style>`.
    pub fn common_values(&self, placeholder: &str) -> Option<&'static [&'static str]> {
        self.common_css_values
            .iter()
            .find(|&&(name, _)| name == placeholder)
            .map(|&(_, values)| values)
    }

    /// Completion values for a property grammar, placeholders expanded.
    ///
    /// Unknown placeholders expand to nothing.
    pub fn expand_property_values(&self, grammar: &'static str) -> KeywordSet {
        let mut values = KeywordSet::new();
        for item in grammar.split(',').filter(|item| !item.is_empty()) {
            if item.contains('<') {
                if let Some(expansion) = self.common_values(item) {
                    values.extend(expansion.iter().copied());
                }
            } else {
                values.insert(item);
            }
        }
        values
    }

    /// Every word a plain word-list completer should know about.
    ///
    /// Concatenation of the tables in a fixed order; a word listed by more
    /// than one table appears once per table.
    pub fn hint_words(&self) -> Vec<&'static str> {
        [
            &self.document_types,
            &self.media_types,
            &self.media_features,
            &self.media_value_keywords,
            &self.property_keywords,
            &self.non_standard_property_keywords,
            &self.color_keywords,
            &self.value_keywords,
        ]
        .into_iter()
        .flat_map(KeywordSet::iter)
        .collect()
    }
}

impl Default for CssTables {
    fn default() -> Self {
        Self::new()
    }
}

fn derive_value_keywords(
    properties: &'static [(&'static str, &'static str)],
    common: &'static [(&'static str, &'static [&'static str])],
) -> KeywordSet {
    let mut values = KeywordSet::new();
    for &(_, grammar) in properties {
        if grammar.is_empty() {
            continue;
        }
        values.extend(grammar.split(',').filter(|item| !item.contains('<')));
    }
    for &(placeholder, expansion) in common {
        if placeholder != data::COLOR_PLACEHOLDER {
            values.extend(expansion.iter().copied());
        }
    }
    values
}

// Global singleton for the keyword tables
static GLOBAL_TABLES: OnceLock<CssTables> = OnceLock::new();

/// Get the global keyword tables (lazily initialized).
pub fn tables() -> &'static CssTables {
    GLOBAL_TABLES.get_or_init(CssTables::new)
}
