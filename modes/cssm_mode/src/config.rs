//! Host-supplied mode options.

use crate::ModeError;

/// Default columns per nesting level.
pub const DEFAULT_INDENT_UNIT: usize = 2;

/// Default tab stop width.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Options the host editor passes when instantiating a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeConfig {
    /// Columns added per nesting level.
    pub indent_unit: usize,
    /// Tab stop width used when measuring line indentation.
    pub tab_size: usize,
    /// Text is a declaration list (a `style` attribute), not a stylesheet.
    pub inline: bool,
}

impl ModeConfig {
    pub const fn new() -> Self {
        ModeConfig {
            indent_unit: DEFAULT_INDENT_UNIT,
            tab_size: DEFAULT_TAB_SIZE,
            inline: false,
        }
    }

    #[must_use]
    pub const fn with_indent_unit(mut self, indent_unit: usize) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    #[must_use]
    pub const fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    #[must_use]
    pub const fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Reject option values no host could mean.
    pub fn validate(&self) -> Result<(), ModeError> {
        if self.indent_unit == 0 {
            return Err(ModeError::InvalidIndentUnit(self.indent_unit));
        }
        if self.tab_size == 0 {
            return Err(ModeError::InvalidTabSize(self.tab_size));
        }
        Ok(())
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self::new()
    }
}
