//! Shared helpers for phase tests.

use cssm_mode::{CssMode, Dialect};

/// Owned argument vector, as `std::env::args` would produce.
pub fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_string()).collect()
}

/// Mode with default options.
pub fn mode(dialect: Dialect) -> CssMode {
    CssMode::with_dialect(dialect)
}
