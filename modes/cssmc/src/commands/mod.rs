//! Command handlers for the `cssm` binary.
//!
//! Each handler reads its input, reports failures on stderr and exits with
//! status 1. Shared helpers live here in the module root.

mod hint;
mod indent;
mod tokens;
mod words;

pub use hint::hint_file;
pub use indent::indent_file;
pub use tokens::tokens_file;
pub use words::print_words;

use cssm_mode::CssMode;

use crate::Options;

/// Read a source file, exiting with a specific message if it cannot be read.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Build the mode for `path`, exiting on invalid options.
pub(super) fn mode_or_exit(path: Option<&str>, options: &Options) -> CssMode {
    match options.mode_for(path) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Print `value` as pretty JSON, exiting if it cannot be serialized.
pub(super) fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: cannot serialize output: {e}");
            std::process::exit(1);
        }
    }
}
