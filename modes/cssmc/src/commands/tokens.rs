//! `cssm tokens`

use cssm_mode::driver::highlight;
use tracing::debug;

use super::{mode_or_exit, print_json, read_file};
use crate::{render_tokens, Options};

/// Print the tokens of `path`.
///
/// Text output skips whitespace; `--json` emits every token.
pub fn tokens_file(path: &str, options: &Options) {
    let content = read_file(path);
    let mode = mode_or_exit(Some(path), options);
    let tokens = highlight(&mode, &content);
    debug!(path, dialect = %mode.dialect().dialect, count = tokens.len(), "tokenized");

    if options.json {
        print_json(&tokens);
    } else {
        print!("{}", render_tokens(&content, &tokens, options.config.tab_size));
    }
}
