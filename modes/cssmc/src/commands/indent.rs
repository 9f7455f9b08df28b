//! `cssm indent`

use cssm_mode::driver::reindent;

use super::{mode_or_exit, read_file};
use crate::Options;

/// Print `path` with every line reindented.
pub fn indent_file(path: &str, options: &Options) {
    let content = read_file(path);
    let mode = mode_or_exit(Some(path), options);
    let out = reindent(&mode, &content);
    if out.is_empty() {
        return;
    }
    print!("{out}");
    if !out.ends_with('\n') {
        println!();
    }
}
