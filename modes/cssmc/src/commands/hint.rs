//! `cssm hint`

use cssm_hint::hint_at;

use super::{mode_or_exit, print_json, read_file};
use crate::{parse_position, render_hints, HintsJson, Options};

/// Print the completions at `position` (`<line>:<ch>`) in `path`.
///
/// Prints nothing when the position offers no completions.
pub fn hint_file(path: &str, position: &str, options: &Options) {
    let Some((line, ch)) = parse_position(position) else {
        eprintln!("error: expected a cursor position as <line>:<ch>, got '{position}'");
        std::process::exit(1);
    };
    let content = read_file(path);
    let mode = mode_or_exit(Some(path), options);

    let Some(hints) = hint_at(&mode, &content, line, ch) else {
        return;
    };
    if options.json {
        print_json(&HintsJson {
            line,
            from: hints.from,
            to: hints.to,
            list: &hints.list,
        });
    } else {
        print!("{}", render_hints(line, &hints));
    }
}
