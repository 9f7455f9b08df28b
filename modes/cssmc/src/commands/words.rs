//! `cssm words`

use super::print_json;
use crate::{hint_words, Options};

/// Print the plain completion word list of the selected dialect.
pub fn print_words(options: &Options) {
    let words = hint_words(options.dialect_for(None).config());
    if options.json {
        print_json(&words);
    } else {
        for word in words {
            println!("{word}");
        }
    }
}
