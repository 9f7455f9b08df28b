//! Command output.

use cssm_hint::{hint_at, Hints};
use cssm_mode::driver::highlight;
use cssm_mode::Dialect;
use cssm_tables::tables;
use cssmc::{hint_words, render_hints, render_tokens, HintsJson};
use pretty_assertions::assert_eq;

use crate::common::mode;

#[test]
fn token_lines_skip_whitespace_and_expand_tabs() {
    let text = "a {\n\tcolor: red;\n}";
    let tokens = highlight(&mode(Dialect::Css), text);
    let out = render_tokens(text, &tokens, 4);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "0:0-1 @0\ttag\tword\t\"a\"");
    assert_eq!(lines[1], "0:2-3 @2\t-\t{\t\"{\"");
    assert_eq!(lines[2], "1:1-6 @4\tproperty\tword\t\"color\"");
    assert_eq!(lines[6], "2:0-1 @0\t-\t}\t\"}\"");
}

#[test]
fn tokens_as_json() {
    let tokens = highlight(&mode(Dialect::Css), "a {}");
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(
        json[0],
        serde_json::json!({
            "line": 0,
            "start": 0,
            "end": 1,
            "text": "a",
            "style": "tag",
            "kind": "word",
        })
    );
    assert_eq!(json[1]["kind"], "whitespace");
    assert_eq!(json[1]["style"], "");
}

#[test]
fn hints_as_text_and_json() {
    let hints = hint_at(&mode(Dialect::Css), "a { float: l", 0, 12).unwrap();
    assert_eq!(render_hints(0, &hints), "0:11-12\nleft\n");

    let json = serde_json::to_value(HintsJson {
        line: 0,
        from: hints.from,
        to: hints.to,
        list: &hints.list,
    })
    .unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "line": 0, "from": 11, "to": 12, "list": ["left"] })
    );
}

#[test]
fn empty_hint_list_renders_header_only() {
    let hints = Hints {
        list: Vec::new(),
        from: 3,
        to: 3,
    };
    assert_eq!(render_hints(2, &hints), "2:3-3\n");
}

#[test]
fn css_word_list_matches_the_shared_tables() {
    assert_eq!(hint_words(Dialect::Css.config()), tables().hint_words());
}

#[test]
fn nesting_dialects_drop_document_types() {
    let css = hint_words(Dialect::Css.config());
    let scss = hint_words(Dialect::Scss.config());
    assert_eq!(scss.len(), css.len() - tables().document_types.len());
    assert!(!scss.contains(&"url-prefix"));
    assert!(css.contains(&"url-prefix"));
}
