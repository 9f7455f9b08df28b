//! Whole documents through every command's pipeline.

use cssm_hint::hint_at;
use cssm_mode::driver::{highlight, lines, reindent};
use cssm_mode::{Dialect, TokenKind};
use pretty_assertions::assert_eq;

use crate::common::mode;

const SCSS: &str = "$gap: 4px;\n.card {\n&:hover { color: red; }\n.title {\nmargin: #{$gap} 0;\n}\n}\n";

const LESS: &str = "@accent: blue;\n.btn {\n  color: @accent;\n  &:focus { outline: none }\n}\n";

#[test]
fn every_dialect_covers_the_document() {
    for dialect in Dialect::ALL {
        for text in [SCSS, LESS] {
            let tokens = highlight(&mode(dialect), text);
            for (line_no, line) in lines(text).enumerate() {
                let rebuilt: String = tokens
                    .iter()
                    .filter(|token| token.line == line_no)
                    .map(|token| token.text)
                    .collect();
                assert_eq!(rebuilt, line, "{dialect} line {line_no}");
            }
        }
    }
}

#[test]
fn scss_document_reindents() {
    let expected = "$gap: 4px;\n.card {\n  &:hover { color: red; }\n  .title {\n    margin: #{$gap} 0;\n  }\n}\n";
    let mode = mode(Dialect::Scss);
    let once = reindent(&mode, SCSS);
    assert_eq!(once, expected);
    assert_eq!(reindent(&mode, &once), once);
}

#[test]
fn less_document_is_already_indented() {
    assert_eq!(reindent(&mode(Dialect::Less), LESS), LESS);
}

#[test]
fn less_variables_are_tokens() {
    let tokens = highlight(&mode(Dialect::Less), LESS);
    let accent: Vec<_> = tokens
        .iter()
        .filter(|token| token.text == "@accent")
        .map(|token| token.kind)
        .collect();
    assert_eq!(
        accent,
        vec![TokenKind::VariableDefinition, TokenKind::Variable]
    );
}

#[test]
fn completion_inside_a_reindented_document() {
    let mode = mode(Dialect::Scss);
    let text = reindent(&mode, ".card {\nfloat: ri\n}");
    let hints = hint_at(&mode, &text, 1, 11).unwrap();
    assert_eq!(hints.list, vec!["right"]);
    assert_eq!((hints.from, hints.to), (9, 11));
}
