use super::*;
use crate::token::Style;
use crate::{Dialect, ModeConfig, State};
use pretty_assertions::assert_eq;

fn css() -> CssMode {
    CssMode::with_dialect(Dialect::Css)
}

#[test]
fn lines_strip_carriage_returns() {
    assert_eq!(lines("a\r\nb\n").collect::<Vec<_>>(), vec!["a", "b", ""]);
    assert_eq!(lines("").collect::<Vec<_>>(), vec![""]);
}

#[test]
fn highlight_positions() {
    let tokens = highlight(&css(), "a {\n  color: red;\n}");
    let color = tokens
        .iter()
        .find(|token| token.text == "color")
        .copied()
        .unwrap_or_else(|| panic!("no color token"));
    assert_eq!(
        color,
        LineToken {
            line: 1,
            start: 2,
            end: 7,
            text: "color",
            style: TokenStyle::new(Style::Property),
            kind: TokenKind::Word,
        }
    );
    assert_eq!(tokens.last().map(|token| (token.line, token.text)), Some((2, "}")));
}

#[test]
fn highlight_covers_every_byte() {
    let text = "a { b: url(x.png) /* c */ }";
    let joined: String = highlight(&css(), text).iter().map(|token| token.text).collect();
    assert_eq!(joined, text);
}

#[test]
fn zero_width_token_is_retried() {
    // the url argument continues onto a line that starts with its `)`
    let tokens = highlight(&css(), "a { b: url(\n) }");
    let close = tokens
        .iter()
        .find(|token| token.line == 1 && token.text == ")")
        .copied()
        .unwrap_or_else(|| panic!("no ) token"));
    assert_eq!(close.kind, TokenKind::RParen);
    assert_eq!(close.start, 0);
}

#[test]
fn run_mode_returns_final_state() {
    let state = run_mode(&css(), "a {\n  color:", |_| {});
    assert_eq!(state.state(), State::Prop);
    assert_eq!(state.context().depth(), 3);
}

#[test]
fn token_at_cursor() {
    let mode = css();
    let text = "a {\n  color: red;\n}";
    let at = token_at(&mode, text, 1, 5).unwrap_or_else(|| panic!("line exists"));
    assert_eq!((at.start, at.end, at.string.as_str()), (2, 7, "color"));
    assert_eq!(at.style, TokenStyle::new(Style::Property));
    assert_eq!(at.state.state(), State::MaybeProp);

    // a token ending exactly at the cursor
    let at = token_at(&mode, text, 1, 7).unwrap_or_else(|| panic!("line exists"));
    assert_eq!(at.string, "color");

    let at = token_at(&mode, text, 1, 12).unwrap_or_else(|| panic!("line exists"));
    assert_eq!(at.string, "red");
    assert_eq!(at.state.state(), State::Prop);
}

#[test]
fn token_at_line_start_and_past_end() {
    let mode = css();
    let at = token_at(&mode, "a {\n  color", 1, 0).unwrap_or_else(|| panic!("line exists"));
    assert_eq!((at.start, at.end, at.string.as_str()), (0, 0, ""));
    assert_eq!(at.state.state(), State::Block);
    assert_eq!(token_at(&mode, "a {", 3, 0), None);
}

#[test]
fn reindent_nested_rules() {
    let text = "a {\ncolor: red;\n}\n@media screen {\na {\nb: c;\n}\n}";
    let expected = "a {\n  color: red;\n}\n@media screen {\n  a {\n    b: c;\n  }\n}";
    assert_eq!(reindent(&css(), text), expected);
}

#[test]
fn reindent_dedents_at_rule_body_brace() {
    let text = "@media screen\n    {\n a { }\n        }";
    assert_eq!(reindent(&css(), text), "@media screen\n{\n  a { }\n}");
}

#[test]
fn reindent_blank_lines_and_unit() {
    let mode = CssMode::new(ModeConfig::new().with_indent_unit(4), Dialect::Scss)
        .unwrap_or_else(|err| panic!("{err}"));
    let text = "a {\n   \n\tb {\ncolor: red;\n}\n}\n";
    assert_eq!(
        reindent(&mode, text),
        "a {\n\n    b {\n        color: red;\n    }\n}\n"
    );
}

#[test]
fn reindent_is_idempotent_on_examples() {
    let mode = css();
    for text in [
        "a {\n  b: f(\n1,\n2\n);\n}",
        "@font-face {\nsrc: x;\n}",
        "/* a\nb */\nc {}",
        "} }\n)\na {",
    ] {
        let once = reindent(&mode, text);
        assert_eq!(reindent(&mode, &once), once, "{text:?}");
    }
}

#[test]
fn indent_line_trims_leading_space() {
    let mode = css();
    let state = run_mode(&mode, "a {", |_| {});
    assert_eq!(indent_line(&mode, &state, "    }"), 0);
    assert_eq!(indent_line(&mode, &state, "color: red;"), 2);
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_driver {
    use super::super::{highlight, lines, reindent, run_mode};
    use crate::{CssMode, Dialect};
    use proptest::prelude::*;

    const CSS_ALPHABET: &str = "[a-z0-9 {}();:#@.,!'\"/*\\\\$&%\\-\\n\\t]{0,120}";

    fn dialect() -> impl Strategy<Value = Dialect> {
        prop_oneof![
            Just(Dialect::Css),
            Just(Dialect::Scss),
            Just(Dialect::Less),
            Just(Dialect::Gss),
        ]
    }

    proptest! {
        #[test]
        fn tokens_reconstruct_each_line(text in CSS_ALPHABET, dialect in dialect()) {
            let mode = CssMode::with_dialect(dialect);
            let tokens = highlight(&mode, &text);
            for (line_no, line) in lines(&text).enumerate() {
                let mut pos = 0;
                let mut rebuilt = String::new();
                for token in tokens.iter().filter(|token| token.line == line_no) {
                    prop_assert_eq!(token.start, pos);
                    prop_assert!(token.end > token.start);
                    rebuilt.push_str(token.text);
                    pos = token.end;
                }
                prop_assert_eq!(rebuilt, line);
            }
        }

        #[test]
        fn reindent_is_idempotent(text in CSS_ALPHABET, dialect in dialect()) {
            let mode = CssMode::with_dialect(dialect);
            let once = reindent(&mode, &text);
            prop_assert_eq!(reindent(&mode, &once), once);
        }

        #[test]
        fn nested_parens_balance(depth in 1usize..40) {
            let mode = CssMode::with_dialect(Dialect::Css);
            let text = format!("a {{ b: {}v{}; }}", "(".repeat(depth), ")".repeat(depth));
            prop_assert_eq!(run_mode(&mode, &text, |_| {}), mode.start_state(0));
        }
    }
}
