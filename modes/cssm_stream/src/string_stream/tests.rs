use super::*;
use pretty_assertions::assert_eq;

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn digits(text: &str) -> Option<usize> {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    (len > 0).then_some(len)
}

// === Basic Navigation ===

#[test]
fn next_consumes_one_char() {
    let mut stream = StringStream::new("abc", 4);
    assert_eq!(stream.next(), Some('a'));
    assert_eq!(stream.pos(), 1);
    assert_eq!(stream.current(), "a");
}

#[test]
fn next_at_end_returns_none() {
    let mut stream = StringStream::new("", 4);
    assert!(stream.eol());
    assert_eq!(stream.next(), None);
}

#[test]
fn peek_does_not_consume() {
    let stream = StringStream::new("xy", 4);
    assert_eq!(stream.peek(), Some('x'));
    assert_eq!(stream.pos(), 0);
    assert!(stream.sol());
}

#[test]
fn multibyte_chars_advance_by_width() {
    let mut stream = StringStream::new("é→z", 4);
    assert_eq!(stream.next(), Some('é'));
    assert_eq!(stream.next(), Some('→'));
    assert_eq!(stream.current(), "é→");
    assert_eq!(stream.peek(), Some('z'));
}

// === Eating ===

#[test]
fn eat_matches_exact_char() {
    let mut stream = StringStream::new("ab", 4);
    assert!(!stream.eat('b'));
    assert!(stream.eat('a'));
    assert!(stream.eat('b'));
    assert!(stream.eol());
}

#[test]
fn eat_if_uses_class() {
    let mut stream = StringStream::new("a-", 4);
    assert_eq!(stream.eat_if(is_word), Some('a'));
    assert_eq!(stream.eat_if(is_word), None);
    assert_eq!(stream.peek(), Some('-'));
}

#[test]
fn eat_while_reports_progress() {
    let mut stream = StringStream::new("word_1 rest", 4);
    assert!(stream.eat_while(is_word));
    assert_eq!(stream.current(), "word_1");
    assert!(!stream.eat_while(is_word));
}

#[test]
fn eat_space_includes_no_break_space() {
    let mut stream = StringStream::new(" \t\u{a0}x", 4);
    assert!(stream.eat_space());
    assert_eq!(stream.peek(), Some('x'));
}

#[test]
fn skip_to_end_consumes_line() {
    let mut stream = StringStream::new("// comment", 4);
    stream.skip_to_end();
    assert!(stream.eol());
    assert_eq!(stream.current(), "// comment");
}

// === Matching ===

#[test]
fn match_str_lookahead_keeps_position() {
    let mut stream = StringStream::new("omain(x)", 4);
    assert!(stream.match_str("omain(", false));
    assert_eq!(stream.pos(), 0);
    assert!(stream.match_str("omain(", true));
    assert_eq!(stream.rest(), "x)");
}

#[test]
fn match_str_is_anchored() {
    let mut stream = StringStream::new("x omain(", 4);
    assert!(!stream.match_str("omain(", true));
    assert_eq!(stream.pos(), 0);
}

#[test]
fn match_with_consumes_pattern_length() {
    let mut stream = StringStream::new("123px", 4);
    assert!(stream.match_with(digits, true));
    assert_eq!(stream.current(), "123");
    assert!(!stream.match_with(digits, true));
}

// === Backing Up ===

#[test]
fn back_up_counts_chars_not_bytes() {
    let mut stream = StringStream::new("aé(", 4);
    stream.skip_to_end();
    stream.back_up(2);
    assert_eq!(stream.rest(), "é(");
}

#[test]
fn back_up_past_start_clamps_to_zero() {
    let mut stream = StringStream::new("ab", 4);
    stream.next();
    stream.back_up(5);
    assert_eq!(stream.pos(), 0);
}

#[test]
fn start_token_resets_lexeme() {
    let mut stream = StringStream::new("ab cd", 4);
    stream.eat_while(is_word);
    stream.start_token();
    stream.eat_space();
    stream.start_token();
    stream.eat_while(is_word);
    assert_eq!(stream.current(), "cd");
    assert_eq!(stream.start(), 3);
}

// === Columns ===

#[test]
fn indentation_expands_tabs() {
    let stream = StringStream::new("\t  color: red;", 4);
    assert_eq!(stream.indentation(), 6);
}

#[test]
fn indentation_of_blank_line_is_its_width() {
    let stream = StringStream::new("   ", 4);
    assert_eq!(stream.indentation(), 3);
}

#[test]
fn column_tracks_lexeme_start() {
    let mut stream = StringStream::new("\tab", 8);
    stream.eat_space();
    stream.start_token();
    assert_eq!(stream.column(), 8);
}

#[test]
fn count_column_ignores_out_of_range_end() {
    assert_eq!(count_column("ab", 10, 4), 2);
}

mod proptest_stream {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn next_until_eol_visits_every_char(line in ".{0,64}") {
            let mut stream = StringStream::new(&line, 4);
            let mut seen = String::new();
            while let Some(ch) = stream.next() {
                seen.push(ch);
            }
            prop_assert_eq!(seen, line.clone());
            prop_assert!(stream.eol());
        }

        #[test]
        fn back_up_inverts_next(line in ".{1,32}", steps in 1usize..8) {
            let mut stream = StringStream::new(&line, 4);
            let mut taken = 0;
            while taken < steps && stream.next().is_some() {
                taken += 1;
            }
            stream.back_up(taken);
            prop_assert_eq!(stream.pos(), 0);
        }
    }
}
