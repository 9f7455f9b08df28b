use super::*;
use pretty_assertions::assert_eq;

#[test]
fn important_tail_always_matches() {
    assert_eq!(important_tail("important;"), Some(9));
    assert_eq!(important_tail("  important"), Some(11));
    assert_eq!(important_tail(";"), Some(0));
    assert_eq!(important_tail(""), Some(0));
}

#[test]
fn custom_property_name_needs_a_body() {
    assert_eq!(custom_property_name("-main-color: red"), Some(11));
    assert_eq!(custom_property_name("-"), None);
    assert_eq!(custom_property_name("main"), None);
}

#[test]
fn colons() {
    assert_eq!(definition_colon("  : x"), Some(3));
    assert_eq!(definition_colon("x:"), None);
    assert_eq!(property_colon(": red"), Some(2));
    assert_eq!(property_colon(":"), Some(1));
    assert_eq!(property_colon(":hover"), None);
    assert_eq!(property_colon(" :\tx"), Some(3));
}

#[test]
fn vendor_prefix_requires_word_then_dash() {
    assert_eq!(vendor_prefix("webkit-box"), Some(7));
    assert_eq!(vendor_prefix("webkit"), None);
    assert_eq!(vendor_prefix("-x"), None);
}

#[test]
fn class_names() {
    assert_eq!(class_name("nav-item {"), Some(8));
    assert_eq!(class_name("-x"), Some(2));
    assert_eq!(class_name("_a1"), Some(3));
    assert_eq!(class_name("5col"), None);
    assert_eq!(class_name("-"), None);
    assert_eq!(class_name(""), None);
}

#[test]
fn url_tails() {
    assert_eq!(url_tail("rl(x)"), Some(3));
    assert_eq!(url_tail("rl-prefix(x)"), Some(10));
    assert_eq!(url_tail("rl (x)"), None);
}

#[test]
fn quote_or_close() {
    assert_eq!(quote_or_close_ahead("'a')"), Some(1));
    assert_eq!(quote_or_close_ahead("  \"a\")"), Some(3));
    assert_eq!(quote_or_close_ahead(")"), Some(1));
    assert_eq!(quote_or_close_ahead("a.png)"), None);
    assert_eq!(quote_or_close_ahead(""), None);
}

#[test]
fn brace_and_dollar() {
    assert_eq!(brace_ahead(" {"), Some(2));
    assert_eq!(brace_ahead("x{"), None);
    assert_eq!(dollar_name("base-color: red"), Some(10));
    assert_eq!(dollar_name(": red"), None);
}

#[test]
fn less_at_rules_stop_at_word_boundary() {
    assert_eq!(less_at_rule("media screen"), Some(5));
    assert_eq!(less_at_rule("media"), Some(5));
    assert_eq!(less_at_rule("-webkit-keyframes x"), Some(17));
    assert_eq!(less_at_rule("font-face{"), Some(9));
    assert_eq!(less_at_rule("mediaQuery"), None);
    assert_eq!(less_at_rule("media-x"), Some(5));
    assert_eq!(less_at_rule("color"), None);
}

#[test]
fn at_rule_classifiers() {
    assert!(is_document_rule("@-moz-document"));
    assert!(!is_document_rule("@documents"));
    assert!(is_media_like_rule("@import"));
    assert!(is_media_like_rule("@-moz-document"));
    assert!(!is_media_like_rule("@Media"));
    assert!(is_keyframes_rule("@-webkit-keyframes"));
    assert!(!is_keyframes_rule("@-khtml-keyframes"));
}

#[test]
fn hex_colors() {
    assert!(is_hex_color("#fff"));
    assert!(is_hex_color("#FFFA"));
    assert!(is_hex_color("#a1b2c3"));
    assert!(is_hex_color("#a1b2c3d4"));
    assert!(!is_hex_color("#abcde"));
    assert!(!is_hex_color("#ff"));
    assert!(!is_hex_color("#"));
    assert!(!is_hex_color("#ab-"));
    // the A..f range admits these
    assert!(is_hex_color("#GGG"));
    assert!(is_hex_color("#G_G"));
    assert!(!is_hex_color("#zzz"));
}
