//! Argument parsing and mode construction.

use cssm_mode::{Dialect, ModeConfig, ModeError};
use cssmc::{parse_position, Options};
use pretty_assertions::assert_eq;

use crate::common::args;

#[test]
fn defaults_without_options() {
    let argv = args(&["style.css"]);
    let (options, positional) = Options::parse(&argv).unwrap();
    assert_eq!(options, Options::default());
    assert_eq!(positional, vec!["style.css"]);
}

#[test]
fn every_option() {
    let argv = args(&[
        "--dialect=less",
        "in.css",
        "--inline",
        "--indent-unit=4",
        "--tab-size=8",
        "--json",
        "0:1",
    ]);
    let (options, positional) = Options::parse(&argv).unwrap();
    assert_eq!(
        options,
        Options {
            dialect: Some(Dialect::Less),
            config: ModeConfig::new()
                .with_inline(true)
                .with_indent_unit(4)
                .with_tab_size(8),
            json: true,
        }
    );
    assert_eq!(positional, vec!["in.css", "0:1"]);
}

#[test]
fn dialect_accepts_mime_names() {
    let argv = args(&["--dialect=text/x-scss"]);
    let (options, _) = Options::parse(&argv).unwrap();
    assert_eq!(options.dialect, Some(Dialect::Scss));
}

#[test]
fn bad_options_are_reported() {
    let err = Options::parse(&args(&["--dialect=sass"])).unwrap_err();
    assert!(err.contains("sass"), "{err}");

    let err = Options::parse(&args(&["--indent-unit=two"])).unwrap_err();
    assert_eq!(err, "--indent-unit expects a column count, got 'two'");

    let err = Options::parse(&args(&["--verbose"])).unwrap_err();
    assert_eq!(err, "unknown option '--verbose'");
}

#[test]
fn dialect_follows_extension_unless_given() {
    let options = Options::default();
    assert_eq!(options.dialect_for(Some("theme.scss")), Dialect::Scss);
    assert_eq!(options.dialect_for(Some("dir/theme.LESS")), Dialect::Less);
    assert_eq!(options.dialect_for(Some("notes.txt")), Dialect::Css);
    assert_eq!(options.dialect_for(None), Dialect::Css);

    let options = Options {
        dialect: Some(Dialect::Gss),
        ..Options::default()
    };
    assert_eq!(options.dialect_for(Some("theme.scss")), Dialect::Gss);
}

#[test]
fn zero_widths_are_rejected_when_building_the_mode() {
    let (options, _) = Options::parse(&args(&["--indent-unit=0"])).unwrap();
    assert_eq!(
        options.mode_for(None).map(|_| ()),
        Err(ModeError::InvalidIndentUnit(0))
    );

    let (options, _) = Options::parse(&args(&["--tab-size=0"])).unwrap();
    assert_eq!(
        options.mode_for(None).map(|_| ()),
        Err(ModeError::InvalidTabSize(0))
    );
}

#[test]
fn mode_uses_the_selected_dialect() {
    let mode = Options::default().mode_for(Some("a.less")).unwrap();
    assert_eq!(mode.dialect().dialect, Dialect::Less);
}

#[test]
fn cursor_positions() {
    assert_eq!(parse_position("3:7"), Some((3, 7)));
    assert_eq!(parse_position("0:0"), Some((0, 0)));
    assert_eq!(parse_position("3"), None);
    assert_eq!(parse_position("a:1"), None);
    assert_eq!(parse_position("1:-2"), None);
}
