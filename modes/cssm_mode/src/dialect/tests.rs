use super::*;
use pretty_assertions::assert_eq;

#[test]
fn parse_names_and_mimes() {
    assert_eq!("css".parse::<Dialect>(), Ok(Dialect::Css));
    assert_eq!("SCSS".parse::<Dialect>(), Ok(Dialect::Scss));
    assert_eq!("text/x-less".parse::<Dialect>(), Ok(Dialect::Less));
    assert_eq!("text/x-gss".parse::<Dialect>(), Ok(Dialect::Gss));
    assert_eq!(
        "sass".parse::<Dialect>(),
        Err(ModeError::UnknownDialect("sass".to_string()))
    );
}

#[test]
fn names_and_mimes_round_trip() {
    for dialect in Dialect::ALL {
        assert_eq!(dialect.name().parse::<Dialect>(), Ok(dialect));
        assert_eq!(dialect.mime().parse::<Dialect>(), Ok(dialect));
        assert_eq!(dialect.config().dialect, dialect);
    }
}

#[test]
fn dialect_from_path() {
    assert_eq!(Dialect::from_path(Path::new("site/main.scss")), Some(Dialect::Scss));
    assert_eq!(Dialect::from_path(Path::new("THEME.LESS")), Some(Dialect::Less));
    assert_eq!(Dialect::from_path(Path::new("style.css")), Some(Dialect::Css));
    assert_eq!(Dialect::from_path(Path::new("notes.txt")), None);
    assert_eq!(Dialect::from_path(Path::new("Makefile")), None);
}

#[test]
fn css_has_every_table() {
    let css = Dialect::Css.config();
    assert!(css.document_types.contains("url-prefix"));
    assert!(css.counter_descriptors.contains("symbols"));
    assert!(css.media_value_keywords.contains("landscape"));
    assert!(!css.allow_nested);
    assert!(!css.supports_at_component);
}

#[test]
fn preprocessors_nest_and_drop_tables() {
    for dialect in [Dialect::Scss, Dialect::Less] {
        let config = dialect.config();
        assert!(config.allow_nested);
        assert!(config.document_types.is_empty());
        assert!(config.counter_descriptors.is_empty());
        assert!(config.font_properties.contains("src"));
        assert!(config.media_value_keywords.contains("landscape"));
    }
}

#[test]
fn gss_components_without_media_values() {
    let gss = Dialect::Gss.config();
    assert!(gss.supports_at_component);
    assert!(!gss.allow_nested);
    assert!(gss.media_value_keywords.is_empty());
    assert!(gss.document_types.contains("domain"));
}

#[test]
fn hook_registration() {
    assert_eq!(Dialect::Css.config().hook('/'), Some(Hook::BlockComment));
    assert_eq!(Dialect::Css.config().hook('$'), None);
    assert_eq!(Dialect::Scss.config().hook('/'), Some(Hook::Comments));
    assert_eq!(Dialect::Scss.config().hook('#'), Some(Hook::HashInterpolation));
    assert_eq!(Dialect::Less.config().hook('@'), Some(Hook::AtVariable));
    assert_eq!(Dialect::Less.config().hook('&'), Some(Hook::ParentSelector));
    assert_eq!(Dialect::Less.config().hook(':'), None);
    assert_eq!(Dialect::Gss.config().hooks().len(), 1);
}
