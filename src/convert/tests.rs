//! Tests for scalar conversion.

use super::{Culture, Scalar, parse_scalar};
use crate::config_enum;
use crate::error::ConfigError;
use chrono::NaiveDate;

config_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Verbosity { Quiet, Normal, Loud }
}

const INVARIANT: Culture = Culture::invariant();

#[test]
fn string_passes_through() {
    assert_eq!(String::parse("  spaced  ", &INVARIANT).unwrap(), "  spaced  ");
    assert_eq!(String::parse("", &INVARIANT).unwrap(), "");
}

#[test]
fn bool_accepts_common_spellings() {
    for text in ["true", "YES", "On", "1"] {
        assert!(bool::parse(text, &INVARIANT).unwrap(), "{text}");
    }
    for text in ["false", "no", "OFF", "0"] {
        assert!(!bool::parse(text, &INVARIANT).unwrap(), "{text}");
    }
    assert!(bool::parse("maybe", &INVARIANT).is_err());
}

#[test]
fn integers_are_culture_invariant() {
    assert_eq!(i32::parse(" -42 ", &INVARIANT).unwrap(), -42);
    assert_eq!(u16::parse("8080", &Culture::with_decimal_separator(',')).unwrap(), 8080);
    assert!(i32::parse("4.2", &INVARIANT).is_err());
}

#[test]
fn floats_respect_the_decimal_separator() {
    let comma = Culture::with_decimal_separator(',');
    assert_eq!(f64::parse("1,23", &comma).unwrap(), 1.23);
    assert_eq!(f64::parse("1.23", &INVARIANT).unwrap(), 1.23);
    assert_eq!(1.5f64.render(&comma), "1,5");
    assert_eq!(1.5f64.render(&INVARIANT), "1.5");
}

#[test]
fn float_render_round_trips_under_any_culture() {
    let comma = Culture::with_decimal_separator(',');
    let value = -273.15f64;
    let text = value.render(&comma);
    assert_eq!(f64::parse(&text, &comma).unwrap(), value);
}

#[test]
fn char_requires_exactly_one_character() {
    assert_eq!(char::parse(" x ", &INVARIANT).unwrap(), 'x');
    assert!(char::parse("xy", &INVARIANT).is_err());
    assert!(char::parse("", &INVARIANT).is_err());
}

#[test]
fn dates_use_iso_formats() {
    let date = NaiveDate::parse("2026-08-27", &INVARIANT).unwrap();
    assert_eq!(date.render(&INVARIANT), "2026-08-27");
    assert!(NaiveDate::parse("27/08/2026", &INVARIANT).is_err());
}

#[test]
fn enum_names_match_case_insensitively() {
    assert_eq!(Verbosity::parse("loud", &INVARIANT).unwrap(), Verbosity::Loud);
    assert_eq!(Verbosity::parse(" QUIET ", &INVARIANT).unwrap(), Verbosity::Quiet);
    let err = Verbosity::parse("silent", &INVARIANT).unwrap_err();
    assert!(err.reason.contains("silent"));
    assert!(err.reason.contains("Quiet"), "names the declared members");
}

#[test]
fn enum_renders_declared_name() {
    assert_eq!(Verbosity::Normal.render(&INVARIANT), "Normal");
}

#[test]
fn option_treats_hollow_as_no_value() {
    assert_eq!(Option::<i32>::parse("", &INVARIANT).unwrap(), None);
    assert_eq!(Option::<i32>::parse("   ", &INVARIANT).unwrap(), None);
    assert_eq!(Option::<i32>::parse("7", &INVARIANT).unwrap(), Some(7));
    assert!(Option::<i32>::parse("x", &INVARIANT).is_err());

    assert_eq!(Option::<Verbosity>::parse(" ", &INVARIANT).unwrap(), None);
    assert_eq!(
        Option::<Verbosity>::parse("normal", &INVARIANT).unwrap(),
        Some(Verbosity::Normal)
    );
}

#[test]
fn option_renders_none_as_empty() {
    assert_eq!(None::<i32>.render(&INVARIANT), "");
    assert_eq!(Some(5).render(&INVARIANT), "5");
}

#[test]
fn parse_scalar_attaches_the_label() {
    let err = parse_scalar::<i32>("port", "abc", &INVARIANT).unwrap_err();
    match err {
        ConfigError::Conversion { label, value, .. } => {
            assert_eq!(label, "port");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
