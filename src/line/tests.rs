//! Tests for line classification, fixup, and splitting.

use super::classify::{is_comment, is_hollow, is_section, is_value};
use super::fixup::{fixup_label, fixup_marker, fixup_title, fixup_value};
use super::split::{split_section_line, split_value_line};
use crate::style::Style;

#[test]
fn hollow_lines() {
    assert!(is_hollow(""));
    assert!(is_hollow("   "));
    assert!(is_hollow("\t \t"));
    assert!(!is_hollow("x"));
    assert!(!is_hollow(" # not hollow"));
}

#[test]
fn hollow_excludes_all_other_kinds() {
    for line in ["", " ", "\t", "   \t  "] {
        assert!(is_hollow(line));
        assert!(!is_comment(line));
        assert!(!is_section(line));
        assert!(!is_value(line));
    }
}

#[test]
fn comment_lines() {
    assert!(is_comment("# hash comment"));
    assert!(is_comment("; semicolon comment"));
    assert!(is_comment("   # indented"));
    assert!(!is_comment("label # not leading"));
    assert!(!is_comment("[section]"));
}

#[test]
fn section_lines() {
    assert!(is_section("[ ]"));
    assert!(is_section("[title]"));
    assert!(is_section("  [indented]"));
    assert!(is_section("[title] trailing comment"));
    assert!(!is_section("[no close"));
    assert!(!is_section("no open]"));
    assert!(!is_section("plain"));
}

#[test]
fn value_lines() {
    assert!(is_value("a="));
    assert!(is_value("a=b"));
    assert!(is_value("a: b"));
    assert!(is_value("  spaced = value"));
    assert!(!is_value("\"a\"=b"), "quote precedes marker");
    assert!(!is_value("# a = b"), "comment marker precedes marker");
    assert!(!is_value("bare label"));
}

#[test]
fn fixup_title_strips_markers_and_trims() {
    assert_eq!(fixup_title(" [title] "), "title");
    assert_eq!(fixup_title("[a[b]c]"), "abc");
    assert_eq!(fixup_title(""), "");
}

#[test]
fn fixup_label_trims_only() {
    assert_eq!(fixup_label("  label  "), "label");
    assert_eq!(fixup_label("[keeps]"), "[keeps]");
}

#[test]
fn fixup_value_quotes_reserved_characters() {
    assert_eq!(fixup_value("v # x"), "\"v # x\"");
    assert_eq!(fixup_value("a=b"), "\"a=b\"");
    assert_eq!(fixup_value("a:b"), "\"a:b\"");
    assert_eq!(fixup_value("a;b"), "\"a;b\"");
    assert_eq!(fixup_value("plain"), "plain");
    assert_eq!(fixup_value("  padded  "), "padded");
}

#[test]
fn fixup_value_is_idempotent() {
    let once = fixup_value("v # x");
    assert_eq!(fixup_value(&once), once);
}

#[test]
fn fixup_marker_spacing_follows_marker_identity() {
    // Spacing depends on the marker itself, not the style.
    assert_eq!(fixup_marker(':', &Style::Unix), ": ");
    assert_eq!(fixup_marker(':', &Style::Windows), ": ");
    assert_eq!(fixup_marker('=', &Style::Unix), " = ");
    assert_eq!(fixup_marker('=', &Style::Mixed), " = ");
}

#[test]
fn fixup_marker_substitutes_style_default_when_invalid() {
    assert_eq!(fixup_marker('@', &Style::Unix), ": ");
    assert_eq!(fixup_marker('@', &Style::Windows), " = ");
    assert_eq!(fixup_marker('@', &Style::Mixed), " = ");
}

#[test]
fn split_section_basic() {
    assert_eq!(split_section_line("[server]"), ("server".to_string(), None));
    assert_eq!(split_section_line("  [ server ]"), ("server".to_string(), None));
}

#[test]
fn split_section_with_inline_comment() {
    let (title, comment) = split_section_line("[server] # main block");
    assert_eq!(title, "server");
    assert_eq!(comment.as_deref(), Some("main block"));

    let (title, comment) = split_section_line("[server] unmarked trailer");
    assert_eq!(title, "server");
    assert_eq!(comment.as_deref(), Some("unmarked trailer"));
}

#[test]
fn split_value_basic() {
    assert_eq!(
        split_value_line("host = example.com"),
        ("host".to_string(), "example.com".to_string(), None)
    );
    assert_eq!(
        split_value_line("port: 8080"),
        ("port".to_string(), "8080".to_string(), None)
    );
}

#[test]
fn split_value_with_trailing_comment() {
    let (label, value, comment) = split_value_line("host = example.com # primary");
    assert_eq!(label, "host");
    assert_eq!(value, "example.com");
    assert_eq!(comment.as_deref(), Some("primary"));
}

#[test]
fn split_value_quoted_keeps_markers_literal() {
    let (label, value, comment) = split_value_line("greeting = \"hi # there\"");
    assert_eq!(label, "greeting");
    assert_eq!(value, "hi # there");
    assert_eq!(comment, None);

    let (label, value, comment) = split_value_line("expr = \"1+1=2\" ; math");
    assert_eq!(label, "expr");
    assert_eq!(value, "1+1=2");
    assert_eq!(comment.as_deref(), Some("math"));
}

#[test]
fn split_value_empty_value() {
    assert_eq!(split_value_line("a="), ("a".to_string(), String::new(), None));
}
