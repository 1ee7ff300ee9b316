use super::enums::{parse_variant, valid_csv};
use super::string::{EscapeMarkdown, NormalizeWhitespace, split_args};
use crate::core::types::RunMode;

#[test]
fn valid_csv_lists_enum_variants_as_strings() {
    let csv = valid_csv::<RunMode>();
    assert_eq!(csv, "desk, bot");
}

#[test]
fn parse_variant_reports_valid_values() {
    let mode: RunMode = parse_variant(" BOT ", "mode").unwrap();
    assert_eq!(mode, RunMode::Bot);

    let err = parse_variant::<RunMode>("gui", "mode").unwrap_err();
    assert_eq!(err, "Unsupported mode: 'gui'. Valid values: desk, bot");
}

#[test]
fn normalize_whitespace_collapses_runs() {
    assert_eq!("  חלב   3\tליטר ".normalize_whitespace(), "חלב 3 ליטר");
    assert_eq!(String::from("   ").normalize_whitespace(), "");
}

#[test]
fn escape_markdown_prefixes_entity_openers() {
    assert_eq!("a_b*c`d[e".escape_markdown(), "a\\_b\\*c\\`d\\[e");
    assert_eq!("לחם".escape_markdown(), "לחם");
}

#[test]
fn split_args_keeps_quoted_runs() {
    assert_eq!(
        split_args(r#"del "שמנת מתוקה" 2"#),
        vec!["del", "שמנת מתוקה", "2"]
    );
    assert_eq!(split_args("  list  "), vec!["list"]);
    assert_eq!(split_args(r#"load """#), vec!["load", ""]);
    assert_eq!(split_args(r#"load "a b"#), vec!["load", "a b"]);
}
