use super::*;
use crate::error::Axis;

fn render(mode: ColorMode, err: &PointError) -> String {
    let mut buf = Vec::new();
    ErrorOutput::new(mode).write_error(&mut buf, err);
    String::from_utf8(buf).unwrap()
}

#[test]
fn config_error_without_colors() {
    let err = PointError::Config("bad version".to_string());
    assert_eq!(render(ColorMode::Never, &err), "✖ Config: bad version\n");
}

#[test]
fn type_mismatch_has_detail_and_help() {
    let err = PointError::TypeMismatch {
        axis: Axis::X,
        found: "str",
    };
    let result = render(ColorMode::Never, &err);
    assert!(result.starts_with("✖ Type: x must be a number\n"));
    assert!(result.contains("  × found a value of kind 'str'\n"));
    assert!(result.contains("  help: pass numeric coordinates"));
}

#[test]
fn invalid_color_lists_allowed() {
    let err = PointError::InvalidColor {
        color: "teal".to_string(),
        allowed: vec!["red".to_string(), "blue".to_string()],
    };
    let result = render(ColorMode::Never, &err);
    assert!(result.contains("✖ Color: invalid color 'teal'"));
    assert!(result.contains("allowed colors: red, blue"));
}

#[test]
fn colors_wrap_headline_in_ansi_codes() {
    let err = PointError::Config("oops".to_string());
    let result = render(ColorMode::Always, &err);
    assert!(result.contains("\x1b[1m\x1b[31m✖ Config:\x1b[0m oops"));
}

#[test]
fn warning_and_note_without_colors() {
    let out = ErrorOutput::new(ColorMode::Never);
    let mut buf = Vec::new();
    out.write_warning(&mut buf, "duplicate color");
    out.write_note(&mut buf, "config loaded");
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "⚠ Warning: duplicate color\n· config loaded\n"
    );
}
