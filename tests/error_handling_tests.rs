use tipwrap::text::{html_decode, html_decode_bounded, CaseStyle};
use tipwrap::{try_word_wrap, Locale, TextError, WrapOptions};

mod common;
use common::*;

#[test]
fn test_absent_text_is_invalid_argument() {
    let result = try_word_wrap(None, &WrapOptions::new(10));
    assert_eq!(result, Err(TextError::InvalidArgument("text")));
}

#[test]
fn test_absent_text_for_case_conversion() {
    for style in [CaseStyle::LowerCamel, CaseStyle::Sentence, CaseStyle::Title] {
        assert_eq!(
            style.try_apply(None),
            Err(TextError::InvalidArgument("text"))
        );
    }
}

#[test]
fn test_present_but_blank_text_is_not_an_error() {
    assert_eq!(try_word_wrap(Some(""), &WrapOptions::new(10)), Ok(String::new()));
    assert_eq!(try_word_wrap(Some(" \t "), &WrapOptions::new(10)), Ok(String::new()));
}

#[test]
fn test_degenerate_max_length_is_not_an_error() {
    for max_length in [i64::MIN, -1, 0] {
        assert_eq!(wrap_lines("a b", max_length, true), vec!["a", "b"]);
    }
    assert_eq!(wrap_lines("a b", i64::MAX, true), vec!["a b"]);
}

#[test]
fn test_malformed_tags_are_not_errors() {
    assert_eq!(wrap_lines("a > b", 3, true), vec!["a", ">", "b"]);
    assert_eq!(wrap_lines("<<<", 1, true), vec!["<<<"]);
    assert_eq!(wrap_lines("x <y z", 2, true), vec!["x  <y z"]);
}

#[test]
fn test_decode_bound_fails_closed() {
    let deep = format!("&{}gt;", "amp;".repeat(40));
    assert_eq!(
        html_decode(&deep),
        Err(TextError::DecodeDidNotConverge { iterations: 32 })
    );
    assert_eq!(html_decode_bounded(&deep, 64).as_deref(), Ok(">"));
}

#[test]
fn test_unknown_locale() {
    let err = "klingon".parse::<Locale>().unwrap_err();
    assert_eq!(err, TextError::UnknownLocale("klingon".to_string()));
    assert_eq!(err.to_string(), "Unknown locale: klingon");
}
