use tipwrap::wrap::{normalize, tokenize};
use tipwrap::{word_wrap_with, LineEnding, WrapOptions};

/// Wrap with LF endings and split the result back into lines.
pub fn wrap_lines(text: &str, max_length: i64, remove_new_line: bool) -> Vec<String> {
    let options = WrapOptions {
        max_length,
        remove_new_line,
        line_ending: LineEnding::Lf,
    };
    let wrapped = word_wrap_with(text, &options);
    assert!(
        wrapped.is_empty() || wrapped.ends_with('\n'),
        "every line must be terminated: {wrapped:?}"
    );
    wrapped.lines().map(str::to_string).collect()
}

/// Tokens of the normalized input, as owned strings.
#[allow(dead_code)]
pub fn normalized_tokens(text: &str, remove_new_line: bool) -> Vec<String> {
    let normalized = normalize(text, remove_new_line, LineEnding::Lf);
    tokenize(&normalized)
        .iter()
        .map(|token| token.text().to_string())
        .collect()
}

/// Asserts no line opens a tag (`<`) without closing it (`>`) later on the same line.
#[allow(dead_code)]
pub fn assert_tag_spans_intact(lines: &[String]) {
    for line in lines {
        if let Some(open) = line.rfind('<') {
            assert!(
                line[open..].contains('>'),
                "tag span split across lines at {line:?} (all lines: {lines:?})"
            );
        }
    }
}
