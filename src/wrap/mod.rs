//! Tag-aware word wrapping.
//!
//! The pipeline is `normalize -> tokenize -> pack -> join_lines`. Markup tags are
//! recognized purely syntactically: a token starting with `<` opens a tag span and
//! the first token containing `>` closes it. A tag span is never split across lines,
//! however long it gets.

mod join;
mod line_builder;
mod normalize;
mod tokenize;


pub use join::join_lines;
pub use line_builder::{pack, LineBuilder};
pub use normalize::normalize;
pub use tokenize::{tokenize, Token, TAG_CLOSE, TAG_OPEN};

use crate::errors::{required, TextResult};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MAX_LENGTH: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// The terminator native to the target platform.
    pub const fn platform() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::platform()
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::CrLf => write!(f, "crlf"),
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" | "unix" => Ok(LineEnding::Lf),
            "crlf" | "windows" => Ok(LineEnding::CrLf),
            "platform" | "native" => Ok(LineEnding::platform()),
            other => Err(format!("unknown line ending '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// Exclusive bound on the packed length of a line outside tag spans.
    pub max_length: i64,
    /// Turn line breaks into plain spaces instead of forced breaks.
    pub remove_new_line: bool,
    pub line_ending: LineEnding,
}

impl WrapOptions {
    pub fn new(max_length: i64) -> Self {
        Self {
            max_length,
            ..Self::default()
        }
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            remove_new_line: true,
            line_ending: LineEnding::platform(),
        }
    }
}

/// Wraps `text` into lines shorter than `max_length`, terminated by the platform
/// line ending. Empty or all-whitespace input yields an empty string.
pub fn word_wrap(text: &str, max_length: i64, remove_new_line: bool) -> String {
    word_wrap_with(
        text,
        &WrapOptions {
            max_length,
            remove_new_line,
            line_ending: LineEnding::platform(),
        },
    )
}

pub fn word_wrap_with(text: &str, options: &WrapOptions) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let normalized = normalize(text, options.remove_new_line, options.line_ending);
    let tokens = tokenize(&normalized);
    let lines = pack(tokens, options.max_length, options.line_ending);
    log::debug!(
        "wrapped {} chars into {} lines (max_length={})",
        text.len(),
        lines.len(),
        options.max_length
    );
    join_lines(&lines, options.line_ending)
}

/// Like [`word_wrap_with`], for callers whose text may be absent.
pub fn try_word_wrap(text: Option<&str>, options: &WrapOptions) -> TextResult<String> {
    let text = required(text, "text")?;
    Ok(word_wrap_with(text, options))
}
