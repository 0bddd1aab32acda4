use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Invalid argument: `{0}` must be provided")]
    InvalidArgument(&'static str),

    #[error("Entity decoding did not reach a fixed point after {iterations} passes")]
    DecodeDidNotConverge { iterations: usize },

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

pub type TextResult<T> = Result<T, TextError>;

/// Unwraps an optional string argument, raising `InvalidArgument` when it is absent.
pub fn required<'a>(value: Option<&'a str>, name: &'static str) -> TextResult<&'a str> {
    value.ok_or(TextError::InvalidArgument(name))
}
