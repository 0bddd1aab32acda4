pub mod config;
pub mod errors;
pub mod logging;
pub mod text;
pub mod wrap;

// Re-export commonly used types
pub use errors::{TextError, TextResult};
pub use text::{html_decode, Locale};
pub use wrap::{try_word_wrap, word_wrap, word_wrap_with, LineEnding, WrapOptions};
