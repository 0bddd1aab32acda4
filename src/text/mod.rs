//! Small standalone string helpers used alongside word wrapping.

pub mod case;
pub mod email;
pub mod entities;
pub mod number;

pub use case::{camel_to_sentence, to_lower_camel, to_title_case, CaseStyle};
pub use email::looks_like_email;
pub use entities::{decode_once, html_decode, html_decode_bounded, DEFAULT_MAX_DECODE_PASSES};
pub use number::{format_number, Locale};
