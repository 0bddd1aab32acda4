use regex::Regex;
use std::sync::LazyLock;

// Compile-time constant pattern.
#[allow(clippy::unwrap_used)]
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// Whether `text` has the shape `local@domain.tld`. Purely syntactic.
pub fn looks_like_email(text: &str) -> bool {
    EMAIL_SHAPE.is_match(text)
}
