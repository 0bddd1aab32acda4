//! Case conversions: lowerCamel, sentence and Title Case.

use crate::errors::{required, TextResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CaseStyle {
    LowerCamel,
    Sentence,
    Title,
}

impl CaseStyle {
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseStyle::LowerCamel => to_lower_camel(text),
            CaseStyle::Sentence => camel_to_sentence(text),
            CaseStyle::Title => to_title_case(text),
        }
    }

    pub fn try_apply(self, text: Option<&str>) -> TextResult<String> {
        let text = required(text, "text")?;
        Ok(self.apply(text))
    }
}

/// Split into words on whitespace, `-`, `_`, lower-to-upper boundaries and the end
/// of an acronym (`HTTPResponse` -> `HTTP`, `Response`).
fn split_into_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current_word = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !current_word.is_empty() {
                words.push(std::mem::take(&mut current_word));
            }
            continue;
        }

        if c.is_uppercase() && !current_word.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let camel_boundary = prev.is_lowercase() || prev.is_ascii_digit();
            let acronym_end = prev.is_uppercase() && next_is_lower;
            if camel_boundary || acronym_end {
                words.push(std::mem::take(&mut current_word));
            }
        }
        current_word.push(c);
    }

    if !current_word.is_empty() {
        words.push(current_word);
    }
    words
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() > 1
        && word.chars().any(char::is_alphabetic)
        && !word.chars().any(char::is_lowercase)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn to_lower_camel(text: &str) -> String {
    let words = split_into_words(text);
    let mut result = String::with_capacity(text.len());

    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}

/// `someCamelCase` -> `Some camel case`. Acronyms keep their capitals.
pub fn camel_to_sentence(text: &str) -> String {
    let words = split_into_words(text);
    let mut sentence: Vec<String> = Vec::with_capacity(words.len());

    for (i, word) in words.iter().enumerate() {
        let converted = if is_acronym(word) {
            word.clone()
        } else if i == 0 {
            capitalize(word)
        } else {
            word.to_lowercase()
        };
        sentence.push(converted);
    }
    sentence.join(" ")
}

/// Capitalizes each whitespace-delimited word, leaving all-caps words alone.
/// Whitespace is kept as-is.
pub fn to_title_case(text: &str) -> String {
    fn flush(word: &mut String, result: &mut String) {
        if is_acronym(word) {
            result.push_str(word);
        } else {
            result.push_str(&capitalize(word));
        }
        word.clear();
    }

    let mut result = String::with_capacity(text.len());
    let mut word = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            flush(&mut word, &mut result);
            result.push(c);
        } else {
            word.push(c);
        }
    }
    flush(&mut word, &mut result);
    result
}
