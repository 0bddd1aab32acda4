use super::LineEnding;

// Literal escape sequences, i.e. a backslash followed by a letter. Order matters:
// the two-character pair must be replaced before its halves.
const ESCAPED_NEWLINES: [&str; 3] = [r"\r\n", r"\r", r"\n"];

/// Prepares raw text for tokenizing.
///
/// Escaped newlines become real line endings, which are then either dropped
/// (`remove_new_line`) or padded with spaces so they survive as standalone tokens.
/// A space is added after `.`, `>`, `,` and `;`, and tabs become spaces. The
/// punctuation pass is blind; it also splits dotted names inside tag attributes,
/// which the line builder stitches back together.
pub fn normalize(text: &str, remove_new_line: bool, line_ending: LineEnding) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let newline = line_ending.as_str();
    let mut normalized = text.to_string();
    for escaped in ESCAPED_NEWLINES {
        normalized = normalized.replace(escaped, newline);
    }

    normalized = if remove_new_line {
        normalized.replace(newline, " ")
    } else {
        normalized.replace(newline, &format!(" {newline} "))
    };

    let mut spaced = String::with_capacity(normalized.len() + normalized.len() / 8);
    for c in normalized.chars() {
        match c {
            '.' | '>' | ',' | ';' => {
                spaced.push(c);
                spaced.push(' ');
            }
            '\t' => spaced.push(' '),
            _ => spaced.push(c),
        }
    }
    spaced
}
