//! HTML character reference decoding, repeated until the text stops changing.

use crate::errors::{TextError, TextResult};

pub const DEFAULT_MAX_DECODE_PASSES: usize = 32;

// Longest reference body we bother looking at, e.g. `#x10FFFF` or `thetasym`.
const MAX_REFERENCE_LEN: usize = 10;

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "iexcl" => '¡',
        "cent" => '¢',
        "pound" => '£',
        "curren" => '¤',
        "yen" => '¥',
        "brvbar" => '¦',
        "sect" => '§',
        "uml" => '¨',
        "copy" => '©',
        "ordf" => 'ª',
        "laquo" => '«',
        "not" => '¬',
        "shy" => '\u{ad}',
        "reg" => '®',
        "macr" => '¯',
        "deg" => '°',
        "plusmn" => '±',
        "sup2" => '²',
        "sup3" => '³',
        "acute" => '´',
        "micro" => 'µ',
        "para" => '¶',
        "middot" => '·',
        "cedil" => '¸',
        "sup1" => '¹',
        "ordm" => 'º',
        "raquo" => '»',
        "frac14" => '¼',
        "frac12" => '½',
        "frac34" => '¾',
        "iquest" => '¿',
        "times" => '×',
        "divide" => '÷',
        "Agrave" => 'À',
        "Aacute" => 'Á',
        "Auml" => 'Ä',
        "Ccedil" => 'Ç',
        "Egrave" => 'È',
        "Eacute" => 'É',
        "Ouml" => 'Ö',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        "agrave" => 'à',
        "aacute" => 'á',
        "acirc" => 'â',
        "auml" => 'ä',
        "ccedil" => 'ç',
        "egrave" => 'è',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "iuml" => 'ï',
        "ntilde" => 'ñ',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '‘',
        "rsquo" => '’',
        "sbquo" => '‚',
        "ldquo" => '“',
        "rdquo" => '”',
        "bdquo" => '„',
        "dagger" => '†',
        "bull" => '•',
        "hellip" => '…',
        "permil" => '‰',
        "prime" => '′',
        "lsaquo" => '‹',
        "rsaquo" => '›',
        "euro" => '€',
        "trade" => '™',
        "larr" => '←',
        "uarr" => '↑',
        "rarr" => '→',
        "darr" => '↓',
        "harr" => '↔',
        "minus" => '−',
        "ne" => '≠',
        "le" => '≤',
        "ge" => '≥',
        "infin" => '∞',
        _ => return None,
    };
    Some(c)
}

fn numeric_reference(body: &str) -> Option<char> {
    let (digits, radix) = match body.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (body, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let code = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(code).filter(|&c| c != '\0')
}

/// Parses a reference at the start of `s` (which begins with `&`).
/// Returns the decoded char and the number of bytes consumed.
fn parse_reference(s: &str) -> Option<(char, usize)> {
    let rest = &s[1..];
    let semicolon = rest
        .char_indices()
        .take(MAX_REFERENCE_LEN + 1)
        .find(|&(_, c)| c == ';')
        .map(|(i, _)| i)?;
    let body = &rest[..semicolon];

    let decoded = match body.strip_prefix('#') {
        Some(number) => numeric_reference(number)?,
        None => named_entity(body)?,
    };
    Some((decoded, semicolon + 2))
}

/// A single decoding pass. Unknown or malformed references are copied verbatim.
pub fn decode_once(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match parse_reference(candidate) {
            Some((c, consumed)) => {
                decoded.push(c);
                rest = &candidate[consumed..];
            }
            None => {
                decoded.push('&');
                rest = &candidate[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

/// Decodes until a fixed point, so `html_decode(html_decode(x)) == html_decode(x)`.
pub fn html_decode(text: &str) -> TextResult<String> {
    html_decode_bounded(text, DEFAULT_MAX_DECODE_PASSES)
}

/// Like [`html_decode`] with an explicit bound on the number of passes, counting the
/// final pass that confirms the fixed point.
pub fn html_decode_bounded(text: &str, max_passes: usize) -> TextResult<String> {
    let mut current = text.to_string();
    for _ in 0..max_passes {
        if !current.contains('&') {
            return Ok(current);
        }
        let next = decode_once(&current);
        if next == current {
            return Ok(current);
        }
        current = next;
    }

    log::debug!("entity decoding gave up after {max_passes} passes");
    Err(TextError::DecodeDidNotConverge {
        iterations: max_passes,
    })
}
