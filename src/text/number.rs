//! Fixed-decimal number formatting with explicit locale conventions.

use crate::errors::TextError;
use std::fmt;
use std::str::FromStr;

/// Number formatting conventions for one culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    pub decimal_separator: &'static str,
    pub group_separator: &'static str,
    /// Digit group sizes from the decimal point outwards; the last one repeats.
    pub group_sizes: &'static [usize],
    pub negative_sign: &'static str,
    pub nan_symbol: &'static str,
    pub infinity_symbol: &'static str,
}

impl Locale {
    pub const INVARIANT: Locale = Locale {
        tag: "invariant",
        decimal_separator: ".",
        group_separator: ",",
        group_sizes: &[3],
        negative_sign: "-",
        nan_symbol: "NaN",
        infinity_symbol: "Infinity",
    };

    pub const EN_US: Locale = Locale {
        tag: "en-US",
        infinity_symbol: "∞",
        ..Locale::INVARIANT
    };

    pub const EN_GB: Locale = Locale {
        tag: "en-GB",
        ..Locale::EN_US
    };

    pub const EN_IN: Locale = Locale {
        tag: "en-IN",
        group_sizes: &[3, 2],
        ..Locale::EN_US
    };

    pub const DE_DE: Locale = Locale {
        tag: "de-DE",
        decimal_separator: ",",
        group_separator: ".",
        ..Locale::EN_US
    };

    pub const DE_CH: Locale = Locale {
        tag: "de-CH",
        decimal_separator: ".",
        group_separator: "’",
        ..Locale::EN_US
    };

    pub const ES_ES: Locale = Locale {
        tag: "es-ES",
        ..Locale::DE_DE
    };

    pub const FR_FR: Locale = Locale {
        tag: "fr-FR",
        decimal_separator: ",",
        group_separator: "\u{202f}",
        ..Locale::EN_US
    };

    pub fn known() -> &'static [Locale] {
        &KNOWN_LOCALES
    }
}

static KNOWN_LOCALES: [Locale; 8] = [
    Locale::INVARIANT,
    Locale::EN_US,
    Locale::EN_GB,
    Locale::EN_IN,
    Locale::DE_DE,
    Locale::DE_CH,
    Locale::ES_ES,
    Locale::FR_FR,
];

impl Default for Locale {
    fn default() -> Self {
        Locale::INVARIANT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}

impl FromStr for Locale {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        if wanted.is_empty() {
            return Ok(Locale::INVARIANT);
        }
        Locale::known()
            .iter()
            .find(|locale| locale.tag.eq_ignore_ascii_case(&wanted))
            .copied()
            .ok_or_else(|| TextError::UnknownLocale(s.to_string()))
    }
}

fn group_digits(digits: &str, separator: &str, sizes: &[usize]) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    let mut index = 0;

    while end > 0 {
        let size = sizes.get(index).or(sizes.last()).copied().unwrap_or(0);
        if size == 0 {
            groups.push(&digits[..end]);
            break;
        }
        let start = end.saturating_sub(size);
        groups.push(&digits[start..end]);
        end = start;
        index += 1;
    }

    groups.reverse();
    groups.join(separator)
}

/// Renders `value` with exactly `decimals` fractional digits, grouped per `locale`.
pub fn format_number(value: f64, decimals: usize, locale: &Locale) -> String {
    if value.is_nan() {
        return locale.nan_symbol.to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { locale.negative_sign } else { "" };
        return format!("{sign}{}", locale.infinity_symbol);
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let mut formatted = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value < 0.0 && !rounds_to_zero {
        formatted.push_str(locale.negative_sign);
    }
    formatted.push_str(&group_digits(
        integer,
        locale.group_separator,
        locale.group_sizes,
    ));
    if let Some(fraction) = fraction {
        formatted.push_str(locale.decimal_separator);
        formatted.push_str(fraction);
    }
    formatted
}
