use super::LineEnding;

pub const TAG_OPEN: char = '<';
pub const TAG_CLOSE: char = '>';

/// A non-empty, space-free slice of normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn opens_tag(&self) -> bool {
        self.text.starts_with(TAG_OPEN)
    }

    pub fn closes_tag(&self) -> bool {
        self.text.contains(TAG_CLOSE)
    }

    /// Length in characters, as used by the packing test.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_line_break(&self, line_ending: LineEnding) -> bool {
        self.text == line_ending.as_str()
    }
}

pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split(' ')
        .filter(|piece| !piece.is_empty())
        .map(Token::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(Token::text).collect()
    }

    #[test]
    fn test_split_drops_empty_pieces() {
        let tokens = tokenize("  a  b. c ");
        assert_eq!(texts(&tokens), vec!["a", "b.", "c"]);
    }

    #[test]
    fn test_only_spaces_separate() {
        // tabs are already gone after normalizing; anything else stays inside the token
        let tokens = tokenize("a\u{a0}b \n c");
        assert_eq!(texts(&tokens), vec!["a\u{a0}b", "\n", "c"]);
        assert!(tokens[1].is_line_break(LineEnding::Lf));
        assert!(!tokens[1].is_line_break(LineEnding::CrLf));
    }

    #[test]
    fn test_blank_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("    ").is_empty());
    }

    #[test]
    fn test_tag_markers() {
        let open = Token::new("<span");
        assert!(open.opens_tag());
        assert!(!open.closes_tag());

        let close = Token::new("class=\"x\">");
        assert!(!close.opens_tag());
        assert!(close.closes_tag());

        let both = Token::new("<br/>");
        assert!(both.opens_tag() && both.closes_tag());

        assert!(!Token::new("a<b").opens_tag());
    }

    #[test]
    fn test_len_counts_chars() {
        assert_eq!(Token::new("héllo").len(), 5);
        assert_eq!(Token::new("日本").len(), 2);
    }
}
