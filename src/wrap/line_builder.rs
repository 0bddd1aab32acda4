use super::{LineEnding, Token};

/// Greedy line packer.
///
/// Tokens are appended to the current line until the next one would reach
/// `max_length`, then the line is flushed. Once a token opens a tag, every token up
/// to and including the one that closes it goes onto the current line with no
/// length check at all, so tag spans are never split.
#[derive(Debug)]
pub struct LineBuilder {
    max_length: i64,
    line_ending: LineEnding,
    current_line: String,
    current_length: i64,
    in_tag: bool,
    lines: Vec<String>,
}

impl LineBuilder {
    pub fn new(max_length: i64, line_ending: LineEnding) -> Self {
        Self {
            max_length,
            line_ending,
            current_line: String::new(),
            current_length: 0,
            in_tag: false,
            lines: Vec::new(),
        }
    }

    pub fn in_tag(&self) -> bool {
        self.in_tag
    }

    pub fn push(&mut self, token: Token<'_>) {
        if token.opens_tag() {
            if !self.in_tag {
                log::trace!("tag span opened by {:?}", token.text());
            }
            self.in_tag = true;
        }

        if self.in_tag {
            self.push_tag_token(token);
        } else {
            self.push_word(token);
        }
    }

    fn push_tag_token(&mut self, token: Token<'_>) {
        // Dotted names were split by the normalizer; glue them back together.
        if !self.current_line.ends_with('.') {
            self.current_line.push(' ');
        }
        self.current_line.push_str(token.text());

        if token.closes_tag() {
            log::trace!("tag span closed by {:?}", token.text());
            self.in_tag = false;
        }
    }

    fn push_word(&mut self, token: Token<'_>) {
        let token_length = i64::try_from(token.len()).unwrap_or(i64::MAX);
        let candidate = self
            .current_length
            .saturating_add(token_length)
            .saturating_add(1);

        let fits = !token.is_line_break(self.line_ending)
            && self.current_line != self.line_ending.as_str()
            && candidate < self.max_length;

        if fits {
            self.current_line.push_str(token.text());
            self.current_line.push(' ');
            self.current_length = candidate;
        } else {
            self.flush();
            self.current_line.push_str(token.text());
            self.current_line.push(' ');
            self.current_length = token_length;
        }
    }

    fn flush(&mut self) {
        if self.current_line.is_empty() {
            return;
        }
        log::trace!("flushing line of {} chars", self.current_line.len());
        self.lines.push(self.current_line.trim().to_string());
        self.current_line.clear();
    }

    /// Flushes whatever is pending and returns the completed lines.
    pub fn finish(mut self) -> Vec<String> {
        if self.in_tag {
            log::debug!("unterminated tag span absorbed the rest of the text into one line");
        }
        self.flush();
        self.lines
    }
}

pub fn pack<'a, I>(tokens: I, max_length: i64, line_ending: LineEnding) -> Vec<String>
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut builder = LineBuilder::new(max_length, line_ending);
    for token in tokens {
        builder.push(token);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::tokenize;

    fn pack_str(text: &str, max_length: i64) -> Vec<String> {
        pack(tokenize(text), max_length, LineEnding::Lf)
    }

    #[test]
    fn test_greedy_packing() {
        let lines = pack_str("The quick brown fox jumps over the lazy dog.", 12);
        assert_eq!(
            lines,
            vec!["The quick", "brown fox", "jumps over", "the lazy", "dog."]
        );
    }

    #[test]
    fn test_no_tokens_no_lines() {
        assert!(pack_str("", 10).is_empty());
    }

    #[test]
    fn test_long_word_gets_its_own_line() {
        let lines = pack_str("a extraordinarily b", 5);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_first_oversized_token_does_not_emit_empty_line() {
        let lines = pack_str("enormous", 3);
        assert_eq!(lines, vec!["enormous"]);
    }

    #[test]
    fn test_zero_and_negative_max_length() {
        assert_eq!(pack_str("aa bb cc", 0), vec!["aa", "bb", "cc"]);
        assert_eq!(pack_str("aa bb", -7), vec!["aa", "bb"]);
    }

    #[test]
    fn test_tag_span_ignores_max_length() {
        let lines = pack_str("x <span class=\"very-long-class-name\"> y", 4);
        assert_eq!(
            lines,
            vec!["x  <span class=\"very-long-class-name\">", "y"]
        );
    }

    #[test]
    fn test_dot_glues_tag_tokens() {
        // what the normalizer makes of `<img src="a.b.png">`
        let lines = pack_str("<img src=\"a. b. png\"> ", 100);
        assert_eq!(lines, vec!["<img src=\"a.b.png\">"]);
    }

    #[test]
    fn test_word_after_tag_uses_stale_length() {
        // the tag span does not count towards the length of the line
        let lines = pack_str("see <b class=x> bold</b> text", 100);
        assert_eq!(lines, vec!["see  <b class=x>bold</b> text"]);
    }

    #[test]
    fn test_unterminated_tag_absorbs_the_rest() {
        let mut builder = LineBuilder::new(3, LineEnding::Lf);
        for token in tokenize("a <b c d e f") {
            builder.push(token);
        }
        assert!(builder.in_tag());
        assert_eq!(builder.finish(), vec!["a  <b c d e f"]);
    }

    #[test]
    fn test_in_tag_resets_after_close() {
        let mut builder = LineBuilder::new(10, LineEnding::Lf);
        builder.push(Token::new("<i"));
        assert!(builder.in_tag());
        builder.push(Token::new("x>"));
        assert!(!builder.in_tag());
    }

    #[test]
    fn test_line_break_token_forces_flush() {
        let lines = pack_str("one \n two", 50);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_consecutive_line_breaks_keep_blank_line() {
        let lines = pack_str("one \n \n two", 50);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_crlf_marker() {
        let lines = pack(tokenize("one \r\n two"), 50, LineEnding::CrLf);
        assert_eq!(lines, vec!["one", "two"]);
    }
}
