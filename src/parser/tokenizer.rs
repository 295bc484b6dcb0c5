use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::COMMENT_PREFIX;

// Alternatives are tried leftmost-first at each position: quoted char span,
// quoted string span (greedy, never crossing a line), signed numeral, word
// run, the two-character operators, any single non-space symbol.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"'.*'|".*"|[+-]?\d*\.*\d+|\w+|\|\||&&|\S"#).unwrap()
});

/// Tokenizer over one reading of the source text.
///
/// Comment lines (beginning exactly with `//`) and blank lines are invisible
/// to the token stream. Non-comment lines are trimmed before matching; a line
/// whose trimmed form starts with `//` is kept raw, so an indented comment is
/// not a comment and surfaces as tokens for the validator to reject.
pub struct Tokenizer<'a> {
    lines: std::str::Lines<'a>,
    line: Option<&'a str>,
    line_no: usize,
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut tokenizer = Self {
            lines: source.lines(),
            line: None,
            line_no: 0,
            cursor: 0,
        };
        tokenizer.advance_line();
        tokenizer
    }

    /// The current logical line, or `None` once the source is exhausted.
    pub fn current_line(&self) -> Option<&'a str> {
        self.line
    }

    /// 1-based physical line number of the current logical line.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    /// The next token, pulling further lines as needed; `None` at end of
    /// source.
    pub fn next_token(&mut self) -> Option<&'a str> {
        loop {
            let line = self.line?;
            if let Some(found) = TOKEN_RE.find_at(line, self.cursor) {
                self.cursor = found.end();
                return Some(found.as_str());
            }
            self.advance_line();
        }
    }

    fn advance_line(&mut self) {
        self.line = None;
        self.cursor = 0;
        for raw in self.lines.by_ref() {
            self.line_no += 1;
            let line = if raw.trim().starts_with(COMMENT_PREFIX) {
                raw
            } else {
                raw.trim()
            };
            if line.starts_with(COMMENT_PREFIX) || line.is_empty() {
                continue;
            }
            self.line = Some(line);
            return;
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
