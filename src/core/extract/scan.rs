//! Lexical helpers shared by the extractors.
//!
//! None of this is a parser. [`CodeChars`] walks script text while skipping
//! string literals and comments and tracking bracket depth, which is enough
//! to find the end of an object literal or to split its top-level entries
//! without being fooled by nested braces or commas inside strings.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::utils::is_identifier_char;

/// How `<` and `>` are treated while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Angles {
    /// Ordinary characters.
    Ignore,
    /// Always brackets (type positions). `=>` never closes.
    Brackets,
    /// Brackets only when `<` directly follows an identifier, as in
    /// `PropType<T>`, so `a < b` in a value stays a comparison.
    Generic,
}

/// Iterator over code characters with bracket depth.
///
/// Yields `(byte_index, char, depth)` for every character outside string
/// literals and comments. `depth` is the nesting level *outside* the
/// character: an opener reports the depth before it, a closer the depth after
/// it, so an opener and its matching closer report the same value.
pub struct CodeChars<'a> {
    chars: Peekable<CharIndices<'a>>,
    depth: usize,
    angles: Angles,
    angle_depth: usize,
    prev: char,
}

impl<'a> CodeChars<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            depth: 0,
            angles: Angles::Ignore,
            angle_depth: 0,
            prev: '\0',
        }
    }

    pub fn with_angles(mut self, angles: Angles) -> Self {
        self.angles = angles;
        self
    }

    fn skip_string(&mut self, quote: char) {
        while let Some((_, c)) = self.chars.next() {
            match c {
                '\\' => {
                    self.chars.next();
                }
                c if c == quote => return,
                _ => {}
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c == '\n' {
                return;
            }
            self.chars.next();
        }
    }

    fn skip_block_comment(&mut self) {
        let mut star = false;
        for (_, c) in self.chars.by_ref() {
            if star && c == '/' {
                return;
            }
            star = c == '*';
        }
    }

    fn is_opener(&self, c: char) -> bool {
        if c == '<' {
            return match self.angles {
                Angles::Ignore => false,
                Angles::Brackets => true,
                Angles::Generic => is_identifier_char(self.prev) || self.prev == '$',
            };
        }
        matches!(c, '{' | '(' | '[')
    }

    fn is_closer(&self, c: char) -> bool {
        if c == '>' {
            return self.prev != '='
                && match self.angles {
                    Angles::Ignore => false,
                    Angles::Brackets => true,
                    Angles::Generic => self.angle_depth > 0,
                };
        }
        matches!(c, '}' | ')' | ']')
    }
}

impl Iterator for CodeChars<'_> {
    type Item = (usize, char, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, c) = self.chars.next()?;
            match c {
                '"' | '\'' | '`' => {
                    self.skip_string(c);
                    self.prev = c;
                    continue;
                }
                '/' => match self.chars.peek() {
                    Some(&(_, '/')) => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some(&(_, '*')) => {
                        self.chars.next();
                        self.skip_block_comment();
                        continue;
                    }
                    _ => {}
                },
                _ => {}
            }

            let depth = if self.is_opener(c) {
                if c == '<' {
                    self.angle_depth += 1;
                }
                let before = self.depth;
                self.depth += 1;
                before
            } else if self.is_closer(c) {
                if c == '>' {
                    self.angle_depth = self.angle_depth.saturating_sub(1);
                }
                self.depth = self.depth.saturating_sub(1);
                self.depth
            } else {
                self.depth
            };

            self.prev = c;
            return Some((idx, c, depth));
        }
    }
}

/// Byte index of the bracket closing the one at `open_idx`.
///
/// `text[open_idx..]` must start with `{`, `(` or `[`.
pub fn find_matching_close(text: &str, open_idx: usize) -> Option<usize> {
    let rest = text.get(open_idx..)?;
    let mut chars = CodeChars::new(rest);
    let (_, first, _) = chars.next()?;
    if !matches!(first, '{' | '(' | '[') {
        return None;
    }
    chars
        .find(|&(_, c, depth)| depth == 0 && matches!(c, '}' | ')' | ']'))
        .map(|(idx, _, _)| open_idx + idx)
}

/// Body between the brace at `open_idx` and its matching close.
pub fn braced_body(text: &str, open_idx: usize) -> Option<&str> {
    let close = find_matching_close(text, open_idx)?;
    text.get(open_idx + 1..close)
}

/// Split `body` at top-level occurrences of any of `separators`.
///
/// Empty (whitespace-only) pieces are dropped; pieces are trimmed.
pub fn split_top_level<'a>(body: &'a str, separators: &[char], angles: Angles) -> Vec<&'a str> {
    let chars = CodeChars::new(body).with_angles(angles);

    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, c, depth) in chars {
        if depth == 0 && separators.contains(&c) {
            pieces.push(&body[start..idx]);
            start = idx + c.len_utf8();
        }
    }
    pieces.push(&body[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Split an object entry at its first top-level `:`.
///
/// Returns the unquoted key and the trimmed value. Entries without a colon
/// (spreads, shorthand properties, methods) yield `None`.
pub fn split_key_value(entry: &str) -> Option<(&str, &str)> {
    let colon = CodeChars::new(entry)
        .with_angles(Angles::Brackets)
        .find(|&(_, c, depth)| depth == 0 && c == ':')
        .map(|(idx, _, _)| idx)?;

    let key = unquote(entry[..colon].trim());
    let value = entry[colon + 1..].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Strip one pair of matching quotes, if present.
pub fn unquote(text: &str) -> &str {
    for quote in ['"', '\'', '`'] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}
