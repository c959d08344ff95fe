use crate::normalize::CONFUSABLES;
use finl_unicode::categories::CharacterCategories;
use std::str::CharIndices;

/// A maximal run of word characters, with its byte offsets into the original
/// text. `text` keeps the original casing; normalization happens only on the
/// comparison side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// Iterator over the [`Token`]s of a string, in text order.
///
/// Word characters are Unicode letters and numbers, plus any character with a
/// confusable mapping (so `sh1t` and `b@dword` stay single tokens). Everything
/// else separates tokens and is never part of one.
pub struct Tokens<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
}

pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        chars: text.char_indices(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_letter() || c.is_number() || CONFUSABLES.contains_key(&c)
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        // Skip separators.
        let (start, first) = self.chars.by_ref().find(|&(_, c)| is_word_char(c))?;
        let mut end = start + first.len_utf8();
        // Extend through the run. CharIndices is Clone, so peeking ahead is a
        // cheap copy and never loses a separator.
        loop {
            let mut lookahead = self.chars.clone();
            match lookahead.next() {
                Some((i, c)) if is_word_char(c) => {
                    end = i + c.len_utf8();
                    self.chars = lookahead;
                }
                _ => break,
            }
        }
        Some(Token {
            text: &self.text[start..end],
            start,
            end,
        })
    }
}
