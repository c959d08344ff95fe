use crate::engine::Match;

/// Rebuilds the text with every matched span masked.
///
/// The mask repeats once per original *character* of the token, so the
/// redacted string lines up with the input and does not leak the hidden
/// word's length by shortening it. Everything outside the matched spans,
/// including casing, punctuation, and whitespace, is copied verbatim.
///
/// Matches must be disjoint and in position order, which the tokenizer
/// guarantees; a single left-to-right pass suffices.
pub(crate) fn redact(text: &str, matches: &[Match], mask: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for m in matches {
        out.push_str(&text[cursor..m.start]);
        for _ in text[m.start..m.end].chars() {
            out.push(mask);
        }
        cursor = m.end;
    }
    out.push_str(&text[cursor..]);
    out
}
