use crate::Map;
use finl_unicode::categories::{CharacterCategories, MinorCategory};
use lazy_static::lazy_static;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// Characters commonly substituted for letters to evade detection
    /// (leetspeak digits and symbols, Cyrillic/Latin homoglyphs), mapped to
    /// the letter they stand in for.
    pub(crate) static ref CONFUSABLES: Map<char, char> = include_str!("confusables.csv")
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let comma = line.find(',').unwrap();
            (
                line[..comma].chars().next().unwrap(),
                line[comma + 1..].chars().next().unwrap(),
            )
        })
        .collect();
}

/// Normalizes a word for comparison: decomposes, drops diacritical marks,
/// recomposes, lowercases, and folds confusable characters onto their plain
/// forms. Applied identically to dictionary words and to input tokens, so the
/// two sides always meet in the same alphabet.
pub(crate) fn normalize_word(word: &str) -> String {
    word.nfd()
        .filter(|c| !matches!(c.get_minor_category(), MinorCategory::Mn))
        .nfc()
        .flat_map(char::to_lowercase)
        .map(|c| CONFUSABLES.get(&c).copied().unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_word;

    #[test]
    fn lowercases() {
        assert_eq!(normalize_word("BadWord"), "badword");
    }

    #[test]
    fn strips_accents() {
        assert_eq!(normalize_word("bädwörd"), "badword");
        assert_eq!(normalize_word("café"), "cafe");
    }

    #[test]
    fn folds_leetspeak() {
        assert_eq!(normalize_word("b4dw0rd"), "badword");
        assert_eq!(normalize_word("sh1t"), "shit");
        assert_eq!(normalize_word("$s"), "ss");
    }

    #[test]
    fn folds_homoglyphs() {
        // Cyrillic а/о standing in for Latin a/o.
        assert_eq!(normalize_word("bаdwоrd"), "badword");
    }

    #[test]
    fn cyrillic_stays_consistent() {
        // Both the dictionary side and the token side go through the same
        // folding, so a Cyrillic word always meets itself.
        assert_eq!(normalize_word("ПРИВЕТ"), normalize_word("привет"));
    }
}
