use crate::Map;

/// Returns the similarity of two strings as a ratio in `0.0..=1.0`.
///
/// The ratio is `2.0 * M / T`, where `T` is the total number of characters in
/// both strings and `M` is the number of characters covered by matching blocks
/// found by recursively locating the longest common substring (the
/// Ratcliff/Obershelp method, as popularized by sequence-matching libraries).
/// This rewards runs of agreement more than raw edit distance would.
///
/// Two empty strings are considered identical (`1.0`); an empty string next to
/// a non-empty one scores `0.0`.
///
/// ```
/// use wordwash::similar;
///
/// assert_eq!(similar("badword", "badword"), 1.0);
/// assert!(similar("badword", "badwrd") > 0.9);
/// assert_eq!(similar("", "x"), 0.0);
/// ```
pub fn similar(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    // Canonical argument order so that ties in longest-match placement cannot
    // make the result depend on which string came first.
    let (a, b) = if (a.len(), &a) <= (b.len(), &b) {
        (&a[..], &b[..])
    } else {
        (&b[..], &a[..])
    };
    2.0 * matching_chars(a, b) as f64 / (a.len() + b.len()) as f64
}

/// Total characters covered by matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    // Explicit work stack instead of recursion; depth is bounded by the
    // number of matching blocks, but there is no reason to risk the stack.
    let mut queue = vec![(0usize, a.len(), 0usize, b.len())];
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        total += k;
        queue.push((alo, i, blo, j));
        queue.push((i + k, ahi, j + k, bhi));
    }
    total
}

/// Finds the longest run `a[i..i + k] == b[j..j + k]` within the given
/// bounds, preferring the earliest position in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0usize);
    // run_lengths[j] is the length of the common run ending at a[i], b[j].
    let mut run_lengths: Map<usize, usize> = Map::default();
    for i in alo..ahi {
        let mut next: Map<usize, usize> = Map::default();
        for j in blo..bhi {
            if b[j] == a[i] {
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| run_lengths.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best_k {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_k = k;
                }
            }
        }
        run_lengths = next;
    }
    (best_i, best_j, best_k)
}

#[cfg(test)]
mod tests {
    use super::similar;

    #[test]
    fn identical() {
        for word in ["a", "badword", "привет", "x y z"] {
            assert_eq!(similar(word, word), 1.0, "{}", word);
        }
    }

    #[test]
    fn empty() {
        assert_eq!(similar("", ""), 1.0);
        assert_eq!(similar("", "x"), 0.0);
        assert_eq!(similar("x", ""), 0.0);
    }

    #[test]
    fn disjoint() {
        assert_eq!(similar("abc", "xyz"), 0.0);
    }

    #[test]
    fn single_deletion() {
        // 6 matching characters out of 13 total.
        let ratio = similar("badword", "badwrd");
        assert!((ratio - 12.0 / 13.0).abs() < 1e-9, "{}", ratio);
    }

    #[test]
    fn symmetry() {
        let pairs = [
            ("badword", "badwrd"),
            ("abcd", "bcda"),
            ("qabxcd", "abycdf"),
            ("aaab", "baaa"),
            ("кот", "который"),
        ];
        for (a, b) in pairs {
            assert_eq!(similar(a, b), similar(b, a), "{} vs {}", a, b);
        }
    }

    #[test]
    fn matching_blocks_not_just_common_chars() {
        // "ax" vs "xa": the longest common substring is one character, and
        // after splitting around it nothing else can match.
        assert_eq!(similar("ax", "xa"), 0.5);
    }

    #[test]
    fn bounded() {
        for (a, b) in [("abcdef", "abddef"), ("a", "ab"), ("spam", "maps")] {
            let ratio = similar(a, b);
            assert!((0.0..=1.0).contains(&ratio));
        }
    }
}
