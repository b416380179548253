// crates/placedb-core/src/text.rs
//! Text primitives shared by the index builder and the query engine.
//!
//! All lengths here are counted in `char`s, so a prefix never splits a
//! multi-byte character and "one typo" means one character regardless of
//! script.

/// Normalizes a user query: trims surrounding whitespace and lowercases.
///
/// # Examples
///
/// ```rust
/// use placedb_core::text::normalize_query;
///
/// assert_eq!(normalize_query("  BangKok "), "bangkok");
/// assert_eq!(normalize_query("   "), "");
/// ```
pub fn normalize_query(q: &str) -> String {
    q.trim().to_lowercase()
}

/// Returns the first `n` characters of `s` (all of `s` if it is shorter).
#[inline]
pub fn truncate_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}

/// Yields every leading substring of `s` of length `1..=min(len(s), max_len)`.
///
/// Shortest first. The input is expected to be lowercased already.
///
/// # Examples
///
/// ```rust
/// use placedb_core::text::prefixes;
///
/// let p: Vec<&str> = prefixes("rome", 3).collect();
/// assert_eq!(p, vec!["r", "ro", "rom"]);
/// ```
pub fn prefixes(s: &str, max_len: usize) -> impl Iterator<Item = &str> {
    s.char_indices()
        .skip(1)
        .map(|(byte, _)| byte)
        .chain(std::iter::once(s.len()))
        .take(max_len)
        .filter(|&end| end > 0)
        .map(move |end| &s[..end])
}

/// Levenshtein edit distance between `a` and `b`.
///
/// Unit cost for single-character insertion, deletion and substitution; no
/// transposition. Uses the classic dynamic-programming table, keeping only
/// two rows in memory.
///
/// # Examples
///
/// ```rust
/// use placedb_core::text::levenshtein;
///
/// assert_eq!(levenshtein("bangkok", "bangkok"), 0);
/// assert_eq!(levenshtein("bankok", "bangko"), 2);
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
