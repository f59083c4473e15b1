// Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions and
/// substitutions (unit cost each) needed to transform `a` into `b`.
///
/// Standard dynamic-programming recurrence with base cases
/// `dp[i][0] = i` and `dp[0][j] = j`, computed over `char`s so that
/// multi-byte characters count as single edits. Only two rows of the
/// table are kept.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
