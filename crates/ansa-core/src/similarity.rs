//! String-similarity scoring.
//!
//! Two metrics, both in `[0, 1]`:
//!
//! - [`ratio`] — the Ratcliff/Obershelp "gestalt" ratio over characters:
//!   `2·M / (len(a) + len(b))`, where `M` sums the lengths of the longest
//!   common block and, recursively, the longest blocks on either side of it.
//! - [`token_set_ratio`] — an order-insensitive score over token lists.
//!   Each left token is greedily paired with the most similar unused right
//!   token (by [`ratio`]); pairs below [`TOKEN_MATCH_FLOOR`] are discarded
//!   and the result is `2·Σ pair_ratio / (|A| + |B|)`.
//!
//! The matcher compares normalised token lists with [`token_set_ratio`];
//! a raw character ratio rates sentences with a long shared prefix ("tell me
//! about …") as close even when they are about different things.

/// Minimum per-token [`ratio`] for two tokens to count as a pair.
///
/// High enough to reject coincidental overlap between unrelated words,
/// low enough to absorb typos and inflection ("agent" / "agents" = 0.91).
pub const TOKEN_MATCH_FLOOR: f64 = 0.6;

/// Ratcliff/Obershelp similarity of two strings, in `[0, 1]`.
///
/// Two empty strings are identical (1.0); an empty string against a
/// non-empty one scores 0.0. Ties for the longest common block resolve to
/// the earliest position in `a`, then in `b`, so the result is deterministic.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_len(&a, &b) as f64 / total as f64
}

/// Order-insensitive similarity of two token lists, in `[0, 1]`.
///
/// Greedy: tokens of `a` are paired in order, each taking the highest-ratio
/// unused token of `b`. Identical lists score 1.0 regardless of token order
/// inside each list only when the multisets agree; duplicates pair one-to-one.
pub fn token_set_ratio<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut used = vec![false; b.len()];
    let mut total = 0.0;
    for token in a {
        let mut best: Option<(usize, f64)> = None;
        for (j, candidate) in b.iter().enumerate() {
            if used[j] {
                continue;
            }
            let r = ratio(token.as_ref(), candidate.as_ref());
            if best.map_or(true, |(_, s)| r > s) {
                best = Some((j, r));
            }
        }
        if let Some((j, r)) = best {
            if r >= TOKEN_MATCH_FLOOR {
                used[j] = true;
                total += r;
            }
        }
    }

    (2.0 * total / (a.len() + b.len()) as f64).min(1.0)
}

// ---------------------------------------------------------------------------
// Gestalt internals
// ---------------------------------------------------------------------------

/// Total length of matched characters: the longest common block plus,
/// recursively, the matches on either side of it.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let (ai, bi, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matched_len(&a[..ai], &b[..bi]) + matched_len(&a[ai + len..], &b[bi + len..])
}

/// Longest common contiguous block of `a` and `b` as `(a_start, b_start, len)`.
///
/// Ties resolve to the lowest `a_start`, then the lowest `b_start`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // prev[j+1] = length of the common suffix ending at (previous i, j).
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            if curr[j + 1] > best.2 {
                best = (i + 1 - curr[j + 1], j + 1 - curr[j + 1], curr[j + 1]);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_strings_score_one() {
        assert!(close(ratio("apple", "apple"), 1.0));
    }

    #[test]
    fn both_empty_score_one() {
        assert!(close(ratio("", ""), 1.0));
    }

    #[test]
    fn one_empty_scores_zero() {
        assert!(close(ratio("", "abc"), 0.0));
        assert!(close(ratio("abc", ""), 0.0));
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert!(close(ratio("abc", "xyz"), 0.0));
    }

    #[test]
    fn textbook_gestalt_value() {
        // Longest block "bcd", nothing left on either side: 2·3 / 8.
        assert!(close(ratio("abcd", "bcde"), 0.75));
    }

    #[test]
    fn gestalt_is_symmetric_on_examples() {
        for (a, b) in [("abcd", "bcde"), ("what", "thoughtful"), ("do", "doo")] {
            assert!(close(ratio(a, b), ratio(b, a)), "asymmetric for {a:?}/{b:?}");
        }
    }

    #[test]
    fn inflection_clears_the_token_floor() {
        assert!(ratio("agent", "agents") >= TOKEN_MATCH_FLOOR);
        assert!(ratio("do", "doo") >= TOKEN_MATCH_FLOOR);
        assert!(ratio("the", "thoughtful") < TOKEN_MATCH_FLOOR);
    }

    #[test]
    fn token_identical_lists_score_one() {
        let t = ["what", "does", "eva", "do"];
        assert!(close(token_set_ratio(&t, &t), 1.0));
    }

    #[test]
    fn token_empty_cases() {
        let none: [&str; 0] = [];
        let some = ["hello"];
        assert!(close(token_set_ratio(&none, &none), 1.0));
        assert!(close(token_set_ratio(&none, &some), 0.0));
        assert!(close(token_set_ratio(&some, &none), 0.0));
    }

    #[test]
    fn token_subset_query_scores_by_coverage() {
        // All four query tokens pair exactly: 2·4 / (4 + 8).
        let query = ["what", "does", "eva", "do"];
        let stored = [
            "what", "does", "the", "eligibility", "verification", "agent", "eva", "do",
        ];
        assert!(close(token_set_ratio(&query, &stored), 2.0 / 3.0));
    }

    #[test]
    fn token_shared_filler_stays_low() {
        // Only tell/me/about pair; "the" and "weather" find no partner:
        // 2·3 / (5 + 6).
        let query = ["tell", "me", "about", "the", "weather"];
        let stored = ["tell", "me", "about", "thoughtful", "ais", "agents"];
        assert!(close(token_set_ratio(&query, &stored), 6.0 / 11.0));
    }

    #[test]
    fn token_boundary_value_is_exact() {
        // Three exact pairs out of 4 + 6 tokens: exactly 0.6.
        let query = ["red", "green", "blue", "zzz"];
        let stored = ["red", "green", "blue", "cyan", "magenta", "yellow"];
        assert!(close(token_set_ratio(&query, &stored), 0.6));
    }

    #[test]
    fn token_exact_pair_beats_fuzzy_pair() {
        // "does" must pair with "does" (1.0), not steal "do".
        let query = ["does", "do"];
        let stored = ["do", "does"];
        assert!(close(token_set_ratio(&query, &stored), 1.0));
    }

    #[test]
    fn token_duplicates_pair_one_to_one() {
        let query = ["the", "the"];
        let stored = ["the"];
        // One pair only: 2·1 / (2 + 1).
        assert!(close(token_set_ratio(&query, &stored), 2.0 / 3.0));
    }
}
