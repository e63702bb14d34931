//! Name similarity scoring.
//!
//! The score is a Dice-style ratio over the longest common subsequence of
//! the two names: `2 * lcs / (len(a) + len(b))`. When the query contains
//! standalone numbers ("Halo 3", "FIFA 2004"), candidates that don't carry
//! any of those numbers lose [`NUMBER_MISMATCH_PENALTY`], so sequels and
//! yearly releases don't collapse onto each other.

/// Subtracted from the score when none of the query's numbers appear in the
/// candidate. The result is not clamped, so scores can dip below zero.
pub const NUMBER_MISMATCH_PENALTY: f64 = 0.1;

/// Score how similar candidate `b` is to query `a`.
///
/// `numbers` are the purely numeric tokens of the query (see
/// [`numeric_tokens`]); pass an empty slice to skip the number check.
/// Returns 0 when either side is missing.
pub fn similar(a: Option<&str>, b: Option<&str>, numbers: &[String], match_case: bool) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    let mut similarity = if match_case {
        sequence_ratio(a, b)
    } else {
        sequence_ratio(&a.to_lowercase(), &b.to_lowercase())
    };

    if !numbers.is_empty() && !contains_any_number(b, numbers) {
        similarity -= NUMBER_MISMATCH_PENALTY;
    }

    similarity
}

/// LCS ratio of two strings in `[0, 1]`, counted in chars.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    (2.0 * lcs_length(&a, &b) as f64) / total as f64
}

/// Length of the longest common subsequence of `a` and `b`.
pub fn lcs_length(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    // table[i][j] = LCS of a[..i] and b[..j]
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i][j - 1].max(table[i - 1][j])
            };
        }
    }
    table[m][n]
}

/// Whitespace-separated tokens of `query` that consist only of ASCII digits,
/// in order, duplicates kept.
pub fn numeric_tokens(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .filter(|word| word.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

/// Whether any token of `candidate`, after stripping punctuation, equals one
/// of `numbers` as a string ("03" does not match "3").
///
/// Only ASCII letters, digits, `_` and whitespace survive the strip, so
/// "2_" stays a token of its own and "2²" reduces to "2".
fn contains_any_number(candidate: &str, numbers: &[String]) -> bool {
    let cleaned: String = candidate
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .any(|word| numbers.iter().any(|n| n == word))
}

#[cfg(test)]
#[path = "tests/similarity_tests.rs"]
mod tests;
