use std::cmp::max;

use crate::distance::distance;
use crate::error::{Error, Operand, Result};

/// Similarity of two texts in percent, where 100 means equal.
///
/// Equal texts, including two empty ones, score exactly `100.0` without
/// running the distance computation.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    similarity_chars(&a, &b)
}

/// Same as [`similarity`], over already decoded characters.
pub fn similarity_chars(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 100.0;
    }

    let length = max(a.len(), b.len());
    percentage(distance(a, b), length)
}

/// Like [`similarity`], but rejects a missing text with [`Error::InvalidInput`].
pub fn try_similarity(a: Option<&str>, b: Option<&str>) -> Result<f64> {
    let a = a.ok_or(Error::InvalidInput(Operand::First))?;
    let b = b.ok_or(Error::InvalidInput(Operand::Second))?;
    Ok(similarity(a, b))
}

/// `(1 - distance / max_len) * 100`.
///
/// The value is not clamped: a distance above `max_len` yields a negative percentage.
/// A zero `max_len` only happens for two empty texts and gives `100.0`.
pub fn percentage(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 100.0;
    }
    (1.0 - distance as f64 / max_len as f64) * 100.0
}
