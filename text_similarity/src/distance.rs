use std::mem;

/// Edit distance between two strings, compared by Unicode scalar values.
///
/// See [`distance`].
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}

/// The minimum number of edits turning `a` into `b`.
///
/// An edit is an insertion, a deletion, a substitution or a swap of two adjacent
/// characters, each costing 1. Every substring is edited at most once
/// (optimal string alignment), so `"ca"` → `"abc"` costs 3, not 2.
///
/// Columns run along the shorter sequence and only three rows are kept alive:
/// the one being filled, the previous one and the one before it, which the
/// transposition looks back to.
pub fn distance(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let width = short.len() + 1;
    let mut before: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr: Vec<usize> = vec![0; width];

    for (j, &lc) in (1..).zip(long) {
        curr[0] = j;

        for (i, &sc) in (1..width).zip(short) {
            let cost = usize::from(sc != lc);
            let mut cell = (prev[i] + 1).min(curr[i - 1] + 1).min(prev[i - 1] + cost);

            if i > 1 && j > 1 && sc == long[j - 2] && short[i - 2] == lc {
                cell = cell.min(before[i - 2] + cost);
            }

            curr[i] = cell;
        }

        // before <- prev, prev <- curr; the oldest row is reused for the next pass
        mem::swap(&mut before, &mut prev);
        mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
