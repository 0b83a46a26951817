//! Character-sequence similarity and candidate selection.
//!
//! The score is the Ratcliff/Obershelp ratio: find the longest common block,
//! recurse on the pieces left and right of it, and report
//! `2 * matched / (len(a) + len(b))`. It is deterministic and case-sensitive;
//! callers lowercase both sides first.

/// The outcome of matching a query against a candidate list.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The matched stored question, if any cleared the bar
    pub candidate: Option<String>,
    /// Similarity of `candidate` to the query, 0.0 when there is none
    pub confidence: f64,
}

impl MatchResult {
    pub fn none() -> Self {
        Self {
            candidate: None,
            confidence: 0.0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.candidate.is_some()
    }
}

/// Similarity ratio of two strings in [0.0, 1.0]. Two empty strings are
/// identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Sum of the sizes of all recursively found matching blocks.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as
/// `(start_in_a, start_in_b, len)`. Ties go to the block starting earliest in
/// `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut best = (alo, blo, 0);
    // run[j + 1] = length of the common run ending at a[i - 1], b[blo + j]
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in 0..width {
            cur[j + 1] = if a[i] == b[blo + j] { prev[j] + 1 } else { 0 };
            let k = cur[j + 1];
            if k > best.2 {
                best = (i + 1 - k, blo + j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

/// The highest-scoring candidate with a ratio of at least `cutoff`.
///
/// Candidates are scored query-vs-candidate; the first of equally scored
/// candidates wins. An empty candidate list is simply no match.
pub fn best_match<I, S>(query: &str, candidates: I, cutoff: f64) -> MatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    select(query, candidates, |score| score >= cutoff)
}

/// The most similar candidate whose ratio is strictly above `threshold`.
pub fn find_similar<I, S>(query: &str, candidates: I, threshold: f64) -> MatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    select(query, candidates, |score| score > threshold)
}

fn select<I, S, F>(query: &str, candidates: I, clears: F) -> MatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(f64) -> bool,
{
    let mut best = MatchResult::none();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = ratio(query, candidate);
        if clears(score) && (!best.is_match() || score > best.confidence) {
            best = MatchResult {
                candidate: Some(candidate.to_string()),
                confidence: score,
            };
        }
    }
    best
}
