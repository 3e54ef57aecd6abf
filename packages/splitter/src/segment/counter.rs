//! Per-pass duplicate counting for review numbers.

use std::collections::HashMap;

/// Counts review-number occurrences within one segmentation pass.
///
/// Create a fresh counter per source document; numbers are never
/// deduplicated across sources.
#[derive(Debug, Clone, Default)]
pub struct DuplicateCounter {
    counts: HashMap<u32, usize>,
}

impl DuplicateCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `number` and return its suffix.
    pub fn record(&mut self, number: u32) -> String {
        let count = self.counts.entry(number).or_insert(0);
        *count += 1;
        duplicate_suffix(*count)
    }

    /// How many times `number` has been recorded so far.
    #[must_use]
    pub fn occurrences(&self, number: u32) -> usize {
        self.counts.get(&number).copied().unwrap_or(0)
    }
}

/// Suffix for the n-th occurrence (1-based) of a review number.
///
/// The first occurrence gets no suffix. Later occurrences count through the
/// bijective base-26 letters: `a`..`z`, then `aa`, `ab`, ...
///
/// # Examples
/// ```
/// use review_splitter::segment::duplicate_suffix;
///
/// assert_eq!(duplicate_suffix(1), "");
/// assert_eq!(duplicate_suffix(2), "a");
/// assert_eq!(duplicate_suffix(27), "z");
/// assert_eq!(duplicate_suffix(28), "aa");
/// ```
#[must_use]
pub fn duplicate_suffix(occurrence: usize) -> String {
    let mut n = occurrence.saturating_sub(1);
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        // n % 26 < 26, so the cast cannot truncate
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_has_no_suffix() {
        let mut counter = DuplicateCounter::new();
        assert_eq!(counter.record(5), "");
        assert_eq!(counter.record(6), "");
    }

    #[test]
    fn test_repeated_numbers_count_up() {
        let mut counter = DuplicateCounter::new();
        assert_eq!(counter.record(42), "");
        assert_eq!(counter.record(7), "");
        assert_eq!(counter.record(42), "a");
        assert_eq!(counter.record(42), "b");
        assert_eq!(counter.occurrences(42), 3);
        assert_eq!(counter.occurrences(7), 1);
        assert_eq!(counter.occurrences(99), 0);
    }

    #[test]
    fn test_suffix_single_letters() {
        assert_eq!(duplicate_suffix(0), "");
        assert_eq!(duplicate_suffix(3), "b");
        assert_eq!(duplicate_suffix(26), "y");
        assert_eq!(duplicate_suffix(27), "z");
    }

    #[test]
    fn test_suffix_past_the_alphabet() {
        assert_eq!(duplicate_suffix(28), "aa");
        assert_eq!(duplicate_suffix(29), "ab");
        assert_eq!(duplicate_suffix(53), "az");
        assert_eq!(duplicate_suffix(54), "ba");
        assert_eq!(duplicate_suffix(703), "zz");
        assert_eq!(duplicate_suffix(704), "aaa");
    }

    #[test]
    fn test_suffixes_are_unique() {
        let suffixes: std::collections::HashSet<String> =
            (1..=1000).map(duplicate_suffix).collect();
        assert_eq!(suffixes.len(), 1000);
    }
}
