use std::collections::HashMap;

use crate::arith_sequence::ArithSequence;

/// Answers `Σ a[i] * b[i - d]` for `i` in `[p, q]`, where `a` is a 0/1 indicator array and `b` is
/// the indicator of a union of arithmetic progressions (the borders of a word).
///
/// Strided partial sums of `a` are built lazily, one table per distinct step, and live only as
/// long as this value. They must not be shared between different `a` arrays.
#[derive(Debug, Clone)]
pub struct StridedRangeSum<'a> {
    indicators: &'a [bool],
    support: Vec<ArithSequence>,
    partial_sums: HashMap<usize, Vec<usize>>,
}

impl<'a> StridedRangeSum<'a> {
    /// `indicators[0]` is ignored, positions start at 1.
    pub fn new(indicators: &'a [bool], support: Vec<ArithSequence>) -> Self {
        Self {
            indicators,
            support,
            partial_sums: HashMap::new(),
        }
    }

    pub fn sum(&mut self, p: usize, q: usize, d: usize) -> usize {
        if p > q {
            return 0;
        }

        let (p, q, d) = (p as i64, q as i64, d as i64);
        let mut result = 0;

        for i in 0..self.support.len() {
            let positions = self.support[i].intersection(p - d, q - d);

            if let (Some(first), Some(last)) = (positions.first(), positions.last()) {
                let step = positions.step();
                result += self.partial_sum(last + d, step as usize);
                result -= self.partial_sum(first - step + d, step as usize);
            }
        }

        result
    }

    // a[i] + a[i - delta] + a[i - 2 * delta] + ... over positive indices
    fn partial_sum(&mut self, i: i64, delta: usize) -> usize {
        if i <= 0 {
            return 0;
        }

        let indicators = self.indicators;
        let table = self.partial_sums.entry(delta).or_insert_with(|| {
            let mut table = vec![0; indicators.len()];

            for j in 1..indicators.len() {
                let previous = if j > delta { table[j - delta] } else { 0 };
                table[j] = previous + indicators[j] as usize;
            }

            table
        });

        table[i as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        periodicity::BorderIndicators, periods_group::periods_of_all_prefixes, words::Words,
    };

    fn naive_sum(indicators: &BorderIndicators, p: usize, q: usize, d: usize) -> usize {
        (p..=q)
            .filter(|&i| indicators.unbordered_prefix[i] && indicators.border[i - d])
            .count()
    }

    #[test]
    fn against_naive() {
        for (n, k) in [(8, 2), (7, 3), (5, 4)] {
            for word in Words::new(n, k) {
                let indicators = BorderIndicators::new(&word);
                let borders = periods_of_all_prefixes(&word)[n].to_borders(n);
                let mut sums = StridedRangeSum::new(&indicators.unbordered_prefix, borders);

                for p in 1..=n {
                    for q in p + 1..=n {
                        for d in 1..p {
                            assert_eq!(
                                sums.sum(p, q, d),
                                naive_sum(&indicators, p, q, d),
                                "word: {word:?}, p: {p}, q: {q}, d: {d}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn empty_range() {
        let indicators = [false, true, true];
        let mut sums = StridedRangeSum::new(&indicators, vec![ArithSequence::new(1, 1, 1)]);

        assert_eq!(sums.sum(2, 1, 0), 0);
        assert_eq!(sums.sum(1, 1, 0), 1);
    }

    #[test]
    fn without_support() {
        let indicators = [false, true, true, true];
        let mut sums = StridedRangeSum::new(&indicators, Vec::new());

        assert_eq!(sums.sum(1, 3, 1), 0);
    }
}
