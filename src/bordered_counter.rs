use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    arith_sequence::ArithSequence, periodicity::PrefixFunction, periods_group::PeriodsGroup,
    strided_range_sum::StridedRangeSum,
};

/// Number of unbordered words of length `length` over an alphabet of size `alphabet_size`.
pub fn unbordered_count(length: usize, alphabet_size: usize) -> BigUint {
    let mut counts = Vec::with_capacity(length + 1);
    counts.push(BigUint::one());

    for m in 1..=length {
        let mut count = &counts[m - 1] * alphabet_size;

        if m % 2 == 0 {
            count -= &counts[m / 2];
        }

        counts.push(count);
    }

    counts.swap_remove(length)
}

/// Number of bordered words of length `length` over an alphabet of size `alphabet_size`.
pub fn bordered_count(length: usize, alphabet_size: usize) -> BigUint {
    BigUint::from(alphabet_size).pow(length as u32) - unbordered_count(length, alphabet_size)
}

// k^e for all e in 0..=max_exponent
#[derive(Debug, Clone)]
pub(crate) struct Powers {
    values: Vec<BigUint>,
}

impl Powers {
    pub(crate) fn new(base: usize, max_exponent: usize) -> Self {
        let mut values = Vec::with_capacity(max_exponent + 1);
        values.push(BigUint::one());

        for e in 1..=max_exponent {
            let next = &values[e - 1] * base;
            values.push(next);
        }

        Self { values }
    }

    pub(crate) fn get(&self, exponent: usize) -> &BigUint {
        &self.values[exponent]
    }
}

/// Counts of bordered and unbordered completions of one fixed word `u` to every length in
/// `u.len()..=target_len`.
///
/// Lengths up to `2 * u.len()` are counted directly, the rest follow from
/// `U(m) = k * U(m - 1) - [m even] * U(m / 2)`.
#[derive(Debug, Clone)]
pub(crate) struct CompletionTable<'a> {
    prefix_len: usize,
    powers: &'a Powers,
    unbordered: Vec<BigUint>,
}

impl<'a> CompletionTable<'a> {
    // `unbordered_prefix` is the 1-based indicator array of u, `borders` the border lengths of u
    pub(crate) fn new(
        unbordered_prefix: &[bool],
        borders: Vec<ArithSequence>,
        alphabet_size: usize,
        powers: &'a Powers,
        target_len: usize,
    ) -> Self {
        let prefix_len = unbordered_prefix.len() - 1;
        assert!(
            1 <= prefix_len && prefix_len <= target_len,
            "prefix length {prefix_len} is not in 1..={target_len}"
        );

        let direct_end = target_len.min(2 * prefix_len);
        let mut sums = StridedRangeSum::new(unbordered_prefix, borders);
        let mut unbordered = Vec::with_capacity(target_len - prefix_len + 1);

        // words whose shortest border is not longer than the completion part
        let mut short_borders = BigUint::zero();

        for m in prefix_len..=direct_end {
            let extension_len = m - prefix_len;

            if m > prefix_len {
                short_borders *= alphabet_size;
                if unbordered_prefix[extension_len] {
                    short_borders += 1u32;
                }
            }

            let long_borders = sums.sum(extension_len + 1, m / 2, extension_len);
            let bordered = &short_borders + long_borders;

            unbordered.push(powers.get(extension_len) - bordered);
        }

        for m in direct_end + 1..=target_len {
            let mut count = &unbordered[m - 1 - prefix_len] * alphabet_size;

            if m % 2 == 0 {
                count -= &unbordered[m / 2 - prefix_len];
            }

            unbordered.push(count);
        }

        Self {
            prefix_len,
            powers,
            unbordered,
        }
    }

    pub(crate) fn unbordered(&self, len: usize) -> &BigUint {
        &self.unbordered[len - self.prefix_len]
    }

    pub(crate) fn bordered(&self, len: usize) -> BigUint {
        self.powers.get(len - self.prefix_len) - self.unbordered(len)
    }

    pub(crate) fn count(&self, len: usize, bordered: bool) -> BigUint {
        if bordered {
            self.bordered(len)
        } else {
            self.unbordered(len).clone()
        }
    }
}

/// Completion counting for the prefixes of one word over `{1..=k}`, towards a fixed target length.
///
/// The word may be given in full (ranking) or grow one symbol at a time (unranking). Periods and
/// the failure function of every prefix are kept incrementally.
#[derive(Debug, Clone)]
pub(crate) struct BorderedCounter {
    alphabet_size: usize,
    target_len: usize,
    prefix_function: PrefixFunction<usize>,
    periods: Vec<PeriodsGroup>,
    powers: Powers,
}

impl BorderedCounter {
    pub(crate) fn new(alphabet_size: usize, target_len: usize) -> Self {
        let mut periods = Vec::with_capacity(target_len + 1);
        periods.push(PeriodsGroup::new());

        Self {
            alphabet_size,
            target_len,
            prefix_function: PrefixFunction::with_capacity(target_len),
            periods,
            powers: Powers::new(alphabet_size, target_len),
        }
    }

    pub(crate) fn from_word(word: &[usize], alphabet_size: usize) -> Self {
        let mut counter = Self::new(alphabet_size, word.len());

        for &symbol in word {
            counter.push(symbol);
        }

        counter
    }

    pub(crate) fn push(&mut self, symbol: usize) {
        assert!(self.word().len() < self.target_len);

        let next = self.periods[self.word().len()].extend_one_step(self.word(), &symbol);
        self.periods.push(next);
        self.prefix_function.push(symbol);
    }

    pub(crate) fn word(&self) -> &[usize] {
        self.prefix_function.word()
    }

    /// Symbols `c` such that `word[..prefix_len] + [c]` is bordered, sorted.
    pub(crate) fn border_symbols(&self, prefix_len: usize) -> Vec<usize> {
        if prefix_len == 0 {
            return Vec::new();
        }

        let word = self.word();
        let mut symbols: Vec<_> = std::iter::once(word[0])
            .chain(
                self.periods[prefix_len]
                    .base_periods()
                    .map(|period| word[prefix_len - period]),
            )
            .collect();

        symbols.sort_unstable();
        symbols.dedup();

        symbols
    }

    /// Completion counts of `word[..prefix_len - 1] + [symbol]` towards the target length.
    pub(crate) fn completions(&self, prefix_len: usize, symbol: usize) -> CompletionTable<'_> {
        assert!(
            1 <= prefix_len && prefix_len <= self.target_len && prefix_len <= self.word().len() + 1,
            "prefix length {prefix_len} is invalid for a word of length {} and target length {}",
            self.word().len(),
            self.target_len
        );

        let known_len = prefix_len - 1;
        let known = &self.word()[..known_len];
        let periods = self.periods[known_len].extend_one_step(known, &symbol);

        let mut unbordered_prefix = Vec::with_capacity(prefix_len + 1);
        unbordered_prefix.push(false);
        unbordered_prefix.extend(
            (1..=known_len).map(|len| !self.prefix_function.is_prefix_bordered(len)),
        );
        unbordered_prefix.push(periods.is_empty());

        CompletionTable::new(
            &unbordered_prefix,
            periods.to_borders(prefix_len),
            self.alphabet_size,
            &self.powers,
            self.target_len,
        )
    }

    pub(crate) fn count(&self, prefix_len: usize, symbol: usize, bordered: bool) -> BigUint {
        self.completions(prefix_len, symbol)
            .count(self.target_len, bordered)
    }
}

/// Smallest symbol in `1..=limit` that is not contained in the sorted slice `taken`.
pub(crate) fn first_free_symbol(taken: &[usize], limit: usize) -> Option<usize> {
    let mut candidate = 1;

    for &symbol in taken {
        if symbol > candidate {
            break;
        }
        if symbol == candidate {
            candidate += 1;
        }
    }

    (candidate <= limit).then_some(candidate)
}
