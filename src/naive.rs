//! Slow reference implementations of [`RankerUnranker`], used to verify the fast engine.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    RankerUnranker,
    bordered_counter::Powers,
    error::Result,
    periodicity::{BorderIndicators, is_bordered},
    words::{Words, numeral_value},
};

/// Enumerates all `k^n` words in lexicographic order and filters them by borderedness.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceRankerUnranker;

impl RankerUnranker for BruteForceRankerUnranker {
    fn rank(&self, word: &[usize], alphabet_size: usize, bordered: bool) -> Result<BigUint> {
        crate::check_word(word, alphabet_size, bordered)?;

        let smaller = Words::new(word.len(), alphabet_size)
            .take_while(|candidate| candidate.as_slice() < word)
            .filter(|candidate| is_bordered(candidate) == bordered)
            .count();

        Ok(BigUint::from(smaller + 1))
    }

    fn unrank(
        &self,
        rank: &BigUint,
        length: usize,
        alphabet_size: usize,
        bordered: bool,
    ) -> Result<Vec<usize>> {
        crate::check_rank(rank, length, alphabet_size, bordered)?;

        let mut remaining = rank.clone();

        for word in Words::new(length, alphabet_size) {
            if is_bordered(&word) != bordered {
                continue;
            }

            remaining -= 1u32;
            if remaining.is_zero() {
                return Ok(word);
            }
        }

        unreachable!("rank {rank} was checked against the class size")
    }
}

/// The quadratic baseline: the border array of every candidate prefix is rebuilt from scratch and
/// completion counts are tabulated for all lengths up to `n`.
///
/// Unranking binary searches every position with full ranking calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderArrayRankerUnranker;

impl BorderArrayRankerUnranker {
    // bordered words of length n that start with the candidate prefix of length p
    fn bordered_completions(
        indicators: &BorderIndicators,
        n: usize,
        p: usize,
        powers: &Powers,
    ) -> BigUint {
        let a = &indicators.unbordered_prefix;

        if n <= 2 * p {
            return Self::bordered_completions_direct(indicators, n, p, powers);
        }

        let mut counts = vec![BigUint::zero(); n + 1];

        for (j, count) in counts.iter_mut().enumerate().take(2 * p + 1).skip(p) {
            *count = Self::bordered_completions_direct(indicators, j, p, powers);
        }

        for j in 2 * p + 1..=n {
            let mut total = BigUint::zero();

            for i in 1..=p {
                if a[i] {
                    total += powers.get(j - p - i);
                }
            }

            for i in p + 1..=j / 2 {
                total += (powers.get(i - p) - &counts[i]) * powers.get(j - 2 * i);
            }

            counts[j] = total;
        }

        counts.swap_remove(n)
    }

    fn bordered_completions_direct(
        indicators: &BorderIndicators,
        n: usize,
        p: usize,
        powers: &Powers,
    ) -> BigUint {
        let a = &indicators.unbordered_prefix;
        let b = &indicators.border;
        let mut total = BigUint::zero();

        for i in 1..=n - p {
            if a[i] {
                total += powers.get(n - p - i);
            }
        }

        for i in n - p + 1..=n / 2 {
            if a[i] && b[i - (n - p)] {
                total += 1u32;
            }
        }

        total
    }

    // the word does not have to be bordered itself
    fn rank_bordered(word: &[usize], alphabet_size: usize) -> BigUint {
        let n = word.len();
        let powers = Powers::new(alphabet_size, n);
        let mut candidate = word.to_vec();
        let mut smaller_bordered = BigUint::zero();

        for i in 0..n {
            for c in 1..word[i] {
                candidate[i] = c;
                let indicators = BorderIndicators::new(&candidate[..=i]);
                smaller_bordered += Self::bordered_completions(&indicators, n, i + 1, &powers);
            }

            candidate[i] = word[i];
        }

        smaller_bordered + 1u32
    }

    fn rank_in_class(word: &[usize], alphabet_size: usize, bordered: bool) -> BigUint {
        let rank_bordered = Self::rank_bordered(word, alphabet_size);

        if bordered {
            rank_bordered
        } else {
            numeral_value(word, alphabet_size) + 2u32 - rank_bordered
        }
    }
}

impl RankerUnranker for BorderArrayRankerUnranker {
    fn rank(&self, word: &[usize], alphabet_size: usize, bordered: bool) -> Result<BigUint> {
        crate::check_word(word, alphabet_size, bordered)?;

        Ok(Self::rank_in_class(word, alphabet_size, bordered))
    }

    fn unrank(
        &self,
        rank: &BigUint,
        length: usize,
        alphabet_size: usize,
        bordered: bool,
    ) -> Result<Vec<usize>> {
        crate::check_rank(rank, length, alphabet_size, bordered)?;

        let mut word = vec![1; length];

        for i in 0..length {
            let (mut left, mut right) = (1, alphabet_size);

            // largest symbol whose first completion does not rank past `rank`
            while left < right {
                let mid = (left + right).div_ceil(2);
                word[i] = mid;

                if Self::rank_in_class(&word, alphabet_size, bordered) <= *rank {
                    left = mid;
                } else {
                    right = mid - 1;
                }
            }

            word[i] = left;
        }

        debug_assert!(Self::rank_in_class(&word, alphabet_size, bordered) == *rank);

        Ok(word)
    }
}
