//! Ranking and unranking of bordered and unbordered words.
//!
//! A word over `{1..=k}` is bordered if some non-empty proper prefix of it is also its suffix.
//! The `k^n` words of length `n` split into bordered and unbordered ones, and each class is
//! numbered separately in lexicographic order, starting at 1. This crate maps words to these
//! ranks and back without enumerating the word space.

pub mod arith_sequence;
pub mod config;
pub mod error;
pub mod naive;
pub mod periodicity;
pub mod periods_group;
pub mod strided_range_sum;
pub mod weighted_select;
pub mod words;

mod bordered_counter;
mod fast;

use num_bigint::BigUint;
use num_traits::Zero;

#[doc(inline)]
pub use bordered_counter::{bordered_count, unbordered_count};
#[doc(inline)]
pub use config::{Algorithm, Ranker, RankerConfig};
#[doc(inline)]
pub use error::{RankError, Result};
#[doc(inline)]
pub use fast::FastRankerUnranker;
#[doc(inline)]
pub use periodicity::is_bordered;

/// A bijection between the words of one borderedness class and `1..=count`.
///
/// Words are slices of symbols in `1..=alphabet_size`, ranks are 1-based.
pub trait RankerUnranker {
    /// Returns one plus the number of words in the requested class that are lexicographically
    /// smaller than `word`.
    ///
    /// If `word` belongs to the class, this is its rank. Otherwise it is the rank the word would
    /// be inserted at.
    fn rank(&self, word: &[usize], alphabet_size: usize, bordered: bool) -> Result<BigUint>;

    /// Returns the word of length `length` with the given rank in the requested class.
    fn unrank(
        &self,
        rank: &BigUint,
        length: usize,
        alphabet_size: usize,
        bordered: bool,
    ) -> Result<Vec<usize>>;
}

/// Ranks `word` with the [`FastRankerUnranker`].
pub fn rank(word: &[usize], alphabet_size: usize, bordered: bool) -> Result<BigUint> {
    FastRankerUnranker.rank(word, alphabet_size, bordered)
}

/// Unranks `rank` with the [`FastRankerUnranker`].
pub fn unrank(
    rank: &BigUint,
    length: usize,
    alphabet_size: usize,
    bordered: bool,
) -> Result<Vec<usize>> {
    FastRankerUnranker.unrank(rank, length, alphabet_size, bordered)
}

fn check_alphabet(alphabet_size: usize) -> Result<()> {
    if alphabet_size == 0 {
        return Err(RankError::EmptyAlphabet);
    }

    Ok(())
}

pub(crate) fn check_word(word: &[usize], alphabet_size: usize, bordered: bool) -> Result<()> {
    check_alphabet(alphabet_size)?;

    if let Some((position, &symbol)) = word
        .iter()
        .enumerate()
        .find(|&(_, &symbol)| symbol == 0 || symbol > alphabet_size)
    {
        return Err(RankError::SymbolOutOfRange {
            position,
            symbol,
            alphabet_size,
        });
    }

    if word.is_empty() && bordered {
        return Err(RankError::NoBorderedEmptyWord);
    }

    Ok(())
}

pub(crate) fn check_rank(
    rank: &BigUint,
    length: usize,
    alphabet_size: usize,
    bordered: bool,
) -> Result<()> {
    check_alphabet(alphabet_size)?;

    let count = if bordered {
        bordered_count(length, alphabet_size)
    } else {
        unbordered_count(length, alphabet_size)
    };

    if rank.is_zero() || *rank > count {
        return Err(RankError::RankOutOfRange {
            rank: rank.clone(),
            count,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_words() {
        assert_eq!(rank(&[1, 2], 0, false), Err(RankError::EmptyAlphabet));
        assert_eq!(
            rank(&[1, 3, 2], 2, true),
            Err(RankError::SymbolOutOfRange {
                position: 1,
                symbol: 3,
                alphabet_size: 2
            })
        );
        assert!(matches!(
            rank(&[0], 2, false),
            Err(RankError::SymbolOutOfRange { symbol: 0, .. })
        ));
        assert_eq!(rank(&[], 2, true), Err(RankError::NoBorderedEmptyWord));
    }

    #[test]
    fn invalid_ranks() {
        assert_eq!(
            unrank(&BigUint::from(5u32), 3, 2, true),
            Err(RankError::RankOutOfRange {
                rank: BigUint::from(5u32),
                count: BigUint::from(4u32)
            })
        );
        assert!(matches!(
            unrank(&BigUint::zero(), 3, 2, false),
            Err(RankError::RankOutOfRange { .. })
        ));
        assert!(matches!(
            unrank(&BigUint::from(1u32), 0, 2, true),
            Err(RankError::RankOutOfRange { .. })
        ));
        assert_eq!(
            unrank(&BigUint::from(1u32), 2, 0, false),
            Err(RankError::EmptyAlphabet)
        );
    }

    #[test]
    fn largest_alphabet() {
        let k = usize::MAX;
        let one = BigUint::from(1u32);

        assert_eq!(rank(&[1, 2], k, true), Ok(BigUint::from(2u32)));
        assert_eq!(unrank(&one, 2, k, false), Ok(vec![1, 2]));

        // k k-1 is the largest unbordered word of length 2
        let last = unbordered_count(2, k);
        assert_eq!(rank(&[k, k - 1], k, false), Ok(last.clone()));
        assert_eq!(unrank(&last, 2, k, false), Ok(vec![k, k - 1]));

        let word = [k, 1, 2, k];
        let word_rank = rank(&word, k, true).unwrap();
        assert_eq!(unrank(&word_rank, 4, k, true), Ok(word.to_vec()));
    }
}
