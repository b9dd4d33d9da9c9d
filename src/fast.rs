use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    RankerUnranker,
    bordered_counter::{BorderedCounter, first_free_symbol},
    error::Result,
    weighted_select::{Selection, SymbolWeights},
    words::numeral_value,
};

/// Ranking and unranking driven by incrementally maintained period families.
///
/// Each position of the word is handled with one completion count per symbol that would make the
/// current prefix bordered, plus one count shared by all remaining symbols. The prefix has at most
/// one more such symbol than it has period families. That is small for most words but can
/// grow with the length for highly periodic ones like `1^m 2 1^m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastRankerUnranker;

impl FastRankerUnranker {
    fn rank_bordered(word: &[usize], alphabet_size: usize) -> BigUint {
        let counter = BorderedCounter::from_word(word, alphabet_size);
        let mut smaller_bordered = BigUint::zero();

        for (i, &symbol) in word.iter().enumerate() {
            let candidates: Vec<_> = counter
                .border_symbols(i)
                .into_iter()
                .take_while(|&c| c < symbol)
                .collect();

            let explicit: Vec<_> = candidates
                .iter()
                .map(|&c| (c, counter.count(i + 1, c, true)))
                .collect();
            let default = first_free_symbol(&candidates, symbol - 1)
                .map(|c| counter.count(i + 1, c, true));

            smaller_bordered += SymbolWeights::new(alphabet_size, explicit, default)
                .weight_below(symbol);
        }

        smaller_bordered + 1u32
    }

    // bordered and unbordered words smaller than `word` add up to its numeral value
    fn rank_unbordered(word: &[usize], alphabet_size: usize) -> BigUint {
        numeral_value(word, alphabet_size) + 2u32 - Self::rank_bordered(word, alphabet_size)
    }
}

impl RankerUnranker for FastRankerUnranker {
    fn rank(&self, word: &[usize], alphabet_size: usize, bordered: bool) -> Result<BigUint> {
        crate::check_word(word, alphabet_size, bordered)?;

        Ok(if bordered {
            Self::rank_bordered(word, alphabet_size)
        } else {
            Self::rank_unbordered(word, alphabet_size)
        })
    }

    fn unrank(
        &self,
        rank: &BigUint,
        length: usize,
        alphabet_size: usize,
        bordered: bool,
    ) -> Result<Vec<usize>> {
        crate::check_rank(rank, length, alphabet_size, bordered)?;

        let mut counter = BorderedCounter::new(alphabet_size, length);
        let mut offset = rank.clone();

        for prefix_len in 1..=length {
            let candidates = counter.border_symbols(prefix_len - 1);

            let explicit: Vec<_> = candidates
                .iter()
                .map(|&c| (c, counter.count(prefix_len, c, bordered)))
                .collect();
            let default = first_free_symbol(&candidates, alphabet_size)
                .map(|c| counter.count(prefix_len, c, bordered));

            let Selection { symbol, offset: rest } =
                SymbolWeights::new(alphabet_size, explicit, default).select(&offset);

            counter.push(symbol);
            offset = rest;
        }

        assert!(offset.is_one(), "invalid final rank: {offset}");

        Ok(counter.word().to_vec())
    }
}
