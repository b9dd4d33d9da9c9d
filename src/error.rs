use num_bigint::BigUint;
use thiserror::Error;

/// Errors for inputs that violate the preconditions of ranking and unranking.
///
/// Internal inconsistencies (for example a residual offset other than 1 after the last
/// unranking step) are not represented here. They indicate a defect and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("the alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("symbol {symbol} at position {position} is not in the alphabet 1..={alphabet_size}")]
    SymbolOutOfRange {
        position: usize,
        symbol: usize,
        alphabet_size: usize,
    },

    #[error("rank {rank} is outside of the valid range 1..={count}")]
    RankOutOfRange { rank: BigUint, count: BigUint },

    #[error("no bordered word of length 0 exists")]
    NoBorderedEmptyWord,

    #[error("unknown algorithm `{0}`, expected one of `fast`, `ub` or `base`")]
    UnknownAlgorithm(String),
}

pub type Result<T, E = RankError> = std::result::Result<T, E>;
