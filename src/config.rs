use std::{fmt, str::FromStr};

use num_bigint::BigUint;

use crate::{
    FastRankerUnranker, RankerUnranker,
    error::{RankError, Result},
    naive::{BorderArrayRankerUnranker, BruteForceRankerUnranker},
};

/// The implementation behind a [`Ranker`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Incremental periods with compressed completion counting.
    #[default]
    Fast,
    /// Border arrays rebuilt for every candidate prefix.
    BorderArray,
    /// Enumeration of the whole word space. Only usable for tiny lengths.
    BruteForce,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fast => "fast",
            Algorithm::BorderArray => "ub",
            Algorithm::BruteForce => "base",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fast" => Ok(Algorithm::Fast),
            "ub" => Ok(Algorithm::BorderArray),
            "base" => Ok(Algorithm::BruteForce),
            _ => Err(RankError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RankerConfig {
    algorithm: Algorithm,
}

impl RankerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.algorithm = algorithm;
        self
    }

    pub fn construct(&self) -> Ranker {
        Ranker {
            algorithm: self.algorithm,
        }
    }
}

/// A [`RankerUnranker`] that dispatches to the configured [`Algorithm`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ranker {
    algorithm: Algorithm,
}

impl Ranker {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn implementation(&self) -> &'static dyn RankerUnranker {
        match self.algorithm {
            Algorithm::Fast => &FastRankerUnranker,
            Algorithm::BorderArray => &BorderArrayRankerUnranker,
            Algorithm::BruteForce => &BruteForceRankerUnranker,
        }
    }
}

impl RankerUnranker for Ranker {
    fn rank(&self, word: &[usize], alphabet_size: usize, bordered: bool) -> Result<BigUint> {
        self.implementation().rank(word, alphabet_size, bordered)
    }

    fn unrank(
        &self,
        rank: &BigUint,
        length: usize,
        alphabet_size: usize,
        bordered: bool,
    ) -> Result<Vec<usize>> {
        self.implementation()
            .unrank(rank, length, alphabet_size, bordered)
    }
}
