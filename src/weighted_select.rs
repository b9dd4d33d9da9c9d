use std::collections::BTreeMap;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

const OFFSET_OUT_OF_RANGE: &str = "offset out of range for given weights";
const MISSING_DEFAULT_WEIGHT: &str = "symbols without an explicit weight need a default weight";

/// Weights for the symbols `1..=alphabet_size`.
///
/// A few symbols carry an explicit weight, every other symbol shares one default weight. The
/// default is only needed if some symbol without an explicit weight is actually visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolWeights {
    alphabet_size: usize,
    explicit: BTreeMap<usize, BigUint>,
    default: Option<BigUint>,
}

/// A maximal run of symbols as seen by a left to right scan over the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightRun<'a> {
    Explicit {
        symbol: usize,
        weight: &'a BigUint,
    },
    /// `len` consecutive symbols starting at `first` that all have the default weight.
    Default {
        first: usize,
        len: usize,
        weight: Option<&'a BigUint>,
    },
}

/// The symbol whose cumulative weight interval contains a given offset, and the 1-based offset
/// inside that interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub symbol: usize,
    pub offset: BigUint,
}

impl SymbolWeights {
    pub fn new(
        alphabet_size: usize,
        explicit: impl IntoIterator<Item = (usize, BigUint)>,
        default: Option<BigUint>,
    ) -> Self {
        let explicit: BTreeMap<_, _> = explicit.into_iter().collect();

        if let Some((&symbol, _)) = explicit
            .iter()
            .find(|&(&symbol, _)| symbol == 0 || symbol > alphabet_size)
        {
            panic!("symbol {symbol} is outside of the alphabet 1..={alphabet_size}");
        }

        Self {
            alphabet_size,
            explicit,
            default,
        }
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub fn weight_of(&self, symbol: usize) -> Option<&BigUint> {
        assert!((1..=self.alphabet_size).contains(&symbol));

        self.explicit.get(&symbol).or(self.default.as_ref())
    }

    pub fn runs(&self) -> impl Iterator<Item = WeightRun<'_>> {
        let default = self.default.as_ref();
        let mut runs = Vec::with_capacity(2 * self.explicit.len() + 1);

        // `None` once an explicit weight sits on the largest representable symbol
        let mut next = Some(1);

        for (&symbol, weight) in &self.explicit {
            if let Some(first) = next.filter(|&first| first < symbol) {
                runs.push(WeightRun::Default {
                    first,
                    len: symbol - first,
                    weight: default,
                });
            }

            runs.push(WeightRun::Explicit { symbol, weight });
            next = symbol.checked_add(1);
        }

        if let Some(first) = next.filter(|&first| first <= self.alphabet_size) {
            runs.push(WeightRun::Default {
                first,
                len: self.alphabet_size - first + 1,
                weight: default,
            });
        }

        runs.into_iter()
    }

    pub fn total(&self) -> BigUint {
        let mut sum = BigUint::zero();

        for run in self.runs() {
            match run {
                WeightRun::Explicit { weight, .. } => sum += weight,
                WeightRun::Default { len, weight, .. } => {
                    sum += weight.expect(MISSING_DEFAULT_WEIGHT) * len;
                }
            }
        }

        sum
    }

    /// Sum of the weights of all symbols smaller than `symbol`, which may be one past the
    /// largest symbol.
    ///
    /// Runs of default weighted symbols are added as a single product.
    pub fn weight_below(&self, symbol: usize) -> BigUint {
        assert!(
            symbol != 0 && symbol - 1 <= self.alphabet_size,
            "symbol {symbol} is outside of 1..=alphabet_size + 1"
        );

        let mut sum = BigUint::zero();

        for run in self.runs() {
            match run {
                WeightRun::Explicit { symbol: s, weight } => {
                    if s >= symbol {
                        break;
                    }
                    sum += weight;
                }
                WeightRun::Default { first, len, weight } => {
                    if first >= symbol {
                        break;
                    }
                    sum += weight.expect(MISSING_DEFAULT_WEIGHT) * len.min(symbol - first);
                }
            }
        }

        sum
    }

    /// Finds the symbol whose cumulative weight interval contains `offset`.
    ///
    /// Runs of default weighted symbols are skipped or resolved with one division, so the running
    /// time depends on the number of explicit weights only.
    ///
    /// # Panics
    ///
    /// If `offset` is not in `1..=self.total()`.
    pub fn select(&self, offset: &BigUint) -> Selection {
        assert!(!offset.is_zero(), "{OFFSET_OUT_OF_RANGE}");

        let mut remaining = offset.clone();

        for run in self.runs() {
            match run {
                WeightRun::Explicit { symbol, weight } => {
                    if *weight >= remaining {
                        return Selection {
                            symbol,
                            offset: remaining,
                        };
                    }
                    remaining -= weight;
                }
                WeightRun::Default { first, len, weight } => {
                    let weight = weight.expect(MISSING_DEFAULT_WEIGHT);
                    let run_weight = weight * len;

                    if run_weight < remaining {
                        remaining -= run_weight;
                        continue;
                    }

                    // the run weight covers remaining >= 1, so weight is not zero here
                    let index = (&remaining - 1u32) / weight;
                    remaining -= &index * weight;

                    return Selection {
                        symbol: first
                            + index
                                .to_usize()
                                .expect("index inside a run fits the alphabet"),
                        offset: remaining,
                    };
                }
            }
        }

        panic!("{OFFSET_OUT_OF_RANGE}")
    }

    /// Same as [`select`](Self::select), but visits every symbol of the alphabet.
    pub fn select_linear(&self, offset: &BigUint) -> Selection {
        assert!(!offset.is_zero(), "{OFFSET_OUT_OF_RANGE}");

        let mut remaining = offset.clone();

        for symbol in 1..=self.alphabet_size {
            let weight = self.weight_of(symbol).expect(MISSING_DEFAULT_WEIGHT);

            if *weight >= remaining {
                return Selection {
                    symbol,
                    offset: remaining,
                };
            }

            remaining -= weight;
        }

        panic!("{OFFSET_OUT_OF_RANGE}")
    }
}
