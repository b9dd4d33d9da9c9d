use crate::arith_sequence::ArithSequence;

/// All periods of a word, grouped into families of multiples `{p, 2p, ..., mp}`.
///
/// Every family is stored as an [`ArithSequence`] with `start == step == p`. A period keeps all of
/// its multiples below the word length, so a family is only ever extended at its end or dropped
/// as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodsGroup {
    families: Vec<ArithSequence>,
}

impl PeriodsGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn families(&self) -> &[ArithSequence] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// A word without periods is unbordered.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Smallest period of every family.
    pub fn base_periods(&self) -> impl Iterator<Item = usize> + '_ {
        self.families.iter().map(|family| family.step() as usize)
    }

    /// Every period, family by family.
    pub fn periods(&self) -> impl Iterator<Item = usize> + '_ {
        self.families
            .iter()
            .flat_map(|family| family.iter().map(|period| period as usize))
    }

    /// Computes the periods of `prefix + [symbol]` from the periods of `prefix`.
    ///
    /// The running time is linear in the number of families, not in the length of the prefix.
    pub fn extend_one_step<T: Eq>(&self, prefix: &[T], symbol: &T) -> Self {
        let n = prefix.len();

        if n == 0 {
            return Self::new();
        }

        let mut families = Vec::with_capacity(self.families.len() + 1);
        let mut covers_new_period = false;

        for family in &self.families {
            debug_assert!(
                family.start() == family.step() && family.end() + family.step() >= n as i64,
                "malformed period family {family:?} for prefix length {n}"
            );

            let base_period = family.step() as usize;

            // all multiples of a period survive or die together with it
            if prefix[n - base_period] != *symbol {
                continue;
            }

            if family.end() + family.step() == n as i64 {
                families.push(family.with_next_step());
                covers_new_period = true;
            } else {
                families.push(*family);
            }
        }

        if !covers_new_period && prefix[0] == *symbol {
            let n = n as i64;
            families.push(ArithSequence::new(n, n, n));
        }

        Self { families }
    }

    /// Maps every period `p` to the border length `len - p`.
    pub fn to_borders(&self, len: usize) -> Vec<ArithSequence> {
        let len = len as i64;

        self.families
            .iter()
            .map(|family| {
                ArithSequence::new(len - family.end(), len - family.start(), family.step())
            })
            .collect()
    }
}

/// Periods of `word[..i]` for every `i` in `0..=word.len()`.
pub fn periods_of_all_prefixes<T: Eq>(word: &[T]) -> Vec<PeriodsGroup> {
    let mut groups = Vec::with_capacity(word.len() + 1);
    groups.push(PeriodsGroup::new());

    for (i, symbol) in word.iter().enumerate() {
        let next = groups[i].extend_one_step(&word[..i], symbol);
        groups.push(next);
    }

    groups
}
