/// The failure function of a word, built one symbol at a time.
///
/// `values()[i]` is the length of the longest proper prefix of `word[..=i]` that is also
/// a suffix of it. Appending a symbol runs in amortized O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFunction<T> {
    word: Vec<T>,
    values: Vec<usize>,
}

impl<T: Eq> PrefixFunction<T> {
    pub fn new() -> Self {
        Self {
            word: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            word: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, symbol: T) {
        let mut border = match self.values.last() {
            Some(&border) => border,
            None => {
                self.word.push(symbol);
                self.values.push(0);
                return;
            }
        };

        while border > 0 && self.word[border] != symbol {
            border = self.values[border - 1];
        }

        if self.word[border] == symbol {
            border += 1;
        }

        self.word.push(symbol);
        self.values.push(border);
    }

    pub fn word(&self) -> &[T] {
        &self.word
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Length of the longest border of `word[..len]`.
    pub fn longest_border(&self, len: usize) -> usize {
        assert!(len <= self.len());

        if len == 0 { 0 } else { self.values[len - 1] }
    }

    /// Returns true if `word[..len]` has a border. The empty word is unbordered.
    pub fn is_prefix_bordered(&self, len: usize) -> bool {
        self.longest_border(len) != 0
    }

    /// All border lengths of `word[..len]` in decreasing order.
    pub fn border_lengths(&self, len: usize) -> Vec<usize> {
        let mut borders = Vec::new();
        let mut border = self.longest_border(len);

        while border > 0 {
            borders.push(border);
            border = self.values[border - 1];
        }

        borders
    }
}

impl<T: Eq> Default for PrefixFunction<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq> FromIterator<T> for PrefixFunction<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut prefix_function = Self::with_capacity(iter.size_hint().0);

        for symbol in iter {
            prefix_function.push(symbol);
        }

        prefix_function
    }
}

/// Computes the failure function of `word` in linear time.
pub fn prefix_function<T: Eq + Clone>(word: &[T]) -> Vec<usize> {
    word.iter()
        .cloned()
        .collect::<PrefixFunction<_>>()
        .values
}

/// Returns true if `word` has a non-empty proper prefix that is also a suffix.
pub fn is_bordered<T: Eq + Clone>(word: &[T]) -> bool {
    prefix_function(word).last().is_some_and(|&border| border != 0)
}

/// All border lengths of `word` in decreasing order.
pub fn border_lengths<T: Eq + Clone>(word: &[T]) -> Vec<usize> {
    word.iter()
        .cloned()
        .collect::<PrefixFunction<_>>()
        .border_lengths(word.len())
}

/// Indicator arrays of a word `u` of length `m`, both indexed `0..=m` (index 0 is unused).
///
/// `unbordered_prefix[i]` is set iff `u[..i]` is unbordered, `border[i]` is set iff `u` has a
/// border of length `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderIndicators {
    pub unbordered_prefix: Vec<bool>,
    pub border: Vec<bool>,
}

impl BorderIndicators {
    pub fn new<T: Eq + Clone>(word: &[T]) -> Self {
        let n = word.len();
        let prefix_function: PrefixFunction<_> = word.iter().cloned().collect();

        let mut unbordered_prefix = vec![false; n + 1];
        for (i, &border) in prefix_function.values.iter().enumerate() {
            unbordered_prefix[i + 1] = border == 0;
        }

        let mut border = vec![false; n + 1];
        for len in prefix_function.border_lengths(n) {
            border[len] = true;
        }

        Self {
            unbordered_prefix,
            border,
        }
    }
}
