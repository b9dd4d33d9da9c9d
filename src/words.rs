use num_bigint::BigUint;
use num_traits::Zero;

/// Iterates all words of length `length` over `{1..=alphabet_size}` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Words {
    next: Option<Vec<usize>>,
    alphabet_size: usize,
}

impl Words {
    pub fn new(length: usize, alphabet_size: usize) -> Self {
        let next = (length == 0 || alphabet_size > 0).then(|| vec![1; length]);

        Self {
            next,
            alphabet_size,
        }
    }
}

impl Iterator for Words {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();

        // odometer step, the last position changes fastest
        for i in (0..successor.len()).rev() {
            if successor[i] < self.alphabet_size {
                successor[i] += 1;
                self.next = Some(successor);
                break;
            }

            successor[i] = 1;
        }

        Some(current)
    }
}

/// The Fibonacci word of the given order over `{1, 2}`: `f(0) = 1`, `f(1) = 12`,
/// `f(n) = f(n - 1) f(n - 2)`.
pub fn fibonacci_word(order: usize) -> Vec<usize> {
    let mut previous = vec![1];
    let mut current = vec![1, 2];

    if order == 0 {
        return previous;
    }

    for _ in 1..order {
        let next = [current.as_slice(), previous.as_slice()].concat();
        previous = std::mem::replace(&mut current, next);
    }

    current
}

/// The value of `word` read as a base-`alphabet_size` numeral with digits `symbol - 1`.
///
/// This is the number of words of the same length that are lexicographically smaller.
pub fn numeral_value(word: &[usize], alphabet_size: usize) -> BigUint {
    word.iter().fold(BigUint::zero(), |value, &symbol| {
        value * alphabet_size + (symbol - 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_order() {
        let words: Vec<_> = Words::new(2, 3).collect();

        assert_eq!(
            words,
            [[1, 1], [1, 2], [1, 3], [2, 1], [2, 2], [2, 3], [3, 1], [3, 2], [3, 3]]
        );
        assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(Words::new(0, 4).collect::<Vec<_>>(), [Vec::<usize>::new()]);
        assert_eq!(Words::new(0, 0).count(), 1);
        assert_eq!(Words::new(3, 0).count(), 0);
        assert_eq!(Words::new(4, 1).collect::<Vec<_>>(), [vec![1, 1, 1, 1]]);
        assert_eq!(Words::new(5, 3).count(), 243);
    }

    #[test]
    fn fibonacci_words() {
        assert_eq!(fibonacci_word(0), [1]);
        assert_eq!(fibonacci_word(1), [1, 2]);
        assert_eq!(fibonacci_word(2), [1, 2, 1]);
        assert_eq!(fibonacci_word(5), [1, 2, 1, 1, 2, 1, 2, 1, 1, 2, 1, 1, 2]);
        assert_eq!(fibonacci_word(10).len(), 144);
    }

    #[test]
    fn numeral_value_counts_smaller_words() {
        for (position, word) in Words::new(4, 3).enumerate() {
            assert_eq!(numeral_value(&word, 3), BigUint::from(position));
        }

        assert!(numeral_value(&[], 7).is_zero());
    }
}
