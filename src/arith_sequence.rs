/// The arithmetic progression `{start, start + step, ...}` cut off at `end`.
///
/// `end` does not have to be a term of the progression, [`normalize`](Self::normalize) moves it
/// down to the last term. A progression with `start > end` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArithSequence {
    start: i64,
    end: i64,
    step: i64,
}

impl ArithSequence {
    pub fn new(start: i64, end: i64, step: i64) -> Self {
        assert!(step >= 1, "step of an arithmetic sequence must be positive, got {step}");

        Self { start, end, step }
    }

    /// The canonical empty progression with the given step.
    pub fn empty(step: i64) -> Self {
        Self::new(1, 0, step)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn first(&self) -> Option<i64> {
        (!self.is_empty()).then_some(self.start)
    }

    /// The largest term that is at most `end`.
    pub fn last(&self) -> Option<i64> {
        (!self.is_empty())
            .then(|| self.start + (self.end - self.start).div_euclid(self.step) * self.step)
    }

    pub fn normalize(self) -> Self {
        match self.last() {
            Some(last) => Self::new(self.start, last, self.step),
            None => Self::empty(self.step),
        }
    }

    pub fn count(&self) -> usize {
        (self.end + self.step - self.start)
            .div_euclid(self.step)
            .max(0) as usize
    }

    /// Intersection with the closed interval `[lo, hi]`.
    pub fn intersection(&self, lo: i64, hi: i64) -> Self {
        assert!(lo <= hi, "empty interval [{lo}, {hi}]");

        if self.is_empty() {
            return *self;
        }

        let start = if lo >= self.start {
            self.start + (lo - self.start + self.step - 1).div_euclid(self.step) * self.step
        } else {
            self.start
        };

        Self::new(start, hi.min(self.end), self.step).normalize()
    }

    /// Extends the progression by one more term.
    pub fn with_next_step(&self) -> Self {
        Self::new(self.start, self.end + self.step, self.step)
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + use<> {
        (self.start..=self.end).step_by(self.step as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(sequence: ArithSequence) -> Vec<i64> {
        sequence.iter().collect()
    }

    #[test]
    fn end_on_a_term() {
        let sequence = ArithSequence::new(3, 9, 2);

        assert_eq!(terms(sequence), [3, 5, 7, 9]);
        assert_eq!(sequence.count(), 4);
        assert_eq!(sequence.first(), Some(3));
        assert_eq!(sequence.last(), Some(9));
    }

    #[test]
    fn end_between_terms() {
        let sequence = ArithSequence::new(3, 10, 2);

        assert_eq!(terms(sequence), [3, 5, 7, 9]);
        assert_eq!(sequence.count(), 4);
        assert_eq!(sequence.first(), Some(3));
        assert_eq!(sequence.last(), Some(9));
        assert_eq!(sequence.normalize(), ArithSequence::new(3, 9, 2));
    }

    #[test]
    fn empty_sequences() {
        let sequence = ArithSequence::new(5, 4, 3);

        assert!(sequence.is_empty());
        assert_eq!(sequence.count(), 0);
        assert_eq!(sequence.first(), None);
        assert_eq!(sequence.last(), None);
        assert_eq!(sequence.normalize(), ArithSequence::empty(3));
        assert_eq!(ArithSequence::new(20, 1, 7).count(), 0);
    }

    #[test]
    fn intersections() {
        let sequence = ArithSequence::new(3, 9, 2);

        assert!(terms(sequence.intersection(-10, -5)).is_empty());
        assert_eq!(sequence.intersection(-10, -5).count(), 0);
        assert_eq!(terms(sequence.intersection(-10, 20)), [3, 5, 7, 9]);
        assert_eq!(terms(sequence.intersection(5, 7)), [5, 7]);
        assert_eq!(terms(sequence.intersection(4, 7)), [5, 7]);
        assert_eq!(terms(sequence.intersection(5, 8)), [5, 7]);
        assert_eq!(terms(sequence.intersection(6, 6)), Vec::<i64>::new());
        assert_eq!(sequence.intersection(4, 8).last(), Some(7));
    }

    #[test]
    fn next_step() {
        let sequence = ArithSequence::new(4, 4, 4).with_next_step().with_next_step();

        assert_eq!(terms(sequence), [4, 8, 12]);
    }
}
