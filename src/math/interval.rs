/// A closed range of scalar values, typically a polygon projected onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// The smallest value in the range
    pub min: f64,

    /// The largest value in the range
    pub max: f64,
}

impl Interval {
    /// Creates a new interval
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates an empty interval that any value will extend
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Grows the interval to include `value`
    #[inline]
    pub fn extend(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Returns `max - min`
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if the two intervals share at least one point.
    /// Touching endpoints count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.max(other.min) <= self.max.min(other.max)
    }

    /// Returns the length of the shared range, negative when disjoint
    #[inline]
    pub fn overlap(&self, other: &Self) -> f64 {
        self.max.min(other.max) - self.min.max(other.min)
    }

    /// Returns the overlap amount if the intervals overlap
    #[inline]
    pub fn overlap_amount(&self, other: &Self) -> Option<f64> {
        if self.overlaps(other) {
            Some(self.overlap(other))
        } else {
            None
        }
    }
}

impl FromIterator<f64> for Interval {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut interval = Interval::empty();
        for value in iter {
            interval.extend(value);
        }
        interval
    }
}
