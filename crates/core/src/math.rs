//! Compensated floating-point summation for price aggregates.
//!
//! Totals are accumulated with a running compensation term (Kahan style), so
//! sums such as `0.1 + 0.2 + 0.3` come out as `0.6` rather than
//! `0.6000000000000001`.

/// Running compensated sum of `f64` values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
    simple_sum: f64,
    count: usize,
}

impl CompensatedSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        let corrected = value - self.compensation;
        let next = self.sum + corrected;
        self.compensation = (next - self.sum) - corrected;
        self.sum = next;
        self.simple_sum += value;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The compensated total.
    ///
    /// When compensation turns an infinite sum into NaN (`inf - inf`), the
    /// plain sum is returned instead.
    pub fn total(&self) -> f64 {
        let total = self.sum - self.compensation;
        if total.is_nan() && self.simple_sum.is_infinite() {
            self.simple_sum
        } else {
            total
        }
    }

    /// Arithmetic mean, `0.0` when nothing was added.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total() / self.count as f64
        }
    }
}

impl Extend<f64> for CompensatedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for CompensatedSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Compensated sum of `values`.
pub fn sum(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().collect::<CompensatedSum>().total()
}

/// Compensated arithmetic mean of `values`, `0.0` for an empty sequence.
pub fn average(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().collect::<CompensatedSum>().mean()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compensates_decimal_rounding() {
        let prices = [0.1, 0.2, 0.3];

        assert_eq!(prices.iter().copied().sum::<f64>(), 0.6000000000000001);
        assert_eq!(sum(prices), 0.6);
        assert_eq!(average(prices), 0.19999999999999998);
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(sum(std::iter::empty()), 0.0);
        assert_eq!(average(std::iter::empty()), 0.0);
        assert_eq!(CompensatedSum::new().count(), 0);
    }

    #[test]
    fn infinite_values_fall_back_to_plain_sum() {
        assert_eq!(sum([1.0, f64::INFINITY, 2.0]), f64::INFINITY);
        assert!(sum([f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the average lies between the smallest and largest value.
        #[test]
        fn average_is_bounded_by_extremes(values in prop::collection::vec(0.0f64..10_000.0, 1..32)) {
            let avg = average(values.iter().copied());
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9, "{} not in [{}, {}]", avg, min, max);
        }

        /// Property: whole-cent amounts sum to the exact cent total.
        #[test]
        fn cent_amounts_sum_exactly(cents in prop::collection::vec(0u32..100_000, 0..64)) {
            let expected: u64 = cents.iter().map(|c| u64::from(*c)).sum();
            let total = sum(cents.iter().map(|c| f64::from(*c) / 100.0));

            prop_assert!((total - expected as f64 / 100.0).abs() < 1e-9);
        }
    }
}
