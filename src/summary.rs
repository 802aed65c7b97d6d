use crate::Float;
use std::fmt::{Display, Formatter};

/// Count, sum, min and max of a run of floats, gathered in one pass.
///
/// An empty summary has `min = +inf`, `max = -inf` and a NaN average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DoubleSummary {
    count: usize,
    sum: Float,
    min: Float,
    max: Float,
}

impl Default for DoubleSummary {
    fn default() -> Self {
        DoubleSummary { count: 0, sum: 0.0, min: Float::INFINITY, max: Float::NEG_INFINITY }
    }
}

impl DoubleSummary {
    pub(crate) fn accept(&mut self, value: Float) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn sum(&self) -> Float {
        self.sum
    }

    pub(crate) fn min(&self) -> Float {
        self.min
    }

    pub(crate) fn max(&self) -> Float {
        self.max
    }

    /// NaN when nothing was accepted.
    pub(crate) fn average(&self) -> Float {
        if self.count == 0 { Float::NAN } else { self.sum / self.count as Float }
    }
}

impl Display for DoubleSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DoubleSummary{{count={}, sum={:.6}, min={:.6}, average={:.6}, max={:.6}}}",
            self.count(),
            self.sum(),
            self.min(),
            self.average(),
            self.max()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept() {
        let mut summary = DoubleSummary::default();
        for rating in [4.3, 5.0, 5.0, 4.0, 0.0] {
            summary.accept(rating);
        }
        assert_eq!(summary.count(), 5);
        assert!((summary.sum() - 18.3).abs() < 1e-9);
        assert_eq!(summary.min(), 0.0);
        assert_eq!(summary.max(), 5.0);
        assert!((summary.average() - 3.66).abs() < 1e-9);
    }

    #[test]
    fn test_empty() {
        let summary = DoubleSummary::default();
        assert_eq!(summary.count(), 0);
        assert_eq!(summary.sum(), 0.0);
        assert_eq!(summary.min(), Float::INFINITY);
        assert_eq!(summary.max(), Float::NEG_INFINITY);
        assert!(summary.average().is_nan());
    }

    #[test]
    fn test_display() {
        let mut summary = DoubleSummary::default();
        summary.accept(1.0);
        summary.accept(2.0);
        assert_eq!(
            summary.to_string(),
            "DoubleSummary{count=2, sum=3.000000, min=1.000000, average=1.500000, max=2.000000}"
        );
    }
}
