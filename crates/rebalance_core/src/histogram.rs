use serde::{Deserialize, Serialize};

/// Equal-width histogram over a fixed display range.
///
/// Values outside `[min, max]` are not binned; they are counted in
/// `clipped` so the chart can say how many outliers it hides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
    pub clipped: usize,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins over `[min, max]`.
    ///
    /// The last bin is closed on the right so `max` itself is counted.
    #[must_use]
    pub fn new(values: &[f64], bins: usize, min: f64, max: f64) -> Self {
        let mut counts = vec![0usize; bins];
        let mut clipped = 0;
        let width = (max - min) / bins as f64;

        for &v in values {
            if bins == 0 || !(min..=max).contains(&v) {
                clipped += 1;
                continue;
            }
            let bin = (((v - min) / width).floor() as usize).min(bins - 1);
            counts[bin] += 1;
        }

        Self {
            min,
            max,
            counts,
            clipped,
        }
    }

    #[must_use]
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// Lower edge of bin `i`
    #[must_use]
    pub fn bin_start(&self, i: usize) -> f64 {
        self.min + i as f64 * self.bin_width()
    }

    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Index of the bin containing `value`, if it is in range
    #[must_use]
    pub fn bin_of(&self, value: f64) -> Option<usize> {
        if self.counts.is_empty() || !(self.min..=self.max).contains(&value) {
            return None;
        }
        let bin = ((value - self.min) / self.bin_width()).floor() as usize;
        Some(bin.min(self.counts.len() - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binning_and_clipping() {
        let values = [0.0, 10.0, 49.0, 50.0, 99.0, 100.0, 150.0, -1.0];
        let hist = Histogram::new(&values, 2, 0.0, 100.0);

        assert_eq!(hist.counts, vec![3, 3]);
        assert_eq!(hist.clipped, 2);
        assert_eq!(hist.counts.iter().sum::<usize>() + hist.clipped, values.len());
        assert_eq!(hist.max_count(), 3);
    }

    #[test]
    fn test_bin_geometry() {
        let hist = Histogram::new(&[], 50, 0.0, 250_000.0);

        assert_eq!(hist.bin_width(), 5_000.0);
        assert_eq!(hist.bin_start(2), 10_000.0);
        assert_eq!(hist.bin_of(10_000.0), Some(2));
        assert_eq!(hist.bin_of(250_000.0), Some(49));
        assert_eq!(hist.bin_of(300_000.0), None);
    }
}
