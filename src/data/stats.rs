use serde::Serialize;

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation (divides by N, not N − 1). NaN for an empty slice.
pub fn std_dev(xs: &[f64]) -> f64 {
    let m = mean(xs);
    let sq: f64 = xs.iter().map(|&x| (x - m).powi(2)).sum();
    (sq / xs.len() as f64).sqrt()
}

/// Pearson correlation coefficient of two equally long series.
///
/// Returns NaN when either series has zero variance (including empty input).
/// A constant series has no defined correlation, and callers display the NaN
/// as-is rather than treating it as an error.
pub fn correlation(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len(), "correlation needs equal-length series");
    let mx = mean(xs);
    let my = mean(ys);

    let mut cov = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    cov / (sxx * syy).sqrt()
}

// ---------------------------------------------------------------------------
// SummaryStats – headline numbers for the current batch
// ---------------------------------------------------------------------------

/// Mean / std-dev of the sales totals and their correlation with temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub std_dev: f64,
    pub correlation: f64,
    pub count: usize,
}

impl SummaryStats {
    pub fn from_columns(totals: &[f64], temperatures: &[f64]) -> Self {
        Self {
            mean: mean(totals),
            std_dev: std_dev(totals),
            correlation: correlation(totals, temperatures),
            count: totals.len(),
        }
    }

    pub fn mean_label(&self) -> String {
        format!("{:.2}", self.mean)
    }

    pub fn std_dev_label(&self) -> String {
        format!("{:.2}", self.std_dev)
    }

    pub fn correlation_label(&self) -> String {
        format!("{:.3}", self.correlation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn mean_of_single_value_is_that_value() {
        for x in [0.0, -3.5, 1e9, 42.25] {
            assert_eq!(mean(&[x]), x);
        }
    }

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(std_dev(&[]).is_nan());
    }

    #[test]
    fn std_dev_is_population_form() {
        // Population std of 2,4,4,4,5,5,7,9 is exactly 2.
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&xs) - 2.0).abs() < EPS);
    }

    #[test]
    fn std_dev_of_constant_is_zero() {
        assert_eq!(std_dev(&[3.25; 10]), 0.0);
    }

    #[test]
    fn series_correlates_perfectly_with_itself() {
        let xs = [1.0, 5.0, 2.0, 8.0, 3.0];
        assert!((correlation(&xs, &xs) - 1.0).abs() < EPS);
    }

    #[test]
    fn reversed_series_is_anticorrelated() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [8.0, 6.0, 4.0, 2.0];
        assert!((correlation(&xs, &ys) + 1.0).abs() < EPS);
    }

    #[test]
    fn constant_series_has_nan_correlation() {
        let flat = [4.0; 5];
        let other = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(correlation(&flat, &other).is_nan());
        assert!(correlation(&other, &flat).is_nan());
    }

    #[test]
    fn summary_labels_round_for_display() {
        let stats = SummaryStats {
            mean: 240.456,
            std_dev: 12.0,
            correlation: -0.12345,
            count: 50,
        };
        assert_eq!(stats.mean_label(), "240.46");
        assert_eq!(stats.std_dev_label(), "12.00");
        assert_eq!(stats.correlation_label(), "-0.123");
    }
}
