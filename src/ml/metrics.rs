//! Evaluation metrics for binary classifiers

use ndarray::Array1;

/// Metrics calculator
pub struct Metrics;

impl Metrics {
    /// Fraction of predictions on the correct side of 0.5.
    pub fn accuracy(y_true: &Array1<f64>, y_proba: &Array1<f64>) -> f64 {
        assert_eq!(y_true.len(), y_proba.len(), "Arrays must have same length");

        if y_true.is_empty() {
            return 0.0;
        }

        let correct = y_true
            .iter()
            .zip(y_proba.iter())
            .filter(|(t, p)| (**t >= 0.5) == (**p >= 0.5))
            .count();

        correct as f64 / y_true.len() as f64
    }

    /// Area under the ROC curve for probability scores.
    ///
    /// Tied scores are grouped so the curve cuts diagonally through ties.
    /// Returns 0.5 when only one class is present.
    pub fn roc_auc(y_true: &Array1<f64>, y_proba: &Array1<f64>) -> f64 {
        assert_eq!(y_true.len(), y_proba.len(), "Arrays must have same length");

        let n = y_true.len();

        let mut pairs: Vec<(f64, bool)> = y_proba
            .iter()
            .zip(y_true.iter())
            .map(|(&p, &t)| (p, t >= 0.5))
            .collect();

        // Sort by score descending
        pairs.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let n_pos = pairs.iter().filter(|(_, t)| *t).count() as f64;
        let n_neg = pairs.iter().filter(|(_, t)| !*t).count() as f64;

        if n_pos < 1e-10 || n_neg < 1e-10 {
            return 0.5;
        }

        let mut tpr_prev = 0.0;
        let mut fpr_prev = 0.0;
        let mut auc = 0.0;
        let mut tp = 0.0;
        let mut fp = 0.0;

        let mut i = 0;
        while i < n {
            // Advance over all points sharing this score; the first point is
            // always consumed so non-comparable scores cannot stall the scan
            let score = pairs[i].0;
            let mut j = i;
            while j < n && (j == i || (pairs[j].0 - score).abs() < 1e-10) {
                if pairs[j].1 {
                    tp += 1.0;
                } else {
                    fp += 1.0;
                }
                j += 1;
            }

            let tpr = tp / n_pos;
            let fpr = fp / n_neg;

            // Trapezoid area
            auc += (fpr - fpr_prev) * (tpr + tpr_prev) / 2.0;

            tpr_prev = tpr;
            fpr_prev = fpr;
            i = j;
        }

        auc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_accuracy() {
        let y_true = array![0.0, 1.0, 1.0, 0.0, 1.0];
        let y_proba = array![0.1, 0.9, 0.2, 0.3, 0.8];

        let acc = Metrics::accuracy(&y_true, &y_proba);
        assert_relative_eq!(acc, 0.8, epsilon = 1e-10);
    }

    #[test]
    fn test_auc_perfect_ranking() {
        let y_true = array![1.0, 1.0, 0.0, 0.0];
        let y_proba = array![0.9, 0.8, 0.2, 0.1];
        assert_relative_eq!(Metrics::roc_auc(&y_true, &y_proba), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_auc_reversed_ranking() {
        let y_true = array![1.0, 1.0, 0.0, 0.0];
        let y_proba = array![0.1, 0.2, 0.8, 0.9];
        assert_relative_eq!(Metrics::roc_auc(&y_true, &y_proba), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_auc_random_ranking_is_half() {
        let y_true = array![1.0, 0.0, 1.0, 0.0];
        let y_proba = array![0.5, 0.5, 0.5, 0.5];
        assert_relative_eq!(Metrics::roc_auc(&y_true, &y_proba), 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_auc_single_class_defaults_to_half() {
        let y_true = array![1.0, 1.0, 1.0];
        let y_proba = array![0.2, 0.5, 0.9];
        assert_relative_eq!(Metrics::roc_auc(&y_true, &y_proba), 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_auc_is_bounded() {
        let y_true = array![1.0, 0.0, 1.0, 0.0, 1.0, 0.0];
        let y_proba = array![0.7, 0.6, 0.3, 0.4, 0.9, 0.1];
        let auc = Metrics::roc_auc(&y_true, &y_proba);
        assert!((0.0..=1.0).contains(&auc));
    }
}
