//! Cross-validation utilities
//!
//! Stratified k-fold splitting with seeded shuffling, plus score summaries.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Cross-validation split
#[derive(Debug, Clone)]
pub struct CVSplit {
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

/// Stratified k-fold splitter.
///
/// Shuffles sample indices within each class with a seeded RNG and deals them
/// across folds, so class proportions are preserved per fold (up to one
/// sample per class) and repeated runs produce identical splits.
#[derive(Debug, Clone, Copy)]
pub struct StratifiedKFold {
    n_folds: usize,
    seed: u64,
}

impl StratifiedKFold {
    pub fn new(n_folds: usize, seed: u64) -> Self {
        assert!(n_folds > 1, "n_folds must be > 1");
        Self { n_folds, seed }
    }

    /// Build splits for the given target vector.
    pub fn split(&self, y: &Array1<f64>) -> Vec<CVSplit> {
        let n_samples = y.len();
        assert!(
            n_samples >= self.n_folds,
            "n_samples must be >= n_folds"
        );

        let mut rng = StdRng::seed_from_u64(self.seed);

        // Group sample indices by class label, classes in first-seen order.
        let mut classes: Vec<f64> = Vec::new();
        let mut by_class: Vec<Vec<usize>> = Vec::new();
        for (idx, &label) in y.iter().enumerate() {
            match classes.iter().position(|&c| c == label) {
                Some(pos) => by_class[pos].push(idx),
                None => {
                    classes.push(label);
                    by_class.push(vec![idx]);
                }
            }
        }

        // Deal each class's shuffled indices across folds round-robin.
        let mut folds: Vec<Vec<usize>> = vec![Vec::new(); self.n_folds];
        for indices in &mut by_class {
            indices.shuffle(&mut rng);
            for (offset, &idx) in indices.iter().enumerate() {
                folds[offset % self.n_folds].push(idx);
            }
        }

        (0..self.n_folds)
            .map(|i| {
                let test_indices = folds[i].clone();
                let train_indices = folds
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .flat_map(|(_, fold)| fold.iter().copied())
                    .collect();

                CVSplit {
                    train_indices,
                    test_indices,
                }
            })
            .collect()
    }
}

/// Summary statistics for cross-validation scores
#[derive(Debug, Clone)]
pub struct CVScores {
    pub scores: Vec<f64>,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl CVScores {
    /// Calculate summary statistics from scores
    pub fn from_scores(scores: Vec<f64>) -> Self {
        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Self {
            scores,
            mean,
            std,
            min,
            max,
        }
    }

    /// Print a summary of the scores
    pub fn summary(&self) -> String {
        format!(
            "mean={:.4} (+/- {:.4}), min={:.4}, max={:.4}",
            self.mean,
            self.std * 2.0,
            self.min,
            self.max
        )
    }
}
