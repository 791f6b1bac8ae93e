//! Cross-validated comparison of the two feature subsets.
//!
//! Each fold trains a fresh classifier and scores ROC-AUC on the held-out
//! rows. Folds are independent and run in parallel; per-fold RNG seeds are
//! derived from the run seed and the fold index, so the reported scores do
//! not depend on scheduling order.

use crate::data::{DataError, DataTable, Dataset};
use crate::features::{FeatureSelector, TARGET_COLUMN};
use crate::ml::cross_validation::{CVScores, CVSplit, StratifiedKFold};
use crate::ml::metrics::Metrics;
use crate::nn::NeuralNetwork;
use ndarray::{Array1, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Hidden layer widths of the evaluated classifier.
pub const HIDDEN_LAYERS: [usize; 3] = [30, 30, 30];

const EPOCHS: usize = 200;
const BATCH_SIZE: usize = 200;

/// Errors raised during a cross-validated evaluation
#[derive(Error, Debug)]
pub enum EvalError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("the {0} selector matched no columns")]
    EmptySubset(&'static str),

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("fold {fold} produced a non-finite score")]
    FoldFailed { fold: usize },
}

/// Cross-validation settings for one evaluation run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvalConfig {
    pub folds: usize,
    pub seed: u64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { folds: 5, seed: 42 }
    }
}

/// Mean-AUC comparison of the systemic model against the baseline model
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub baseline: CVScores,
    pub systemic: CVScores,
}

impl ComparisonReport {
    /// Systemic mean AUC divided by baseline mean AUC.
    pub fn ratio(&self) -> f64 {
        self.systemic.mean / self.baseline.mean
    }

    /// The single reported line, ratio rounded to two decimals.
    pub fn summary_line(&self) -> String {
        format!("Systemic/baseline ROC-AUC ratio: {:.2}", self.ratio())
    }
}

/// Cross-validated mean ROC-AUC of the classifier on one feature subset.
pub fn cross_val_auc(dataset: &Dataset, config: &EvalConfig) -> Result<CVScores, EvalError> {
    if dataset.n_samples() == 0 {
        return Err(EvalError::EmptyDataset);
    }

    let splits = StratifiedKFold::new(config.folds, config.seed).split(&dataset.y);

    let scores = splits
        .par_iter()
        .enumerate()
        .map(|(fold, split)| {
            let auc = score_fold(dataset, split, fold_seed(config.seed, fold));
            if auc.is_finite() {
                Ok(auc)
            } else {
                Err(EvalError::FoldFailed { fold })
            }
        })
        .collect::<Result<Vec<f64>, EvalError>>()?;

    Ok(CVScores::from_scores(scores))
}

/// Evaluate both canonical feature subsets over the same table.
pub fn compare_feature_sets(
    table: &DataTable,
    config: &EvalConfig,
) -> Result<ComparisonReport, EvalError> {
    let baseline = evaluate_subset(table, &FeatureSelector::baseline(), config)?;
    let systemic = evaluate_subset(table, &FeatureSelector::systemic(), config)?;

    Ok(ComparisonReport { baseline, systemic })
}

fn evaluate_subset(
    table: &DataTable,
    selector: &FeatureSelector,
    config: &EvalConfig,
) -> Result<CVScores, EvalError> {
    let columns = selector.select(table.column_names(), TARGET_COLUMN);
    if columns.is_empty() {
        return Err(EvalError::EmptySubset(selector.label()));
    }

    let dataset = Dataset::from_table(table, &columns, TARGET_COLUMN)?;
    info!(
        "evaluating {} model: {} features, {} samples",
        selector.label(),
        dataset.n_features(),
        dataset.n_samples()
    );

    let scores = cross_val_auc(&dataset, config)?;
    info!("{} model: {}", selector.label(), scores.summary());
    Ok(scores)
}

fn fold_seed(seed: u64, fold: usize) -> u64 {
    seed.wrapping_add(fold as u64 + 1)
}

fn score_fold(dataset: &Dataset, split: &CVSplit, seed: u64) -> f64 {
    let x_train = dataset.x.select(Axis(0), &split.train_indices);
    let y_train =
        Array1::from_iter(split.train_indices.iter().map(|&i| dataset.y[i]));
    let x_test = dataset.x.select(Axis(0), &split.test_indices);
    let y_test = Array1::from_iter(split.test_indices.iter().map(|&i| dataset.y[i]));

    let mut network =
        NeuralNetwork::binary_classification(dataset.n_features(), &HIDDEN_LAYERS, seed);

    let targets = y_train.insert_axis(Axis(1));
    network.train(&x_train, &targets, EPOCHS, BATCH_SIZE);

    let proba = network.predict_proba(&x_test);
    if proba.iter().any(|p| !p.is_finite()) {
        return f64::NAN;
    }

    let auc = Metrics::roc_auc(&y_test, &proba);
    debug!(
        auc,
        accuracy = Metrics::accuracy(&y_test, &proba),
        "fold evaluated"
    );
    auc
}
