//! Machine learning utilities: fold splitting, metrics, model evaluation

pub mod cross_validation;
pub mod evaluate;
pub mod metrics;

pub use cross_validation::{CVScores, CVSplit, StratifiedKFold};
pub use evaluate::{
    compare_feature_sets, cross_val_auc, ComparisonReport, EvalConfig, EvalError,
};
pub use metrics::Metrics;
