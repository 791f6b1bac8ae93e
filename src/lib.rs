//! # ML Conflict - Systemic Features and Interstate Conflict Prediction
//!
//! This library evaluates whether features describing the whole international
//! system predict militarized interstate disputes better than features
//! describing only the active dyad. It covers the workflow steps:
//!
//! - Loading directed-dyad-year tables from CSV
//! - Keyword-based feature subset selection
//! - Stratified cross-validation with seeded shuffling
//! - A feedforward network classifier with reproducible training
//! - ROC-AUC scoring and model comparison

pub mod data;
pub mod features;
pub mod ml;
pub mod nn;

pub use data::{DataTable, Dataset};
pub use features::{FeatureSelector, TARGET_COLUMN};
pub use ml::{compare_feature_sets, ComparisonReport, EvalConfig, Metrics, StratifiedKFold};
pub use nn::NeuralNetwork;
