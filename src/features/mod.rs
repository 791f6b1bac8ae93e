//! Feature subset definitions

pub mod selection;

pub use selection::{matching_columns, FeatureSelector, TARGET_COLUMN};
