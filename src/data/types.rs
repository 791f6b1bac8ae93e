//! Core dataset types
//!
//! A `Dataset` pairs a feature matrix with its aligned binary target vector,
//! keeping column names around for reporting.

use super::error::DataResult;
use super::loader::DataTable;
use ndarray::{Array1, Array2};

/// Feature matrix X and target vector y for one model
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature matrix (n_samples x n_features)
    pub x: Array2<f64>,
    /// Target vector (n_samples)
    pub y: Array1<f64>,
    /// Feature names
    pub feature_names: Vec<String>,
    /// Target name
    pub target_name: String,
}

impl Dataset {
    /// Create a new dataset
    pub fn new(
        x: Array2<f64>,
        y: Array1<f64>,
        feature_names: Vec<String>,
        target_name: String,
    ) -> Self {
        assert_eq!(x.nrows(), y.len(), "X rows must match y length");
        Self {
            x,
            y,
            feature_names,
            target_name,
        }
    }

    /// Project a feature column list and the target column out of a table.
    pub fn from_table(
        table: &DataTable,
        feature_names: &[String],
        target: &str,
    ) -> DataResult<Self> {
        let x = table.select(feature_names)?;
        let y = table.column(target)?;
        Ok(Self::new(x, y, feature_names.to_vec(), target.to_owned()))
    }

    /// Get number of samples
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// Get number of features
    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dataset_shape() {
        let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let y = array![0.0, 1.0, 0.0];
        let dataset = Dataset::new(
            x,
            y,
            vec!["f1".to_owned(), "f2".to_owned()],
            "target".to_owned(),
        );

        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_from_table_aligns_target() {
        let table = DataTable::new(
            vec!["a".to_owned(), "b".to_owned(), "target".to_owned()],
            vec![vec![1.0, 2.0, 0.0], vec![3.0, 4.0, 1.0]],
        );

        let dataset = Dataset::from_table(&table, &["b".to_owned()], "target").unwrap();
        assert_eq!(dataset.n_features(), 1);
        assert_eq!(dataset.x[[1, 0]], 4.0);
        assert_eq!(dataset.y[1], 1.0);
        assert_eq!(dataset.target_name, "target");
    }
}
