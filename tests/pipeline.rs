//! End-to-end pipeline tests: CSV on disk to the reported AUC ratio.

use ml_conflict::data::DataTable;
use ml_conflict::ml::{compare_feature_sets, EvalConfig};
use std::io::Write;
use tempfile::NamedTempFile;

/// Balanced 10-row dyad-year table where both feature subsets separate the
/// classes, plus one incomplete row that the missing-value filter removes.
fn sample_csv() -> String {
    let mut csv = String::from(
        "year,cinc_1,cinc_2,democ_1,democ_2,alliance_1_2,distance_1_2,contiguity_1_2,mid_1_2,\
         activated_cinc_max,activated_cinc_min,activated_alliance,activated_distance,\
         activated_contiguity,activated_mid_force\n",
    );

    for i in 0..10 {
        let label = (i % 2) as f64;
        // Dispute rows sit high on every predictor, peaceful rows low, with
        // small per-row offsets so cells are not constant within a class.
        let base = if label > 0.5 { 0.9 } else { 0.1 };
        let jitter = 0.02 * (i / 2) as f64;
        let value = base + jitter;
        let distance = 1.0 - value;

        csv.push_str(&format!(
            "{year},{v},{v},{v},{v},{v},{d},{v},{v},{v},{v},{v},{d},{v},{label}\n",
            year = 1900 + i,
            v = value,
            d = distance,
            label = label,
        ));
    }

    // Incomplete observation, dropped before modeling.
    csv.push_str("1910,0.5,NA,0.5,0.5,0.5,0.5,0.5,0.5,0.5,0.5,0.5,0.5,0.5,0.0\n");

    csv
}

fn write_sample() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(sample_csv().as_bytes()).unwrap();
    file
}

#[test]
fn evaluate_pipeline_end_to_end() {
    let file = write_sample();

    let table = DataTable::from_csv(file.path()).unwrap();
    assert_eq!(table.n_rows(), 11);
    assert!(table.has_missing());

    let table = table.drop_missing();
    assert_eq!(table.n_rows(), 10);
    assert!(!table.has_missing());

    let config = EvalConfig { folds: 5, seed: 42 };
    let report = compare_feature_sets(&table, &config).unwrap();

    assert_eq!(report.baseline.scores.len(), 5);
    assert_eq!(report.systemic.scores.len(), 5);
    assert!(report.baseline.mean >= 0.0 && report.baseline.mean <= 1.0);
    assert!(report.systemic.mean >= 0.0 && report.systemic.mean <= 1.0);

    let ratio = report.ratio();
    assert!(ratio.is_finite());
    assert!(ratio > 0.0);

    // The reported line carries the ratio with exactly two decimal digits.
    let line = report.summary_line();
    let printed = line.rsplit(' ').next().unwrap();
    let (_, decimals) = printed.split_once('.').unwrap();
    assert_eq!(decimals.len(), 2);
    assert_eq!(printed, format!("{ratio:.2}"));
}

#[test]
fn pipeline_is_reproducible() {
    let file = write_sample();
    let config = EvalConfig { folds: 5, seed: 42 };

    let first_table = DataTable::from_csv(file.path()).unwrap().drop_missing();
    let first = compare_feature_sets(&first_table, &config).unwrap();

    let second_table = DataTable::from_csv(file.path()).unwrap().drop_missing();
    let second = compare_feature_sets(&second_table, &config).unwrap();

    assert_eq!(first.baseline.scores, second.baseline.scores);
    assert_eq!(first.systemic.scores, second.systemic.scores);
    assert_eq!(first.summary_line(), second.summary_line());
}

#[test]
fn different_seeds_may_change_scores_but_not_validity() {
    let file = write_sample();
    let table = DataTable::from_csv(file.path()).unwrap().drop_missing();

    for seed in [1, 7, 42] {
        let config = EvalConfig { folds: 5, seed };
        let report = compare_feature_sets(&table, &config).unwrap();
        assert!(report.baseline.mean >= 0.0 && report.baseline.mean <= 1.0);
        assert!(report.systemic.mean >= 0.0 && report.systemic.mean <= 1.0);
        assert!(report.ratio().is_finite());
    }
}
