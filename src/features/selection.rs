//! Keyword-based feature subset selection.
//!
//! Columns join a subset when their name contains at least one keyword as a
//! case-sensitive substring, in original column order. Substring matching is
//! deliberately loose and can over-select (a keyword like `distance` also
//! hits `activated_distance`), which is why the systemic selector carries an
//! exclusion keyword to keep only raw per-state and per-dyad columns.

/// Column holding the binary force-use dispute indicator for the active dyad.
pub const TARGET_COLUMN: &str = "activated_mid_force";

/// Keywords matching the active-dyad aggregate columns.
pub const BASELINE_KEYWORDS: &[&str] = &["activated"];

/// Keywords matching the raw per-state and per-dyad columns.
pub const SYSTEMIC_KEYWORDS: &[&str] =
    &["cinc", "democ", "alliance", "distance", "contiguity", "mid"];

/// Columns whose name contains at least one keyword, in original order.
pub fn matching_columns(names: &[String], keywords: &[&str]) -> Vec<String> {
    names
        .iter()
        .filter(|name| keywords.iter().any(|kw| name.contains(kw)))
        .cloned()
        .collect()
}

/// Keyword selector defining one model's feature subset.
#[derive(Debug, Clone)]
pub struct FeatureSelector {
    label: &'static str,
    keywords: Vec<&'static str>,
    exclude: Option<&'static str>,
}

impl FeatureSelector {
    /// Create a selector over the given keywords.
    pub fn new(label: &'static str, keywords: &[&'static str]) -> Self {
        Self {
            label,
            keywords: keywords.to_vec(),
            exclude: None,
        }
    }

    /// Disqualify columns whose name contains the given keyword.
    pub fn with_exclusion(mut self, keyword: &'static str) -> Self {
        self.exclude = Some(keyword);
        self
    }

    /// Baseline model: active-dyad aggregate columns only.
    pub fn baseline() -> Self {
        Self::new("baseline", BASELINE_KEYWORDS)
    }

    /// Systemic model: raw columns for every tracked state and dyad.
    pub fn systemic() -> Self {
        Self::new("systemic", SYSTEMIC_KEYWORDS).with_exclusion("activated")
    }

    /// Human-readable subset label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Select matching column names, preserving original order.
    ///
    /// The target column is never a candidate.
    pub fn select(&self, names: &[String], target: &str) -> Vec<String> {
        names
            .iter()
            .filter(|name| name.as_str() != target)
            .filter(|name| self.exclude.is_none_or(|kw| !name.contains(kw)))
            .filter(|name| self.keywords.iter().any(|kw| name.contains(kw)))
            .cloned()
            .collect()
    }
}
