//! Feature vector type
//!
//! An ordered mapping of named numeric features. The order is dictated by
//! the feature-name artifact the model was fitted with, never assumed
//! positionally by callers.

use serde::{Deserialize, Serialize};

/// Ordered named feature values.
///
/// `names` and `values` are parallel; index i of one corresponds to index i
/// of the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build from parallel name/value pairs.
    pub fn from_pairs(pairs: Vec<(String, f64)>) -> Self {
        let (names, values) = pairs.into_iter().unzip();
        Self { names, values }
    }

    /// Build from already-separated parallel vectors.
    ///
    /// # Panics
    /// Panics if the vectors differ in length.
    pub fn new(names: Vec<String>, values: Vec<f64>) -> Self {
        assert_eq!(names.len(), values.len(), "names/values length mismatch");
        Self { names, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Look up a feature value by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    /// Iterate (name, value) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Replace the values, keeping the names and order.
    ///
    /// Used by the scaler, which transforms values without touching the
    /// schema.
    ///
    /// # Panics
    /// Panics if the replacement length differs.
    pub fn with_values(&self, values: Vec<f64>) -> Self {
        assert_eq!(self.names.len(), values.len(), "names/values length mismatch");
        Self {
            names: self.names.clone(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_vector() -> FeatureVector {
        FeatureVector::from_pairs(vec![
            ("Age".to_string(), 40.0),
            ("Balance".to_string(), 50_000.0),
            ("Gender_Male".to_string(), 1.0),
        ])
    }

    #[test]
    fn test_from_pairs_preserves_order() {
        let fv = make_vector();
        assert_eq!(fv.names(), &["Age", "Balance", "Gender_Male"]);
        assert_eq!(fv.values(), &[40.0, 50_000.0, 1.0]);
    }

    #[test]
    fn test_get_by_name() {
        let fv = make_vector();
        assert_eq!(fv.get("Balance"), Some(50_000.0));
        assert_eq!(fv.get("Tenure"), None);
    }

    #[test]
    fn test_with_values_keeps_names() {
        let fv = make_vector();
        let scaled = fv.with_values(vec![0.1, 0.2, 0.3]);
        assert_eq!(scaled.names(), fv.names());
        assert_eq!(scaled.values(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_with_values_length_mismatch_panics() {
        make_vector().with_values(vec![1.0]);
    }

    #[test]
    fn test_iter_pairs() {
        let fv = make_vector();
        let pairs: Vec<_> = fv.iter().collect();
        assert_eq!(pairs[0], ("Age", 40.0));
        assert_eq!(pairs.len(), 3);
    }
}
