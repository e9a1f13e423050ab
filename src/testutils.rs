use std::path::{Path, PathBuf};

use crate::prediction::PredictionMap;

pub fn file_path(filename: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(filename)
}

pub fn epsilon_eq(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = a - b;
    diff < epsilon && diff > -epsilon
}

pub fn assert_epsilon_eq_predictions(a: &PredictionMap, b: &PredictionMap, epsilon: f64) {
    assert_eq!(a.len(), b.len());
    for (class, value_a) in a {
        let value_b = b
            .get(class)
            .unwrap_or_else(|| panic!("class '{}' is missing", class));
        assert!(
            epsilon_eq(*value_a, *value_b, epsilon),
            "{} != {} for class '{}'",
            value_a,
            value_b,
            class
        )
    }
}
