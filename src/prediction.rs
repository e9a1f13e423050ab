use std::cmp::Ordering;
use std::collections::HashMap;

use itertools::Itertools;

use crate::utils::ClassName;

/// Score of each class, either raw linear scores or probabilities
pub type PredictionMap = HashMap<ClassName, f64>;

/// Converts raw scores into a probability distribution.
///
/// The maximum score is subtracted before exponentiating so that large scores
/// cannot overflow; the result is invariant to adding a constant to every
/// score.
pub fn softmax(scores: &PredictionMap) -> PredictionMap {
    let maximum = scores.values().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exponentials: PredictionMap = scores
        .iter()
        .map(|(class, score)| (class.clone(), (score - maximum).exp()))
        .collect();
    let sum_exp: f64 = exponentials.values().sum();
    exponentials
        .into_iter()
        .map(|(class, value)| (class, value / sum_exp))
        .collect()
}

/// Sorts predictions by decreasing value. Ties are broken with the class name
/// so that the order never depends on the map's iteration order.
pub fn ranked_predictions(predictions: &PredictionMap) -> Vec<(ClassName, f64)> {
    predictions
        .iter()
        .map(|(class, value)| (class.clone(), *value))
        .sorted_by(compare_predictions)
        .collect()
}

/// Returns the `k` classes with the highest values, best first
pub fn top_predictions(predictions: &PredictionMap, k: usize) -> Vec<(ClassName, f64)> {
    ranked_predictions(predictions).into_iter().take(k).collect()
}

/// Keeps the classes whose probability is higher than the one of a uniform
/// distribution over all classes
pub fn predictions_above_uniform(probabilities: &PredictionMap) -> PredictionMap {
    let expected_probability = 1.0 / (probabilities.len().max(1) as f64);
    probabilities
        .iter()
        .filter(|(_, probability)| **probability > expected_probability)
        .map(|(class, probability)| (class.clone(), *probability))
        .collect()
}

fn compare_predictions(a: &(ClassName, f64), b: &(ClassName, f64)) -> Ordering {
    b.1.partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.0.cmp(&b.0))
}
