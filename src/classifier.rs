use std::collections::{HashMap, HashSet};

use failure::bail;
use log::debug;

use crate::data::VectorData;
use crate::errors::*;
use crate::prediction::{ranked_predictions, softmax, PredictionMap};
use crate::utils::{first_duplicate, ClassName};

/// Linear classifier: the raw score of a class is the dot product of its
/// weight vector with the features, plus its bias.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    classes: Vec<ClassName>,
    weights: HashMap<ClassName, VectorData>,
    biases: HashMap<ClassName, f64>,
    dimension: usize,
}

impl LinearModel {
    /// Builds a model from per-class weights and biases. Classes are ordered by
    /// name.
    pub fn new(
        weights: HashMap<ClassName, VectorData>,
        biases: HashMap<ClassName, f64>,
    ) -> Result<Self> {
        let mut classes: Vec<ClassName> = weights.keys().cloned().collect();
        classes.sort();
        Self::validated(classes, weights, biases)
    }

    /// Builds a model from positionally aligned classes, weight vectors and
    /// biases, keeping the order of `classes`
    pub fn from_classes(
        classes: Vec<ClassName>,
        weights: Vec<VectorData>,
        biases: Vec<f64>,
    ) -> Result<Self> {
        if weights.len() != classes.len() || biases.len() != classes.len() {
            bail!(ClassifierError::InvalidClassifier(format!(
                "found {} classes, {} weight vectors and {} biases",
                classes.len(),
                weights.len(),
                biases.len()
            )));
        }
        if let Some(class) = first_duplicate(&classes) {
            bail!(ClassifierError::InvalidClassifier(format!(
                "duplicated class '{}'",
                class
            )));
        }
        let weights_map = classes.iter().cloned().zip(weights).collect();
        let biases_map = classes.iter().cloned().zip(biases).collect();
        Self::validated(classes, weights_map, biases_map)
    }

    fn validated(
        classes: Vec<ClassName>,
        weights: HashMap<ClassName, VectorData>,
        biases: HashMap<ClassName, f64>,
    ) -> Result<Self> {
        if classes.is_empty() {
            bail!(ClassifierError::InvalidClassifier(
                "the model has no class".to_string()
            ));
        }
        let weights_classes: HashSet<&ClassName> = weights.keys().collect();
        let biases_classes: HashSet<&ClassName> = biases.keys().collect();
        if weights_classes != biases_classes {
            bail!(ClassifierError::InvalidClassifier(
                "weights and biases are not defined for the same classes".to_string()
            ));
        }
        let dimension = weights[&classes[0]].dimension();
        if let Some((class, vector)) = weights.iter().find(|(_, v)| v.dimension() != dimension) {
            bail!(ClassifierError::InvalidClassifier(format!(
                "weights of class '{}' have dimension {} instead of {}",
                class,
                vector.dimension(),
                dimension
            )));
        }
        Ok(Self {
            classes,
            weights,
            biases,
            dimension,
        })
    }

    pub fn classes(&self) -> &[ClassName] {
        &self.classes
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn weights(&self, class: &str) -> Option<&VectorData> {
        self.weights.get(class)
    }

    pub fn bias(&self, class: &str) -> Option<f64> {
        self.biases.get(class).cloned()
    }

    /// Raw score of every class.
    ///
    /// Panics if `features` does not have the model's dimension.
    pub fn predict(&self, features: &VectorData) -> PredictionMap {
        assert_eq!(
            self.dimension,
            features.dimension(),
            "features dimension does not match the linear model"
        );
        self.classes
            .iter()
            .map(|class| {
                let score = self.weights[class].dot(features) + self.biases[class];
                (class.clone(), score)
            })
            .collect()
    }

    /// Class probabilities sorted by decreasing value, truncated to
    /// `top_count` classes when provided
    pub fn top_predictions(
        &self,
        features: &VectorData,
        top_count: Option<usize>,
    ) -> Vec<(ClassName, f64)> {
        let probabilities = softmax(&self.predict(features));
        let ranked = ranked_predictions(&probabilities);
        if let Some((best_class, probability)) = ranked.first() {
            debug!("Best class: '{}' ({})", best_class, probability);
        }
        match top_count {
            Some(count) => ranked.into_iter().take(count).collect(),
            None => ranked,
        }
    }
}
