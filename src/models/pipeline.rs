use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};

use crate::utils::ClassName;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PipelineModel {
    pub version: u16,
    pub timestamp: String,
    pub locale: String,
    pub transformations: Vec<TransformationModel>,
    pub classifier: ClassifierModel,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "transformation_type")]
pub enum TransformationModel {
    #[serde(rename = "TO_LOWER")]
    ToLower,
    #[serde(rename = "NORMALIZE")]
    Normalize,
    #[serde(rename = "HASHED_NGRAMS")]
    HashedNgrams { params: HashedNGramsParams },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HashedNGramsParams {
    pub num_buckets: usize,
    pub ngrams_range: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "classifier_type")]
pub enum ClassifierModel {
    #[serde(rename = "LINEAR")]
    Linear {
        classes: Vec<ClassName>,
        class_weights: HashMap<ClassName, Vec<f64>>,
        biases: Vec<f64>,
    },
}
