mod classifier;
pub mod data;
pub mod errors;
pub mod models;
mod pipeline;
mod prediction;
#[cfg(test)]
mod testutils;
mod transformation;
mod utils;

pub use crate::classifier::LinearModel;
pub use crate::data::{Data, DataType, VectorData};
pub use crate::errors::*;
pub use crate::pipeline::{parse_pipeline, ParseStage, Pipeline, PipelineInfo};
pub use crate::prediction::{
    predictions_above_uniform, ranked_predictions, softmax, top_predictions, PredictionMap,
};
pub use crate::transformation::{
    HashedNGrams, Transformation, TransformationType, DEFAULT_MAX_NGRAM_SIZE,
    DEFAULT_NUM_BUCKETS, MAX_TEXT_LENGTH,
};
pub use crate::utils::ClassName;
