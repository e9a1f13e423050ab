use failure::Fail;

use crate::pipeline::ParseStage;

#[derive(Debug, Fail)]
pub enum ClassifierError {
    #[fail(display = "Unable to read pipeline file '{}'", _0)]
    ModelLoad(String),
    #[fail(display = "Invalid pipeline model after stage {:?}: {}", stage, reason)]
    InvalidModel { stage: ParseStage, reason: String },
    #[fail(display = "Invalid transformation: {}", _0)]
    InvalidTransformation(String),
    #[fail(display = "Invalid linear model: {}", _0)]
    InvalidClassifier(String),
    #[fail(display = "Invalid vector data: {}", _0)]
    InvalidVector(String),
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
