use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::classifier::LinearModel;
use crate::data::VectorData;
use crate::errors::*;
use crate::models::{ClassifierModel, HashedNGramsParams, PipelineModel, TransformationModel};
use crate::transformation::{HashedNGrams, Transformation};

use super::PipelineInfo;

/// Progress of the model document deserializer. A rejected document reports
/// the last stage that was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    Start,
    VersionParsed,
    TimestampParsed,
    LocaleParsed,
    TransformationsParsed,
    ClassifierParsed,
    Done,
}

/// Parses a JSON model document.
///
/// Every field is mandatory and the whole document is rejected as soon as one
/// of them is missing or malformed, so that no partially built pipeline is
/// ever returned.
pub fn parse_pipeline(json: &str) -> Result<PipelineInfo> {
    let mut parser = PipelineParser::new(json)?;

    // any 32-bit integer is accepted and wrapped into the 16-bit range
    let version = parser.field::<i32>("version")? as u16;
    parser.advance(ParseStage::VersionParsed);

    let timestamp: String = parser.field("timestamp")?;
    parser.advance(ParseStage::TimestampParsed);

    let locale: String = parser.field("locale")?;
    parser.advance(ParseStage::LocaleParsed);

    let transformation_models: Vec<TransformationModel> = parser.field("transformations")?;
    let transformations = transformation_models
        .into_iter()
        .map(build_transformation)
        .collect::<Result<Vec<_>>>()
        .map_err(|e| parser.error(e.to_string()))?;
    parser.advance(ParseStage::TransformationsParsed);

    let classifier_model: ClassifierModel = parser.field("classifier")?;
    let classifier = build_classifier(classifier_model).map_err(|e| parser.error(e.to_string()))?;
    parser.advance(ParseStage::ClassifierParsed);

    let pipeline_info = PipelineInfo::new(version, timestamp, locale, transformations, classifier)
        .map_err(|e| parser.error(e.to_string()))?;
    parser.advance(ParseStage::Done);
    Ok(pipeline_info)
}

struct PipelineParser {
    stage: ParseStage,
    root: Map<String, Value>,
}

impl PipelineParser {
    fn new(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json).map_err(|e| ClassifierError::InvalidModel {
            stage: ParseStage::Start,
            reason: format!("malformed json: {}", e),
        })?;
        match root {
            Value::Object(root) => Ok(Self {
                stage: ParseStage::Start,
                root,
            }),
            _ => Err(ClassifierError::InvalidModel {
                stage: ParseStage::Start,
                reason: "the model document must be a json object".to_string(),
            }
            .into()),
        }
    }

    fn field<T: DeserializeOwned>(&mut self, key: &str) -> Result<T> {
        let value = self
            .root
            .remove(key)
            .ok_or_else(|| self.error(format!("missing field '{}'", key)))?;
        serde_json::from_value(value)
            .map_err(|e| self.error(format!("invalid field '{}': {}", key, e)))
    }

    fn advance(&mut self, stage: ParseStage) {
        self.stage = stage;
    }

    fn error(&self, reason: String) -> ::failure::Error {
        ClassifierError::InvalidModel {
            stage: self.stage,
            reason,
        }
        .into()
    }
}

fn build_transformation(model: TransformationModel) -> Result<Transformation> {
    Ok(match model {
        TransformationModel::ToLower => Transformation::Lowercase,
        TransformationModel::Normalize => Transformation::Normalization,
        TransformationModel::HashedNgrams { params } => Transformation::HashedNGrams(
            HashedNGrams::new(params.num_buckets, params.ngrams_range)?,
        ),
    })
}

fn build_classifier(model: ClassifierModel) -> Result<LinearModel> {
    match model {
        ClassifierModel::Linear {
            classes,
            mut class_weights,
            biases,
        } => {
            let weights = classes
                .iter()
                .map(|class| {
                    class_weights
                        .remove(class)
                        .map(VectorData::from_dense)
                        .ok_or_else(|| {
                            ClassifierError::InvalidClassifier(format!(
                                "no weights for class '{}'",
                                class
                            ))
                        })
                })
                .collect::<::std::result::Result<Vec<_>, _>>()?;
            LinearModel::from_classes(classes, weights, biases)
        }
    }
}

pub(crate) fn pipeline_model(pipeline_info: &PipelineInfo) -> PipelineModel {
    PipelineModel {
        version: pipeline_info.version(),
        timestamp: pipeline_info.timestamp().to_string(),
        locale: pipeline_info.locale().to_string(),
        transformations: pipeline_info
            .transformations()
            .iter()
            .map(transformation_model)
            .collect(),
        classifier: classifier_model(pipeline_info.classifier()),
    }
}

fn transformation_model(transformation: &Transformation) -> TransformationModel {
    match transformation {
        Transformation::Lowercase => TransformationModel::ToLower,
        Transformation::Normalization => TransformationModel::Normalize,
        Transformation::HashedNGrams(hashed_ngrams) => TransformationModel::HashedNgrams {
            params: HashedNGramsParams {
                num_buckets: hashed_ngrams.num_buckets(),
                ngrams_range: hashed_ngrams.ngram_range().to_vec(),
            },
        },
    }
}

fn classifier_model(classifier: &LinearModel) -> ClassifierModel {
    let classes = classifier.classes().to_vec();
    let class_weights = classes
        .iter()
        .filter_map(|class| {
            classifier
                .weights(class)
                .map(|weights| (class.clone(), weights.to_dense()))
        })
        .collect();
    let biases = classes
        .iter()
        .filter_map(|class| classifier.bias(class))
        .collect();
    ClassifierModel::Linear {
        classes,
        class_weights,
        biases,
    }
}
