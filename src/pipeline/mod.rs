mod parsing;

use std::fs;
use std::path::Path;

use failure::{bail, ResultExt};
use log::{debug, info};

use crate::classifier::LinearModel;
use crate::data::{Data, DataType, VectorData};
use crate::errors::*;
use crate::models::PipelineModel;
use crate::prediction::{predictions_above_uniform, softmax, PredictionMap};
use crate::transformation::Transformation;
use crate::utils::ClassName;

pub use self::parsing::{parse_pipeline, ParseStage};

/// A validated classification model: metadata, transformation chain and
/// linear classifier.
///
/// The transformation chain always turns a text into a vector whose dimension
/// is the one of the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineInfo {
    version: u16,
    timestamp: String,
    locale: String,
    transformations: Vec<Transformation>,
    classifier: LinearModel,
}

impl PipelineInfo {
    pub fn new(
        version: u16,
        timestamp: String,
        locale: String,
        transformations: Vec<Transformation>,
        classifier: LinearModel,
    ) -> Result<Self> {
        check_transformations(&transformations, classifier.dimension())?;
        Ok(Self {
            version,
            timestamp,
            locale,
            transformations,
            classifier,
        })
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn transformations(&self) -> &[Transformation] {
        &self.transformations
    }

    pub fn classifier(&self) -> &LinearModel {
        &self.classifier
    }

    pub fn to_model(&self) -> PipelineModel {
        parsing::pipeline_model(self)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_model())?)
    }
}

fn check_transformations(transformations: &[Transformation], dimension: usize) -> Result<()> {
    let mut data_type = DataType::Text;
    let mut features_dimension = None;
    for transformation in transformations {
        if transformation.input_type() != data_type {
            bail!(ClassifierError::InvalidTransformation(format!(
                "{:?} transformation expects {:?} data but receives {:?} data",
                transformation.transformation_type(),
                transformation.input_type(),
                data_type
            )));
        }
        if let Transformation::HashedNGrams(hashed_ngrams) = transformation {
            features_dimension = Some(hashed_ngrams.num_buckets());
        }
        data_type = transformation.output_type();
    }
    match features_dimension {
        Some(features_dimension) if data_type == DataType::Vector => {
            if features_dimension != dimension {
                bail!(ClassifierError::InvalidTransformation(format!(
                    "transformations produce {} features but the classifier expects {}",
                    features_dimension, dimension
                )));
            }
            Ok(())
        }
        _ => bail!(ClassifierError::InvalidTransformation(
            "transformations must turn the input text into a vector".to_string()
        )),
    }
}

/// Classifies texts with a [`PipelineInfo`]: the text goes through the
/// transformations in order, then through the linear model and softmax.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    info: PipelineInfo,
}

impl Pipeline {
    pub fn new(info: PipelineInfo) -> Self {
        Self { info }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let info = parse_pipeline(json)?;
        info!(
            "Pipeline loaded (version {}, locale '{}', {} classes)",
            info.version(),
            info.locale(),
            info.classifier().classes().len()
        );
        Ok(Self::new(info))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let pipeline_path = path.as_ref();
        info!("Loading pipeline ({:?}) ...", pipeline_path);
        let json = fs::read_to_string(pipeline_path).with_context(|_| {
            ClassifierError::ModelLoad(pipeline_path.display().to_string())
        })?;
        Self::from_json(&json)
    }
}

impl Pipeline {
    pub fn info(&self) -> &PipelineInfo {
        &self.info
    }

    pub fn version(&self) -> u16 {
        self.info.version()
    }

    pub fn timestamp(&self) -> &str {
        self.info.timestamp()
    }

    pub fn locale(&self) -> &str {
        self.info.locale()
    }

    /// Feature vector of `text`, i.e. the output of the transformation chain
    pub fn features(&self, text: &str) -> VectorData {
        let transformations = self.info.transformations();
        debug!("Applying {} transformations...", transformations.len());
        let output = transformations
            .iter()
            .fold(Data::from(text), |data, transformation| {
                transformation.apply(&data)
            });
        match output {
            Data::Vector(features) => features,
            Data::Text(_) => panic!("the transformation chain did not produce vector data"),
        }
    }

    /// Probability of every class of the model for `text`
    pub fn apply(&self, text: &str) -> PredictionMap {
        let features = self.features(text);
        softmax(&self.info.classifier().predict(&features))
    }

    /// The `k` most probable classes for `text`, best first
    pub fn top_predictions(&self, text: &str, k: usize) -> Vec<(ClassName, f64)> {
        let features = self.features(text);
        self.info.classifier().top_predictions(&features, Some(k))
    }

    /// Classes that are more probable than under a uniform distribution
    pub fn classify(&self, text: &str) -> PredictionMap {
        predictions_above_uniform(&self.apply(text))
    }
}
