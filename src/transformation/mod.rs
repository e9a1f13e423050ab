mod hashed_ngrams;

use crate::data::{Data, DataType};

pub use self::hashed_ngrams::{
    HashedNGrams, DEFAULT_MAX_NGRAM_SIZE, DEFAULT_NUM_BUCKETS, MAX_TEXT_LENGTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformationType {
    Lowercase,
    Normalization,
    HashedNGrams,
}

/// A single step of a pipeline's transformation chain.
///
/// The set of transformations is closed: cloning produces an independent
/// value with the same variant and parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    Lowercase,
    Normalization,
    HashedNGrams(HashedNGrams),
}

impl Transformation {
    pub fn transformation_type(&self) -> TransformationType {
        match self {
            Transformation::Lowercase => TransformationType::Lowercase,
            Transformation::Normalization => TransformationType::Normalization,
            Transformation::HashedNGrams(_) => TransformationType::HashedNGrams,
        }
    }

    pub fn input_type(&self) -> DataType {
        match self {
            Transformation::Lowercase | Transformation::HashedNGrams(_) => DataType::Text,
            Transformation::Normalization => DataType::Vector,
        }
    }

    pub fn output_type(&self) -> DataType {
        match self {
            Transformation::Lowercase => DataType::Text,
            Transformation::Normalization | Transformation::HashedNGrams(_) => DataType::Vector,
        }
    }

    /// Applies the transformation to `input`.
    ///
    /// Panics if `input` is not of the transformation's input type: pipelines
    /// check the types of their chain when they are built, so a mismatch here
    /// is a bug in the caller.
    pub fn apply(&self, input: &Data) -> Data {
        match (self, input) {
            (Transformation::Lowercase, Data::Text(text)) => Data::Text(text.to_lowercase()),
            (Transformation::Normalization, Data::Vector(vector)) => {
                Data::Vector(vector.normalize())
            }
            (Transformation::HashedNGrams(hashed_ngrams), Data::Text(text)) => {
                Data::Vector(hashed_ngrams.vectorize(text))
            }
            (transformation, input) => panic!(
                "{:?} transformation cannot be applied to {:?} data",
                transformation.transformation_type(),
                input.data_type()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VectorData;

    #[test]
    fn lowercase_works() {
        // Given
        let input = Data::from("Hëllo WÖRLD, Straße");

        // When
        let output = Transformation::Lowercase.apply(&input);

        // Then
        assert_eq!(Data::from("hëllo wörld, straße"), output);
    }

    #[test]
    #[should_panic]
    fn lowercase_panics_on_vector_input() {
        let input = Data::Vector(VectorData::from_dense(vec![1.0]));
        Transformation::Lowercase.apply(&input);
    }

    #[test]
    fn normalization_works() {
        // Given
        let input = Data::Vector(VectorData::from_dense(vec![0.0, 3.0, 4.0]));

        // When
        let output = Transformation::Normalization.apply(&input);

        // Then
        assert_eq!(
            Data::Vector(VectorData::from_dense(vec![0.0, 0.6, 0.8])),
            output
        );
    }

    #[test]
    #[should_panic]
    fn normalization_panics_on_text_input() {
        Transformation::Normalization.apply(&Data::from("some text"));
    }

    #[test]
    fn hashed_ngrams_works() {
        // Given
        let transformation =
            Transformation::HashedNGrams(HashedNGrams::new(3, vec![1, 2, 3]).unwrap());

        // When
        let output = transformation.apply(&Data::from("test string"));

        // Then
        match output {
            Data::Vector(vector) => assert_eq!(vec![14.0, 9.0, 7.0], vector.to_dense()),
            Data::Text(_) => panic!("expected vector data"),
        }
    }

    #[test]
    fn transformation_types_are_consistent() {
        let transformations = vec![
            Transformation::Lowercase,
            Transformation::Normalization,
            Transformation::HashedNGrams(HashedNGrams::default()),
        ];
        let types: Vec<_> = transformations
            .iter()
            .map(|t| (t.transformation_type(), t.input_type(), t.output_type()))
            .collect();
        assert_eq!(
            vec![
                (TransformationType::Lowercase, DataType::Text, DataType::Text),
                (TransformationType::Normalization, DataType::Vector, DataType::Vector),
                (TransformationType::HashedNGrams, DataType::Text, DataType::Vector),
            ],
            types
        );
    }

    #[test]
    fn clone_preserves_variant_and_parameters() {
        // Given
        let hashed_ngrams =
            Transformation::HashedNGrams(HashedNGrams::new(3, vec![1, 2, 3]).unwrap());

        // When
        let copy = hashed_ngrams.clone();

        // Then
        assert_eq!(TransformationType::HashedNGrams, copy.transformation_type());
        match copy {
            Transformation::HashedNGrams(params) => {
                assert_eq!(3, params.num_buckets());
                assert_eq!(&[1, 2, 3], params.ngram_range());
            }
            _ => panic!("expected hashed n-grams"),
        }
        assert_eq!(
            TransformationType::Normalization,
            Transformation::Normalization.clone().transformation_type()
        );
    }

    #[test]
    fn cloned_sequence_is_independent() {
        // Given
        let mut transformations = vec![
            Transformation::HashedNGrams(HashedNGrams::default()),
            Transformation::Normalization,
        ];

        // When
        let copy = transformations.clone();
        transformations[0] = Transformation::Lowercase;
        transformations.pop();

        // Then
        assert_eq!(2, copy.len());
        assert_eq!(TransformationType::HashedNGrams, copy[0].transformation_type());
        assert_eq!(TransformationType::Normalization, copy[1].transformation_type());
        assert_eq!(Transformation::HashedNGrams(HashedNGrams::default()), copy[0]);
    }
}
