use std::collections::BTreeMap;

use failure::bail;

use crate::errors::*;

/// Sparse vector of `f64` values with a fixed dimension.
///
/// Indices that are not stored have an implicit value of `0.0`. Every stored
/// index is strictly lower than the dimension.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorData {
    dimension: usize,
    entries: BTreeMap<usize, f64>,
}

impl VectorData {
    pub fn from_sparse(dimension: usize, entries: BTreeMap<usize, f64>) -> Result<Self> {
        if let Some((&max_index, _)) = entries.iter().next_back() {
            if max_index >= dimension {
                bail!(ClassifierError::InvalidVector(format!(
                    "index {} is out of bounds for dimension {}",
                    max_index, dimension
                )));
            }
        }
        Ok(Self {
            dimension,
            entries,
        })
    }

    pub fn from_dense(values: Vec<f64>) -> Self {
        let dimension = values.len();
        let entries = values.into_iter().enumerate().collect();
        Self {
            dimension,
            entries,
        }
    }

    /// Builds a vector from bucket counts that are already known to fit in
    /// `dimension`.
    pub(crate) fn from_counts(dimension: usize, entries: BTreeMap<usize, f64>) -> Self {
        debug_assert!(entries.keys().all(|index| *index < dimension));
        Self {
            dimension,
            entries,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries.get(&index).cloned().unwrap_or(0.0)
    }

    /// Stored entries, in increasing index order
    pub fn entries(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|(index, value)| (*index, *value))
    }

    pub fn nb_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn to_dense(&self) -> Vec<f64> {
        (0..self.dimension).map(|index| self.get(index)).collect()
    }

    pub fn dot(&self, other: &VectorData) -> f64 {
        assert_eq!(
            self.dimension, other.dimension,
            "cannot compute dot product of vectors with different dimensions"
        );
        let (smaller, larger) = if self.entries.len() <= other.entries.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller
            .entries
            .iter()
            .filter_map(|(index, value)| larger.entries.get(index).map(|other| value * other))
            .sum()
    }

    pub fn l2_norm(&self) -> f64 {
        self.entries
            .values()
            .fold(0., |norm, v| norm + v * v)
            .sqrt()
    }

    /// Returns a copy of the vector scaled to unit L2 norm. A zero vector is
    /// returned unchanged.
    pub fn normalize(&self) -> VectorData {
        let l2_norm = self.l2_norm();
        let safe_l2_norm = if l2_norm > 0. { l2_norm } else { 1. };
        let entries = self
            .entries
            .iter()
            .map(|(index, value)| (*index, value / safe_l2_norm))
            .collect();
        VectorData {
            dimension: self.dimension,
            entries,
        }
    }
}

impl From<Vec<f64>> for VectorData {
    fn from(values: Vec<f64>) -> Self {
        Self::from_dense(values)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::testutils::epsilon_eq;

    fn sparse(dimension: usize, entries: &[(usize, f64)]) -> VectorData {
        VectorData::from_sparse(dimension, entries.iter().cloned().collect()).unwrap()
    }

    #[test]
    fn from_dense_populates_every_index() {
        // When
        let vector = VectorData::from_dense(vec![1.0, 0.0, 3.5]);

        // Then
        assert_eq!(3, vector.dimension());
        assert_eq!(3, vector.nb_entries());
        assert_eq!(vec![1.0, 0.0, 3.5], vector.to_dense());
    }

    #[test]
    fn from_sparse_rejects_out_of_bounds_index() {
        // Given
        let mut entries = BTreeMap::new();
        entries.insert(1, 2.0);
        entries.insert(4, 1.0);

        // When
        let result = VectorData::from_sparse(4, entries);

        // Then
        assert!(result.is_err());
    }

    #[test]
    fn missing_entries_are_zero() {
        // Given
        let vector = sparse(10, &[(2, 1.5), (7, -2.0)]);

        // Then
        assert_eq!(0.0, vector.get(0));
        assert_eq!(1.5, vector.get(2));
        assert_eq!(-2.0, vector.get(7));
        assert_eq!(vec![(2, 1.5), (7, -2.0)], vector.entries().collect::<Vec<_>>());
    }

    #[test]
    fn dot_works_on_sparse_and_dense_vectors() {
        // Given
        let dense = VectorData::from_dense(vec![1.0, 2.0, 3.0, 4.0]);
        let sparse_vector = sparse(4, &[(1, 0.5), (3, 2.0)]);

        // When
        let product = dense.dot(&sparse_vector);
        let reversed_product = sparse_vector.dot(&dense);

        // Then
        assert_eq!(9.0, product);
        assert_eq!(product, reversed_product);
    }

    #[test]
    #[should_panic]
    fn dot_panics_on_dimension_mismatch() {
        let a = VectorData::from_dense(vec![1.0, 2.0]);
        let b = VectorData::from_dense(vec![1.0, 2.0, 3.0]);
        a.dot(&b);
    }

    #[test]
    fn normalize_works() {
        // Given
        let vector = sparse(5, &[(0, 3.0), (4, 4.0)]);

        // When
        let normalized = vector.normalize();

        // Then
        assert_eq!(5, normalized.dimension());
        assert!(epsilon_eq(0.6, normalized.get(0), 1e-12));
        assert!(epsilon_eq(0.8, normalized.get(4), 1e-12));
        assert!(epsilon_eq(1.0, normalized.l2_norm(), 1e-12));
        // the input is left untouched
        assert_eq!(3.0, vector.get(0));
    }

    #[test]
    fn normalize_leaves_zero_vector_unchanged() {
        // Given
        let empty = sparse(3, &[]);
        let zeros = VectorData::from_dense(vec![0.0, 0.0]);

        // Then
        assert_eq!(empty, empty.normalize());
        assert_eq!(zeros, zeros.normalize());
    }
}
