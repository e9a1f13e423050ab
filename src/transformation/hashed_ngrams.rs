use std::collections::BTreeMap;

use failure::bail;

use crate::data::VectorData;
use crate::errors::*;

pub const DEFAULT_NUM_BUCKETS: usize = 10_000;
pub const DEFAULT_MAX_NGRAM_SIZE: usize = 6;
/// Characters beyond this limit are ignored when hashing a text
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Feature hashing of character n-grams.
///
/// Every n-gram of every size listed in `ngram_range` is hashed with CRC-32
/// (IEEE polynomial, the zlib checksum) over its UTF-8 bytes, and the count
/// of the bucket `hash % num_buckets` is incremented. Trained weight vectors
/// depend on this exact assignment, so the hash function must never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedNGrams {
    num_buckets: usize,
    ngram_range: Vec<usize>,
}

impl HashedNGrams {
    pub fn new(num_buckets: usize, ngram_range: Vec<usize>) -> Result<Self> {
        if num_buckets == 0 {
            bail!(ClassifierError::InvalidTransformation(
                "hashed n-grams need at least one bucket".to_string()
            ));
        }
        if ngram_range.iter().any(|size| *size == 0) {
            bail!(ClassifierError::InvalidTransformation(
                "n-gram sizes must be positive".to_string()
            ));
        }
        Ok(Self {
            num_buckets,
            ngram_range,
        })
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    pub fn ngram_range(&self) -> &[usize] {
        &self.ngram_range
    }

    pub fn vectorize(&self, text: &str) -> VectorData {
        let chars: Vec<char> = text.chars().take(MAX_TEXT_LENGTH).collect();
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for &ngram_size in &self.ngram_range {
            if ngram_size > chars.len() {
                continue;
            }
            for window in chars.windows(ngram_size) {
                let ngram: String = window.iter().collect();
                *counts.entry(self.bucket(&ngram)).or_insert(0.) += 1.;
            }
        }
        VectorData::from_counts(self.num_buckets, counts)
    }

    fn bucket(&self, ngram: &str) -> usize {
        crc32fast::hash(ngram.as_bytes()) as usize % self.num_buckets
    }
}

impl Default for HashedNGrams {
    fn default() -> Self {
        Self {
            num_buckets: DEFAULT_NUM_BUCKETS,
            ngram_range: (1..=DEFAULT_MAX_NGRAM_SIZE).collect(),
        }
    }
}
