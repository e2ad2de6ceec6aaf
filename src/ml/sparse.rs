//! Sparse feature vectors.

use serde::{Deserialize, Serialize};

/// A sparse vector of `(feature index, value)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from pairs. Pairs are sorted and zero values dropped.
    pub fn from_pairs(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, v)| v != 0.0);
        entries.sort_by_key(|&(i, _)| i);
        Self { entries }
    }

    /// Non-zero entries in index order.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether every component is zero.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product with a dense weight vector. Indices past its end count as zero.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(i, v)| dense.get(i).map(|w| w * v))
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, v)| v * v).sum::<f64>().sqrt()
    }

    /// Scale to unit Euclidean norm. Empty vectors are left as-is.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, v) in &mut self.entries {
                *v /= norm;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_sorts_and_drops_zeros() {
        let v = SparseVector::from_pairs(vec![(3, 1.0), (1, 2.0), (2, 0.0)]);
        assert_eq!(v.entries(), &[(1, 2.0), (3, 1.0)]);
        assert_eq!(v.nnz(), 2);
    }

    #[test]
    fn test_dot_and_norm() {
        let mut v = SparseVector::from_pairs(vec![(0, 3.0), (2, 4.0)]);
        assert_eq!(v.dot(&[1.0, 10.0, 2.0]), 11.0);
        assert_eq!(v.dot(&[1.0]), 3.0);
        assert_eq!(v.norm(), 5.0);

        v.l2_normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_vector() {
        let mut v = SparseVector::default();
        v.l2_normalize();
        assert!(v.is_empty());
        assert_eq!(v.dot(&[1.0, 2.0]), 0.0);
    }
}
