//! Pixel-index permutations.
//!
//! Simulators order register amplitudes by qubit significance, which need
//! not match the caller's row-major pixel layout. A [`PixelOrder`] makes
//! that mapping explicit and checked instead of an inline index shuffle.

use crate::error::{TypesError, TypesResult};

/// A validated bijection on `0..len`.
///
/// `map(i)` gives the source index read for output position `i` when the
/// permutation is applied to a vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelOrder {
    map: Vec<usize>,
}

impl PixelOrder {
    /// Build from an explicit mapping, rejecting anything that is not a
    /// permutation of `0..map.len()`.
    pub fn new(map: Vec<usize>) -> TypesResult<Self> {
        let len = map.len();
        let mut seen = vec![false; len];
        for &target in &map {
            if target >= len || seen[target] {
                return Err(TypesError::NotAPermutation { order: map, len });
            }
            seen[target] = true;
        }
        Ok(Self { map })
    }

    /// The identity ordering on `0..len`.
    pub fn identity(len: usize) -> Self {
        Self {
            map: (0..len).collect(),
        }
    }

    /// Domain size.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True for the empty permutation.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The source index read for output position `i`.
    pub fn map(&self, i: usize) -> usize {
        self.map[i]
    }

    /// The underlying mapping.
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    /// The inverse permutation.
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.map.len()];
        for (i, &target) in self.map.iter().enumerate() {
            inv[target] = i;
        }
        Self { map: inv }
    }

    /// Apply to a vector: `out[i] = v[map(i)]`.
    ///
    /// # Panics
    ///
    /// Panics if `v.len()` differs from the permutation's domain size.
    pub fn apply<T: Clone>(&self, v: &[T]) -> Vec<T> {
        assert_eq!(v.len(), self.map.len(), "length mismatch applying pixel order");
        self.map.iter().map(|&src| v[src].clone()).collect()
    }
}
