//! Simplicial complexes given by a list of facets.
//!
//! Facets are stored as given: exact duplicates collapse, but a facet
//! contained in another facet is kept (no maximality pruning).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An abstract simplicial complex presented by facets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplicialComplex<V: Ord> {
    facets: Vec<BTreeSet<V>>,
}

impl<V: Ord + Clone> SimplicialComplex<V> {
    /// Build a complex from facets, in canonical (sorted) order.
    pub fn from_facets<I, F>(facets: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: IntoIterator<Item = V>,
    {
        let facets: BTreeSet<BTreeSet<V>> = facets
            .into_iter()
            .map(|facet| facet.into_iter().collect())
            .collect();
        Self {
            facets: facets.into_iter().collect(),
        }
    }

    /// The facets as given.
    pub fn facets(&self) -> &[BTreeSet<V>] {
        &self.facets
    }

    /// Union of all facets.
    pub fn vertices(&self) -> BTreeSet<V> {
        self.facets.iter().flatten().cloned().collect()
    }

    /// Largest facet size minus one; `None` when there is no non-empty facet.
    pub fn dimension(&self) -> Option<usize> {
        self.facets
            .iter()
            .map(BTreeSet::len)
            .max()
            .filter(|&size| size > 0)
            .map(|size| size - 1)
    }

    /// Whether every facet has the same size.
    pub fn is_pure(&self) -> bool {
        let mut sizes = self.facets.iter().map(BTreeSet::len);
        match sizes.next() {
            Some(first) => sizes.all(|size| size == first),
            None => true,
        }
    }

    /// Whether `face` is contained in some facet.
    pub fn contains_face(&self, face: &BTreeSet<V>) -> bool {
        self.facets.iter().any(|facet| face.is_subset(facet))
    }

    /// Every face, including the empty face when there is at least one facet.
    ///
    /// A facet with `k` vertices contributes `2^k` subsets.
    pub fn faces(&self) -> BTreeSet<BTreeSet<V>> {
        let mut faces = BTreeSet::new();
        for facet in &self.facets {
            let mut subsets = vec![BTreeSet::new()];
            for vertex in facet {
                let grown: Vec<BTreeSet<V>> = subsets
                    .iter()
                    .map(|subset| {
                        let mut subset = subset.clone();
                        subset.insert(vertex.clone());
                        subset
                    })
                    .collect();
                subsets.extend(grown);
            }
            faces.extend(subsets);
        }
        faces
    }

    /// `f[k]` counts faces with `k` vertices (so `f[0]` is the empty face).
    pub fn f_vector(&self) -> Vec<usize> {
        let faces = self.faces();
        let width = faces.iter().map(BTreeSet::len).max().map_or(0, |m| m + 1);
        let mut counts = vec![0; width];
        for face in &faces {
            counts[face.len()] += 1;
        }
        counts
    }
}
