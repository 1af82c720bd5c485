//! Finite posets over an index arena.
//!
//! Elements live in a contiguous arena and are addressed by [`ElementId`].
//! The order is stored as a dense reflexive-transitive relation matrix and
//! the Hasse diagram as upper/lower cover adjacency lists, so every
//! comparison is a table lookup and no element holds references to another.

use crate::error::OrderError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque index of an element inside one poset arena.
///
/// Ids are only meaningful for the poset that issued them; use
/// [`FinitePoset::coerce_id`] to validate an id of unknown origin.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(usize);

impl ElementId {
    /// Position of this element in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finite partially ordered set with its Hasse diagram.
#[derive(Debug, Clone)]
pub struct FinitePoset<T> {
    elements: Vec<T>,
    index: BTreeMap<T, ElementId>,
    /// Row-major `n * n` matrix: `leq[a * n + b]` iff `a <= b`.
    leq: Vec<bool>,
    upper_covers: Vec<Vec<ElementId>>,
    lower_covers: Vec<Vec<ElementId>>,
}

impl<T: Ord + Clone + fmt::Debug> FinitePoset<T> {
    /// Build a poset as the reflexive-transitive closure of `relations`.
    ///
    /// Each pair `(a, b)` asserts `a <= b`; cover relations are enough, but
    /// any generating set of comparisons is accepted.
    pub fn from_relations<I>(elements: Vec<T>, relations: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let index = build_index(&elements)?;
        let n = elements.len();
        let mut leq = identity_matrix(n);

        for (a, b) in relations {
            let i = lookup(&index, &a)?;
            let j = lookup(&index, &b)?;
            leq[i.0 * n + j.0] = true;
        }

        // Warshall closure.
        for k in 0..n {
            for i in 0..n {
                if !leq[i * n + k] {
                    continue;
                }
                for j in 0..n {
                    if leq[k * n + j] {
                        leq[i * n + j] = true;
                    }
                }
            }
        }

        check_antisymmetric(&elements, &leq)?;
        Ok(Self::from_matrix(elements, index, leq))
    }

    /// Build a poset from an order predicate evaluated on every pair.
    ///
    /// Reflexivity is imposed; antisymmetry and transitivity are verified.
    pub fn from_order<F>(elements: Vec<T>, leq_fn: F) -> Result<Self, OrderError>
    where
        F: Fn(&T, &T) -> bool,
    {
        let index = build_index(&elements)?;
        let n = elements.len();
        let mut leq = identity_matrix(n);

        for i in 0..n {
            for j in 0..n {
                if i != j && leq_fn(&elements[i], &elements[j]) {
                    leq[i * n + j] = true;
                }
            }
        }

        check_antisymmetric(&elements, &leq)?;
        for i in 0..n {
            for k in 0..n {
                if !leq[i * n + k] {
                    continue;
                }
                for j in 0..n {
                    if leq[k * n + j] && !leq[i * n + j] {
                        return Err(OrderError::NotTransitive {
                            lower: describe(&elements[i]),
                            middle: describe(&elements[k]),
                            upper: describe(&elements[j]),
                        });
                    }
                }
            }
        }

        Ok(Self::from_matrix(elements, index, leq))
    }

    fn from_matrix(elements: Vec<T>, index: BTreeMap<T, ElementId>, leq: Vec<bool>) -> Self {
        let n = elements.len();
        let mut upper_covers = vec![Vec::new(); n];
        let mut lower_covers = vec![Vec::new(); n];

        for lo in 0..n {
            for hi in 0..n {
                if lo == hi || !leq[lo * n + hi] {
                    continue;
                }
                let skipped = (0..n)
                    .any(|mid| mid != lo && mid != hi && leq[lo * n + mid] && leq[mid * n + hi]);
                if !skipped {
                    upper_covers[lo].push(ElementId(hi));
                    lower_covers[hi].push(ElementId(lo));
                }
            }
        }

        Self {
            elements,
            index,
            leq,
            upper_covers,
            lower_covers,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the poset has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element labels in arena order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// All element ids in arena order.
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + use<T> {
        (0..self.elements.len()).map(ElementId)
    }

    /// The label stored for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this poset.
    pub fn label(&self, id: ElementId) -> &T {
        &self.elements[id.0]
    }

    /// Debug rendering of the label of `id`, used in error messages.
    pub fn describe(&self, id: ElementId) -> String {
        match self.elements.get(id.0) {
            Some(label) => describe(label),
            None => id.to_string(),
        }
    }

    /// Normalize an external value into an element of this poset.
    pub fn coerce(&self, value: &T) -> Result<ElementId, OrderError> {
        lookup(&self.index, value)
    }

    /// Check that `id` addresses an element of this poset.
    pub fn coerce_id(&self, id: ElementId) -> Result<ElementId, OrderError> {
        if id.0 < self.elements.len() {
            Ok(id)
        } else {
            Err(OrderError::NotAnElement(id.to_string()))
        }
    }

    /// `a <= b`.
    pub fn is_lequal(&self, a: ElementId, b: ElementId) -> bool {
        self.leq[a.0 * self.elements.len() + b.0]
    }

    /// `a >= b`.
    pub fn is_gequal(&self, a: ElementId, b: ElementId) -> bool {
        self.is_lequal(b, a)
    }

    /// `a < b`.
    pub fn is_less(&self, a: ElementId, b: ElementId) -> bool {
        a != b && self.is_lequal(a, b)
    }

    /// Elements covering `x` in the Hasse diagram.
    pub fn upper_covers(&self, x: ElementId) -> &[ElementId] {
        &self.upper_covers[x.0]
    }

    /// Elements covered by `x` in the Hasse diagram.
    pub fn lower_covers(&self, x: ElementId) -> &[ElementId] {
        &self.lower_covers[x.0]
    }

    /// Every covering relation `(lower, upper)` of the Hasse diagram.
    pub fn cover_relations(&self) -> Vec<(ElementId, ElementId)> {
        self.upper_covers
            .iter()
            .enumerate()
            .flat_map(|(lo, uppers)| uppers.iter().map(move |&hi| (ElementId(lo), hi)))
            .collect()
    }

    /// Elements `x` with `lower <= x <= upper`.
    pub fn closed_interval(&self, lower: ElementId, upper: ElementId) -> Vec<ElementId> {
        self.element_ids()
            .filter(|&x| self.is_lequal(lower, x) && self.is_lequal(x, upper))
            .collect()
    }

    /// Minimal elements of `subset`.
    pub fn minimal_of(&self, subset: &[ElementId]) -> Vec<ElementId> {
        subset
            .iter()
            .copied()
            .filter(|&v| !subset.iter().any(|&w| self.is_less(w, v)))
            .collect()
    }

    /// Maximal elements of `subset`.
    pub fn maximal_of(&self, subset: &[ElementId]) -> Vec<ElementId> {
        subset
            .iter()
            .copied()
            .filter(|&v| !subset.iter().any(|&w| self.is_less(v, w)))
            .collect()
    }

    /// Elements with no lower cover.
    pub fn minimal_elements(&self) -> Vec<ElementId> {
        self.element_ids()
            .filter(|&x| self.lower_covers(x).is_empty())
            .collect()
    }

    /// Elements with no upper cover.
    pub fn maximal_elements(&self) -> Vec<ElementId> {
        self.element_ids()
            .filter(|&x| self.upper_covers(x).is_empty())
            .collect()
    }
}

pub(crate) fn describe<T: fmt::Debug>(value: &T) -> String {
    format!("{value:?}")
}

fn identity_matrix(n: usize) -> Vec<bool> {
    let mut leq = vec![false; n * n];
    for i in 0..n {
        leq[i * n + i] = true;
    }
    leq
}

fn build_index<T: Ord + Clone + fmt::Debug>(
    elements: &[T],
) -> Result<BTreeMap<T, ElementId>, OrderError> {
    let mut index = BTreeMap::new();
    for (i, element) in elements.iter().enumerate() {
        if index.insert(element.clone(), ElementId(i)).is_some() {
            return Err(OrderError::DuplicateElement(describe(element)));
        }
    }
    Ok(index)
}

fn lookup<T: Ord + fmt::Debug>(
    index: &BTreeMap<T, ElementId>,
    value: &T,
) -> Result<ElementId, OrderError> {
    index
        .get(value)
        .copied()
        .ok_or_else(|| OrderError::NotAnElement(describe(value)))
}

fn check_antisymmetric<T: fmt::Debug>(elements: &[T], leq: &[bool]) -> Result<(), OrderError> {
    let n = elements.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if leq[i * n + j] && leq[j * n + i] {
                return Err(OrderError::NotAntisymmetric {
                    left: describe(&elements[i]),
                    right: describe(&elements[j]),
                });
            }
        }
    }
    Ok(())
}
