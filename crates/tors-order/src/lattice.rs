//! Finite lattices: join/meet tables over a poset arena.
//!
//! On top of [`FinitePoset`] this provides the lattice primitives the
//! torsion-class layer consumes: bottom/top, binary and n-ary join and
//! meet, join-/meet-irreducibles, canonical join and meet representations,
//! and semidistributivity.

use crate::error::OrderError;
use crate::poset::{ElementId, FinitePoset};
use std::fmt;
use std::ops::Deref;

/// A finite lattice with precomputed join and meet tables.
///
/// Dereferences to the underlying [`FinitePoset`] for order queries.
#[derive(Debug, Clone)]
pub struct FiniteLattice<T> {
    poset: FinitePoset<T>,
    /// Row-major `n * n` join table.
    joins: Vec<ElementId>,
    /// Row-major `n * n` meet table.
    meets: Vec<ElementId>,
    bottom: ElementId,
    top: ElementId,
}

impl<T> Deref for FiniteLattice<T> {
    type Target = FinitePoset<T>;

    fn deref(&self) -> &Self::Target {
        &self.poset
    }
}

impl<T: Ord + Clone + fmt::Debug> FiniteLattice<T> {
    /// Promote a poset to a lattice, computing every join and meet.
    ///
    /// Fails with [`OrderError::NotALattice`] on the first pair lacking a
    /// least upper bound or a greatest lower bound.
    pub fn from_poset(poset: FinitePoset<T>) -> Result<Self, OrderError> {
        if poset.is_empty() {
            return Err(OrderError::Empty);
        }

        let n = poset.len();
        let ids: Vec<ElementId> = poset.element_ids().collect();
        // Sizes of principal down-sets and up-sets. If x < y then
        // down(x) is strictly smaller than down(y), so the least upper
        // bound (when it exists) is the bound with the smallest down-set.
        let down: Vec<usize> = ids
            .iter()
            .map(|&x| ids.iter().filter(|&&y| poset.is_lequal(y, x)).count())
            .collect();
        let up: Vec<usize> = ids
            .iter()
            .map(|&x| ids.iter().filter(|&&y| poset.is_lequal(x, y)).count())
            .collect();

        let mut joins = vec![ids[0]; n * n];
        let mut meets = vec![ids[0]; n * n];

        for &a in &ids {
            for &b in &ids[a.index()..] {
                let join = least_bound(
                    &ids,
                    &down,
                    |c| poset.is_lequal(a, c) && poset.is_lequal(b, c),
                    |c, d| poset.is_lequal(c, d),
                )
                .ok_or_else(|| not_a_lattice(&poset, a, b, "join"))?;
                joins[a.index() * n + b.index()] = join;
                joins[b.index() * n + a.index()] = join;

                let meet = least_bound(
                    &ids,
                    &up,
                    |c| poset.is_lequal(c, a) && poset.is_lequal(c, b),
                    |c, d| poset.is_gequal(c, d),
                )
                .ok_or_else(|| not_a_lattice(&poset, a, b, "meet"))?;
                meets[a.index() * n + b.index()] = meet;
                meets[b.index() * n + a.index()] = meet;
            }
        }

        let bottom = ids
            .iter()
            .copied()
            .fold(ids[0], |acc, x| meets[acc.index() * n + x.index()]);
        let top = ids
            .iter()
            .copied()
            .fold(ids[0], |acc, x| joins[acc.index() * n + x.index()]);

        tracing::debug!(
            elements = n,
            covers = poset.cover_relations().len(),
            "built finite lattice"
        );

        Ok(Self {
            poset,
            joins,
            meets,
            bottom,
            top,
        })
    }

    /// Build a lattice from generating relations, see [`FinitePoset::from_relations`].
    pub fn from_relations<I>(elements: Vec<T>, relations: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self::from_poset(FinitePoset::from_relations(elements, relations)?)
    }

    /// Build a lattice from an order predicate, see [`FinitePoset::from_order`].
    pub fn from_order<F>(elements: Vec<T>, leq: F) -> Result<Self, OrderError>
    where
        F: Fn(&T, &T) -> bool,
    {
        Self::from_poset(FinitePoset::from_order(elements, leq)?)
    }

    /// The underlying poset.
    pub fn poset(&self) -> &FinitePoset<T> {
        &self.poset
    }

    /// The least element.
    pub fn bottom(&self) -> ElementId {
        self.bottom
    }

    /// The greatest element.
    pub fn top(&self) -> ElementId {
        self.top
    }

    /// `a ∨ b`.
    pub fn join(&self, a: ElementId, b: ElementId) -> ElementId {
        self.joins[a.index() * self.len() + b.index()]
    }

    /// `a ∧ b`.
    pub fn meet(&self, a: ElementId, b: ElementId) -> ElementId {
        self.meets[a.index() * self.len() + b.index()]
    }

    /// Join of a family; the empty join is the bottom.
    pub fn join_all<I>(&self, elements: I) -> ElementId
    where
        I: IntoIterator<Item = ElementId>,
    {
        elements
            .into_iter()
            .fold(self.bottom, |acc, x| self.join(acc, x))
    }

    /// Meet of a family; the empty meet is the top.
    pub fn meet_all<I>(&self, elements: I) -> ElementId
    where
        I: IntoIterator<Item = ElementId>,
    {
        elements.into_iter().fold(self.top, |acc, x| self.meet(acc, x))
    }

    /// Whether `x` has exactly one lower cover.
    pub fn is_join_irreducible(&self, x: ElementId) -> bool {
        self.lower_covers(x).len() == 1
    }

    /// Whether `x` has exactly one upper cover.
    pub fn is_meet_irreducible(&self, x: ElementId) -> bool {
        self.upper_covers(x).len() == 1
    }

    /// All join-irreducible elements in arena order.
    pub fn join_irreducibles(&self) -> Vec<ElementId> {
        self.element_ids()
            .filter(|&x| self.is_join_irreducible(x))
            .collect()
    }

    /// All meet-irreducible elements in arena order.
    pub fn meet_irreducibles(&self) -> Vec<ElementId> {
        self.element_ids()
            .filter(|&x| self.is_meet_irreducible(x))
            .collect()
    }

    /// The canonical join representation of `x`, if it exists.
    ///
    /// For each lower cover `a` of `x` the joinand is the unique minimal
    /// element of `{v <= x : v ≰ a}`; if some such set has several
    /// minimal elements, `x` has no canonical join representation.
    /// The bottom is the empty join.
    pub fn canonical_joinands(&self, x: ElementId) -> Option<Vec<ElementId>> {
        self.lower_covers(x)
            .iter()
            .map(|&a| {
                let outside: Vec<ElementId> = self
                    .element_ids()
                    .filter(|&v| self.is_lequal(v, x) && !self.is_lequal(v, a))
                    .collect();
                single(self.minimal_of(&outside))
            })
            .collect()
    }

    /// The canonical meet representation of `x`, if it exists (dual of
    /// [`Self::canonical_joinands`]).
    pub fn canonical_meetands(&self, x: ElementId) -> Option<Vec<ElementId>> {
        self.upper_covers(x)
            .iter()
            .map(|&a| {
                let outside: Vec<ElementId> = self
                    .element_ids()
                    .filter(|&v| self.is_gequal(v, x) && !self.is_gequal(v, a))
                    .collect();
                single(self.maximal_of(&outside))
            })
            .collect()
    }

    /// A finite lattice is join-semidistributive iff every element has a
    /// canonical join representation.
    pub fn is_join_semidistributive(&self) -> bool {
        self.element_ids()
            .all(|x| self.canonical_joinands(x).is_some())
    }

    /// A finite lattice is meet-semidistributive iff every element has a
    /// canonical meet representation.
    pub fn is_meet_semidistributive(&self) -> bool {
        self.element_ids()
            .all(|x| self.canonical_meetands(x).is_some())
    }

    /// Join- and meet-semidistributive.
    pub fn is_semidistributive(&self) -> bool {
        self.is_join_semidistributive() && self.is_meet_semidistributive()
    }
}

/// The least element (w.r.t. `below`) of the bounds selected by `is_bound`,
/// if every other bound lies above it.
fn least_bound(
    ids: &[ElementId],
    size: &[usize],
    is_bound: impl Fn(ElementId) -> bool,
    below: impl Fn(ElementId, ElementId) -> bool,
) -> Option<ElementId> {
    let bounds: Vec<ElementId> = ids.iter().copied().filter(|&c| is_bound(c)).collect();
    let candidate = bounds.iter().copied().min_by_key(|c| size[c.index()])?;
    bounds
        .iter()
        .all(|&d| below(candidate, d))
        .then_some(candidate)
}

fn single(extremes: Vec<ElementId>) -> Option<ElementId> {
    match extremes.as_slice() {
        &[only] => Some(only),
        _ => None,
    }
}

fn not_a_lattice<T: Ord + Clone + fmt::Debug>(
    poset: &FinitePoset<T>,
    a: ElementId,
    b: ElementId,
    missing: &'static str,
) -> OrderError {
    OrderError::NotALattice {
        left: poset.describe(a),
        right: poset.describe(b),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pentagon() -> FiniteLattice<&'static str> {
        FiniteLattice::from_relations(
            vec!["0", "a", "b", "c", "1"],
            vec![("0", "a"), ("a", "b"), ("b", "1"), ("0", "c"), ("c", "1")],
        )
        .unwrap()
    }

    fn m3() -> FiniteLattice<&'static str> {
        FiniteLattice::from_relations(
            vec!["0", "x", "y", "z", "1"],
            vec![
                ("0", "x"),
                ("0", "y"),
                ("0", "z"),
                ("x", "1"),
                ("y", "1"),
                ("z", "1"),
            ],
        )
        .unwrap()
    }

    fn id(l: &FiniteLattice<&'static str>, name: &'static str) -> ElementId {
        l.coerce(&name).unwrap()
    }

    #[test]
    fn bounds_join_and_meet() {
        let l = pentagon();
        let (zero, a, b, c, one) = (
            id(&l, "0"),
            id(&l, "a"),
            id(&l, "b"),
            id(&l, "c"),
            id(&l, "1"),
        );
        assert_eq!(l.bottom(), zero);
        assert_eq!(l.top(), one);
        assert_eq!(l.join(a, c), one);
        assert_eq!(l.meet(b, c), zero);
        assert_eq!(l.join(a, b), b);
        assert_eq!(l.meet(a, b), a);
        assert_eq!(l.join_all([a, b]), b);
        assert_eq!(l.join_all([]), zero);
        assert_eq!(l.meet_all([]), one);
    }

    #[test]
    fn irreducibles() {
        let l = pentagon();
        let names: Vec<&str> = l
            .join_irreducibles()
            .into_iter()
            .map(|x| *l.label(x))
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        let names: Vec<&str> = l
            .meet_irreducibles()
            .into_iter()
            .map(|x| *l.label(x))
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn canonical_joinands_of_pentagon() {
        let l = pentagon();
        let mut joinands = l.canonical_joinands(l.top()).unwrap();
        joinands.sort();
        assert_eq!(joinands, vec![id(&l, "a"), id(&l, "c")]);
        assert_eq!(l.canonical_joinands(l.bottom()), Some(vec![]));
        assert_eq!(l.canonical_joinands(id(&l, "b")), Some(vec![id(&l, "b")]));

        let mut meetands = l.canonical_meetands(l.bottom()).unwrap();
        meetands.sort();
        assert_eq!(meetands, vec![id(&l, "b"), id(&l, "c")]);
    }

    #[test]
    fn semidistributivity() {
        assert!(pentagon().is_semidistributive());

        let l = m3();
        assert!(l.canonical_joinands(l.top()).is_none());
        assert!(!l.is_join_semidistributive());
        assert!(!l.is_meet_semidistributive());
        assert!(!l.is_semidistributive());
    }

    #[test]
    fn missing_join_is_reported() {
        // a, b < c, d: two minimal upper bounds.
        let err = FiniteLattice::from_relations(
            vec!["0", "a", "b", "c", "d", "1"],
            vec![
                ("0", "a"),
                ("0", "b"),
                ("a", "c"),
                ("a", "d"),
                ("b", "c"),
                ("b", "d"),
                ("c", "1"),
                ("d", "1"),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OrderError::NotALattice {
                missing: "join",
                ..
            }
        ));
    }

    #[test]
    fn empty_lattice_is_rejected() {
        let err = FiniteLattice::<&str>::from_relations(Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, OrderError::Empty);
    }

    #[test]
    fn single_element_lattice() {
        let l = FiniteLattice::from_relations(vec!["0"], Vec::new()).unwrap();
        assert_eq!(l.bottom(), l.top());
        assert!(l.join_irreducibles().is_empty());
        assert!(l.is_semidistributive());
    }
}
