//! Support τ-tilting pairs read off the lattice.
//!
//! The torsion class `T` corresponds to a basic support τ-tilting pair
//! `(M, P)`. An indecomposable τ-rigid `M_j` is a summand of `M` exactly when
//! `j <= T <= plus(j)`; the projective cover of a simple `S` is a summand of
//! `P` exactly when `T` lies below the join of the other simples.

use crate::bricks::BrickSet;
use crate::error::TorsError;
use crate::interval::Interval;
use crate::lattice::TorsLattice;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tors_order::ElementId;

/// An indecomposable summand of a support τ-tilting pair.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum TauRigidPair {
    /// `(M, 0)`: the τ-rigid module of a join-irreducible.
    Rigid(ElementId),
    /// `(S, 1)`: the projective cover of a simple, as support.
    Support(ElementId),
}

impl TauRigidPair {
    pub fn element(self) -> ElementId {
        match self {
            Self::Rigid(id) | Self::Support(id) => id,
        }
    }

    /// `0` for a τ-rigid summand, `1` for a support summand.
    pub fn tag(self) -> u8 {
        match self {
            Self::Rigid(_) => 0,
            Self::Support(_) => 1,
        }
    }
}

/// Argument of [`TorsLattice::number_of_projs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjTarget {
    /// `T`, read as the interval `[0, T]`.
    Element(ElementId),
    Interval(Interval),
}

impl From<ElementId> for ProjTarget {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl From<Interval> for ProjTarget {
    fn from(itv: Interval) -> Self {
        Self::Interval(itv)
    }
}

impl From<(ElementId, ElementId)> for ProjTarget {
    fn from(pair: (ElementId, ElementId)) -> Self {
        Self::Interval(pair.into())
    }
}

impl TorsLattice {
    /// Indecomposable τ-rigid modules, one per brick.
    pub fn indec_tau_rigid(&self) -> &BrickSet {
        &self.bricks
    }

    /// Torsion classes whose pair has `M_m` as a τ-rigid summand.
    pub fn has_tau_rigid_summand(&self, m: ElementId) -> Result<BTreeSet<ElementId>, TorsError> {
        let m = self.coerce(m)?;
        if !self.bricks.contains(&m) {
            return Err(TorsError::NotJoinIrreducible(self.describe(m)));
        }
        Ok(self.has_tau_rigid_summand_unchecked(m))
    }

    pub fn has_tau_rigid_summand_unchecked(&self, m: ElementId) -> BTreeSet<ElementId> {
        self.rigid_summands.get_or_compute(m, || {
            self.lattice
                .closed_interval(m, self.plus_unchecked(m))
                .into_iter()
                .collect()
        })
    }

    /// Torsion classes whose pair has the projective cover of `s` as a
    /// support summand.
    pub fn has_support_summand(&self, s: ElementId) -> Result<BTreeSet<ElementId>, TorsError> {
        let s = self.coerce(s)?;
        if !self.simples.contains(&s) {
            return Err(TorsError::NotSimple(self.describe(s)));
        }
        Ok(self.has_support_summand_unchecked(s))
    }

    pub fn has_support_summand_unchecked(&self, s: ElementId) -> BTreeSet<ElementId> {
        self.support_summands.get_or_compute(s, || {
            let others = self.simples.iter().copied().filter(|&x| x != s);
            let bound = self.lattice.join_all(others);
            self.lattice
                .element_ids()
                .filter(|&t| self.lattice.is_lequal(t, bound))
                .collect()
        })
    }

    /// Bricks whose τ-rigid module is a summand of the pair of `t`.
    pub fn projectives(&self, t: ElementId) -> Result<BrickSet, TorsError> {
        Ok(self.projectives_unchecked(self.coerce(t)?))
    }

    pub fn projectives_unchecked(&self, t: ElementId) -> BrickSet {
        self.bricks
            .iter()
            .copied()
            .filter(|&m| self.has_tau_rigid_summand_unchecked(m).contains(&t))
            .collect()
    }

    /// Simples occurring in some module of `t`.
    pub fn composition_factors(&self, t: ElementId) -> Result<BrickSet, TorsError> {
        Ok(self.composition_factors_unchecked(self.coerce(t)?))
    }

    pub fn composition_factors_unchecked(&self, t: ElementId) -> BrickSet {
        self.simples
            .iter()
            .copied()
            .filter(|&s| !self.has_support_summand_unchecked(s).contains(&t))
            .collect()
    }

    /// Whether every simple occurs in `t`.
    pub fn is_sincere(&self, t: ElementId) -> Result<bool, TorsError> {
        Ok(self.is_sincere_unchecked(self.coerce(t)?))
    }

    pub fn is_sincere_unchecked(&self, t: ElementId) -> bool {
        self.composition_factors_unchecked(t).len() == self.simples.len()
    }

    /// The indecomposable summands of the pair of `t`.
    pub fn tau_rigid_pair_summand(
        &self,
        t: ElementId,
    ) -> Result<BTreeSet<TauRigidPair>, TorsError> {
        Ok(self.tau_rigid_pair_summand_unchecked(self.coerce(t)?))
    }

    pub fn tau_rigid_pair_summand_unchecked(&self, t: ElementId) -> BTreeSet<TauRigidPair> {
        let rigid = self.projectives_unchecked(t).into_iter().map(TauRigidPair::Rigid);
        let support = self
            .simples
            .iter()
            .copied()
            .filter(|&s| self.has_support_summand_unchecked(s).contains(&t))
            .map(TauRigidPair::Support);
        rigid.chain(support).collect()
    }

    /// Summands `M` of the pair of `T` with `M ≰ U`, for the interval
    /// `[U, T]` (or `[0, T]` for a bare element).
    pub fn number_of_projs(&self, target: impl Into<ProjTarget>) -> Result<usize, TorsError> {
        let target = match target.into() {
            ProjTarget::Element(t) => ProjTarget::Element(self.coerce(t)?),
            ProjTarget::Interval(itv) => ProjTarget::Interval(self.check_interval(itv)?),
        };
        Ok(self.number_of_projs_unchecked(target))
    }

    pub fn number_of_projs_unchecked(&self, target: impl Into<ProjTarget>) -> usize {
        let Interval { lower, upper } = match target.into() {
            ProjTarget::Element(t) => Interval::new(self.zero(), t),
            ProjTarget::Interval(itv) => itv,
        };
        self.projectives_unchecked(upper)
            .into_iter()
            .filter(|&m| !self.lattice.is_lequal(m, lower))
            .count()
    }

    /// Human-readable `(label, tag)` rendering of a summand.
    pub fn pair_label(&self, pair: TauRigidPair) -> String {
        format!("({}, {})", self.describe(pair.element()), pair.tag())
    }
}
