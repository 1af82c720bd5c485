//! Lattices, posets and complexes derived from the interval classifiers.
//!
//! Derived lattices of hearts have brick-sets as elements: hearts are
//! deduplicated by brick-set and ordered by inclusion.

use crate::bricks::BrickSet;
use crate::error::TorsError;
use crate::interval::Interval;
use crate::lattice::TorsLattice;
use crate::tau_tilting::TauRigidPair;
use std::collections::BTreeSet;
use tors_order::{ElementId, FiniteLattice, FinitePoset, SimplicialComplex};

impl TorsLattice {
    /// The lattice of wide subcategories, on the torsion classes reordered
    /// by [`Self::wide_lequal_unchecked`].
    pub fn wide_lattice(&self) -> Result<FiniteLattice<ElementId>, TorsError> {
        let ids: Vec<ElementId> = self.lattice.element_ids().collect();
        let wide = FiniteLattice::from_order(ids, |&u, &t| self.wide_lequal_unchecked(u, t))?;
        tracing::debug!(elements = wide.len(), "built lattice of wide subcategories");
        Ok(wide)
    }

    /// Lattice of ICE-closed subcategories.
    pub fn ice_lattice(&self) -> Result<FiniteLattice<BrickSet>, TorsError> {
        let hearts = self.heart_brick_sets(|itv| self.is_ice_interval_unchecked(itv));
        let ice = FiniteLattice::from_order(hearts, |a, b| a.is_subset(b))?;
        tracing::debug!(elements = ice.len(), "built lattice of ICE-closed subcategories");
        Ok(ice)
    }

    /// Lattice of IKE-closed subcategories.
    pub fn ike_lattice(&self) -> Result<FiniteLattice<BrickSet>, TorsError> {
        let hearts = self.heart_brick_sets(|itv| self.is_ike_interval_unchecked(itv));
        let ike = FiniteLattice::from_order(hearts, |a, b| a.is_subset(b))?;
        tracing::debug!(elements = ike.len(), "built lattice of IKE-closed subcategories");
        Ok(ike)
    }

    /// Poset of all hearts of intervals.
    pub fn heart_poset(&self) -> Result<FinitePoset<BrickSet>, TorsError> {
        let hearts = self.heart_brick_sets(|_| true);
        let poset = FinitePoset::from_order(hearts, |a, b| a.is_subset(b))?;
        tracing::debug!(elements = poset.len(), "built poset of hearts");
        Ok(poset)
    }

    fn heart_brick_sets(&self, keep: impl Fn(Interval) -> bool) -> Vec<BrickSet> {
        let hearts: BTreeSet<BrickSet> = self
            .all_itvs()
            .iter()
            .copied()
            .filter(|&itv| keep(itv))
            .map(|itv| self.bricks_unchecked(itv))
            .collect();
        hearts.into_iter().collect()
    }

    /// Complex of support τ-tilting pairs: one facet per torsion class.
    pub fn s_tau_tilt_complex(&self) -> SimplicialComplex<TauRigidPair> {
        let complex = SimplicialComplex::from_facets(
            self.lattice
                .element_ids()
                .map(|t| self.tau_rigid_pair_summand_unchecked(t)),
        );
        tracing::debug!(facets = complex.facets().len(), "built support tau-tilting complex");
        complex
    }

    /// Complex of τ-tilting modules: one facet per sincere torsion class.
    pub fn positive_tau_tilt_complex(&self) -> SimplicialComplex<TauRigidPair> {
        let complex = SimplicialComplex::from_facets(
            self.lattice
                .element_ids()
                .filter(|&t| self.is_sincere_unchecked(t))
                .map(|t| {
                    self.projectives_unchecked(t)
                        .into_iter()
                        .map(TauRigidPair::Rigid)
                        .collect::<Vec<_>>()
                }),
        );
        tracing::debug!(facets = complex.facets().len(), "built positive tau-tilting complex");
        complex
    }

    /// Labels of the bricks in `set`.
    pub fn brick_labels(&self, set: &BrickSet) -> Vec<String> {
        set.iter().map(|&brick| self.describe(brick)).collect()
    }
}
