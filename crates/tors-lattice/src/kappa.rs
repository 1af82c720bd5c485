//! The kappa map.
//!
//! For a join-irreducible `j` with unique lower cover `j_*`, `kappa(j)` is
//! the largest element above `j_*` that does not contain `j`. Read on
//! torsion classes it sends `T(B)` to the torsion class `⊥B` left of the
//! brick `B`. The extended map sends `x` to the meet of the kappas of its
//! canonical joinands; the empty meet is the top, so `kappa(0)` is `mod`.

use crate::error::TorsError;
use crate::lattice::TorsLattice;
use tors_order::ElementId;

impl TorsLattice {
    /// `kappa(j)` for a join-irreducible `j`.
    ///
    /// `Ok(None)` means the defining set has no unique maximum, which cannot
    /// happen in a semidistributive lattice.
    pub fn kappa(&self, j: ElementId) -> Result<Option<ElementId>, TorsError> {
        let j = self.coerce(j)?;
        if !self.bricks.contains(&j) {
            return Err(TorsError::NotJoinIrreducible(self.describe(j)));
        }
        Ok(self.kappa_unchecked(j))
    }

    /// `kappa(j)` without checking that `j` is join-irreducible; yields
    /// `None` for anything else.
    pub fn kappa_unchecked(&self, j: ElementId) -> Option<ElementId> {
        self.kappa_table.get_or_compute(j, || {
            let lattice = &self.lattice;
            let &[lower] = lattice.lower_covers(j) else {
                return None;
            };
            let candidates: Vec<ElementId> = lattice
                .element_ids()
                .filter(|&x| lattice.is_lequal(lower, x) && !lattice.is_lequal(j, x))
                .collect();
            match lattice.maximal_of(&candidates).as_slice() {
                &[top] => Some(top),
                _ => None,
            }
        })
    }

    /// The extended kappa map, defined on every element.
    ///
    /// `None` when `x` has no canonical join representation or a joinand has
    /// no kappa.
    pub fn extended_kappa(&self, x: ElementId) -> Result<Option<ElementId>, TorsError> {
        Ok(self.extended_kappa_unchecked(self.coerce(x)?))
    }

    pub fn extended_kappa_unchecked(&self, x: ElementId) -> Option<ElementId> {
        self.extended_kappa_table.get_or_compute(x, || {
            let joinands = self.lattice.canonical_joinands(x)?;
            let kappas = joinands
                .into_iter()
                .map(|j| self.kappa_unchecked(j))
                .collect::<Option<Vec<_>>>()?;
            Some(self.lattice.meet_all(kappas))
        })
    }
}
