//! Bricks, brick labels and the bricks of hearts.
//!
//! A brick `j` lies in the torsion class `T` iff `j <= T`, and in the
//! torsion-free class `T^⊥` iff `T <= kappa(j)`. The bricks of an interval
//! `[U, T]` are those in `T ∩ U^⊥`; a cover relation carries exactly one.

use crate::error::TorsError;
use crate::interval::Interval;
use crate::lattice::TorsLattice;
use std::collections::BTreeSet;
use tors_order::ElementId;

/// A set of bricks, identified by their join-irreducible elements.
pub type BrickSet = BTreeSet<ElementId>;

impl TorsLattice {
    /// Every brick (join-irreducible element).
    pub fn all_bricks(&self) -> &BrickSet {
        &self.bricks
    }

    /// Simple modules: the atoms.
    pub fn simples(&self) -> &BrickSet {
        &self.simples
    }

    /// Bricks contained in the torsion class `t`.
    pub fn bricks_in_tors(&self, t: ElementId) -> Result<BrickSet, TorsError> {
        Ok(self.bricks_in_tors_unchecked(self.coerce(t)?))
    }

    pub fn bricks_in_tors_unchecked(&self, t: ElementId) -> BrickSet {
        self.tors_bricks.get_or_compute(t, || {
            self.bricks
                .iter()
                .copied()
                .filter(|&j| self.lattice.is_lequal(j, t))
                .collect()
        })
    }

    /// Bricks contained in the torsion-free class `t^⊥`.
    pub fn bricks_in_torf(&self, t: ElementId) -> Result<BrickSet, TorsError> {
        Ok(self.bricks_in_torf_unchecked(self.coerce(t)?))
    }

    pub fn bricks_in_torf_unchecked(&self, t: ElementId) -> BrickSet {
        self.torf_bricks.get_or_compute(t, || {
            self.bricks
                .iter()
                .copied()
                .filter(|&j| {
                    self.kappa_unchecked(j)
                        .is_some_and(|k| self.lattice.is_lequal(t, k))
                })
                .collect()
        })
    }

    /// Bricks of the heart of `[lower, upper]`.
    pub fn bricks(&self, itv: impl Into<Interval>) -> Result<BrickSet, TorsError> {
        let itv = self.check_interval(itv.into())?;
        Ok(self.bricks_unchecked(itv))
    }

    /// [`Self::bricks`] without checking that `lower <= upper`.
    pub fn bricks_unchecked(&self, itv: impl Into<Interval>) -> BrickSet {
        let itv = itv.into();
        self.hearts.get_or_compute(itv, || {
            let torf = self.bricks_in_torf_unchecked(itv.lower);
            self.bricks_in_tors_unchecked(itv.upper)
                .intersection(&torf)
                .copied()
                .collect()
        })
    }

    /// The brick labelling the cover `lower -> upper`.
    pub fn label(&self, itv: impl Into<Interval>) -> Result<ElementId, TorsError> {
        let itv = itv.into();
        let bricks = self.bricks(itv)?;
        match bricks.iter().next() {
            Some(&brick) if bricks.len() == 1 => Ok(brick),
            _ => Err(TorsError::NotACoveringRelation {
                lower: self.describe(itv.lower),
                upper: self.describe(itv.upper),
                bricks: bricks.len(),
            }),
        }
    }

    /// Some brick of the heart of `[lower, upper]`, unchecked.
    pub fn label_unchecked(&self, itv: impl Into<Interval>) -> Option<ElementId> {
        self.bricks_unchecked(itv).first().copied()
    }

    /// Every cover relation with its brick label.
    pub fn cover_labels(&self) -> Vec<(Interval, ElementId)> {
        self.lattice
            .cover_relations()
            .into_iter()
            .filter_map(|cover| {
                let itv = Interval::from(cover);
                self.label_unchecked(itv).map(|brick| (itv, brick))
            })
            .collect()
    }
}
