//! Intervals, the plus/minus operators and the interval classifiers.
//!
//! An interval `[U, T]` stands for its heart `T ∩ U^⊥`. It is
//!
//! - **wide** when `T` is the join of the upper covers of `U` below `T`,
//! - **ICE** when `T <= plus(U)`,
//! - **IKE** when `minus(T) <= U`,
//!
//! and every wide interval is both ICE and IKE.

use crate::bricks::BrickSet;
use crate::error::TorsError;
use crate::lattice::TorsLattice;
use serde::{Deserialize, Serialize};
use tors_order::ElementId;

/// A pair `(lower, upper)`; an interval proper when `lower <= upper`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Interval {
    pub lower: ElementId,
    pub upper: ElementId,
}

impl Interval {
    pub fn new(lower: ElementId, upper: ElementId) -> Self {
        Self { lower, upper }
    }
}

impl From<(ElementId, ElementId)> for Interval {
    fn from((lower, upper): (ElementId, ElementId)) -> Self {
        Self::new(lower, upper)
    }
}

impl TorsLattice {
    /// Validate both endpoints and `lower <= upper`.
    pub(crate) fn check_interval(&self, itv: Interval) -> Result<Interval, TorsError> {
        let lower = self.coerce(itv.lower)?;
        let upper = self.coerce(itv.upper)?;
        if !self.lattice.is_lequal(lower, upper) {
            return Err(TorsError::NotAnInterval {
                lower: self.describe(lower),
                upper: self.describe(upper),
            });
        }
        Ok(itv)
    }

    /// Every interval `[U, T]`, ordered by `(U, T)`.
    pub fn all_itvs(&self) -> &[Interval] {
        self.intervals.get_or_init(|| {
            let lattice = &self.lattice;
            let intervals: Vec<Interval> = lattice
                .element_ids()
                .flat_map(|u| lattice.element_ids().map(move |t| Interval::new(u, t)))
                .filter(|itv| lattice.is_lequal(itv.lower, itv.upper))
                .collect();
            tracing::debug!(intervals = intervals.len(), "enumerated intervals");
            intervals
        })
    }

    /// Join of `u` and its upper covers: the largest `T` with `[u, T]` wide.
    pub fn plus(&self, u: ElementId) -> Result<ElementId, TorsError> {
        Ok(self.plus_unchecked(self.coerce(u)?))
    }

    pub fn plus_unchecked(&self, u: ElementId) -> ElementId {
        self.plus_table.get_or_compute(u, || {
            if u == self.lattice.top() {
                u
            } else {
                self.lattice.join_all(self.lattice.upper_covers(u).iter().copied())
            }
        })
    }

    /// Meet of `t` and its lower covers.
    pub fn minus(&self, t: ElementId) -> Result<ElementId, TorsError> {
        Ok(self.minus_unchecked(self.coerce(t)?))
    }

    pub fn minus_unchecked(&self, t: ElementId) -> ElementId {
        self.minus_table.get_or_compute(t, || {
            if t == self.lattice.bottom() {
                t
            } else {
                self.lattice.meet_all(self.lattice.lower_covers(t).iter().copied())
            }
        })
    }

    pub fn is_wide_interval(&self, itv: impl Into<Interval>) -> Result<bool, TorsError> {
        let itv = self.check_interval(itv.into())?;
        Ok(self.is_wide_interval_unchecked(itv))
    }

    pub fn is_wide_interval_unchecked(&self, itv: impl Into<Interval>) -> bool {
        let Interval { lower, upper } = itv.into();
        if lower == upper {
            return true;
        }
        let below = self
            .lattice
            .upper_covers(lower)
            .iter()
            .copied()
            .filter(|&x| self.lattice.is_lequal(x, upper));
        self.lattice.join_all(below) == upper
    }

    pub fn is_ice_interval(&self, itv: impl Into<Interval>) -> Result<bool, TorsError> {
        let itv = self.check_interval(itv.into())?;
        Ok(self.is_ice_interval_unchecked(itv))
    }

    pub fn is_ice_interval_unchecked(&self, itv: impl Into<Interval>) -> bool {
        let Interval { lower, upper } = itv.into();
        self.lattice.is_lequal(upper, self.plus_unchecked(lower))
    }

    pub fn is_ike_interval(&self, itv: impl Into<Interval>) -> Result<bool, TorsError> {
        let itv = self.check_interval(itv.into())?;
        Ok(self.is_ike_interval_unchecked(itv))
    }

    pub fn is_ike_interval_unchecked(&self, itv: impl Into<Interval>) -> bool {
        let Interval { lower, upper } = itv.into();
        self.lattice.is_lequal(self.minus_unchecked(upper), lower)
    }

    /// Heart inclusion, compared through brick-sets.
    pub fn interval_lequal(
        &self,
        first: impl Into<Interval>,
        second: impl Into<Interval>,
    ) -> Result<bool, TorsError> {
        Ok(self.bricks(first)?.is_subset(&self.bricks(second)?))
    }

    /// Containment of the wide subcategories attached to `u` and `t`:
    /// `u <= t` and `kappa(u) >= kappa(t)`.
    pub fn wide_lequal(&self, u: ElementId, t: ElementId) -> Result<bool, TorsError> {
        Ok(self.wide_lequal_unchecked(self.coerce(u)?, self.coerce(t)?))
    }

    pub fn wide_lequal_unchecked(&self, u: ElementId, t: ElementId) -> bool {
        if !self.lattice.is_lequal(u, t) {
            return false;
        }
        match (self.extended_kappa_unchecked(u), self.extended_kappa_unchecked(t)) {
            (Some(ku), Some(kt)) => self.lattice.is_gequal(ku, kt),
            _ => false,
        }
    }

    /// The simple objects of a wide heart: labels of the covers `U -> x`
    /// with `x <= T`.
    pub fn wide_simples(&self, itv: impl Into<Interval>) -> Result<BrickSet, TorsError> {
        let itv = self.check_interval(itv.into())?;
        if !self.is_wide_interval_unchecked(itv) {
            return Err(TorsError::NotAWideInterval {
                lower: self.describe(itv.lower),
                upper: self.describe(itv.upper),
            });
        }
        Ok(self
            .lattice
            .upper_covers(itv.lower)
            .iter()
            .filter(|&&x| self.lattice.is_lequal(x, itv.upper))
            .filter_map(|&x| self.label_unchecked((itv.lower, x)))
            .collect())
    }
}
