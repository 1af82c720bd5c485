//! The lattice of torsion classes and its memo tables.

use crate::bricks::BrickSet;
use crate::error::TorsError;
use crate::interval::Interval;
use crate::memo::Memo;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use tors_order::{ElementId, FiniteLattice, LatticeData};

/// A finite semidistributive lattice read as the lattice of torsion classes
/// of a τ-tilting finite algebra.
///
/// Join-irreducible elements stand for bricks (equivalently, indecomposable
/// τ-rigid modules) and atoms for simple modules. Derived values are memoized
/// per instance; all queries take `&self`.
#[derive(Debug)]
pub struct TorsLattice {
    pub(crate) lattice: FiniteLattice<String>,
    pub(crate) bricks: BrickSet,
    pub(crate) simples: BrickSet,
    pub(crate) intervals: OnceLock<Vec<Interval>>,
    pub(crate) kappa_table: Memo<ElementId, Option<ElementId>>,
    pub(crate) extended_kappa_table: Memo<ElementId, Option<ElementId>>,
    pub(crate) tors_bricks: Memo<ElementId, BrickSet>,
    pub(crate) torf_bricks: Memo<ElementId, BrickSet>,
    pub(crate) hearts: Memo<Interval, BrickSet>,
    pub(crate) plus_table: Memo<ElementId, ElementId>,
    pub(crate) minus_table: Memo<ElementId, ElementId>,
    pub(crate) rigid_summands: Memo<ElementId, BTreeSet<ElementId>>,
    pub(crate) support_summands: Memo<ElementId, BTreeSet<ElementId>>,
}

impl TorsLattice {
    /// Wrap a lattice, rejecting it unless it is semidistributive.
    pub fn new(lattice: FiniteLattice<String>) -> Result<Self, TorsError> {
        if !lattice.is_semidistributive() {
            tracing::warn!(elements = lattice.len(), "lattice is not semidistributive");
            return Err(TorsError::NotSemidistributive);
        }

        let bricks: BrickSet = lattice.join_irreducibles().into_iter().collect();
        let simples: BrickSet = lattice.upper_covers(lattice.bottom()).iter().copied().collect();
        tracing::debug!(
            elements = lattice.len(),
            bricks = bricks.len(),
            simples = simples.len(),
            "built lattice of torsion classes"
        );

        Ok(Self {
            lattice,
            bricks,
            simples,
            intervals: OnceLock::new(),
            kappa_table: Memo::default(),
            extended_kappa_table: Memo::default(),
            tors_bricks: Memo::default(),
            torf_bricks: Memo::default(),
            hearts: Memo::default(),
            plus_table: Memo::default(),
            minus_table: Memo::default(),
            rigid_summands: Memo::default(),
            support_summands: Memo::default(),
        })
    }

    pub fn from_data(data: &LatticeData) -> Result<Self, TorsError> {
        Self::new(FiniteLattice::from_data(data)?)
    }

    /// Load a JSON or TOML lattice description from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TorsError> {
        Self::from_data(&LatticeData::load(path)?)
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &FiniteLattice<String> {
        &self.lattice
    }

    /// Number of torsion classes.
    pub fn len(&self) -> usize {
        self.lattice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lattice.is_empty()
    }

    /// The zero torsion class.
    pub fn zero(&self) -> ElementId {
        self.lattice.bottom()
    }

    /// The torsion class of all modules.
    pub fn whole(&self) -> ElementId {
        self.lattice.top()
    }

    /// Look up a torsion class by label.
    pub fn element(&self, label: &str) -> Result<ElementId, TorsError> {
        Ok(self.lattice.coerce(&label.to_string())?)
    }

    /// Validate an id of unknown origin.
    pub fn coerce(&self, id: ElementId) -> Result<ElementId, TorsError> {
        Ok(self.lattice.coerce_id(id)?)
    }

    /// The label of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this lattice.
    pub fn name(&self, id: ElementId) -> &str {
        self.lattice.label(id)
    }

    /// Labels of a set of elements, in id order.
    pub fn names<'a>(&self, ids: impl IntoIterator<Item = &'a ElementId>) -> Vec<&str> {
        ids.into_iter().map(|&id| self.name(id)).collect()
    }

    pub(crate) fn describe(&self, id: ElementId) -> String {
        match self.lattice.coerce_id(id) {
            Ok(id) => self.name(id).to_string(),
            Err(_) => id.to_string(),
        }
    }
}

impl fmt::Display for TorsLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lattice of torsion classes of some tau-tilting finite algebra having {} torsion classes",
            self.len()
        )
    }
}
