//! # tors-order
//!
//! Finite order theory over an index arena. This is the lattice-primitives
//! layer consumed by `tors-lattice`: it knows nothing about torsion classes,
//! only about elements, comparisons, covers, joins and meets.
//!
//! ## Architecture
//!
//! ```text
//! LatticeData            ← labels + generating relations (JSON / TOML)
//!     │
//! FinitePoset<T>         ← closure matrix + Hasse diagram, ElementId arena
//!     │
//! FiniteLattice<T>       ← join/meet tables, irreducibles, canonical
//!                          join/meet representations, semidistributivity
//!
//! SimplicialComplex<V>   ← complexes presented by facets
//! ```

pub mod complex;
pub mod data;
pub mod error;
pub mod lattice;
pub mod poset;

pub use complex::SimplicialComplex;
pub use data::LatticeData;
pub use error::{DataError, OrderError};
pub use lattice::FiniteLattice;
pub use poset::{ElementId, FinitePoset};
