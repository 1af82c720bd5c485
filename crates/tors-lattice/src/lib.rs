//! # tors-lattice
//!
//! Lattices of torsion classes of τ-tilting finite algebras, studied purely
//! through their order structure. Join-irreducibles are bricks, cover
//! relations carry brick labels, intervals carry hearts, and the classic
//! bijections (wide subcategories, ICE/IKE-closed subcategories, support
//! τ-tilting pairs) are read off the Hasse diagram.
//!
//! ## Architecture
//!
//! ```text
//! FiniteLattice<String>     ← tors-order: covers, join/meet, canonical joins
//!     │
//! TorsLattice               ← semidistributivity gate, memo tables
//!     │
//! kappa                     ← kappa(j), extended kappa
//!     │
//! bricks                    ← bricks in tors/torf, hearts, cover labels
//!     │
//! interval                  ← plus/minus, wide / ICE / IKE classifiers
//!     │
//! tau_tilting               ← support τ-tilting pairs, projectives
//!     │
//! derived                   ← wide/ICE/IKE lattices, heart poset, complexes
//! ```

pub mod bricks;
pub mod derived;
pub mod error;
pub mod interval;
pub mod kappa;
pub mod lattice;
mod memo;
pub mod tau_tilting;
pub mod toy;

pub use bricks::BrickSet;
pub use error::TorsError;
pub use interval::Interval;
pub use lattice::TorsLattice;
pub use tau_tilting::{ProjTarget, TauRigidPair};
pub use tors_order::{ElementId, FiniteLattice, FinitePoset, LatticeData, SimplicialComplex};
