//! Error types for torsion-class queries.

use tors_order::{DataError, OrderError};

/// Errors raised by [`crate::TorsLattice`] construction and checked queries.
#[derive(Debug, thiserror::Error)]
pub enum TorsError {
    /// The lattice is not semidistributive, so it is not a lattice of
    /// torsion classes.
    #[error("not a semidistributive lattice")]
    NotSemidistributive,

    /// The pair is not ordered `lower <= upper`.
    #[error("not an interval: {lower} is not below {upper}")]
    NotAnInterval { lower: String, upper: String },

    /// A brick label was asked for a pair that is not a cover.
    #[error("not a covering relation: {lower} -> {upper} carries {bricks} bricks")]
    NotACoveringRelation {
        lower: String,
        upper: String,
        bricks: usize,
    },

    #[error("not a join-irreducible element: {0}")]
    NotJoinIrreducible(String),

    #[error("not a simple brick: {0}")]
    NotSimple(String),

    #[error("not a wide interval: [{lower}, {upper}]")]
    NotAWideInterval { lower: String, upper: String },

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Data(#[from] DataError),
}
