//! Error types for order-theoretic construction and lookup.

use std::path::PathBuf;

/// Errors arising while building or querying a finite poset or lattice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// A poset or lattice needs at least one element.
    #[error("empty poset: at least one element is required")]
    Empty,

    /// The same element was listed twice.
    #[error("duplicate element: {0}")]
    DuplicateElement(String),

    /// A value (or an id from another arena) is not an element.
    #[error("not an element: {0}")]
    NotAnElement(String),

    /// Two distinct elements are below each other.
    #[error("relation is not antisymmetric: {left} and {right} are mutually comparable")]
    NotAntisymmetric { left: String, right: String },

    /// The order predicate is not transitive.
    #[error("relation is not transitive: {lower} <= {middle} <= {upper} but not {lower} <= {upper}")]
    NotTransitive {
        lower: String,
        middle: String,
        upper: String,
    },

    /// Two elements lack a join or a meet.
    #[error("not a lattice: {left} and {right} have no {missing}")]
    NotALattice {
        left: String,
        right: String,
        missing: &'static str,
    },
}

/// Errors raised while loading lattice description files.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON lattice description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML lattice description: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported lattice description format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
}
