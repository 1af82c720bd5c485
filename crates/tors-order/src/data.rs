//! Raw lattice descriptions: element labels plus generating relations.
//!
//! ```json
//! { "name": "A2", "elements": ["0", "S1"], "relations": [["0", "S1"]] }
//! ```
//!
//! The same shape is accepted as TOML. When `elements` is omitted the
//! labels are collected from the relations in first-seen order.

use crate::error::{DataError, OrderError};
use crate::lattice::FiniteLattice;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// A lattice given by labels and `lower <= upper` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub elements: Vec<String>,

    #[serde(default)]
    pub relations: Vec<(String, String)>,
}

impl LatticeData {
    pub fn from_json_str(input: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_toml_str(input: &str) -> Result<Self, DataError> {
        Ok(toml::from_str(input)?)
    }

    /// Load a description, choosing the format from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let parse: fn(&str) -> Result<Self, DataError> = match extension.as_str() {
            "json" => Self::from_json_str,
            "toml" => Self::from_toml_str,
            _ => return Err(DataError::UnsupportedFormat(path.display().to_string())),
        };

        let input = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), format = %extension, "loading lattice description");
        parse(&input)
    }

    /// Element labels: the explicit list, or the relation endpoints.
    pub fn element_labels(&self) -> Vec<String> {
        if !self.elements.is_empty() {
            return self.elements.clone();
        }
        let mut seen = BTreeSet::new();
        self.relations
            .iter()
            .flat_map(|(lower, upper)| [lower, upper])
            .filter(|label| seen.insert(label.as_str()))
            .cloned()
            .collect()
    }
}

impl FiniteLattice<String> {
    /// Build the lattice described by `data`.
    pub fn from_data(data: &LatticeData) -> Result<Self, OrderError> {
        Self::from_relations(data.element_labels(), data.relations.iter().cloned())
    }
}
