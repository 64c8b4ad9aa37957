//! Configuration object and resource addressing types

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Certificate;

/// Field values submitted by an editor surface: field name -> JSON value
pub type FieldValues = HashMap<String, serde_json::Value>;

/// Kind of editable resource held in the configuration.
///
/// Registry operations are keyed by kind so further kinds (upstreams,
/// routes) extend the contract without changing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Certificate,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Certificate => write!(f, "certificate"),
        }
    }
}

/// Gateway configuration snapshot: named resource collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Certificate records keyed by resource name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub certificates: HashMap<String, Certificate>,
}

impl Config {
    /// Certificate names in lexicographic order
    #[must_use]
    pub fn certificate_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.certificates.keys().cloned().collect();
        names.sort();
        names
    }
}
