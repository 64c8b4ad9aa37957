//! Selection state and the new-entry sentinel

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Reserved sentinel name meaning "create a new resource".
///
/// Never a legal resource name; always listed first in display order.
pub const NEW_RESOURCE_NAME: &str = "*";

/// Current editor selection: exactly one of the sentinel or a resource name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum Selection {
    /// The new-entry sentinel is active
    New,
    /// A named resource is selected (it may not exist in the collection yet)
    Named(String),
}

impl Selection {
    /// Derive the selection from a URL query parameter value.
    ///
    /// A missing or empty parameter and the sentinel itself all mean `New`.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None => Self::New,
            Some(name) if name.is_empty() || name == NEW_RESOURCE_NAME => Self::New,
            Some(name) => Self::Named(name.to_string()),
        }
    }

    /// The display name of the selection (the sentinel for `New`)
    #[must_use]
    pub fn as_name(&self) -> &str {
        match self {
            Self::New => NEW_RESOURCE_NAME,
            Self::Named(name) => name,
        }
    }

    /// Whether the new-entry sentinel is active
    #[must_use]
    pub fn is_new(&self) -> bool {
        matches!(self, Self::New)
    }
}

/// Check that a name is usable as a resource key.
///
/// Rejects blank names and the reserved sentinel.
pub fn validate_resource_name(name: &str) -> CoreResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::ValidationError(
            "resource name must not be empty".to_string(),
        ));
    }
    if trimmed == NEW_RESOURCE_NAME {
        return Err(CoreError::ValidationError(format!(
            "resource name '{NEW_RESOURCE_NAME}' is reserved"
        )));
    }
    Ok(())
}

/// Resource names in display order: the sentinel first, then sorted names.
#[must_use]
pub fn display_order<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut sorted: Vec<String> = names.into_iter().collect();
    sorted.sort();
    let mut ordered = Vec::with_capacity(sorted.len() + 1);
    ordered.push(NEW_RESOURCE_NAME.to_string());
    ordered.extend(sorted);
    ordered
}
