//! Field descriptor types driving generic editor surfaces
//!
//! A surface renders `EditorForm.items` in order without knowing anything
//! about certificates; the descriptors carry everything it needs (category,
//! label, current value as the default, layout span, option lists).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Selection;

/// Rendering category of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    /// Single-line text input
    Text,
    /// Multi-line text input
    Textarea,
    /// Single choice from a fixed option list
    Radios,
}

/// One selectable option of a `Radios` field.
///
/// A `null` value clears the field when chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
    pub label: String,
    pub value: Value,
}

/// Options for a string-valued choice, optionally with a clearing entry
#[must_use]
pub fn string_options(values: &[&str], with_none: bool) -> Vec<FieldOption> {
    let mut options = Vec::with_capacity(values.len() + usize::from(with_none));
    if with_none {
        options.push(FieldOption {
            label: "None".to_string(),
            value: Value::Null,
        });
    }
    options.extend(values.iter().map(|v| FieldOption {
        label: (*v).to_string(),
        value: Value::String((*v).to_string()),
    }));
    options
}

/// Yes / No / None options for a nullable boolean flag
#[must_use]
pub fn boolean_options() -> Vec<FieldOption> {
    vec![
        FieldOption {
            label: "Yes".to_string(),
            value: Value::Bool(true),
        },
        FieldOption {
            label: "No".to_string(),
            value: Value::Bool(false),
        },
        FieldOption {
            label: "None".to_string(),
            value: Value::Null,
        },
    ]
}

/// Schema entry for one editable field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Wire key submitted back in the value map
    pub name: String,
    /// Human-readable label
    pub label: String,
    /// Input placeholder (may be empty)
    pub placeholder: String,
    /// Current stored value, surfaced as the input default
    pub default_value: Value,
    /// Layout weight on a 6-column grid
    pub span: u8,
    pub category: FieldCategory,
    /// Surface must not submit without a value
    #[serde(default)]
    pub required: bool,
    /// Suggested visible rows for multi-line fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u16>,
    /// Option list for `Radios` fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

/// Complete editor contract handed to a surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorForm {
    /// Selection the form was built for
    pub selection: Selection,
    /// Field descriptors in display order
    pub items: Vec<FieldDescriptor>,
    /// How many leading fields are shown before "expand"
    pub default_show: usize,
    /// Whether the remove action is offered (never at the sentinel)
    pub can_remove: bool,
}
