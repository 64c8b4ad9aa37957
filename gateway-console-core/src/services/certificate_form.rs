//! Certificate field-descriptor builder
//!
//! Pure derivation from (selection, stored records, labels) to the
//! `EditorForm` a surface renders. No side effects, tolerant of names that
//! have no stored record yet, safe to rebuild on every render.

use std::collections::HashMap;

use serde_json::Value;

use crate::traits::LabelLookup;
use crate::types::{
    boolean_options, string_options, Certificate, EditorForm, FieldCategory, FieldDescriptor,
    Selection,
};

const MIN_ROWS: u16 = 3;
const MAX_ROWS: u16 = 8;

/// Leading fields shown before "expand" for a named selection
const DEFAULT_SHOW_NAMED: usize = 2;
/// One more at the sentinel so the name field is always visible
const DEFAULT_SHOW_NEW: usize = 3;

/// Visible rows suggested for a multi-line field: the line count of the
/// current value clamped to [3, 8]. An empty value counts as one line.
#[must_use]
pub fn suggested_rows(value: &str) -> u16 {
    let lines = value.lines().count().max(1);
    u16::try_from(lines)
        .unwrap_or(MAX_ROWS)
        .clamp(MIN_ROWS, MAX_ROWS)
}

/// Build the editor form for a selection against the stored records.
///
/// A named selection without a stored record (a name typed straight into the
/// URL) edits an empty record; saving it creates the entry.
#[must_use]
pub fn build_certificate_form(
    selection: &Selection,
    certificates: &HashMap<String, Certificate>,
    labels: &dyn LabelLookup,
) -> EditorForm {
    let current = match selection {
        Selection::New => Certificate::default(),
        Selection::Named(name) => certificates.get(name).cloned().unwrap_or_default(),
    };

    let mut items = Vec::with_capacity(8);

    // The name is entered once at creation and addresses the record forever
    if selection.is_new() {
        let mut name = field(labels, "name", FieldCategory::Text, 6, text_default(None));
        name.required = true;
        items.push(name);
    }

    for (key, stored) in [
        ("tls_cert", current.tls_cert.as_deref()),
        ("tls_key", current.tls_key.as_deref()),
        ("tls_chain", current.tls_chain.as_deref()),
    ] {
        let value = stored.unwrap_or_default();
        let mut item = field(labels, key, FieldCategory::Textarea, 6, text_default(stored));
        item.rows = Some(suggested_rows(value));
        items.push(item);
    }

    items.push(field(
        labels,
        "domains",
        FieldCategory::Text,
        6,
        text_default(current.domains.as_deref()),
    ));

    let mut acme = field(
        labels,
        "acme",
        FieldCategory::Radios,
        3,
        current
            .acme
            .as_deref()
            .map_or(Value::Null, |v| Value::String(v.to_string())),
    );
    acme.options = Some(string_options(&["lets_encrypt"], true));
    items.push(acme);

    let mut is_default = field(
        labels,
        "is_default",
        FieldCategory::Radios,
        3,
        flag_default(current.is_default),
    );
    is_default.options = Some(boolean_options());
    items.push(is_default);

    let mut is_root = field(
        labels,
        "is_root",
        FieldCategory::Radios,
        3,
        flag_default(current.is_root),
    );
    is_root.options = Some(boolean_options());
    items.push(is_root);

    EditorForm {
        selection: selection.clone(),
        items,
        default_show: if selection.is_new() {
            DEFAULT_SHOW_NEW
        } else {
            DEFAULT_SHOW_NAMED
        },
        can_remove: !selection.is_new(),
    }
}

fn field(
    labels: &dyn LabelLookup,
    name: &str,
    category: FieldCategory,
    span: u8,
    default_value: Value,
) -> FieldDescriptor {
    FieldDescriptor {
        name: name.to_string(),
        label: labels.label(name),
        placeholder: labels.placeholder(name),
        default_value,
        span,
        category,
        required: false,
        rows: None,
        options: None,
    }
}

/// Unset text fields default to the empty string
fn text_default(stored: Option<&str>) -> Value {
    Value::String(stored.unwrap_or_default().to_string())
}

/// Unset flags default to `null`, matching the clearing radio option
fn flag_default(stored: Option<bool>) -> Value {
    stored.map_or(Value::Null, Value::Bool)
}
