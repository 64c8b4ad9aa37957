//! Field label lookup abstract Trait

/// Label Lookup Trait
///
/// Resolves the human-readable label and placeholder for a field name.
/// Message loading and localization stay outside this crate; frontends that
/// translate inject their own implementation. `DefaultLabels` ships the
/// built-in English table.
pub trait LabelLookup: Send + Sync {
    /// Human-readable label for a field
    fn label(&self, field: &str) -> String;

    /// Input placeholder for a field (may be empty)
    fn placeholder(&self, field: &str) -> String;
}

/// Label and placeholder per certificate field, English
const CERTIFICATE_LABELS: &[(&str, &str, &str)] = &[
    ("name", "Name", "Certificate name"),
    ("tls_cert", "TLS Certificate", "PEM encoded certificate"),
    ("tls_key", "TLS Key", "PEM encoded private key"),
    ("tls_chain", "TLS Chain", "PEM encoded certificate chain"),
    ("domains", "Domains", "Comma separated domain list"),
    ("acme", "ACME", ""),
    ("is_default", "Default", ""),
    ("is_root", "Root CA", ""),
];

/// Built-in English label table
///
/// Unknown fields fall back to a humanized form of the field name
/// (`some_field` -> `Some Field`) with an empty placeholder.
pub struct DefaultLabels;

impl DefaultLabels {
    fn entry(field: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
        CERTIFICATE_LABELS.iter().find(|(name, _, _)| *name == field)
    }

    fn humanize(field: &str) -> String {
        field
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl LabelLookup for DefaultLabels {
    fn label(&self, field: &str) -> String {
        Self::entry(field).map_or_else(|| Self::humanize(field), |(_, label, _)| (*label).to_string())
    }

    fn placeholder(&self, field: &str) -> String {
        Self::entry(field).map_or_else(String::new, |(_, _, placeholder)| (*placeholder).to_string())
    }
}
