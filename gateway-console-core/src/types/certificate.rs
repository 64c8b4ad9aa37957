//! Certificate record type and partial-update merging

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::FieldValues;

/// Named TLS material record stored in the gateway configuration.
///
/// Every field is optional: a record starts empty and is filled in by editor
/// saves. Field names double as the wire keys submitted by editor surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// PEM certificate body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_cert: Option<String>,

    /// PEM private key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_key: Option<String>,

    /// PEM intermediate chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_chain: Option<String>,

    /// Comma-delimited domain list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<String>,

    /// ACME provider id (e.g. `lets_encrypt`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acme: Option<String>,

    /// Serve as the default certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// Record is a root/CA certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_root: Option<bool>,
}

impl Certificate {
    /// Apply a partial value map submitted by an editor surface.
    ///
    /// Keys absent from the map leave the field unchanged; a JSON `null`
    /// clears the field. The `name` routing key is skipped (it addresses the
    /// record, it is not part of it). Unknown keys and mistyped values are
    /// rejected.
    pub fn merge_values(&mut self, values: &FieldValues) -> CoreResult<()> {
        for (key, value) in values {
            match key.as_str() {
                "name" => {}
                "tls_cert" => self.tls_cert = expect_string(key, value)?,
                "tls_key" => self.tls_key = expect_string(key, value)?,
                "tls_chain" => self.tls_chain = expect_string(key, value)?,
                "domains" => self.domains = expect_string(key, value)?,
                "acme" => self.acme = expect_string(key, value)?,
                "is_default" => self.is_default = expect_bool(key, value)?,
                "is_root" => self.is_root = expect_bool(key, value)?,
                other => {
                    return Err(CoreError::ValidationError(format!(
                        "unknown certificate field: {other}"
                    )))
                }
            }
        }
        Ok(())
    }

    /// Domains as a list: split on commas, trimmed, empties dropped
    #[must_use]
    pub fn domain_list(&self) -> Vec<String> {
        self.domains
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Whether every field is unset
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tls_cert.is_none()
            && self.tls_key.is_none()
            && self.tls_chain.is_none()
            && self.domains.is_none()
            && self.acme.is_none()
            && self.is_default.is_none()
            && self.is_root.is_none()
    }

    /// Semantic validation applied before a record is persisted.
    ///
    /// Non-empty PEM fields must carry well-formed material; unset or blank
    /// fields pass (the editor exists to fill them in incrementally).
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(pem) = non_blank(self.tls_cert.as_deref()) {
            crate::tls::validate_pem_certificates(pem)?;
        }
        if let Some(pem) = non_blank(self.tls_chain.as_deref()) {
            crate::tls::validate_pem_certificates(pem)?;
        }
        if let Some(pem) = non_blank(self.tls_key.as_deref()) {
            crate::tls::validate_pem_key(pem)?;
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn expect_string(field: &str, value: &Value) -> CoreResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(CoreError::ValidationError(format!(
            "field '{field}' expects a string value"
        ))),
    }
}

fn expect_bool(field: &str, value: &Value) -> CoreResult<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        _ => Err(CoreError::ValidationError(format!(
            "field '{field}' expects a boolean value"
        ))),
    }
}
