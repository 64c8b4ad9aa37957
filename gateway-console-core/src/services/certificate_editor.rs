//! Certificate editor service
//!
//! Orchestrates the editor pattern end to end: selection (through the
//! controller), form derivation, and save/remove against the injected
//! registry. Mutations are single-shot; disabling the action while a call
//! is in flight is the surface's responsibility.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::services::{build_certificate_form, EditorContext, SelectionController};
use crate::types::{
    display_order, validate_resource_name, EditorForm, FieldValues, ResourceKind, Selection,
};

#[cfg(feature = "x509")]
use crate::tls::CertificateInfo;

/// Certificate editor
pub struct CertificateEditor {
    ctx: Arc<EditorContext>,
    selection: Arc<SelectionController>,
}

impl CertificateEditor {
    /// Create an editor bound to the context's URL state.
    ///
    /// The initial selection is derived from the URL at this point.
    #[must_use]
    pub fn new(ctx: Arc<EditorContext>) -> Self {
        let selection = SelectionController::attach(Arc::clone(ctx.url_state()));
        Self { ctx, selection }
    }

    /// Current selection
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection.current()
    }

    /// Select a named resource (it does not have to exist yet)
    pub fn select_name(&self, name: &str) {
        self.selection.select(&Selection::Named(name.to_string()));
    }

    /// Select the new-entry sentinel
    pub fn select_new(&self) {
        self.selection.select(&Selection::New);
    }

    /// Resource names in display order: the sentinel first, then sorted
    pub async fn display_names(&self) -> CoreResult<Vec<String>> {
        let config = self.ctx.load_config().await?;
        Ok(display_order(config.certificate_names()))
    }

    /// Build the editor form for the current selection
    pub async fn form(&self) -> CoreResult<EditorForm> {
        let selection = self.selection.current();
        log::debug!("Building certificate form for {}", selection.as_name());

        let config = self.ctx.load_config().await?;
        Ok(build_certificate_form(
            &selection,
            &config.certificates,
            self.ctx.labels().as_ref(),
        ))
    }

    /// Persist the submitted field values and return the saved name.
    ///
    /// At the sentinel the target name comes from the submitted `name` value
    /// and the save creates the record. A named selection keeps its name
    /// (names are immutable after creation; a submitted `name` is ignored).
    /// On success the saved record becomes the selection before this method
    /// returns. On failure the error propagates and the selection stays put.
    pub async fn save(&self, values: FieldValues) -> CoreResult<String> {
        let name = match self.selection.current() {
            Selection::New => submitted_name(&values)?,
            Selection::Named(name) => name,
        };

        self.ctx
            .config_registry()
            .update(ResourceKind::Certificate, &name, &values)
            .await?;

        self.selection.select(&Selection::Named(name.clone()));
        log::info!("Saved certificate: {name}");
        Ok(name)
    }

    /// Remove the selected record.
    ///
    /// Requires a named selection; at the sentinel there is nothing to
    /// remove. On success the selection falls back to the sentinel before
    /// this method returns; on failure it stays on the doomed name.
    pub async fn remove(&self) -> CoreResult<()> {
        let Selection::Named(name) = self.selection.current() else {
            return Err(CoreError::NoResourceSelected);
        };

        self.ctx
            .config_registry()
            .remove(ResourceKind::Certificate, &name)
            .await?;

        self.selection.select(&Selection::New);
        log::info!("Removed certificate: {name}");
        Ok(())
    }

    /// Parsed details of the selected record's certificate body.
    ///
    /// `Ok(None)` at the sentinel or when the record holds no certificate
    /// material; a selected name without a stored record is an error.
    #[cfg(feature = "x509")]
    pub async fn inspect(&self) -> CoreResult<Option<CertificateInfo>> {
        let Selection::Named(name) = self.selection.current() else {
            return Ok(None);
        };

        let config = self.ctx.load_config().await?;
        let certificate =
            config
                .certificates
                .get(&name)
                .ok_or_else(|| CoreError::ResourceNotFound {
                    kind: ResourceKind::Certificate,
                    name: name.clone(),
                })?;

        match certificate.tls_cert.as_deref() {
            Some(pem) if !pem.trim().is_empty() => {
                Ok(Some(crate::tls::parse_certificate_info(pem)?))
            }
            _ => Ok(None),
        }
    }
}

/// Resolve the target name of a sentinel save from the submitted values
fn submitted_name(values: &FieldValues) -> CoreResult<String> {
    let name = values
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();
    validate_resource_name(name)?;
    Ok(name.to_string())
}
