//! Business logic service layer

mod certificate_editor;
mod certificate_form;
mod selection_controller;

pub use certificate_editor::CertificateEditor;
pub use certificate_form::{build_certificate_form, suggested_rows};
pub use selection_controller::{RESOURCE_PARAM, SelectionController};

use std::sync::Arc;

use crate::error::CoreResult;
use crate::traits::{ConfigRegistry, LabelLookup, UrlState};
use crate::types::Config;

/// Editor context - holds all dependencies
///
/// The platform layer creates this context and injects its own registry and
/// URL state implementations.
pub struct EditorContext {
    /// Configuration registry
    config_registry: Arc<dyn ConfigRegistry>,
    /// URL query-parameter state
    url_state: Arc<dyn UrlState>,
    /// Field label lookup
    labels: Arc<dyn LabelLookup>,
}

impl EditorContext {
    /// Create an editor context
    #[must_use]
    pub fn new(
        config_registry: Arc<dyn ConfigRegistry>,
        url_state: Arc<dyn UrlState>,
        labels: Arc<dyn LabelLookup>,
    ) -> Self {
        Self {
            config_registry,
            url_state,
            labels,
        }
    }

    /// Configuration registry
    #[must_use]
    pub fn config_registry(&self) -> &Arc<dyn ConfigRegistry> {
        &self.config_registry
    }

    /// URL state
    #[must_use]
    pub fn url_state(&self) -> &Arc<dyn UrlState> {
        &self.url_state
    }

    /// Field label lookup
    #[must_use]
    pub fn labels(&self) -> &Arc<dyn LabelLookup> {
        &self.labels
    }

    /// Load the current configuration snapshot
    pub async fn load_config(&self) -> CoreResult<Config> {
        self.config_registry.load().await
    }
}
