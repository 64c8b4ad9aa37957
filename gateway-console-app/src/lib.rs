//! Platform-agnostic application bootstrap for Gateway Console.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter
//! injection). Every frontend constructs the state once at startup and hands
//! the editor to its surfaces.

pub mod adapters;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gateway_console_core::error::{CoreError, CoreResult};
use gateway_console_core::services::{CertificateEditor, EditorContext};
use gateway_console_core::traits::{
    ConfigRegistry, DefaultLabels, InMemoryUrlState, LabelLookup, UrlState,
};

/// Platform-agnostic application state.
///
/// Holds the `EditorContext` and the editor built on top of it.
pub struct AppState {
    /// Editor context (holds all injected adapters)
    pub ctx: Arc<EditorContext>,
    /// Certificate editor
    pub certificate_editor: Arc<CertificateEditor>,
    /// Whether the startup check has completed
    pub startup_complete: AtomicBool,
}

impl AppState {
    /// Run the startup sequence.
    ///
    /// This should be called before the app is ready to serve requests.
    pub async fn run_startup(&self) -> CoreResult<()> {
        self.run_config_check().await;
        Ok(())
    }

    /// Load the configuration once and report on it. Sets `startup_complete`
    /// to `true` when done.
    ///
    /// Records that fail validation are logged and left in place: the editor
    /// exists to fix them, so startup never refuses to come up over one.
    pub async fn run_config_check(&self) {
        match self.ctx.load_config().await {
            Ok(config) => {
                log::info!(
                    "Configuration loaded: {} certificates",
                    config.certificates.len()
                );
                for (name, certificate) in &config.certificates {
                    if let Err(e) = certificate.validate() {
                        log::warn!("Certificate {name} failed validation: {e}");
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to load configuration: {e}");
            }
        }
        self.startup_complete.store(true, Ordering::SeqCst);
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `config_registry` - where the gateway configuration lives
///
/// # Optional
/// - `url_state` - defaults to `InMemoryUrlState`
/// - `labels` - defaults to `DefaultLabels`
pub struct AppStateBuilder {
    config_registry: Option<Arc<dyn ConfigRegistry>>,
    url_state: Option<Arc<dyn UrlState>>,
    labels: Option<Arc<dyn LabelLookup>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_registry: None,
            url_state: None,
            labels: None,
        }
    }

    #[must_use]
    pub fn config_registry(mut self, registry: Arc<dyn ConfigRegistry>) -> Self {
        self.config_registry = Some(registry);
        self
    }

    #[must_use]
    pub fn url_state(mut self, url_state: Arc<dyn UrlState>) -> Self {
        self.url_state = Some(url_state);
        self
    }

    #[must_use]
    pub fn labels(mut self, labels: Arc<dyn LabelLookup>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let config_registry = self.config_registry.ok_or_else(|| {
            CoreError::ValidationError("config_registry is required".to_string())
        })?;
        let url_state = self
            .url_state
            .unwrap_or_else(|| Arc::new(InMemoryUrlState::new()));
        let labels = self.labels.unwrap_or_else(|| Arc::new(DefaultLabels));

        let ctx = Arc::new(EditorContext::new(config_registry, url_state, labels));
        let certificate_editor = Arc::new(CertificateEditor::new(Arc::clone(&ctx)));

        Ok(AppState {
            ctx,
            certificate_editor,
            startup_complete: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
