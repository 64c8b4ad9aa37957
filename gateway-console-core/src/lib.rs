//! Gateway Console Core Library
//!
//! Provides the editor logic of the gateway configuration console, including:
//! - Selection handling synced to a URL query parameter (Selection Controller)
//! - Schema-driven field descriptor lists for generic form surfaces
//! - Certificate save/remove orchestration against a configuration registry
//!
//! This library is platform-independent: persistence and URL state are
//! abstracted through traits so the same editor drives web, TUI, and desktop
//! frontends.

pub mod error;
pub mod services;
pub mod tls;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{CertificateEditor, EditorContext, SelectionController};
pub use traits::{ConfigRegistry, LabelLookup, UrlObserver, UrlState};
