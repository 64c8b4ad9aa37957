//! Collaborator abstraction trait definitions

mod config_registry;
mod labels;
mod url_state;

pub use config_registry::{ConfigRegistry, InMemoryConfigRegistry};
pub use labels::{DefaultLabels, LabelLookup};
pub use url_state::{InMemoryUrlState, UrlObserver, UrlParams, UrlState};
