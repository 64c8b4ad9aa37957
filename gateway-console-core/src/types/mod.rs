//! Type definition module

mod certificate;
mod config;
mod form;
mod selection;

pub use certificate::Certificate;
pub use config::{Config, FieldValues, ResourceKind};
pub use form::{
    boolean_options, string_options, EditorForm, FieldCategory, FieldDescriptor, FieldOption,
};
pub use selection::{display_order, validate_resource_name, Selection, NEW_RESOURCE_NAME};
