//! Platform-agnostic registry adapters for frontends without their own store.

#[cfg(feature = "file-store")]
mod file_registry;

#[cfg(feature = "file-store")]
pub use file_registry::FileConfigRegistry;
