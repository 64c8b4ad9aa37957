//! Utility modules.

/// Query-string parsing and formatting helpers.
pub mod query;
