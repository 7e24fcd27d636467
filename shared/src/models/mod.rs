//! Data models
//!
//! Wire shapes shared between the coop API client and the intake wizard.
//! Server records deserialize from PascalCase; create/update payloads
//! serialize to camelCase. All IDs are `i64`.

pub mod member;

// Re-exports
pub use member::*;
