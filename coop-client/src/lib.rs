//! Coop Client - HTTP client for the member API
//!
//! Provides network-based HTTP calls to the cooperative's member API, plus
//! the [`MemberApi`] trait the intake wizard talks through so tests can
//! substitute a recording mock.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::MemberApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{MemberCreate, MemberRecord, MemberUpdate};
pub use shared::response::ApiResponse;
