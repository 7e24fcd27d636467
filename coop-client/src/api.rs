//! Member API trait
//!
//! The seam between the intake wizard and the network. The wizard holds an
//! `Arc<dyn MemberApi>`; production wires in [`HttpClient`], tests wire in a
//! recording mock.

use crate::{ApiResponse, ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use shared::models::{MemberCreate, MemberRecord, MemberUpdate};

/// Create/update operations of the member API
#[async_trait]
pub trait MemberApi: Send + Sync {
    /// Create a new member, returning the server's stored record
    async fn create_member(&self, payload: &MemberCreate) -> ClientResult<MemberRecord>;

    /// Update an existing member, returning the refreshed record
    async fn update_member(&self, id: i64, payload: &MemberUpdate) -> ClientResult<MemberRecord>;
}

#[async_trait]
impl MemberApi for HttpClient {
    async fn create_member(&self, payload: &MemberCreate) -> ClientResult<MemberRecord> {
        tracing::debug!("POST /api/members");
        self.post::<ApiResponse<MemberRecord>, _>("/api/members", payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing member data".to_string()))
    }

    async fn update_member(&self, id: i64, payload: &MemberUpdate) -> ClientResult<MemberRecord> {
        tracing::debug!(member_id = id, "PUT /api/members/{id}");
        self.put::<ApiResponse<MemberRecord>, _>(&format!("/api/members/{}", id), payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing member data".to_string()))
    }
}
