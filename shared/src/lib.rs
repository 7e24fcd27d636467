//! Shared types for the cooperative member system
//!
//! Wire models and enum domains used by both the HTTP client and the
//! member-intake wizard: coded enums, raw code-or-label values, the server
//! member record (PascalCase), create/update payloads (camelCase), and the
//! API response envelope.

pub mod enums;
pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use enums::{
    AddressType, BenefitType, CivilStatus, CodedEnum, EducationAttainmentType, Gender,
    MemberStatus, MembershipType, RelationshipType,
};
pub use response::ApiResponse;
pub use types::CodeOrLabel;
