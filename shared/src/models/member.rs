//! Member Model
//!
//! Inbound server records (PascalCase) and outbound create/update payloads
//! (camelCase). The server exposes two redundant representations of the
//! primary address and contact: the nested collections and the flattened
//! `PrimaryAddress` / `PrimaryContactNumber` convenience strings. Both are
//! kept here; reconciling them is the intake wizard's job.

use crate::enums::{
    AddressType, BenefitType, CivilStatus, EducationAttainmentType, Gender, MemberStatus,
    MembershipType, RelationshipType,
};
use crate::types::CodeOrLabel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Inbound server records (PascalCase)
// ============================================================================

/// Member record as returned by the member API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MemberRecord {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub birthplace: Option<String>,
    /// Numeric code or label string, depending on API version
    pub gender_type: Option<CodeOrLabel>,
    pub civil_status: Option<CodeOrLabel>,
    pub tin: Option<String>,
    pub bod_number: Option<String>,
    pub status: Option<CodeOrLabel>,
    pub membership_type: Option<CodeOrLabel>,
    pub membership_date: Option<String>,
    pub termination_date: Option<String>,
    pub notes: Option<String>,
    /// Flattened convenience copy of the primary address line
    pub primary_address: Option<String>,
    /// Flattened convenience copy of the primary contact number
    pub primary_contact_number: Option<String>,
    pub addresses: Vec<AddressRecord>,
    pub contact_numbers: Vec<ContactRecord>,
    pub dependents: Vec<DependentRecord>,
    pub educations: Vec<EducationRecord>,
    pub incomes: Vec<IncomeRecord>,
    pub file_attachments: Vec<AttachmentRecord>,
}

/// Address entry of a member record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AddressRecord {
    pub id: Option<i64>,
    pub address_type: Option<CodeOrLabel>,
    pub street_address1: Option<String>,
    pub street_address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub is_primary: bool,
    pub is_current: bool,
    pub notes: Option<String>,
}

/// Contact number entry of a member record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContactRecord {
    pub id: Option<i64>,
    pub phone_number: Option<String>,
    pub is_primary: bool,
}

/// Dependent/beneficiary entry of a member record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DependentRecord {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub relationship: Option<CodeOrLabel>,
    pub date_of_birth: Option<String>,
    pub gender_type: Option<CodeOrLabel>,
    pub address: Option<String>,
    pub is_dependent: bool,
    pub is_beneficiary: bool,
    /// Arbitrary JSON; older servers send labels, newer ones codes, and
    /// malformed rows are tolerated (non-array normalizes to empty)
    pub benefit_types: Option<serde_json::Value>,
}

/// Education background entry of a member record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EducationRecord {
    pub id: Option<i64>,
    pub education_attainment_type: Option<CodeOrLabel>,
    pub school_name: Option<String>,
    pub course: Option<String>,
    pub year_started: Option<String>,
    pub year_completed: Option<String>,
    pub is_highest_attainment: bool,
    pub notes: Option<String>,
}

/// Income source entry of a member record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IncomeRecord {
    pub id: Option<i64>,
    pub source: Option<String>,
    pub income_amount: Option<Decimal>,
    pub is_primary: bool,
}

/// File attachment metadata (content is never inlined)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttachmentRecord {
    pub id: Option<i64>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub content_type: Option<String>,
}

// ============================================================================
// Outbound payloads (camelCase)
// ============================================================================

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    pub gender_type: Gender,
    pub civil_status: CivilStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bod_number: Option<String>,
    pub status: MemberStatus,
    pub membership_type: MembershipType,
    pub membership_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub addresses: Vec<AddressCreate>,
    pub contact_numbers: Vec<ContactCreate>,
    pub dependents: Vec<DependentCreate>,
    pub educations: Vec<EducationCreate>,
    pub incomes: Vec<IncomeCreate>,
}

/// Update member payload
///
/// Identical in shape to [`MemberCreate`] except every collection entry
/// carries a nullable `id`: the originating record id for existing entries,
/// JSON `null` for entries added in this session. The member id itself
/// travels in the URL, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    pub gender_type: Gender,
    pub civil_status: CivilStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bod_number: Option<String>,
    pub status: MemberStatus,
    pub membership_type: MembershipType,
    pub membership_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub addresses: Vec<AddressUpdate>,
    pub contact_numbers: Vec<ContactUpdate>,
    pub dependents: Vec<DependentUpdate>,
    pub educations: Vec<EducationUpdate>,
    pub incomes: Vec<IncomeUpdate>,
}

/// Address payload (create)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressCreate {
    pub address_type: AddressType,
    pub street_address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address2: Option<String>,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
    pub is_primary: bool,
    pub is_current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Address payload (update, with nullable origin id)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdate {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub address: AddressCreate,
}

/// Contact number payload (create)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreate {
    pub phone_number: String,
    pub is_primary: bool,
}

/// Contact number payload (update)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub contact: ContactCreate,
}

/// Dependent payload (create)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentCreate {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub relationship: RelationshipType,
    pub date_of_birth: String,
    pub gender_type: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub is_dependent: bool,
    pub is_beneficiary: bool,
    pub benefit_types: Vec<BenefitType>,
}

/// Dependent payload (update)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentUpdate {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub dependent: DependentCreate,
}

/// Education payload (create)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationCreate {
    pub education_attainment_type: EducationAttainmentType,
    pub school_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub year_started: String,
    pub year_completed: String,
    pub is_highest_attainment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Education payload (update)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationUpdate {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub education: EducationCreate,
}

/// Income payload (create)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeCreate {
    pub source: String,
    pub income_amount: Decimal,
    pub is_primary: bool,
}

/// Income payload (update)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpdate {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub income: IncomeCreate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_pascal_case() {
        let json = r#"{
            "Id": 42,
            "FirstName": "Juan",
            "LastName": "Dela Cruz",
            "GenderType": "male",
            "CivilStatus": 2,
            "PrimaryAddress": "123 Main St",
            "Addresses": [
                {"Id": 7, "StreetAddress1": "123 Main St", "City": "Quezon City", "Province": "Metro Manila", "IsPrimary": true}
            ],
            "ContactNumbers": [{"Id": 9, "PhoneNumber": "09171234567", "IsPrimary": true}]
        }"#;
        let record: MemberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(42));
        assert_eq!(record.first_name.as_deref(), Some("Juan"));
        assert_eq!(record.gender_type, Some(CodeOrLabel::Label("male".to_string())));
        assert_eq!(record.civil_status, Some(CodeOrLabel::Code(2)));
        assert_eq!(record.addresses.len(), 1);
        assert_eq!(record.addresses[0].id, Some(7));
        assert!(record.addresses[0].is_primary);
        assert!(record.dependents.is_empty());
    }

    #[test]
    fn test_create_serializes_camel_case_without_ids() {
        let payload = MemberCreate {
            first_name: "Juan".to_string(),
            last_name: "Dela Cruz".to_string(),
            middle_name: None,
            date_of_birth: "1990-01-01".to_string(),
            birthplace: None,
            gender_type: Gender::Male,
            civil_status: CivilStatus::Single,
            tin: None,
            bod_number: None,
            status: MemberStatus::Active,
            membership_type: MembershipType::Regular,
            membership_date: "2026-08-06".to_string(),
            termination_date: None,
            notes: None,
            addresses: vec![AddressCreate {
                address_type: AddressType::Home,
                street_address1: "123 Main St".to_string(),
                street_address2: None,
                city: "Quezon City".to_string(),
                province: "Metro Manila".to_string(),
                postal_code: "1100".to_string(),
                country: "Philippines".to_string(),
                is_primary: true,
                is_current: true,
                notes: None,
            }],
            contact_numbers: vec![ContactCreate {
                phone_number: "09171234567".to_string(),
                is_primary: true,
            }],
            dependents: vec![],
            educations: vec![],
            incomes: vec![],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["firstName"], "Juan");
        assert_eq!(json["genderType"], 1);
        assert_eq!(json["addresses"][0]["streetAddress1"], "123 Main St");
        assert!(json["addresses"][0].get("id").is_none());
        assert!(!serde_json::to_string(&payload).unwrap().contains("\"id\""));
    }

    #[test]
    fn test_update_entry_serializes_null_id_for_new_entries() {
        let entry = ContactUpdate {
            id: None,
            contact: ContactCreate {
                phone_number: "09181234567".to_string(),
                is_primary: false,
            },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["id"].is_null());
        assert_eq!(json["phoneNumber"], "09181234567");

        let entry = ContactUpdate { id: Some(9), ..entry };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 9);
    }
}
