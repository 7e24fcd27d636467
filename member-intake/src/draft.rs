//! In-memory form state for the intake wizard
//!
//! A [`MemberDraft`] is created when the modal opens (blank for create,
//! hydrated for update), mutated only through the wizard, and discarded on
//! close. Text fields use `""` for blank; the submission transformer turns
//! blanks back into omitted JSON fields.
//!
//! Every collection entry carries two identifiers:
//! - `key`: a stable synthetic key assigned at hydration/insertion, so UI
//!   rows keep their identity across reorders
//! - `origin_id`: the originating server record id (update mode), read
//!   directly at submit time — never re-derived from array position

use rust_decimal::Decimal;
use shared::enums::{
    AddressType, BenefitType, CivilStatus, EducationAttainmentType, Gender, MemberStatus,
    MembershipType, RelationshipType,
};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Address entry of the draft
#[derive(Debug, Clone, PartialEq)]
pub struct AddressEntry {
    pub key: Uuid,
    pub origin_id: Option<i64>,
    pub address_type: AddressType,
    pub street_address1: String,
    pub street_address2: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
    pub is_primary: bool,
    pub is_current: bool,
    pub notes: String,
}

impl AddressEntry {
    pub fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
            origin_id: None,
            address_type: AddressType::Home,
            street_address1: String::new(),
            street_address2: String::new(),
            city: String::new(),
            province: String::new(),
            postal_code: String::new(),
            country: String::new(),
            is_primary: false,
            is_current: true,
            notes: String::new(),
        }
    }
}

impl Default for AddressEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Contact number entry of the draft
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEntry {
    pub key: Uuid,
    pub origin_id: Option<i64>,
    pub phone_number: String,
    pub is_primary: bool,
}

impl ContactEntry {
    pub fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
            origin_id: None,
            phone_number: String::new(),
            is_primary: false,
        }
    }
}

impl Default for ContactEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Dependent/beneficiary entry of the draft
#[derive(Debug, Clone, PartialEq)]
pub struct DependentEntry {
    pub key: Uuid,
    pub origin_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub relationship: RelationshipType,
    pub date_of_birth: String,
    pub gender_type: Gender,
    pub address: String,
    pub is_dependent: bool,
    pub is_beneficiary: bool,
    pub benefit_types: BTreeSet<BenefitType>,
}

impl DependentEntry {
    pub fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
            origin_id: None,
            first_name: String::new(),
            last_name: String::new(),
            middle_name: String::new(),
            relationship: RelationshipType::Spouse,
            date_of_birth: String::new(),
            gender_type: Gender::Male,
            address: String::new(),
            is_dependent: true,
            is_beneficiary: false,
            benefit_types: BTreeSet::new(),
        }
    }

    /// Toggle a benefit type on or off
    pub fn toggle_benefit(&mut self, benefit: BenefitType) {
        if !self.benefit_types.remove(&benefit) {
            self.benefit_types.insert(benefit);
        }
    }
}

impl Default for DependentEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Education background entry of the draft
#[derive(Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub key: Uuid,
    pub origin_id: Option<i64>,
    pub education_attainment_type: EducationAttainmentType,
    pub school_name: String,
    pub course: String,
    pub year_started: String,
    pub year_completed: String,
    pub is_highest_attainment: bool,
    pub notes: String,
}

impl EducationEntry {
    pub fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
            origin_id: None,
            education_attainment_type: EducationAttainmentType::CollegeGraduate,
            school_name: String::new(),
            course: String::new(),
            year_started: String::new(),
            year_completed: String::new(),
            is_highest_attainment: false,
            notes: String::new(),
        }
    }
}

impl Default for EducationEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Income source entry of the draft
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeEntry {
    pub key: Uuid,
    pub origin_id: Option<i64>,
    pub source: String,
    pub income_amount: Decimal,
    pub is_primary: bool,
}

impl IncomeEntry {
    pub fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
            origin_id: None,
            source: String::new(),
            income_amount: Decimal::ZERO,
            is_primary: false,
        }
    }
}

impl Default for IncomeEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// File staged for upload after the member is saved
///
/// Never serialized into the member payload; a separate upload call
/// consumes it. Hydration produces zero-byte placeholders since the server
/// exposes attachment metadata, not content.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile {
    pub local_id: Uuid,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Complete in-memory form state of one wizard instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub date_of_birth: String,
    pub birthplace: String,
    pub gender_type: Gender,
    pub civil_status: CivilStatus,
    pub tin: String,
    pub bod_number: String,
    pub status: MemberStatus,
    pub membership_type: MembershipType,
    pub membership_date: String,
    pub termination_date: String,
    pub notes: String,
    pub addresses: Vec<AddressEntry>,
    pub contact_numbers: Vec<ContactEntry>,
    pub dependents: Vec<DependentEntry>,
    pub educations: Vec<EducationEntry>,
    pub incomes: Vec<IncomeEntry>,
    pub file_attachments: Vec<PendingFile>,
    /// Field paths whose enum value fell back to the domain default during
    /// hydration, for upstream data-quality reporting
    pub defaulted_fields: Vec<String>,
}

impl MemberDraft {
    /// Blank create-mode draft
    pub fn blank() -> Self {
        Self::default()
    }

    // ========== Entry operations ==========

    pub fn add_address(&mut self) -> &mut AddressEntry {
        self.addresses.push(AddressEntry::new());
        self.addresses.last_mut().unwrap()
    }

    pub fn remove_address(&mut self, index: usize) {
        if index < self.addresses.len() {
            self.addresses.remove(index);
        }
    }

    pub fn add_contact(&mut self) -> &mut ContactEntry {
        self.contact_numbers.push(ContactEntry::new());
        self.contact_numbers.last_mut().unwrap()
    }

    pub fn remove_contact(&mut self, index: usize) {
        if index < self.contact_numbers.len() {
            self.contact_numbers.remove(index);
        }
    }

    pub fn add_dependent(&mut self) -> &mut DependentEntry {
        self.dependents.push(DependentEntry::new());
        self.dependents.last_mut().unwrap()
    }

    pub fn remove_dependent(&mut self, index: usize) {
        if index < self.dependents.len() {
            self.dependents.remove(index);
        }
    }

    pub fn add_education(&mut self) -> &mut EducationEntry {
        self.educations.push(EducationEntry::new());
        self.educations.last_mut().unwrap()
    }

    pub fn remove_education(&mut self, index: usize) {
        if index < self.educations.len() {
            self.educations.remove(index);
        }
    }

    pub fn add_income(&mut self) -> &mut IncomeEntry {
        self.incomes.push(IncomeEntry::new());
        self.incomes.last_mut().unwrap()
    }

    pub fn remove_income(&mut self, index: usize) {
        if index < self.incomes.len() {
            self.incomes.remove(index);
        }
    }

    /// Stage a file for upload, inferring the MIME type from its name
    pub fn add_file(&mut self, name: impl Into<String>, data: Vec<u8>) -> &PendingFile {
        let name = name.into();
        let mime_type = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        self.file_attachments.push(PendingFile {
            local_id: Uuid::new_v4(),
            size: data.len() as u64,
            mime_type,
            name,
            data,
        });
        self.file_attachments.last().unwrap()
    }

    pub fn remove_file(&mut self, local_id: Uuid) {
        self.file_attachments.retain(|f| f.local_id != local_id);
    }
}
