//! Update-mode initialization
//!
//! Builds a [`MemberDraft`] from a server member record. The server exposes
//! two redundant representations of the primary address/contact — the
//! nested collections and the flattened `PrimaryAddress` /
//! `PrimaryContactNumber` strings — and they may disagree. The rules here:
//!
//! - prefer the explicit collection when non-empty
//! - otherwise synthesize a single entry from the convenience field
//! - if the collection exists but its first entry's key text field is
//!   blank, backfill that field (first entry only) from the convenience
//!   field
//!
//! Every entry is tagged with its originating record id (`origin_id`) and a
//! fresh synthetic `key` here, so update submission never has to correlate
//! entries by array position.

use crate::draft::{
    AddressEntry, ContactEntry, DependentEntry, EducationEntry, IncomeEntry, MemberDraft,
    PendingFile,
};
use crate::normalize::{normalize, normalize_benefits};
use shared::enums::CodedEnum;
use shared::models::MemberRecord;
use shared::types::CodeOrLabel;
use uuid::Uuid;

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Normalize one enum field, recording its path when the fallback was used
fn tracked<E: CodedEnum>(
    raw: Option<&CodeOrLabel>,
    path: String,
    defaulted_fields: &mut Vec<String>,
) -> E {
    let n = normalize::<E>(raw);
    if n.defaulted {
        defaulted_fields.push(path);
    }
    n.value
}

/// Build a draft from a server record (update mode)
pub fn hydrate(record: &MemberRecord) -> MemberDraft {
    let mut defaulted_fields = Vec::new();

    // ========== Addresses ==========
    let mut addresses: Vec<AddressEntry> = if !record.addresses.is_empty() {
        record
            .addresses
            .iter()
            .enumerate()
            .map(|(i, r)| AddressEntry {
                key: Uuid::new_v4(),
                origin_id: r.id,
                address_type: tracked(
                    r.address_type.as_ref(),
                    format!("addresses.{i}.addressType"),
                    &mut defaulted_fields,
                ),
                street_address1: text(&r.street_address1),
                street_address2: text(&r.street_address2),
                city: text(&r.city),
                province: text(&r.province),
                postal_code: text(&r.postal_code),
                country: text(&r.country),
                is_primary: r.is_primary,
                is_current: r.is_current,
                notes: text(&r.notes),
            })
            .collect()
    } else {
        let mut entry = AddressEntry::new();
        entry.street_address1 = text(&record.primary_address);
        entry.is_primary = true;
        vec![entry]
    };
    // The collection and the convenience field may disagree; the first
    // entry's street is backfilled, the rest are left as sent.
    if let Some(first) = addresses.first_mut() {
        if is_blank(&first.street_address1) {
            if let Some(primary) = record.primary_address.as_deref() {
                if !is_blank(primary) {
                    first.street_address1 = primary.to_string();
                }
            }
        }
    }

    // ========== Contact numbers ==========
    let mut contact_numbers: Vec<ContactEntry> = if !record.contact_numbers.is_empty() {
        record
            .contact_numbers
            .iter()
            .map(|r| ContactEntry {
                key: Uuid::new_v4(),
                origin_id: r.id,
                phone_number: text(&r.phone_number),
                is_primary: r.is_primary,
            })
            .collect()
    } else {
        let mut entry = ContactEntry::new();
        entry.phone_number = text(&record.primary_contact_number);
        entry.is_primary = true;
        vec![entry]
    };
    if let Some(first) = contact_numbers.first_mut() {
        if is_blank(&first.phone_number) {
            if let Some(primary) = record.primary_contact_number.as_deref() {
                if !is_blank(primary) {
                    first.phone_number = primary.to_string();
                }
            }
        }
    }

    // ========== Dependents ==========
    let dependents: Vec<DependentEntry> = record
        .dependents
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let benefits = normalize_benefits(r.benefit_types.as_ref());
            if benefits.defaulted {
                defaulted_fields.push(format!("dependents.{i}.benefitTypes"));
            }
            DependentEntry {
                key: Uuid::new_v4(),
                origin_id: r.id,
                first_name: text(&r.first_name),
                last_name: text(&r.last_name),
                middle_name: text(&r.middle_name),
                relationship: tracked(
                    r.relationship.as_ref(),
                    format!("dependents.{i}.relationship"),
                    &mut defaulted_fields,
                ),
                date_of_birth: text(&r.date_of_birth),
                gender_type: tracked(
                    r.gender_type.as_ref(),
                    format!("dependents.{i}.genderType"),
                    &mut defaulted_fields,
                ),
                address: text(&r.address),
                is_dependent: r.is_dependent,
                is_beneficiary: r.is_beneficiary,
                benefit_types: benefits.value,
            }
        })
        .collect();

    // ========== Educations ==========
    let educations: Vec<EducationEntry> = record
        .educations
        .iter()
        .enumerate()
        .map(|(i, r)| EducationEntry {
            key: Uuid::new_v4(),
            origin_id: r.id,
            education_attainment_type: tracked(
                r.education_attainment_type.as_ref(),
                format!("educations.{i}.educationAttainmentType"),
                &mut defaulted_fields,
            ),
            school_name: text(&r.school_name),
            course: text(&r.course),
            year_started: text(&r.year_started),
            year_completed: text(&r.year_completed),
            is_highest_attainment: r.is_highest_attainment,
            notes: text(&r.notes),
        })
        .collect();

    // ========== Incomes ==========
    let incomes: Vec<IncomeEntry> = record
        .incomes
        .iter()
        .map(|r| IncomeEntry {
            key: Uuid::new_v4(),
            origin_id: r.id,
            source: text(&r.source),
            income_amount: r.income_amount.unwrap_or_default(),
            is_primary: r.is_primary,
        })
        .collect();

    // ========== File attachments ==========
    // Metadata only; content is never refetched at hydration time.
    let file_attachments: Vec<PendingFile> = record
        .file_attachments
        .iter()
        .map(|r| PendingFile {
            local_id: Uuid::new_v4(),
            name: text(&r.file_name),
            size: r.file_size.unwrap_or(0),
            mime_type: r
                .content_type
                .clone()
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            data: Vec::new(),
        })
        .collect();

    let draft = MemberDraft {
        first_name: text(&record.first_name),
        last_name: text(&record.last_name),
        middle_name: text(&record.middle_name),
        date_of_birth: text(&record.date_of_birth),
        birthplace: text(&record.birthplace),
        gender_type: tracked(
            record.gender_type.as_ref(),
            "genderType".to_string(),
            &mut defaulted_fields,
        ),
        civil_status: tracked(
            record.civil_status.as_ref(),
            "civilStatus".to_string(),
            &mut defaulted_fields,
        ),
        tin: text(&record.tin),
        bod_number: text(&record.bod_number),
        status: tracked(
            record.status.as_ref(),
            "status".to_string(),
            &mut defaulted_fields,
        ),
        membership_type: tracked(
            record.membership_type.as_ref(),
            "membershipType".to_string(),
            &mut defaulted_fields,
        ),
        membership_date: text(&record.membership_date),
        termination_date: text(&record.termination_date),
        notes: text(&record.notes),
        addresses,
        contact_numbers,
        dependents,
        educations,
        incomes,
        file_attachments,
        defaulted_fields,
    };

    tracing::debug!(
        member_id = ?record.id,
        addresses = draft.addresses.len(),
        contacts = draft.contact_numbers.len(),
        dependents = draft.dependents.len(),
        defaulted = draft.defaulted_fields.len(),
        "hydrated member draft"
    );
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::enums::{CivilStatus, Gender, MemberStatus};
    use shared::models::{AddressRecord, ContactRecord, DependentRecord};

    fn base_record() -> MemberRecord {
        MemberRecord {
            id: Some(42),
            first_name: Some("Juan".to_string()),
            last_name: Some("Dela Cruz".to_string()),
            gender_type: Some(CodeOrLabel::Label("male".to_string())),
            civil_status: Some(CodeOrLabel::Code(2)),
            ..Default::default()
        }
    }

    /// Entry keys are random by design; zero them before comparing drafts.
    fn scrub_keys(draft: &mut MemberDraft) {
        for e in &mut draft.addresses {
            e.key = Uuid::nil();
        }
        for e in &mut draft.contact_numbers {
            e.key = Uuid::nil();
        }
        for e in &mut draft.dependents {
            e.key = Uuid::nil();
        }
        for e in &mut draft.educations {
            e.key = Uuid::nil();
        }
        for e in &mut draft.incomes {
            e.key = Uuid::nil();
        }
        for f in &mut draft.file_attachments {
            f.local_id = Uuid::nil();
        }
    }

    #[test]
    fn test_scalars_coalesce() {
        let draft = hydrate(&base_record());
        assert_eq!(draft.first_name, "Juan");
        assert_eq!(draft.middle_name, "");
        assert_eq!(draft.gender_type, Gender::Male);
        assert_eq!(draft.civil_status, CivilStatus::Married);
        assert_eq!(draft.status, MemberStatus::Active);
        assert!(draft.defaulted_fields.is_empty());
    }

    #[test]
    fn test_prefers_collection_over_primary() {
        let mut record = base_record();
        record.primary_address = Some("CONVENIENCE".to_string());
        record.addresses = vec![AddressRecord {
            id: Some(7),
            street_address1: Some("123 Main St".to_string()),
            city: Some("Quezon City".to_string()),
            ..Default::default()
        }];
        let draft = hydrate(&record);
        assert_eq!(draft.addresses.len(), 1);
        assert_eq!(draft.addresses[0].street_address1, "123 Main St");
        assert_eq!(draft.addresses[0].origin_id, Some(7));
    }

    #[test]
    fn test_synthesizes_from_primary_when_collection_empty() {
        let mut record = base_record();
        record.primary_address = Some("123 Main St".to_string());
        record.primary_contact_number = Some("09171234567".to_string());
        let draft = hydrate(&record);
        assert_eq!(draft.addresses.len(), 1);
        assert_eq!(draft.addresses[0].street_address1, "123 Main St");
        assert!(draft.addresses[0].is_primary);
        assert_eq!(draft.addresses[0].origin_id, None);
        assert_eq!(draft.contact_numbers.len(), 1);
        assert_eq!(draft.contact_numbers[0].phone_number, "09171234567");
    }

    #[test]
    fn test_backfills_only_first_blank_street() {
        let mut record = base_record();
        record.primary_address = Some("123 Main St".to_string());
        record.addresses = vec![
            AddressRecord {
                id: Some(1),
                city: Some("Quezon City".to_string()),
                ..Default::default()
            },
            AddressRecord {
                id: Some(2),
                city: Some("Cebu City".to_string()),
                ..Default::default()
            },
        ];
        let draft = hydrate(&record);
        assert_eq!(draft.addresses[0].street_address1, "123 Main St");
        assert_eq!(draft.addresses[1].street_address1, "");
    }

    #[test]
    fn test_contact_backfill_from_convenience_field() {
        let mut record = base_record();
        record.primary_contact_number = Some("09171234567".to_string());
        record.contact_numbers = vec![ContactRecord {
            id: Some(3),
            phone_number: Some("  ".to_string()),
            is_primary: true,
        }];
        let draft = hydrate(&record);
        assert_eq!(draft.contact_numbers[0].phone_number, "09171234567");
        assert_eq!(draft.contact_numbers[0].origin_id, Some(3));
    }

    #[test]
    fn test_dependent_enums_and_benefits() {
        let mut record = base_record();
        record.dependents = vec![DependentRecord {
            id: Some(11),
            first_name: Some("Maria".to_string()),
            relationship: Some(CodeOrLabel::Label("daughter".to_string())),
            gender_type: Some(CodeOrLabel::Label("???".to_string())),
            benefit_types: Some(serde_json::json!(["medical", 3])),
            is_beneficiary: true,
            ..Default::default()
        }];
        let draft = hydrate(&record);
        let dep = &draft.dependents[0];
        assert_eq!(dep.origin_id, Some(11));
        assert_eq!(dep.relationship, shared::enums::RelationshipType::Child);
        assert_eq!(dep.gender_type, Gender::Male); // fallback
        assert!(dep.benefit_types.contains(&shared::enums::BenefitType::Medical));
        assert!(dep.benefit_types.contains(&shared::enums::BenefitType::Burial));
        assert!(
            draft
                .defaulted_fields
                .contains(&"dependents.0.genderType".to_string())
        );
    }

    #[test]
    fn test_attachments_become_placeholders() {
        let mut record = base_record();
        record.file_attachments = vec![shared::models::AttachmentRecord {
            id: Some(5),
            file_name: Some("valid-id.jpg".to_string()),
            file_size: Some(2048),
            content_type: Some("image/jpeg".to_string()),
        }];
        let draft = hydrate(&record);
        let file = &draft.file_attachments[0];
        assert_eq!(file.name, "valid-id.jpg");
        assert_eq!(file.size, 2048);
        assert!(file.data.is_empty());
    }

    #[test]
    fn test_hydration_is_idempotent() {
        let mut record = base_record();
        record.primary_address = Some("123 Main St".to_string());
        record.addresses = vec![AddressRecord {
            id: Some(1),
            city: Some("Quezon City".to_string()),
            ..Default::default()
        }];
        let mut first = hydrate(&record);
        let mut second = hydrate(&record);
        scrub_keys(&mut first);
        scrub_keys(&mut second);
        assert_eq!(first, second);
    }
}
