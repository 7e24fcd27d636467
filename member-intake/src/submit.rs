//! Draft → wire payload transformation and submission plumbing
//!
//! Three concerns live here:
//! - building the create/update payloads from a validated draft (blank
//!   optional text collapses to omitted fields; update entries carry their
//!   `origin_id` as the nullable wire `id`)
//! - the duplicate-submit guard, an RAII permit over an atomic in-flight
//!   flag
//! - rewriting server field-path tokens (`Addresses[1].City`) into
//!   user-facing phrasing (`Address 2: City`) for the error banner

use crate::draft::MemberDraft;
use regex::{Captures, Regex};
use shared::models::{
    AddressCreate, AddressUpdate, ContactCreate, ContactUpdate, DependentCreate, DependentUpdate,
    EducationCreate, EducationUpdate, IncomeCreate, IncomeUpdate, MemberCreate, MemberUpdate,
};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Blank-aware optional text: `""` and whitespace collapse to `None`
fn opt(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ============================================================================
// Payload builders
// ============================================================================

fn address_create(entry: &crate::draft::AddressEntry) -> AddressCreate {
    AddressCreate {
        address_type: entry.address_type,
        street_address1: entry.street_address1.clone(),
        street_address2: opt(&entry.street_address2),
        city: entry.city.clone(),
        province: entry.province.clone(),
        postal_code: entry.postal_code.clone(),
        country: entry.country.clone(),
        is_primary: entry.is_primary,
        is_current: entry.is_current,
        notes: opt(&entry.notes),
    }
}

fn contact_create(entry: &crate::draft::ContactEntry) -> ContactCreate {
    ContactCreate {
        phone_number: entry.phone_number.clone(),
        is_primary: entry.is_primary,
    }
}

fn dependent_create(entry: &crate::draft::DependentEntry) -> DependentCreate {
    DependentCreate {
        first_name: entry.first_name.clone(),
        last_name: entry.last_name.clone(),
        middle_name: opt(&entry.middle_name),
        relationship: entry.relationship,
        date_of_birth: entry.date_of_birth.clone(),
        gender_type: entry.gender_type,
        address: opt(&entry.address),
        is_dependent: entry.is_dependent,
        is_beneficiary: entry.is_beneficiary,
        benefit_types: entry.benefit_types.iter().copied().collect(),
    }
}

fn education_create(entry: &crate::draft::EducationEntry) -> EducationCreate {
    EducationCreate {
        education_attainment_type: entry.education_attainment_type,
        school_name: entry.school_name.clone(),
        course: opt(&entry.course),
        year_started: entry.year_started.clone(),
        year_completed: entry.year_completed.clone(),
        is_highest_attainment: entry.is_highest_attainment,
        notes: opt(&entry.notes),
    }
}

fn income_create(entry: &crate::draft::IncomeEntry) -> IncomeCreate {
    IncomeCreate {
        source: entry.source.clone(),
        income_amount: entry.income_amount,
        is_primary: entry.is_primary,
    }
}

/// Build the create payload; no `id` fields anywhere, attachments omitted
pub fn build_create(draft: &MemberDraft) -> MemberCreate {
    MemberCreate {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        middle_name: opt(&draft.middle_name),
        date_of_birth: draft.date_of_birth.clone(),
        birthplace: opt(&draft.birthplace),
        gender_type: draft.gender_type,
        civil_status: draft.civil_status,
        tin: opt(&draft.tin),
        bod_number: opt(&draft.bod_number),
        status: draft.status,
        membership_type: draft.membership_type,
        membership_date: draft.membership_date.clone(),
        termination_date: opt(&draft.termination_date),
        notes: opt(&draft.notes),
        addresses: draft.addresses.iter().map(address_create).collect(),
        contact_numbers: draft.contact_numbers.iter().map(contact_create).collect(),
        dependents: draft.dependents.iter().map(dependent_create).collect(),
        educations: draft.educations.iter().map(education_create).collect(),
        incomes: draft.incomes.iter().map(income_create).collect(),
    }
}

/// Build the update payload
///
/// Each entry's wire `id` is the `origin_id` carried on the entry since
/// hydration — `null` marks entries added in this session. Reordering or
/// deleting entries cannot misattribute identifiers because nothing is
/// looked up by position.
pub fn build_update(draft: &MemberDraft) -> MemberUpdate {
    MemberUpdate {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        middle_name: opt(&draft.middle_name),
        date_of_birth: draft.date_of_birth.clone(),
        birthplace: opt(&draft.birthplace),
        gender_type: draft.gender_type,
        civil_status: draft.civil_status,
        tin: opt(&draft.tin),
        bod_number: opt(&draft.bod_number),
        status: draft.status,
        membership_type: draft.membership_type,
        membership_date: draft.membership_date.clone(),
        termination_date: opt(&draft.termination_date),
        notes: opt(&draft.notes),
        addresses: draft
            .addresses
            .iter()
            .map(|e| AddressUpdate { id: e.origin_id, address: address_create(e) })
            .collect(),
        contact_numbers: draft
            .contact_numbers
            .iter()
            .map(|e| ContactUpdate { id: e.origin_id, contact: contact_create(e) })
            .collect(),
        dependents: draft
            .dependents
            .iter()
            .map(|e| DependentUpdate { id: e.origin_id, dependent: dependent_create(e) })
            .collect(),
        educations: draft
            .educations
            .iter()
            .map(|e| EducationUpdate { id: e.origin_id, education: education_create(e) })
            .collect(),
        incomes: draft
            .incomes
            .iter()
            .map(|e| IncomeUpdate { id: e.origin_id, income: income_create(e) })
            .collect(),
    }
}

// ============================================================================
// Server message rewriting
// ============================================================================

static FIELD_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]+)\[(\d+)\]\.([A-Za-z0-9]+)").unwrap());

fn singular(collection: &str) -> &str {
    match collection {
        "Addresses" => "Address",
        "ContactNumbers" => "Contact number",
        "Dependents" => "Dependent",
        "Educations" => "Education",
        "Incomes" => "Income",
        other => other.strip_suffix('s').unwrap_or(other),
    }
}

/// Rewrite server field-path tokens into user-facing phrasing
///
/// `Addresses[1].City is required` becomes `Address 2: City is required`.
/// Text without path tokens passes through unchanged.
pub fn readable_server_message(message: &str) -> String {
    FIELD_PATH
        .replace_all(message, |caps: &Captures| {
            let index: usize = caps[2].parse().unwrap_or(0);
            format!("{} {}: {}", singular(&caps[1]), index + 1, &caps[3])
        })
        .into_owned()
}

// ============================================================================
// Duplicate-submit guard
// ============================================================================

/// Shared in-flight flag for a wizard instance
///
/// `try_acquire` hands out at most one [`SubmitPermit`] at a time; the
/// permit releases the flag on drop, so an abandoned submission can never
/// wedge the wizard.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is currently in flight
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Acquire the permit, `None` while another submission is in flight
    pub fn try_acquire(&self) -> Option<SubmitPermit> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitPermit {
                in_flight: Arc::clone(&self.in_flight),
            })
    }
}

/// RAII permit for one in-flight submission
#[derive(Debug)]
pub struct SubmitPermit {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
