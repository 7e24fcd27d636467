//! Per-step and full-form validation
//!
//! Validators return a map from field-path key (`addresses.0.city`) to a
//! human-readable message; an empty map means valid. The same map feeds
//! inline field annotations and the aggregate review-step list.

use crate::draft::MemberDraft;
use crate::steps::Step;
use std::collections::BTreeMap;

/// Field-path keyed validation errors
pub type ErrorMap = BTreeMap<String, String>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require(errors: &mut ErrorMap, key: &str, value: &str, message: &str) {
    if is_blank(value) {
        errors.insert(key.to_string(), message.to_string());
    }
}

/// Validate the fields owned by one step
///
/// Steps 3–5 own only optional collections and always validate clean.
pub fn validate_step(draft: &MemberDraft, step: Step) -> ErrorMap {
    let mut errors = ErrorMap::new();
    match step {
        Step::Personal => {
            require(&mut errors, "firstName", &draft.first_name, "First name is required");
            require(&mut errors, "lastName", &draft.last_name, "Last name is required");
            require(
                &mut errors,
                "dateOfBirth",
                &draft.date_of_birth,
                "Date of birth is required",
            );
            require(
                &mut errors,
                "membershipDate",
                &draft.membership_date,
                "Membership date is required",
            );
            if draft.contact_numbers.is_empty() {
                errors.insert(
                    "contactNumbers".to_string(),
                    "At least one contact number is required".to_string(),
                );
            }
            for (i, contact) in draft.contact_numbers.iter().enumerate() {
                require(
                    &mut errors,
                    &format!("contactNumbers.{i}.phoneNumber"),
                    &contact.phone_number,
                    "Phone number is required",
                );
            }
        }
        Step::Addresses => {
            if draft.addresses.is_empty() {
                errors.insert(
                    "addresses".to_string(),
                    "At least one address is required".to_string(),
                );
            }
            for (i, address) in draft.addresses.iter().enumerate() {
                require(
                    &mut errors,
                    &format!("addresses.{i}.streetAddress1"),
                    &address.street_address1,
                    "Street address is required",
                );
                require(
                    &mut errors,
                    &format!("addresses.{i}.city"),
                    &address.city,
                    "City is required",
                );
                require(
                    &mut errors,
                    &format!("addresses.{i}.province"),
                    &address.province,
                    "Province is required",
                );
            }
        }
        Step::Dependents | Step::Education | Step::Income | Step::Review => {}
    }
    errors
}

/// Full-form validation, run on submit regardless of gate history
pub fn validate_all(draft: &MemberDraft) -> ErrorMap {
    let mut errors = validate_step(draft, Step::Personal);
    errors.extend(validate_step(draft, Step::Addresses));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> MemberDraft {
        let mut draft = MemberDraft::blank();
        draft.first_name = "Juan".to_string();
        draft.last_name = "Dela Cruz".to_string();
        draft.date_of_birth = "1990-01-01".to_string();
        draft.membership_date = "2026-08-06".to_string();
        draft.add_contact().phone_number = "09171234567".to_string();
        let address = draft.add_address();
        address.street_address1 = "123 Main St".to_string();
        address.city = "Quezon City".to_string();
        address.province = "Metro Manila".to_string();
        draft
    }

    #[test]
    fn test_valid_draft_passes() {
        let draft = valid_draft();
        assert!(validate_step(&draft, Step::Personal).is_empty());
        assert!(validate_step(&draft, Step::Addresses).is_empty());
        assert!(validate_all(&draft).is_empty());
    }

    #[test]
    fn test_step1_required_scalars() {
        let mut draft = valid_draft();
        draft.first_name = "  ".to_string();
        draft.membership_date.clear();
        let errors = validate_step(&draft, Step::Personal);
        assert_eq!(errors.get("firstName").unwrap(), "First name is required");
        assert!(errors.contains_key("membershipDate"));
        assert!(!errors.contains_key("lastName"));
    }

    #[test]
    fn test_step1_contacts() {
        let mut draft = valid_draft();
        draft.contact_numbers.clear();
        let errors = validate_step(&draft, Step::Personal);
        assert!(errors.contains_key("contactNumbers"));

        let mut draft = valid_draft();
        draft.add_contact(); // second, blank entry
        let errors = validate_step(&draft, Step::Personal);
        assert!(errors.contains_key("contactNumbers.1.phoneNumber"));
        assert!(!errors.contains_key("contactNumbers.0.phoneNumber"));
    }

    #[test]
    fn test_step2_addresses() {
        let mut draft = valid_draft();
        draft.addresses.clear();
        let errors = validate_step(&draft, Step::Addresses);
        assert!(errors.contains_key("addresses"));

        let mut draft = valid_draft();
        draft.addresses[0].city.clear();
        draft.add_address();
        let errors = validate_step(&draft, Step::Addresses);
        assert!(errors.contains_key("addresses.0.city"));
        assert!(errors.contains_key("addresses.1.streetAddress1"));
        assert!(errors.contains_key("addresses.1.province"));
    }

    #[test]
    fn test_optional_steps_never_gate() {
        let draft = MemberDraft::blank();
        assert!(validate_step(&draft, Step::Dependents).is_empty());
        assert!(validate_step(&draft, Step::Education).is_empty());
        assert!(validate_step(&draft, Step::Income).is_empty());
    }

    #[test]
    fn test_validate_all_merges_both_gated_steps() {
        let draft = MemberDraft::blank();
        let errors = validate_all(&draft);
        assert!(errors.contains_key("firstName"));
        assert!(errors.contains_key("addresses"));
    }
}
