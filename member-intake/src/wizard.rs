//! Modal shell and step orchestrator
//!
//! One [`IntakeWizard`] instance backs one modal. It exclusively owns its
//! draft for the lifetime of the modal: created blank on `open_create`,
//! hydrated on `open_update`, discarded on close or successful submit.
//! Collaborator failures never escape as errors — they resolve into banner
//! state the host renders.

use crate::draft::MemberDraft;
use crate::hydrate::hydrate;
use crate::steps::Step;
use crate::submit::{SubmitGuard, build_create, build_update, readable_server_message};
use crate::validate::{ErrorMap, validate_all, validate_step};
use coop_client::MemberApi;
use shared::models::MemberRecord;
use std::sync::Arc;

/// Wizard mode, fixed while the modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardMode {
    #[default]
    Create,
    Update,
}

/// Result of a submit trigger
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Trigger dropped: modal closed, not on the review step, or another
    /// submission already in flight
    Ignored,
    /// Full-form validation failed; field errors populated
    Invalid,
    /// The collaborator rejected the request; banner populated
    Failed,
    /// Saved; the wizard has reset and closed
    Saved(MemberRecord),
}

type SuccessCallback = Box<dyn FnMut(&MemberRecord) + Send>;

/// The member intake wizard
pub struct IntakeWizard {
    api: Arc<dyn MemberApi>,
    on_success: Option<SuccessCallback>,
    mode: WizardMode,
    open: bool,
    step: Step,
    draft: MemberDraft,
    /// Server record the draft was hydrated from (update mode)
    source: Option<MemberRecord>,
    errors: ErrorMap,
    banner: Option<String>,
    guard: SubmitGuard,
}

impl std::fmt::Debug for IntakeWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeWizard")
            .field("mode", &self.mode)
            .field("open", &self.open)
            .field("step", &self.step)
            .field("errors", &self.errors.len())
            .finish()
    }
}

impl IntakeWizard {
    /// Create a closed wizard over the given API collaborator
    pub fn new(api: Arc<dyn MemberApi>) -> Self {
        Self {
            api,
            on_success: None,
            mode: WizardMode::Create,
            open: false,
            step: Step::FIRST,
            draft: MemberDraft::blank(),
            source: None,
            errors: ErrorMap::new(),
            banner: None,
            guard: SubmitGuard::new(),
        }
    }

    /// Set the completion callback invoked with the saved server record
    pub fn with_on_success(mut self, callback: impl FnMut(&MemberRecord) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    // ========== Accessors ==========

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &MemberDraft {
        &self.draft
    }

    /// Mutable access to the draft for step-scoped edits
    pub fn draft_mut(&mut self) -> &mut MemberDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Whether a submission is in flight (drives the busy indicator)
    pub fn is_busy(&self) -> bool {
        self.guard.is_in_flight()
    }

    /// The in-flight guard shared with this wizard
    pub fn submission_guard(&self) -> &SubmitGuard {
        &self.guard
    }

    // ========== Lifecycle ==========

    /// Open the modal with a blank create-mode draft
    pub fn open_create(&mut self) {
        self.reset(WizardMode::Create, MemberDraft::blank(), None);
        self.open = true;
    }

    /// Open the modal in update mode, hydrating from `record`
    ///
    /// Hydration re-runs on every closed→open transition and whenever the
    /// target member changes; reopening with the record already on screen
    /// keeps the user's in-progress edits.
    pub fn open_update(&mut self, record: &MemberRecord) {
        let already_open = self.open
            && self.mode == WizardMode::Update
            && self.source.as_ref().and_then(|r| r.id) == record.id
            && record.id.is_some();
        if already_open {
            return;
        }
        self.reset(WizardMode::Update, hydrate(record), Some(record.clone()));
        self.open = true;
    }

    /// Close the modal and discard the draft
    ///
    /// An in-flight submission is not aborted, but its result has nothing
    /// to land in: the draft is gone.
    pub fn close(&mut self) {
        self.open = false;
        self.reset(WizardMode::Create, MemberDraft::blank(), None);
    }

    fn reset(&mut self, mode: WizardMode, draft: MemberDraft, source: Option<MemberRecord>) {
        self.mode = mode;
        self.draft = draft;
        self.source = source;
        self.step = Step::FIRST;
        self.errors.clear();
        self.banner = None;
    }

    // ========== Step navigation ==========

    /// Advance to the next step; gated steps must validate clean first
    pub fn next(&mut self) -> bool {
        if self.step.is_gated() {
            let errors = validate_step(&self.draft, self.step);
            if !errors.is_empty() {
                self.errors = errors;
                return false;
            }
        }
        self.errors.clear();
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step; always succeeds, never re-validates
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Aggregate full-form errors for the review step, without submitting
    pub fn review_errors(&self) -> ErrorMap {
        validate_all(&self.draft)
    }

    /// Jump to the step owning the first (alphabetically keyed) error
    pub fn jump_to_first_error(&mut self) -> Option<Step> {
        let key = self.errors.keys().next()?;
        let step = Step::for_error_key(key);
        self.step = step;
        Some(step)
    }

    // ========== Submission ==========

    /// Submit the draft, exactly once per user trigger
    ///
    /// Only reachable from the review step. Re-runs full-form validation
    /// regardless of per-step gate history. While a submission is in
    /// flight, further triggers return [`SubmitOutcome::Ignored`].
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.open || self.step != Step::LAST {
            return SubmitOutcome::Ignored;
        }
        let Some(_permit) = self.guard.try_acquire() else {
            tracing::debug!("submit ignored, request already in flight");
            return SubmitOutcome::Ignored;
        };

        let errors = validate_all(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }
        self.errors.clear();
        self.banner = None;

        let result = match self.mode {
            WizardMode::Create => {
                let payload = build_create(&self.draft);
                self.api.create_member(&payload).await
            }
            WizardMode::Update => {
                let Some(id) = self.source.as_ref().and_then(|r| r.id) else {
                    tracing::error!("update submit without a hydrated member id");
                    self.banner =
                        Some("Cannot update: the member record has no identifier".to_string());
                    return SubmitOutcome::Failed;
                };
                let payload = build_update(&self.draft);
                self.api.update_member(id, &payload).await
            }
        };

        match result {
            Ok(record) => {
                tracing::info!(member_id = ?record.id, mode = ?self.mode, "member saved");
                if let Some(callback) = self.on_success.as_mut() {
                    callback(&record);
                }
                self.open = false;
                self.reset(WizardMode::Create, MemberDraft::blank(), None);
                SubmitOutcome::Saved(record)
            }
            Err(err) => {
                let message = readable_server_message(&err.to_string());
                tracing::warn!(error = %message, "member submit rejected");
                self.banner = Some(message);
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use coop_client::ClientResult;
    use shared::models::{MemberCreate, MemberUpdate};

    struct NullApi;

    #[async_trait]
    impl MemberApi for NullApi {
        async fn create_member(&self, _payload: &MemberCreate) -> ClientResult<MemberRecord> {
            Ok(MemberRecord { id: Some(1), ..Default::default() })
        }

        async fn update_member(
            &self,
            _id: i64,
            _payload: &MemberUpdate,
        ) -> ClientResult<MemberRecord> {
            Ok(MemberRecord { id: Some(1), ..Default::default() })
        }
    }

    fn wizard() -> IntakeWizard {
        IntakeWizard::new(Arc::new(NullApi))
    }

    #[test]
    fn test_open_create_resets_state() {
        let mut w = wizard();
        w.open_create();
        w.draft_mut().first_name = "Juan".to_string();
        w.close();
        w.open_create();
        assert!(w.is_open());
        assert_eq!(w.step(), Step::Personal);
        assert!(w.draft().first_name.is_empty());
    }

    #[test]
    fn test_next_blocked_until_step1_valid() {
        let mut w = wizard();
        w.open_create();
        assert!(!w.next());
        assert!(w.errors().contains_key("firstName"));
        assert_eq!(w.step(), Step::Personal);

        let draft = w.draft_mut();
        draft.first_name = "Juan".to_string();
        draft.last_name = "Dela Cruz".to_string();
        draft.date_of_birth = "1990-01-01".to_string();
        draft.membership_date = "2026-08-06".to_string();
        draft.add_contact().phone_number = "09171234567".to_string();
        assert!(w.next());
        assert_eq!(w.step(), Step::Addresses);
        assert!(w.errors().is_empty());
    }

    #[test]
    fn test_previous_never_validates() {
        let mut w = wizard();
        w.open_create();
        assert!(!w.previous());
        w.draft_mut().first_name = "x".to_string();
        // Force forward past the gate for the test
        let draft = w.draft_mut();
        draft.last_name = "y".to_string();
        draft.date_of_birth = "1990-01-01".to_string();
        draft.membership_date = "2026-08-06".to_string();
        draft.add_contact().phone_number = "0917".to_string();
        assert!(w.next());
        w.draft_mut().first_name.clear();
        assert!(w.previous());
        assert_eq!(w.step(), Step::Personal);
    }

    #[test]
    fn test_reopen_same_member_keeps_edits() {
        let mut w = wizard();
        let record = MemberRecord {
            id: Some(42),
            first_name: Some("Juan".to_string()),
            ..Default::default()
        };
        w.open_update(&record);
        w.draft_mut().first_name = "Edited".to_string();
        w.open_update(&record);
        assert_eq!(w.draft().first_name, "Edited");

        let other = MemberRecord { id: Some(43), ..Default::default() };
        w.open_update(&other);
        assert_eq!(w.draft().first_name, "");
    }

    #[test]
    fn test_jump_to_first_error() {
        let mut w = wizard();
        w.open_create();
        assert!(!w.next());
        // "contactNumbers" sorts before "firstName" in the BTreeMap
        assert_eq!(w.jump_to_first_error(), Some(Step::Personal));
        assert_eq!(w.step(), Step::Personal);
    }

    #[tokio::test]
    async fn test_submit_ignored_off_review_step() {
        let mut w = wizard();
        w.open_create();
        assert!(matches!(w.submit().await, SubmitOutcome::Ignored));

        w.close();
        assert!(matches!(w.submit().await, SubmitOutcome::Ignored));
    }
}
