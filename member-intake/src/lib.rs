//! Member Intake Wizard
//!
//! A headless, modal-scoped engine for collecting a cooperative member
//! record over six ordered steps and submitting it to the member API:
//!
//! - **normalize**: maps the server's heterogeneous categorical values
//!   (numeric codes or label strings) into the coded enum domains
//! - **hydrate**: builds a draft from an existing server record in update
//!   mode, reconciling the nested collections with the flattened
//!   "primary" convenience fields
//! - **draft**: the in-memory form state, exclusively owned by one wizard
//! - **steps**: the linear six-step state machine
//! - **validate**: per-step and full-form field validation
//! - **submit**: draft → wire payload transformation, the duplicate-submit
//!   guard, and server error message rewriting
//! - **wizard**: the orchestrator tying the above together
//!
//! # Flow
//!
//! ```text
//! open_create() / open_update(record)
//!     ├─ hydrate (update mode) or blank draft (create mode)
//!     ├─ next()/previous() across steps 1..6 (1 and 2 gated)
//!     ├─ submit() from step 6
//!     │    ├─ full-form validation
//!     │    ├─ build MemberCreate / MemberUpdate payload
//!     │    └─ MemberApi call, exactly one in flight
//!     └─ on success: completion callback, reset, close
//! ```

pub mod draft;
pub mod hydrate;
pub mod normalize;
pub mod steps;
pub mod submit;
pub mod validate;
pub mod wizard;

pub use draft::{
    AddressEntry, ContactEntry, DependentEntry, EducationEntry, IncomeEntry, MemberDraft,
    PendingFile,
};
pub use hydrate::hydrate;
pub use normalize::{Normalized, normalize, normalize_benefits};
pub use steps::Step;
pub use submit::{SubmitGuard, SubmitPermit, build_create, build_update, readable_server_message};
pub use validate::{ErrorMap, validate_all, validate_step};
pub use wizard::{IntakeWizard, SubmitOutcome, WizardMode};
