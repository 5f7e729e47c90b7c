//! Intake form state and submission orchestration.
//!
//! The form moves through `Idle → Validating → {Invalid→Idle,
//! Valid→Submitting} → Submitted→Idle`. Validating and Submitted are
//! synchronous steps inside the submit flow; the only persistent phases
//! are [`SubmitPhase::Idle`] and [`SubmitPhase::Submitting`]. While
//! submitting, the frontend disables the submit button, which is the
//! sole re-entrancy control — a second trigger that slips through is
//! answered with the current snapshot and nothing else.

use serde::{Deserialize, Serialize};

use crate::core_state::{CoreError, CoreState};
use crate::models::{AppointmentRequest, BookingConfirmation, FormFields};
use crate::validation::{self, FieldErrors};

/// Upper bound on a single field value coming over IPC.
pub const MAX_FIELD_LEN: usize = 5000;

pub const LABEL_IDLE: &str = "Submit";
pub const LABEL_SUBMITTING: &str = "Submitting...";

/// Persistent phase of the submission state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Outcome of the synchronous validation step of a submit trigger.
#[derive(Debug)]
pub enum SubmitDecision {
    /// A submission is already outstanding; the trigger is ineffective.
    AlreadySubmitting,
    /// Validation failed; per-field errors are stored, phase stays idle.
    Rejected,
    /// Validation passed; phase is now submitting.
    Accepted(AppointmentRequest),
}

/// Working state of the single intake form.
#[derive(Debug)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
    /// Confirmation of the last submission, shown once by the frontend.
    pub notice: Option<BookingConfirmation>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            errors: FieldErrors::new(),
            phase: SubmitPhase::Idle,
            notice: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Store one raw field value.
    ///
    /// Clears that field's stale error and any lingering success notice.
    /// The value is taken as typed; validation happens at submit time.
    pub fn set_field(&mut self, field: &str, value: String) -> Result<(), CoreError> {
        if value.chars().count() > MAX_FIELD_LEN {
            return Err(CoreError::ValueTooLong { max: MAX_FIELD_LEN });
        }

        let slot = match field {
            "patientName" => &mut self.fields.patient_name,
            "email" => &mut self.fields.email,
            "phone" => &mut self.fields.phone,
            "appointmentType" => &mut self.fields.appointment_type,
            "preferredDate" => &mut self.fields.preferred_date,
            "reasonForVisit" => &mut self.fields.reason_for_visit,
            _ => return Err(CoreError::UnknownField(field.to_string())),
        };
        *slot = value;

        self.errors.remove(field);
        self.notice = None;
        Ok(())
    }

    /// Run the synchronous Validating step of a submit trigger.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::AlreadySubmitting;
        }
        self.notice = None;

        match validation::validate(&self.fields) {
            Err(errors) => {
                tracing::debug!(failing_fields = errors.len(), "submit rejected by validation");
                self.errors = errors;
                SubmitDecision::Rejected
            }
            Ok(request) => {
                self.errors.clear();
                self.phase = SubmitPhase::Submitting;
                SubmitDecision::Accepted(request)
            }
        }
    }

    /// Settle a completed submission: reset the draft, surface the notice.
    pub fn complete_submit(&mut self, confirmation: BookingConfirmation) {
        self.fields = FormFields::default();
        self.errors.clear();
        self.phase = SubmitPhase::Idle;
        self.notice = Some(confirmation);
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
            errors: self.errors.clone(),
            submitting: self.is_submitting(),
            submit_label: if self.is_submitting() { LABEL_SUBMITTING } else { LABEL_IDLE }
                .to_string(),
            notice: self.notice.clone(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// View of the form rendered by the frontend after every IPC call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub submit_label: String,
    pub notice: Option<BookingConfirmation>,
}

// ═══════════════════════════════════════════
// Flows — called by the IPC command handlers
// ═══════════════════════════════════════════

/// Current snapshot without mutating anything.
pub fn snapshot(state: &CoreState) -> Result<FormSnapshot, CoreError> {
    Ok(state.read_form()?.snapshot())
}

/// Apply one field edit and return the refreshed snapshot.
pub fn edit_field(state: &CoreState, field: &str, value: String) -> Result<FormSnapshot, CoreError> {
    let mut form = state.write_form()?;
    form.set_field(field, value)?;
    Ok(form.snapshot())
}

/// Run one submit trigger end to end.
///
/// Invalid drafts return immediately with the per-field errors in the
/// snapshot. Valid drafts hold the `Submitting` phase across the backend
/// call (the lock is not held across the await), then settle: fields
/// reset, notice set, phase back to idle.
pub async fn submit(state: &CoreState) -> Result<FormSnapshot, CoreError> {
    let request = {
        let mut form = state.write_form()?;
        match form.begin_submit() {
            SubmitDecision::AlreadySubmitting | SubmitDecision::Rejected => {
                return Ok(form.snapshot());
            }
            SubmitDecision::Accepted(request) => request,
        }
    };

    let confirmation = state.backend().submit(&request).await;

    let mut form = state.write_form()?;
    form.complete_submit(confirmation);
    Ok(form.snapshot())
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{SimulatedBackend, SUCCESS_MESSAGE};
    use crate::validation::{
        MSG_DATE_REQUIRED, MSG_EMAIL_INVALID, MSG_PATIENT_NAME_REQUIRED, MSG_PHONE_TOO_SHORT,
        MSG_REASON_REQUIRED,
    };
    use chrono::{Days, Local};
    use std::sync::Arc;
    use std::time::Duration;

    fn instant_state() -> CoreState {
        CoreState::with_backend(SimulatedBackend::with_delay(Duration::ZERO))
    }

    fn tomorrow() -> String {
        Local::now()
            .date_naive()
            .checked_add_days(Days::new(1))
            .unwrap()
            .format("%Y-%m-%d")
            .to_string()
    }

    fn fill_valid(state: &CoreState) {
        for (field, value) in [
            ("patientName", "John Doe".to_string()),
            ("email", "john.doe@example.com".to_string()),
            ("phone", "(123) 456-7890".to_string()),
            ("appointmentType", "CHECKUP".to_string()),
            ("preferredDate", tomorrow()),
            ("reasonForVisit", "Annual checkup".to_string()),
        ] {
            edit_field(state, field, value).unwrap();
        }
    }

    // ───────────────────────────────────────
    // Field edits
    // ───────────────────────────────────────

    #[test]
    fn edit_stores_raw_value() {
        let state = instant_state();
        let snap = edit_field(&state, "phone", "(123) 4".into()).unwrap();
        assert_eq!(snap.fields.phone, "(123) 4");
    }

    #[test]
    fn edit_rejects_unknown_field() {
        let state = instant_state();
        let err = edit_field(&state, "insuranceNumber", "x".into()).unwrap_err();
        assert!(matches!(err, CoreError::UnknownField(f) if f == "insuranceNumber"));
    }

    #[test]
    fn edit_rejects_oversized_value() {
        let state = instant_state();
        let err = edit_field(&state, "reasonForVisit", "x".repeat(MAX_FIELD_LEN + 1)).unwrap_err();
        assert!(matches!(err, CoreError::ValueTooLong { .. }));
    }

    #[tokio::test]
    async fn edit_clears_only_that_fields_error() {
        let state = instant_state();
        submit(&state).await.unwrap();
        let snap = edit_field(&state, "patientName", "John Doe".into()).unwrap();
        assert!(!snap.errors.contains_key("patientName"));
        assert_eq!(snap.errors["email"], MSG_EMAIL_INVALID);
    }

    // ───────────────────────────────────────
    // Invalid submit
    // ───────────────────────────────────────

    #[tokio::test]
    async fn empty_submit_surfaces_required_messages_and_stays_idle() {
        let state = instant_state();
        let snap = submit(&state).await.unwrap();

        assert!(!snap.submitting);
        assert_eq!(snap.submit_label, LABEL_IDLE);
        assert_eq!(snap.errors["patientName"], MSG_PATIENT_NAME_REQUIRED);
        assert_eq!(snap.errors["email"], MSG_EMAIL_INVALID);
        assert_eq!(snap.errors["phone"], MSG_PHONE_TOO_SHORT);
        assert_eq!(snap.errors["preferredDate"], MSG_DATE_REQUIRED);
        assert_eq!(snap.errors["reasonForVisit"], MSG_REASON_REQUIRED);
        assert_eq!(snap.errors.len(), 5);
        assert_eq!(state.backend().submission_count(), 0);
    }

    #[tokio::test]
    async fn invalid_submit_is_repeatable_with_identical_errors() {
        let state = instant_state();
        let first = submit(&state).await.unwrap();
        let second = submit(&state).await.unwrap();
        assert_eq!(first.errors, second.errors);
    }

    // ───────────────────────────────────────
    // Valid submit
    // ───────────────────────────────────────

    #[tokio::test]
    async fn valid_submit_settles_with_notice_and_reset_fields() {
        let state = instant_state();
        fill_valid(&state);

        let snap = submit(&state).await.unwrap();

        assert!(!snap.submitting);
        assert!(snap.errors.is_empty());
        let notice = snap.notice.expect("success notice");
        assert_eq!(notice.message, SUCCESS_MESSAGE);
        assert_eq!(snap.fields, FormFields::default());
        assert_eq!(state.backend().submission_count(), 1);
    }

    #[tokio::test]
    async fn next_edit_clears_the_success_notice() {
        let state = instant_state();
        fill_valid(&state);
        submit(&state).await.unwrap();

        let snap = edit_field(&state, "patientName", "Jane Roe".into()).unwrap();
        assert!(snap.notice.is_none());
    }

    // ───────────────────────────────────────
    // Submitting phase and re-entrancy
    // ───────────────────────────────────────

    #[tokio::test]
    async fn label_flips_while_submission_is_outstanding() {
        let state = Arc::new(CoreState::with_backend(SimulatedBackend::with_delay(
            Duration::from_millis(80),
        )));
        fill_valid(&state);

        let flying = {
            let state = Arc::clone(&state);
            tokio::spawn(async move { submit(&state).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let mid = snapshot(&state).unwrap();
        assert!(mid.submitting);
        assert_eq!(mid.submit_label, LABEL_SUBMITTING);

        let settled = flying.await.unwrap().unwrap();
        assert_eq!(settled.submit_label, LABEL_IDLE);
    }

    #[tokio::test]
    async fn reentrant_submit_is_ineffective() {
        let state = Arc::new(CoreState::with_backend(SimulatedBackend::with_delay(
            Duration::from_millis(80),
        )));
        fill_valid(&state);

        let flying = {
            let state = Arc::clone(&state);
            tokio::spawn(async move { submit(&state).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Second trigger while outstanding: snapshot only, no second booking.
        let second = submit(&state).await.unwrap();
        assert!(second.submitting);
        assert!(second.notice.is_none());

        flying.await.unwrap().unwrap();
        assert_eq!(state.backend().submission_count(), 1);
    }
}
