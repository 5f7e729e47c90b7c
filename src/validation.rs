//! Appointment intake validation schema.
//!
//! Field-by-field rules for the six intake fields, producing either a
//! normalized [`AppointmentRequest`] or one fixed message per failing
//! field. The message strings are part of the frontend contract and are
//! asserted verbatim by its tests — do not reword them.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::models::{AppointmentRequest, AppointmentType, FormFields};

/// Per-field error messages, keyed by the camelCase field name the
/// frontend uses to place them inline.
pub type FieldErrors = BTreeMap<String, String>;

pub const MSG_PATIENT_NAME_REQUIRED: &str = "Patient name is required";
pub const MSG_EMAIL_INVALID: &str = "Invalid email address";
pub const MSG_PHONE_TOO_SHORT: &str = "Phone number must be at least 10 digits";
pub const MSG_PHONE_INVALID: &str = "Invalid phone number";
pub const MSG_TYPE_INVALID: &str = "Invalid appointment type";
pub const MSG_DATE_REQUIRED: &str = "Preferred date is required";
pub const MSG_DATE_PAST: &str = "Date cannot be in the past";
pub const MSG_REASON_REQUIRED: &str = "Reason for visit is required";

/// Practical addr-spec subset: dot-atom local part, dot-separated
/// alphanumeric labels with inner hyphens on the domain side.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .unwrap()
});

/// Validates a raw draft against the intake rules.
///
/// Every field is checked; a draft with every field wrong surfaces one
/// message per field simultaneously. On success the returned request is
/// normalized: name/reason trimmed, phone reduced to its 10 digits,
/// date parsed. Pure function apart from reading today's local date.
pub fn validate(draft: &FormFields) -> Result<AppointmentRequest, FieldErrors> {
    validate_at(draft, Local::now().date_naive())
}

/// Same rules with an explicit "today" for the date comparison.
fn validate_at(draft: &FormFields, today: NaiveDate) -> Result<AppointmentRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    if draft.patient_name.trim().is_empty() {
        errors.insert("patientName".into(), MSG_PATIENT_NAME_REQUIRED.into());
    }

    if !EMAIL_RE.is_match(&draft.email) {
        errors.insert("email".into(), MSG_EMAIL_INVALID.into());
    }

    // The mask fills the field with formatting characters, so the rule
    // counts digits only. An untouched field reads as too short; anything
    // typed that does not reduce to exactly 10 digits is invalid.
    let digits: String = draft.phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if draft.phone.trim().is_empty() {
        errors.insert("phone".into(), MSG_PHONE_TOO_SHORT.into());
    } else if digits.len() != 10 {
        errors.insert("phone".into(), MSG_PHONE_INVALID.into());
    }

    let appointment_type = match draft.appointment_type.parse::<AppointmentType>() {
        Ok(ty) => Some(ty),
        Err(_) => {
            errors.insert("appointmentType".into(), MSG_TYPE_INVALID.into());
            None
        }
    };

    let preferred_date = if draft.preferred_date.trim().is_empty() {
        errors.insert("preferredDate".into(), MSG_DATE_REQUIRED.into());
        None
    } else {
        // Non-strict: today is acceptable. An unparseable value fails the
        // same rule as a past one.
        match NaiveDate::parse_from_str(&draft.preferred_date, "%Y-%m-%d") {
            Ok(date) if date >= today => Some(date),
            _ => {
                errors.insert("preferredDate".into(), MSG_DATE_PAST.into());
                None
            }
        }
    };

    if draft.reason_for_visit.trim().is_empty() {
        errors.insert("reasonForVisit".into(), MSG_REASON_REQUIRED.into());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(AppointmentRequest {
        patient_name: draft.patient_name.trim().to_string(),
        email: draft.email.clone(),
        phone: digits,
        appointment_type: appointment_type.unwrap(),
        preferred_date: preferred_date.unwrap(),
        reason_for_visit: draft.reason_for_visit.trim().to_string(),
    })
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
