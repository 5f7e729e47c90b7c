use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentType;

/// Raw working draft of the intake form, exactly as typed.
///
/// All values are strings so the frontend can round-trip partial or
/// malformed input; normalization happens only on a successful validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    /// Selector token, `CHECKUP` or `FOLLOWUP`.
    pub appointment_type: String,
    /// YYYY-MM-DD, or empty while unset.
    pub preferred_date: String,
    pub reason_for_visit: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            patient_name: String::new(),
            email: String::new(),
            phone: String::new(),
            // The selector's first option; a fresh form always has a type.
            appointment_type: AppointmentType::Checkup.as_str().to_string(),
            preferred_date: String::new(),
            reason_for_visit: String::new(),
        }
    }
}

/// A validated appointment request, normalized and ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_name: String,
    pub email: String,
    /// Exactly 10 digits, mask characters stripped.
    pub phone: String,
    pub appointment_type: AppointmentType,
    pub preferred_date: NaiveDate,
    pub reason_for_visit: String,
}

/// Acknowledgment returned by the (simulated) submission backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub confirmation_id: Uuid,
    pub message: String,
    /// Local timestamp of acceptance, YYYY-MM-DD HH:MM:SS.
    pub booked_at: String,
}
