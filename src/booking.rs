//! Simulated submission backend.
//!
//! Stands in for the clinic's booking endpoint: a timed, infallible call
//! that acknowledges every validated request. A real backend slots in
//! here and gains a failure path; the orchestrator in `form` already
//! treats this as its only suspension point.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Local;
use uuid::Uuid;

use crate::config;
use crate::models::{AppointmentRequest, BookingConfirmation};

/// Acknowledgment text shown to the patient. Asserted verbatim by the
/// frontend tests.
pub const SUCCESS_MESSAGE: &str = "Appointment booked successfully!";

/// Infallible stand-in for the external booking call.
pub struct SimulatedBackend {
    delay: Duration,
    submissions: AtomicU64,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self::with_delay(config::SUBMIT_DELAY)
    }

    /// Tests inject `Duration::ZERO` to skip the simulated latency.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            submissions: AtomicU64::new(0),
        }
    }

    /// Accepts a validated request after the configured delay.
    ///
    /// Never fails. Logs the clinical-scheduling fields only; the
    /// patient's name and contact details stay out of the logs.
    pub async fn submit(&self, request: &AppointmentRequest) -> BookingConfirmation {
        tokio::time::sleep(self.delay).await;

        let confirmation_id = Uuid::new_v4();
        let total = self.submissions.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(
            %confirmation_id,
            appointment_type = request.appointment_type.as_str(),
            preferred_date = %request.preferred_date,
            total,
            "appointment submission accepted"
        );

        BookingConfirmation {
            confirmation_id,
            message: SUCCESS_MESSAGE.to_string(),
            booked_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Number of accepted submissions since startup.
    pub fn submission_count(&self) -> u64 {
        self.submissions.load(Ordering::Relaxed)
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentType;
    use chrono::NaiveDate;

    fn request() -> AppointmentRequest {
        AppointmentRequest {
            patient_name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "1234567890".into(),
            appointment_type: AppointmentType::Checkup,
            preferred_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            reason_for_visit: "Annual checkup".into(),
        }
    }

    #[tokio::test]
    async fn submit_acknowledges_with_success_message() {
        let backend = SimulatedBackend::with_delay(Duration::ZERO);
        let confirmation = backend.submit(&request()).await;
        assert_eq!(confirmation.message, SUCCESS_MESSAGE);
        assert!(!confirmation.booked_at.is_empty());
    }

    #[tokio::test]
    async fn submissions_are_counted() {
        let backend = SimulatedBackend::with_delay(Duration::ZERO);
        assert_eq!(backend.submission_count(), 0);
        backend.submit(&request()).await;
        backend.submit(&request()).await;
        assert_eq!(backend.submission_count(), 2);
    }

    #[tokio::test]
    async fn distinct_confirmation_ids() {
        let backend = SimulatedBackend::with_delay(Duration::ZERO);
        let a = backend.submit(&request()).await;
        let b = backend.submit(&request()).await;
        assert_ne!(a.confirmation_id, b.confirmation_id);
    }
}
