//! Appointment intake — Tauri IPC commands.
//!
//! Three commands:
//! - `get_form`: snapshot for initial render and refreshes
//! - `update_field`: store one raw field edit
//! - `submit_form`: run a full submit trigger (validate, then the
//!   simulated backend call)
//!
//! Handlers are thin: orchestration lives in `form`, and typed errors
//! are flattened to strings at this boundary.

use std::sync::Arc;

use tauri::State;

use crate::boundary;
use crate::core_state::CoreState;
use crate::form::{self, FormSnapshot};

/// Snapshot of the form for rendering.
///
/// The only command on the render path, so it runs under the fault
/// boundary: a panic during snapshot assembly comes back as a
/// "Something went wrong" message instead of a dead page.
#[tauri::command]
pub fn get_form(state: State<'_, Arc<CoreState>>) -> Result<FormSnapshot, String> {
    let snapshot = boundary::guard("get_form", || form::snapshot(state.inner()))?;
    snapshot.map_err(|e| e.to_string())
}

/// Stores one raw field value as typed.
#[tauri::command]
pub fn update_field(
    field: String,
    value: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<FormSnapshot, String> {
    form::edit_field(state.inner(), &field, value).map_err(|e| e.to_string())
}

/// Runs one submit trigger end to end.
///
/// Returns when the submission has settled (or immediately, for invalid
/// drafts and re-entrant triggers). The frontend keeps the button
/// disabled from the moment it invokes this until the snapshot returns.
#[tauri::command]
pub async fn submit_form(state: State<'_, Arc<CoreState>>) -> Result<FormSnapshot, String> {
    form::submit(state.inner()).await.map_err(|e| e.to_string())
}
