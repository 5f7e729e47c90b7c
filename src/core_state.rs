//! Shared application state behind the IPC surface.
//!
//! `CoreState` is managed as `Arc<CoreState>` by the Tauri builder and
//! holds the single intake form plus the submission backend. `RwLock`
//! lets concurrent snapshot reads proceed while edits and the submit
//! flow take the write path.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::booking::SimulatedBackend;
use crate::form::FormState;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("State lock poisoned")]
    LockPoisoned,

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Field value too long (max {max} chars)")]
    ValueTooLong { max: usize },
}

/// Application state shared across IPC command handlers.
pub struct CoreState {
    /// The single intake form instance; there is exactly one per window.
    form: RwLock<FormState>,
    /// Simulated booking endpoint. Swappable for tests via `with_backend`.
    backend: SimulatedBackend,
}

impl CoreState {
    pub fn new() -> Self {
        Self::with_backend(SimulatedBackend::new())
    }

    pub fn with_backend(backend: SimulatedBackend) -> Self {
        Self {
            form: RwLock::new(FormState::new()),
            backend,
        }
    }

    /// Acquire a read lock on the form (snapshot path).
    pub fn read_form(&self) -> Result<RwLockReadGuard<'_, FormState>, CoreError> {
        self.form.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire a write lock on the form (edit and submit paths).
    ///
    /// Callers must not hold the guard across an await; the submit flow
    /// re-acquires it after the backend call completes.
    pub fn write_form(&self) -> Result<RwLockWriteGuard<'_, FormState>, CoreError> {
        self.form.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn backend(&self) -> &SimulatedBackend {
        &self.backend
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}
