use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "Intake";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Delay of the simulated submission call, standing in for network I/O.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Default `RUST_LOG`-style filter when the environment sets none.
pub fn default_log_filter() -> &'static str {
    "info,intake_lib=debug"
}
