pub mod booking;
pub mod boundary;
pub mod commands;
pub mod config;
pub mod core_state;
pub mod form;
pub mod models;
pub mod validation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Intake starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::intake::get_form,
            commands::intake::update_field,
            commands::intake::submit_form,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Intake");
}
