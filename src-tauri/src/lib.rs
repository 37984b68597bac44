//! IBD Daily Tracker library
//!
//! This library exposes the core functionality of the tracker for testing
//! and builds the Tauri application that `main` runs.

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;
pub mod tracker;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging, honouring `RUST_LOG` when set
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build and run the Tauri application
pub fn run() {
    init_tracing();

    tracing::info!("Starting {}", config::APP_NAME);

    tauri::Builder::default()
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            commands::get_symptom_vocabulary,
            commands::get_today,
            commands::get_selected_date,
            commands::select_date,
            commands::add_symptom_entry,
            commands::add_food_entry,
            commands::clear_symptoms,
            commands::clear_food,
            commands::get_entries,
            commands::get_logged_dates,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
