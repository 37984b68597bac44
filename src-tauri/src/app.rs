//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! The tracker service is created here and made available through AppState.

use crate::config;
use crate::error::Result;
use crate::services::TrackerService;
use tauri::{App, Manager, WebviewUrl, WebviewWindowBuilder};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub tracker_service: TrackerService,
}

impl AppState {
    pub fn new(tracker_service: TrackerService) -> Self {
        Self { tracker_service }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TrackerService::new())
    }
}

/// Application setup - called once on startup
pub fn setup(app: &mut App) -> Result<()> {
    tracing::info!("Initializing application");

    let state = AppState::default();
    tracing::info!(
        "Tracker ready, selected date: {}",
        state.tracker_service.selected_date()?
    );
    app.manage(state);

    WebviewWindowBuilder::new(app.handle(), "main", WebviewUrl::App("index.html".into()))
        .title(config::APP_NAME)
        .inner_size(
            config::MAIN_WINDOW_DEFAULT_WIDTH,
            config::MAIN_WINDOW_DEFAULT_HEIGHT,
        )
        .resizable(true)
        .build()?;

    tracing::info!("Application initialized successfully");

    Ok(())
}
