//! Tauri commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `tracker`: Date selection and symptom/food entry operations

pub mod tracker;

use crate::config;
use crate::tracker::Symptom;

// Re-export all commands for convenient registration in main.rs
pub use tracker::*;

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub fn get_app_info() -> AppInfo {
    AppInfo {
        name: config::APP_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

/// Symptom vocabulary in checkbox order
#[tauri::command]
pub fn get_symptom_vocabulary() -> Vec<Symptom> {
    Symptom::ALL.to_vec()
}
