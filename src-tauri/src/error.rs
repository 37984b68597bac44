//! Error types for the IBD Daily Tracker
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the frontend.
//!
//! Empty symptom or food text is deliberately absent here: a blank add is
//! ignored, not reported.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Date {date} is after today ({today})")]
    FutureDate { date: String, today: String },

    #[error("Pain level {0} is outside 0-10")]
    InvalidPainLevel(i64),

    #[error("Tracker state lock poisoned")]
    LockPoisoned,

    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
