//! Tracker module
//!
//! The daily log itself:
//! - Date keys, pain scale, symptom vocabulary and entries
//! - The date-partitioned in-memory store
//! - Form drafts that feed the store

pub mod drafts;
pub mod models;
pub mod store;

pub use drafts::{FoodDraft, SymptomDraft};
pub use models::*;
pub use store::DailyLogStore;
