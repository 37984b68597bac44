//! Services module
//!
//! Business logic services that coordinate between commands and the tracker store.

pub mod tracker;

pub use tracker::{Submission, TodayFn, TrackerService};
