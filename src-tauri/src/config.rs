//! Application configuration constants
//!
//! Central location for configuration constants and validation
//! boundaries used throughout the application.

// ===== Application =====

/// Display name used for the main window and log lines
pub const APP_NAME: &str = "IBD Daily Tracker";

/// Tracing filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "ibd_tracker=debug,info";

// ===== Window Dimensions =====

/// Default width for the main window in logical pixels
pub const MAIN_WINDOW_DEFAULT_WIDTH: f64 = 760.0;
/// Default height for the main window in logical pixels
pub const MAIN_WINDOW_DEFAULT_HEIGHT: f64 = 900.0;

// ===== Entry Validation =====

/// Lowest selectable pain level
pub const MIN_PAIN_LEVEL: u8 = 0;

/// Highest selectable pain level
pub const MAX_PAIN_LEVEL: u8 = 10;

/// Date key format shared with the frontend date input (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
