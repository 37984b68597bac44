//! Tracker commands
//!
//! Date selection, adding entries from the form drafts, clearing a day,
//! and reading entries back for display.

use crate::app::AppState;
use crate::error::Result;
use crate::services::Submission;
use crate::tracker::{DayLog, FoodDraft, FoodEntry, LogDate, SymptomDraft, SymptomEntry};
use tauri::State;

/// Get today's date on the local calendar (the date picker's upper bound)
#[tauri::command]
pub fn get_today(state: State<'_, AppState>) -> LogDate {
    state.tracker_service.today()
}

/// Get the currently selected date
#[tauri::command]
pub fn get_selected_date(state: State<'_, AppState>) -> Result<LogDate> {
    state.tracker_service.selected_date()
}

/// Select a date; dates after today are rejected
#[tauri::command]
pub fn select_date(state: State<'_, AppState>, date: String) -> Result<LogDate> {
    let date = LogDate::parse(&date)?;
    state.tracker_service.select_date(date)
}

/// Add a symptom entry for the selected date
#[tauri::command]
pub fn add_symptom_entry(
    state: State<'_, AppState>,
    draft: SymptomDraft,
) -> Result<Submission<SymptomEntry, SymptomDraft>> {
    state.tracker_service.add_symptom_entry(draft)
}

/// Add a food entry for the selected date
#[tauri::command]
pub fn add_food_entry(
    state: State<'_, AppState>,
    draft: FoodDraft,
) -> Result<Submission<FoodEntry, FoodDraft>> {
    state.tracker_service.add_food_entry(draft)
}

/// Clear all symptom entries for the selected date
#[tauri::command]
pub fn clear_symptoms(state: State<'_, AppState>) -> Result<LogDate> {
    state.tracker_service.clear_symptoms()
}

/// Clear all food entries for the selected date
#[tauri::command]
pub fn clear_food(state: State<'_, AppState>) -> Result<LogDate> {
    state.tracker_service.clear_food()
}

/// Get entries for a date, or for the selected date when none is given
#[tauri::command]
pub fn get_entries(state: State<'_, AppState>, date: Option<String>) -> Result<DayLog> {
    match date {
        Some(date) => state.tracker_service.entries_for(LogDate::parse(&date)?),
        None => state.tracker_service.selected_entries(),
    }
}

/// List dates that have at least one entry
#[tauri::command]
pub fn get_logged_dates(state: State<'_, AppState>) -> Result<Vec<LogDate>> {
    state.tracker_service.logged_dates()
}
