//! Tracker service
//!
//! Boundary between the commands and the daily log store.
//! Owns the store, works on the selected day, and refuses to select a
//! day after today.

use crate::error::{AppError, Result};
use crate::tracker::{
    DailyLogStore, DayLog, FoodDraft, FoodEntry, LogDate, SymptomDraft, SymptomEntry,
};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Source of "today" on the local calendar
pub type TodayFn = Arc<dyn Fn() -> LogDate + Send + Sync>;

/// Result of submitting a draft: the logged entry, if accepted, and the
/// draft as the form should now show it
#[derive(Debug, Clone, Serialize)]
pub struct Submission<E, D> {
    pub entry: Option<E>,
    pub draft: D,
}

impl<E, D> Submission<E, D> {
    pub fn accepted(&self) -> bool {
        self.entry.is_some()
    }
}

/// Service for logging symptoms and food against the selected day
#[derive(Clone)]
pub struct TrackerService {
    store: Arc<Mutex<DailyLogStore>>,
    today: TodayFn,
}

impl TrackerService {
    /// Create a service whose selected day starts at today
    pub fn new() -> Self {
        Self::with_today(Arc::new(LogDate::today))
    }

    pub fn with_today(today: TodayFn) -> Self {
        let start = today();
        Self {
            store: Arc::new(Mutex::new(DailyLogStore::new(start))),
            today,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, DailyLogStore>> {
        self.store.lock().map_err(|_| AppError::LockPoisoned)
    }

    pub fn today(&self) -> LogDate {
        (self.today)()
    }

    pub fn selected_date(&self) -> Result<LogDate> {
        Ok(self.lock()?.selected_date())
    }

    /// Select a day, rejecting days after today
    pub fn select_date(&self, date: LogDate) -> Result<LogDate> {
        let today = self.today();
        if date > today {
            tracing::warn!("Rejected future date selection: {}", date);
            return Err(AppError::FutureDate {
                date: date.to_string(),
                today: today.to_string(),
            });
        }

        self.lock()?.select_date(date);
        tracing::debug!("Selected date: {}", date);

        Ok(date)
    }

    /// Log a symptom entry on the selected day
    pub fn add_symptom_entry(
        &self,
        mut draft: SymptomDraft,
    ) -> Result<Submission<SymptomEntry, SymptomDraft>> {
        let mut store = self.lock()?;
        let date = store.selected_date();
        let entry = draft.submit(&mut store, date);
        let submission = Submission { entry, draft };

        if submission.accepted() {
            tracing::info!("Logged symptom entry on {}", date);
        } else {
            tracing::debug!("Symptom entry on {} left as draft", date);
        }

        Ok(submission)
    }

    /// Log a food entry on the selected day
    pub fn add_food_entry(&self, mut draft: FoodDraft) -> Result<Submission<FoodEntry, FoodDraft>> {
        let mut store = self.lock()?;
        let date = store.selected_date();
        let entry = draft.submit(&mut store, date);
        let submission = Submission { entry, draft };

        if submission.accepted() {
            tracing::info!("Logged food entry on {}", date);
        } else {
            tracing::debug!("Food entry on {} left as draft", date);
        }

        Ok(submission)
    }

    /// Remove every symptom entry on the selected day
    pub fn clear_symptoms(&self) -> Result<LogDate> {
        let mut store = self.lock()?;
        let date = store.selected_date();
        store.clear_symptoms(date);

        tracing::info!("Cleared symptom entries for {}", date);

        Ok(date)
    }

    /// Remove every food entry on the selected day
    pub fn clear_food(&self) -> Result<LogDate> {
        let mut store = self.lock()?;
        let date = store.selected_date();
        store.clear_food(date);

        tracing::info!("Cleared food entries for {}", date);

        Ok(date)
    }

    pub fn entries_for(&self, date: LogDate) -> Result<DayLog> {
        let day = self.lock()?.entries_for(date);
        Ok(Self::log_read(day))
    }

    /// Entries for whichever day is selected
    pub fn selected_entries(&self) -> Result<DayLog> {
        let day = {
            let store = self.lock()?;
            store.entries_for(store.selected_date())
        };
        Ok(Self::log_read(day))
    }

    fn log_read(day: DayLog) -> DayLog {
        if day.is_empty() {
            tracing::debug!("No entries logged for {}", day.date);
        }
        day
    }

    pub fn logged_dates(&self) -> Result<Vec<LogDate>> {
        Ok(self.lock()?.logged_dates())
    }
}

impl Default for TrackerService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{PainLevel, Symptom};

    fn service_on(day: &'static str) -> TrackerService {
        TrackerService::with_today(Arc::new(move || LogDate::parse(day).unwrap()))
    }

    #[test]
    fn test_starts_on_today() {
        let service = service_on("2024-06-15");

        assert_eq!(service.selected_date().unwrap(), service.today());
        assert!(service.selected_entries().unwrap().is_empty());
    }

    #[test]
    fn test_select_date_rejects_future() {
        let service = service_on("2024-06-15");

        let result = service.select_date(LogDate::parse("2024-06-16").unwrap());
        assert!(matches!(result, Err(AppError::FutureDate { .. })));
        assert_eq!(service.selected_date().unwrap().to_string(), "2024-06-15");

        let past = LogDate::parse("2024-06-01").unwrap();
        assert_eq!(service.select_date(past).unwrap(), past);
        assert_eq!(service.select_date(service.today()).unwrap(), service.today());
    }

    #[test]
    fn test_add_symptom_entry_uses_selected_date() {
        let service = service_on("2024-06-15");
        let past = LogDate::parse("2024-06-10").unwrap();
        service.select_date(past).unwrap();

        let submission = service
            .add_symptom_entry(SymptomDraft {
                symptoms: "Cramps".to_string(),
                pain_level: PainLevel::new(5).unwrap(),
                notes: String::new(),
            })
            .unwrap();

        assert!(submission.accepted());
        assert_eq!(submission.draft, SymptomDraft::default());
        assert_eq!(service.entries_for(past).unwrap().symptoms.len(), 1);
        assert!(service.entries_for(service.today()).unwrap().is_empty());
    }

    #[test]
    fn test_rejected_submission_returns_draft_unchanged() {
        let service = service_on("2024-06-15");
        let mut draft = FoodDraft {
            notes: "oat milk".to_string(),
            ..FoodDraft::default()
        };
        draft.toggle_symptom(Symptom::Bloating);

        let submission = service.add_food_entry(draft.clone()).unwrap();

        assert!(!submission.accepted());
        assert_eq!(submission.draft, draft);
        assert!(service.logged_dates().unwrap().is_empty());
    }

    #[test]
    fn test_clear_food_on_selected_date() {
        let service = service_on("2024-06-15");
        service
            .add_food_entry(FoodDraft {
                food: "Pasta".to_string(),
                ..FoodDraft::default()
            })
            .unwrap();
        service
            .add_symptom_entry(SymptomDraft {
                symptoms: "Pain".to_string(),
                ..SymptomDraft::default()
            })
            .unwrap();

        let cleared = service.clear_food().unwrap();

        assert_eq!(cleared, service.today());
        let day = service.selected_entries().unwrap();
        assert!(day.food.is_empty());
        assert_eq!(day.symptoms.len(), 1);
    }

    #[test]
    fn test_clones_share_the_store() {
        let service = service_on("2024-06-15");
        let other = service.clone();

        other
            .add_symptom_entry(SymptomDraft {
                symptoms: "Nausea".to_string(),
                ..SymptomDraft::default()
            })
            .unwrap();

        assert_eq!(service.selected_entries().unwrap().symptoms.len(), 1);
    }

    #[test]
    fn test_accepted_submission_json_shape() {
        let service = service_on("2024-06-15");

        let submission = service
            .add_symptom_entry(SymptomDraft {
                symptoms: "Cramps".to_string(),
                pain_level: PainLevel::new(5).unwrap(),
                notes: "after coffee".to_string(),
            })
            .unwrap();
        let json = serde_json::to_value(&submission).unwrap();

        let entry = &json["entry"];
        assert!(entry["id"].is_string());
        assert!(entry["created_at"].is_string());
        assert_eq!(entry["symptoms"], "Cramps");
        assert_eq!(entry["pain_level"], 5);
        assert_eq!(entry["notes"], "after coffee");
        assert_eq!(
            json["draft"],
            serde_json::json!({"symptoms": "", "pain_level": 0, "notes": ""})
        );
    }

    #[test]
    fn test_rejected_submission_json_shape() {
        let service = service_on("2024-06-15");
        let mut draft = FoodDraft {
            food: " ".to_string(),
            notes: "oat milk".to_string(),
            ..FoodDraft::default()
        };
        draft.toggle_symptom(Symptom::Bloating);

        let submission = service.add_food_entry(draft).unwrap();
        let json = serde_json::to_value(&submission).unwrap();

        assert!(json["entry"].is_null());
        assert_eq!(
            json["draft"],
            serde_json::json!({
                "food": " ",
                "notes": "oat milk",
                "symptoms_after": {
                    "Bloating": true,
                    "Diarrhea": false,
                    "Pain": false,
                    "Nausea": false,
                    "Fatigue": false,
                    "Cramps": false
                }
            })
        );
    }

    #[test]
    fn test_day_log_json_shape() {
        let service = service_on("2024-06-15");
        service
            .add_symptom_entry(SymptomDraft {
                symptoms: "Pain".to_string(),
                pain_level: PainLevel::new(3).unwrap(),
                notes: String::new(),
            })
            .unwrap();
        let mut draft = FoodDraft {
            food: "Eggs".to_string(),
            ..FoodDraft::default()
        };
        draft.toggle_symptom(Symptom::Bloating);
        draft.toggle_symptom(Symptom::Cramps);
        service.add_food_entry(draft).unwrap();

        let json = serde_json::to_value(service.selected_entries().unwrap()).unwrap();

        assert_eq!(json["date"], "2024-06-15");
        assert_eq!(json["symptoms"][0]["symptoms"], "Pain");
        assert_eq!(json["symptoms"][0]["pain_level"], 3);
        assert_eq!(json["symptoms"][0]["notes"], "");
        assert_eq!(json["food"][0]["food"], "Eggs");
        assert_eq!(json["food"][0]["notes"], "");
        assert_eq!(
            json["food"][0]["symptoms_after"],
            serde_json::json!(["Bloating", "Cramps"])
        );
    }
}
