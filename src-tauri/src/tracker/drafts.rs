//! Form drafts
//!
//! The values the user is typing before pressing "add". A draft is reset
//! only when the store accepts it, so a rejected add leaves the form as
//! typed.

use super::models::{FoodEntry, LogDate, PainLevel, Symptom, SymptomEntry, SymptomFlags};
use super::store::DailyLogStore;
use serde::{Deserialize, Serialize};

/// Pending symptom entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomDraft {
    pub symptoms: String,
    pub pain_level: PainLevel,
    pub notes: String,
}

impl SymptomDraft {
    /// Add this draft to `date`. Resets the draft on success.
    pub fn submit(&mut self, store: &mut DailyLogStore, date: LogDate) -> Option<SymptomEntry> {
        let entry = store
            .add_symptom_entry(date, &self.symptoms, self.pain_level, &self.notes)
            .cloned()?;
        *self = Self::default();
        Some(entry)
    }
}

/// Pending food entry with its symptom checkboxes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodDraft {
    pub food: String,
    pub notes: String,
    pub symptoms_after: SymptomFlags,
}

impl FoodDraft {
    pub fn toggle_symptom(&mut self, symptom: Symptom) {
        self.symptoms_after.toggle(symptom);
    }

    /// Add this draft to `date`. Resets the draft, checkboxes included, on success.
    pub fn submit(&mut self, store: &mut DailyLogStore, date: LogDate) -> Option<FoodEntry> {
        let entry = store
            .add_food_entry(date, &self.food, &self.notes, &self.symptoms_after)
            .cloned()?;
        *self = Self::default();
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_on(day: &str) -> (DailyLogStore, LogDate) {
        let date = LogDate::parse(day).unwrap();
        (DailyLogStore::new(date), date)
    }

    #[test]
    fn test_rejected_symptom_draft_is_kept() {
        let (mut store, date) = store_on("2024-01-01");
        let mut draft = SymptomDraft {
            symptoms: "   ".to_string(),
            pain_level: PainLevel::new(6).unwrap(),
            notes: "woke up twice".to_string(),
        };
        let before = draft.clone();

        assert!(draft.submit(&mut store, date).is_none());

        assert_eq!(draft, before);
        assert!(store.symptoms_for(date).is_empty());
    }

    #[test]
    fn test_accepted_symptom_draft_is_reset() {
        let (mut store, date) = store_on("2024-01-01");
        let mut draft = SymptomDraft {
            symptoms: "Bloating".to_string(),
            pain_level: PainLevel::new(4).unwrap(),
            notes: "after lunch".to_string(),
        };

        let entry = draft.submit(&mut store, date).unwrap();

        assert_eq!(entry.symptoms, "Bloating");
        assert_eq!(entry.pain_level.value(), 4);
        assert_eq!(draft, SymptomDraft::default());
    }

    #[test]
    fn test_food_draft_checkboxes_reset_after_submit() {
        let (mut store, date) = store_on("2024-01-01");
        let mut draft = FoodDraft {
            food: "Eggs".to_string(),
            ..FoodDraft::default()
        };
        draft.toggle_symptom(Symptom::Bloating);
        draft.toggle_symptom(Symptom::Nausea);
        draft.toggle_symptom(Symptom::Nausea);

        let entry = draft.submit(&mut store, date).unwrap();

        assert_eq!(entry.symptoms_after, vec![Symptom::Bloating]);
        assert_eq!(draft.symptoms_after, SymptomFlags::default());
        assert!(draft.food.is_empty());
    }

    #[test]
    fn test_rejected_food_draft_keeps_checkboxes() {
        let (mut store, date) = store_on("2024-01-01");
        let mut draft = FoodDraft::default();
        draft.toggle_symptom(Symptom::Cramps);
        draft.notes = "skipped breakfast".to_string();

        assert!(draft.submit(&mut store, date).is_none());

        assert!(draft.symptoms_after.cramps);
        assert_eq!(draft.notes, "skipped breakfast");
    }

    #[test]
    fn test_draft_deserializes_with_missing_fields() {
        let draft: FoodDraft =
            serde_json::from_str(r#"{"food": "Toast", "symptoms_after": {"Fatigue": true}}"#)
                .unwrap();

        assert_eq!(draft.food, "Toast");
        assert!(draft.notes.is_empty());
        assert_eq!(draft.symptoms_after.selected(), vec![Symptom::Fatigue]);
    }
}
