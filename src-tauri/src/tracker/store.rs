//! In-memory daily log store
//!
//! Holds symptom and food entries partitioned by calendar day, plus the
//! currently selected day. A day with no sequence reads as empty.
//! Entries are appended, never edited, and only removed by clearing a
//! whole day.

use super::models::{
    DayLog, EntryId, FoodEntry, LogDate, PainLevel, SymptomEntry, SymptomFlags,
};
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};

/// Date-keyed store for symptom and food entries
#[derive(Debug, Clone)]
pub struct DailyLogStore {
    selected_date: LogDate,
    symptoms_by_date: BTreeMap<LogDate, Vec<SymptomEntry>>,
    food_by_date: BTreeMap<LogDate, Vec<FoodEntry>>,
}

impl DailyLogStore {
    pub fn new(selected_date: LogDate) -> Self {
        Self {
            selected_date,
            symptoms_by_date: BTreeMap::new(),
            food_by_date: BTreeMap::new(),
        }
    }

    pub fn selected_date(&self) -> LogDate {
        self.selected_date
    }

    /// Change the selected day. Future dates are the caller's concern.
    pub fn select_date(&mut self, date: LogDate) {
        self.selected_date = date;
    }

    /// Append a symptom entry to `date`.
    ///
    /// Returns `None` without touching the store when `symptoms` is blank.
    pub fn add_symptom_entry(
        &mut self,
        date: LogDate,
        symptoms: &str,
        pain_level: PainLevel,
        notes: &str,
    ) -> Option<&SymptomEntry> {
        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            tracing::debug!("Ignoring symptom entry with empty text for {}", date);
            return None;
        }

        let entry = SymptomEntry {
            id: EntryId::generate(),
            symptoms: symptoms.to_string(),
            pain_level,
            notes: notes.trim().to_string(),
            created_at: Utc::now(),
        };

        tracing::debug!("Adding symptom entry {} for {}", entry.id, date);

        let entries = self.symptoms_by_date.entry(date).or_default();
        entries.push(entry);
        entries.last()
    }

    /// Append a food entry to `date`, recording the checked symptoms.
    ///
    /// Returns `None` without touching the store when `food` is blank.
    pub fn add_food_entry(
        &mut self,
        date: LogDate,
        food: &str,
        notes: &str,
        symptoms_after: &SymptomFlags,
    ) -> Option<&FoodEntry> {
        let food = food.trim();
        if food.is_empty() {
            tracing::debug!("Ignoring food entry with empty text for {}", date);
            return None;
        }

        let entry = FoodEntry {
            id: EntryId::generate(),
            food: food.to_string(),
            notes: notes.trim().to_string(),
            symptoms_after: symptoms_after.selected(),
            created_at: Utc::now(),
        };

        tracing::debug!("Adding food entry {} for {}", entry.id, date);

        let entries = self.food_by_date.entry(date).or_default();
        entries.push(entry);
        entries.last()
    }

    /// Empty the symptom sequence for `date`
    pub fn clear_symptoms(&mut self, date: LogDate) {
        self.symptoms_by_date.insert(date, Vec::new());
    }

    /// Empty the food sequence for `date`
    pub fn clear_food(&mut self, date: LogDate) {
        self.food_by_date.insert(date, Vec::new());
    }

    pub fn symptoms_for(&self, date: LogDate) -> &[SymptomEntry] {
        self.symptoms_by_date
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn food_for(&self, date: LogDate) -> &[FoodEntry] {
        self.food_by_date
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Snapshot of both sequences for display
    pub fn entries_for(&self, date: LogDate) -> DayLog {
        DayLog {
            date,
            symptoms: self.symptoms_for(date).to_vec(),
            food: self.food_for(date).to_vec(),
        }
    }

    /// Days holding at least one entry, oldest first
    pub fn logged_dates(&self) -> Vec<LogDate> {
        let symptom_days = self
            .symptoms_by_date
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(date, _)| *date);
        let food_days = self
            .food_by_date
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(date, _)| *date);

        symptom_days
            .chain(food_days)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
