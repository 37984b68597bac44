//! Tracker models
//!
//! Value types for the daily log: the date key, the pain scale, the fixed
//! symptom vocabulary and the two kinds of entries.
//! All models use serde for serialization to the frontend.

use crate::config;
use crate::error::AppError;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Calendar day used as the partition key for all entries.
///
/// Travels over IPC as a `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogDate(NaiveDate);

impl LogDate {
    /// Parse a strict `YYYY-MM-DD` string
    pub fn parse(s: &str) -> Result<Self, AppError> {
        s.parse()
    }

    /// Today on the local calendar
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }
}

impl FromStr for LogDate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields; the date input never sends them
        if trimmed.len() != 10 {
            return Err(AppError::InvalidDate(s.to_string()));
        }

        NaiveDate::parse_from_str(trimmed, config::DATE_FORMAT)
            .map(Self)
            .map_err(|_| AppError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for LogDate {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LogDate> for String {
    fn from(date: LogDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(config::DATE_FORMAT))
    }
}

/// Pain rating on the 0-10 scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PainLevel(u8);

impl PainLevel {
    pub const MIN: PainLevel = PainLevel(config::MIN_PAIN_LEVEL);
    pub const MAX: PainLevel = PainLevel(config::MAX_PAIN_LEVEL);

    pub fn new(value: i64) -> Result<Self, AppError> {
        if value < i64::from(config::MIN_PAIN_LEVEL) || value > i64::from(config::MAX_PAIN_LEVEL) {
            return Err(AppError::InvalidPainLevel(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for PainLevel {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PainLevel> for u8 {
    fn from(level: PainLevel) -> Self {
        level.0
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, config::MAX_PAIN_LEVEL)
    }
}

/// Symptoms that can be ticked against a food entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symptom {
    Bloating,
    Diarrhea,
    Pain,
    Nausea,
    Fatigue,
    Cramps,
}

impl Symptom {
    /// The whole vocabulary, in display order
    pub const ALL: [Symptom; 6] = [
        Symptom::Bloating,
        Symptom::Diarrhea,
        Symptom::Pain,
        Symptom::Nausea,
        Symptom::Fatigue,
        Symptom::Cramps,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Bloating => "Bloating",
            Symptom::Diarrhea => "Diarrhea",
            Symptom::Pain => "Pain",
            Symptom::Nausea => "Nausea",
            Symptom::Fatigue => "Fatigue",
            Symptom::Cramps => "Cramps",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checkbox state for every vocabulary member.
///
/// Serialized as `{"Bloating": bool, ...}` to match the form's checkbox names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SymptomFlags {
    pub bloating: bool,
    pub diarrhea: bool,
    pub pain: bool,
    pub nausea: bool,
    pub fatigue: bool,
    pub cramps: bool,
}

impl SymptomFlags {
    pub fn get(&self, symptom: Symptom) -> bool {
        match symptom {
            Symptom::Bloating => self.bloating,
            Symptom::Diarrhea => self.diarrhea,
            Symptom::Pain => self.pain,
            Symptom::Nausea => self.nausea,
            Symptom::Fatigue => self.fatigue,
            Symptom::Cramps => self.cramps,
        }
    }

    fn flag_mut(&mut self, symptom: Symptom) -> &mut bool {
        match symptom {
            Symptom::Bloating => &mut self.bloating,
            Symptom::Diarrhea => &mut self.diarrhea,
            Symptom::Pain => &mut self.pain,
            Symptom::Nausea => &mut self.nausea,
            Symptom::Fatigue => &mut self.fatigue,
            Symptom::Cramps => &mut self.cramps,
        }
    }

    pub fn set(&mut self, symptom: Symptom, checked: bool) {
        *self.flag_mut(symptom) = checked;
    }

    pub fn toggle(&mut self, symptom: Symptom) {
        let flag = self.flag_mut(symptom);
        *flag = !*flag;
    }

    /// Checked symptoms in vocabulary order
    pub fn selected(&self) -> Vec<Symptom> {
        Symptom::ALL
            .iter()
            .copied()
            .filter(|symptom| self.get(*symptom))
            .collect()
    }
}

/// Identifier assigned to an entry when it is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A logged set of symptoms with a pain rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: EntryId,
    pub symptoms: String,
    pub pain_level: PainLevel,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// A logged meal and the symptoms that followed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: EntryId,
    pub food: String,
    pub notes: String,
    pub symptoms_after: Vec<Symptom>,
    pub created_at: DateTime<Utc>,
}

/// Everything logged on one day, in entry order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
    pub date: LogDate,
    pub symptoms: Vec<SymptomEntry>,
    pub food: Vec<FoodEntry>,
}

impl DayLog {
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty() && self.food.is_empty()
    }
}
