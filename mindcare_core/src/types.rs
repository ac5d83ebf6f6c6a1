//! Core domain types for the MindCare tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Mood levels and mood-log entries
//! - Chat turns and response categories
//! - Recommendation categories
//! - The resource catalog

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

// ============================================================================
// Mood
// ============================================================================

/// One of the five ordered mood levels, lowest first
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    VerySad,
    Sad,
    Neutral,
    Content,
    Happy,
}

impl Mood {
    /// All levels in rank order
    pub const ALL: [Mood; 5] = [
        Mood::VerySad,
        Mood::Sad,
        Mood::Neutral,
        Mood::Content,
        Mood::Happy,
    ];

    /// Canonical rank, 1 (lowest) to 5 (highest)
    pub fn rank(self) -> u8 {
        match self {
            Mood::VerySad => 1,
            Mood::Sad => 2,
            Mood::Neutral => 3,
            Mood::Content => 4,
            Mood::Happy => 5,
        }
    }

    /// Inverse of [`Mood::rank`]
    pub fn from_rank(rank: u8) -> Option<Mood> {
        Mood::ALL.into_iter().find(|m| m.rank() == rank)
    }

    /// The emoji shown on the mood slider
    pub fn symbol(self) -> &'static str {
        match self {
            Mood::VerySad => "😢",
            Mood::Sad => "😔",
            Mood::Neutral => "😐",
            Mood::Content => "🙂",
            Mood::Happy => "😄",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mood::VerySad => "very_sad",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
            Mood::Content => "content",
            Mood::Happy => "happy",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Mood {
    type Err = Error;

    /// Accepts the emoji symbol, the level name (any case, `-` or `_`), or the rank digit
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let normalized = trimmed.to_lowercase().replace('-', "_");

        Mood::ALL
            .into_iter()
            .find(|m| {
                m.symbol() == trimmed
                    || m.name() == normalized
                    || m.rank().to_string() == normalized
            })
            .ok_or_else(|| Error::InvalidMood(trimmed.to_string()))
    }
}

// ============================================================================
// Mood Entries
// ============================================================================

/// Allowed energy levels
pub const ENERGY_RANGE: RangeInclusive<u8> = 1..=10;

/// Allowed stress levels
pub const STRESS_RANGE: RangeInclusive<u8> = 1..=10;

/// Allowed hours of sleep
pub const SLEEP_RANGE: RangeInclusive<f64> = 0.0..=12.0;

/// Sleep is recorded in half-hour steps
pub const SLEEP_STEP: f64 = 0.5;

/// A single mood-log entry
///
/// Field bounds are a precondition set by the caller. [`crate::EntryStore`]
/// does not check them; use [`MoodEntry::check_bounds`] before appending.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub energy: u8,
    pub sleep: f64,
    /// Absent on quick check-ins
    pub stress: Option<u8>,
    pub notes: Option<String>,
}

impl MoodEntry {
    /// Create an entry without stress or notes
    pub fn new(date: NaiveDate, mood: Mood, energy: u8, sleep: f64) -> Self {
        Self {
            date,
            mood,
            energy,
            sleep,
            stress: None,
            notes: None,
        }
    }

    pub fn with_stress(mut self, stress: u8) -> Self {
        self.stress = Some(stress);
        self
    }

    /// Attach notes; blank text is treated as no notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// Check every numeric field against its declared bounds
    ///
    /// Returns the first violation found.
    pub fn check_bounds(&self) -> Result<()> {
        if !ENERGY_RANGE.contains(&self.energy) {
            return Err(Error::InvalidEntry(format!(
                "energy {} outside {}-{}",
                self.energy,
                ENERGY_RANGE.start(),
                ENERGY_RANGE.end()
            )));
        }

        if !SLEEP_RANGE.contains(&self.sleep) {
            return Err(Error::InvalidEntry(format!(
                "sleep {} outside {}-{} hours",
                self.sleep,
                SLEEP_RANGE.start(),
                SLEEP_RANGE.end()
            )));
        }

        if (self.sleep / SLEEP_STEP).fract() != 0.0 {
            return Err(Error::InvalidEntry(format!(
                "sleep {} is not a multiple of {} hours",
                self.sleep, SLEEP_STEP
            )));
        }

        if let Some(stress) = self.stress {
            if !STRESS_RANGE.contains(&stress) {
                return Err(Error::InvalidEntry(format!(
                    "stress {} outside {}-{}",
                    stress,
                    STRESS_RANGE.start(),
                    STRESS_RANGE.end()
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Chat Types
// ============================================================================

/// Who said a chat turn
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// A single line of conversation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

/// Category assigned to a chat message by the keyword classifier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    Anxiety,
    Depression,
    Stress,
    Positive,
    SleepIssue,
    Generic,
}

// ============================================================================
// Recommendations and Resources
// ============================================================================

/// Overall reading of the mood log, used to pick a recommendation block
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Negative,
    Positive,
    Neutral,
}

impl RecommendationCategory {
    pub const ALL: [RecommendationCategory; 3] = [
        RecommendationCategory::Negative,
        RecommendationCategory::Positive,
        RecommendationCategory::Neutral,
    ];
}

/// A coping technique or practice
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Technique {
    pub name: String,
    pub description: String,
}

/// Resources suggested for one recommendation category
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecommendationBlock {
    pub headline: String,
    pub items: Vec<Technique>,
}

/// Read-only library of techniques by category, plus recommendation blocks
#[derive(Clone, Debug, Serialize)]
pub struct ResourceCatalog {
    pub(crate) categories: BTreeMap<String, Vec<Technique>>,
    pub(crate) recommendations: BTreeMap<RecommendationCategory, RecommendationBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_mood_ranks_are_ordered() {
        let ranks: Vec<u8> = Mood::ALL.iter().map(|m| m.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert!(Mood::VerySad < Mood::Happy);
        assert_eq!(Mood::from_rank(4), Some(Mood::Content));
        assert_eq!(Mood::from_rank(0), None);
    }

    #[test]
    fn test_mood_parses_symbol_name_and_rank() {
        assert_eq!("😢".parse::<Mood>().unwrap(), Mood::VerySad);
        assert_eq!("Very-Sad".parse::<Mood>().unwrap(), Mood::VerySad);
        assert_eq!("content".parse::<Mood>().unwrap(), Mood::Content);
        assert_eq!("5".parse::<Mood>().unwrap(), Mood::Happy);
        assert!(matches!("meh".parse::<Mood>(), Err(Error::InvalidMood(_))));
    }

    #[test]
    fn test_check_bounds_accepts_valid_entry() {
        let entry = MoodEntry::new(day(), Mood::Neutral, 5, 7.5).with_stress(10);
        assert!(entry.check_bounds().is_ok());

        let edge = MoodEntry::new(day(), Mood::Sad, 1, 0.0);
        assert!(edge.check_bounds().is_ok());
    }

    #[test]
    fn test_check_bounds_rejects_out_of_range_fields() {
        let energy = MoodEntry::new(day(), Mood::Neutral, 11, 7.0);
        assert!(matches!(energy.check_bounds(), Err(Error::InvalidEntry(_))));

        let sleep = MoodEntry::new(day(), Mood::Neutral, 5, 12.5);
        assert!(sleep.check_bounds().is_err());

        let step = MoodEntry::new(day(), Mood::Neutral, 5, 7.25);
        assert!(step.check_bounds().is_err());

        let stress = MoodEntry::new(day(), Mood::Neutral, 5, 7.0).with_stress(0);
        assert!(stress.check_bounds().is_err());
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let entry = MoodEntry::new(day(), Mood::Happy, 8, 8.0).with_notes("   ");
        assert_eq!(entry.notes, None);

        let entry = MoodEntry::new(day(), Mood::Happy, 8, 8.0).with_notes("walked the dog");
        assert_eq!(entry.notes.as_deref(), Some("walked the dog"));
    }
}
