//! Aggregates over the mood log.
//!
//! Everything here is a pure function of a slice of entries, in the order
//! given. Means return `None` on empty input so an empty log never reads as
//! a low score; the recommendation needs at least one entry and returns
//! [`Error::EmptyStore`] otherwise.

use crate::config::RecommendationConfig;
use crate::{
    Error, Mood, MoodEntry, RecommendationBlock, RecommendationCategory, ResourceCatalog, Result,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One point of the mood-over-time chart
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub rank: u8,
}

/// One point of the sleep-vs-energy scatter chart
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SleepEnergyPoint {
    pub sleep: f64,
    pub energy: u8,
    pub mood: Mood,
}

/// Dashboard overview of the log
#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub count: usize,
    pub latest_mood: Mood,
    pub mean_energy: f64,
    pub mean_sleep: f64,
    pub mean_mood: f64,
    /// None when no entry recorded stress
    pub mean_stress: Option<f64>,
    pub recent: Vec<MoodEntry>,
}

/// A recommendation category with the resources it selects
#[derive(Clone, Debug, Serialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub block: RecommendationBlock,
}

/// Thresholds for [`recommendation_category_with`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecommendationRules {
    pub stress_threshold: f64,
    pub fallback_stress: f64,
}

impl Default for RecommendationRules {
    fn default() -> Self {
        Self {
            stress_threshold: 7.0,
            fallback_stress: 5.0,
        }
    }
}

impl From<&RecommendationConfig> for RecommendationRules {
    fn from(config: &RecommendationConfig) -> Self {
        Self {
            stress_threshold: config.stress_threshold,
            fallback_stress: config.fallback_stress,
        }
    }
}

fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

// ============================================================================
// Means
// ============================================================================

pub fn mean_energy(entries: &[MoodEntry]) -> Option<f64> {
    mean(entries.iter().map(|e| f64::from(e.energy)))
}

pub fn mean_sleep(entries: &[MoodEntry]) -> Option<f64> {
    mean(entries.iter().map(|e| e.sleep))
}

/// Mean over the entries that recorded stress
pub fn mean_stress(entries: &[MoodEntry]) -> Option<f64> {
    mean(entries.iter().filter_map(|e| e.stress).map(f64::from))
}

/// Mean mood rank (1-5)
pub fn mean_mood(entries: &[MoodEntry]) -> Option<f64> {
    mean(entries.iter().map(|e| f64::from(e.mood.rank())))
}

// ============================================================================
// Chart Series
// ============================================================================

/// Mood rank per entry, in entry order (not sorted by date)
pub fn mood_trend(entries: &[MoodEntry]) -> Vec<TrendPoint> {
    entries
        .iter()
        .map(|e| TrendPoint {
            date: e.date,
            rank: e.mood.rank(),
        })
        .collect()
}

/// How often each mood was logged; only moods that occur are present
pub fn mood_distribution(entries: &[MoodEntry]) -> BTreeMap<Mood, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }
    counts
}

pub fn sleep_energy_points(entries: &[MoodEntry]) -> Vec<SleepEnergyPoint> {
    entries
        .iter()
        .map(|e| SleepEnergyPoint {
            sleep: e.sleep,
            energy: e.energy,
            mood: e.mood,
        })
        .collect()
}

// ============================================================================
// Recommendation
// ============================================================================

/// Classify the log with the default thresholds
///
/// ## Rules
///
/// 1. **Negative**: latest mood rank ≤ 2, or mean stress > 7
///    (entries without stress don't count; 5 is assumed if none recorded it)
/// 2. **Positive**: latest mood rank ≥ 4
/// 3. **Neutral**: otherwise
pub fn recommendation_category(entries: &[MoodEntry]) -> Result<RecommendationCategory> {
    recommendation_category_with(entries, RecommendationRules::default())
}

/// Classify the log with explicit thresholds
pub fn recommendation_category_with(
    entries: &[MoodEntry],
    rules: RecommendationRules,
) -> Result<RecommendationCategory> {
    let latest = entries.last().ok_or(Error::EmptyStore)?;
    let rank = latest.mood.rank();
    let stress = mean_stress(entries).unwrap_or(rules.fallback_stress);

    let category = if rank <= 2 || stress > rules.stress_threshold {
        RecommendationCategory::Negative
    } else if rank >= 4 {
        RecommendationCategory::Positive
    } else {
        RecommendationCategory::Neutral
    };

    tracing::debug!(
        "Recommendation {:?} (latest rank {}, mean stress {:.1})",
        category,
        rank,
        stress
    );
    Ok(category)
}

/// Pick the catalog's recommendation block for this log
pub fn recommend(
    entries: &[MoodEntry],
    catalog: &ResourceCatalog,
    rules: RecommendationRules,
) -> Result<Recommendation> {
    let category = recommendation_category_with(entries, rules)?;
    let block = catalog
        .recommendation_block(category)
        .cloned()
        .ok_or_else(|| {
            Error::CatalogValidation(format!("No recommendation block for {:?}", category))
        })?;

    Ok(Recommendation { category, block })
}

// ============================================================================
// Summary
// ============================================================================

/// Dashboard metrics, carrying `recent` (usually [`crate::EntryStore::recent`]) for the table
pub fn summarize(entries: &[MoodEntry], recent: &[MoodEntry]) -> Result<Summary> {
    let latest = entries.last().ok_or(Error::EmptyStore)?;

    Ok(Summary {
        count: entries.len(),
        latest_mood: latest.mood,
        mean_energy: mean_energy(entries).ok_or(Error::EmptyStore)?,
        mean_sleep: mean_sleep(entries).ok_or(Error::EmptyStore)?,
        mean_mood: mean_mood(entries).ok_or(Error::EmptyStore)?,
        mean_stress: mean_stress(entries),
        recent: recent.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_default_catalog;

    fn entry(day: u32, mood: Mood, energy: u8, sleep: f64, stress: Option<u8>) -> MoodEntry {
        let e = MoodEntry::new(
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            mood,
            energy,
            sleep,
        );
        match stress {
            Some(s) => e.with_stress(s),
            None => e,
        }
    }

    #[test]
    fn test_means_on_empty_are_none() {
        assert_eq!(mean_energy(&[]), None);
        assert_eq!(mean_sleep(&[]), None);
        assert_eq!(mean_stress(&[]), None);
        assert_eq!(mean_mood(&[]), None);
    }

    #[test]
    fn test_means() {
        let entries = vec![
            entry(1, Mood::Sad, 4, 6.0, Some(8)),
            entry(2, Mood::Happy, 8, 8.5, None),
            entry(3, Mood::Neutral, 6, 7.0, Some(4)),
        ];

        assert_eq!(mean_energy(&entries), Some(6.0));
        assert_eq!(mean_sleep(&entries), Some(7.166666666666667));
        // the entry without stress does not contribute
        assert_eq!(mean_stress(&entries), Some(6.0));
        assert_eq!(mean_mood(&entries), Some(10.0 / 3.0));
    }

    #[test]
    fn test_mean_stress_none_when_never_recorded() {
        let entries = vec![entry(1, Mood::Sad, 4, 6.0, None)];
        assert_eq!(mean_stress(&entries), None);
    }

    #[test]
    fn test_mood_trend_preserves_input_order() {
        let entries = vec![
            entry(9, Mood::Happy, 5, 7.0, None),
            entry(2, Mood::VerySad, 5, 7.0, None),
            entry(5, Mood::Content, 5, 7.0, None),
        ];

        let trend = mood_trend(&entries);
        assert_eq!(trend.len(), entries.len());
        let ranks: Vec<u8> = trend.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![5, 1, 4]);
        assert_eq!(trend[1].date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    }

    #[test]
    fn test_mood_distribution_sums_to_count() {
        let entries = vec![
            entry(1, Mood::Sad, 5, 7.0, None),
            entry(2, Mood::Sad, 5, 7.0, None),
            entry(3, Mood::Happy, 5, 7.0, None),
            entry(4, Mood::Neutral, 5, 7.0, None),
        ];

        let dist = mood_distribution(&entries);
        assert_eq!(dist.values().sum::<usize>(), entries.len());
        assert_eq!(dist[&Mood::Sad], 2);
        assert!(!dist.contains_key(&Mood::VerySad));
    }

    #[test]
    fn test_low_mood_is_negative_regardless_of_stress() {
        let entries = vec![entry(1, Mood::Sad, 5, 7.0, Some(1))];
        assert_eq!(
            recommendation_category(&entries).unwrap(),
            RecommendationCategory::Negative
        );
    }

    #[test]
    fn test_high_mood_low_stress_is_positive() {
        let entries = vec![entry(1, Mood::Happy, 5, 7.0, Some(3))];
        assert_eq!(
            recommendation_category(&entries).unwrap(),
            RecommendationCategory::Positive
        );
    }

    #[test]
    fn test_high_mean_stress_overrides_good_mood() {
        let entries = vec![
            entry(1, Mood::Neutral, 5, 7.0, Some(9)),
            entry(2, Mood::Happy, 5, 7.0, Some(8)),
        ];
        assert_eq!(
            recommendation_category(&entries).unwrap(),
            RecommendationCategory::Negative
        );
    }

    #[test]
    fn test_stress_of_exactly_seven_is_not_negative() {
        let entries = vec![entry(1, Mood::Content, 5, 7.0, Some(7))];
        assert_eq!(
            recommendation_category(&entries).unwrap(),
            RecommendationCategory::Positive
        );
    }

    #[test]
    fn test_entries_without_stress_do_not_dilute_mean() {
        // counting the missing value as zero would give a mean of 4 and Neutral
        let entries = vec![
            entry(1, Mood::Neutral, 5, 7.0, Some(8)),
            entry(2, Mood::Neutral, 5, 7.0, None),
        ];
        assert_eq!(
            recommendation_category(&entries).unwrap(),
            RecommendationCategory::Negative
        );
    }

    #[test]
    fn test_neutral_mood_without_stress_is_neutral() {
        let entries = vec![entry(1, Mood::Neutral, 5, 7.0, None)];
        assert_eq!(
            recommendation_category(&entries).unwrap(),
            RecommendationCategory::Neutral
        );
    }

    #[test]
    fn test_fallback_stress_is_configurable() {
        let entries = vec![entry(1, Mood::Neutral, 5, 7.0, None)];
        let rules = RecommendationRules {
            stress_threshold: 7.0,
            fallback_stress: 8.0,
        };
        assert_eq!(
            recommendation_category_with(&entries, rules).unwrap(),
            RecommendationCategory::Negative
        );
    }

    #[test]
    fn test_empty_log_has_no_recommendation() {
        assert!(matches!(
            recommendation_category(&[]),
            Err(Error::EmptyStore)
        ));
        assert!(matches!(summarize(&[], &[]), Err(Error::EmptyStore)));
    }

    #[test]
    fn test_recommend_uses_catalog_block() {
        let entries = vec![entry(1, Mood::Happy, 5, 7.0, None)];
        let rec = recommend(&entries, get_default_catalog(), RecommendationRules::default())
            .unwrap();
        assert_eq!(rec.category, RecommendationCategory::Positive);
        assert_eq!(rec.block.items[0].name, "Gratitude journaling");
    }

    #[test]
    fn test_summarize() {
        let entries = vec![
            entry(1, Mood::Sad, 2, 5.0, None),
            entry(2, Mood::Neutral, 4, 6.0, None),
            entry(3, Mood::Content, 6, 7.0, None),
            entry(4, Mood::Happy, 8, 8.0, None),
        ];

        let summary = summarize(&entries, &entries[1..]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.latest_mood, Mood::Happy);
        assert_eq!(summary.mean_energy, 5.0);
        assert_eq!(summary.mean_sleep, 6.5);
        assert_eq!(summary.mean_mood, 3.5);
        assert_eq!(summary.mean_stress, None);
        assert_eq!(summary.recent.len(), 3);
        assert_eq!(summary.recent[0].mood, Mood::Neutral);
    }

    #[test]
    fn test_sleep_energy_points() {
        let entries = vec![entry(1, Mood::Content, 7, 7.5, None)];
        let points = sleep_energy_points(&entries);
        assert_eq!(
            points,
            vec![SleepEnergyPoint {
                sleep: 7.5,
                energy: 7,
                mood: Mood::Content
            }]
        );
    }
}
