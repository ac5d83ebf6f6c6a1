//! CSV export of the mood log.
//!
//! This is a one-way report of the current session; nothing reads it back.

use crate::{MoodEntry, Result};
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    date: String,
    mood: &'static str,
    rank: u8,
    energy: u8,
    sleep: f64,
    stress: Option<u8>,
    notes: Option<&'a str>,
}

impl<'a> From<&'a MoodEntry> for CsvRow<'a> {
    fn from(entry: &'a MoodEntry) -> Self {
        CsvRow {
            date: entry.date.format("%Y-%m-%d").to_string(),
            mood: entry.mood.name(),
            rank: entry.mood.rank(),
            energy: entry.energy,
            sleep: entry.sleep,
            stress: entry.stress,
            notes: entry.notes.as_deref(),
        }
    }
}

/// Write entries to a CSV file, replacing any existing file
///
/// Returns the number of rows written (header excluded).
pub fn write_csv(entries: &[MoodEntry], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Header must be written even when there are no rows
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(["date", "mood", "rank", "energy", "sleep", "stress", "notes"])?;

    for entry in entries {
        writer.serialize(CsvRow::from(entry))?;
    }

    writer.flush()?;

    tracing::info!("Exported {} entries to {:?}", entries.len(), path);
    Ok(entries.len())
}
