// 📜 Session History - Newest-first record of past calculations
// Held in memory only; dropped when the session ends

use crate::calculator::BmiResult;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// ============================================================================
// HISTORY ENTRY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub bmi: f64,
    pub category: String,
    pub emoji: String,

    /// When this calculation happened (session clock, shown in the UI)
    pub recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn from_result(result: &BmiResult) -> Self {
        HistoryEntry {
            bmi: result.bmi,
            category: result.category.clone(),
            emoji: result.emoji.clone(),
            recorded_at: Local::now(),
        }
    }

    /// One-line rendering, value formatted to two decimals
    pub fn line(&self) -> String {
        format!("BMI: {:.2} - {} {}", self.bmi, self.category, self.emoji)
    }
}

// ============================================================================
// HISTORY
// ============================================================================

/// Ordered record of past calculations, newest first, unbounded.
/// Owned by the presentation layer; the calculator never writes here.
#[derive(Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History { entries: Vec::new() }
    }

    /// Prepend a new entry so the most recent calculation is first
    pub fn record(&mut self, result: &BmiResult) {
        self.entries.insert(0, HistoryEntry::from_result(result));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest-first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
