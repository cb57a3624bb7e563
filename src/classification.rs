// 🏷️ BMI Classification - Thresholds as Data
// Ordered band table mapping a BMI value to a category label and emoji

use serde::{Deserialize, Serialize};
use anyhow::{Result, Context as AnyhowContext};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

// ============================================================================
// BAND DEFINITION
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiBand {
    /// Exclusive upper bound of this band (None = open-ended final band)
    pub upper_bound: Option<f64>,

    /// Category label ("Underweight", "Normal weight", ...)
    pub category: String,

    /// Emoji shown for this band
    pub emoji: String,
}

impl BmiBand {
    /// Check if a BMI value falls inside this band
    pub fn matches(&self, bmi: f64) -> bool {
        match self.upper_bound {
            Some(bound) => bmi < bound,
            None => true,
        }
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: String,
    pub emoji: String,
}

// ============================================================================
// CLASSIFICATION TABLE
// ============================================================================

pub struct ClassificationTable {
    bands: Vec<BmiBand>,
}

impl ClassificationTable {
    /// The six standard bands.
    ///
    /// The 24.9/29.9/34.9/39.9 bounds are kept exactly as the original app
    /// had them, even though WHO rounds the obesity cutoffs to 30/35/40.
    pub fn standard() -> Self {
        ClassificationTable::from_bands(vec![
            band(Some(18.5), "Underweight", "😟"),
            band(Some(24.9), "Normal weight", "😃"),
            band(Some(29.9), "Overweight", "😐"),
            band(Some(34.9), "Obesity Class I", "😟"),
            band(Some(39.9), "Obesity Class II", "😧"),
            band(None, "Obesity Class III", "😱"),
        ])
    }

    /// Load a band table from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read bands file: {:?}", path.as_ref()))?;

        let bands: Vec<BmiBand> = serde_json::from_str(&content)
            .context("Failed to parse bands JSON")?;

        Ok(ClassificationTable::from_bands(bands))
    }

    /// Create a table from a list of bands
    pub fn from_bands(mut bands: Vec<BmiBand>) -> Self {
        // Sort ascending by upper bound, open-ended band last
        bands.sort_by(|a, b| match (a.upper_bound, b.upper_bound) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        ClassificationTable { bands }
    }

    /// Classify a BMI value: first matching band wins (bands already sorted)
    pub fn classify(&self, bmi: f64) -> Classification {
        for band in &self.bands {
            if band.matches(bmi) {
                return Classification {
                    category: band.category.clone(),
                    emoji: band.emoji.clone(),
                };
            }
        }

        // Unreachable with an open-ended band present; empty table fallback
        Classification {
            category: "Unclassified".to_string(),
            emoji: "❓".to_string(),
        }
    }

    /// Get number of bands in the table
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn band(upper_bound: Option<f64>, category: &str, emoji: &str) -> BmiBand {
    BmiBand {
        upper_bound,
        category: category.to_string(),
        emoji: emoji.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
