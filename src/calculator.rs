// 🧮 BMI Calculator - Pure computation, no stored state
// Two raw input strings in, one tagged Outcome out

use crate::classification::ClassificationTable;

// ============================================================================
// MEASUREMENT
// ============================================================================

/// A parsed weight/height pair. Built per calculation, discarded after use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl Measurement {
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// A successful calculation: value plus its classification
#[derive(Debug, Clone, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: String,
    pub emoji: String,
}

/// Result of one calculation attempt. All three variants are recoverable;
/// nothing panics across this boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(BmiResult),
    MissingInput,
    InvalidInput,
}

impl Outcome {
    /// User-facing message for this outcome
    pub fn message(&self) -> String {
        match self {
            Outcome::Success(result) => format!(
                "Your BMI: {:.2}\nClassification: {}",
                result.bmi, result.category
            ),
            Outcome::MissingInput => "Fill in all fields!".to_string(),
            Outcome::InvalidInput => "Enter valid numeric values.".to_string(),
        }
    }

    /// Emoji shown next to the message
    pub fn emoji(&self) -> &str {
        match self {
            Outcome::Success(result) => &result.emoji,
            Outcome::MissingInput => "⚠️",
            Outcome::InvalidInput => "❌",
        }
    }
}

// ============================================================================
// CALCULATOR
// ============================================================================

pub struct BmiCalculator {
    table: ClassificationTable,
}

impl BmiCalculator {
    /// Calculator with the standard six-band table
    pub fn new() -> Self {
        BmiCalculator {
            table: ClassificationTable::standard(),
        }
    }

    /// Calculator with a custom band table
    pub fn with_table(table: ClassificationTable) -> Self {
        BmiCalculator { table }
    }

    /// Compute and classify BMI from two raw input strings.
    ///
    /// Pure function: same inputs, same Outcome, no side effects. Recording
    /// history on success is the caller's job.
    pub fn compute(&self, weight_raw: &str, height_raw: &str) -> Outcome {
        let weight_raw = weight_raw.trim();
        let height_raw = height_raw.trim();

        if weight_raw.is_empty() || height_raw.is_empty() {
            return Outcome::MissingInput;
        }

        let weight_kg = match parse_positive(weight_raw) {
            Some(v) => v,
            None => return Outcome::InvalidInput,
        };
        let height_m = match parse_positive(height_raw) {
            Some(v) => v,
            None => return Outcome::InvalidInput,
        };

        let measurement = Measurement { weight_kg, height_m };
        let bmi = measurement.bmi();
        let classification = self.table.classify(bmi);

        Outcome::Success(BmiResult {
            bmi,
            category: classification.category,
            emoji: classification.emoji,
        })
    }
}

impl Default for BmiCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a decimal string, accepting only finite positive values
fn parse_positive(raw: &str) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn success_of(outcome: Outcome) -> BmiResult {
        match outcome {
            Outcome::Success(result) => result,
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn test_normal_weight_example() {
        let calc = BmiCalculator::new();
        let result = success_of(calc.compute("70", "1.75"));

        assert!((result.bmi - 22.857142857).abs() < TOLERANCE);
        assert_eq!(result.category, "Normal weight");
        assert_eq!(result.emoji, "😃");
    }

    #[test]
    fn test_bmi_formula() {
        let calc = BmiCalculator::new();

        let cases = [(50.0, 1.60), (70.5, 1.75), (95.0, 1.82), (120.0, 1.68)];
        for (w, h) in cases {
            let result = success_of(calc.compute(&w.to_string(), &h.to_string()));
            assert!((result.bmi - w / (h * h)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let calc = BmiCalculator::new();
        let result = success_of(calc.compute("  70  ", "\t1.75\n"));

        assert_eq!(result.category, "Normal weight");
    }

    #[test]
    fn test_empty_fields() {
        let calc = BmiCalculator::new();

        assert_eq!(calc.compute("", "1.75"), Outcome::MissingInput);
        assert_eq!(calc.compute("70", ""), Outcome::MissingInput);
        assert_eq!(calc.compute("", ""), Outcome::MissingInput);
        assert_eq!(calc.compute("   ", "1.75"), Outcome::MissingInput);
    }

    #[test]
    fn test_non_numeric_input() {
        let calc = BmiCalculator::new();

        assert_eq!(calc.compute("abc", "1.75"), Outcome::InvalidInput);
        assert_eq!(calc.compute("70", "tall"), Outcome::InvalidInput);
        assert_eq!(calc.compute("7o", "1.75"), Outcome::InvalidInput);
    }

    #[test]
    fn test_non_positive_input() {
        let calc = BmiCalculator::new();

        assert_eq!(calc.compute("0", "1.75"), Outcome::InvalidInput);
        assert_eq!(calc.compute("-70", "1.75"), Outcome::InvalidInput);
        assert_eq!(calc.compute("70", "0"), Outcome::InvalidInput);
        assert_eq!(calc.compute("70", "inf"), Outcome::InvalidInput);
        assert_eq!(calc.compute("NaN", "1.75"), Outcome::InvalidInput);
    }

    #[test]
    fn test_outcome_messages() {
        let calc = BmiCalculator::new();

        assert_eq!(calc.compute("", "").message(), "Fill in all fields!");
        assert_eq!(calc.compute("", "").emoji(), "⚠️");
        assert_eq!(
            calc.compute("x", "1.75").message(),
            "Enter valid numeric values."
        );
        assert_eq!(calc.compute("x", "1.75").emoji(), "❌");

        let outcome = calc.compute("70", "1.75");
        assert_eq!(
            outcome.message(),
            "Your BMI: 22.86\nClassification: Normal weight"
        );
        assert_eq!(outcome.emoji(), "😃");
    }

    #[test]
    fn test_categories_across_bands() {
        let calc = BmiCalculator::new();
        let height = "1.75"; // height² = 3.0625

        // weight chosen to land each band
        assert_eq!(success_of(calc.compute("50", height)).category, "Underweight");
        assert_eq!(success_of(calc.compute("70", height)).category, "Normal weight");
        assert_eq!(success_of(calc.compute("85", height)).category, "Overweight");
        assert_eq!(success_of(calc.compute("100", height)).category, "Obesity Class I");
        assert_eq!(success_of(calc.compute("115", height)).category, "Obesity Class II");
        assert_eq!(success_of(calc.compute("130", height)).category, "Obesity Class III");
    }

    #[test]
    fn test_custom_table() {
        use crate::classification::{BmiBand, ClassificationTable};

        let table = ClassificationTable::from_bands(vec![
            BmiBand {
                upper_bound: Some(25.0),
                category: "Ok".to_string(),
                emoji: "😃".to_string(),
            },
            BmiBand {
                upper_bound: None,
                category: "High".to_string(),
                emoji: "😱".to_string(),
            },
        ]);
        let calc = BmiCalculator::with_table(table);

        assert_eq!(success_of(calc.compute("70", "1.75")).category, "Ok");
        assert_eq!(success_of(calc.compute("90", "1.75")).category, "High");
    }
}
