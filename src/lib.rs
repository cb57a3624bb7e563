// BMI Calculator - Core Library
// Exposes calculation, classification, and history modules for the CLI, UI, and tests

pub mod calculator;
pub mod classification;
pub mod history;

// Re-export commonly used types
pub use calculator::{BmiCalculator, BmiResult, Measurement, Outcome};
pub use classification::{BmiBand, Classification, ClassificationTable};
pub use history::{History, HistoryEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
