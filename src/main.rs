// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

// Use library instead of local modules
use bmi_calculator::{BmiCalculator, ClassificationTable, Outcome};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "compute" {
        // One-shot mode: compute <weight-kg> <height-m>
        run_compute(&args[2..])?;
    } else {
        // UI mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

fn run_compute(args: &[String]) -> Result<()> {
    let weight_raw = args.first().map(String::as_str).unwrap_or("");
    let height_raw = args.get(1).map(String::as_str).unwrap_or("");

    let calculator = load_calculator()?;
    let outcome = calculator.compute(weight_raw, height_raw);

    println!("{} {}", outcome.emoji(), outcome.message().replace('\n', " / "));

    // Input errors exit non-zero so shell callers can tell them apart
    if !matches!(outcome, Outcome::Success(_)) {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🖥️  Loading BMI Calculator UI...\n");

    let calculator = load_calculator()?;

    println!("Starting UI... (Press Esc to quit)\n");

    // Create and run app
    let mut app = ui::App::new(calculator);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use one-shot mode: bmi-calculator compute <weight-kg> <height-m>");
    std::process::exit(1);
}

/// Standard band table, or a custom one from BMI_BANDS_FILE if set
fn load_calculator() -> Result<BmiCalculator> {
    match env::var("BMI_BANDS_FILE") {
        Ok(path) => {
            let table = ClassificationTable::from_file(&path)?;
            println!("✓ Loaded {} classification bands from {}", table.band_count(), path);
            Ok(BmiCalculator::with_table(table))
        }
        Err(_) => Ok(BmiCalculator::new()),
    }
}
