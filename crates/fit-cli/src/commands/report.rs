//! Report command for printing session summaries.
//!
//! Writes one report per training in the given order, either as labelled
//! text blocks, as single summary lines or as a JSON array.

use std::io::Write;

use anyhow::{Context, Result};
use fit_core::{CaloriesCalculator, ResultRecord, Training};

use crate::OutputFormat;

/// Formats a result as four labelled lines.
pub fn format_report(result: &ResultRecord) -> String {
    format!(
        "Training type {}\nDistance: {:.2} km\nMean speed: {:.2} km/min\nCalories: {:.2} kcal\n",
        result.training_type, result.distance_km, result.mean_speed_km_per_min, result.calories
    )
}

/// Formats a result as a single summary line.
pub fn format_compact(result: &ResultRecord) -> String {
    format!(
        "{} - Distance: {:.2} km, Mean speed: {:.2} km/min, Calories: {:.2} kcal\n",
        result.training_type, result.distance_km, result.mean_speed_km_per_min, result.calories
    )
}

/// Reports on a single calculator and writes the text block.
pub fn read_data<W: Write>(writer: &mut W, calculator: &dyn CaloriesCalculator) -> Result<()> {
    let result = calculator.report();
    writer.write_all(format_report(&result).as_bytes())?;
    Ok(())
}

/// Runs the report command over the given trainings.
pub fn run<W: Write>(writer: &mut W, trainings: &[Training], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for training in trainings {
                read_data(writer, training)?;
            }
        }
        OutputFormat::Compact => {
            for training in trainings {
                writer.write_all(format_compact(&training.report()).as_bytes())?;
            }
        }
        OutputFormat::Json => {
            let results: Vec<ResultRecord> = trainings.iter().map(Training::report).collect();
            let json =
                serde_json::to_string_pretty(&results).context("failed to serialize reports")?;
            writeln!(writer, "{json}")?;
        }
    }

    writer.flush().context("failed to flush report output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeDelta;
    use fit_core::{Swimming, TrainingType, sample_trainings};
    use insta::assert_snapshot;
    use serde_json::Value;

    fn render(format: OutputFormat) -> String {
        let trainings = sample_trainings().unwrap();
        let mut output = Vec::new();
        run(&mut output, &trainings, format).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_text_report_for_samples() {
        assert_snapshot!(render(OutputFormat::Text), @r"
        Training type Running
        Distance: 40.00 km
        Mean speed: 1.33 km/min
        Calories: 381.73 kcal
        Training type Swimming
        Distance: 40.00 km
        Mean speed: 1.33 km/min
        Calories: 5880.00 kcal
        Training type Walking
        Distance: 24.00 km
        Mean speed: 2.00 km/min
        Calories: 12587.69 kcal
        ");
    }

    #[test]
    fn test_compact_report_for_samples() {
        assert_snapshot!(render(OutputFormat::Compact), @r"
        Running - Distance: 40.00 km, Mean speed: 1.33 km/min, Calories: 381.73 kcal
        Swimming - Distance: 40.00 km, Mean speed: 1.33 km/min, Calories: 5880.00 kcal
        Walking - Distance: 24.00 km, Mean speed: 2.00 km/min, Calories: 12587.69 kcal
        ");
    }

    #[test]
    fn test_json_report_for_samples() {
        let output = render(OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        let reports = parsed.as_array().unwrap();

        let types: Vec<&str> = reports
            .iter()
            .map(|r| r["training_type"].as_str().unwrap())
            .collect();
        assert_eq!(types, ["Running", "Swimming", "Walking"]);
        assert_eq!(reports[2]["distance_km"], 24.0);
        assert_eq!(reports[2]["mean_speed_km_per_min"], 2.0);
    }

    #[test]
    fn test_read_data_writes_four_lines() {
        let swimming = Swimming::new(1200.0, 1.38, TimeDelta::minutes(45), 80.0).unwrap();
        let mut output = Vec::new();
        read_data(&mut output, &swimming).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.lines().count(), 4);
        assert_snapshot!(output, @r"
        Training type Swimming
        Distance: 16.56 km
        Mean speed: 0.37 km/min
        Calories: 6720.00 kcal
        ");
    }

    #[test]
    fn test_format_report_rounds_to_two_decimals() {
        let result = ResultRecord {
            training_type: TrainingType::Walking,
            distance_km: 1.0 / 3.0,
            mean_speed_km_per_min: 0.005,
            calories: 99.999,
        };

        assert_eq!(
            format_report(&result),
            "Training type Walking\nDistance: 0.33 km\nMean speed: 0.01 km/min\nCalories: 100.00 kcal\n"
        );
    }

    #[test]
    fn test_empty_training_list_writes_nothing() {
        let mut output = Vec::new();
        run(&mut output, &[], OutputFormat::Text).unwrap();
        assert!(output.is_empty());
    }
}
