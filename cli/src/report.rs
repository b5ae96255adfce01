//! Batch report generation: summary statistics plus JSON, CSV, and text
//! report files.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use classify::characters;
use classify::protocol::Prediction;

/// Result of classifying one file in a batch run.
#[derive(Clone, Debug)]
pub struct FileOutcome {
    pub path: String,
    pub outcome: Result<Prediction, String>,
}

/// Aggregate statistics over one batch run. Serialized as the JSON summary.
#[derive(Clone, Debug, serde::Serialize)]
pub struct BatchSummary {
    pub total_images: usize,
    pub successful_predictions: usize,
    pub failed_predictions: usize,
    pub success_rate: f64,
    /// Predicted class identifier to occurrence count.
    pub character_distribution: BTreeMap<String, usize>,
    pub average_confidence: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
    pub timestamp: String,
}

impl BatchSummary {
    /// Aggregate outcomes into summary statistics.
    ///
    /// Rates and confidence statistics are 0 when there is nothing to
    /// aggregate. Outcomes without any confidence signal are counted in the
    /// distribution but excluded from the confidence statistics.
    pub fn build(outcomes: &[FileOutcome], timestamp: String) -> Self {
        let total_images = outcomes.len();
        let mut character_distribution = BTreeMap::new();
        let mut confidences: Vec<f64> = Vec::new();
        let mut successful_predictions = 0;

        for outcome in outcomes {
            if let Ok(prediction) = &outcome.outcome {
                successful_predictions += 1;
                *character_distribution
                    .entry(prediction.character.clone())
                    .or_insert(0) += 1;
                if let Some(confidence) = prediction.effective_confidence() {
                    confidences.push(f64::from(confidence));
                }
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let success_rate = if total_images == 0 {
            0.0
        } else {
            successful_predictions as f64 / total_images as f64
        };

        #[allow(clippy::cast_precision_loss)]
        let average_confidence = if confidences.is_empty() {
            0.0
        } else {
            confidences.iter().sum::<f64>() / confidences.len() as f64
        };

        Self {
            total_images,
            successful_predictions,
            failed_predictions: total_images - successful_predictions,
            success_rate,
            character_distribution,
            average_confidence,
            min_confidence: confidences.iter().copied().fold(f64::NAN, f64::min),
            max_confidence: confidences.iter().copied().fold(f64::NAN, f64::max),
            timestamp,
        }
        .normalized()
    }

    fn normalized(mut self) -> Self {
        if self.min_confidence.is_nan() {
            self.min_confidence = 0.0;
        }
        if self.max_confidence.is_nan() {
            self.max_confidence = 0.0;
        }
        self
    }
}

/// Paths of the report files written by [`write_reports`].
#[derive(Clone, Debug)]
pub struct ReportPaths {
    pub summary: PathBuf,
    pub csv: PathBuf,
    pub text: PathBuf,
}

/// Write the JSON summary, detailed CSV, and text report.
///
/// # Errors
///
/// Fails when the output directory cannot be created or a file cannot be
/// written.
pub fn write_reports(
    output_dir: &Path,
    summary: &BatchSummary,
    outcomes: &[FileOutcome],
) -> std::io::Result<ReportPaths> {
    std::fs::create_dir_all(output_dir)?;

    let paths = ReportPaths {
        summary: output_dir.join(format!("summary_{}.json", summary.timestamp)),
        csv: output_dir.join(format!("detailed_results_{}.csv", summary.timestamp)),
        text: output_dir.join(format!("report_{}.txt", summary.timestamp)),
    };

    let json = serde_json::to_string_pretty(summary)
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    std::fs::write(&paths.summary, json)?;
    std::fs::write(&paths.csv, csv_report(outcomes))?;
    std::fs::write(&paths.text, text_report(summary, outcomes))?;
    Ok(paths)
}

/// Render the detailed per-file CSV.
pub fn csv_report(outcomes: &[FileOutcome]) -> String {
    let mut out = String::from(
        "image_path,success,predicted_class,confidence,character_name,crew,error\n",
    );
    for outcome in outcomes {
        match &outcome.outcome {
            Ok(prediction) => {
                let record = characters::lookup(&prediction.character);
                let confidence = prediction
                    .effective_confidence()
                    .map(|c| format!("{c:.6}"))
                    .unwrap_or_default();
                out.push_str(&format!(
                    "{},true,{},{},{},{},\n",
                    csv_field(&outcome.path),
                    csv_field(&prediction.character),
                    confidence,
                    csv_field(record.map_or(prediction.character.as_str(), |r| r.name)),
                    csv_field(record.map_or("Unknown", |r| r.crew)),
                ));
            }
            Err(error) => {
                out.push_str(&format!(
                    "{},false,,,,,{}\n",
                    csv_field(&outcome.path),
                    csv_field(error),
                ));
            }
        }
    }
    out
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

/// Render the human-readable text report.
pub fn text_report(summary: &BatchSummary, outcomes: &[FileOutcome]) -> String {
    let mut out = String::new();
    out.push_str("One Piece Character Classifier - Batch Report\n");
    out.push_str(&format!("{}\n\n", "=".repeat(50)));
    out.push_str(&format!("Generated: {}\n\n", summary.timestamp));

    out.push_str("SUMMARY\n");
    out.push_str(&format!("{}\n", "-".repeat(20)));
    out.push_str(&format!("Total images: {}\n", summary.total_images));
    out.push_str(&format!(
        "Successful predictions: {}\n",
        summary.successful_predictions
    ));
    out.push_str(&format!(
        "Failed predictions: {}\n",
        summary.failed_predictions
    ));
    out.push_str(&format!(
        "Success rate: {:.2}%\n",
        summary.success_rate * 100.0
    ));
    out.push_str(&format!(
        "Average confidence: {:.2}%\n",
        summary.average_confidence * 100.0
    ));
    out.push_str(&format!(
        "Min confidence: {:.2}%\n",
        summary.min_confidence * 100.0
    ));
    out.push_str(&format!(
        "Max confidence: {:.2}%\n\n",
        summary.max_confidence * 100.0
    ));

    out.push_str("CHARACTER DISTRIBUTION\n");
    out.push_str(&format!("{}\n", "-".repeat(25)));
    for (character, count) in &summary.character_distribution {
        #[allow(clippy::cast_precision_loss)]
        let share = if summary.successful_predictions == 0 {
            0.0
        } else {
            *count as f64 / summary.successful_predictions as f64 * 100.0
        };
        out.push_str(&format!("{character}: {count} ({share:.1}%)\n"));
    }
    out.push('\n');

    out.push_str("DETAILED RESULTS\n");
    out.push_str(&format!("{}\n", "-".repeat(17)));
    for outcome in outcomes {
        out.push_str(&format!("Image: {}\n", outcome.path));
        match &outcome.outcome {
            Ok(prediction) => {
                out.push_str("Status: Success\n");
                out.push_str(&format!("Predicted: {}\n", prediction.character));
                if let Some(confidence) = prediction.effective_confidence() {
                    out.push_str(&format!("Confidence: {:.2}%\n", confidence * 100.0));
                }
                let crew = characters::lookup(&prediction.character)
                    .map_or("Unknown", |record| record.crew);
                out.push_str(&format!("Crew: {crew}\n"));
            }
            Err(error) => {
                out.push_str("Status: Failed\n");
                out.push_str(&format!("Error: {error}\n"));
            }
        }
        out.push_str(&format!("{}\n", "-".repeat(30)));
    }
    out
}
