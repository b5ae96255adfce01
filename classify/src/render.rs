//! Pure result-rendering logic.
//!
//! DESIGN
//! ======
//! These functions take explicit prediction state and return display values;
//! no DOM or terminal access. Both the browser UI and the CLI render from
//! the same resolution and chart layout.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::characters::{self, PLACEHOLDER_IMAGE};
use crate::protocol::Prediction;

/// Display fields for one prediction, with the placeholder substituted
/// when the predicted identifier has no record.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedResult {
    pub id: String,
    pub name: String,
    pub description: String,
    pub bounty: String,
    pub crew: String,
    pub fruit: String,
    pub image: String,
    /// False when the placeholder record was substituted.
    pub known: bool,
    /// Effective confidence in [0, 1], when the endpoint supplied any.
    pub confidence: Option<f32>,
}

impl ResolvedResult {
    /// Confidence as a whole-percent display string, e.g. "97%".
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence.map(|c| format!("{}%", percent(c)))
    }
}

/// One bar of the probability chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRow {
    pub label: &'static str,
    /// Bar fill fraction, clamped to [0, 1].
    pub fraction: f32,
    /// Whole-percent value for the row label.
    pub percent: u8,
}

/// Resolve a prediction against the character table.
pub fn resolve(prediction: &Prediction) -> ResolvedResult {
    let confidence = prediction.effective_confidence();
    match characters::lookup(&prediction.character) {
        Some(record) => ResolvedResult {
            id: record.id.to_owned(),
            name: record.name.to_owned(),
            description: record.description.to_owned(),
            bounty: record.bounty.to_owned(),
            crew: record.crew.to_owned(),
            fruit: record.fruit.to_owned(),
            image: record.image.to_owned(),
            known: true,
            confidence,
        },
        None => ResolvedResult {
            id: prediction.character.clone(),
            name: prediction.character.clone(),
            description: "Character information not available.".to_owned(),
            bounty: "Unknown".to_owned(),
            crew: "Unknown".to_owned(),
            fruit: "Unknown".to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            known: false,
            confidence,
        },
    }
}

/// Lay out probability-chart rows: pair each probability with the class name
/// at the same index, sort descending, and truncate to `limit` when given.
///
/// Probabilities beyond the character table length have no label and are
/// dropped.
pub fn chart_rows(probabilities: &[f32], limit: Option<usize>) -> Vec<ChartRow> {
    let mut rows: Vec<ChartRow> = characters::class_names()
        .zip(probabilities.iter().copied())
        .map(|(label, probability)| {
            let fraction = probability.clamp(0.0, 1.0);
            ChartRow {
                label,
                fraction,
                percent: percent(fraction),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.fraction
            .partial_cmp(&a.fraction)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

/// Round a fraction in [0, 1] to a whole percent.
// round() stays within 0..=100 after the clamp
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(fraction: f32) -> u8 {
    let clamped = fraction.clamp(0.0, 1.0);
    (clamped * 100.0).round() as u8
}
