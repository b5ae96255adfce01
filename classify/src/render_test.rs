use super::*;

fn prediction(character: &str, confidence: Option<f32>, probabilities: Vec<f32>) -> Prediction {
    Prediction {
        character: character.to_owned(),
        confidence,
        probabilities,
    }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn known_character_resolves_to_full_record() {
    let resolved = resolve(&prediction("Luffy", Some(0.97), Vec::new()));
    assert!(resolved.known);
    assert_eq!(resolved.name, "Monkey D. Luffy");
    assert_eq!(resolved.crew, "Straw Hat Pirates");
    assert_eq!(resolved.confidence_percent().as_deref(), Some("97%"));
}

#[test]
fn unknown_character_resolves_to_placeholder() {
    let resolved = resolve(&prediction("Buggy", None, Vec::new()));
    assert!(!resolved.known);
    assert_eq!(resolved.name, "Buggy");
    assert_eq!(resolved.description, "Character information not available.");
    assert_eq!(resolved.bounty, "Unknown");
    assert_eq!(resolved.crew, "Unknown");
    assert_eq!(resolved.image, crate::characters::PLACEHOLDER_IMAGE);
}

#[test]
fn confidence_comes_from_probabilities_when_scalar_absent() {
    let resolved = resolve(&prediction("Zoro", None, vec![0.1, 0.7, 0.2]));
    assert_eq!(resolved.confidence_percent().as_deref(), Some("70%"));
}

#[test]
fn missing_confidence_renders_no_badge() {
    let resolved = resolve(&prediction("Zoro", None, Vec::new()));
    assert_eq!(resolved.confidence_percent(), None);
}

// =============================================================
// chart_rows
// =============================================================

#[test]
fn rows_are_sorted_descending() {
    let rows = chart_rows(&[0.1, 0.7, 0.2], None);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].label, "Zoro");
    assert_eq!(rows[0].percent, 70);
    assert_eq!(rows[1].label, "Nami");
    assert_eq!(rows[1].percent, 20);
    assert_eq!(rows[2].label, "Luffy");
    assert_eq!(rows[2].percent, 10);
}

#[test]
fn rows_are_proportional_to_probabilities() {
    let rows = chart_rows(&[0.1, 0.7, 0.2], None);
    assert!((rows[0].fraction - 0.7).abs() < f32::EPSILON);
    assert!((rows[1].fraction - 0.2).abs() < f32::EPSILON);
    assert!((rows[2].fraction - 0.1).abs() < f32::EPSILON);
}

#[test]
fn limit_keeps_only_top_rows() {
    let rows = chart_rows(&[0.05, 0.3, 0.1, 0.25, 0.2, 0.1], Some(5));
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].label, "Zoro");
    // The lowest entry (Luffy at 0.05) fell off.
    assert!(rows.iter().all(|row| row.label != "Luffy"));
}

#[test]
fn probabilities_beyond_table_length_are_dropped() {
    let probabilities = vec![0.5; 20];
    let rows = chart_rows(&probabilities, None);
    assert_eq!(rows.len(), crate::characters::CHARACTERS.len());
}

#[test]
fn out_of_range_values_are_clamped() {
    let rows = chart_rows(&[1.5, -0.3], None);
    assert!((rows[0].fraction - 1.0).abs() < f32::EPSILON);
    assert_eq!(rows[0].percent, 100);
    assert!(rows[1].fraction.abs() < f32::EPSILON);
    assert_eq!(rows[1].percent, 0);
}

#[test]
fn empty_probabilities_yield_no_rows() {
    assert!(chart_rows(&[], None).is_empty());
}

// =============================================================
// percent
// =============================================================

#[test]
fn percent_rounds_to_nearest_whole() {
    assert_eq!(percent(0.974), 97);
    assert_eq!(percent(0.975), 98);
    assert_eq!(percent(0.0), 0);
    assert_eq!(percent(1.0), 100);
}
