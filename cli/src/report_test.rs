use super::*;

fn success(path: &str, character: &str, confidence: f32) -> FileOutcome {
    FileOutcome {
        path: path.to_owned(),
        outcome: Ok(Prediction {
            character: character.to_owned(),
            confidence: Some(confidence),
            probabilities: Vec::new(),
        }),
    }
}

fn failure(path: &str, error: &str) -> FileOutcome {
    FileOutcome {
        path: path.to_owned(),
        outcome: Err(error.to_owned()),
    }
}

// =============================================================
// Summary statistics
// =============================================================

#[test]
fn summary_counts_and_rate() {
    let outcomes = vec![
        success("a.jpg", "Luffy", 0.9),
        success("b.jpg", "Luffy", 0.7),
        success("c.jpg", "Zoro", 0.8),
        failure("d.jpg", "decode failed"),
    ];
    let summary = BatchSummary::build(&outcomes, "20260823_120000".to_owned());

    assert_eq!(summary.total_images, 4);
    assert_eq!(summary.successful_predictions, 3);
    assert_eq!(summary.failed_predictions, 1);
    assert!((summary.success_rate - 0.75).abs() < 1e-9);
}

#[test]
fn summary_character_distribution() {
    let outcomes = vec![
        success("a.jpg", "Luffy", 0.9),
        success("b.jpg", "Luffy", 0.7),
        success("c.jpg", "Zoro", 0.8),
    ];
    let summary = BatchSummary::build(&outcomes, String::new());
    assert_eq!(summary.character_distribution.get("Luffy"), Some(&2));
    assert_eq!(summary.character_distribution.get("Zoro"), Some(&1));
}

#[test]
fn summary_confidence_statistics() {
    let outcomes = vec![
        success("a.jpg", "Luffy", 0.9),
        success("b.jpg", "Luffy", 0.7),
        success("c.jpg", "Zoro", 0.8),
    ];
    let summary = BatchSummary::build(&outcomes, String::new());
    assert!((summary.average_confidence - 0.8).abs() < 1e-6);
    assert!((summary.min_confidence - 0.7).abs() < 1e-6);
    assert!((summary.max_confidence - 0.9).abs() < 1e-6);
}

#[test]
fn empty_batch_has_zeroed_statistics() {
    let summary = BatchSummary::build(&[], String::new());
    assert_eq!(summary.total_images, 0);
    assert!(summary.success_rate.abs() < f64::EPSILON);
    assert!(summary.average_confidence.abs() < f64::EPSILON);
    assert!(summary.min_confidence.abs() < f64::EPSILON);
    assert!(summary.max_confidence.abs() < f64::EPSILON);
}

#[test]
fn confidence_falls_back_to_probability_vector() {
    let outcomes = vec![FileOutcome {
        path: "a.jpg".to_owned(),
        outcome: Ok(Prediction {
            character: "Nami".to_owned(),
            confidence: None,
            probabilities: vec![0.1, 0.2, 0.7],
        }),
    }];
    let summary = BatchSummary::build(&outcomes, String::new());
    assert!((summary.max_confidence - 0.7).abs() < 1e-6);
}

// =============================================================
// CSV report
// =============================================================

#[test]
fn csv_has_header_and_one_row_per_outcome() {
    let outcomes = vec![
        success("a.jpg", "Luffy", 0.9),
        failure("b.jpg", "decode failed"),
    ];
    let csv = csv_report(&outcomes);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "image_path,success,predicted_class,confidence,character_name,crew,error"
    );
    assert!(lines[1].starts_with("a.jpg,true,Luffy,"));
    assert!(lines[1].contains("Monkey D. Luffy"));
    assert!(lines[2].starts_with("b.jpg,false,"));
    assert!(lines[2].ends_with("decode failed"));
}

#[test]
fn csv_quotes_fields_containing_delimiters() {
    let outcomes = vec![failure("weird, path.jpg", "said \"no\"")];
    let csv = csv_report(&outcomes);
    assert!(csv.contains("\"weird, path.jpg\""));
    assert!(csv.contains("\"said \"\"no\"\"\""));
}

#[test]
fn csv_unknown_character_uses_identifier_as_name() {
    let outcomes = vec![success("a.jpg", "Buggy", 0.5)];
    let csv = csv_report(&outcomes);
    assert!(csv.contains("Buggy,0.500000,Buggy,Unknown"));
}

// =============================================================
// Text report
// =============================================================

#[test]
fn text_report_contains_summary_and_details() {
    let outcomes = vec![
        success("a.jpg", "Luffy", 0.9),
        failure("b.jpg", "decode failed"),
    ];
    let summary = BatchSummary::build(&outcomes, "20260823_120000".to_owned());
    let text = text_report(&summary, &outcomes);

    assert!(text.contains("Generated: 20260823_120000"));
    assert!(text.contains("Total images: 2"));
    assert!(text.contains("Success rate: 50.00%"));
    assert!(text.contains("Luffy: 1 (100.0%)"));
    assert!(text.contains("Image: a.jpg"));
    assert!(text.contains("Crew: Straw Hat Pirates"));
    assert!(text.contains("Status: Failed"));
    assert!(text.contains("Error: decode failed"));
}
