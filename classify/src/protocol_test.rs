use super::*;

// =============================================================
// Request serialization
// =============================================================

#[test]
fn request_serializes_to_image_field() {
    let request = PredictRequest {
        image: "data:image/png;base64,AAAA".to_owned(),
    };
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "image": "data:image/png;base64,AAAA" })
    );
}

// =============================================================
// Response deserialization
// =============================================================

#[test]
fn success_shape_parses() {
    let body = r#"{"character": "Luffy", "confidence": 0.97, "probabilities": [0.97, 0.03]}"#;
    let response: PredictResponse = serde_json::from_str(body).expect("parse");
    let prediction = response.into_result().expect("success");
    assert_eq!(prediction.character, "Luffy");
    assert_eq!(prediction.confidence, Some(0.97));
    assert_eq!(prediction.probabilities, vec![0.97, 0.03]);
}

#[test]
fn success_shape_without_optional_fields_parses() {
    let body = r#"{"character": "Zoro"}"#;
    let response: PredictResponse = serde_json::from_str(body).expect("parse");
    let prediction = response.into_result().expect("success");
    assert_eq!(prediction.character, "Zoro");
    assert_eq!(prediction.confidence, None);
    assert!(prediction.probabilities.is_empty());
}

#[test]
fn error_shape_parses_to_server_error() {
    let body = r#"{"error": "bad image"}"#;
    let response: PredictResponse = serde_json::from_str(body).expect("parse");
    assert_eq!(
        response.into_result(),
        Err(PredictError::Server("bad image".to_owned()))
    );
}

#[test]
fn error_field_wins_over_character_field() {
    let body = r#"{"error": "bad image", "character": "Luffy"}"#;
    let response: PredictResponse = serde_json::from_str(body).expect("parse");
    assert!(matches!(
        response.into_result(),
        Err(PredictError::Server(_))
    ));
}

#[test]
fn missing_character_is_rejected() {
    let body = r#"{"confidence": 0.5}"#;
    let response: PredictResponse = serde_json::from_str(body).expect("parse");
    assert_eq!(response.into_result(), Err(PredictError::MissingCharacter));
}

#[test]
fn unknown_fields_are_ignored() {
    // The original server also sent `success` and `character_info`.
    let body = r#"{"success": true, "character": "Nami", "character_info": {"crew": "x"}}"#;
    let response: PredictResponse = serde_json::from_str(body).expect("parse");
    assert!(response.into_result().is_ok());
}

// =============================================================
// effective_confidence
// =============================================================

#[test]
fn scalar_confidence_wins_over_probabilities() {
    let prediction = Prediction {
        character: "Luffy".to_owned(),
        confidence: Some(0.42),
        probabilities: vec![0.1, 0.9],
    };
    assert_eq!(prediction.effective_confidence(), Some(0.42));
}

#[test]
fn confidence_falls_back_to_max_probability() {
    let prediction = Prediction {
        character: "Luffy".to_owned(),
        confidence: None,
        probabilities: vec![0.1, 0.7, 0.2],
    };
    assert_eq!(prediction.effective_confidence(), Some(0.7));
}

#[test]
fn confidence_is_none_without_any_signal() {
    let prediction = Prediction {
        character: "Luffy".to_owned(),
        confidence: None,
        probabilities: Vec::new(),
    };
    assert_eq!(prediction.effective_confidence(), None);
}
