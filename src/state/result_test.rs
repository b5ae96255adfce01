use super::*;

#[test]
fn default_has_no_prediction() {
    assert!(ResultState::default().current.is_none());
}

#[test]
fn set_replaces_previous_prediction() {
    let mut state = ResultState::default();
    state.set(Prediction {
        character: "Luffy".to_owned(),
        confidence: Some(0.9),
        probabilities: Vec::new(),
    });
    state.set(Prediction {
        character: "Zoro".to_owned(),
        confidence: None,
        probabilities: vec![0.2, 0.8],
    });
    let current = state.current.expect("prediction set");
    assert_eq!(current.character, "Zoro");
}

#[test]
fn clear_empties_the_result() {
    let mut state = ResultState::default();
    state.set(Prediction {
        character: "Luffy".to_owned(),
        confidence: None,
        probabilities: Vec::new(),
    });
    state.clear();
    assert!(state.current.is_none());
}
