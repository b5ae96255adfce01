use super::*;

// =============================================================
// Phase machine
// =============================================================

#[test]
fn default_phase_is_idle() {
    let state = UploadState::default();
    assert_eq!(state.phase, UploadPhase::Idle);
    assert!(state.preview_url.is_none());
    assert!(!state.drag_active);
}

#[test]
fn full_cycle_to_result() {
    let mut state = UploadState::default();
    state.begin_preview("data:image/png;base64,AAAA".to_owned());
    assert_eq!(state.phase, UploadPhase::Previewing);
    assert_eq!(state.preview_url.as_deref(), Some("data:image/png;base64,AAAA"));

    state.begin_loading();
    assert_eq!(state.phase, UploadPhase::Loading);

    state.show_result();
    assert_eq!(state.phase, UploadPhase::ResultShown);
}

#[test]
fn full_cycle_to_error() {
    let mut state = UploadState::default();
    state.begin_preview("data:image/png;base64,AAAA".to_owned());
    state.begin_loading();
    state.show_error();
    assert_eq!(state.phase, UploadPhase::ErrorShown);
}

#[test]
fn reset_returns_to_idle_and_clears_preview() {
    let mut state = UploadState::default();
    state.begin_preview("data:image/png;base64,AAAA".to_owned());
    state.show_result();
    state.reset();
    assert_eq!(state.phase, UploadPhase::Idle);
    assert!(state.preview_url.is_none());
}

#[test]
fn new_upload_overwrites_previous_cycle() {
    let mut state = UploadState::default();
    state.begin_preview("data:image/png;base64,OLD".to_owned());
    state.show_result();

    // No explicit reset required before the next file.
    state.begin_preview("data:image/jpeg;base64,NEW".to_owned());
    assert_eq!(state.phase, UploadPhase::Previewing);
    assert_eq!(state.preview_url.as_deref(), Some("data:image/jpeg;base64,NEW"));
}

// =============================================================
// Preview visibility
// =============================================================

#[test]
fn preview_hidden_when_idle() {
    let state = UploadState::default();
    assert!(!state.preview_visible());
}

#[test]
fn preview_visible_through_active_phases() {
    let mut state = UploadState::default();
    state.begin_preview("data:image/png;base64,AAAA".to_owned());
    assert!(state.preview_visible());
    state.begin_loading();
    assert!(state.preview_visible());
    state.show_result();
    assert!(state.preview_visible());
}

// =============================================================
// MIME validation
// =============================================================

#[test]
fn image_mime_types_are_accepted() {
    assert!(is_image_mime("image/png"));
    assert!(is_image_mime("image/jpeg"));
    assert!(is_image_mime("image/webp"));
}

#[test]
fn non_image_mime_types_are_rejected() {
    assert!(!is_image_mime("application/pdf"));
    assert!(!is_image_mime("text/html"));
    assert!(!is_image_mime("video/mp4"));
    assert!(!is_image_mime(""));
}
