#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Per-cycle upload state: current phase, preview source, and drag highlight.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub phase: UploadPhase,
    /// Data URL of the accepted file, shown in the preview element.
    pub preview_url: Option<String>,
    /// True while a drag hovers the drop area.
    pub drag_active: bool,
}

/// Phase of the current upload cycle.
///
/// `Idle → Previewing → Loading → ResultShown | ErrorShown`, looping back to
/// `Idle` on "start over". A new upload overwrites whatever phase was active;
/// an in-flight request is never cancelled, its outcome just lands on the
/// newer cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Previewing,
    Loading,
    ResultShown,
    ErrorShown,
}

impl UploadState {
    /// Accept a decoded file: store the preview and enter `Previewing`.
    pub fn begin_preview(&mut self, data_url: String) {
        self.preview_url = Some(data_url);
        self.phase = UploadPhase::Previewing;
    }

    /// The prediction request is in flight.
    pub fn begin_loading(&mut self) {
        self.phase = UploadPhase::Loading;
    }

    pub fn show_result(&mut self) {
        self.phase = UploadPhase::ResultShown;
    }

    pub fn show_error(&mut self) {
        self.phase = UploadPhase::ErrorShown;
    }

    /// "Start over": drop the preview and return to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the preview container should be visible.
    pub fn preview_visible(&self) -> bool {
        self.preview_url.is_some() && self.phase != UploadPhase::Idle
    }
}

/// Accept only image MIME types, matching the original front-end check.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}
