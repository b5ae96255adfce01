#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Rows shown in the probability chart on narrow viewports.
const NARROW_CHART_LIMIT: usize = 5;

/// Page-level UI state: mobile nav menu and viewport class.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub menu_open: bool,
    /// Set once on mount from a media query; narrow viewports get the
    /// truncated chart the old mobile variant rendered.
    pub narrow_viewport: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Chart row limit for the current viewport: top 5 on narrow screens,
    /// all rows otherwise.
    pub fn chart_limit(&self) -> Option<usize> {
        self.narrow_viewport.then_some(NARROW_CHART_LIMIT)
    }
}
