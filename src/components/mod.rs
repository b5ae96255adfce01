//! UI components, one per file.

pub mod gallery;
pub mod nav_bar;
pub mod notifications;
pub mod probability_chart;
pub mod result_panel;
pub mod upload_panel;
