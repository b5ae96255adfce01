//! Browser utility helpers.

pub mod file_reader;
pub mod viewport;
