//! # classify
//!
//! Shared domain crate for the One Piece character classifier front-ends.
//! Holds the static character table, the canonical prediction wire contract,
//! and the pure result-resolution and chart-layout logic consumed by both
//! the browser UI and the CLI. No I/O lives here.

pub mod characters;
pub mod protocol;
pub mod render;
