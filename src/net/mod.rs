//! Network layer: the single HTTP call to the prediction endpoint.

pub mod api;
