//! Prediction endpoint client.
//!
//! Client-side (hydrate): one real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the endpoint is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! One best-effort attempt per upload cycle: no retry, no timeout, no
//! cancellation. Transport and parse failures come back as `Err(String)`
//! and surface as a generic error toast; server-reported errors arrive as a
//! parsed body and are picked apart by `PredictResponse::into_result`.

#![allow(clippy::unused_async)]

use classify::protocol::{PredictRequest, PredictResponse};

/// Relative prediction endpoint, served from the same origin as the page.
pub const PREDICT_URL: &str = "/predict";

/// POST the base64 data URL to `/predict` and parse the JSON body.
///
/// The body is parsed regardless of HTTP status: the endpoint reports
/// failures as `{"error": ...}` with 4xx/5xx statuses, and those should
/// reach the caller as a structured response, not a transport error.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the body is
/// not valid JSON for the canonical shape.
pub async fn predict(image_data_url: &str) -> Result<PredictResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = PredictRequest {
            image: image_data_url.to_owned(),
        };
        let response = gloo_net::http::Request::post(PREDICT_URL)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        response
            .json::<PredictResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image_data_url;
        Err("not available on server".to_owned())
    }
}
