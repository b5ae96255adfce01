//! Canonical wire contract for the prediction endpoint.
//!
//! The endpoint accepts `POST /predict` with `{"image": "<base64 data URL>"}`
//! and answers either `{"character": ..., "confidence"?: ..., "probabilities"?:
//! [...]}` or `{"error": "..."}`. The historical front-end variants disagreed
//! on field names (`predicted_class`, `success`); this crate speaks one shape
//! and both clients use it.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

/// Request body for `POST /predict`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PredictRequest {
    /// Base64 data URL of the uploaded image.
    pub image: String,
}

/// Raw response body from the prediction endpoint.
///
/// Both the success and the error shape deserialize into this struct;
/// [`PredictResponse::into_result`] picks them apart.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub probabilities: Option<Vec<f32>>,
}

/// A successful classification for one upload cycle.
///
/// Transient: replaced wholesale by the next prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub character: String,
    pub confidence: Option<f32>,
    /// Per-class probabilities aligned to the character table order.
    /// Empty when the endpoint omitted the vector.
    pub probabilities: Vec<f32>,
}

/// Why a prediction cycle failed at the protocol level.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("{0}")]
    Server(String),
    #[error("response missing `character` field")]
    MissingCharacter,
}

impl PredictResponse {
    /// Convert the raw body into a prediction or an error.
    ///
    /// A present `error` field wins over everything else; otherwise the
    /// `character` field is required.
    pub fn into_result(self) -> Result<Prediction, PredictError> {
        if let Some(message) = self.error {
            return Err(PredictError::Server(message));
        }
        let character = self.character.ok_or(PredictError::MissingCharacter)?;
        Ok(Prediction {
            character,
            confidence: self.confidence,
            probabilities: self.probabilities.unwrap_or_default(),
        })
    }
}

impl Prediction {
    /// Confidence for the top prediction: the server-supplied scalar when
    /// present, otherwise the maximum of the probability vector.
    pub fn effective_confidence(&self) -> Option<f32> {
        self.confidence
            .or_else(|| self.probabilities.iter().copied().reduce(f32::max))
    }
}
