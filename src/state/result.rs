#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use classify::protocol::Prediction;

/// The prediction being displayed, if any.
///
/// Transient per display cycle: `set` replaces it wholesale, `clear` empties
/// it on "start over". Errors never touch an existing prediction, so a
/// failed cycle leaves the previous fields intact.
#[derive(Clone, Debug, Default)]
pub struct ResultState {
    pub current: Option<Prediction>,
}

impl ResultState {
    pub fn set(&mut self, prediction: Prediction) {
        self.current = Some(prediction);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
