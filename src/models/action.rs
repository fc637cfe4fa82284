//! Top-up and open-case result models

/// Message returned by a mutating endpoint, shown once in the output region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub message: String,
}

impl ActionResult {
    /// Message for a won gift when the backend does not phrase one itself
    pub fn gift_won(gift: &str) -> Self {
        Self {
            message: format!("Вы получили: {}", gift),
        }
    }
}
