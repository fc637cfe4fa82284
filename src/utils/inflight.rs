use std::collections::HashSet;
use std::sync::Mutex;

use crate::commands::Button;

/// Tracks which buttons have a click in progress
#[derive(Debug, Default)]
pub struct InFlight {
    pending: Mutex<HashSet<Button>>,
}

/// Marks a button busy until dropped
#[derive(Debug)]
pub struct InFlightPermit<'a> {
    owner: &'a InFlight,
    button: Button,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `button`, or `None` if its previous click has not finished yet
    pub fn try_acquire(&self, button: Button) -> Option<InFlightPermit<'_>> {
        let mut pending = self.pending.lock().ok()?;
        if !pending.insert(button) {
            return None;
        }

        Some(InFlightPermit { owner: self, button })
    }

    #[cfg(test)]
    pub fn is_pending(&self, button: Button) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.contains(&button))
            .unwrap_or(false)
    }
}

impl Drop for InFlightPermit<'_> {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.owner.pending.lock() {
            pending.remove(&self.button);
        }
    }
}
