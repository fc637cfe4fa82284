use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

/// Capabilities the embedding chat client exposes to the mini-app
pub trait WebAppHost: Send + Sync {
    /// Expand the host view surface to its full height
    fn expand(&self);
}

/// Host used when the mini-app runs in a terminal instead of an in-app browser
#[derive(Debug, Default)]
pub struct TerminalHost {
    expanded: AtomicBool,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_expanded(&self) -> bool {
        self.expanded.load(Ordering::SeqCst)
    }
}

impl WebAppHost for TerminalHost {
    fn expand(&self) {
        if !self.expanded.swap(true, Ordering::SeqCst) {
            info!("📱 View expanded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_marks_host_expanded() {
        let host = TerminalHost::new();
        assert!(!host.is_expanded());
        host.expand();
        host.expand();
        assert!(host.is_expanded());
    }
}
