use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::host::WebAppHost;
use crate::page::{Page, View, BALANCE};

/// An origin on a local port nothing listens on
pub fn closed_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Host that counts `expand` calls and snapshots the balance slot at the first one
pub struct RecordingHost {
    page: Arc<Page>,
    calls: AtomicUsize,
    balance_at_expand: Mutex<Option<String>>,
}

impl RecordingHost {
    pub fn new(page: Arc<Page>) -> Self {
        Self {
            page,
            calls: AtomicUsize::new(0),
            balance_at_expand: Mutex::new(None),
        }
    }

    pub fn expand_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn balance_seen_at_expand(&self) -> Option<String> {
        self.balance_at_expand.lock().unwrap().clone()
    }
}

impl WebAppHost for RecordingHost {
    fn expand(&self) {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            *self.balance_at_expand.lock().unwrap() = self.page.text(BALANCE);
        }
    }
}
