//! The page the mini-app renders into
//!
//! `View` is the document contract the controller relies on: a fixed set of
//! element ids whose text can be replaced. Every write replaces the whole text
//! of one element atomically; nothing orders writes from different handlers.

use std::collections::BTreeMap;
use std::sync::Mutex;

use thiserror::Error;

pub const BTN_TOPUP: &str = "btn-topup";
pub const BTN_OPEN: &str = "btn-open";
pub const BTN_GIFTS: &str = "btn-gifts";
pub const OUTPUT: &str = "output";
pub const BALANCE: &str = "balance";

/// Elements that must exist before the controller initializes
pub const REQUIRED_ELEMENTS: [&str; 5] = [BTN_TOPUP, BTN_OPEN, BTN_GIFTS, OUTPUT, BALANCE];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Element #{0} is missing from the page")]
    MissingElement(String),
    #[error("Page state is poisoned")]
    Poisoned,
}

pub trait View: Send + Sync {
    fn has_element(&self, id: &str) -> bool;

    /// Replace the text of element `id`
    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError>;

    fn text(&self, id: &str) -> Option<String>;
}

/// In-memory page holding the text of each element
#[derive(Debug, Default)]
pub struct Page {
    elements: Mutex<BTreeMap<String, String>>,
}

impl Page {
    /// A page with the given elements, all empty
    #[cfg(test)]
    pub fn with_elements(ids: &[&str]) -> Self {
        let elements: Vec<(&str, &str)> = ids.iter().map(|id| (*id, "")).collect();
        Self::with_texts(&elements)
    }

    /// A page with the given `(id, text)` elements
    pub fn with_texts(elements: &[(&str, &str)]) -> Self {
        let elements = elements
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect();
        Self {
            elements: Mutex::new(elements),
        }
    }

    /// The mini-app page: three captioned buttons plus the output and balance slots
    pub fn miniapp() -> Self {
        Self::with_texts(&[
            (BTN_TOPUP, "Пополнить"),
            (BTN_OPEN, "Открыть кейс"),
            (BTN_GIFTS, "Мои подарки"),
            (OUTPUT, ""),
            (BALANCE, ""),
        ])
    }

    /// The two text slots as printed by the terminal driver
    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            self.text(BALANCE).unwrap_or_default(),
            self.text(OUTPUT).unwrap_or_default()
        )
    }
}

impl View for Page {
    fn has_element(&self, id: &str) -> bool {
        self.elements
            .lock()
            .map(|elements| elements.contains_key(id))
            .unwrap_or(false)
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
        let mut elements = self.elements.lock().map_err(|_| PageError::Poisoned)?;
        let slot = elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?;
        *slot = text.to_string();
        Ok(())
    }

    fn text(&self, id: &str) -> Option<String> {
        self.elements.lock().ok()?.get(id).cloned()
    }
}
