//! Balance slot models

/// Text shown when the balance could not be fetched
pub const BALANCE_PLACEHOLDER: &str = "Баланс: — ⭐";

/// The user's star balance as shown in the `balance` slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceView {
    pub stars: i64,
}

impl BalanceView {
    pub fn display_text(&self) -> String {
        format!("Баланс: {}⭐", self.stars)
    }
}
