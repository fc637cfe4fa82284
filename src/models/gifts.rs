//! Gift list models

/// Text shown when the user owns no gifts
pub const NO_GIFTS_TEXT: &str = "Подарков пока нет";

/// Gift names in the order the backend listed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftList {
    pub gifts: Vec<String>,
}

impl GiftList {
    pub fn display_text(&self) -> String {
        if self.gifts.is_empty() {
            NO_GIFTS_TEXT.to_string()
        } else {
            self.gifts.join(", ")
        }
    }
}
