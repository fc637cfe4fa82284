//! View models rendered into the mini-app page
//!
//! Each model is built from one backend response, turned into display text and discarded.

pub mod balance;
pub mod action;
pub mod gifts;

pub use balance::BalanceView;
pub use action::ActionResult;
pub use gifts::GiftList;
