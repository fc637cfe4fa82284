pub mod balance_service;
pub mod topup_service;
pub mod open_service;
pub mod gifts_service;
