pub mod client;
pub mod models;

pub use client::{MiniAppApi, MiniAppClient};
pub use models::{ActionResponse, ApiError};
