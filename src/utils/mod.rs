pub mod errors;
pub mod inflight;

pub use errors::user_facing_error;
pub use inflight::InFlight;
