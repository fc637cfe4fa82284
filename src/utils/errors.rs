use crate::api::miniapp::ApiError;

/// Shown when the backend gave no reason of its own
pub const GENERIC_FAILURE_TEXT: &str = "Не удалось выполнить запрос";

/// Build the output text for a failed button action
///
/// Refusals the backend explains (e.g. "Недостаточно средств") are shown verbatim;
/// transport errors, bare status codes and malformed bodies get the generic text.
pub fn user_facing_error(error: &ApiError) -> String {
    format!("❌ {}", error.server_message().unwrap_or(GENERIC_FAILURE_TEXT))
}
