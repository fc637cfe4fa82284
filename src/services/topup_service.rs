use tracing::info;

use crate::api::miniapp::{ActionResponse, ApiError, MiniAppApi};
use crate::models::ActionResult;

pub async fn top_up(api: &dyn MiniAppApi) -> Result<ActionResult, ApiError> {
    let response = api.top_up().await?;
    let result = into_action_result(response)?;
    info!("⭐ Top-up: {}", result.message);

    Ok(result)
}

/// Pick the message to show from a top-up or open-case response
pub(crate) fn into_action_result(response: ActionResponse) -> Result<ActionResult, ApiError> {
    match (response.message, response.gift) {
        (Some(message), _) => Ok(ActionResult { message }),
        (None, Some(gift)) => Ok(ActionResult::gift_won(&gift)),
        (None, None) => Err(ApiError::DeserializationError(
            "Response has neither message nor gift".to_string(),
        )),
    }
}
