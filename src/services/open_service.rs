use tracing::info;

use crate::api::miniapp::{ApiError, MiniAppApi};
use crate::models::ActionResult;
use crate::services::topup_service::into_action_result;

pub async fn open_case(api: &dyn MiniAppApi, case: &str) -> Result<ActionResult, ApiError> {
    let response = api.open_case(case).await?;
    let result = into_action_result(response)?;
    info!("🎁 Opened '{}' case: {}", case, result.message);

    Ok(result)
}
