use tracing::debug;

use crate::api::miniapp::{ApiError, MiniAppApi};
use crate::models::GiftList;

pub async fn list_gifts(api: &dyn MiniAppApi) -> Result<GiftList, ApiError> {
    let response = api.gifts().await?;
    debug!("User owns {} gifts", response.gifts.len());

    Ok(GiftList {
        gifts: response.gifts,
    })
}
