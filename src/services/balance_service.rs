use tracing::{debug, warn};

use crate::api::miniapp::{ApiError, MiniAppApi};
use crate::models::balance::BALANCE_PLACEHOLDER;
use crate::models::BalanceView;

pub async fn get_balance(api: &dyn MiniAppApi) -> Result<BalanceView, ApiError> {
    let me = api.me().await?;
    debug!("Balance for user {:?}: {}", me.user_id, me.balance);

    Ok(BalanceView { stars: me.balance })
}

/// Text for the balance slot; every failure collapses into the placeholder
pub fn create_balance_text(result: &Result<BalanceView, ApiError>) -> String {
    match result {
        Ok(balance) => balance.display_text(),
        Err(e) => {
            warn!("Balance unavailable: {}", e);
            BALANCE_PLACEHOLDER.to_string()
        }
    }
}
