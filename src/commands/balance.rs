use crate::controller::AppContext;
use crate::page::{PageError, BALANCE};
use crate::services::balance_service;

/// Re-fetch the balance and render it; fetch failures render the placeholder
pub async fn execute(ctx: &AppContext) -> Result<(), PageError> {
    let result = balance_service::get_balance(ctx.api.as_ref()).await;
    let text = balance_service::create_balance_text(&result);

    ctx.view.set_text(BALANCE, &text)
}
