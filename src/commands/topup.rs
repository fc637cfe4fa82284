use super::{balance, CommandError};
use crate::controller::AppContext;
use crate::page::OUTPUT;
use crate::services::topup_service;

pub async fn execute(ctx: &AppContext) -> Result<(), CommandError> {
    let result = topup_service::top_up(ctx.api.as_ref()).await?;
    ctx.view.set_text(OUTPUT, &result.message)?;

    balance::execute(ctx).await?;
    Ok(())
}
