use super::{balance, CommandError};
use crate::controller::AppContext;
use crate::page::OUTPUT;
use crate::services::open_service;

pub async fn execute(ctx: &AppContext) -> Result<(), CommandError> {
    let result = open_service::open_case(ctx.api.as_ref(), &ctx.case).await?;
    ctx.view.set_text(OUTPUT, &result.message)?;

    balance::execute(ctx).await?;
    Ok(())
}
