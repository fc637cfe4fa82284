use super::CommandError;
use crate::controller::AppContext;
use crate::page::OUTPUT;
use crate::services::gifts_service;

pub async fn execute(ctx: &AppContext) -> Result<(), CommandError> {
    let gifts = gifts_service::list_gifts(ctx.api.as_ref()).await?;
    ctx.view.set_text(OUTPUT, &gifts.display_text())?;

    Ok(())
}
