pub mod balance;
pub mod topup;
pub mod open;
pub mod gifts;

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::api::miniapp::ApiError;
use crate::controller::AppContext;
use crate::page::{PageError, BTN_GIFTS, BTN_OPEN, BTN_TOPUP, OUTPUT};
use crate::utils::user_facing_error;

/// The clickable elements of the mini-app page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    TopUp,
    Open,
    Gifts,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::TopUp, Button::Open, Button::Gifts];

    pub fn element_id(self) -> &'static str {
        match self {
            Button::TopUp => BTN_TOPUP,
            Button::Open => BTN_OPEN,
            Button::Gifts => BTN_GIFTS,
        }
    }

    /// Resolve a typed command or element id to a button
    pub fn parse(input: &str) -> Option<Button> {
        match input.trim().to_lowercase().as_str() {
            "topup" | "top-up" | BTN_TOPUP => Some(Button::TopUp),
            "open" | BTN_OPEN => Some(Button::Open),
            "gifts" | BTN_GIFTS => Some(Button::Gifts),
            _ => None,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.element_id())
    }
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Page(#[from] PageError),
}

/// What became of a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Completed,
    /// The request failed; the failure text is already in the output region
    Failed(ApiError),
    /// The button's previous click was still pending
    Ignored,
}

/// Run the handler bound to `button`
///
/// Backend failures are rendered into `#output` and reported as `Failed`.
/// Only a broken page contract surfaces as `Err`.
pub async fn handle_click(ctx: &AppContext, button: Button) -> Result<ClickOutcome, PageError> {
    let Some(_permit) = ctx.in_flight.try_acquire(button) else {
        debug!("Ignoring click on {}: previous click still pending", button);
        return Ok(ClickOutcome::Ignored);
    };

    debug!("Click on {}", button);
    let result = match button {
        Button::TopUp => topup::execute(ctx).await,
        Button::Open => open::execute(ctx).await,
        Button::Gifts => gifts::execute(ctx).await,
    };

    match result {
        Ok(()) => Ok(ClickOutcome::Completed),
        Err(CommandError::Page(e)) => Err(e),
        Err(CommandError::Api(e)) => {
            warn!("❌ Error handling click on {}: {}", button, e);
            ctx.view.set_text(OUTPUT, &user_facing_error(&e))?;
            Ok(ClickOutcome::Failed(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_element_ids() {
        assert_eq!(Button::parse("topup"), Some(Button::TopUp));
        assert_eq!(Button::parse(" btn-open "), Some(Button::Open));
        assert_eq!(Button::parse("GIFTS"), Some(Button::Gifts));
        assert_eq!(Button::parse("balance"), None);
    }

    #[test]
    fn element_ids_round_trip() {
        for button in Button::ALL {
            assert_eq!(Button::parse(button.element_id()), Some(button));
        }
    }
}
