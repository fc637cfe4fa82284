//! The mini-app view controller
//!
//! Owns the injected capabilities (backend API, page, host) and exposes one
//! operation per UI trigger. Handlers share nothing but the page, so clicks on
//! different buttons may interleave and the later render wins.

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::miniapp::MiniAppApi;
use crate::commands::{self, Button, ClickOutcome};
use crate::host::WebAppHost;
use crate::page::{PageError, View, REQUIRED_ELEMENTS};
use crate::utils::InFlight;

/// Everything a handler needs, shared by all clicks
pub struct AppContext {
    pub api: Arc<dyn MiniAppApi>,
    pub view: Arc<dyn View>,
    pub host: Arc<dyn WebAppHost>,
    /// Case opened by the open button
    pub case: String,
    pub in_flight: InFlight,
}

#[derive(Clone)]
pub struct ViewController {
    ctx: Arc<AppContext>,
}

impl ViewController {
    pub fn new(
        api: Arc<dyn MiniAppApi>,
        view: Arc<dyn View>,
        host: Arc<dyn WebAppHost>,
        case: String,
    ) -> Self {
        Self {
            ctx: Arc::new(AppContext {
                api,
                view,
                host,
                case,
                in_flight: InFlight::new(),
            }),
        }
    }

    #[cfg(test)]
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Check the page, expand the host view, then show the balance
    pub async fn initialize(&self) -> Result<(), PageError> {
        if let Some(missing) = REQUIRED_ELEMENTS
            .iter()
            .find(|id| !self.ctx.view.has_element(id))
        {
            return Err(PageError::MissingElement(missing.to_string()));
        }
        debug!("Buttons attached: {:?}", Button::ALL.map(Button::element_id));

        self.ctx.host.expand();
        self.refresh_balance().await?;

        info!("✅ Mini-app initialized");
        Ok(())
    }

    pub async fn refresh_balance(&self) -> Result<(), PageError> {
        commands::balance::execute(&self.ctx).await
    }

    pub async fn on_top_up(&self) -> Result<ClickOutcome, PageError> {
        self.click(Button::TopUp).await
    }

    pub async fn on_open(&self) -> Result<ClickOutcome, PageError> {
        self.click(Button::Open).await
    }

    pub async fn on_gifts(&self) -> Result<ClickOutcome, PageError> {
        self.click(Button::Gifts).await
    }

    pub async fn click(&self, button: Button) -> Result<ClickOutcome, PageError> {
        commands::handle_click(&self.ctx, button).await
    }
}
