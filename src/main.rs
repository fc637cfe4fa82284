use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod controller;
mod host;
mod models;
mod page;
mod services;
mod utils;
#[cfg(test)]
mod test_support;

use api::miniapp::{MiniAppApi, MiniAppClient};
use commands::{Button, ClickOutcome};
use config::Config;
use controller::ViewController;
use host::TerminalHost;
use page::Page;

const HELP: &str = "Commands: topup | open | gifts | balance | show | help | quit";

fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    for directive in ["rakecase_miniapp=debug", "hyper=warn", "reqwest=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}

fn build_client(config: &Config) -> Result<MiniAppClient, api::miniapp::ApiError> {
    match config.request_timeout {
        Some(timeout) => MiniAppClient::with_timeout(config.origin.clone(), timeout),
        None => Ok(MiniAppClient::new(config.origin.clone())),
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    info!("🎁 Starting RakeCase mini-app...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };

    let client = match build_client(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create API client: {}", e);
            return;
        }
    };
    info!("Backend: {} (case '{}')", client.origin(), config.case);

    let api: Arc<dyn MiniAppApi> = Arc::new(client);
    let page = Arc::new(Page::miniapp());
    let controller = ViewController::new(api, page.clone(), Arc::new(TerminalHost::new()), config.case);

    if let Err(e) = controller.initialize().await {
        error!("Failed to initialize mini-app: {}", e);
        return;
    }
    println!("{}", page.render());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "show" => println!("{}", page.render()),
            "balance" => {
                let controller = controller.clone();
                let page = page.clone();
                tokio::spawn(async move {
                    match controller.refresh_balance().await {
                        Ok(()) => println!("{}", page.render()),
                        Err(e) => error!("Failed to refresh balance: {}", e),
                    }
                });
            }
            input => {
                let Some(button) = Button::parse(input) else {
                    warn!("Unknown command '{}'", input);
                    println!("{}", HELP);
                    continue;
                };

                let controller = controller.clone();
                let page = page.clone();
                tokio::spawn(async move {
                    match controller.click(button).await {
                        Ok(ClickOutcome::Ignored) => {
                            println!("⏳ {} is still working, please wait", button)
                        }
                        Ok(outcome) => {
                            debug!("{} finished: {:?}", button, outcome);
                            println!("{}", page.render());
                        }
                        Err(e) => error!("Page error while handling {}: {}", button, e),
                    }
                });
            }
        }
    }

    info!("👋 Mini-app closed");
}
