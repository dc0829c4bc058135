//! CI automation that proposes CODEOWNERS updates for newly added files.
//!
//! Runs once per pull-request event: reads its configuration and the
//! event payload from the environment, drives the lifecycle controller,
//! and exits non-zero with a readable message if anything fails.

use codeowners_client::OctocrabClient;
use log::{error, info, warn};

mod config;
mod controller;
mod event;

use config::Config;
use controller::{LifecycleController, Outcome};
use event::PullRequestEvent;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(err) = run().await {
        error!("{:#}", err);
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Only pull_request events carry work for this automation.
    match std::env::var("GITHUB_EVENT_NAME") {
        Ok(name) if name == "pull_request" => {}
        Ok(name) => {
            info!("Ignoring {} event", name);
            return Ok(());
        }
        Err(_) => {
            warn!("GITHUB_EVENT_NAME is not set; nothing to do");
            return Ok(());
        }
    }

    let config = Config::from_env()?;
    let event = PullRequestEvent::from_env()?;
    info!(
        "Handling {:?} for {}/{}#{}",
        event.action, config.repo_owner, config.repo_name, event.number
    );

    let client = OctocrabClient::from_token(config.token.clone())?;
    let controller = LifecycleController::new(&config, &client);

    match controller.handle(&event).await? {
        Outcome::Published { branch } => info!("Companion branch {} published", branch),
        Outcome::TornDown { branch } => info!("Companion branch {} removed", branch),
        Outcome::Skipped(reason) => info!("Nothing to do: {:?}", reason),
    }

    Ok(())
}
