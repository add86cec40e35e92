mod automator;
mod config;
mod credential;
mod github;
mod http;
mod logger;

use anyhow::{Context, Result};
use automator::Automator;
use config::Config;
use credential::EnvCredential;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logger::init()?;

    log::info!("Starting");
    let config = Config::load().await.context("Cannot load config file")?;

    let outcome = Automator::new(config, &EnvCredential::default())
        .run()
        .await
        .context("Cannot open the pull request")?;

    println!("{}", outcome);

    Ok(ExitCode::from(outcome.exit_code()))
}
