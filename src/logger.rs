use anyhow::Result;
use log::Level;
use simple_logger::init_with_level;
use std::{env, str::FromStr};

const LOG_LEVEL_VAR: &str = "AUTOPR_LOG";

pub fn init() -> Result<()> {
    init_with_level(level(env::var(LOG_LEVEL_VAR).ok()))?;

    Ok(())
}

fn level(value: Option<String>) -> Level {
    value
        .and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or(Level::Info)
}
