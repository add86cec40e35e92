use anyhow::{Context, Result};
use serde::Deserialize;
use std::{io::ErrorKind, path::Path};

const MAIN_BRANCH_NAME: &str = "main";
const GITHUB_API_URL: &str = "https://api.github.com";

const DEFAULT_OWNER: &str = "shrawankick";
const DEFAULT_REPO: &str = "yodha-arc";
const DEFAULT_HEAD_BRANCH_NAME: &str = "feature/v0.2-mobile-finisher-nutrition";

const PR_DEFAULT_TITLE: &str =
    "v0.2 — mobile-first UI, finisher library & timer, kg estimator, nutrition log";
const PR_DEFAULT_BODY: &str = "This PR introduces:\n\
- Mobile-first UI enhancements\n\
- Finisher library with timer\n\
- KG estimator for lifts\n\
- Nutrition log feature\n";

pub const DEFAULT_CONFIG_FILE_NAME: &str = "autopr.yaml";

/// Everything a run needs, fixed before the first request goes out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repository: Repository,
    #[serde(default = "Config::default_branch")]
    pub branch: String,
    #[serde(default = "Config::default_base")]
    pub base: String,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub pull_request: PullRequestConfig,
}

impl Config {
    /// Loads `autopr.yaml` from the working directory, or the built-in
    /// defaults when there is no such file.
    pub async fn load() -> Result<Config> {
        Config::load_from(DEFAULT_CONFIG_FILE_NAME).await
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();

        let config_string = match tokio::fs::read_to_string(path).await {
            Ok(config_string) => config_string,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(err) => {
                return Err(err).context(format!("Cannot read {}", path.display()));
            }
        };

        let config = serde_yaml::from_str::<Config>(&config_string)
            .context(format!("Cannot parse {}", path.display()))?;

        Ok(config)
    }

    fn default_branch() -> String {
        DEFAULT_HEAD_BRANCH_NAME.to_owned()
    }

    fn default_base() -> String {
        MAIN_BRANCH_NAME.to_owned()
    }

    fn default_api_url() -> String {
        GITHUB_API_URL.to_owned()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository: Repository::default(),
            branch: Config::default_branch(),
            base: Config::default_base(),
            api_url: Config::default_api_url(),
            pull_request: PullRequestConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    #[serde(default = "Repository::default_owner")]
    pub owner: String,
    #[serde(default = "Repository::default_name")]
    pub name: String,
}

impl Repository {
    fn default_owner() -> String {
        DEFAULT_OWNER.to_owned()
    }

    fn default_name() -> String {
        DEFAULT_REPO.to_owned()
    }
}

impl Default for Repository {
    fn default() -> Self {
        Repository {
            owner: Repository::default_owner(),
            name: Repository::default_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestConfig {
    #[serde(default = "PullRequestConfig::default_title")]
    pub title: String,
    #[serde(default = "PullRequestConfig::default_body")]
    pub body: String,
}

impl PullRequestConfig {
    fn default_title() -> String {
        PR_DEFAULT_TITLE.to_owned()
    }

    fn default_body() -> String {
        PR_DEFAULT_BODY.to_owned()
    }
}

impl Default for PullRequestConfig {
    fn default() -> Self {
        PullRequestConfig {
            title: PullRequestConfig::default_title(),
            body: PullRequestConfig::default_body(),
        }
    }
}
