use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub html_url: String,
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub state: String,
}
