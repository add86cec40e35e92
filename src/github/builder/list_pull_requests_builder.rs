use super::BuilderExecutor;
use crate::{
    github::{
        dto::pull_request_filter_dto::PullRequestFilterDto, response::PullRequest, GithubClient,
    },
    http::Error,
};

const DEFAULT_STATE: &str = "open";

pub struct ListPullRequestsBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    state: String,
    head: String,
    base: String,
}

impl<'a> ListPullRequestsBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        ListPullRequestsBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            state: DEFAULT_STATE.to_owned(),
            head: String::new(),
            base: String::new(),
        }
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Filters on the head branch of `owner`, sent as `{owner}:{branch}`.
    pub fn head(mut self, branch: impl AsRef<str>) -> Self {
        self.head = format!("{}:{}", self.owner, branch.as_ref());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }
}

impl BuilderExecutor for ListPullRequestsBuilder<'_> {
    /// The first matching pull request, if the listing has any.
    type Output = Option<PullRequest>;

    async fn execute(self) -> Result<Self::Output, Error> {
        let filter =
            PullRequestFilterDto::new(self.owner, self.repo, self.state, self.head, self.base);

        self.client.first_pull_request(filter).await
    }
}
