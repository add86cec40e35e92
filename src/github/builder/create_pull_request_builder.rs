use super::BuilderExecutor;
use crate::{
    github::{dto::pull_request_dto::PullRequestDto, response::PullRequest, GithubClient},
    http::Error,
};

pub struct CreatePullRequestBuilder<'a> {
    client: &'a GithubClient,
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: Option<String>,
    pub base: String,
    pub head: String,
}

impl<'a> CreatePullRequestBuilder<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CreatePullRequestBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            title: String::new(),
            body: None,
            base: String::new(),
            head: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = head.into();
        self
    }
}

impl BuilderExecutor for CreatePullRequestBuilder<'_> {
    type Output = PullRequest;

    /// Anything but `201 Created` is an [`Error::UnexpectedStatusError`].
    async fn execute(self) -> Result<Self::Output, Error> {
        let pr = PullRequestDto::new(
            self.owner,
            self.repo,
            self.title,
            self.head,
            self.base,
            self.body.unwrap_or_default(),
        );

        self.client.create_pull_request(pr).await
    }
}
