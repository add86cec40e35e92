use crate::github::{
    builder::{
        create_pull_request_builder::CreatePullRequestBuilder,
        list_pull_requests_builder::ListPullRequestsBuilder,
    },
    GithubClient,
};

pub struct PullRequestHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> PullRequestHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        PullRequestHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn list(&self) -> ListPullRequestsBuilder<'a> {
        ListPullRequestsBuilder::new(self.client, &self.owner, &self.repo)
    }

    pub fn create(&self) -> CreatePullRequestBuilder<'a> {
        CreatePullRequestBuilder::new(self.client, &self.owner, &self.repo)
    }
}
