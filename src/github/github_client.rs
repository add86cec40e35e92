use super::{
    dto::{pull_request_dto::PullRequestDto, pull_request_filter_dto::PullRequestFilterDto},
    handler::repository_handler::RepositoryHandler,
    request::PullRequestRequest,
    response::PullRequest,
};
use crate::{
    credential::CredentialProvider,
    get,
    http::{Client, Error},
    post,
};
use reqwest::StatusCode;
use std::fmt;

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    api_url: String,
    token: String,
}

impl fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, credential: &dyn CredentialProvider) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_owned(),
            token: credential.token(),
        }
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    pub(crate) fn http(&self) -> Client {
        self.http.clone()
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}", self.api_url, owner, repo)
    }

    /// `Ok(false)` for any answer other than 200; transport failures are errors.
    pub(super) async fn branch_exists(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<bool, Error> {
        let uri = format!("{}/branches/{}", self.repo_url(owner, repo), branch);

        let response = get!(self, &uri)?;
        log::debug!("branch lookup answered {}", response.status());

        Ok(response.status() == StatusCode::OK)
    }

    /// Only the first listed pull request is decoded; the rest of the page is
    /// never inspected.
    pub(super) async fn first_pull_request(
        &self,
        filter: PullRequestFilterDto,
    ) -> Result<Option<PullRequest>, Error> {
        log::debug!("Listing pull requests");
        let uri = format!("{}/pulls", self.repo_url(&filter.owner, &filter.repo));

        let response = get!(
            self,
            &uri,
            [
                ("state", &filter.state),
                ("head", &filter.head),
                ("base", &filter.base)
            ]
        )?;

        let items: Vec<serde_json::Value> = response.expect_status(StatusCode::OK)?.json()?;

        items
            .into_iter()
            .next()
            .map(|item| {
                serde_json::from_value::<PullRequest>(item)
                    .map_err(|cause| Error::ParseResponseError { cause })
            })
            .transpose()
    }

    pub(super) async fn create_pull_request(
        &self,
        pull_request: PullRequestDto,
    ) -> Result<PullRequest, Error> {
        log::debug!("Creating pull request");
        let uri = format!(
            "{}/pulls",
            self.repo_url(&pull_request.owner, &pull_request.repo)
        );

        let request = PullRequestRequest::new(
            pull_request.title,
            pull_request.head,
            pull_request.base,
            pull_request.pr_body,
        );
        let body = serde_json::to_string(&request)
            .map_err(|cause| Error::SerializeRequestError { cause })?;

        let response = post!(self, &uri, body)?;

        response.expect_status(StatusCode::CREATED)?.json()
    }
}
