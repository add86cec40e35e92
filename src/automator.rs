use crate::{
    config::Config,
    credential::CredentialProvider,
    github::{response::PullRequest, BuilderExecutor, GithubClient},
    http::Error,
};
use anyhow::{Context, Result};
use std::fmt;

/// Terminal state of a run. Nothing is retried once one is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    BranchMissing { branch: String },
    AlreadyOpen { url: String },
    Created { url: String },
    CreationFailed { status: u16, body: String },
}

impl Outcome {
    /// A refused creation still exits with 0; only a missing branch is fatal.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::BranchMissing { .. } => 1,
            Outcome::AlreadyOpen { .. }
            | Outcome::Created { .. }
            | Outcome::CreationFailed { .. } => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::BranchMissing { branch } => {
                write!(f, "❌ Branch '{}' does not exist or repo inaccessible.", branch)
            }
            Outcome::AlreadyOpen { url } => write!(f, "ℹ️ PR already exists: {}", url),
            Outcome::Created { url } => write!(f, "✅ PR created: {}", url),
            Outcome::CreationFailed { status, body } => {
                write!(f, "❌ Failed to create PR: {} — {}", status, body)
            }
        }
    }
}

/// Opens the configured pull request unless one is already open.
///
/// The three calls run strictly in order: branch lookup, open PR search, then
/// creation. Each step short-circuits the rest.
pub struct Automator {
    client: GithubClient,
    config: Config,
}

impl Automator {
    pub fn new(config: Config, credential: &dyn CredentialProvider) -> Self {
        let client = GithubClient::new(&config.api_url, credential);

        Automator { client, config }
    }

    pub async fn run(&self) -> Result<Outcome> {
        log::info!(
            "Checking branch {} in {}/{}",
            self.config.branch,
            self.config.repository.owner,
            self.config.repository.name
        );
        if !self.check_branch_exists().await {
            return Ok(Outcome::BranchMissing {
                branch: self.config.branch.to_owned(),
            });
        }

        log::info!("Looking for an open pull request into {}", self.config.base);
        if let Some(existing) = self.find_open_pull_request().await {
            return Ok(Outcome::AlreadyOpen {
                url: existing.html_url,
            });
        }

        log::info!("Creating pull request");
        self.create_pull_request().await
    }

    async fn check_branch_exists(&self) -> bool {
        self.client
            .repo(&self.config.repository.owner, &self.config.repository.name)
            .branch(&self.config.branch)
            .exists()
            .await
    }

    /// A failed search is not fatal, it only means creation is attempted.
    async fn find_open_pull_request(&self) -> Option<PullRequest> {
        let result = self
            .client
            .repo(&self.config.repository.owner, &self.config.repository.name)
            .pull_request()
            .list()
            .state("open")
            .head(&self.config.branch)
            .base(&self.config.base)
            .execute()
            .await;

        match result {
            Ok(first) => {
                match &first {
                    Some(pr) => log::debug!("found {} pull request #{}", pr.state, pr.number),
                    None => log::debug!("no open pull request found"),
                }
                first
            }
            Err(err) => {
                log::warn!("cannot search open pull requests: {:?}", err);
                None
            }
        }
    }

    async fn create_pull_request(&self) -> Result<Outcome> {
        let result = self
            .client
            .repo(&self.config.repository.owner, &self.config.repository.name)
            .pull_request()
            .create()
            .title(&self.config.pull_request.title)
            .head(&self.config.branch)
            .base(&self.config.base)
            .body(&self.config.pull_request.body)
            .execute()
            .await;

        match result {
            Ok(pr) => Ok(Outcome::Created { url: pr.html_url }),
            Err(Error::UnexpectedStatusError { status, body }) => Ok(Outcome::CreationFailed {
                status: status.as_u16(),
                body,
            }),
            Err(err) => Err(err).context("Cannot create the pull request"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{PullRequestConfig, Repository},
        credential::StaticCredential,
    };
    use mockito::{Matcher, Mock, Server, ServerGuard};

    const BRANCH_PATH: &str = "/repos/octo/repo/branches/feature/x";
    const PULLS_PATH: &str = "/repos/octo/repo/pulls";

    fn config(api_url: impl Into<String>) -> Config {
        Config {
            repository: Repository {
                owner: "octo".to_string(),
                name: "repo".to_string(),
            },
            branch: "feature/x".to_string(),
            base: "main".to_string(),
            api_url: api_url.into(),
            pull_request: PullRequestConfig {
                title: "Title".to_string(),
                body: "Body\n".to_string(),
            },
        }
    }

    fn automator(server: &ServerGuard) -> Automator {
        Automator::new(config(server.url()), &StaticCredential::new("test_token"))
    }

    async fn branch_mock(server: &mut ServerGuard, status: usize) -> Mock {
        server
            .mock("GET", BRANCH_PATH)
            .match_header("authorization", "Bearer test_token")
            .with_status(status)
            .with_body(r#"{"name": "feature/x"}"#)
            .create_async()
            .await
    }

    async fn search_mock(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
        server
            .mock("GET", PULLS_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "open".into()),
                Matcher::UrlEncoded("head".into(), "octo:feature/x".into()),
                Matcher::UrlEncoded("base".into(), "main".into()),
            ]))
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }

    async fn create_mock(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
        server
            .mock("POST", PULLS_PATH)
            .match_body(Matcher::Json(serde_json::json!({
                "title": "Title",
                "head": "feature/x",
                "base": "main",
                "body": "Body\n"
            })))
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }

    async fn no_pulls_calls(server: &mut ServerGuard) -> (Mock, Mock) {
        let search = server
            .mock("GET", PULLS_PATH)
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let create = server
            .mock("POST", PULLS_PATH)
            .expect(0)
            .create_async()
            .await;

        (search, create)
    }

    #[tokio::test]
    async fn should_abort_when_branch_is_missing() -> Result<()> {
        let mut server = Server::new_async().await;
        let branch = branch_mock(&mut server, 404).await;
        let (search, create) = no_pulls_calls(&mut server).await;

        let outcome = automator(&server).run().await?;

        branch.assert_async().await;
        search.assert_async().await;
        create.assert_async().await;
        assert_eq!(
            outcome,
            Outcome::BranchMissing {
                branch: "feature/x".to_string()
            }
        );
        assert_eq!(outcome.exit_code(), 1);
        assert!(outcome.to_string().contains("does not exist"));

        Ok(())
    }

    #[tokio::test]
    async fn should_abort_on_any_non_200_branch_lookup() -> Result<()> {
        for status in [201, 401, 403, 500] {
            let mut server = Server::new_async().await;
            let _branch = branch_mock(&mut server, status).await;
            let (search, create) = no_pulls_calls(&mut server).await;

            let outcome = automator(&server).run().await?;

            search.assert_async().await;
            create.assert_async().await;
            assert_eq!(outcome.exit_code(), 1, "status {}", status);
        }

        Ok(())
    }

    #[tokio::test]
    async fn should_abort_when_api_is_unreachable() -> Result<()> {
        let automator = Automator::new(
            config("http://127.0.0.1:1"),
            &StaticCredential::new("test_token"),
        );

        let outcome = automator.run().await?;

        assert!(matches!(outcome, Outcome::BranchMissing { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn should_report_existing_pull_request_without_creating() -> Result<()> {
        let mut server = Server::new_async().await;
        let _branch = branch_mock(&mut server, 200).await;
        let search = search_mock(
            &mut server,
            200,
            r#"[{"html_url": "https://x/pr/5"}, {"html_url": "https://x/pr/9"}]"#,
        )
        .await;
        let create = server
            .mock("POST", PULLS_PATH)
            .expect(0)
            .create_async()
            .await;

        let outcome = automator(&server).run().await?;

        search.assert_async().await;
        create.assert_async().await;
        assert_eq!(
            outcome,
            Outcome::AlreadyOpen {
                url: "https://x/pr/5".to_string()
            }
        );
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.to_string().contains("https://x/pr/5"));

        Ok(())
    }

    #[tokio::test]
    async fn should_report_first_pull_request_when_later_items_are_malformed() -> Result<()> {
        let mut server = Server::new_async().await;
        let _branch = branch_mock(&mut server, 200).await;
        let _search = search_mock(
            &mut server,
            200,
            r#"[{"html_url": "https://x/pr/5"}, {"html_url": null}]"#,
        )
        .await;
        let create = server
            .mock("POST", PULLS_PATH)
            .expect(0)
            .create_async()
            .await;

        let outcome = automator(&server).run().await?;

        create.assert_async().await;
        assert_eq!(
            outcome,
            Outcome::AlreadyOpen {
                url: "https://x/pr/5".to_string()
            }
        );
        assert_eq!(outcome.exit_code(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn should_create_when_no_pull_request_is_open() -> Result<()> {
        let mut server = Server::new_async().await;
        let _branch = branch_mock(&mut server, 200).await;
        let search = search_mock(&mut server, 200, "[]").await;
        let create = create_mock(
            &mut server,
            201,
            r#"{"number": 6, "state": "open", "html_url": "https://x/pr/6"}"#,
        )
        .await;

        let outcome = automator(&server).run().await?;

        search.assert_async().await;
        create.assert_async().await;
        assert_eq!(
            outcome,
            Outcome::Created {
                url: "https://x/pr/6".to_string()
            }
        );
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.to_string().contains("https://x/pr/6"));

        Ok(())
    }

    #[tokio::test]
    async fn should_report_failed_creation_after_failed_search() -> Result<()> {
        let mut server = Server::new_async().await;
        let _branch = branch_mock(&mut server, 200).await;
        let _search = search_mock(&mut server, 500, "boom").await;
        let create = create_mock(&mut server, 422, "validation failed").await;

        let outcome = automator(&server).run().await?;

        create.assert_async().await;
        assert_eq!(
            outcome,
            Outcome::CreationFailed {
                status: 422,
                body: "validation failed".to_string()
            }
        );
        assert_eq!(outcome.exit_code(), 0);
        let message = outcome.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("validation failed"));

        Ok(())
    }

    #[tokio::test]
    async fn should_create_when_search_body_is_not_a_list() -> Result<()> {
        let mut server = Server::new_async().await;
        let _branch = branch_mock(&mut server, 200).await;
        let _search = search_mock(&mut server, 200, r#"{"message": "odd"}"#).await;
        let create = create_mock(&mut server, 201, r#"{"html_url": "https://x/pr/7"}"#).await;

        let outcome = automator(&server).run().await?;

        create.assert_async().await;
        assert_eq!(
            outcome,
            Outcome::Created {
                url: "https://x/pr/7".to_string()
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn should_treat_200_on_creation_as_failure() -> Result<()> {
        let mut server = Server::new_async().await;
        let _branch = branch_mock(&mut server, 200).await;
        let _search = search_mock(&mut server, 200, "[]").await;
        let _create = create_mock(&mut server, 200, r#"{"html_url": "https://x/pr/8"}"#).await;

        let outcome = automator(&server).run().await?;

        assert!(matches!(outcome, Outcome::CreationFailed { status: 200, .. }));

        Ok(())
    }
}
