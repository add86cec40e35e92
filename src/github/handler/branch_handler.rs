use crate::github::GithubClient;

pub struct BranchHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    branch: String,
}

impl<'a> BranchHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        BranchHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    /// True only when GitHub answers 200. Transport errors count as missing.
    pub async fn exists(&self) -> bool {
        match self
            .client
            .branch_exists(&self.owner, &self.repo, &self.branch)
            .await
        {
            Ok(exists) => exists,
            Err(err) => {
                log::warn!("cannot look up branch {}: {:?}", self.branch, err);
                false
            }
        }
    }
}
