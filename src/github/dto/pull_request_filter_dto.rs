/// Query for `GET /repos/{owner}/{repo}/pulls`. `head` is qualified as
/// `{owner}:{branch}`.
pub struct PullRequestFilterDto {
    pub owner: String,
    pub repo: String,
    pub state: String,
    pub head: String,
    pub base: String,
}

impl PullRequestFilterDto {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        state: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        PullRequestFilterDto {
            owner: owner.into(),
            repo: repo.into(),
            state: state.into(),
            head: head.into(),
            base: base.into(),
        }
    }
}
