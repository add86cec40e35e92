use serde::Serialize;

/// JSON payload of `POST /repos/{owner}/{repo}/pulls`. `head` is the bare
/// branch name, not the `{owner}:{branch}` form used when listing.
#[derive(Debug, Serialize)]
pub struct PullRequestRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
}

impl PullRequestRequest {
    pub fn new(
        title: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        PullRequestRequest {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_all_fields() -> anyhow::Result<()> {
        let request = PullRequestRequest::new("Title", "feature/x", "main", "line\nline");

        let value = serde_json::to_value(&request)?;

        assert_eq!(
            value,
            serde_json::json!({
                "title": "Title",
                "head": "feature/x",
                "base": "main",
                "body": "line\nline"
            })
        );

        Ok(())
    }
}
