pub mod create_pull_request_builder;
pub mod list_pull_requests_builder;

use crate::http::Error;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output, Error>;
}
