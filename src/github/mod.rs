pub mod builder;
pub mod dto;
pub mod github_client;
pub mod handler;
mod macros;
pub mod request;
pub mod response;

pub use builder::BuilderExecutor;
pub use github_client::GithubClient;
