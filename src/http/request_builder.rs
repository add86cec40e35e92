use super::{client::Client, request::HttpRequestBuilder, response::Response, Error};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::marker::PhantomData;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const GITHUB_API_VERSION: &str = "2022-11-28";
const AGENT: &str = "autopr";

pub trait RequestType {}
pub struct Get;
pub struct Post;

impl RequestType for Get {}
impl RequestType for Post {}

pub struct RequestBuilder<T: RequestType> {
    _marker: PhantomData<T>,
    client: Client,
    pub builder: HttpRequestBuilder,
}

impl<T> RequestBuilder<T>
where
    T: RequestType,
{
    pub(super) fn new(client: Client, builder: HttpRequestBuilder) -> Self {
        RequestBuilder {
            _marker: PhantomData,
            client,
            builder,
        }
    }

    pub async fn send(self) -> Result<Response, Error> {
        self.client.send(self.builder).await
    }

    pub fn github_headers(mut self, token: &str) -> Self {
        self.builder
            .bearer_auth(token)
            .header(ACCEPT.as_str(), GITHUB_ACCEPT)
            .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION)
            .header(USER_AGENT.as_str(), AGENT);

        self
    }
}

impl RequestBuilder<Get> {
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder.query(key, value);
        self
    }
}

impl RequestBuilder<Post> {
    pub fn json_content_headers(mut self, token: &str) -> Self {
        self = self.github_headers(token);
        self.builder.header(CONTENT_TYPE.as_str(), "application/json");

        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.builder.body(body);
        self
    }
}
