use super::{
    request::{HttpRequestBuilder, Method},
    request_builder::{Get, Post, RequestBuilder},
    response::{AsyncFrom, Response},
    Error,
};

#[derive(Clone, Debug, Default)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new() -> Client {
        Client(reqwest::Client::new())
    }

    pub async fn send(&self, request: HttpRequestBuilder) -> Result<Response, Error> {
        let mut builder = self.0.request(request.method.into(), &request.url);

        for (key, value) in request.headers.iter() {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let request = builder
            .build()
            .map_err(|cause| Error::RequestError { cause })?;

        let response = self
            .0
            .execute(request)
            .await
            .map_err(|cause| Error::RequestError { cause })?;

        Response::async_from(response).await
    }
}

pub trait ClientRequestBuilder {
    fn get(self, url: impl Into<String>) -> RequestBuilder<Get>;
    fn post(self, url: impl Into<String>) -> RequestBuilder<Post>;
}

impl ClientRequestBuilder for Client {
    fn get(self, url: impl Into<String>) -> RequestBuilder<Get> {
        RequestBuilder::new(self, HttpRequestBuilder::new(Method::Get, url))
    }

    fn post(self, url: impl Into<String>) -> RequestBuilder<Post> {
        RequestBuilder::new(self, HttpRequestBuilder::new(Method::Post, url))
    }
}
