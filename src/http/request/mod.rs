use std::{
    collections::BTreeMap,
    ops::{Deref, DerefMut},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

#[derive(Default, Clone, Debug)]
pub struct HeaderMap(pub BTreeMap<String, String>);

impl Deref for HeaderMap {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for HeaderMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Transport-agnostic description of a single request, turned into a
/// `reqwest::Request` by [`crate::http::Client::send`].
#[derive(Clone, Debug)]
pub struct HttpRequestBuilder {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        HttpRequestBuilder {
            method,
            url: url.into(),
            headers: HeaderMap::default(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(key.into().to_lowercase(), value.into());
        self
    }

    pub fn bearer_auth(&mut self, token: impl AsRef<str>) -> &mut Self {
        self.header("authorization", format!("Bearer {}", token.as_ref()))
    }

    pub fn query(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self
    }
}
