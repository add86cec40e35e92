use crate::http::Error;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// A fully read response. The status is kept for every response, successful
/// or not, so callers can branch on the exact code they expect.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    payload: String,
}

impl Response {
    #[cfg(test)]
    pub fn new(status: StatusCode, payload: impl Into<String>) -> Self {
        Response {
            status,
            payload: payload.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.payload
    }

    /// Fails with [`Error::UnexpectedStatusError`] carrying the raw body
    /// unless the status is exactly `expected`.
    pub fn expect_status(self, expected: StatusCode) -> Result<Self, Error> {
        if self.status != expected {
            return Err(Error::UnexpectedStatusError {
                status: self.status,
                body: self.payload,
            });
        }

        Ok(self)
    }

    pub fn json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str::<T>(&self.payload).map_err(|cause| Error::ParseResponseError { cause })
    }
}

pub trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Result<Self, Error>;
}

impl AsyncFrom<reqwest::Response> for Response {
    async fn async_from(value: reqwest::Response) -> Result<Self, Error> {
        let status = value.status();

        let payload = value
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        Ok(Response { status, payload })
    }
}
