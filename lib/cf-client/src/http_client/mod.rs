//! Transport-agnostic HTTP plumbing used by the Cloud Controller clients.
//!
//! Requests are assembled with [`RequestBuilder`] and handed to an [`HttpClient`] as a plain
//! [`Request`]; status codes are never interpreted here, that is up to each API client.

pub mod reqwest_client;

#[cfg(test)]
mod test;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use itertools::Itertools;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::Display;
use thiserror::Error;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const ACCEPTED: StatusCode = StatusCode(202);
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Failed encoding request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed decoding response body (HTTP {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl Response {
    #[track_caller]
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let location = Location::caller();

        serde_json::from_slice(&self.body).map_err(|source| {
            tracing::error!(
                %location,
                status = %self.status,
                "Response body is not the expected JSON: {source}"
            );
            Error::Decode {
                status: self.status,
                source,
            }
        })
    }
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    request: Request,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, method: Method, url: impl Into<String>) -> Self {
        Self {
            client,
            request: Request {
                method,
                url: url.into(),
                headers: Headers::default(),
                body: None,
            },
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request
            .headers
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {token}"))
    }

    #[track_caller]
    pub fn json<T: Serialize>(self, value: T) -> Result<Self, Error> {
        let location = Location::caller();

        let body = serde_json::to_vec(&value).map_err(|source| {
            tracing::error!(%location, "{} {} - {source}", self.request.method, self.request.url);
            Error::Encode(source)
        })?;

        Ok(self
            .header("Content-Type", "application/json")
            .with_body(body))
    }

    /// Logs are attributed to the caller, `#[track_caller]` does not reach into `async fn`
    #[track_caller]
    pub fn send(self) -> impl Future<Output = Result<Response, Error>> + Send {
        let location = Location::caller();

        async move {
            let Self { client, request } = self;
            let target = format!("{} {}", request.method, request.url);
            tracing::trace!(
                %location,
                "\nRequest {target}\nHeaders:\n{}\nBody:\n{}\n",
                format_headers(&request.headers),
                format_body(request.body.as_deref())
            );

            match client.execute(request).await {
                Ok(response) => {
                    tracing::debug!(%location, "{target} - HTTP {}", response.status);
                    tracing::trace!(
                        %location,
                        "\nResponse {target}\nStatus: {}\nBody:\n{}\n",
                        response.status,
                        format_body(Some(&response.body))
                    );
                    Ok(response)
                }
                Err(error) => {
                    tracing::error!(%location, "{target} - {error}");
                    Err(error)
                }
            }
        }
    }

    fn with_body(mut self, body: Vec<u8>) -> Self {
        self.request.body = Some(body);
        self
    }
}

fn format_headers(headers: &Headers) -> String {
    if headers.is_empty() {
        return "<None>".to_owned();
    }

    headers
        .iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case("authorization") {
                format!("{name}: <redacted>")
            } else {
                format!("{name}: {value}")
            }
        })
        .join("\n")
}

fn format_body(body: Option<&[u8]>) -> String {
    match body {
        None => "<None>".to_owned(),
        Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
