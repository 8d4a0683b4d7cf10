use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::{Error, Headers, HttpClient, Method, Request, Response, StatusCode};
use crate::config::ClientConfig;

#[derive(Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds the underlying client with the transport settings of `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        if config.skip_ssl_validation {
            tracing::warn!("TLS certificate validation is disabled");
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.skip_ssl_validation)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self::new(client))
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        };

        let mut builder = self
            .client
            .request(method, request.url.as_str())
            .headers(to_header_map(request.headers)?);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = StatusCode(response.status().as_u16());
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Response {
            status,
            body: body.to_vec(),
        })
    }
}

// Header values are left out of errors, they may carry the bearer token
fn to_header_map(headers: Headers) -> Result<HeaderMap, Error> {
    headers
        .into_iter()
        .map(|(name, value)| {
            let header_value = HeaderValue::try_from(value)
                .map_err(|e| Error::InvalidRequest(format!("value of header `{name}`: {e}")))?;
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::InvalidRequest(format!("header name `{name}`: {e}")))?;

            Ok((header_name, header_value))
        })
        .collect()
}
