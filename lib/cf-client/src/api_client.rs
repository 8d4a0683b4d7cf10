use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::config::ClientConfig;
use crate::http_client::reqwest_client::ReqwestClient;
use crate::http_client::{Error, HttpClient, Method, RequestBuilder};

/// Binds the shared HTTP client to one Cloud Controller endpoint and its credentials
pub struct ApiClient {
    base_url: Url,
    http_client: Arc<dyn HttpClient>,
    token: Option<SecretString>,
}

impl ApiClient {
    pub fn new(base_url: Url, http_client: Arc<dyn HttpClient>, token: Option<SecretString>) -> Self {
        Self {
            base_url,
            http_client,
            token,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let http_client = ReqwestClient::from_config(config)?;

        Ok(Self::new(
            config.api_url.clone(),
            Arc::new(http_client),
            config
                .token
                .as_ref()
                .map(|token| SecretString::from(token.expose_secret().to_owned())),
        ))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `segments` below the base URL, each segment is percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::InvalidRequest(format!("API base URL cannot have a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Prepares an authenticated JSON request, sending it is left to the caller
    pub fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, Error> {
        let url = self.endpoint(segments)?;

        let builder = RequestBuilder::new(self.http_client.clone(), method, url)
            .header("Accept", "application/json");

        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::http::Method as WiremockMethod;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http_client::StatusCode;

    fn api_client(base_url: &str, token: Option<&str>) -> ApiClient {
        ApiClient::new(
            base_url.parse().unwrap(),
            Arc::new(ReqwestClient::default()),
            token.map(|token| SecretString::from(token.to_string())),
        )
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = api_client("https://api.example.com/cf/", None);

        let url = client.endpoint(&["v3", "tasks", "abc"]).unwrap();

        assert_eq!("https://api.example.com/cf/v3/tasks/abc", url.as_str());
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = api_client("https://api.example.com", None);

        let url = client.endpoint(&["v3", "tasks", "a/b c"]).unwrap();

        assert_eq!("https://api.example.com/v3/tasks/a%2Fb%20c", url.as_str());
    }

    #[test]
    fn test_endpoint_rejects_non_base_url() {
        let client = api_client("mailto:ops@example.com", None);

        assert!(matches!(
            client.endpoint(&["v3", "tasks"]),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_request_sends_bearer_token() {
        let mock_server = MockServer::start().await;
        Mock::given(method(WiremockMethod::GET))
            .and(path("/v3/tasks"))
            .and(header("authorization", "Bearer my-token"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = api_client(&mock_server.uri(), Some("my-token"))
            .request(Method::Get, &["v3", "tasks"])
            .unwrap()
            .send()
            .await
            .unwrap();

        assert_eq!(StatusCode::OK, response.status);
    }

    #[tokio::test]
    async fn test_request_without_token_has_no_authorization_header() {
        let mock_server = MockServer::start().await;
        Mock::given(method(WiremockMethod::PUT))
            .and(path("/v3/tasks/abc/cancel"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        api_client(&mock_server.uri(), None)
            .request(Method::Put, &["v3", "tasks", "abc", "cancel"])
            .unwrap()
            .send()
            .await
            .unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(1, requests.len());
        assert!(requests[0].headers.get("authorization").is_none());
    }
}
