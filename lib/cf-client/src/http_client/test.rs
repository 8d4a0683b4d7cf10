use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::http::Method as WiremockMethod;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::reqwest_client::ReqwestClient;
use super::{
    Error, Headers, HttpClient, Method, MockHttpClient, RequestBuilder, Response, StatusCode,
    format_headers,
};

fn request(method: Method, url: String) -> RequestBuilder {
    RequestBuilder::new(Arc::new(ReqwestClient::default()), method, url)
}

#[test]
fn test_method_and_status_display() {
    assert_eq!("GET", Method::Get.to_string());
    assert_eq!("POST", Method::Post.to_string());
    assert_eq!("PUT", Method::Put.to_string());
    assert_eq!("202", StatusCode::ACCEPTED.to_string());
}

#[test]
fn test_format_headers_redacts_authorization() {
    let headers = Headers::from([
        ("Authorization".to_string(), "Bearer secret".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ]);

    assert_eq!(
        "Accept: application/json\nAuthorization: <redacted>",
        format_headers(&headers)
    );
    assert_eq!("<None>", format_headers(&Headers::default()));
}

#[tokio::test]
async fn test_json_body_and_headers_are_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method(WiremockMethod::POST))
        .and(path("/echo"))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "Bearer secret"))
        .and(body_json(json!({ "command": "echo hi" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = request(Method::Post, format!("{}/echo", mock_server.uri()))
        .bearer_auth("secret")
        .json(json!({ "command": "echo hi" }))
        .unwrap()
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode(201), response.status);
    let value: serde_json::Value = response.json().unwrap();
    assert_eq!(json!({ "ok": true }), value);
}

#[tokio::test]
async fn test_error_status_is_returned_as_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method(WiremockMethod::PUT))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = request(Method::Put, format!("{}/missing", mock_server.uri()))
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode(404), response.status);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_decode_error_carries_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method(WiremockMethod::GET))
        .and(path("/garbage"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let result = request(Method::Get, format!("{}/garbage", mock_server.uri()))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>();

    let error = result.unwrap_err();
    assert!(matches!(
        error,
        Error::Decode {
            status: StatusCode(503),
            ..
        }
    ));
    assert!(error.to_string().contains("HTTP 503"));
}

#[tokio::test]
async fn test_invalid_header_value_is_rejected_without_leaking_it() {
    let result = request(Method::Get, "http://localhost/v3/tasks".to_string())
        .bearer_auth("line\nbreak")
        .send()
        .await;

    match result {
        Err(Error::InvalidRequest(message)) => {
            assert!(message.contains("Authorization"));
            assert!(!message.contains("break"));
        }
        other => panic!("expected invalid request, got {other:?}"),
    }
}

#[tokio::test]
async fn test_request_is_handed_to_client() {
    let mut http_client = MockHttpClient::new();
    http_client
        .expect_execute()
        .withf(|request| {
            request.method == Method::Post
                && request.url == "http://localhost/v3/apps/a1/tasks"
                && request.headers.get("Content-Type").map(String::as_str)
                    == Some("application/json")
                && request.body.as_deref() == Some(br#"{"command":"true"}"#.as_slice())
        })
        .once()
        .returning(|_| {
            Ok(Response {
                status: StatusCode::ACCEPTED,
                body: vec![],
            })
        });

    let http_client: Arc<dyn HttpClient> = Arc::new(http_client);
    let response = RequestBuilder::new(http_client, Method::Post, "http://localhost/v3/apps/a1/tasks")
        .json(json!({ "command": "true" }))
        .unwrap()
        .send()
        .await
        .unwrap();

    assert_eq!(StatusCode::ACCEPTED, response.status);
}

#[tokio::test]
async fn test_send_failure_is_propagated() {
    let mut http_client = MockHttpClient::new();
    http_client
        .expect_execute()
        .once()
        .returning(|_| Err(Error::Transport("connection refused".to_string())));

    let http_client: Arc<dyn HttpClient> = Arc::new(http_client);
    let result = RequestBuilder::new(http_client, Method::Get, "http://localhost/v3/tasks")
        .send()
        .await;

    assert!(matches!(result, Err(Error::Transport(message)) if message == "connection refused"));
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_send_logs_location_of_caller() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut http_client = MockHttpClient::new();
    http_client
        .expect_execute()
        .once()
        .returning(|_| Err(Error::Transport("connection refused".to_string())));

    let http_client: Arc<dyn HttpClient> = Arc::new(http_client);
    RequestBuilder::new(http_client, Method::Get, "http://localhost/v3/tasks")
        .send()
        .await
        .unwrap_err();

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("GET http://localhost/v3/tasks - Transport error: connection refused"));
    assert!(output.contains("http_client/test.rs"));
    assert!(!output.contains("http_client/mod.rs"));
}
