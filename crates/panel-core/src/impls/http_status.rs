//! HTTP client for the status API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ENDPOINT_VAR, PanelConfig};
use crate::domain::{RequestId, StatusResponse};
use crate::error::PanelError;
use crate::ports::StatusSource;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusRequest<'a> {
    request_id: &'a str,
}

/// Status API client.
///
/// Sends `POST <endpoint>` with `{"requestId": ...}` and returns the JSON
/// body. No retries and no explicit timeout: the reqwest defaults apply.
/// A missing endpoint is reported at call time, not at construction.
#[derive(Clone)]
pub struct HttpStatusSource {
    endpoint: Option<String>,
    http: Client,
}

impl HttpStatusSource {
    pub fn new(config: &PanelConfig) -> Result<Self, PanelError> {
        let http = Client::builder().build()?;
        Ok(Self::with_client(config, http))
    }

    pub fn with_client(config: &PanelConfig, http: Client) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            http,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch_status(&self, request_id: &RequestId) -> Result<StatusResponse, PanelError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(PanelError::Configuration(ENDPOINT_VAR))?;

        debug!(%endpoint, %request_id, "requesting status");
        let resp = self
            .http
            .post(endpoint)
            .json(&StatusRequest {
                request_id: request_id.as_str(),
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), %request_id, "status API returned an error");
            let body = resp.text().await?;
            return Err(PanelError::Request {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let raw: Value = serde_json::from_str(&body)?;
        debug!(%request_id, bytes = body.len(), "status received");
        Ok(StatusResponse::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{any, body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer) -> HttpStatusSource {
        let config = PanelConfig::new(Some(format!("{}/status", server.uri())));
        HttpStatusSource::new(&config).unwrap()
    }

    #[tokio::test]
    async fn missing_endpoint_fails_before_any_call() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let source = HttpStatusSource::new(&PanelConfig::default()).unwrap();
        let err = source
            .fetch_status(&RequestId::new("demo-121"))
            .await
            .unwrap_err();

        assert!(matches!(err, PanelError::Configuration(_)));
        assert_eq!(err.to_string(), "Missing STATUS_API_URL");
        server.verify().await;
    }

    #[tokio::test]
    async fn posts_request_id_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/status"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"requestId": "demo-121"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestId": "demo-121",
                "status": "received",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = source_for(&server)
            .fetch_status(&RequestId::new("  demo-121 "))
            .await
            .unwrap();

        assert_eq!(response.request_id().as_deref(), Some("demo-121"));
        assert_eq!(response.status().as_deref(), Some("received"));
    }

    #[tokio::test]
    async fn non_success_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let err = source_for(&server)
            .fetch_status(&RequestId::new("missing"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("not found"));
    }

    #[tokio::test]
    async fn malformed_collections_still_succeed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestId": "demo-121",
                "status": "Approved",
                "runs": [],
                "approvals": "[]",
                "runEvents": "not-json",
            })))
            .mount(&server)
            .await;

        let response = source_for(&server)
            .fetch_status(&RequestId::new("demo-121"))
            .await
            .unwrap();

        assert_eq!(response.status().as_deref(), Some("Approved"));
        assert!(response.runs().is_empty());
        assert!(response.approvals().is_empty());
        assert!(response.timeline().is_empty());
    }

    #[tokio::test]
    async fn non_json_success_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = source_for(&server)
            .fetch_status(&RequestId::new("demo-121"))
            .await
            .unwrap_err();

        assert!(matches!(err, PanelError::Decode(_)));
    }

    #[tokio::test]
    async fn truncated_error_body_is_a_transport_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            // body is shorter than content-length, then the connection closes
            let _ = socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\npartial")
                .await;
        });

        let config = PanelConfig::new(Some(format!("http://127.0.0.1:{port}/status")));
        let err = HttpStatusSource::new(&config)
            .unwrap()
            .fetch_status(&RequestId::new("demo-121"))
            .await
            .unwrap_err();

        assert!(matches!(err, PanelError::Transport(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = PanelConfig::new(Some(format!("http://127.0.0.1:{port}/status")));
        let source = HttpStatusSource::new(&config).unwrap();

        let err = source
            .fetch_status(&RequestId::new("demo-121"))
            .await
            .unwrap_err();

        assert!(matches!(err, PanelError::Transport(_)));
    }
}
