use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{
    ActionResponse, ApiError, ErrorResponse, GiftsResponse, MeResponse, OpenRequest,
};

/// Backend calls the mini-app page makes
#[async_trait]
pub trait MiniAppApi: Send + Sync {
    /// GET /api/me
    async fn me(&self) -> Result<MeResponse, ApiError>;

    /// POST /api/topup
    async fn top_up(&self) -> Result<ActionResponse, ApiError>;

    /// POST /api/open
    async fn open_case(&self, case: &str) -> Result<ActionResponse, ApiError>;

    /// GET /api/gifts
    async fn gifts(&self) -> Result<GiftsResponse, ApiError>;
}

/// HTTP client for the mini-app backend, resolving `/api/*` paths against the page origin
pub struct MiniAppClient {
    http_client: HttpClient,
    origin: String,
}

impl MiniAppClient {
    /// Create a client for the given origin, without a request timeout
    pub fn new(origin: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client whose requests fail after `timeout`
    pub fn with_timeout(origin: String, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            origin: origin.trim_end_matches('/').to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    /// Classify a non-success response
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        // The backend explains most refusals as {"ok": false, "message": "..."}
        if let Ok(ErrorResponse { message: Some(message), .. }) =
            serde_json::from_str::<ErrorResponse>(&body_text)
        {
            warn!("Request rejected with {}: {}", status_code, message);
            return ApiError::Rejected { status: status_code, message };
        }

        match status_code {
            404 => ApiError::NotFound(body_text),
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, body_text)
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// Check the status and decode the body of a response
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {}", path);
        let response = self
            .http_client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        Self::decode(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&OpenRequest>,
    ) -> Result<T, ApiError> {
        debug!("POST {}", path);
        let mut request = self.http_client.post(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        Self::decode(response).await
    }
}

#[async_trait]
impl MiniAppApi for MiniAppClient {
    async fn me(&self) -> Result<MeResponse, ApiError> {
        self.get("/api/me").await
    }

    async fn top_up(&self) -> Result<ActionResponse, ApiError> {
        self.post("/api/topup", None).await
    }

    async fn open_case(&self, case: &str) -> Result<ActionResponse, ApiError> {
        let body = OpenRequest { case: case.to_string() };
        self.post("/api/open", Some(&body)).await
    }

    async fn gifts(&self) -> Result<GiftsResponse, ApiError> {
        self.get("/api/gifts").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::test_support::closed_origin;

    #[tokio::test]
    async fn me_decodes_balance() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "user_id": 1, "balance": 42})))
            .expect(1)
            .mount(&server)
            .await;

        let client = MiniAppClient::new(server.uri());
        let me = client.me().await.unwrap();
        assert_eq!(me.balance, 42);
    }

    #[tokio::test]
    async fn open_sends_case_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/open"))
            .and(body_json(json!({"case": "premium"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "gift": "Эпик NFT", "balance": 0})))
            .expect(1)
            .mount(&server)
            .await;

        let client = MiniAppClient::new(format!("{}/", server.uri()));
        let response = client.open_case("premium").await.unwrap();
        assert_eq!(response.gift.as_deref(), Some("Эпик NFT"));
    }

    #[tokio::test]
    async fn json_refusal_becomes_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/open"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"ok": false, "message": "Недостаточно средств"})))
            .mount(&server)
            .await;

        let client = MiniAppClient::new(server.uri());
        let err = client.open_case("basic").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected { status: 400, message: "Недостаточно средств".to_string() }
        );
    }

    #[tokio::test]
    async fn plain_statuses_are_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/gifts"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = MiniAppClient::new(server.uri());
        assert_eq!(
            client.gifts().await.unwrap_err(),
            ApiError::ServerError(503, "unavailable".to_string())
        );
        assert!(matches!(client.me().await.unwrap_err(), ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_deserialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = MiniAppClient::new(server.uri());
        assert!(matches!(
            client.me().await.unwrap_err(),
            ApiError::DeserializationError(_)
        ));
    }

    #[tokio::test]
    async fn unreachable_origin_is_request_error() {
        let client = MiniAppClient::new(closed_origin());
        assert!(matches!(client.me().await.unwrap_err(), ApiError::RequestError(_)));
    }

    #[tokio::test]
    async fn slow_response_times_out_as_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"balance": 1}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = MiniAppClient::with_timeout(server.uri(), Duration::from_secs(1)).unwrap();
        assert!(matches!(client.me().await.unwrap_err(), ApiError::RequestError(_)));
    }
}
