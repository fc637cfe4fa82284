use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response from GET /api/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub balance: i64,
}

/// Response from POST /api/topup and POST /api/open
///
/// The top-up endpoint always carries `message`. Depending on the backend,
/// opening a case answers either with a ready `message` or with the won `gift`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub gift: Option<String>,
    #[serde(default)]
    pub balance: Option<i64>,
}

/// Response from GET /api/gifts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftsResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    pub gifts: Vec<String>,
}

/// Request body for POST /api/open
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRequest {
    pub case: String,
}

/// Error body the backend sends alongside non-success statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    pub message: Option<String>,
}

/// Error type for mini-app API operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-success status with a `message` the backend wants shown to the user
    #[error("Rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// 404 without an explanatory body
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx without an explanatory body
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Body did not decode into the expected shape
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// The message supplied by the backend, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}
