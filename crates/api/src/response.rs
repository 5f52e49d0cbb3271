//! Shared response envelope types for API handlers.
//!
//! Every response, success or failure, carries `success` and `message`.
//! Successful responses add `data` and, for listings, `pagination`; failures
//! add `error` and a machine-readable `code`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tasklist_core::pagination::PaginationMeta;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(ApiResponse::ok("Todo retrieved successfully", todo))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data: Some(data),
            pagination: None,
        }
    }

    pub fn paginated(message: &'static str, data: T, pagination: PaginationMeta) -> Self {
        Self {
            success: true,
            message,
            data: Some(data),
            pagination: Some(pagination),
        }
    }

    /// 201 response for a newly created resource.
    pub fn created(message: &'static str, data: T) -> (StatusCode, Self) {
        (StatusCode::CREATED, Self::ok(message, data))
    }
}

impl ApiResponse<()> {
    /// Success without a payload.
    pub fn message(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            data: None,
            pagination: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Failure envelope. `message` and `error` carry the same text.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub error: String,
    pub code: &'static str,
}

impl ErrorBody {
    pub fn new(message: String, code: &'static str) -> Self {
        Self {
            success: false,
            error: message.clone(),
            message,
            code,
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
