use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Why a request's identity headers were refused.
///
/// Every variant is a caller input error: the request is rejected with
/// `403 Forbidden` and never retried. The `Display` output is the reason
/// string sent back in the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// `X-User-Level` is absent or not an integer.
    #[error("invalid or missing level header")]
    InvalidLevelHeader,

    /// `X-User-Level` parsed but is not a known level.
    #[error("invalid user level")]
    InvalidLevel {
        /// The rank that was received.
        level: i64,
    },

    /// One of `X-User-ID`, `X-User-Email` or `X-User-TourOperator` is empty.
    #[error("missing user information")]
    MissingUserInformation,
}

impl Rejection {
    /// Machine-readable reason, identical to the `Display` output.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::InvalidLevelHeader => "invalid or missing level header",
            Rejection::InvalidLevel { .. } => "invalid user level",
            Rejection::MissingUserInformation => "missing user information",
        }
    }

    /// Status code for every rejection.
    ///
    /// 403 rather than 401: there is no credential to refresh.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.reason() }))).into_response()
    }
}

/// No principal was installed for this request.
///
/// Returned by the `CurrentPrincipal` extractor when a handler runs without
/// the principal middleware in front of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("user not found")]
pub struct MissingPrincipal;

impl IntoResponse for MissingPrincipal {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
