use analytics::AnalyticsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_store::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Status selection happens here, on the tagged error variants, never by
/// matching message strings. Infrastructure failures collapse into a generic
/// 500: the caller learns nothing about the store, and the underlying error
/// is logged (and echoed in the body only in debug builds).
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Analytics(AnalyticsError::InvalidIdentifier) => (
                StatusCode::BAD_REQUEST,
                "Invalid instructor ID format",
                None,
            ),
            AppError::Analytics(AnalyticsError::NotFound) => {
                (StatusCode::NOT_FOUND, "Instructor not found", None)
            }
            AppError::Analytics(err) => {
                tracing::error!(error = ?err, "Aggregation failed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some(err.to_string()),
                )
            }
            AppError::Store(err) => {
                tracing::error!(error = ?err, "Entity store error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some(err.to_string()),
                )
            }
        };

        let mut body = json!({ "success": false, "message": message });
        if cfg!(debug_assertions) {
            if let Some(detail) = detail {
                body["error"] = json!(detail);
            }
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_identifier_maps_to_400() {
        let response = AppError::from(AnalyticsError::InvalidIdentifier).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::from(AnalyticsError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_errors_collapse_into_a_generic_500() {
        let err = AppError::from(StoreError::Unavailable("connection refused".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_analytics_errors_are_500_too() {
        let err = AppError::from(AnalyticsError::Internal("boom".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
