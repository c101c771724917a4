use crate::{error::AppError, AppState};
use analytics::{CoursePerformance, InstructorSummary, Timeframe, TrendPoint};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// The success envelope wrapped around every data response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    timeframe: Option<String>,
}

/// # GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// # GET /api/v1/analytics/instructor-summary/:instructor_id
///
/// The id arrives as a raw string; the engine validates it before any store
/// access, so malformed ids turn into a 400 without touching the catalog.
pub async fn get_instructor_summary(
    Path(instructor_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<InstructorSummary>>, AppError> {
    let summary = state
        .engine
        .instructor_summary(&state.store, &instructor_id)
        .await?;
    Ok(Json(ApiResponse::new(summary)))
}

/// # GET /api/v1/analytics/course-performance/:instructor_id
pub async fn get_course_performance(
    Path(instructor_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CoursePerformance>>>, AppError> {
    let performance = state
        .engine
        .course_performance(&state.store, &instructor_id)
        .await?;
    Ok(Json(ApiResponse::new(performance)))
}

/// # GET /api/v1/analytics/performance-trends/:instructor_id?timeframe=monthly
pub async fn get_performance_trends(
    Path(instructor_id): Path<String>,
    Query(query): Query<TrendsQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<TrendPoint>>>, AppError> {
    let timeframe = query
        .timeframe
        .as_deref()
        .map(Timeframe::from)
        .unwrap_or_default();
    let trends = state
        .engine
        .performance_trends(&state.store, &instructor_id, timeframe)
        .await?;
    Ok(Json(ApiResponse::new(trends)))
}

/// Catch-all for unknown routes, kept in the same envelope as real errors.
pub async fn endpoint_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "message": "Endpoint not found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::SummaryEngine;
    use catalog_store::{demo_catalog, demo_instructor_jane, CatalogStore};
    use rust_decimal_macros::dec;

    fn app_state() -> Arc<AppState> {
        Arc::new(AppState {
            store: CatalogStore::from_data(demo_catalog()),
            engine: SummaryEngine::new(),
        })
    }

    #[tokio::test]
    async fn summary_handler_wraps_the_report_in_the_success_envelope() {
        let state = app_state();
        let Json(response) = get_instructor_summary(
            Path(demo_instructor_jane().to_string()),
            State(state),
        )
        .await
        .unwrap();

        assert!(response.success);
        assert_eq!(response.data.instructor_name, "Jane Doe");
        assert_eq!(response.data.revenue.total_gross, dec!(2640.00));

        let json = serde_json::to_value(&response.data).unwrap();
        assert_eq!(json["topPerformingCourse"], "Advanced React 2026");
    }

    #[tokio::test]
    async fn summary_handler_propagates_typed_errors() {
        let state = app_state();
        let err = get_instructor_summary(Path("bogus".to_string()), State(state.clone()))
            .await
            .unwrap_err();
        assert_eq!(
            err.into_response().status(),
            StatusCode::BAD_REQUEST
        );

        let err = get_instructor_summary(
            Path("abcdefabcdefabcdefabcdef".to_string()),
            State(state),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn trends_handler_defaults_to_monthly_buckets() {
        let state = app_state();
        let Json(response) = get_performance_trends(
            Path(demo_instructor_jane().to_string()),
            Query(TrendsQuery { timeframe: None }),
            State(state),
        )
        .await
        .unwrap();

        assert!(response.success);
        assert!(response.data.iter().all(|p| !p.period.contains("-W")));
    }

    #[tokio::test]
    async fn trends_handler_honors_the_weekly_timeframe() {
        let state = app_state();
        let Json(response) = get_performance_trends(
            Path(demo_instructor_jane().to_string()),
            Query(TrendsQuery {
                timeframe: Some("weekly".to_string()),
            }),
            State(state),
        )
        .await
        .unwrap();

        assert!(response.data.iter().all(|p| p.period.contains("-W")));
    }

    #[tokio::test]
    async fn course_performance_handler_serves_per_course_rows() {
        let state = app_state();
        let Json(response) = get_course_performance(
            Path(demo_instructor_jane().to_string()),
            State(state),
        )
        .await
        .unwrap();

        assert_eq!(response.data.len(), 3);
        assert_eq!(response.data[0].title, "Advanced React 2026");
    }
}
