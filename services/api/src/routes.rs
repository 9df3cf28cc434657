use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use corecomply::auth::{claims_from_headers, Claims};
use corecomply::catalog::{catalog_router, Catalog};
use corecomply::error::AppError;
use corecomply::i18n;
use corecomply::integrations::{integration_router, IntegrationState, PayrollIntegrationClient};
use corecomply::reports::report_router;
use corecomply::ui::{ui_router, UiContext};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct Translation {
    pub(crate) key: String,
    pub(crate) value: String,
}

/// Every feature router plus the platform endpoints.
pub(crate) fn with_platform_routes<C>(
    catalog: Arc<Catalog>,
    integrations: IntegrationState<C>,
) -> Router
where
    C: PayrollIntegrationClient + 'static,
{
    catalog_router(Arc::clone(&catalog))
        .merge(report_router(Arc::clone(&catalog)))
        .merge(integration_router(integrations))
        .merge(ui_router(UiContext::new(catalog)))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/session", get(session_endpoint))
        .route("/api/v1/i18n/:key", get(translation_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn session_endpoint(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Result<Json<Claims>, AppError> {
    Ok(Json(claims_from_headers(&headers, state.identity.as_ref())?))
}

pub(crate) async fn translation_endpoint(Path(key): Path<String>) -> Json<Translation> {
    let value = i18n::t(&key).to_string();
    Json(Translation { key, value })
}
