use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::{find, Catalog, Resource};

type CatalogState = Arc<Catalog>;

/// Read-only REST routes over the catalog.
pub fn catalog_router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/api/v1/company", get(company))
        .route("/api/v1/frameworks", list(|c| c.frameworks.as_slice()))
        .route("/api/v1/frameworks/:id", item(|c| c.frameworks.as_slice()))
        .route("/api/v1/controls", list(|c| c.controls.as_slice()))
        .route("/api/v1/controls/:id", item(|c| c.controls.as_slice()))
        .route("/api/v1/audits", list(|c| c.audits.as_slice()))
        .route("/api/v1/audits/:id", item(|c| c.audits.as_slice()))
        .route("/api/v1/policies", list(|c| c.policies.as_slice()))
        .route("/api/v1/policies/:id", item(|c| c.policies.as_slice()))
        .route("/api/v1/assets", list(|c| c.assets.as_slice()))
        .route("/api/v1/assets/:id", item(|c| c.assets.as_slice()))
        .route("/api/v1/tasks", list(|c| c.tasks.as_slice()))
        .route("/api/v1/tasks/:id", item(|c| c.tasks.as_slice()))
        .route("/api/v1/integrations", list(|c| c.integrations.as_slice()))
        .route(
            "/api/v1/report-templates",
            list(|c| c.report_templates.as_slice()),
        )
        .route(
            "/api/v1/support-tickets",
            list(|c| c.support_tickets.as_slice()),
        )
        .route("/api/v1/knowledge-base", list(|c| c.knowledge_base.as_slice()))
        .route("/api/v1/admin-users", list(|c| c.admin_users.as_slice()))
        .route("/api/v1/access-logs", list(|c| c.access_logs.as_slice()))
        .route("/api/v1/settings", list(|c| c.settings.as_slice()))
        .route("/api/v1/payroll-audit/kpis", get(payroll_kpis))
        .route(
            "/api/v1/payroll-audit/integration-health",
            list(|c| c.payroll.integration_health.as_slice()),
        )
        .route(
            "/api/v1/payroll-audit/sessions",
            list(|c| c.payroll.sessions.as_slice()),
        )
        .route(
            "/api/v1/payroll-audit/validations",
            list(|c| c.payroll.validations.as_slice()),
        )
        .route(
            "/api/v1/payroll-audit/variances",
            list(|c| c.payroll.variances.as_slice()),
        )
        .with_state(catalog)
}

fn list<T>(select: fn(&Catalog) -> &[T]) -> MethodRouter<CatalogState>
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    get(move |State(catalog): State<CatalogState>| async move {
        Json(select(&catalog).to_vec())
    })
}

fn item<T>(select: fn(&Catalog) -> &[T]) -> MethodRouter<CatalogState>
where
    T: Resource + Serialize + Send + Sync + 'static,
{
    get(
        move |State(catalog): State<CatalogState>, Path(id): Path<String>| async move {
            match find(select(&catalog), &id) {
                Some(resource) => Json(resource).into_response(),
                None => not_found(T::KIND, &id),
            }
        },
    )
}

pub(crate) fn not_found(kind: &str, id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{kind} '{id}' not found") })),
    )
        .into_response()
}

async fn company(State(catalog): State<CatalogState>) -> impl IntoResponse {
    Json(catalog.company.clone())
}

async fn payroll_kpis(State(catalog): State<CatalogState>) -> impl IntoResponse {
    Json(catalog.payroll.kpis.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        catalog_router(Arc::new(Catalog::demo()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json payload"))
    }

    #[tokio::test]
    async fn lists_seeded_controls() {
        let (status, body) = get_json("/api/v1/controls").await;
        assert_eq!(status, StatusCode::OK);
        let controls = body.as_array().expect("array");
        assert_eq!(controls.len(), Catalog::demo().controls.len());
        assert!(controls.iter().all(|c| c.get("frameworkId").is_some()));
    }

    #[tokio::test]
    async fn fetches_single_audit_with_findings() {
        let (status, body) = get_json("/api/v1/audits/aud-2025-soc2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "External");
        assert_eq!(body["findings"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (status, body) = get_json("/api/v1/controls/ctl-missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "control 'ctl-missing' not found");
    }

    #[tokio::test]
    async fn integrations_never_expose_api_keys() {
        let (_, body) = get_json("/api/v1/integrations").await;
        let integrations = body.as_array().expect("array");
        assert!(!integrations.is_empty());
        assert!(integrations.iter().all(|i| i.get("apiKey").is_none()));
    }

    #[tokio::test]
    async fn payroll_kpis_are_exposed() {
        let (status, body) = get_json("/api/v1/payroll-audit/kpis").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["payrunsValidated"], 12);
    }
}
