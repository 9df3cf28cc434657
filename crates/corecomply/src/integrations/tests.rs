use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{integration_router, IntegrationState, SimulatedPayrollClient};
use crate::auth::{
    Claims, ExternalIdentityProvider, IdentityProvider, MockIdentityProvider, SESSION_HEADER,
};

fn router_with(identity: Arc<dyn IdentityProvider>) -> axum::Router {
    integration_router(IntegrationState {
        client: Arc::new(SimulatedPayrollClient::instant()),
        identity,
    })
}

fn mock_router() -> axum::Router {
    router_with(Arc::new(MockIdentityProvider::default()))
}

fn auditor_only() -> Arc<dyn IdentityProvider> {
    Arc::new(MockIdentityProvider::with_claims(Claims {
        user_id: "aud-1".to_string(),
        name: "External Auditor".to_string(),
        email: "auditor@example.com".to_string(),
        roles: vec!["Auditor".to_string()],
    }))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(SESSION_HEADER, "session-1")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .header(SESSION_HEADER, "session-1")
        .body(Body::empty())
        .expect("request builds")
}

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn pay_event() -> Value {
    json!({
        "employerAbn": "51824753556",
        "payPeriodStart": "2025-06-01",
        "payPeriodEnd": "2025-06-14",
        "paymentDate": "2025-06-16",
        "payments": [
            { "employeeId": "emp-001", "gross": 3200.0, "paygWithheld": 640.0, "superGuarantee": 368.0 }
        ]
    })
}

fn contributions() -> Value {
    json!([
        {
            "employeeId": "emp-001",
            "fundUsi": "STA0100AU",
            "memberNumber": "M-778",
            "amount": 368.0,
            "periodStart": "2025-06-01",
            "periodEnd": "2025-06-30"
        }
    ])
}

#[tokio::test]
async fn stp_submission_returns_receipt() {
    let response = mock_router()
        .oneshot(post_json("/api/v1/integrations/stp/events", pay_event()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = read_json_body(response).await;
    let receipt = body["receiptId"].as_str().expect("receipt id");
    assert!(receipt.starts_with("STP-"));
}

#[tokio::test]
async fn stp_submission_requires_lodgement_role() {
    let response = router_with(auditor_only())
        .oneshot(post_json("/api/v1/integrations/stp/events", pay_event()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn auditor_can_still_read_receipt_status() {
    let response = router_with(auditor_only())
        .oneshot(get("/api/v1/integrations/stp/receipts/STP-1-abc"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "processed");
    assert_eq!(body["receiptId"], "STP-1-abc");
}

#[tokio::test]
async fn external_identity_is_unauthenticated() {
    let response = router_with(Arc::new(ExternalIdentityProvider))
        .oneshot(get("/api/v1/integrations/xero/employees"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn super_submission_can_be_confirmed() {
    let router = mock_router();

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/integrations/super/contributions",
            contributions(),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = read_json_body(response).await;
    let transaction = body["transactionId"]
        .as_str()
        .expect("transaction id")
        .to_string();

    let response = router
        .oneshot(get(&format!(
            "/api/v1/integrations/super/transactions/{transaction}"
        )))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["contributionCount"], 1);
    assert_eq!(body["status"], "confirmed");
}

#[tokio::test]
async fn unknown_super_transaction_is_not_found() {
    let response = mock_router()
        .oneshot(get("/api/v1/integrations/super/transactions/SS-0-nope"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn payruns_require_a_date_window() {
    let ok = mock_router()
        .oneshot(get(
            "/api/v1/integrations/xero/payruns?from=2025-06-01&to=2025-06-30",
        ))
        .await
        .expect("response");
    assert_eq!(ok.status(), StatusCode::OK);
    let body = read_json_body(ok).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let missing = mock_router()
        .oneshot(get("/api/v1/integrations/xero/payruns"))
        .await
        .expect("response");
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
}
