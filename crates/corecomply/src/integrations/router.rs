use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::client::{
    PayrollIntegrationClient, StpPayEvent, StpReceipt, StpReceiptStatus, SuperConfirmation,
    SuperContribution, SuperSubmission, XeroEmployee, XeroPayrun,
};
use crate::auth::{claims_from_headers, require_any_role, AuthError, IdentityProvider};
use crate::error::AppError;

/// Roles allowed to lodge data with external systems.
pub const LODGEMENT_ROLES: [&str; 3] = ["CFO", "ComplianceOwner", "PayrollOfficer"];

pub struct IntegrationState<C> {
    pub client: Arc<C>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl<C> Clone for IntegrationState<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            identity: Arc::clone(&self.identity),
        }
    }
}

/// Router exposing the payroll integration stubs.
pub fn integration_router<C>(state: IntegrationState<C>) -> Router
where
    C: PayrollIntegrationClient + 'static,
{
    Router::new()
        .route("/api/v1/integrations/stp/events", post(submit_stp::<C>))
        .route(
            "/api/v1/integrations/stp/receipts/:receipt_id",
            get(stp_status::<C>),
        )
        .route(
            "/api/v1/integrations/super/contributions",
            post(submit_super::<C>),
        )
        .route(
            "/api/v1/integrations/super/transactions/:transaction_id",
            get(super_status::<C>),
        )
        .route("/api/v1/integrations/xero/employees", get(xero_employees::<C>))
        .route("/api/v1/integrations/xero/payruns", get(xero_payruns::<C>))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PayrunWindow {
    from: NaiveDate,
    to: NaiveDate,
}

fn authorize<C>(
    state: &IntegrationState<C>,
    headers: &HeaderMap,
    roles: Option<&[&str]>,
) -> Result<(), AuthError> {
    let claims = claims_from_headers(headers, state.identity.as_ref())?;
    match roles {
        Some(roles) => require_any_role(&claims, roles),
        None => Ok(()),
    }
}

pub(crate) async fn submit_stp<C>(
    State(state): State<IntegrationState<C>>,
    headers: HeaderMap,
    Json(event): Json<StpPayEvent>,
) -> Result<(StatusCode, Json<StpReceipt>), AppError>
where
    C: PayrollIntegrationClient + 'static,
{
    authorize(&state, &headers, Some(&LODGEMENT_ROLES))?;
    let receipt = state.client.submit_stp_event(event).await?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

pub(crate) async fn stp_status<C>(
    State(state): State<IntegrationState<C>>,
    headers: HeaderMap,
    Path(receipt_id): Path<String>,
) -> Result<Json<StpReceiptStatus>, AppError>
where
    C: PayrollIntegrationClient + 'static,
{
    authorize(&state, &headers, None)?;
    Ok(Json(state.client.stp_receipt_status(&receipt_id).await?))
}

pub(crate) async fn submit_super<C>(
    State(state): State<IntegrationState<C>>,
    headers: HeaderMap,
    Json(contributions): Json<Vec<SuperContribution>>,
) -> Result<(StatusCode, Json<SuperSubmission>), AppError>
where
    C: PayrollIntegrationClient + 'static,
{
    authorize(&state, &headers, Some(&LODGEMENT_ROLES))?;
    let submission = state.client.submit_super_contributions(contributions).await?;
    Ok((StatusCode::ACCEPTED, Json(submission)))
}

pub(crate) async fn super_status<C>(
    State(state): State<IntegrationState<C>>,
    headers: HeaderMap,
    Path(transaction_id): Path<String>,
) -> Result<Json<SuperConfirmation>, AppError>
where
    C: PayrollIntegrationClient + 'static,
{
    authorize(&state, &headers, None)?;
    Ok(Json(
        state.client.super_confirmation_status(&transaction_id).await?,
    ))
}

pub(crate) async fn xero_employees<C>(
    State(state): State<IntegrationState<C>>,
    headers: HeaderMap,
) -> Result<Json<Vec<XeroEmployee>>, AppError>
where
    C: PayrollIntegrationClient + 'static,
{
    authorize(&state, &headers, None)?;
    Ok(Json(state.client.xero_employees().await?))
}

pub(crate) async fn xero_payruns<C>(
    State(state): State<IntegrationState<C>>,
    headers: HeaderMap,
    Query(window): Query<PayrunWindow>,
) -> Result<Json<Vec<XeroPayrun>>, AppError>
where
    C: PayrollIntegrationClient + 'static,
{
    authorize(&state, &headers, None)?;
    Ok(Json(
        state.client.xero_payruns(window.from, window.to).await?,
    ))
}
