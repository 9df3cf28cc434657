use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Seam for the tax office, super clearing house, and accounting platform.
///
/// Only the simulated implementation exists today; a live client would sit
/// behind the same trait.
#[async_trait]
pub trait PayrollIntegrationClient: Send + Sync {
    async fn submit_stp_event(&self, event: StpPayEvent) -> Result<StpReceipt, IntegrationError>;

    async fn stp_receipt_status(
        &self,
        receipt_id: &str,
    ) -> Result<StpReceiptStatus, IntegrationError>;

    async fn submit_super_contributions(
        &self,
        contributions: Vec<SuperContribution>,
    ) -> Result<SuperSubmission, IntegrationError>;

    async fn super_confirmation_status(
        &self,
        transaction_id: &str,
    ) -> Result<SuperConfirmation, IntegrationError>;

    async fn xero_employees(&self) -> Result<Vec<XeroEmployee>, IntegrationError>;

    async fn xero_payruns(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<XeroPayrun>, IntegrationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
}

/// Single touch payroll pay event lodged with the tax office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StpPayEvent {
    pub employer_abn: String,
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub payments: Vec<StpEmployeePayment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StpEmployeePayment {
    pub employee_id: String,
    pub gross: f64,
    pub payg_withheld: f64,
    pub super_guarantee: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StpReceipt {
    pub receipt_id: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LodgementState {
    Processed,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StpReceiptStatus {
    pub receipt_id: String,
    pub status: LodgementState,
    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperContribution {
    pub employee_id: String,
    pub fund_usi: String,
    pub member_number: String,
    pub amount: f64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperSubmission {
    pub transaction_id: String,
    pub contribution_count: usize,
    pub total_amount: f64,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperConfirmation {
    pub transaction_id: String,
    pub status: LodgementState,
    pub contribution_count: usize,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XeroEmployee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XeroPayrun {
    pub payrun_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub payment_date: NaiveDate,
    pub total_gross: f64,
    pub status: String,
}
