//! Payroll audit shapes backing the payroll-compliance dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Headline figures for the payroll audit dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollAuditKpis {
    pub payruns_validated: u32,
    pub payruns_flagged: u32,
    pub employees_with_variance: u32,
    pub total_variance_amount: f64,
    pub stp_lodgement_rate: f64,
    pub super_on_time_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationHealth {
    pub id: String,
    pub system: String,
    pub status: IntegrationHealthState,
    pub last_checked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationHealthState {
    Healthy,
    Degraded,
    Down,
}

labelled!(IntegrationHealthState {
    Healthy => "Healthy", "status.healthy";
    Degraded => "Degraded", "status.degraded";
    Down => "Down", "status.down";
});

/// Loose grouping of payrun validations reviewed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSession {
    pub id: String,
    pub name: String,
    pub status: AuditSessionStatus,
    pub started_at: DateTime<Utc>,
    pub validation_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditSessionStatus {
    Open,
    InReview,
    Closed,
}

labelled!(AuditSessionStatus {
    Open => "Open", "status.open";
    InReview => "In Review", "status.in_review";
    Closed => "Closed", "status.closed";
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrunValidation {
    pub id: String,
    pub payrun_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub status: PayrunValidationStatus,
    pub gross_amount: f64,
    pub expected_amount: f64,
    pub variance_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayrunValidationStatus {
    Passed,
    Warning,
    Failed,
}

labelled!(PayrunValidationStatus {
    Passed => "Passed", "status.passed";
    Warning => "Warning", "status.warning";
    Failed => "Failed", "status.failed";
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeVariance {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub payrun_id: String,
    pub expected_amount: f64,
    pub actual_amount: f64,
    pub variance_amount: f64,
    pub reason: String,
}
