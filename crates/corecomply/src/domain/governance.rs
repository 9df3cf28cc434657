use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub title: String,
    pub status: PolicyStatus,
    pub owner: String,
    pub version: String,
    pub effective_from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<NaiveDate>,
}

impl Policy {
    /// Published and inside its effective window on `day`.
    pub fn is_in_force(&self, day: NaiveDate) -> bool {
        self.status == PolicyStatus::Published
            && self.effective_from <= day
            && self.effective_to.map_or(true, |end| day <= end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Published,
    Draft,
    Archived,
}

labelled!(PolicyStatus {
    Published => "Published", "status.published";
    Draft => "Draft", "status.draft";
    Archived => "Archived", "status.archived";
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub classification: AssetClassification,
    pub owner: String,
    pub status: AssetStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClassification {
    Public,
    Internal,
    Confidential,
    Restricted,
}

labelled!(AssetClassification {
    Public => "Public", "classification.public";
    Internal => "Internal", "classification.internal";
    Confidential => "Confidential", "classification.confidential";
    Restricted => "Restricted", "classification.restricted";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    Active,
    UnderReview,
    Retired,
}

labelled!(AssetStatus {
    Active => "Active", "status.active";
    UnderReview => "Under Review", "status.under_review";
    Retired => "Retired", "status.retired";
});

/// Connection to an external compliance data source.
///
/// The API key is accepted on input but never written back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IntegrationKind,
    pub status: IntegrationStatus,
    #[serde(default)]
    pub configuration: BTreeMap<String, String>,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synced_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationKind {
    TaxOffice,
    SuperClearingHouse,
    Accounting,
    IdentityProvider,
}

labelled!(IntegrationKind {
    TaxOffice => "Tax Office", "integration.tax_office";
    SuperClearingHouse => "Super Clearing House", "integration.super_clearing_house";
    Accounting => "Accounting", "integration.accounting";
    IdentityProvider => "Identity Provider", "integration.identity_provider";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
    Error,
}

labelled!(IntegrationStatus {
    Connected => "Connected", "status.connected";
    Disconnected => "Disconnected", "status.disconnected";
    Error => "Error", "status.error";
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub format: ReportFormat,
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub default_format: ReportFormat,
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    ControlStatus,
    AuditSummary,
    PolicyAttestation,
    PayrollCompliance,
}

labelled!(ReportType {
    ControlStatus => "Control Status", "report.control_status";
    AuditSummary => "Audit Summary", "report.audit_summary";
    PolicyAttestation => "Policy Attestation", "report.policy_attestation";
    PayrollCompliance => "Payroll Compliance", "report.payroll_compliance";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Csv,
    Json,
}

labelled!(ReportFormat {
    Pdf => "PDF", "format.pdf";
    Csv => "CSV", "format.csv";
    Json => "JSON", "format.json";
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub id: String,
    pub legal_name: String,
    pub abn: String,
    pub industry: String,
    pub employee_count: u32,
    pub primary_contact: String,
}
