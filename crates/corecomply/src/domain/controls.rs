use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Versioned regulatory standard that controls are grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
    pub id: String,
    pub name: String,
    pub version: String,
    pub effective_date: NaiveDate,
    pub is_active: bool,
}

/// A named compliance requirement tracked to a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub id: String,
    pub code: String,
    pub title: String,
    pub status: ControlStatus,
    pub owner: String,
    pub framework_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlStatus {
    Compliant,
    EvidencePending,
    NonCompliant,
    NotApplicable,
}

labelled!(ControlStatus {
    Compliant => "Compliant", "status.compliant";
    EvidencePending => "Evidence Pending", "status.evidence_pending";
    NonCompliant => "Non-Compliant", "status.non_compliant";
    NotApplicable => "Not Applicable", "status.not_applicable";
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub id: String,
    pub title: String,
    pub status: AuditStatus,
    #[serde(rename = "type")]
    pub audit_type: AuditType,
    pub scope: String,
    pub auditor: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub findings: Vec<AuditFinding>,
}

impl Audit {
    /// Findings that still need remediation or sign-off.
    pub fn open_findings(&self) -> impl Iterator<Item = &AuditFinding> {
        self.findings
            .iter()
            .filter(|finding| finding.status.is_open())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

labelled!(AuditStatus {
    Planned => "Planned", "status.planned";
    InProgress => "In Progress", "status.in_progress";
    Completed => "Completed", "status.completed";
    Cancelled => "Cancelled", "status.cancelled";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditType {
    Internal,
    External,
    Regulatory,
}

labelled!(AuditType {
    Internal => "Internal", "audit_type.internal";
    External => "External", "audit_type.external";
    Regulatory => "Regulatory", "audit_type.regulatory";
});

/// Issue raised during an audit against a specific control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFinding {
    pub id: String,
    pub audit_id: String,
    pub control_id: String,
    pub title: String,
    pub severity: FindingSeverity,
    pub status: FindingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FindingSeverity {
    Low,
    Medium,
    High,
    Critical,
}

labelled!(FindingSeverity {
    Low => "Low", "severity.low";
    Medium => "Medium", "severity.medium";
    High => "High", "severity.high";
    Critical => "Critical", "severity.critical";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingStatus {
    Open,
    Remediating,
    Resolved,
    Accepted,
}

labelled!(FindingStatus {
    Open => "Open", "status.open";
    Remediating => "Remediating", "status.remediating";
    Resolved => "Resolved", "status.resolved";
    Accepted => "Risk Accepted", "status.risk_accepted";
});

impl FindingStatus {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::Remediating)
    }
}
