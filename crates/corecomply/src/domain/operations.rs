use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceTask {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub category: TaskCategory,
    pub assignee: String,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<RecurringFrequency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    Attestation,
    Evidence,
    Review,
    Remediation,
    Filing,
}

labelled!(TaskType {
    Attestation => "Attestation", "task_type.attestation";
    Evidence => "Evidence", "task_type.evidence";
    Review => "Review", "task_type.review";
    Remediation => "Remediation", "task_type.remediation";
    Filing => "Filing", "task_type.filing";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

labelled!(TaskPriority {
    Low => "Low", "priority.low";
    Medium => "Medium", "priority.medium";
    High => "High", "priority.high";
    Urgent => "Urgent", "priority.urgent";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Overdue,
}

labelled!(TaskStatus {
    Todo => "To Do", "task.todo";
    InProgress => "In Progress", "task.in_progress";
    Done => "Done", "task.done";
    Overdue => "Overdue", "task.overdue";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    Payroll,
    Tax,
    Superannuation,
    Privacy,
    Security,
    Governance,
}

labelled!(TaskCategory {
    Payroll => "Payroll", "category.payroll";
    Tax => "Tax", "category.tax";
    Superannuation => "Superannuation", "category.superannuation";
    Privacy => "Privacy", "category.privacy";
    Security => "Security", "category.security";
    Governance => "Governance", "category.governance";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurringFrequency {
    Weekly,
    Monthly,
    Quarterly,
    Annually,
}

labelled!(RecurringFrequency {
    Weekly => "Weekly", "frequency.weekly";
    Monthly => "Monthly", "frequency.monthly";
    Quarterly => "Quarterly", "frequency.quarterly";
    Annually => "Annually", "frequency.annually";
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: String,
    pub subject: String,
    pub category: SupportCategory,
    pub status: TicketStatus,
    pub requester: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseArticle {
    pub id: String,
    pub title: String,
    pub category: SupportCategory,
    pub status: ArticleStatus,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportCategory {
    Account,
    Billing,
    Integrations,
    Compliance,
    Technical,
}

labelled!(SupportCategory {
    Account => "Account", "support.account";
    Billing => "Billing", "support.billing";
    Integrations => "Integrations", "support.integrations";
    Compliance => "Compliance", "support.compliance";
    Technical => "Technical", "support.technical";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
    Closed,
}

labelled!(TicketStatus {
    Open => "Open", "status.open";
    Pending => "Pending", "status.pending";
    Resolved => "Resolved", "status.resolved";
    Closed => "Closed", "status.closed";
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleStatus {
    Published,
    Draft,
}

labelled!(ArticleStatus {
    Published => "Published", "status.published";
    Draft => "Draft", "status.draft";
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminRole {
    Owner,
    Admin,
    Auditor,
    Viewer,
}

labelled!(AdminRole {
    Owner => "Owner", "role.owner";
    Admin => "Admin", "role.admin";
    Auditor => "Auditor", "role.auditor";
    Viewer => "Viewer", "role.viewer";
});

/// Admin activity entry. `user` holds the admin's display name, not an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLog {
    pub id: String,
    pub user: String,
    pub action: String,
    pub resource: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSetting {
    pub id: String,
    pub key: String,
    pub value: String,
    pub description: String,
}
