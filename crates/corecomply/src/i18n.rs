//! Static English label table keyed by dotted strings.

const EN: &[(&str, &str)] = &[
    ("app.title", "CoreComply"),
    ("nav.dashboard", "Dashboard"),
    ("nav.controls", "Controls"),
    ("nav.audits", "Audits"),
    ("nav.policies", "Policies"),
    ("nav.assets", "Assets"),
    ("nav.integrations", "Integrations"),
    ("nav.reports", "Reports"),
    ("nav.tasks", "Compliance Tasks"),
    ("nav.payroll", "Payroll Audit"),
    ("nav.support", "Support"),
    ("nav.admin", "Administration"),
    ("breadcrumb.home", "Home"),
    ("palette.placeholder", "Type a command or search"),
    ("palette.empty", "No matching commands"),
    ("status.compliant", "Compliant"),
    ("status.evidence_pending", "Evidence Pending"),
    ("status.non_compliant", "Non-Compliant"),
    ("status.not_applicable", "Not Applicable"),
    ("status.planned", "Planned"),
    ("status.in_progress", "In Progress"),
    ("status.in_review", "In Review"),
    ("status.completed", "Completed"),
    ("status.cancelled", "Cancelled"),
    ("status.open", "Open"),
    ("status.pending", "Pending"),
    ("status.remediating", "Remediating"),
    ("status.resolved", "Resolved"),
    ("status.risk_accepted", "Risk Accepted"),
    ("status.closed", "Closed"),
    ("status.published", "Published"),
    ("status.draft", "Draft"),
    ("status.archived", "Archived"),
    ("status.active", "Active"),
    ("status.under_review", "Under Review"),
    ("status.retired", "Retired"),
    ("status.connected", "Connected"),
    ("status.disconnected", "Disconnected"),
    ("status.error", "Error"),
    ("status.healthy", "Healthy"),
    ("status.degraded", "Degraded"),
    ("status.down", "Down"),
    ("status.passed", "Passed"),
    ("status.warning", "Warning"),
    ("status.failed", "Failed"),
    ("severity.low", "Low"),
    ("severity.medium", "Medium"),
    ("severity.high", "High"),
    ("severity.critical", "Critical"),
    ("priority.low", "Low"),
    ("priority.medium", "Medium"),
    ("priority.high", "High"),
    ("priority.urgent", "Urgent"),
    ("task.todo", "To Do"),
    ("task.in_progress", "In Progress"),
    ("task.done", "Done"),
    ("task.overdue", "Overdue"),
    ("task_type.attestation", "Attestation"),
    ("task_type.evidence", "Evidence"),
    ("task_type.review", "Review"),
    ("task_type.remediation", "Remediation"),
    ("task_type.filing", "Filing"),
    ("category.payroll", "Payroll"),
    ("category.tax", "Tax"),
    ("category.superannuation", "Superannuation"),
    ("category.privacy", "Privacy"),
    ("category.security", "Security"),
    ("category.governance", "Governance"),
    ("frequency.weekly", "Weekly"),
    ("frequency.monthly", "Monthly"),
    ("frequency.quarterly", "Quarterly"),
    ("frequency.annually", "Annually"),
    ("audit_type.internal", "Internal"),
    ("audit_type.external", "External"),
    ("audit_type.regulatory", "Regulatory"),
    ("classification.public", "Public"),
    ("classification.internal", "Internal"),
    ("classification.confidential", "Confidential"),
    ("classification.restricted", "Restricted"),
    ("integration.tax_office", "Tax Office"),
    ("integration.super_clearing_house", "Super Clearing House"),
    ("integration.accounting", "Accounting"),
    ("integration.identity_provider", "Identity Provider"),
    ("report.control_status", "Control Status"),
    ("report.audit_summary", "Audit Summary"),
    ("report.policy_attestation", "Policy Attestation"),
    ("report.payroll_compliance", "Payroll Compliance"),
    ("format.pdf", "PDF"),
    ("format.csv", "CSV"),
    ("format.json", "JSON"),
    ("support.account", "Account"),
    ("support.billing", "Billing"),
    ("support.integrations", "Integrations"),
    ("support.compliance", "Compliance"),
    ("support.technical", "Technical"),
    ("role.owner", "Owner"),
    ("role.admin", "Admin"),
    ("role.auditor", "Auditor"),
    ("role.viewer", "Viewer"),
];

/// Look up a label, falling back to the key itself.
pub fn t(key: &str) -> &str {
    EN.iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
        .unwrap_or(key)
}

pub fn contains(key: &str) -> bool {
    EN.iter().any(|(candidate, _)| *candidate == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AdminRole, ArticleStatus, AssetClassification, AssetStatus, AuditSessionStatus,
        AuditStatus, AuditType, ControlStatus, FindingSeverity, FindingStatus,
        IntegrationHealthState, IntegrationKind, IntegrationStatus, Labelled, PayrunValidationStatus,
        PolicyStatus, RecurringFrequency, ReportFormat, ReportType, SupportCategory, TaskCategory,
        TaskPriority, TaskStatus, TaskType, TicketStatus,
    };

    #[test]
    fn resolves_known_key() {
        assert_eq!(t("status.compliant"), "Compliant");
    }

    #[test]
    fn unknown_key_falls_back_unchanged() {
        assert_eq!(t("unknown.key"), "unknown.key");
        assert_eq!(t(t("unknown.key")), "unknown.key");
        assert_eq!(t(""), "");
    }

    fn assert_translated<L: Labelled>() {
        for &value in L::ALL {
            assert_eq!(
                t(value.i18n_key()),
                value.label(),
                "{} does not translate to its label",
                value.i18n_key()
            );
        }
    }

    #[test]
    fn every_labelled_enum_translates_to_its_label() {
        assert_translated::<ControlStatus>();
        assert_translated::<AuditStatus>();
        assert_translated::<AuditType>();
        assert_translated::<FindingSeverity>();
        assert_translated::<FindingStatus>();
        assert_translated::<PolicyStatus>();
        assert_translated::<AssetClassification>();
        assert_translated::<AssetStatus>();
        assert_translated::<IntegrationKind>();
        assert_translated::<IntegrationStatus>();
        assert_translated::<ReportType>();
        assert_translated::<ReportFormat>();
        assert_translated::<TaskType>();
        assert_translated::<TaskPriority>();
        assert_translated::<TaskStatus>();
        assert_translated::<TaskCategory>();
        assert_translated::<RecurringFrequency>();
        assert_translated::<SupportCategory>();
        assert_translated::<TicketStatus>();
        assert_translated::<ArticleStatus>();
        assert_translated::<AdminRole>();
        assert_translated::<IntegrationHealthState>();
        assert_translated::<AuditSessionStatus>();
        assert_translated::<PayrunValidationStatus>();
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        let mut keys: Vec<_> = EN.iter().map(|(key, _)| *key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), EN.len());
    }
}
