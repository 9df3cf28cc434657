//! Data shapes for each compliance resource served over the REST surface.
//!
//! Structs serialize as camelCase JSON; enum variants serialize by name.

/// Display label and i18n key for enums rendered in the UI.
pub trait Labelled: Copy + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn i18n_key(self) -> &'static str;
}

macro_rules! labelled {
    ($ty:ident { $($variant:ident => $label:literal, $key:literal;)+ }) => {
        impl $ty {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Lookup key into the i18n table.
            pub const fn i18n_key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }

        impl $crate::domain::Labelled for $ty {
            const ALL: &'static [Self] = $ty::ALL;

            fn label(self) -> &'static str {
                $ty::label(self)
            }

            fn i18n_key(self) -> &'static str {
                $ty::i18n_key(self)
            }
        }
    };
}

mod controls;
mod governance;
mod operations;
mod payroll;

pub use controls::{
    Audit, AuditFinding, AuditStatus, AuditType, Control, ControlStatus, FindingSeverity,
    FindingStatus, Framework,
};
pub use governance::{
    Asset, AssetClassification, AssetStatus, CompanyProfile, Integration, IntegrationKind,
    IntegrationStatus, Policy, PolicyStatus, Report, ReportFormat, ReportTemplate, ReportType,
};
pub use operations::{
    AccessLog, AdminRole, AdminUser, ArticleStatus, ComplianceTask, KnowledgeBaseArticle,
    RecurringFrequency, SupportCategory, SupportTicket, SystemSetting, TaskCategory,
    TaskPriority, TaskStatus, TaskType, TicketStatus,
};
pub use payroll::{
    AuditSession, AuditSessionStatus, EmployeeVariance, IntegrationHealth,
    IntegrationHealthState, PayrollAuditKpis, PayrunValidation, PayrunValidationStatus,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn control_serializes_with_camel_case_fields() {
        let control = Control {
            id: "ctl-1".to_string(),
            code: "SOC2-01".to_string(),
            title: "Access reviews".to_string(),
            status: ControlStatus::EvidencePending,
            owner: "Priya".to_string(),
            framework_id: "fw-soc2".to_string(),
            last_reviewed: None,
        };

        let value = serde_json::to_value(&control).expect("control serializes");
        assert_eq!(value["frameworkId"], "fw-soc2");
        assert_eq!(value["status"], "EvidencePending");
        assert!(value.get("lastReviewed").is_none());
    }

    #[test]
    fn integration_api_key_is_accepted_but_never_emitted() {
        let integration: Integration = serde_json::from_value(json!({
            "id": "int-1",
            "name": "Tax office",
            "type": "TaxOffice",
            "status": "Connected",
            "apiKey": "secret-key"
        }))
        .expect("integration deserializes");

        assert_eq!(integration.api_key.as_deref(), Some("secret-key"));
        assert_eq!(integration.configuration, BTreeMap::new());

        let value = serde_json::to_value(&integration).expect("integration serializes");
        assert!(value.get("apiKey").is_none());
        assert_eq!(value["type"], "TaxOffice");
    }

    #[test]
    fn labels_are_shared_by_inherent_and_trait_helpers() {
        assert_eq!(ControlStatus::ALL.len(), 4);
        assert_eq!(<FindingStatus as Labelled>::label(FindingStatus::Accepted), "Risk Accepted");
        assert_eq!(ReportFormat::Csv.label(), "CSV");
        assert_eq!(AuditSessionStatus::InReview.i18n_key(), "status.in_review");
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        let result = serde_json::from_value::<PolicyStatus>(json!("Retired"));
        assert!(result.is_err());
    }

    #[test]
    fn policy_in_force_respects_effective_window() {
        let day = |d| chrono::NaiveDate::from_ymd_opt(2025, 6, d).expect("valid date");
        let policy = Policy {
            id: "pol-1".to_string(),
            title: "Acceptable use".to_string(),
            status: PolicyStatus::Published,
            owner: "Ops".to_string(),
            version: "1.2".to_string(),
            effective_from: day(1),
            effective_to: Some(day(20)),
        };

        assert!(policy.is_in_force(day(10)));
        assert!(!policy.is_in_force(day(21)));

        let draft = Policy {
            status: PolicyStatus::Draft,
            ..policy
        };
        assert!(!draft.is_in_force(day(10)));
    }
}
