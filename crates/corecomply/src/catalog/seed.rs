use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::json;

use super::{Catalog, PayrollAuditData};
use crate::domain::{
    AccessLog, AdminRole, AdminUser, ArticleStatus, Asset, AssetClassification, AssetStatus,
    Audit, AuditFinding, AuditSession, AuditSessionStatus, AuditStatus, AuditType,
    CompanyProfile, ComplianceTask, Control, ControlStatus, EmployeeVariance, FindingSeverity,
    FindingStatus, Framework, Integration, IntegrationHealth, IntegrationHealthState,
    IntegrationKind, IntegrationStatus, KnowledgeBaseArticle, PayrollAuditKpis,
    PayrunValidation, PayrunValidationStatus, Policy, PolicyStatus, RecurringFrequency,
    ReportFormat, ReportTemplate, ReportType, SupportCategory, SupportTicket, SystemSetting,
    TaskCategory, TaskPriority, TaskStatus, TaskType, TicketStatus,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    let naive = date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .unwrap_or(NaiveDateTime::MIN);
    Utc.from_utc_datetime(&naive)
}

fn control(
    id: &str,
    code: &str,
    title: &str,
    status: ControlStatus,
    owner: &str,
    framework_id: &str,
) -> Control {
    Control {
        id: id.to_string(),
        code: code.to_string(),
        title: title.to_string(),
        status,
        owner: owner.to_string(),
        framework_id: framework_id.to_string(),
        last_reviewed: Some(date(2025, 5, 30)),
    }
}

fn finding(
    id: &str,
    audit_id: &str,
    control_id: &str,
    title: &str,
    severity: FindingSeverity,
    status: FindingStatus,
) -> AuditFinding {
    AuditFinding {
        id: id.to_string(),
        audit_id: audit_id.to_string(),
        control_id: control_id.to_string(),
        title: title.to_string(),
        severity,
        status,
        due_date: Some(date(2025, 8, 29)),
    }
}

impl Catalog {
    /// Deterministic demo data for local runs and tests.
    pub fn demo() -> Self {
        Self {
            company: CompanyProfile {
                id: "company-1".to_string(),
                legal_name: "Harbourside Logistics Pty Ltd".to_string(),
                abn: "51824753556".to_string(),
                industry: "Transport & Logistics".to_string(),
                employee_count: 142,
                primary_contact: "Ava Chen".to_string(),
            },
            frameworks: vec![
                Framework {
                    id: "fw-soc2".to_string(),
                    name: "SOC 2".to_string(),
                    version: "2017 TSC".to_string(),
                    effective_date: date(2017, 12, 15),
                    is_active: true,
                },
                Framework {
                    id: "fw-iso27001".to_string(),
                    name: "ISO/IEC 27001".to_string(),
                    version: "2022".to_string(),
                    effective_date: date(2022, 10, 25),
                    is_active: true,
                },
                Framework {
                    id: "fw-payroll".to_string(),
                    name: "Payroll Obligations".to_string(),
                    version: "FY25".to_string(),
                    effective_date: date(2024, 7, 1),
                    is_active: true,
                },
            ],
            controls: vec![
                control(
                    "ctl-soc2-01",
                    "SOC2-01",
                    "Quarterly user access reviews",
                    ControlStatus::Compliant,
                    "Ava Chen",
                    "fw-soc2",
                ),
                control(
                    "ctl-soc2-02",
                    "SOC2-02",
                    "Change management approvals",
                    ControlStatus::EvidencePending,
                    "Sam Ortiz",
                    "fw-soc2",
                ),
                control(
                    "ctl-iso-a59",
                    "ISO-A.5.9",
                    "Inventory of information assets",
                    ControlStatus::Compliant,
                    "Sam Ortiz",
                    "fw-iso27001",
                ),
                control(
                    "ctl-iso-a812",
                    "ISO-A.8.12",
                    "Data leakage prevention",
                    ControlStatus::NonCompliant,
                    "Ava Chen",
                    "fw-iso27001",
                ),
                control(
                    "ctl-pay-stp",
                    "PAY-STP",
                    "Single touch payroll lodged each pay run",
                    ControlStatus::Compliant,
                    "Noah Williams",
                    "fw-payroll",
                ),
                control(
                    "ctl-pay-sg",
                    "PAY-SG",
                    "Super guarantee paid by quarterly due date",
                    ControlStatus::EvidencePending,
                    "Noah Williams",
                    "fw-payroll",
                ),
            ],
            audits: vec![
                Audit {
                    id: "aud-2025-soc2".to_string(),
                    title: "SOC 2 Type II readiness".to_string(),
                    status: AuditStatus::InProgress,
                    audit_type: AuditType::External,
                    scope: "Production platform and supporting corporate IT".to_string(),
                    auditor: "Blue Gum Assurance".to_string(),
                    start_date: date(2025, 6, 2),
                    end_date: None,
                    findings: vec![
                        finding(
                            "fnd-1",
                            "aud-2025-soc2",
                            "ctl-soc2-02",
                            "Emergency changes merged without secondary approval",
                            FindingSeverity::High,
                            FindingStatus::Remediating,
                        ),
                        finding(
                            "fnd-2",
                            "aud-2025-soc2",
                            "ctl-iso-a812",
                            "USB storage not blocked on finance laptops",
                            FindingSeverity::Medium,
                            FindingStatus::Open,
                        ),
                    ],
                },
                Audit {
                    id: "aud-2025-payroll".to_string(),
                    title: "FY25 payroll compliance review".to_string(),
                    status: AuditStatus::Completed,
                    audit_type: AuditType::Internal,
                    scope: "Pay runs, STP lodgements and super contributions".to_string(),
                    auditor: "Internal Audit".to_string(),
                    start_date: date(2025, 4, 7),
                    end_date: Some(date(2025, 4, 30)),
                    findings: vec![finding(
                        "fnd-3",
                        "aud-2025-payroll",
                        "ctl-pay-sg",
                        "Q3 super contribution paid two days late",
                        FindingSeverity::Low,
                        FindingStatus::Resolved,
                    )],
                },
            ],
            policies: vec![
                Policy {
                    id: "pol-aup".to_string(),
                    title: "Acceptable Use Policy".to_string(),
                    status: PolicyStatus::Published,
                    owner: "Ava Chen".to_string(),
                    version: "3.1".to_string(),
                    effective_from: date(2025, 1, 1),
                    effective_to: None,
                },
                Policy {
                    id: "pol-privacy".to_string(),
                    title: "Privacy Policy".to_string(),
                    status: PolicyStatus::Draft,
                    owner: "Legal".to_string(),
                    version: "2.0-draft".to_string(),
                    effective_from: date(2025, 9, 1),
                    effective_to: None,
                },
                Policy {
                    id: "pol-byod-2022".to_string(),
                    title: "Bring Your Own Device".to_string(),
                    status: PolicyStatus::Archived,
                    owner: "Sam Ortiz".to_string(),
                    version: "1.4".to_string(),
                    effective_from: date(2022, 3, 1),
                    effective_to: Some(date(2024, 12, 31)),
                },
            ],
            assets: vec![
                Asset {
                    id: "ast-payroll-db".to_string(),
                    name: "Payroll database".to_string(),
                    classification: AssetClassification::Restricted,
                    owner: "Noah Williams".to_string(),
                    status: AssetStatus::Active,
                },
                Asset {
                    id: "ast-crm".to_string(),
                    name: "Customer CRM".to_string(),
                    classification: AssetClassification::Confidential,
                    owner: "Sam Ortiz".to_string(),
                    status: AssetStatus::UnderReview,
                },
                Asset {
                    id: "ast-legacy-ftp".to_string(),
                    name: "Legacy FTP server".to_string(),
                    classification: AssetClassification::Internal,
                    owner: "Sam Ortiz".to_string(),
                    status: AssetStatus::Retired,
                },
            ],
            integrations: vec![
                Integration {
                    id: "int-ato".to_string(),
                    name: "ATO Single Touch Payroll".to_string(),
                    kind: IntegrationKind::TaxOffice,
                    status: IntegrationStatus::Connected,
                    configuration: BTreeMap::from([(
                        "softwareId".to_string(),
                        "CC-STP-001".to_string(),
                    )]),
                    api_key: Some("demo-ato-key".to_string()),
                    last_synced_at: Some(at(2025, 6, 16, 9)),
                },
                Integration {
                    id: "int-superstream".to_string(),
                    name: "SuperStream clearing house".to_string(),
                    kind: IntegrationKind::SuperClearingHouse,
                    status: IntegrationStatus::Connected,
                    configuration: BTreeMap::new(),
                    api_key: Some("demo-super-key".to_string()),
                    last_synced_at: Some(at(2025, 6, 30, 17)),
                },
                Integration {
                    id: "int-xero".to_string(),
                    name: "Xero Payroll".to_string(),
                    kind: IntegrationKind::Accounting,
                    status: IntegrationStatus::Error,
                    configuration: BTreeMap::from([(
                        "tenant".to_string(),
                        "harbourside".to_string(),
                    )]),
                    api_key: None,
                    last_synced_at: None,
                },
            ],
            report_templates: vec![
                ReportTemplate {
                    id: "tpl-control-status".to_string(),
                    name: "Control status by framework".to_string(),
                    report_type: ReportType::ControlStatus,
                    default_format: ReportFormat::Csv,
                    parameters: BTreeMap::from([(
                        "groupBy".to_string(),
                        json!("framework"),
                    )]),
                },
                ReportTemplate {
                    id: "tpl-payroll".to_string(),
                    name: "Payroll compliance summary".to_string(),
                    report_type: ReportType::PayrollCompliance,
                    default_format: ReportFormat::Pdf,
                    parameters: BTreeMap::from([("periods".to_string(), json!(6))]),
                },
            ],
            tasks: vec![
                ComplianceTask {
                    id: "tsk-attest-aup".to_string(),
                    title: "Annual acceptable use attestation".to_string(),
                    task_type: TaskType::Attestation,
                    priority: TaskPriority::Medium,
                    status: TaskStatus::InProgress,
                    category: TaskCategory::Governance,
                    assignee: "All staff".to_string(),
                    due_date: date(2025, 7, 31),
                    recurring_frequency: Some(RecurringFrequency::Annually),
                },
                ComplianceTask {
                    id: "tsk-sg-q4".to_string(),
                    title: "Lodge Q4 super guarantee contributions".to_string(),
                    task_type: TaskType::Filing,
                    priority: TaskPriority::Urgent,
                    status: TaskStatus::Todo,
                    category: TaskCategory::Superannuation,
                    assignee: "Noah Williams".to_string(),
                    due_date: date(2025, 7, 28),
                    recurring_frequency: Some(RecurringFrequency::Quarterly),
                },
                ComplianceTask {
                    id: "tsk-dlp".to_string(),
                    title: "Remediate USB storage finding".to_string(),
                    task_type: TaskType::Remediation,
                    priority: TaskPriority::High,
                    status: TaskStatus::Overdue,
                    category: TaskCategory::Security,
                    assignee: "Sam Ortiz".to_string(),
                    due_date: date(2025, 6, 20),
                    recurring_frequency: None,
                },
                ComplianceTask {
                    id: "tsk-stp-finalise".to_string(),
                    title: "STP finalisation declaration".to_string(),
                    task_type: TaskType::Filing,
                    priority: TaskPriority::High,
                    status: TaskStatus::Done,
                    category: TaskCategory::Tax,
                    assignee: "Noah Williams".to_string(),
                    due_date: date(2025, 7, 14),
                    recurring_frequency: Some(RecurringFrequency::Annually),
                },
            ],
            support_tickets: vec![
                SupportTicket {
                    id: "tkt-1001".to_string(),
                    subject: "Xero connection keeps expiring".to_string(),
                    category: SupportCategory::Integrations,
                    status: TicketStatus::Open,
                    requester: "Noah Williams".to_string(),
                    created_at: at(2025, 6, 18, 10),
                },
                SupportTicket {
                    id: "tkt-1002".to_string(),
                    subject: "Add auditor seat".to_string(),
                    category: SupportCategory::Account,
                    status: TicketStatus::Resolved,
                    requester: "Ava Chen".to_string(),
                    created_at: at(2025, 6, 3, 14),
                },
            ],
            knowledge_base: vec![
                KnowledgeBaseArticle {
                    id: "kb-stp".to_string(),
                    title: "How STP lodgements are verified".to_string(),
                    category: SupportCategory::Compliance,
                    status: ArticleStatus::Published,
                    summary: "Receipts returned by the tax office are matched to each pay run."
                        .to_string(),
                },
                KnowledgeBaseArticle {
                    id: "kb-evidence".to_string(),
                    title: "Uploading control evidence".to_string(),
                    category: SupportCategory::Technical,
                    status: ArticleStatus::Draft,
                    summary: "Attach evidence to a control from its detail page.".to_string(),
                },
            ],
            admin_users: vec![
                AdminUser {
                    id: "adm-1".to_string(),
                    name: "Ava Chen".to_string(),
                    email: "ava.chen@harbourside.example".to_string(),
                    role: AdminRole::Owner,
                    active: true,
                },
                AdminUser {
                    id: "adm-2".to_string(),
                    name: "Sam Ortiz".to_string(),
                    email: "sam.ortiz@harbourside.example".to_string(),
                    role: AdminRole::Admin,
                    active: true,
                },
                AdminUser {
                    id: "adm-3".to_string(),
                    name: "Riley Brooks".to_string(),
                    email: "riley.brooks@harbourside.example".to_string(),
                    role: AdminRole::Auditor,
                    active: false,
                },
            ],
            access_logs: vec![
                AccessLog {
                    id: "log-1".to_string(),
                    user: "Ava Chen".to_string(),
                    action: "policy.publish".to_string(),
                    resource: "pol-aup".to_string(),
                    timestamp: at(2024, 12, 20, 11),
                },
                AccessLog {
                    id: "log-2".to_string(),
                    user: "Sam Ortiz".to_string(),
                    action: "control.update".to_string(),
                    resource: "ctl-soc2-02".to_string(),
                    timestamp: at(2025, 6, 12, 15),
                },
            ],
            settings: vec![
                SystemSetting {
                    id: "set-reminders".to_string(),
                    key: "attestation.reminderDays".to_string(),
                    value: "7".to_string(),
                    description: "Days before due date to send attestation reminders"
                        .to_string(),
                },
                SystemSetting {
                    id: "set-risk".to_string(),
                    key: "risk.recomputeCron".to_string(),
                    value: "0 2 * * *".to_string(),
                    description: "Schedule for risk score recomputation".to_string(),
                },
            ],
            payroll: demo_payroll(),
        }
    }
}

fn demo_payroll() -> PayrollAuditData {
    PayrollAuditData {
        kpis: PayrollAuditKpis {
            payruns_validated: 12,
            payruns_flagged: 2,
            employees_with_variance: 3,
            total_variance_amount: 1_284.40,
            stp_lodgement_rate: 1.0,
            super_on_time_rate: 0.92,
        },
        integration_health: vec![
            IntegrationHealth {
                id: "hl-ato".to_string(),
                system: "ATO STP".to_string(),
                status: IntegrationHealthState::Healthy,
                last_checked_at: at(2025, 6, 30, 8),
                message: None,
            },
            IntegrationHealth {
                id: "hl-xero".to_string(),
                system: "Xero Payroll".to_string(),
                status: IntegrationHealthState::Degraded,
                last_checked_at: at(2025, 6, 30, 8),
                message: Some("Refresh token expires in 2 days".to_string()),
            },
        ],
        sessions: vec![AuditSession {
            id: "ses-2025-06".to_string(),
            name: "June pay runs".to_string(),
            status: AuditSessionStatus::InReview,
            started_at: at(2025, 7, 1, 9),
            validation_ids: vec!["val-1".to_string(), "val-2".to_string()],
        }],
        validations: vec![
            PayrunValidation {
                id: "val-1".to_string(),
                payrun_id: "pr-2025-06-a".to_string(),
                period_start: date(2025, 6, 1),
                period_end: date(2025, 6, 14),
                status: PayrunValidationStatus::Passed,
                gross_amount: 48_250.00,
                expected_amount: 48_250.00,
                variance_amount: 0.0,
            },
            PayrunValidation {
                id: "val-2".to_string(),
                payrun_id: "pr-2025-06-b".to_string(),
                period_start: date(2025, 6, 15),
                period_end: date(2025, 6, 28),
                status: PayrunValidationStatus::Warning,
                gross_amount: 47_910.50,
                expected_amount: 48_340.10,
                variance_amount: -429.60,
            },
        ],
        variances: vec![EmployeeVariance {
            id: "var-1".to_string(),
            employee_id: "emp-002".to_string(),
            employee_name: "Jack Thompson".to_string(),
            payrun_id: "pr-2025-06-b".to_string(),
            expected_amount: 2_912.40,
            actual_amount: 2_482.80,
            variance_amount: -429.60,
            reason: "Overtime hours not imported from rostering".to_string(),
        }],
    }
}
