use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use corecomply::auth::{has_any_role, IdentityProvider, MockIdentityProvider};
use corecomply::catalog::Catalog;
use corecomply::domain::{ControlStatus, ReportFormat};
use corecomply::i18n::t;
use corecomply::integrations::{
    PayrollIntegrationClient, SimulatedPayrollClient, StpPayEvent, SuperContribution,
};
use corecomply::reports::render_control_report;
use corecomply::tokens::{TokenExport, VariablesDocument};
use corecomply::ui::{Breadcrumb, BreadcrumbItem, CommandPalette, StatusBadge, UiState};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn pay_event() -> StpPayEvent {
    StpPayEvent {
        employer_abn: "51824753556".to_string(),
        pay_period_start: date(2025, 6, 1),
        pay_period_end: date(2025, 6, 14),
        payment_date: date(2025, 6, 16),
        payments: Vec::new(),
    }
}

fn contribution(amount: f64) -> SuperContribution {
    SuperContribution {
        employee_id: "EMP-001".to_string(),
        fund_usi: "STA0100AU".to_string(),
        member_number: "M-1001".to_string(),
        amount,
        period_start: date(2025, 4, 1),
        period_end: date(2025, 6, 30),
    }
}

#[tokio::test]
async fn lodgement_identifiers_stay_unique_across_integrations() {
    let client = SimulatedPayrollClient::instant();
    let mut seen = HashSet::new();

    for _ in 0..50 {
        let receipt = client.submit_stp_event(pay_event()).await.expect("receipt");
        assert!(!receipt.receipt_id.is_empty());
        assert!(seen.insert(receipt.receipt_id));

        let submission = client
            .submit_super_contributions(vec![contribution(480.0), contribution(520.5)])
            .await
            .expect("submission");
        assert_eq!(submission.contribution_count, 2);
        assert!(seen.insert(submission.transaction_id));
    }

    assert_eq!(seen.len(), 100);
}

#[tokio::test]
async fn super_confirmation_reflects_lodged_contributions() {
    let client: Arc<dyn PayrollIntegrationClient> = Arc::new(SimulatedPayrollClient::instant());
    let submission = client
        .submit_super_contributions(vec![contribution(100.0); 3])
        .await
        .expect("submission");

    let confirmation = client
        .super_confirmation_status(&submission.transaction_id)
        .await
        .expect("confirmation");
    assert_eq!(confirmation.transaction_id, submission.transaction_id);
    assert_eq!(confirmation.contribution_count, 3);

    assert!(client.super_confirmation_status("SS-unknown").await.is_err());
}

#[test]
fn mock_identity_grants_lawyer_and_compliance_owner() {
    let provider = MockIdentityProvider::default();
    for session in ["", "session-a", "another"] {
        let claims = provider.resolve_claims(session).expect("mock claims");
        assert_eq!(claims.user_id, "mock-user");
        assert!(has_any_role(&claims, &["CFO", "Lawyer"]));
        assert!(!has_any_role(&claims, &["CFO", "Auditor"]));
    }
}

#[test]
fn translations_fall_back_to_key() {
    assert_eq!(t("status.compliant"), "Compliant");
    assert_eq!(t("unknown.key"), "unknown.key");
}

#[test]
fn breadcrumb_marks_last_item_as_current_page() {
    let html = Breadcrumb::new(vec![
        BreadcrumbItem::link("Home", "/"),
        BreadcrumbItem::link("Controls", "/controls"),
        BreadcrumbItem::link("SOC2-01", "/controls/ctl-soc2-01"),
    ])
    .render();

    assert_eq!(html.matches("breadcrumb-separator").count(), 2);
    assert_eq!(html.matches("<a href=").count(), 2);
    assert!(html.contains("<span aria-current=\"page\">SOC2-01</span>"));
    assert!(!html.contains("href=\"/controls/ctl-soc2-01\""));
}

#[test]
fn status_badges_follow_control_status() {
    let compliant = StatusBadge::of(ControlStatus::Compliant).render();
    let failing = StatusBadge::of(ControlStatus::NonCompliant).render();
    assert!(compliant.contains("badge-success"));
    assert!(failing.contains("badge-danger"));
    assert!(failing.contains("Non-Compliant"));
}

#[test]
fn palette_state_is_explicit() {
    let catalog = Catalog::demo();
    let palette = CommandPalette::standard(catalog.active_admin_names());
    let mut first = UiState::default();
    let second = UiState::default();

    assert!(palette.select_user(&mut first, "Sam Ortiz"));
    assert_eq!(palette.current_user(&first), Some("Sam Ortiz"));
    assert_eq!(palette.current_user(&second), Some("Ava Chen"));
    assert!(!palette.select_user(&mut first, "Riley Brooks"));
}

#[test]
fn design_tokens_export_to_json_and_css() {
    let raw = r##"{"collections":[{"name":"Color","variables":[{"name":"Primary","value":"#111827"},{"name":"surfaceMuted","value":"#f3f4f6"}]},{"name":"Spacing","variables":[{"name":"Gap Large","value":24}]}]}"##;
    let document = VariablesDocument::from_reader(raw.as_bytes()).expect("document");
    let export = TokenExport::from_collections(&document.collections).expect("export");

    let json: serde_json::Value =
        serde_json::from_str(&export.to_json().expect("json")).expect("valid json");
    assert_eq!(json["Color/Primary"], "#111827");
    assert_eq!(json["Spacing/Gap Large"], 24);

    let css = export.to_css();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--color-primary: #111827;"));
    assert!(css.contains("--color-surface-muted: #f3f4f6;"));
    assert!(css.contains("--spacing-gap-large: 24;"));
}

#[test]
fn csv_report_has_header_and_row_per_control() {
    let catalog = Catalog::demo();
    let report = render_control_report(&catalog, ReportFormat::Csv).expect("csv report");
    let text = String::from_utf8(report.body).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), catalog.controls.len() + 1);
    assert!(lines[0].starts_with("id,code,title,status,owner,framework"));
    assert!(render_control_report(&catalog, ReportFormat::Pdf).is_err());
}

#[test]
fn demo_catalog_survives_a_json_round_trip() {
    let catalog = Catalog::demo();
    let raw = serde_json::to_string(&catalog).expect("serialize");
    let restored = Catalog::from_reader(raw.as_bytes()).expect("deserialize");

    assert_eq!(restored.controls, catalog.controls);
    assert_eq!(restored.audits, catalog.audits);
    assert!(restored.integrations.iter().all(|integration| integration.api_key.is_none()));
}
