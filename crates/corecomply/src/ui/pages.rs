use super::badge::StatusBadge;
use super::breadcrumb::{Breadcrumb, BreadcrumbItem};
use super::html::escape_html;
use super::shell::PageShell;
use crate::catalog::Catalog;
use crate::domain::{ControlStatus, TaskStatus};
use crate::i18n::t;

fn home() -> BreadcrumbItem {
    BreadcrumbItem::link(t("breadcrumb.home"), "/")
}

/// Shell for a top-level section: `Home / <section>`.
fn section_page(nav_key: &str, path: &str, body: &str) -> String {
    PageShell::new(
        t(nav_key),
        path,
        Breadcrumb::new(vec![home(), BreadcrumbItem::text(t(nav_key))]),
    )
    .render(body)
}

/// Cells are pre-rendered HTML; callers escape text themselves.
fn table<I>(class: &str, headers: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut html = format!("<table class=\"{class}\"><thead><tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

pub fn dashboard_page(catalog: &Catalog) -> String {
    let mut body = String::from("<section class=\"control-summary\"><ul>");
    for &status in ControlStatus::ALL {
        let count = catalog
            .controls
            .iter()
            .filter(|control| control.status == status)
            .count();
        body.push_str(&format!(
            "<li>{} <strong>{count}</strong></li>",
            StatusBadge::of(status).render()
        ));
    }
    body.push_str("</ul></section>");

    let open_findings: usize = catalog
        .audits
        .iter()
        .map(|audit| audit.open_findings().count())
        .sum();
    body.push_str(&format!(
        "<p class=\"open-findings\">Open findings: <strong>{open_findings}</strong></p>"
    ));

    body.push_str("<section class=\"tasks\"><ul>");
    for task in catalog
        .tasks
        .iter()
        .filter(|task| task.status != TaskStatus::Done)
    {
        body.push_str(&format!(
            "<li>{} {} <span class=\"due\">{}</span></li>",
            escape_html(&task.title),
            StatusBadge::of(task.status).render(),
            task.due_date
        ));
    }
    body.push_str("</ul></section>");

    PageShell::new(
        t("nav.dashboard"),
        "/",
        Breadcrumb::new(vec![BreadcrumbItem::text(t("breadcrumb.home"))]),
    )
    .render(&body)
}

pub fn controls_page(catalog: &Catalog) -> String {
    let rows = catalog.controls.iter().map(|control| {
        vec![
            format!(
                "<a href=\"/controls/{}\">{}</a>",
                escape_html(&control.id),
                escape_html(&control.code)
            ),
            escape_html(&control.title),
            escape_html(&control.owner),
            StatusBadge::of(control.status).render(),
        ]
    });
    section_page(
        "nav.controls",
        "/controls",
        &table("controls", &["Code", "Title", "Owner", "Status"], rows),
    )
}

/// Detail page for one control, or `None` when the id is unknown.
pub fn control_page(catalog: &Catalog, id: &str) -> Option<String> {
    let control = catalog.control(id)?;

    let framework = catalog
        .framework_for(control)
        .map(|framework| format!("{} {}", framework.name, framework.version))
        .unwrap_or_else(|| control.framework_id.clone());

    let mut body = format!(
        "<dl><dt>Title</dt><dd>{}</dd><dt>Owner</dt><dd>{}</dd><dt>Framework</dt><dd>{}</dd><dt>Status</dt><dd>{}</dd></dl>",
        escape_html(&control.title),
        escape_html(&control.owner),
        escape_html(&framework),
        StatusBadge::of(control.status).render()
    );

    let findings: Vec<_> = catalog
        .audits
        .iter()
        .flat_map(|audit| audit.findings.iter())
        .filter(|finding| finding.control_id == control.id)
        .collect();
    if !findings.is_empty() {
        body.push_str("<h2>Findings</h2><ul class=\"findings\">");
        for finding in findings {
            body.push_str(&format!(
                "<li>{} {} <span class=\"finding-status\">{}</span></li>",
                StatusBadge::of(finding.severity).render(),
                escape_html(&finding.title),
                finding.status.label()
            ));
        }
        body.push_str("</ul>");
    }

    let shell = PageShell::new(
        control.code.clone(),
        format!("/controls/{}", control.id),
        Breadcrumb::new(vec![
            home(),
            BreadcrumbItem::link(t("nav.controls"), "/controls"),
            BreadcrumbItem::text(control.code.clone()),
        ]),
    );
    Some(shell.render(&body))
}

pub fn audits_page(catalog: &Catalog) -> String {
    let rows = catalog.audits.iter().map(|audit| {
        vec![
            escape_html(&audit.title),
            audit.audit_type.label().to_string(),
            escape_html(&audit.auditor),
            audit.start_date.to_string(),
            audit.open_findings().count().to_string(),
            StatusBadge::of(audit.status).render(),
        ]
    });
    section_page(
        "nav.audits",
        "/audits",
        &table(
            "audits",
            &["Audit", "Type", "Auditor", "Started", "Open findings", "Status"],
            rows,
        ),
    )
}

pub fn policies_page(catalog: &Catalog) -> String {
    let rows = catalog.policies.iter().map(|policy| {
        vec![
            escape_html(&policy.title),
            escape_html(&policy.owner),
            escape_html(&policy.version),
            policy.effective_from.to_string(),
            policy
                .effective_to
                .map(|end| end.to_string())
                .unwrap_or_default(),
            StatusBadge::of(policy.status).render(),
        ]
    });
    section_page(
        "nav.policies",
        "/policies",
        &table(
            "policies",
            &["Policy", "Owner", "Version", "Effective from", "Effective to", "Status"],
            rows,
        ),
    )
}

pub fn assets_page(catalog: &Catalog) -> String {
    let rows = catalog.assets.iter().map(|asset| {
        vec![
            escape_html(&asset.name),
            t(asset.classification.i18n_key()).to_string(),
            escape_html(&asset.owner),
            StatusBadge::of(asset.status).render(),
        ]
    });
    section_page(
        "nav.assets",
        "/assets",
        &table("assets", &["Asset", "Classification", "Owner", "Status"], rows),
    )
}

pub fn integrations_page(catalog: &Catalog) -> String {
    let rows = catalog.integrations.iter().map(|integration| {
        vec![
            escape_html(&integration.name),
            t(integration.kind.i18n_key()).to_string(),
            integration
                .last_synced_at
                .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "Never".to_string()),
            StatusBadge::of(integration.status).render(),
        ]
    });
    section_page(
        "nav.integrations",
        "/integrations",
        &table(
            "integrations",
            &["Integration", "Type", "Last synced", "Status"],
            rows,
        ),
    )
}

pub fn reports_page(catalog: &Catalog) -> String {
    let rows = catalog.report_templates.iter().map(|template| {
        vec![
            escape_html(&template.name),
            t(template.report_type.i18n_key()).to_string(),
            t(template.default_format.i18n_key()).to_string(),
        ]
    });
    let mut body = table("report-templates", &["Template", "Type", "Default format"], rows);
    body.push_str(
        "<p class=\"downloads\">Control status: \
         <a href=\"/api/v1/reports/controls?format=csv\">CSV</a> \
         <a href=\"/api/v1/reports/controls?format=json\">JSON</a></p>",
    );
    section_page("nav.reports", "/reports", &body)
}

pub fn tasks_page(catalog: &Catalog) -> String {
    let rows = catalog.tasks.iter().map(|task| {
        vec![
            escape_html(&task.title),
            t(task.category.i18n_key()).to_string(),
            StatusBadge::of(task.priority).render(),
            escape_html(&task.assignee),
            task.due_date.to_string(),
            task.recurring_frequency
                .map(|frequency| t(frequency.i18n_key()).to_string())
                .unwrap_or_default(),
            StatusBadge::of(task.status).render(),
        ]
    });
    section_page(
        "nav.tasks",
        "/tasks",
        &table(
            "tasks",
            &["Task", "Category", "Priority", "Assignee", "Due", "Recurs", "Status"],
            rows,
        ),
    )
}

pub fn payroll_audit_page(catalog: &Catalog) -> String {
    let payroll = &catalog.payroll;
    let kpis = &payroll.kpis;
    let mut body = format!(
        "<dl class=\"kpis\"><dt>Pay runs validated</dt><dd>{}</dd>\
         <dt>Pay runs flagged</dt><dd>{}</dd>\
         <dt>Employees with variance</dt><dd>{}</dd>\
         <dt>Total variance</dt><dd>${:.2}</dd>\
         <dt>STP lodgement rate</dt><dd>{:.0}%</dd>\
         <dt>Super paid on time</dt><dd>{:.0}%</dd></dl>",
        kpis.payruns_validated,
        kpis.payruns_flagged,
        kpis.employees_with_variance,
        kpis.total_variance_amount,
        kpis.stp_lodgement_rate * 100.0,
        kpis.super_on_time_rate * 100.0
    );

    body.push_str(&table(
        "integration-health",
        &["System", "Checked", "Message", "Status"],
        payroll.integration_health.iter().map(|health| {
            vec![
                escape_html(&health.system),
                health.last_checked_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                escape_html(health.message.as_deref().unwrap_or_default()),
                StatusBadge::of(health.status).render(),
            ]
        }),
    ));
    body.push_str(&table(
        "audit-sessions",
        &["Session", "Validations", "Status"],
        payroll.sessions.iter().map(|session| {
            vec![
                escape_html(&session.name),
                session.validation_ids.len().to_string(),
                StatusBadge::of(session.status).render(),
            ]
        }),
    ));
    body.push_str(&table(
        "payrun-validations",
        &["Pay run", "Period", "Gross", "Expected", "Variance", "Status"],
        payroll.validations.iter().map(|validation| {
            vec![
                escape_html(&validation.payrun_id),
                format!("{} to {}", validation.period_start, validation.period_end),
                format!("{:.2}", validation.gross_amount),
                format!("{:.2}", validation.expected_amount),
                format!("{:.2}", validation.variance_amount),
                StatusBadge::of(validation.status).render(),
            ]
        }),
    ));

    section_page("nav.payroll", "/payroll-audit", &body)
}

pub fn admin_page(catalog: &Catalog) -> String {
    let mut body = table(
        "admin-users",
        &["Name", "Email", "Role", "Status"],
        catalog.admin_users.iter().map(|user| {
            let state = if user.active { "Active" } else { "Inactive" };
            vec![
                escape_html(&user.name),
                escape_html(&user.email),
                t(user.role.i18n_key()).to_string(),
                StatusBadge::new(state).render(),
            ]
        }),
    );
    body.push_str(&table(
        "access-logs",
        &["When", "User", "Action", "Resource"],
        catalog.access_logs.iter().map(|entry| {
            vec![
                entry.timestamp.format("%Y-%m-%d %H:%M UTC").to_string(),
                escape_html(&entry.user),
                escape_html(&entry.action),
                escape_html(&entry.resource),
            ]
        }),
    ));
    section_page("nav.admin", "/admin", &body)
}
