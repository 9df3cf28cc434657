//! Server-rendered presentation components.

mod badge;
mod breadcrumb;
mod html;
mod pages;
mod palette;
mod router;
mod shell;

pub use badge::{tone_for, BadgeTone, StatusBadge};
pub use breadcrumb::{Breadcrumb, BreadcrumbItem};
pub use pages::{
    admin_page, assets_page, audits_page, control_page, controls_page, dashboard_page,
    integrations_page, payroll_audit_page, policies_page, reports_page, tasks_page,
};
pub use palette::{CommandPalette, PaletteCommand, UiState};
pub use router::{ui_router, UiContext};
pub use shell::PageShell;

/// Top-level pages: command id, i18n key, path.
pub(crate) const NAV_ITEMS: [(&str, &str, &str); 10] = [
    ("go-dashboard", "nav.dashboard", "/"),
    ("go-controls", "nav.controls", "/controls"),
    ("go-audits", "nav.audits", "/audits"),
    ("go-policies", "nav.policies", "/policies"),
    ("go-assets", "nav.assets", "/assets"),
    ("go-integrations", "nav.integrations", "/integrations"),
    ("go-reports", "nav.reports", "/reports"),
    ("go-tasks", "nav.tasks", "/tasks"),
    ("go-payroll", "nav.payroll", "/payroll-audit"),
    ("go-admin", "nav.admin", "/admin"),
];
