//! Read-only, in-memory copy of every compliance resource the dashboard displays.

mod router;
mod seed;

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{
    AccessLog, AdminUser, Asset, Audit, AuditSession, CompanyProfile, ComplianceTask, Control,
    EmployeeVariance, Framework, Integration, IntegrationHealth, KnowledgeBaseArticle,
    PayrollAuditKpis, PayrunValidation, Policy, ReportTemplate, SupportTicket, SystemSetting,
};

pub use router::catalog_router;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollAuditData {
    pub kpis: PayrollAuditKpis,
    #[serde(default)]
    pub integration_health: Vec<IntegrationHealth>,
    #[serde(default)]
    pub sessions: Vec<AuditSession>,
    #[serde(default)]
    pub validations: Vec<PayrunValidation>,
    #[serde(default)]
    pub variances: Vec<EmployeeVariance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub company: CompanyProfile,
    #[serde(default)]
    pub frameworks: Vec<Framework>,
    #[serde(default)]
    pub controls: Vec<Control>,
    #[serde(default)]
    pub audits: Vec<Audit>,
    #[serde(default)]
    pub policies: Vec<Policy>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub integrations: Vec<Integration>,
    #[serde(default)]
    pub report_templates: Vec<ReportTemplate>,
    #[serde(default)]
    pub tasks: Vec<ComplianceTask>,
    #[serde(default)]
    pub support_tickets: Vec<SupportTicket>,
    #[serde(default)]
    pub knowledge_base: Vec<KnowledgeBaseArticle>,
    #[serde(default)]
    pub admin_users: Vec<AdminUser>,
    #[serde(default)]
    pub access_logs: Vec<AccessLog>,
    #[serde(default)]
    pub settings: Vec<SystemSetting>,
    pub payroll: PayrollAuditData,
}

impl Catalog {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        find(&self.controls, id)
    }

    pub fn framework(&self, id: &str) -> Option<&Framework> {
        find(&self.frameworks, id)
    }

    pub fn framework_for(&self, control: &Control) -> Option<&Framework> {
        self.framework(&control.framework_id)
    }

    pub fn audit(&self, id: &str) -> Option<&Audit> {
        find(&self.audits, id)
    }

    /// Display names of active admins, used as palette users.
    pub fn active_admin_names(&self) -> Vec<String> {
        self.admin_users
            .iter()
            .filter(|user| user.active)
            .map(|user| user.name.clone())
            .collect()
    }
}

/// Resource addressable by id on the REST surface.
pub trait Resource {
    const KIND: &'static str;
    fn id(&self) -> &str;
}

pub(crate) fn find<'a, T: Resource>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

macro_rules! impl_resource {
    ($($ty:ty => $kind:literal),+ $(,)?) => {
        $(
            impl Resource for $ty {
                const KIND: &'static str = $kind;
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_resource! {
    Control => "control",
    Framework => "framework",
    Audit => "audit",
    Policy => "policy",
    Asset => "asset",
    ComplianceTask => "task",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_links_controls_to_frameworks() {
        let catalog = Catalog::demo();
        assert!(!catalog.controls.is_empty());
        for control in &catalog.controls {
            assert!(
                catalog.framework_for(control).is_some(),
                "control {} references unknown framework",
                control.id
            );
        }
    }

    #[test]
    fn demo_findings_reference_their_audit() {
        let catalog = Catalog::demo();
        for audit in &catalog.audits {
            for finding in &audit.findings {
                assert_eq!(finding.audit_id, audit.id);
                assert!(catalog.control(&finding.control_id).is_some());
            }
        }
    }

    #[test]
    fn catalog_round_trips_through_reader() {
        let json = serde_json::to_vec(&Catalog::demo()).expect("catalog serializes");
        let loaded = Catalog::from_reader(json.as_slice()).expect("catalog loads");
        assert_eq!(loaded.controls, Catalog::demo().controls);
    }

    #[test]
    fn malformed_catalog_is_rejected() {
        let err = Catalog::from_reader("{".as_bytes()).expect_err("invalid json");
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn inactive_admins_are_not_palette_users() {
        let catalog = Catalog::demo();
        let names = catalog.active_admin_names();
        assert!(!names.is_empty());
        assert!(catalog
            .admin_users
            .iter()
            .filter(|user| !user.active)
            .all(|user| !names.contains(&user.name)));
    }
}
