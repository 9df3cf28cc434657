use corecomply::auth::IdentityProvider;
use corecomply::catalog::{Catalog, CatalogError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) identity: Arc<dyn IdentityProvider>,
}

pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_path(path)?;
            info!(path = %path.display(), controls = catalog.controls.len(), "catalog loaded");
            Ok(catalog)
        }
        None => {
            info!("using built-in demo catalog");
            Ok(Catalog::demo())
        }
    }
}
