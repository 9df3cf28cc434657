//! Control status report export.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::ReportFormat;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("{0:?} export is not supported for this report")]
    Unsupported(ReportFormat),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to flush report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlReportRow {
    pub id: String,
    pub code: String,
    pub title: String,
    pub status: &'static str,
    pub owner: String,
    pub framework: String,
}

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub content_type: mime::Mime,
    pub file_name: String,
    pub body: Vec<u8>,
}

/// One row per control, in catalog order. Unknown frameworks fall back to the raw id.
pub fn control_report_rows(catalog: &Catalog) -> Vec<ControlReportRow> {
    catalog
        .controls
        .iter()
        .map(|control| ControlReportRow {
            id: control.id.clone(),
            code: control.code.clone(),
            title: control.title.clone(),
            status: control.status.label(),
            owner: control.owner.clone(),
            framework: catalog
                .framework_for(control)
                .map(|framework| format!("{} {}", framework.name, framework.version))
                .unwrap_or_else(|| control.framework_id.clone()),
        })
        .collect()
}

pub fn render_control_report(
    catalog: &Catalog,
    format: ReportFormat,
) -> Result<RenderedReport, ReportError> {
    let rows = control_report_rows(catalog);
    match format {
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in &rows {
                writer.serialize(row)?;
            }
            let body = writer
                .into_inner()
                .map_err(|err| ReportError::Io(err.into_error()))?;
            Ok(RenderedReport {
                content_type: mime::TEXT_CSV,
                file_name: "control-status.csv".to_string(),
                body,
            })
        }
        ReportFormat::Json => Ok(RenderedReport {
            content_type: mime::APPLICATION_JSON,
            file_name: "control-status.json".to_string(),
            body: serde_json::to_vec_pretty(&rows)?,
        }),
        ReportFormat::Pdf => Err(ReportError::Unsupported(format)),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportQuery {
    #[serde(default)]
    format: Option<ReportFormat>,
}

pub fn report_router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/api/v1/reports/controls", get(control_report))
        .with_state(catalog)
}

async fn control_report(
    State(catalog): State<Arc<Catalog>>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let format = query.format.unwrap_or(ReportFormat::Json);
    let report = render_control_report(&catalog, format)?;
    let disposition = format!("attachment; filename=\"{}\"", report.file_name);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, report.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.body,
    )
        .into_response())
}
