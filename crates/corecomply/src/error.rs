use crate::auth::AuthError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::integrations::IntegrationError;
use crate::jobs::JobError;
use crate::reports::ReportError;
use crate::telemetry::TelemetryError;
use crate::tokens::TokenExportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Auth(AuthError),
    Catalog(CatalogError),
    Integration(IntegrationError),
    Tokens(TokenExportError),
    Jobs(JobError),
    Report(ReportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Auth(err) => write!(f, "auth error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Integration(err) => write!(f, "integration error: {}", err),
            AppError::Tokens(err) => write!(f, "token export error: {}", err),
            AppError::Jobs(err) => write!(f, "job error: {}", err),
            AppError::Report(err) => write!(f, "report error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Auth(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Integration(err) => Some(err),
            AppError::Tokens(err) => Some(err),
            AppError::Jobs(err) => Some(err),
            AppError::Report(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Auth(AuthError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            AppError::Auth(AuthError::Forbidden { .. }) => StatusCode::FORBIDDEN,
            AppError::Report(ReportError::Unsupported(_)) => StatusCode::BAD_REQUEST,
            AppError::Jobs(JobError::Unknown(_))
            | AppError::Integration(IntegrationError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Catalog(_)
            | AppError::Tokens(_)
            | AppError::Report(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

macro_rules! impl_from {
    ($($source:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$source> for AppError {
                fn from(value: $source) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from! {
    ConfigError => Config,
    TelemetryError => Telemetry,
    std::io::Error => Io,
    axum::Error => Server,
    AuthError => Auth,
    CatalogError => Catalog,
    IntegrationError => Integration,
    TokenExportError => Tokens,
    JobError => Jobs,
    ReportError => Report,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportFormat;

    #[test]
    fn unsupported_report_maps_to_bad_request() {
        let response = AppError::from(ReportError::Unsupported(ReportFormat::Pdf)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn auth_errors_map_to_401_and_403() {
        let unauthenticated = AppError::from(AuthError::Unauthenticated).into_response();
        assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

        let forbidden = AppError::from(AuthError::Forbidden {
            required: vec!["CFO".to_string()],
        });
        assert_eq!(forbidden.to_string(), "auth error: requires one of roles: CFO");
        assert_eq!(forbidden.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_integration_record_maps_to_not_found() {
        let err = AppError::from(IntegrationError::NotFound {
            kind: "super transaction",
            id: "SS-1".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_job_maps_to_not_found() {
        let err = AppError::from(JobError::Unknown("nightly".to_string()));
        assert!(err.to_string().starts_with("job error:"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
