use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post, MethodRouter},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::pages::{
    admin_page, assets_page, audits_page, control_page, controls_page, dashboard_page,
    integrations_page, payroll_audit_page, policies_page, reports_page, tasks_page,
};
use super::palette::{CommandPalette, UiState};
use crate::catalog::Catalog;

#[derive(Clone)]
pub struct UiContext {
    pub catalog: Arc<Catalog>,
    pub palette: Arc<CommandPalette>,
    pub state: Arc<Mutex<UiState>>,
}

impl UiContext {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let palette = CommandPalette::standard(catalog.active_admin_names());
        Self {
            catalog,
            palette: Arc::new(palette),
            state: Arc::new(Mutex::new(UiState::default())),
        }
    }
}

/// Server-rendered dashboard pages and the command palette.
pub fn ui_router(context: UiContext) -> Router {
    Router::new()
        .route("/", page(dashboard_page))
        .route("/controls", page(controls_page))
        .route("/controls/:id", get(control))
        .route("/audits", page(audits_page))
        .route("/policies", page(policies_page))
        .route("/assets", page(assets_page))
        .route("/integrations", page(integrations_page))
        .route("/reports", page(reports_page))
        .route("/tasks", page(tasks_page))
        .route("/payroll-audit", page(payroll_audit_page))
        .route("/admin", page(admin_page))
        .route("/palette", get(palette))
        .route("/palette/user", post(select_user))
        .with_state(context)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaletteQuery {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserSelection {
    user: String,
}

/// Section page rendered from the whole catalog.
fn page(render: fn(&Catalog) -> String) -> MethodRouter<UiContext> {
    get(move |State(context): State<UiContext>| async move { Html(render(&context.catalog)) })
}

async fn control(State(context): State<UiContext>, Path(id): Path<String>) -> Response {
    match control_page(&context.catalog, &id) {
        Some(page) => Html(page).into_response(),
        None => (StatusCode::NOT_FOUND, Html("<h1>Control not found</h1>")).into_response(),
    }
}

async fn palette(
    State(context): State<UiContext>,
    Query(query): Query<PaletteQuery>,
) -> Html<String> {
    let state = context
        .state
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    Html(context.palette.render(&state, &query.q))
}

async fn select_user(
    State(context): State<UiContext>,
    Json(selection): Json<UserSelection>,
) -> Response {
    let mut state = context.state.lock().unwrap_or_else(PoisonError::into_inner);
    if context.palette.select_user(&mut state, &selection.user) {
        info!(user = %selection.user, "palette user selected");
        (StatusCode::OK, Json(state.clone())).into_response()
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": format!("unknown user '{}'", selection.user) })),
        )
            .into_response()
    }
}
