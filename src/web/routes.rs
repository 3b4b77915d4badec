use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tracing::{debug, error};

use super::pages::render_screen_page;
use super::AppState;
use crate::api::DraftRecord;
use crate::screen::{ScreenError, SubmitOutcome};

/// Query value carried by the redirect after a successful create.
const CREATED_FLASH: &str = "criado";
/// Query value carried by the redirect after a failed create.
const FAILED_FLASH: &str = "erro";

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/novo", post(create_model))
        .route("/healthz", get(health))
}

/// Outcome of the submission that redirected here, if any.
#[derive(Debug, Default, Deserialize)]
struct HomeQuery {
    alerta: Option<String>,
}

impl HomeQuery {
    fn outcome(&self) -> Option<SubmitOutcome> {
        match self.alerta.as_deref()? {
            CREATED_FLASH => Some(SubmitOutcome::Created),
            FAILED_FLASH => Some(SubmitOutcome::Failed),
            _ => None,
        }
    }
}

async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Response {
    let mut snapshot = match state.screen.snapshot().await {
        Ok(s) => s,
        Err(e) => return screen_unavailable(&e),
    };

    // Only the submission that sent the browser here gets an alert.
    snapshot.alert = query.outcome().map(SubmitOutcome::alert);

    let html = render_screen_page(&snapshot, state.card_display());
    Html(html.into_string()).into_response()
}

/// Fields posted by the creation form. Missing fields count as empty.
#[derive(Debug, Deserialize)]
struct NewModelForm {
    #[serde(default)]
    titulo: String,
    #[serde(default)]
    imagem: String,
    #[serde(default)]
    corpo_redacao: String,
}

impl From<NewModelForm> for DraftRecord {
    fn from(form: NewModelForm) -> Self {
        Self {
            title: form.titulo,
            image: form.imagem,
            body: form.corpo_redacao,
        }
    }
}

async fn create_model(State(state): State<AppState>, Form(form): Form<NewModelForm>) -> Response {
    let outcome = match state.screen.submit_draft(form.into()).await {
        Ok(outcome) => outcome,
        Err(e) => return screen_unavailable(&e),
    };
    debug!(?outcome, "Submission finished");

    let flash = match outcome {
        SubmitOutcome::Created => CREATED_FLASH,
        SubmitOutcome::Failed => FAILED_FLASH,
    };
    Redirect::to(&format!("/?alerta={flash}")).into_response()
}

async fn health() -> &'static str {
    "ok"
}

fn screen_unavailable(e: &ScreenError) -> Response {
    error!("Screen unavailable: {e}");
    (StatusCode::SERVICE_UNAVAILABLE, "Screen unavailable").into_response()
}
