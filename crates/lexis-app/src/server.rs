use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use lexis_core::dictionary::DictionaryMetadata;
use lexis_core::error::LookupError;
use lexis_core::types::{LookupRequest, LookupResponse};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub dictionaries: Vec<DictionaryMetadata>,
}

/// Lookup failure mapped onto an HTTP status
pub struct ApiError(LookupError);

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            LookupError::EmptyQuery => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/translate-word/", post(translate_word))
        .route("/translate-word", post(translate_word))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn translate_word(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Result<Json<LookupResponse>, ApiError> {
    let span = tracing::info_span!("lookup", request_id = %Uuid::new_v4());
    let response = span.in_scope(|| {
        tracing::info!("Translating '{}'", request.word);
        state.service.lookup(&request.word)
    })?;

    tracing::debug!(
        "'{}' -> {} translations",
        response.cleaned_word,
        response.translations.len()
    );
    Ok(Json(response))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        dictionaries: state.service.engine().lexicon().metadata(),
    })
}
