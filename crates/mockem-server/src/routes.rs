use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use mockem_core::{Catalog, GenerationRequest, RawRequest, redact_token, validate_request};
use mockem_generate::generators::format_timestamp;
use mockem_generate::{
    ExportPayload, GenerationEngine, GenerationResult, TableView, build_export,
};

use crate::error::ApiError;
use crate::session::{SessionLimits, UsageDelta};
use crate::state::AppState;
use crate::waitlist::{WaitlistRequest, WaitlistResponse};

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
    pub limits: SessionLimits,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_info: SessionInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLimitsResponse {
    pub session_limits: SessionLimits,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse<'a> {
    pub data: TableView<'a>,
    pub total_rows: usize,
    pub preview: TableView<'a>,
    pub seed: u64,
    pub generated_at: String,
    /// Foreign keys filled with placeholder ids because their parent schema was not requested.
    pub placeholder_references: u64,
    pub session_limits: SessionLimits,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_data: Option<String>,
    pub is_zip: bool,
    pub filename: String,
    pub session_limits: SessionLimits,
}

pub async fn session_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    let limits = state.sessions.limits();

    let existing = match session_id(&jar) {
        Some(id) => state.sessions.get(&id).await,
        None => None,
    };

    let (jar, record) = match existing {
        Some(record) => (jar, record),
        None => {
            let record = state.sessions.create().await;
            info!(session = %redact_token(&record.id), "session created");
            let cookie = session_cookie(record.id.clone(), &state);
            (jar.add(cookie), record)
        }
    };

    let response = SessionResponse {
        session_info: SessionInfo {
            limits: record.limits(limits),
            session_id: record.id,
        },
    };
    (jar, Json(response))
}

pub async fn session_info_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Json<SessionLimitsResponse> {
    let limits = state.sessions.limits();
    let session_limits = match session_id(&jar) {
        Some(id) => match state.sessions.get(&id).await {
            Some(record) => record.limits(limits),
            None => SessionLimits::empty(limits),
        },
        None => SessionLimits::empty(limits),
    };
    Json(SessionLimitsResponse { session_limits })
}

pub async fn generate_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<RawRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = require_session(&state, &jar).await?;
    let Json(raw) = payload?;
    let request = validate_request(
        &state.catalog,
        &raw,
        state.config.generation.foreign_key_policy(),
    )?;

    state
        .sessions
        .validate(&id, UsageDelta::generation(request.total_rows()))
        .await?;

    let result = run_engine(&state, &request, &raw)?;
    let session_limits = state
        .sessions
        .apply(&id, UsageDelta::generation(result.total_rows()))
        .await?;

    info!(
        session = %redact_token(&id),
        run_id = %result.run_id,
        category = %request.category,
        total_rows = result.total_rows(),
        "data generated"
    );

    let response = GenerateResponse {
        data: result.data(),
        total_rows: result.total_rows(),
        preview: result.preview(),
        seed: result.seed,
        generated_at: format_timestamp(&result.generated_at),
        placeholder_references: result.report.placeholder_references(),
        session_limits,
    };
    Ok(Json(response).into_response())
}

pub async fn export_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<RawRequest>, JsonRejection>,
) -> Result<Json<ExportResponse>, ApiError> {
    let id = require_session(&state, &jar).await?;
    let Json(raw) = payload?;
    let request = validate_request(
        &state.catalog,
        &raw,
        state.config.generation.foreign_key_policy(),
    )?;

    state.sessions.validate(&id, UsageDelta::export()).await?;

    let result = run_engine(&state, &request, &raw)?;
    let payload = build_export(&result, &state.catalog)?;
    let session_limits = state.sessions.apply(&id, UsageDelta::export()).await?;

    info!(
        session = %redact_token(&id),
        run_id = %result.run_id,
        filename = payload.filename(),
        "data exported"
    );

    let response = match payload {
        ExportPayload::Csv { csv_data, filename } => ExportResponse {
            csv_data: Some(csv_data),
            zip_data: None,
            is_zip: false,
            filename,
            session_limits,
        },
        ExportPayload::Bundle { zip_data, filename } => ExportResponse {
            csv_data: None,
            zip_data: Some(zip_data),
            is_zip: true,
            filename,
            session_limits,
        },
    };
    Ok(Json(response))
}

pub async fn waitlist_handler(
    State(state): State<AppState>,
    payload: Result<Json<WaitlistRequest>, JsonRejection>,
) -> Result<Json<WaitlistResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.waitlist.join(request).await))
}

pub async fn catalog_handler(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

async fn require_session(state: &AppState, jar: &CookieJar) -> Result<String, ApiError> {
    let id = session_id(jar).ok_or(ApiError::Unauthenticated)?;
    match state.sessions.get(&id).await {
        Some(record) => Ok(record.id),
        None => Err(ApiError::Unauthenticated),
    }
}

fn run_engine(
    state: &AppState,
    request: &GenerationRequest,
    raw: &RawRequest,
) -> Result<GenerationResult, ApiError> {
    let options = state.generate_options(raw.seed, raw.generated_at);
    Ok(GenerationEngine::new(state.catalog.clone(), options).run(request)?)
}

fn session_cookie(id: String, state: &AppState) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id))
        .http_only(true)
        .secure(state.config.server.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(state.session_ttl.num_seconds()))
        .build()
}
