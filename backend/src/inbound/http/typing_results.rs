//! Typing result HTTP handlers.
//!
//! ```text
//! POST /api/typing-results
//! GET /api/typing-results?limit=20
//! GET /api/typing-results/{language}?limit=20
//! ```

use actix_web::{get, post, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, TypingMetrics, TypingResult, TypingResultDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_limit, require_at_most, require_in_range, require_non_blank,
};

/// Highest words-per-minute figure accepted from clients.
pub const MAX_WPM: f64 = 1000.0;

/// Request payload for recording a typing session.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTypingResultRequestBody {
    #[schema(example = "hi")]
    pub language: String,
    #[schema(example = 42.0)]
    pub wpm: f64,
    #[schema(example = 96.5)]
    pub accuracy: f64,
    /// Session length in seconds.
    #[schema(example = 60)]
    pub duration: u32,
    pub total_characters: u32,
    pub correct_characters: u32,
    pub incorrect_characters: u32,
    /// Free-form breakdown of the mistakes made.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub error_details: Option<Value>,
    /// Other fields are stored and returned as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A stored typing result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypingResultBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub language: String,
    pub wpm: f64,
    pub accuracy: f64,
    pub duration: u32,
    pub total_characters: u32,
    pub correct_characters: u32,
    pub incorrect_characters: u32,
    /// `null` when the client sent no details.
    #[schema(value_type = Option<Object>)]
    pub error_details: Option<Value>,
    #[schema(format = "date-time", example = "2026-01-15T12:00:00.000Z")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<TypingResult> for TypingResultBody {
    fn from(value: TypingResult) -> Self {
        let TypingMetrics {
            wpm,
            accuracy,
            duration,
            total_characters,
            correct_characters,
            incorrect_characters,
        } = value.metrics().clone();
        Self {
            id: value.id().to_string(),
            language: value.language().to_owned(),
            wpm,
            accuracy,
            duration,
            total_characters,
            correct_characters,
            incorrect_characters,
            error_details: value.error_details().cloned(),
            created_at: value
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            extra: value.extra().clone(),
        }
    }
}

/// Query string accepted by the listing endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTypingResultsQuery {
    /// Maximum number of results; a non-negative integer, 50 when omitted.
    #[param(value_type = Option<u32>, example = 20)]
    pub limit: Option<String>,
}

fn parse_draft(body: CreateTypingResultRequestBody) -> Result<TypingResultDraft, Error> {
    let total = FieldName::new("totalCharacters");
    let metrics = TypingMetrics {
        wpm: require_in_range(body.wpm, FieldName::new("wpm"), 0.0, MAX_WPM)?,
        accuracy: require_in_range(body.accuracy, FieldName::new("accuracy"), 0.0, 100.0)?,
        duration: body.duration,
        total_characters: body.total_characters,
        correct_characters: require_at_most(
            body.correct_characters,
            body.total_characters,
            FieldName::new("correctCharacters"),
            total,
        )?,
        incorrect_characters: require_at_most(
            body.incorrect_characters,
            body.total_characters,
            FieldName::new("incorrectCharacters"),
            total,
        )?,
    };
    Ok(TypingResultDraft {
        language: require_non_blank(body.language, FieldName::new("language"))?,
        metrics,
        error_details: body.error_details,
        extra: body.extra,
    })
}

fn to_bodies(results: Vec<TypingResult>) -> Vec<TypingResultBody> {
    results.into_iter().map(TypingResultBody::from).collect()
}

/// Record a completed typing session.
#[utoipa::path(
    post,
    path = "/api/typing-results",
    request_body = CreateTypingResultRequestBody,
    responses(
        (status = 200, description = "Stored typing result", body = TypingResultBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["typing-results"],
    operation_id = "createTypingResult"
)]
#[post("/typing-results")]
pub async fn create_typing_result(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTypingResultRequestBody>,
) -> ApiResult<web::Json<TypingResultBody>> {
    let draft = parse_draft(payload.into_inner())?;
    let stored = state.typing_results.create_result(draft).await?;
    info!(result_id = %stored.id(), language = stored.language(), "typing result recorded");
    Ok(web::Json(TypingResultBody::from(stored)))
}

/// List typing results across all languages, newest first.
#[utoipa::path(
    get,
    path = "/api/typing-results",
    params(ListTypingResultsQuery),
    responses(
        (status = 200, description = "Typing results, newest first", body = [TypingResultBody]),
        (status = 400, description = "Invalid limit", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["typing-results"],
    operation_id = "listTypingResults"
)]
#[get("/typing-results")]
pub async fn list_typing_results(
    state: web::Data<HttpState>,
    query: web::Query<ListTypingResultsQuery>,
) -> ApiResult<web::Json<Vec<TypingResultBody>>> {
    let limit = parse_limit(query.limit.as_deref(), state.default_limit)?;
    let results = state.typing_results.list_results(limit).await?;
    Ok(web::Json(to_bodies(results)))
}

/// List typing results for one language, newest first.
#[utoipa::path(
    get,
    path = "/api/typing-results/{language}",
    params(
        ("language" = String, Path, description = "Exact, case-sensitive language code", example = "hi"),
        ListTypingResultsQuery
    ),
    responses(
        (status = 200, description = "Typing results, newest first", body = [TypingResultBody]),
        (status = 400, description = "Invalid limit", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["typing-results"],
    operation_id = "listTypingResultsByLanguage"
)]
#[get("/typing-results/{language}")]
pub async fn list_typing_results_by_language(
    state: web::Data<HttpState>,
    language: web::Path<String>,
    query: web::Query<ListTypingResultsQuery>,
) -> ApiResult<web::Json<Vec<TypingResultBody>>> {
    let limit = parse_limit(query.limit.as_deref(), state.default_limit)?;
    let results = state
        .typing_results
        .list_results_by_language(language.as_str(), limit)
        .await?;
    Ok(web::Json(to_bodies(results)))
}

#[cfg(test)]
#[path = "typing_results_tests.rs"]
mod tests;
