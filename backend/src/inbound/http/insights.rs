//! Typing insight HTTP handlers.
//!
//! ```text
//! POST /api/ai/predict-ligatures {"text":"क्षत्रिय","language":"hi"}
//! POST /api/ai/analyze-mistakes {"errors":["k","ष"],"language":"hi","typingSpeed":38}
//! ```
//!
//! Both endpoints echo the request fields they were given and stamp the
//! answer with the current time.

use actix_web::{post, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{LigaturePrediction, LigatureRequest, MistakeAnalysis, MistakeRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, LigaturePredictionSchema, MistakeAnalysisSchema};
use crate::inbound::http::state::HttpState;

/// Request payload for ligature prediction.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct PredictLigaturesRequestBody {
    #[serde(default)]
    #[schema(example = "क्षत्रिय")]
    pub text: Option<String>,
    #[serde(default)]
    #[schema(example = "hi")]
    pub language: Option<String>,
}

/// Ligature predictions for a practice text.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PredictLigaturesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[schema(value_type = Vec<LigaturePredictionSchema>)]
    pub predictions: Vec<LigaturePrediction>,
    #[schema(example = "ligature-predictor-v1")]
    pub model: String,
    #[schema(format = "date-time")]
    pub timestamp: String,
}

/// Request payload for mistake analysis.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMistakesRequestBody {
    /// Mistakes made during the session, as a list or a string of keys.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub errors: Option<Value>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub typing_speed: Option<Value>,
}

/// Mistake analysis for a practice session.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMistakesResponse {
    #[schema(value_type = MistakeAnalysisSchema)]
    pub analysis: MistakeAnalysis,
    pub total_errors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[schema(example = "mistake-analyzer-v1")]
    pub model: String,
    #[schema(format = "date-time")]
    pub timestamp: String,
}

fn timestamp(state: &HttpState) -> String {
    state.clock.utc().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Predict ligatures the typist is about to meet.
#[utoipa::path(
    post,
    path = "/api/ai/predict-ligatures",
    request_body = PredictLigaturesRequestBody,
    responses(
        (status = 200, description = "Ligature predictions", body = PredictLigaturesResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["insights"],
    operation_id = "predictLigatures"
)]
#[post("/ai/predict-ligatures")]
pub async fn predict_ligatures(
    state: web::Data<HttpState>,
    payload: web::Json<PredictLigaturesRequestBody>,
) -> ApiResult<web::Json<PredictLigaturesResponse>> {
    let PredictLigaturesRequestBody { text, language } = payload.into_inner();
    let request = LigatureRequest { text, language };
    let forecast = state.insights.predict_ligatures(&request).await?;
    debug!(
        predictions = forecast.predictions.len(),
        model = %forecast.model,
        "ligatures predicted"
    );
    Ok(web::Json(PredictLigaturesResponse {
        text: request.text,
        language: request.language,
        predictions: forecast.predictions,
        model: forecast.model,
        timestamp: timestamp(&state),
    }))
}

/// Summarise recurring mistakes from a session.
#[utoipa::path(
    post,
    path = "/api/ai/analyze-mistakes",
    request_body = AnalyzeMistakesRequestBody,
    responses(
        (status = 200, description = "Mistake analysis", body = AnalyzeMistakesResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["insights"],
    operation_id = "analyzeMistakes"
)]
#[post("/ai/analyze-mistakes")]
pub async fn analyze_mistakes(
    state: web::Data<HttpState>,
    payload: web::Json<AnalyzeMistakesRequestBody>,
) -> ApiResult<web::Json<AnalyzeMistakesResponse>> {
    let AnalyzeMistakesRequestBody {
        errors,
        language,
        typing_speed,
    } = payload.into_inner();
    let request = MistakeRequest {
        errors,
        language,
        typing_speed,
    };
    let report = state.insights.analyze_mistakes(&request).await?;
    debug!(total_errors = report.total_errors, model = %report.model, "mistakes analysed");
    Ok(web::Json(AnalyzeMistakesResponse {
        analysis: report.analysis,
        total_errors: report.total_errors,
        language: request.language,
        model: report.model,
        timestamp: timestamp(&state),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FixtureTypingInsights, MockTypingInsights, TypingInsightsError};
    use crate::inbound::http::error::json_config;
    use crate::outbound::memory::InMemoryRecordStore;
    use crate::test_support::clock::MutableClock;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    fn state_with(insights: Arc<dyn crate::domain::ports::TypingInsights>) -> HttpState {
        let clock = Arc::new(MutableClock::at_reference_time());
        HttpState::new(
            Arc::new(InMemoryRecordStore::new(clock.clone())),
            insights,
            clock,
        )
    }

    async fn post_json(state: HttpState, uri: &str, payload: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config())
                .service(
                    web::scope("/api")
                        .service(predict_ligatures)
                        .service(analyze_mistakes),
                ),
        )
        .await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(uri)
                .set_json(payload)
                .to_request(),
        )
        .await;
        let status = res.status();
        (status, actix_test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn ligature_response_echoes_input() {
        let (status, body) = post_json(
            state_with(Arc::new(FixtureTypingInsights)),
            "/api/ai/predict-ligatures",
            json!({ "text": "क्षत्रिय", "language": "hi" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "क्षत्रिय");
        assert_eq!(body["language"], "hi");
        assert_eq!(body["model"], "ligature-predictor-v1");
        assert_eq!(body["predictions"][0]["sequence"], "क्ष");
        assert_eq!(body["predictions"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["timestamp"], "2026-01-15T12:00:00.000Z");
    }

    #[actix_web::test]
    async fn ligature_response_omits_missing_fields() {
        let (status, body) = post_json(
            state_with(Arc::new(FixtureTypingInsights)),
            "/api/ai/predict-ligatures",
            json!({}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("text").is_none());
        assert!(body.get("language").is_none());
    }

    #[rstest]
    #[case(json!({ "errors": ["k", "l", "ष"], "language": "hi" }), 3)]
    #[case(json!({ "errors": "kl", "language": "hi" }), 2)]
    #[case(json!({ "errors": { "k": 1 }, "language": "hi" }), 0)]
    #[case(json!({ "language": "hi", "typingSpeed": 38 }), 0)]
    #[actix_web::test]
    async fn mistake_analysis_counts_reported_errors(
        #[case] payload: Value,
        #[case] expected: usize,
    ) {
        let (status, body) = post_json(
            state_with(Arc::new(FixtureTypingInsights)),
            "/api/ai/analyze-mistakes",
            payload,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalErrors"], expected);
        assert_eq!(body["language"], "hi");
        assert_eq!(body["model"], "mistake-analyzer-v1");
        assert_eq!(body["analysis"]["improvementScore"], 7.5);
        assert_eq!(body["analysis"]["weakKeys"], json!(["k", "l", "प", "ष"]));
    }

    #[actix_web::test]
    async fn insight_failures_are_internal_errors() {
        let mut insights = MockTypingInsights::new();
        insights
            .expect_analyze_mistakes()
            .returning(|_| Err(TypingInsightsError::unavailable("model offline")));

        let (status, body) = post_json(
            state_with(Arc::new(insights)),
            "/api/ai/analyze-mistakes",
            json!({ "errors": [] }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
