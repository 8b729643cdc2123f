//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint from the inbound HTTP layer and
//! the schema wrappers from [`crate::inbound::http::schemas`]. The document
//! backs Swagger UI in debug builds and is printed by the `openapi-dump`
//! binary for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::insights::{
    AnalyzeMistakesRequestBody, AnalyzeMistakesResponse, PredictLigaturesRequestBody,
    PredictLigaturesResponse,
};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, LanguageDescriptorSchema, LigaturePredictionSchema,
    MistakeAnalysisSchema, MistakePatternSchema,
};
use crate::inbound::http::typing_results::{CreateTypingResultRequestBody, TypingResultBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Typing practice backend API",
        description = "Stores typing practice results, lists supported languages and serves placeholder typing insights."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::typing_results::create_typing_result,
        crate::inbound::http::typing_results::list_typing_results,
        crate::inbound::http::typing_results::list_typing_results_by_language,
        crate::inbound::http::insights::predict_ligatures,
        crate::inbound::http::insights::analyze_mistakes,
        crate::inbound::http::languages::list_languages,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateTypingResultRequestBody,
        TypingResultBody,
        PredictLigaturesRequestBody,
        PredictLigaturesResponse,
        AnalyzeMistakesRequestBody,
        AnalyzeMistakesResponse,
        LanguageDescriptorSchema,
        LigaturePredictionSchema,
        MistakePatternSchema,
        MistakeAnalysisSchema,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "typing-results", description = "Recording and listing typing sessions"),
        (name = "insights", description = "Placeholder typing insight endpoints"),
        (name = "languages", description = "Supported language catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_has_envelope_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "error");
        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn typing_result_schema_uses_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let body = schemas.get("TypingResultBody").expect("TypingResultBody schema");

        assert_object_schema_has_field(body, "createdAt");
        assert_object_schema_has_field(body, "errorDetails");
        match body {
            RefOr::T(Schema::Object(obj)) => assert!(
                obj.additional_properties.is_some(),
                "extra fields should be allowed"
            ),
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/typing-results")]
    #[case("/api/typing-results/{language}")]
    #[case("/api/ai/predict-ligatures")]
    #[case("/api/ai/analyze-mistakes")]
    #[case("/api/languages")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
