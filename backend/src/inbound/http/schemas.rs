//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. The wrappers here mirror their
//! serialised shape and register under the domain type's name so the
//! generated document describes what handlers actually return.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Every failed request answers with this envelope.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message returned to clients.
    #[schema(example = "limit must be a non-negative integer")]
    error: String,
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Identifier echoed in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level detail for validation failures.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::LanguageDescriptor`].
#[derive(ToSchema)]
#[schema(as = crate::domain::LanguageDescriptor)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LanguageDescriptorSchema {
    #[schema(example = "hi")]
    code: String,
    #[schema(example = "Hindi")]
    name: String,
    /// Name written in the language itself.
    #[schema(example = "हिन्दी")]
    native: String,
    #[schema(example = "Devanagari")]
    script: String,
}

/// OpenAPI schema for [`crate::domain::LigaturePrediction`].
#[derive(ToSchema)]
#[schema(as = crate::domain::LigaturePrediction)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LigaturePredictionSchema {
    #[schema(example = "क्ष")]
    sequence: String,
    /// Character offset in the practice text.
    #[schema(example = 5)]
    position: u32,
    #[schema(example = 0.95)]
    confidence: f64,
}

/// OpenAPI schema for [`crate::domain::MistakePattern`].
#[derive(ToSchema)]
#[schema(as = crate::domain::MistakePattern)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MistakePatternSchema {
    #[schema(example = "Adjacent key errors")]
    pattern: String,
    #[schema(example = 45)]
    frequency: u32,
    suggestion: String,
}

/// OpenAPI schema for [`crate::domain::MistakeAnalysis`].
#[derive(ToSchema)]
#[schema(as = crate::domain::MistakeAnalysis, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MistakeAnalysisSchema {
    common_patterns: Vec<MistakePatternSchema>,
    weak_keys: Vec<String>,
    recommendations: Vec<String>,
    #[schema(example = 7.5)]
    improvement_score: f64,
}
