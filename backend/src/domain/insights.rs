//! Typing insight payloads produced by the insight port.

use serde::Serialize;
use serde_json::Value;

/// Request for ligature predictions over a practice text.
#[derive(Debug, Clone, PartialEq)]
pub struct LigatureRequest {
    pub text: Option<String>,
    pub language: Option<String>,
}

/// A compound character sequence the typist is likely to attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LigaturePrediction {
    pub sequence: String,
    pub position: u32,
    pub confidence: f64,
}

/// Predictions plus the model that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct LigatureForecast {
    pub predictions: Vec<LigaturePrediction>,
    pub model: String,
}

/// Request for an analysis of the mistakes made during a session.
///
/// `errors` is accepted in whatever shape the client sends. Arrays count
/// their entries and strings count UTF-16 code units, matching what browser
/// clients report as `length`; anything else counts as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MistakeRequest {
    pub errors: Option<Value>,
    pub language: Option<String>,
    pub typing_speed: Option<Value>,
}

impl MistakeRequest {
    /// Number of reported errors.
    pub fn total_errors(&self) -> usize {
        match &self.errors {
            Some(Value::Array(entries)) => entries.len(),
            Some(Value::String(keys)) => keys.encode_utf16().count(),
            _ => 0,
        }
    }
}

/// A recurring kind of mistake with advice on fixing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MistakePattern {
    pub pattern: String,
    pub frequency: u32,
    pub suggestion: String,
}

/// Aggregated mistake analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MistakeAnalysis {
    pub common_patterns: Vec<MistakePattern>,
    pub weak_keys: Vec<String>,
    pub recommendations: Vec<String>,
    pub improvement_score: f64,
}

/// Analysis plus the error count and producing model.
#[derive(Debug, Clone, PartialEq)]
pub struct MistakeReport {
    pub analysis: MistakeAnalysis,
    pub total_errors: usize,
    pub model: String,
}
