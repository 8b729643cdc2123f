//! Port for typing insight generation.
//!
//! No model is wired in yet. [`FixtureTypingInsights`] answers every request
//! with the same canned predictions and analysis so clients can integrate
//! against a stable shape.

use async_trait::async_trait;

use crate::domain::{
    Error, LigatureForecast, LigaturePrediction, LigatureRequest, MistakeAnalysis,
    MistakePattern, MistakeReport, MistakeRequest,
};

use super::define_port_error;

/// Model name reported with ligature predictions.
pub const LIGATURE_MODEL: &str = "ligature-predictor-v1";
/// Model name reported with mistake analyses.
pub const MISTAKE_MODEL: &str = "mistake-analyzer-v1";

define_port_error! {
    /// Errors raised by insight adapters.
    pub enum TypingInsightsError {
        /// The insight backend could not produce an answer.
        Unavailable { message: String } =>
            "typing insights unavailable: {message}",
    }
}

impl From<TypingInsightsError> for Error {
    fn from(err: TypingInsightsError) -> Self {
        Error::internal(err.to_string())
    }
}

/// Port producing insights from typing sessions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TypingInsights: Send + Sync {
    /// Predict ligatures the typist will meet in the given text.
    async fn predict_ligatures(
        &self,
        request: &LigatureRequest,
    ) -> Result<LigatureForecast, TypingInsightsError>;

    /// Summarise recurring mistakes.
    async fn analyze_mistakes(
        &self,
        request: &MistakeRequest,
    ) -> Result<MistakeReport, TypingInsightsError>;
}

/// Placeholder insight provider returning fixed data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTypingInsights;

fn prediction(sequence: &str, position: u32, confidence: f64) -> LigaturePrediction {
    LigaturePrediction {
        sequence: sequence.to_owned(),
        position,
        confidence,
    }
}

fn pattern(pattern: &str, frequency: u32, suggestion: &str) -> MistakePattern {
    MistakePattern {
        pattern: pattern.to_owned(),
        frequency,
        suggestion: suggestion.to_owned(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

#[async_trait]
impl TypingInsights for FixtureTypingInsights {
    async fn predict_ligatures(
        &self,
        _request: &LigatureRequest,
    ) -> Result<LigatureForecast, TypingInsightsError> {
        Ok(LigatureForecast {
            predictions: vec![
                prediction("क्ष", 5, 0.95),
                prediction("त्र", 12, 0.89),
                prediction("ज्ञ", 20, 0.92),
            ],
            model: LIGATURE_MODEL.to_owned(),
        })
    }

    async fn analyze_mistakes(
        &self,
        request: &MistakeRequest,
    ) -> Result<MistakeReport, TypingInsightsError> {
        let analysis = MistakeAnalysis {
            common_patterns: vec![
                pattern(
                    "Adjacent key errors",
                    45,
                    "Slow down on the home row keys",
                ),
                pattern(
                    "Ligature formation errors",
                    30,
                    "Practice compound characters separately",
                ),
                pattern(
                    "Timing errors",
                    25,
                    "Maintain consistent rhythm between keystrokes",
                ),
            ],
            weak_keys: owned(&["k", "l", "प", "ष"]),
            recommendations: owned(&[
                "Focus on accuracy before speed",
                "Practice ligature combinations: क्ष, त्र, ज्ञ",
                "Use the typing drills for problematic key sequences",
            ]),
            improvement_score: 7.5,
        };
        Ok(MistakeReport {
            analysis,
            total_errors: request.total_errors(),
            model: MISTAKE_MODEL.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    async fn fixture_predictions_ignore_input() {
        let insights = FixtureTypingInsights;
        let empty = insights
            .predict_ligatures(&LigatureRequest {
                text: None,
                language: None,
            })
            .await
            .expect("fixture prediction succeeds");
        let filled = insights
            .predict_ligatures(&LigatureRequest {
                text: Some("क्षत्रिय".to_owned()),
                language: Some("hi".to_owned()),
            })
            .await
            .expect("fixture prediction succeeds");

        assert_eq!(empty, filled);
        assert_eq!(filled.model, LIGATURE_MODEL);
        let sequences: Vec<&str> = filled
            .predictions
            .iter()
            .map(|p| p.sequence.as_str())
            .collect();
        assert_eq!(sequences, ["क्ष", "त्र", "ज्ञ"]);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_analysis_counts_reported_errors() {
        let report = FixtureTypingInsights
            .analyze_mistakes(&MistakeRequest {
                errors: Some(json!([{ "expected": "k", "actual": "l" }, { "expected": "ष" }])),
                language: Some("hi".to_owned()),
                typing_speed: Some(json!(38)),
            })
            .await
            .expect("fixture analysis succeeds");

        assert_eq!(report.total_errors, 2);
        assert_eq!(report.model, MISTAKE_MODEL);
        assert_eq!(report.analysis.common_patterns.len(), 3);
        assert_eq!(report.analysis.weak_keys, ["k", "l", "प", "ष"]);
        assert!((report.analysis.improvement_score - 7.5).abs() < f64::EPSILON);
    }
}
