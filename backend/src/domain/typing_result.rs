//! Typing session results.
//!
//! A [`TypingResult`] is immutable once the store has issued its id and
//! creation timestamp. The performance metrics are validated at the HTTP
//! edge and carried through the store untouched, as are any extra fields
//! the client attached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Performance figures reported by the client for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingMetrics {
    /// Words per minute.
    pub wpm: f64,
    /// Accuracy as a percentage in `0..=100`.
    pub accuracy: f64,
    /// Session length in seconds.
    pub duration: u32,
    /// Characters typed in total.
    pub total_characters: u32,
    /// Characters typed correctly.
    pub correct_characters: u32,
    /// Characters typed incorrectly.
    pub incorrect_characters: u32,
}

/// Input for creating a [`TypingResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct TypingResultDraft {
    pub language: String,
    pub metrics: TypingMetrics,
    pub error_details: Option<Value>,
    /// Client fields outside the known metrics, minus `id` and `createdAt`.
    pub extra: Map<String, Value>,
}

/// A stored typing session result.
///
/// `errorDetails` always serialises, as `null` when the caller omitted it
/// or sent an empty scalar.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use serde_json::Map;
/// use typing_backend::domain::{TypingMetrics, TypingResult, TypingResultDraft};
/// use uuid::Uuid;
///
/// let draft = TypingResultDraft {
///     language: "hi".to_owned(),
///     metrics: TypingMetrics {
///         wpm: 42.0,
///         accuracy: 97.5,
///         duration: 60,
///         total_characters: 210,
///         correct_characters: 205,
///         incorrect_characters: 5,
///     },
///     error_details: None,
///     extra: Map::new(),
/// };
/// let result = TypingResult::from_draft(Uuid::new_v4(), Utc::now(), draft);
/// assert_eq!(result.language(), "hi");
/// assert!(result.error_details().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingResult {
    id: Uuid,
    language: String,
    #[serde(flatten)]
    metrics: TypingMetrics,
    error_details: Option<Value>,
    created_at: DateTime<Utc>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Store-issued fields a client cannot supply.
const RESERVED_FIELDS: [&str; 2] = ["id", "createdAt"];

fn is_empty_scalar(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl TypingResult {
    /// Bind store-issued identity and timestamp to a draft.
    ///
    /// Error details of `null`, `false`, `0` or `""` are treated as absent.
    pub fn from_draft(id: Uuid, created_at: DateTime<Utc>, draft: TypingResultDraft) -> Self {
        let TypingResultDraft {
            language,
            metrics,
            error_details,
            mut extra,
        } = draft;
        for reserved in RESERVED_FIELDS {
            extra.remove(reserved);
        }
        Self {
            id,
            language,
            metrics,
            error_details: error_details.filter(|details| !is_empty_scalar(details)),
            created_at,
            extra,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    pub fn metrics(&self) -> &TypingMetrics {
        &self.metrics
    }

    pub fn error_details(&self) -> Option<&Value> {
        self.error_details.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Additional client-supplied fields.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn metrics() -> TypingMetrics {
        TypingMetrics {
            wpm: 55.5,
            accuracy: 98.0,
            duration: 30,
            total_characters: 150,
            correct_characters: 147,
            incorrect_characters: 3,
        }
    }

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Value::Null))]
    #[case(Some(json!(false)))]
    #[case(Some(json!(0)))]
    #[case(Some(json!(0.0)))]
    #[case(Some(json!("")))]
    fn missing_error_details_serialise_as_null(
        metrics: TypingMetrics,
        #[case] error_details: Option<Value>,
    ) {
        let result = TypingResult::from_draft(
            Uuid::nil(),
            created_at(),
            TypingResultDraft {
                language: "en".to_owned(),
                metrics,
                error_details,
                extra: Map::new(),
            },
        );

        assert!(result.error_details().is_none());
        let value = serde_json::to_value(&result).expect("result serialises");
        assert_eq!(value["errorDetails"], Value::Null);
    }

    #[rstest]
    #[case(json!(true))]
    #[case(json!(3))]
    #[case(json!("ण"))]
    #[case(json!([]))]
    #[case(json!({}))]
    fn non_empty_error_details_are_kept(metrics: TypingMetrics, #[case] details: Value) {
        let result = TypingResult::from_draft(
            Uuid::nil(),
            created_at(),
            TypingResultDraft {
                language: "mr".to_owned(),
                metrics,
                error_details: Some(details.clone()),
                extra: Map::new(),
            },
        );

        assert_eq!(result.error_details(), Some(&details));
    }

    #[rstest]
    fn wire_shape_uses_camel_case_and_flat_metrics(metrics: TypingMetrics) {
        let result = TypingResult::from_draft(
            Uuid::nil(),
            created_at(),
            TypingResultDraft {
                language: "ta".to_owned(),
                metrics,
                error_details: Some(json!({ "க": 2 })),
                extra: Map::new(),
            },
        );

        let value = serde_json::to_value(&result).expect("result serialises");
        assert_eq!(value["language"], json!("ta"));
        assert_eq!(value["wpm"], json!(55.5));
        assert_eq!(value["totalCharacters"], json!(150));
        assert_eq!(value["incorrectCharacters"], json!(3));
        assert_eq!(value["errorDetails"], json!({ "க": 2 }));
        assert_eq!(value["createdAt"], json!("2026-01-15T12:00:00Z"));
    }

    #[rstest]
    fn extra_fields_pass_through_but_cannot_override_identity(metrics: TypingMetrics) {
        let mut extra = Map::new();
        extra.insert("textContent".to_owned(), json!("नमस्ते"));
        extra.insert("id".to_owned(), json!("client-id"));
        extra.insert("createdAt".to_owned(), json!("1999-01-01T00:00:00Z"));
        let result = TypingResult::from_draft(
            Uuid::nil(),
            created_at(),
            TypingResultDraft {
                language: "hi".to_owned(),
                metrics,
                error_details: None,
                extra,
            },
        );

        assert_eq!(result.extra().len(), 1);
        let value = serde_json::to_value(&result).expect("result serialises");
        assert_eq!(value["textContent"], json!("नमस्ते"));
        assert_eq!(value["id"], json!(Uuid::nil().to_string()));
        assert_eq!(value["createdAt"], json!("2026-01-15T12:00:00Z"));
    }
}
