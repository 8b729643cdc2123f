//! Domain primitives and ports.
//!
//! Purpose: define the entities the typing backend stores and serves, and
//! the ports through which inbound adapters reach storage and insight
//! providers. Types here know nothing about HTTP.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Account, TypingResult: entities owned by the record store.
//! - ResultLimit: listing bound with the default of 50.
//! - TraceId: request correlation identifier.
//! - LanguageDescriptor: static language catalogue entries.
//! - Ligature and mistake insight payloads.

pub mod account;
pub mod error;
pub mod insights;
pub mod language;
pub mod ports;
pub mod result_limit;
pub mod trace_id;
pub mod typing_result;

pub use self::account::{Account, AccountDraft};
pub use self::error::{Error, ErrorCode};
pub use self::insights::{
    LigatureForecast, LigaturePrediction, LigatureRequest, MistakeAnalysis, MistakePattern,
    MistakeReport, MistakeRequest,
};
pub use self::language::{LanguageDescriptor, supported_languages};
pub use self::result_limit::{DEFAULT_RESULT_LIMIT, ResultLimit};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::typing_result::{TypingMetrics, TypingResult, TypingResultDraft};
