//! Port for storing and listing typing session results.

use async_trait::async_trait;

use crate::domain::{Error, ResultLimit, TypingResult, TypingResultDraft};

use super::define_port_error;

define_port_error! {
    /// Errors raised by record store adapters.
    pub enum RecordStoreError {
        /// A writer panicked while holding the store lock.
        Poisoned { collection: String } =>
            "record store lock poisoned while accessing {collection}",
        /// The backing store could not be reached.
        Unavailable { message: String } =>
            "record store unavailable: {message}",
    }
}

impl From<RecordStoreError> for Error {
    fn from(err: RecordStoreError) -> Self {
        Error::internal(err.to_string())
    }
}

/// Port owning typing results.
///
/// Implementations issue the result id and creation timestamp. Listings are
/// ordered newest first and truncated to the requested limit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TypingResultRepository: Send + Sync {
    /// Store a new result and return the stored value.
    async fn create_result(
        &self,
        draft: TypingResultDraft,
    ) -> Result<TypingResult, RecordStoreError>;

    /// List results across all languages.
    async fn list_results(&self, limit: ResultLimit)
    -> Result<Vec<TypingResult>, RecordStoreError>;

    /// List results whose language matches exactly.
    async fn list_results_by_language(
        &self,
        language: &str,
        limit: ResultLimit,
    ) -> Result<Vec<TypingResult>, RecordStoreError>;
}
