//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` so they depend only on domain
//! ports and stay testable without a real store.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ResultLimit;
use crate::domain::ports::{TypingInsights, TypingResultRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub typing_results: Arc<dyn TypingResultRepository>,
    pub insights: Arc<dyn TypingInsights>,
    pub clock: Arc<dyn Clock>,
    /// Limit applied when a listing request omits `limit`.
    pub default_limit: ResultLimit,
}

impl HttpState {
    /// Construct state with the default listing limit.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use typing_backend::domain::ports::FixtureTypingInsights;
    /// use typing_backend::inbound::http::state::HttpState;
    /// use typing_backend::outbound::memory::InMemoryRecordStore;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryRecordStore::default()),
    ///     Arc::new(FixtureTypingInsights),
    ///     Arc::new(DefaultClock),
    /// );
    /// assert_eq!(state.default_limit.get(), 50);
    /// ```
    pub fn new(
        typing_results: Arc<dyn TypingResultRepository>,
        insights: Arc<dyn TypingInsights>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            typing_results,
            insights,
            clock,
            default_limit: ResultLimit::default(),
        }
    }

    /// Override the limit used when requests omit one.
    #[must_use]
    pub fn with_default_limit(mut self, limit: ResultLimit) -> Self {
        self.default_limit = limit;
        self
    }
}
