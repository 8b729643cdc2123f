//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Only compiled for tests or with the `test-support` feature.

pub mod clock {
    //! Controllable clocks for deterministic timestamps.

    use std::sync::Mutex;

    use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
    use mockable::Clock;

    /// Clock whose time only moves when a test moves it.
    pub struct MutableClock(Mutex<DateTime<Utc>>);

    impl MutableClock {
        pub fn new(now: DateTime<Utc>) -> Self {
            Self(Mutex::new(now))
        }

        /// Clock starting at 2026-01-15T12:00:00Z.
        pub fn at_reference_time() -> Self {
            Self::new(reference_time())
        }

        pub fn advance_seconds(&self, seconds: i64) {
            *self.lock_clock() += TimeDelta::seconds(seconds);
        }

        pub fn set(&self, now: DateTime<Utc>) {
            *self.lock_clock() = now;
        }

        fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
            match self.0.lock() {
                Ok(guard) => guard,
                Err(_) => panic!("clock mutex"),
            }
        }
    }

    impl Clock for MutableClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.lock_clock()
        }
    }

    /// Fixed instant used as the starting point of test clocks.
    pub fn reference_time() -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).single() {
            Some(time) => time,
            None => panic!("reference time is unambiguous"),
        }
    }
}

pub mod drafts {
    //! Builders for valid typing result drafts and payloads.

    use serde_json::{Map, Value, json};

    use crate::domain::{TypingMetrics, TypingResultDraft};

    /// Metrics for a short, fairly accurate session.
    pub fn sample_metrics() -> TypingMetrics {
        TypingMetrics {
            wpm: 42.0,
            accuracy: 96.5,
            duration: 60,
            total_characters: 200,
            correct_characters: 193,
            incorrect_characters: 7,
        }
    }

    /// Draft for `language` with [`sample_metrics`] and no error details.
    pub fn draft_for(language: &str) -> TypingResultDraft {
        TypingResultDraft {
            language: language.to_owned(),
            metrics: sample_metrics(),
            error_details: None,
            extra: Map::new(),
        }
    }

    /// JSON body accepted by `POST /api/typing-results`.
    pub fn payload_for(language: &str) -> Value {
        json!({
            "language": language,
            "wpm": 42.0,
            "accuracy": 96.5,
            "duration": 60,
            "totalCharacters": 200,
            "correctCharacters": 193,
            "incorrectCharacters": 7
        })
    }
}
