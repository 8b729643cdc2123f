//! Domain ports for the hexagonal boundary.
//!
//! Ports describe how the domain expects to talk to driven adapters (the
//! record store, the insight provider). Each trait exposes a strongly typed
//! error so adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod typing_insights;
mod typing_result_repository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::AccountRepository;
#[cfg(test)]
pub use typing_insights::MockTypingInsights;
pub use typing_insights::{
    FixtureTypingInsights, LIGATURE_MODEL, MISTAKE_MODEL, TypingInsights, TypingInsightsError,
};
#[cfg(test)]
pub use typing_result_repository::MockTypingResultRepository;
pub use typing_result_repository::{RecordStoreError, TypingResultRepository};
