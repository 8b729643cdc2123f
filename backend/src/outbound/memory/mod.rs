//! In-memory adapters.
//!
//! Data held here lives for the lifetime of the process and is lost on exit.

mod record_store;

pub use record_store::InMemoryRecordStore;
