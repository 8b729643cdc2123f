//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local record store for accounts and typing results.
//!
//! Adapters translate between domain types and their storage representation
//! and contain no business logic.

pub mod memory;
