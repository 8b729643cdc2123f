//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod insights;
pub mod languages;
pub mod schemas;
pub mod state;
pub mod typing_results;
pub mod validation;

pub use error::{ApiResult, json_config, query_config, route_not_found};
