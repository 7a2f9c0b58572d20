// ABOUTME: Airtable REST API surface: typed payloads, HTTP client, throttling policy
// ABOUTME: All remote communication goes through this module

pub mod client;
pub mod error;
pub mod models;
pub mod retry;

pub use client::{AirtableClient, ClientConfig, DEFAULT_API_URL, MAX_RECORDS_PER_CREATE};
pub use error::ApiError;
