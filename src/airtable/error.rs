// ABOUTME: Transport-level error taxonomy for the Airtable client
// ABOUTME: Separates network failures, HTTP status errors, throttling, and decode failures

use thiserror::Error;

/// Errors produced by [`crate::airtable::AirtableClient`].
///
/// Non-2xx statuses carry the status code and raw body so callers can decide
/// how to report them; a malformed success body is a [`ApiError::Decode`]
/// rather than a missing-key failure somewhere deeper in the workflow.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request could not complete: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Airtable returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("rate limited by Airtable ({attempts} attempts)")]
    RateLimited { attempts: u32 },

    #[error("failed to decode Airtable response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid API base URL: {0}")]
    InvalidUrl(String),

    #[error("API key contains characters that cannot be sent in a header")]
    InvalidApiKey,
}
