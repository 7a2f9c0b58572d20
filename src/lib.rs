// ABOUTME: Library crate for airtable-replicator
// ABOUTME: Exposes the API client, the duplication workflow, config loading, and console flows

pub mod airtable;
pub mod commands;
pub mod config;
pub mod interactive;
pub mod replicate;

pub use airtable::{AirtableClient, ApiError, ClientConfig};
pub use replicate::{
    duplicate_table, CancelFlag, DuplicationOutcome, DuplicationReport, ReplicateError,
};
