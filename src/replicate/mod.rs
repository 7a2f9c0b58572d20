// ABOUTME: Duplication orchestrator: schema transfer, record fetch, chunked insert
// ABOUTME: Phases run strictly in sequence; failures halt the workflow with no rollback

pub mod records;
pub mod schema;

pub use records::fetch_all_records;
pub use schema::replicate_table;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::airtable::models::{NewRecord, Table};
use crate::airtable::{AirtableClient, ApiError, MAX_RECORDS_PER_CREATE};

/// Cooperative cancellation flag checked between workflow steps.
///
/// Setting the flag does not abort an in-flight request; that ends via the
/// client's request timeout.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Failures of the duplication workflow. Each variant names the phase that
/// halted so callers can report what was left behind.
#[derive(Error, Debug)]
pub enum ReplicateError {
    #[error("failed to read table definitions from the source base: {0}")]
    SchemaFetchFailed(#[source] ApiError),

    #[error("table '{0}' not found in the source base")]
    TableNotFound(String),

    #[error("failed to create table '{name}' in the destination base: {source}")]
    TableCreationFailed {
        name: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to fetch records from '{table}': {source}")]
    RecordFetchFailed {
        table: String,
        #[source]
        source: ApiError,
    },

    #[error("record insert stopped after {inserted} of {total} records: {source}")]
    RecordInsertFailed {
        inserted: usize,
        total: usize,
        #[source]
        source: ApiError,
    },

    #[error("duplication cancelled")]
    Cancelled,
}

impl ReplicateError {
    /// What the failed workflow leaves behind at the destination, if anything.
    pub fn leftover_note(&self) -> Option<&'static str> {
        match self {
            ReplicateError::RecordFetchFailed { .. } => {
                Some("The destination table was created but left empty.")
            }
            ReplicateError::RecordInsertFailed { .. } => {
                Some("The destination table and any records inserted so far were left in place.")
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicationOutcome {
    /// Structure and every record were copied.
    Copied { records: usize },
    /// Structure was copied; the source table holds no records. Not an error.
    EmptySource,
}

#[derive(Debug)]
pub struct DuplicationReport {
    /// The newly created destination table.
    pub table: Table,
    pub outcome: DuplicationOutcome,
}

/// Duplicate `table_name` from `source_base` into `dest_base`: recreate the
/// structure, fetch every source record, then insert them in batches.
///
/// Failure at any phase halts the remaining phases. Nothing created so far is
/// rolled back; [`ReplicateError::leftover_note`] describes what remains.
/// Every external call is attempted once (the client handles throttling
/// below this level).
pub async fn duplicate_table(
    client: &AirtableClient,
    source_base: &str,
    table_name: &str,
    dest_base: &str,
    cancel: &CancelFlag,
) -> Result<DuplicationReport, ReplicateError> {
    if cancel.is_cancelled() {
        return Err(ReplicateError::Cancelled);
    }
    let table = schema::replicate_table(client, source_base, table_name, dest_base).await?;
    tracing::info!(
        table_id = %table.id,
        "created table '{}' in base {}",
        table.name,
        dest_base
    );

    if cancel.is_cancelled() {
        return Err(ReplicateError::Cancelled);
    }
    let source_records = records::fetch_all_records(client, source_base, table_name, cancel).await?;

    if source_records.is_empty() {
        tracing::info!("source table '{}' has no records", table_name);
        return Ok(DuplicationReport {
            table,
            outcome: DuplicationOutcome::EmptySource,
        });
    }

    let total = source_records.len();
    let batch: Vec<NewRecord> = source_records.iter().map(NewRecord::from).collect();
    let mut inserted = 0;
    for chunk in batch.chunks(MAX_RECORDS_PER_CREATE) {
        if cancel.is_cancelled() {
            return Err(ReplicateError::Cancelled);
        }
        client
            .create_records(dest_base, &table.id, chunk)
            .await
            .map_err(|source| ReplicateError::RecordInsertFailed {
                inserted,
                total,
                source,
            })?;
        inserted += chunk.len();
        tracing::debug!(inserted, total, "inserted record batch");
    }

    Ok(DuplicationReport {
        table,
        outcome: DuplicationOutcome::Copied { records: inserted },
    })
}
