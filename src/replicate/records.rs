// ABOUTME: Pagination fetcher for source-table records
// ABOUTME: Follows the opaque offset token until the listing is exhausted

use crate::airtable::models::Record;
use crate::airtable::AirtableClient;

use super::{CancelFlag, ReplicateError};

/// Fetch every record of a table, following the continuation token page by
/// page. The result is fully materialized: downstream insertion needs the
/// complete set before it starts, and a failed page discards the walk.
///
/// Each call re-walks the listing from the start; the token is never reused
/// across calls.
pub async fn fetch_all_records(
    client: &AirtableClient,
    base_id: &str,
    table_name: &str,
    cancel: &CancelFlag,
) -> Result<Vec<Record>, ReplicateError> {
    let mut records = Vec::new();
    let mut offset: Option<String> = None;

    loop {
        if cancel.is_cancelled() {
            return Err(ReplicateError::Cancelled);
        }

        let page = client
            .list_records(base_id, table_name, offset.as_deref())
            .await
            .map_err(|source| ReplicateError::RecordFetchFailed {
                table: table_name.to_string(),
                source,
            })?;

        tracing::debug!(
            page_size = page.records.len(),
            total = records.len() + page.records.len(),
            "fetched record page from '{}'",
            table_name
        );
        records.extend(page.records);

        match page.offset {
            Some(token) => offset = Some(token),
            None => break,
        }
    }

    Ok(records)
}
