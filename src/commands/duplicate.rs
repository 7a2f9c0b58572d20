// ABOUTME: One-shot table duplication command
// ABOUTME: Confirms unless --yes, shows a spinner, and wires Ctrl-C to cancellation

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Confirm;
use std::time::Duration;

use crate::airtable::AirtableClient;
use crate::replicate::{self, CancelFlag, DuplicationOutcome};

pub async fn duplicate(
    client: &AirtableClient,
    source_base: &str,
    table: &str,
    dest_base: &str,
    yes: bool,
) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new(&format!(
            "Duplicate table '{}' from {} into {}?",
            table, source_base, dest_base
        ))
        .with_default(true)
        .prompt()
        .unwrap_or(false);
        if !confirmed {
            println!("Duplication cancelled.");
            return Ok(());
        }
    }

    let cancel = CancelFlag::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Ctrl-C received, stopping after the current step");
            ctrl_c.cancel();
        }
    });

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Duplicating '{}'...", table));

    let result = replicate::duplicate_table(client, source_base, table, dest_base, &cancel).await;
    spinner.finish_and_clear();

    match result {
        Ok(report) => {
            match report.outcome {
                DuplicationOutcome::Copied { records } => println!(
                    "✓ Table '{}' duplicated into base {}: {} records copied (new table ID {})",
                    table, dest_base, records, report.table.id
                ),
                DuplicationOutcome::EmptySource => println!(
                    "✓ Table '{}' created empty in base {}: the source table has no records \
                     (new table ID {})",
                    table, dest_base, report.table.id
                ),
            }
            Ok(())
        }
        Err(e) => {
            if let Some(note) = e.leftover_note() {
                eprintln!("{}", note);
            }
            Err(anyhow::Error::new(e)
                .context(format!("Failed to duplicate table '{}'", table)))
        }
    }
}
