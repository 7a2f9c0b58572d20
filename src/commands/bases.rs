// ABOUTME: Base listing and non-interactive base creation
// ABOUTME: Workspace resolution falls back to the sole configured workspace

use anyhow::{Context, Result};

use crate::airtable::AirtableClient;
use crate::config::Config;

pub async fn list_bases(client: &AirtableClient) -> Result<()> {
    let bases = client.list_bases().await.context("Failed to list bases")?;
    if bases.is_empty() {
        println!("No bases are shared with this API key.");
        return Ok(());
    }

    println!("Your authorized bases:");
    println!();
    for base in &bases {
        println!("  {}  {}", base.id, base.name);
    }
    Ok(())
}

pub async fn create_base(
    client: &AirtableClient,
    config: &Config,
    name: &str,
    workspace: Option<String>,
) -> Result<()> {
    let workspace_id = match workspace {
        Some(id) => id,
        None => match config.workspaces.as_slice() {
            [] => anyhow::bail!(
                "No workspaces configured. Add a `workspaces` entry to the config file \
                 or pass --workspace."
            ),
            [only] => only.id.clone(),
            many => anyhow::bail!(
                "Multiple workspaces configured ({}). Pass --workspace to choose one.",
                many.iter()
                    .map(|ws| ws.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
    };

    let created = client
        .create_base(name, &workspace_id)
        .await
        .with_context(|| format!("Failed to create base '{}'", name))?;
    println!("✓ Created base '{}' with ID {}", name, created.id);
    Ok(())
}
