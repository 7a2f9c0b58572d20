// ABOUTME: Interactive console menus for browsing bases and duplicating tables
// ABOUTME: Menus stay alive across failures; errors print and return control to the user

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, Text};
use std::time::Duration;

use crate::airtable::models::{Base, TableSummary};
use crate::airtable::AirtableClient;
use crate::config::{Config, Workspace};
use crate::replicate::{self, CancelFlag, DuplicationOutcome};

/// Run the interactive menu loop until the user exits.
///
/// API failures inside a flow are reported and drop back to the menu; they
/// never terminate the process.
pub async fn run(client: &AirtableClient, config: &Config) -> Result<()> {
    print_header("Airtable Replicator");

    loop {
        let items = ["Create a new base", "Use a pre-existing base", "Exit"];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Main menu")
            .items(&items)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => create_base_wizard(client, config).await,
            1 => browse_bases(client).await,
            _ => break,
        };
        if let Err(e) = result {
            eprintln!("✗ {:#}", e);
        }
        println!();
    }

    println!("Goodbye!");
    Ok(())
}

/// Create-base wizard: pick a workspace, name the base, confirm, create.
async fn create_base_wizard(client: &AirtableClient, config: &Config) -> Result<()> {
    let workspace = match select_workspace(&config.workspaces)? {
        Some(ws) => ws,
        None => return Ok(()),
    };
    println!("Workspace: {}", workspace.name);

    let name = match Text::new("Name of the new base:").prompt() {
        Ok(name) => name,
        Err(inquire::InquireError::OperationCanceled) => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        println!("Base name cannot be empty.");
        return Ok(());
    }

    let confirmed = Confirm::new(&format!(
        "Create a new base named '{}' in '{}'?",
        name, workspace.name
    ))
    .with_default(true)
    .prompt();
    match confirmed {
        Ok(true) => {}
        Ok(false) | Err(inquire::InquireError::OperationCanceled) => {
            println!("Base creation cancelled.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let created = client.create_base(&name, &workspace.id).await?;
    println!("✓ Created base '{}' with ID {}", name, created.id);
    Ok(())
}

fn select_workspace(workspaces: &[Workspace]) -> Result<Option<Workspace>> {
    match workspaces {
        [] => {
            println!(
                "No workspaces configured. Add a `workspaces` entry to the config file \
                 to enable base creation."
            );
            Ok(None)
        }
        [only] => Ok(Some(only.clone())),
        many => {
            let labels: Vec<String> = many
                .iter()
                .map(|ws| format!("{} ({})", ws.name, ws.id))
                .collect();
            let idx = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Select a workspace")
                .items(&labels)
                .default(0)
                .interact()?;
            Ok(Some(many[idx].clone()))
        }
    }
}

async fn browse_bases(client: &AirtableClient) -> Result<()> {
    let bases = client.list_bases().await?;
    if bases.is_empty() {
        println!("No existing bases available.");
        return Ok(());
    }

    match pick_base("Select a base", &bases)? {
        Some(base) => base_menu(client, &base).await,
        None => Ok(()),
    }
}

/// Present a labeled base list with a trailing Back entry.
fn pick_base(prompt: &str, bases: &[Base]) -> Result<Option<Base>> {
    let mut labels: Vec<String> = bases
        .iter()
        .map(|base| format!("{} ({})", base.name, base.id))
        .collect();
    labels.push("Back".to_string());

    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(bases.get(idx).cloned())
}

async fn base_menu(client: &AirtableClient, base: &Base) -> Result<()> {
    loop {
        let items = ["Select a table", "Return to main menu"];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Base '{}'", base.name))
            .items(&items)
            .default(0)
            .interact()?;
        if choice != 0 {
            return Ok(());
        }

        let tables = client.list_tables(&base.id).await?;
        if tables.is_empty() {
            println!("No tables available to select.");
            continue;
        }

        let mut labels: Vec<String> = tables.iter().map(|t| t.name.clone()).collect();
        labels.push("Back".to_string());
        let idx = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a table")
            .items(&labels)
            .default(0)
            .interact()?;
        if let Some(table) = tables.get(idx) {
            table_menu(client, base, table).await?;
        }
    }
}

async fn table_menu(client: &AirtableClient, base: &Base, table: &TableSummary) -> Result<()> {
    loop {
        let items = ["Duplicate to another base", "Back"];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Table '{}'", table.name))
            .items(&items)
            .default(0)
            .interact()?;
        if choice != 0 {
            return Ok(());
        }

        if let Err(e) = duplicate_flow(client, base, &table.name).await {
            eprintln!("✗ {:#}", e);
        }
    }
}

/// Pick a destination base and run the duplication workflow against it.
async fn duplicate_flow(client: &AirtableClient, source: &Base, table_name: &str) -> Result<()> {
    let bases = client.list_bases().await?;
    if bases.is_empty() {
        println!("No available bases to select as a destination.");
        return Ok(());
    }

    let dest = match pick_base("Select a destination base", &bases)? {
        Some(base) => base,
        None => return Ok(()),
    };

    let confirmed = Confirm::new(&format!(
        "Duplicate '{}' from '{}' into '{}'?",
        table_name, source.name, dest.name
    ))
    .with_default(true)
    .prompt();
    match confirmed {
        Ok(true) => {}
        Ok(false) | Err(inquire::InquireError::OperationCanceled) => {
            println!("Duplication cancelled.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Duplicating '{}'...", table_name));

    let cancel = CancelFlag::new();
    let result = replicate::duplicate_table(client, &source.id, table_name, &dest.id, &cancel).await;
    spinner.finish_and_clear();

    match result {
        Ok(report) => {
            match report.outcome {
                DuplicationOutcome::Copied { records } => println!(
                    "✓ Table '{}' duplicated to base {} ({} records, new table ID {})",
                    table_name, dest.id, records, report.table.id
                ),
                DuplicationOutcome::EmptySource => println!(
                    "✓ Created empty table '{}' in base {}: the source table has no records \
                     (new table ID {})",
                    table_name, dest.id, report.table.id
                ),
            }
            Ok(())
        }
        Err(e) => {
            if let Some(note) = e.leftover_note() {
                eprintln!("{}", note);
            }
            Err(e.into())
        }
    }
}

fn print_header(title: &str) {
    println!();
    println!("╔{}╗", "═".repeat(62));
    println!("║  {:<60}║", title);
    println!("╚{}╝", "═".repeat(62));
    println!();
}
