//! Manage the override record: export, import, reset.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::overrides::{default_export_name, JsonFileStore, OverrideRecord, OverrideStore};

/// Options shared by the overrides subcommands.
#[derive(Debug, Clone)]
pub struct OverridesOptions {
    /// The kiosk's override record file.
    pub overrides: PathBuf,
}

#[derive(Debug, Clone)]
pub enum OverridesSubcommand {
    /// Write the record to a portable export file.
    Export { output: Option<PathBuf> },
    /// Replace the record with an exported file.
    Import { input: PathBuf },
    /// Clear every override.
    Reset { yes: bool },
}

/// Execute an overrides subcommand.
pub fn execute_overrides(options: OverridesOptions, subcommand: OverridesSubcommand) -> Result<()> {
    let store = JsonFileStore::new(&options.overrides);
    match subcommand {
        OverridesSubcommand::Export { output } => {
            let record = store.load()?;
            let output = output.unwrap_or_else(|| PathBuf::from(default_export_name()));
            JsonFileStore::new(&output).save(&record)?;
            println!(
                "{} exported {} change(s) to {}",
                style("✓").green(),
                record.change_count(),
                output.display()
            );
        }
        OverridesSubcommand::Import { input } => {
            // Round-trips through the typed record, so a malformed export
            // is rejected before it replaces anything.
            let record = JsonFileStore::new(&input)
                .load()
                .with_context(|| format!("failed to read export file {}", input.display()))?;
            store.save(&record)?;
            println!(
                "{} imported {} change(s) from {}",
                style("✓").green(),
                record.change_count(),
                input.display()
            );
        }
        OverridesSubcommand::Reset { yes } => {
            let record = store.load()?;
            if record.is_empty() {
                println!("{} no overrides to reset", style("✓").green());
                return Ok(());
            }
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!(
                        "Discard {} override change(s)?",
                        record.change_count()
                    ))
                    .default(false)
                    .interact()?;
            if !confirmed {
                println!("{} reset cancelled", style("!").yellow());
                return Ok(());
            }
            store.save(&OverrideRecord::default())?;
            println!("{} overrides reset", style("✓").green());
        }
    }
    Ok(())
}
