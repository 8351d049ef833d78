//! Print the signal mapping matrix.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::commands::load_repository;
use crate::matrix::OfferingName;
use crate::overrides::{JsonFileStore, OverrideStore};

/// Options for the matrix command.
#[derive(Debug, Clone)]
pub struct MatrixOptions {
    /// Content set file (builtin when absent).
    pub content: Option<PathBuf>,
    /// Override record to merge before printing.
    pub overrides: Option<PathBuf>,
}

/// Execute the matrix command: print the merged matrix as an aligned table.
pub fn execute_matrix(options: MatrixOptions) -> Result<()> {
    let repository = load_repository(options.content.as_deref(), None)?;
    let mut matrix = repository.matrix();
    if let Some(path) = &options.overrides {
        let record = JsonFileStore::new(path).load()?;
        matrix = matrix.merged(&record.signal_matrix);
    }

    let mut rows: Vec<(&str, _)> = matrix.iter().collect();
    rows.sort_by_key(|(path, _)| *path);

    let width = rows
        .iter()
        .map(|(path, _)| path.len())
        .max()
        .unwrap_or(0)
        .max("Signal Path".len());

    print!("{}", style(format!("{:width$}", "Signal Path", width = width)).bold());
    for offering in OfferingName::ALL {
        print!("  {}", style(format!("{:>4}", offering.as_str())).bold());
    }
    println!();
    for (path, row) in rows {
        print!("{:width$}", path, width = width);
        for offering in OfferingName::ALL {
            print!("  {:>4}", row.get(offering));
        }
        println!();
    }
    Ok(())
}
