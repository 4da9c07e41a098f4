//! Export command implementation
//!
//! Handles `carbontrack export`, which writes the machine table as CSV.

use anyhow::{Context, Result};
use console::style;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::Workspace;
use crate::error::CarbonTrackError;
use crate::fmt::CHECKMARK;
use crate::machine::Fleet;
use crate::report::csv_export::{write_csv, DEFAULT_CSV_FILE};

/// Write machines matching `search` to a CSV file
///
/// The file goes to `output`, or `machines.csv` in the working directory.
pub fn cmd_export(search: Option<&str>, output: Option<&Path>, fleet: Option<&Path>) -> Result<()> {
    let workspace = Workspace::current(fleet)?;
    let fleet = workspace.load_fleet()?;

    let path = output.map_or_else(|| workspace.root.join(DEFAULT_CSV_FILE), Path::to_path_buf);
    let rows = export_to_file(&fleet, search.unwrap_or(""), &path)?;

    println!(
        "{} Exported {} machine(s) to {}",
        CHECKMARK,
        rows,
        style(path.display()).cyan()
    );
    Ok(())
}

/// Write the CSV export to `path`, returning the number of machines written
pub fn export_to_file(fleet: &Fleet, query: &str, path: &Path) -> Result<usize> {
    let file = File::create(path)
        .map_err(|e| CarbonTrackError::io("writing the CSV export", PathBuf::from(path), e))?;
    let rows = write_csv(fleet, query, BufWriter::new(file))
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    log::info!("Wrote {} rows to {}", rows, path.display());
    Ok(rows)
}
