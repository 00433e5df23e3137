//! One-shot warehouse initialization.
//!
//! Opens the store, runs the six builders in order, lists the resulting
//! tables and closes the connection. Progress goes to a writer (stdout for
//! [`initialize`]); failures are reported there, logged, and returned
//! unchanged. Nothing tracks progress between runs; re-running is safe only
//! because every builder is idempotent.

use std::{
  io::{self, Write},
  path::Path,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, instrument};
use warehouse_core::TableGroup;

use crate::{Location, Result, Warehouse};

/// Outcome of a successful initialization.
#[derive(Debug, Clone, Serialize)]
pub struct InitReport {
  pub location:    String,
  /// Every table in the store after the run, sorted by name.
  pub tables:      Vec<String>,
  pub finished_at: DateTime<Utc>,
}

impl InitReport {
  pub fn table_count(&self) -> usize { self.tables.len() }
}

/// Initialize the warehouse at `path`, reporting progress on stdout.
///
/// `None` uses [`DEFAULT_DB_FILE`](crate::DEFAULT_DB_FILE) in the working
/// directory and `":memory:"` an in-memory store.
pub fn initialize(path: Option<&Path>) -> Result<InitReport> {
  initialize_with(&Location::resolve(path), &mut io::stdout().lock())
}

/// Initialize the warehouse at `location`, reporting progress on `out`.
#[instrument(skip_all, fields(location = %location))]
pub fn initialize_with(
  location: &Location,
  out: &mut impl Write,
) -> Result<InitReport> {
  match report_run(location, out) {
    Ok(tables) => {
      info!(tables = tables.len(), "data warehouse initialized");
      Ok(InitReport {
        location: location.to_string(),
        tables,
        finished_at: Utc::now(),
      })
    }
    Err(e) => {
      error!(error = %e, "data warehouse initialization failed");
      writeln!(out, "Error initializing data warehouse: {e}").ok();
      Err(e)
    }
  }
}

/// Every step that can fail, progress lines included.
fn report_run(
  location: &Location,
  out: &mut impl Write,
) -> Result<Vec<String>> {
  writeln!(out, "Initializing data warehouse at: {location}")?;
  let tables = declare_and_list(location, out)?;

  writeln!(out, "\nSuccessfully created {} tables:", tables.len())?;
  for table in &tables {
    writeln!(out, "  - {table}")?;
  }
  writeln!(out, "\nData warehouse initialization completed successfully!")?;
  match location.absolute_path() {
    Some(path) => writeln!(out, "Database file: {}", path.display())?,
    None => writeln!(out, "Database: in-memory")?,
  }
  Ok(tables)
}

/// The scoped part of a run: the connection lives exactly as long as this
/// call, whichever way it returns.
fn declare_and_list(
  location: &Location,
  out: &mut impl Write,
) -> Result<Vec<String>> {
  let warehouse = Warehouse::open(location)?;

  for group in TableGroup::all() {
    writeln!(out, "Creating {} tables...", group.label())?;
    warehouse.declare(group)?;
  }

  let tables = warehouse.tables()?;
  warehouse.close()?;
  Ok(tables)
}
