//! Error type for `warehouse-store-duckdb`.
//!
//! Store failures are never recovered here. Every variant that originates in
//! DuckDB keeps the original [`duckdb::Error`] as its source.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to open {location}: {source}")]
  Open {
    location: String,
    #[source]
    source:   duckdb::Error,
  },

  #[error("failed to create table {table}: {source}")]
  CreateTable {
    table:  &'static str,
    #[source]
    source: duckdb::Error,
  },

  #[error("database error: {0}")]
  Database(#[from] duckdb::Error),

  #[error("table not found: {0}")]
  TableNotFound(String),

  #[error("core error: {0}")]
  Core(#[from] warehouse_core::Error),

  /// Writing progress output failed.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl Error {
  /// The underlying DuckDB error, if this failure came from the store.
  pub fn database_error(&self) -> Option<&duckdb::Error> {
    match self {
      Self::Open { source, .. } | Self::CreateTable { source, .. } => {
        Some(source)
      }
      Self::Database(e) => Some(e),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
