//! Error types for `warehouse-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown table: {0:?}")]
  UnknownTable(String),

  #[error("unknown table group: {0:?}")]
  UnknownGroup(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
