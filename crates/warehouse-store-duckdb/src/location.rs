//! Where the warehouse lives.

use std::{
  fmt,
  path::{Path, PathBuf},
};

/// File created in the working directory when no path is given.
pub const DEFAULT_DB_FILE: &str = "magenta_datawarehouse.duckdb";

/// Path spelling that selects an in-memory store.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
  File(PathBuf),
  InMemory,
}

impl Location {
  /// `None` selects [`DEFAULT_DB_FILE`]; [`IN_MEMORY`] selects an in-memory
  /// store; anything else is a file path.
  pub fn resolve(path: Option<&Path>) -> Self {
    match path {
      None => Self::default(),
      Some(p) if p == Path::new(IN_MEMORY) => Self::InMemory,
      Some(p) => Self::File(p.to_path_buf()),
    }
  }

  pub fn is_in_memory(&self) -> bool { matches!(self, Self::InMemory) }

  /// Absolute path of the database file; `None` for in-memory stores.
  pub fn absolute_path(&self) -> Option<PathBuf> {
    match self {
      Self::File(path) => std::path::absolute(path).ok(),
      Self::InMemory => None,
    }
  }
}

impl Default for Location {
  fn default() -> Self { Self::File(PathBuf::from(DEFAULT_DB_FILE)) }
}

impl fmt::Display for Location {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::File(path) => write!(f, "{}", path.display()),
      Self::InMemory => f.write_str(IN_MEMORY),
    }
  }
}
