//! Layered settings: config file, then `WAREHOUSE_*` environment variables,
//! then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use warehouse_store_duckdb::Location;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Database file; the initializer's default file when unset.
  pub db_path:   Option<PathBuf>,
  pub in_memory: bool,
}

impl Settings {
  /// Read `path` (optional) and the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(
        config::Environment::with_prefix("WAREHOUSE").try_parsing(true),
      )
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise Settings")
  }

  /// Flags win over settings; an explicit `--db` wins over a configured
  /// in-memory store.
  pub fn location(&self, db: Option<&Path>, in_memory: bool) -> Location {
    if in_memory || (db.is_none() && self.in_memory) {
      return Location::InMemory;
    }
    let path = db.or(self.db_path.as_deref()).map(expand_tilde);
    Location::resolve(path.as_deref())
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();
    assert!(!settings.in_memory);
    assert_eq!(
      settings.location(None, false),
      Location::File(PathBuf::from("magenta_datawarehouse.duckdb"))
    );
  }

  #[test]
  fn file_values_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warehouse.toml");
    fs::write(&path, "db_path = \"/srv/dwh/upsell.duckdb\"\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(
      settings.location(None, false),
      Location::File(PathBuf::from("/srv/dwh/upsell.duckdb"))
    );
  }

  #[test]
  fn flags_override_settings() {
    let settings = Settings {
      db_path:   Some(PathBuf::from("configured.duckdb")),
      in_memory: true,
    };
    assert_eq!(settings.location(None, false), Location::InMemory);
    assert_eq!(
      settings.location(Some(Path::new("flag.duckdb")), false),
      Location::File(PathBuf::from("flag.duckdb"))
    );
    assert_eq!(
      Settings::default().location(None, true),
      Location::InMemory
    );
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/dwh.duckdb")),
      PathBuf::from(home).join("dwh.duckdb")
    );
    assert_eq!(expand_tilde(Path::new("/abs")), PathBuf::from("/abs"));
  }
}
