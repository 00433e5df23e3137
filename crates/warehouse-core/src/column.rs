//! Column types, defaults and definitions.

use std::{borrow::Cow, fmt};

use serde::Serialize;

// ─── Types ───────────────────────────────────────────────────────────────────

/// The column types the warehouse uses.
///
/// `Display` yields the DuckDB spelling, which is also what the catalog
/// reports back in `information_schema.columns.data_type`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  strum::Display,
  strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlType {
  Varchar,
  Integer,
  Double,
  Boolean,
  Date,
  Timestamp,
  Blob,
  /// Semi-structured payload; needs DuckDB's `json` extension.
  Json,
}

impl SqlType {
  pub fn as_str(self) -> &'static str { self.into() }
}

// ─── Defaults ────────────────────────────────────────────────────────────────

/// A `DEFAULT` clause value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ColumnDefault {
  /// Time of insertion.
  CurrentTimestamp,
  Int(i64),
  Bool(bool),
  Text(&'static str),
}

impl fmt::Display for ColumnDefault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::CurrentTimestamp => f.write_str("CURRENT_TIMESTAMP"),
      Self::Int(n) => write!(f, "{n}"),
      Self::Bool(true) => f.write_str("TRUE"),
      Self::Bool(false) => f.write_str("FALSE"),
      Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
    }
  }
}

// ─── Column ──────────────────────────────────────────────────────────────────

/// One column of a [`TableDef`](crate::TableDef).
///
/// Primary-key membership lives on the table, not here; key columns are
/// implicitly `NOT NULL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
  pub name:     Cow<'static, str>,
  #[serde(rename = "type")]
  pub ty:       SqlType,
  pub not_null: bool,
  pub default:  Option<ColumnDefault>,
}

impl Column {
  pub fn new(name: impl Into<Cow<'static, str>>, ty: SqlType) -> Self {
    Self {
      name: name.into(),
      ty,
      not_null: false,
      default: None,
    }
  }

  #[must_use]
  pub fn not_null(mut self) -> Self {
    self.not_null = true;
    self
  }

  #[must_use]
  pub fn default(mut self, value: ColumnDefault) -> Self {
    self.default = Some(value);
    self
  }

  /// Shorthand for the ubiquitous `TIMESTAMP DEFAULT CURRENT_TIMESTAMP`.
  pub fn created_now(name: &'static str) -> Self {
    Self::new(name, SqlType::Timestamp).default(ColumnDefault::CurrentTimestamp)
  }
}

impl fmt::Display for Column {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.name, self.ty)?;
    if let Some(default) = &self.default {
      write!(f, " DEFAULT {default}")?;
    }
    if self.not_null {
      f.write_str(" NOT NULL")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_type_default_and_nullability() {
    let col = Column::created_now("features_created_at").not_null();
    assert_eq!(
      col.to_string(),
      "features_created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP NOT NULL"
    );

    let col = Column::new("status", SqlType::Varchar)
      .default(ColumnDefault::Text("sent"));
    assert_eq!(col.to_string(), "status VARCHAR DEFAULT 'sent'");
  }

  #[test]
  fn text_defaults_escape_quotes() {
    assert_eq!(ColumnDefault::Text("o'clock").to_string(), "'o''clock'");
  }

  #[test]
  fn negative_and_boolean_defaults() {
    assert_eq!(ColumnDefault::Int(-1).to_string(), "-1");
    assert_eq!(ColumnDefault::Bool(false).to_string(), "FALSE");
  }

  #[test]
  fn type_names_match_duckdb() {
    assert_eq!(SqlType::Varchar.as_str(), "VARCHAR");
    assert_eq!(SqlType::Json.to_string(), "JSON");
    assert_eq!(SqlType::Timestamp.as_str(), "TIMESTAMP");
  }
}
