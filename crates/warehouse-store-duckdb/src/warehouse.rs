//! [`Warehouse`]: an open DuckDB connection plus catalog introspection.

use duckdb::Connection;
use serde::Serialize;
use tracing::{info, instrument};
use warehouse_core::TableGroup;

use crate::{Error, Location, Result, builders::declare_group};

/// One column as reported by DuckDB's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
  pub name:      String,
  pub data_type: String,
  pub nullable:  bool,
  pub default:   Option<String>,
}

/// A warehouse backed by a single DuckDB connection.
///
/// The connection is owned; dropping the handle releases it. Use
/// [`Warehouse::close`] to observe close errors.
pub struct Warehouse {
  conn: Connection,
}

impl Warehouse {
  /// Open (or create) the store at `location`. No tables are declared.
  #[instrument(skip_all, fields(location = %location))]
  pub fn open(location: &Location) -> Result<Self> {
    info!("opening DuckDB database");
    let conn = match location {
      Location::File(path) => Connection::open(path),
      Location::InMemory => Connection::open_in_memory(),
    }
    .map_err(|source| Error::Open { location: location.to_string(), source })?;

    Ok(Self { conn })
  }

  /// Open an in-memory store; useful for testing.
  pub fn open_in_memory() -> Result<Self> { Self::open(&Location::InMemory) }

  /// Direct access for the pipeline stages that read and write rows.
  pub fn connection(&self) -> &Connection { &self.conn }

  pub fn declare(&self, group: TableGroup) -> Result<()> {
    declare_group(&self.conn, group)
  }

  /// Declare every group in order.
  pub fn declare_all(&self) -> Result<()> {
    TableGroup::all().try_for_each(|group| self.declare(group))
  }

  /// Names of all tables in the main schema, sorted.
  pub fn tables(&self) -> Result<Vec<String>> {
    let mut stmt = self.conn.prepare(
      "SELECT table_name FROM duckdb_tables() \
       WHERE database_name = current_database() AND schema_name = 'main' \
       ORDER BY table_name",
    )?;
    let rows = stmt.query_map([], |row| row.get(0))?;

    let mut names = Vec::new();
    for row in rows {
      names.push(row?);
    }
    Ok(names)
  }

  /// Columns of `table` in declaration order.
  pub fn describe(&self, table: &str) -> Result<Vec<ColumnInfo>> {
    let mut stmt = self.conn.prepare(
      "SELECT column_name, data_type, is_nullable, column_default \
       FROM information_schema.columns \
       WHERE table_catalog = current_database() AND table_schema = 'main' \
         AND table_name = ? \
       ORDER BY ordinal_position",
    )?;
    let rows = stmt.query_map([table], |row| {
      let nullable: String = row.get(2)?;
      Ok(ColumnInfo {
        name:      row.get(0)?,
        data_type: row.get(1)?,
        nullable:  nullable == "YES",
        default:   row.get(3)?,
      })
    })?;

    let mut columns = Vec::new();
    for row in rows {
      columns.push(row?);
    }
    if columns.is_empty() {
      return Err(Error::TableNotFound(table.to_owned()));
    }
    Ok(columns)
  }

  /// Primary-key columns of `table` in key order; empty if it has none.
  pub fn primary_key(&self, table: &str) -> Result<Vec<String>> {
    let mut stmt = self.conn.prepare(
      "SELECT unnest(constraint_column_names) FROM duckdb_constraints() \
       WHERE database_name = current_database() AND schema_name = 'main' \
         AND table_name = ? AND constraint_type = 'PRIMARY KEY'",
    )?;
    let rows = stmt.query_map([table], |row| row.get(0))?;

    let mut columns = Vec::new();
    for row in rows {
      columns.push(row?);
    }
    Ok(columns)
  }

  /// Close the connection, surfacing any error DuckDB reports.
  pub fn close(self) -> Result<()> {
    self.conn.close().map_err(|(_, e)| Error::Database(e))
  }
}
