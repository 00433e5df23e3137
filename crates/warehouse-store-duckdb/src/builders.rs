//! The six table-group builders.
//!
//! Each builder runs `CREATE TABLE IF NOT EXISTS` for the tables of its
//! group. An existing table is left exactly as it is; its shape is not
//! compared with the declaration. Feature importance and actions reference
//! `predictions`, so they fail until the prediction tables exist.

use duckdb::Connection;
use tracing::debug;
use warehouse_core::TableGroup;

use crate::{Error, Result};

/// Declare every table of `group`, stopping at the first failure.
pub fn declare_group(conn: &Connection, group: TableGroup) -> Result<()> {
  for table in group.tables() {
    debug!(group = %group, table = table.name, "declaring table");
    conn
      .execute_batch(&table.create_sql())
      .map_err(|source| Error::CreateTable { table: table.name, source })?;
  }
  Ok(())
}

/// `raw_core_data`, `raw_usage_info`, `raw_customer_interactions`,
/// `raw_labels`.
pub fn create_raw_data_tables(conn: &Connection) -> Result<()> {
  declare_group(conn, TableGroup::RawData)
}

/// `processed_features`, `feature_statistics`.
pub fn create_feature_tables(conn: &Connection) -> Result<()> {
  declare_group(conn, TableGroup::Features)
}

/// `model_registry`.
pub fn create_model_registry_tables(conn: &Connection) -> Result<()> {
  declare_group(conn, TableGroup::ModelRegistry)
}

pub fn create_prediction_tables(conn: &Connection) -> Result<()> {
  declare_group(conn, TableGroup::Predictions)
}

/// Requires `predictions`.
pub fn create_feature_importance_tables(conn: &Connection) -> Result<()> {
  declare_group(conn, TableGroup::FeatureImportance)
}

/// Requires `predictions`.
pub fn create_actions_tables(conn: &Connection) -> Result<()> {
  declare_group(conn, TableGroup::Actions)
}
