//! DuckDB backend for the upsell data warehouse.
//!
//! Declares the tables described by [`warehouse_core`] against a DuckDB file
//! (or in-memory instance). Everything here is synchronous; one connection is
//! opened per [`initialize`] call and released on every exit path.

mod builders;
mod init;
mod location;
mod warehouse;

pub mod error;

pub use builders::{
  create_actions_tables, create_feature_importance_tables,
  create_feature_tables, create_model_registry_tables,
  create_prediction_tables, create_raw_data_tables, declare_group,
};
pub use error::{Error, Result};
pub use init::{InitReport, initialize, initialize_with};
pub use location::{DEFAULT_DB_FILE, IN_MEMORY, Location};
pub use warehouse::{ColumnInfo, Warehouse};
