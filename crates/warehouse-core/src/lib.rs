//! Schema model for the upsell data warehouse.
//!
//! Describes every table the ML pipeline relies on (raw ingestion, engineered
//! features, model registry, predictions, feature importance, actions) as
//! plain data, and renders the idempotent DDL for them. This crate has no
//! database dependency; `warehouse-store-duckdb` executes what it renders.

pub mod catalog;
pub mod column;
pub mod error;
pub mod features;
pub mod group;
pub mod table;

pub use column::{Column, ColumnDefault, SqlType};
pub use error::{Error, Result};
pub use group::{TableGroup, schema_script};
pub use table::{ForeignKey, TableDef};
