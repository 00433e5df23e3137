//! Every warehouse table, declared once.
//!
//! Each function returns the full definition of one table. Which group
//! declares which table is decided in [`crate::group`].

use crate::{
  Error, Result,
  column::{Column, ColumnDefault, SqlType},
  features::MODEL_FEATURES,
  group::TableGroup,
  table::TableDef,
};

/// Table names
pub mod tables {
  pub const RAW_CORE_DATA: &str = "raw_core_data";
  pub const RAW_USAGE_INFO: &str = "raw_usage_info";
  pub const RAW_CUSTOMER_INTERACTIONS: &str = "raw_customer_interactions";
  pub const RAW_LABELS: &str = "raw_labels";
  pub const PROCESSED_FEATURES: &str = "processed_features";
  pub const FEATURE_STATISTICS: &str = "feature_statistics";
  pub const MODEL_REGISTRY: &str = "model_registry";
  pub const PREDICTIONS: &str = "predictions";
  pub const FEATURES_IMPORTANCE: &str = "features_importance";
  pub const ACTIONS: &str = "actions";
}

use tables::*;

const VARCHAR: SqlType = SqlType::Varchar;

fn key(name: &'static str) -> Column { Column::new(name, VARCHAR) }

fn required(name: &'static str) -> Column {
  Column::new(name, VARCHAR).not_null()
}

// ─── Raw data ────────────────────────────────────────────────────────────────

/// One contract/account snapshot as delivered by ingestion.
pub fn raw_core_data() -> TableDef {
  TableDef::new(RAW_CORE_DATA)
    .column(key("rating_account_id"))
    .column(required("customer_id"))
    .columns([
      Column::new("age", SqlType::Integer),
      Column::new("contract_lifetime_days", SqlType::Integer),
      Column::new("remaining_binding_days", SqlType::Integer),
      Column::new("has_special_offer", SqlType::Boolean),
      Column::new("is_magenta1_customer", SqlType::Boolean),
      Column::new("available_gb", SqlType::Integer),
      Column::new("gross_mrc", SqlType::Double),
      Column::new("smartphone_brand", VARCHAR),
      Column::new("has_done_upselling", SqlType::Boolean),
    ])
    .column(Column::created_now("ingestion_timestamp"))
    .primary_key(&["rating_account_id"])
}

/// Monthly usage, one row per account and billing month.
pub fn raw_usage_info() -> TableDef {
  TableDef::new(RAW_USAGE_INFO)
    .column(required("rating_account_id"))
    .column(Column::new("billed_period_month_d", SqlType::Date).not_null())
    .column(Column::new("has_used_roaming", SqlType::Boolean))
    .column(Column::new("used_gb", SqlType::Double))
    .column(Column::created_now("ingestion_timestamp"))
    .primary_key(&["rating_account_id", "billed_period_month_d"])
}

/// Service interactions aggregated per customer and interaction type.
pub fn raw_customer_interactions() -> TableDef {
  TableDef::new(RAW_CUSTOMER_INTERACTIONS)
    .column(required("customer_id"))
    .column(required("type_subtype"))
    // interactions in the last six months
    .column(Column::new("n", SqlType::Integer))
    // -1 if never
    .column(Column::new("days_since_last", SqlType::Integer))
    .column(Column::created_now("ingestion_timestamp"))
    .primary_key(&["customer_id", "type_subtype"])
}

/// Supervised target: whether the account upsold.
pub fn raw_labels() -> TableDef {
  TableDef::new(RAW_LABELS)
    .column(key("rating_account_id"))
    .column(Column::new("target_label", SqlType::Boolean).not_null())
    .column(Column::created_now("created_at"))
    .primary_key(&["rating_account_id"])
}

// ─── Features ────────────────────────────────────────────────────────────────

pub fn processed_features() -> TableDef {
  TableDef::new(PROCESSED_FEATURES)
    .column(key("rating_account_id"))
    .column(required("customer_id"))
    .columns(MODEL_FEATURES.iter().map(|f| f.column()))
    .column(Column::created_now("created_at"))
    .primary_key(&["rating_account_id"])
}

/// Drift statistics. The timestamp is part of the key so every computation
/// run is kept.
pub fn feature_statistics() -> TableDef {
  TableDef::new(FEATURE_STATISTICS)
    .column(required("feature_name"))
    .column(Column::new("mean_value", SqlType::Double))
    .column(Column::new("std_value", SqlType::Double))
    .column(Column::new("computation_timestamp", SqlType::Timestamp).not_null())
    .primary_key(&["feature_name", "computation_timestamp"])
}

// ─── Model registry ──────────────────────────────────────────────────────────

pub fn model_registry() -> TableDef {
  TableDef::new(MODEL_REGISTRY)
    .column(key("model_id"))
    .column(required("model_name"))
    .column(required("version"))
    // serialized model
    .column(Column::new("model_artifact", SqlType::Blob))
    // hyperparameters and training metadata
    .column(Column::new("metadata", SqlType::Json))
    // trained | validated | deployed | retired
    .column(
      Column::new("status", VARCHAR).default(ColumnDefault::Text("trained")),
    )
    .column(
      Column::new("is_current_model", SqlType::Boolean)
        .default(ColumnDefault::Bool(false)),
    )
    .column(Column::created_now("created_at"))
    .primary_key(&["model_id"])
}

// ─── Predictions ─────────────────────────────────────────────────────────────

pub fn predictions() -> TableDef {
  TableDef::new(PREDICTIONS)
    .column(key("prediction_id"))
    .column(required("rating_account_id"))
    .column(required("customer_id"))
    .column(Column::new("prediction_score", SqlType::Double).not_null())
    .column(Column::new("predicted_class", SqlType::Boolean).not_null())
    .column(required("model_id"))
    .column(Column::created_now("features_created_at").not_null())
    .column(Column::created_now("prediction_timestamp"))
    .primary_key(&["prediction_id"])
}

// ─── Feature importance ──────────────────────────────────────────────────────

pub fn features_importance() -> TableDef {
  TableDef::new(FEATURES_IMPORTANCE)
    .column(key("prediction_id"))
    .column(required("rating_account_id"))
    .column(required("customer_id"))
    .column(required("model_id"))
    .columns(MODEL_FEATURES.iter().map(|f| f.importance_column()))
    .column(Column::created_now("created_at"))
    .primary_key(&["prediction_id"])
    .foreign_key("prediction_id", PREDICTIONS, "prediction_id")
}

// ─── Actions ─────────────────────────────────────────────────────────────────

/// Outreach per customer. `prediction_id` is NULL when no prediction
/// triggered the action.
pub fn actions() -> TableDef {
  TableDef::new(ACTIONS)
    .column(key("action_id"))
    .column(required("customer_id"))
    .column(required("rating_account_id"))
    .column(required("model_id"))
    .column(Column::created_now("action_timestamp"))
    .column(
      Column::new("action_type", VARCHAR)
        .default(ColumnDefault::Text("upselling_offer")),
    )
    .column(Column::new("prediction_id", VARCHAR))
    // sent | accepted | rejected | expired
    .column(Column::new("status", VARCHAR).default(ColumnDefault::Text("sent")))
    .primary_key(&["action_id"])
    .foreign_key("prediction_id", PREDICTIONS, "prediction_id")
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// All tables in declaration order.
pub fn all_tables() -> Vec<TableDef> {
  TableGroup::all().flat_map(TableGroup::tables).collect()
}

/// All table names, sorted.
pub fn table_names() -> Vec<&'static str> {
  let mut names: Vec<_> = all_tables().into_iter().map(|t| t.name).collect();
  names.sort_unstable();
  names
}

pub fn lookup(name: &str) -> Result<TableDef> {
  all_tables()
    .into_iter()
    .find(|t| t.name == name)
    .ok_or_else(|| Error::UnknownTable(name.to_owned()))
}
