//! The six table groups and their declaration order.
//!
//! Groups are declared in variant order. The only cross-group constraint is
//! that tables holding a foreign key to `predictions` (feature importance,
//! actions) come after the predictions group; [`TableGroup::dependencies`]
//! derives that from the table definitions themselves.

use serde::Serialize;
use strum::IntoEnumIterator as _;

use crate::{Error, Result, catalog, table::TableDef};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  strum::Display,
  strum::EnumIter,
  strum::EnumString,
  strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TableGroup {
  RawData,
  Features,
  ModelRegistry,
  Predictions,
  FeatureImportance,
  Actions,
}

impl TableGroup {
  /// All groups in declaration order.
  pub fn all() -> impl Iterator<Item = Self> { Self::iter() }

  /// Parse a group name such as `"raw_data"` or `"feature-importance"`.
  pub fn parse(name: &str) -> Result<Self> {
    name
      .trim()
      .replace('-', "_")
      .to_lowercase()
      .parse()
      .map_err(|_| Error::UnknownGroup(name.to_owned()))
  }

  /// Human-readable name used in progress output.
  pub fn label(self) -> &'static str {
    match self {
      Self::RawData => "raw data",
      Self::Features => "feature",
      Self::ModelRegistry => "model registry",
      Self::Predictions => "prediction",
      Self::FeatureImportance => "feature importance",
      Self::Actions => "actions",
    }
  }

  pub fn tables(self) -> Vec<TableDef> {
    match self {
      Self::RawData => vec![
        catalog::raw_core_data(),
        catalog::raw_usage_info(),
        catalog::raw_customer_interactions(),
        catalog::raw_labels(),
      ],
      Self::Features => {
        vec![catalog::processed_features(), catalog::feature_statistics()]
      }
      Self::ModelRegistry => vec![catalog::model_registry()],
      Self::Predictions => vec![catalog::predictions()],
      Self::FeatureImportance => vec![catalog::features_importance()],
      Self::Actions => vec![catalog::actions()],
    }
  }

  /// The group that declares `table`, if any.
  pub fn owning(table: &str) -> Option<Self> {
    Self::all().find(|g| g.tables().iter().any(|t| t.name == table))
  }

  /// Other groups whose tables this group's foreign keys point at.
  pub fn dependencies(self) -> Vec<Self> {
    let mut deps: Vec<Self> = self
      .tables()
      .iter()
      .flat_map(TableDef::referenced_tables)
      .filter_map(Self::owning)
      .filter(|g| *g != self)
      .collect();
    deps.sort_by_key(|g| *g as u8);
    deps.dedup();
    deps
  }

  /// DDL for every table in the group, separated by blank lines.
  pub fn create_script(self) -> String {
    self
      .tables()
      .iter()
      .map(TableDef::create_sql)
      .collect::<Vec<_>>()
      .join("\n\n")
  }
}

/// DDL for the whole warehouse in declaration order.
pub fn schema_script() -> String {
  TableGroup::all()
    .map(|g| format!("-- {} tables\n{}", g.label(), g.create_script()))
    .collect::<Vec<_>>()
    .join("\n\n")
}
