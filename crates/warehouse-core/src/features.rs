//! The engineered model features.
//!
//! `processed_features` stores one column per entry of [`MODEL_FEATURES`];
//! `features_importance` mirrors the same list with one `<name>_importance`
//! column each, so the two tables cannot drift apart.

use crate::column::{Column, ColumnDefault, SqlType};

/// One engineered feature column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
  pub name:    &'static str,
  pub ty:      SqlType,
  pub default: Option<ColumnDefault>,
}

const fn feature(name: &'static str, ty: SqlType) -> Feature {
  Feature { name, ty, default: None }
}

/// Interaction counters: zero when the customer never got in touch.
const fn count(name: &'static str) -> Feature {
  Feature { name, ty: SqlType::Integer, default: Some(ColumnDefault::Int(0)) }
}

/// Days since the last interaction; -1 means never.
const fn recency(name: &'static str) -> Feature {
  Feature { name, ty: SqlType::Integer, default: Some(ColumnDefault::Int(-1)) }
}

const INT: SqlType = SqlType::Integer;
const DBL: SqlType = SqlType::Double;
const BOOL: SqlType = SqlType::Boolean;

/// Model inputs in column order.
pub const MODEL_FEATURES: &[Feature] = &[
  // demographics
  feature("age", INT),
  // contract
  feature("contract_lifetime_days", INT),
  feature("remaining_binding_days", INT),
  feature("has_special_offer", BOOL),
  feature("is_magenta1_customer", BOOL),
  feature("available_gb", INT),
  feature("gross_mrc", DBL),
  feature("has_done_upselling", BOOL),
  feature("completion_rate", DBL),
  feature("is_bounded", BOOL),
  // one-hot smartphone brand
  feature("is_huawei", BOOL),
  feature("is_oneplus", BOOL),
  feature("is_samsung", BOOL),
  feature("is_xiaomi", BOOL),
  feature("is_iphone", BOOL),
  // customer aggregates
  feature("n_contracts_per_customer", INT),
  // usage statistics
  feature("avg_monthly_usage_gb", DBL),
  feature("total_usage_gb", DBL),
  feature("max_monthly_usage_gb", DBL),
  feature("months_with_roaming", INT),
  feature("ever_used_roaming", BOOL),
  feature("active_usage_months", INT),
  // usage trends
  feature("months_with_no_delta_1mo_change", INT),
  feature("avg_delta_2mo", DBL),
  feature("delta_2mo_volatility", DBL),
  feature("max_delta_2mo_increase", DBL),
  feature("max_delta_2mo_decrease", DBL),
  feature("months_with_delta_2mo_increase", INT),
  feature("months_with_no_delta_2mo_change", INT),
  feature("months_with_delta_3mo_increase", INT),
  feature("months_with_no_delta_3mo_change", INT),
  // most recent deltas
  feature("last_1_delta_1mo", DBL),
  feature("last_2_delta_1mo", DBL),
  feature("last_3_delta_1mo", DBL),
  feature("last_1_delta_2mo", DBL),
  feature("last_2_delta_2mo", DBL),
  feature("last_1_delta_3mo", DBL),
  // customer service interactions
  count("n_rechnungsanfragen"),
  count("n_produkte_services_tarifdetails"),
  count("n_prolongation"),
  count("n_produkte_services_tarifwechsel"),
  recency("days_since_last_rechnungsanfragen"),
  recency("days_since_last_produkte_services_tarifdetails"),
  recency("days_since_last_prolongation"),
  recency("days_since_last_produkte_services_tarifwechsel"),
  // usage percentile buckets
  count("times_in_p1"),
  count("times_in_p2"),
  count("times_in_p3"),
  count("times_in_p4"),
  count("times_in_p5"),
];

impl Feature {
  /// The column holding this feature in `processed_features`.
  pub fn column(&self) -> Column {
    let column = Column::new(self.name, self.ty);
    match self.default {
      Some(default) => column.default(default),
      None => column,
    }
  }

  pub fn importance_name(&self) -> String {
    format!("{}_importance", self.name)
  }

  /// The attribution column in `features_importance`. Always `DOUBLE`; it
  /// keeps the source column's default.
  pub fn importance_column(&self) -> Column {
    let column = Column::new(self.importance_name(), SqlType::Double);
    match self.default {
      Some(default) => column.default(default),
      None => column,
    }
  }
}
