//! Table definitions and their `CREATE TABLE IF NOT EXISTS` rendering.

use serde::Serialize;

use crate::column::Column;

/// A `FOREIGN KEY (column) REFERENCES table(references_column)` constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
  pub column:            &'static str,
  pub references_table:  &'static str,
  pub references_column: &'static str,
}

impl ForeignKey {
  fn to_sql(&self) -> String {
    format!(
      "FOREIGN KEY ({}) REFERENCES {}({})",
      self.column, self.references_table, self.references_column
    )
  }
}

/// The full declaration of one warehouse table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDef {
  pub name:         &'static str,
  pub columns:      Vec<Column>,
  pub primary_key:  Vec<&'static str>,
  pub foreign_keys: Vec<ForeignKey>,
}

impl TableDef {
  pub fn new(name: &'static str) -> Self {
    Self {
      name,
      columns: Vec::new(),
      primary_key: Vec::new(),
      foreign_keys: Vec::new(),
    }
  }

  #[must_use]
  pub fn column(mut self, column: Column) -> Self {
    self.columns.push(column);
    self
  }

  #[must_use]
  pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
    self.columns.extend(columns);
    self
  }

  #[must_use]
  pub fn primary_key(mut self, columns: &[&'static str]) -> Self {
    self.primary_key = columns.to_vec();
    self
  }

  #[must_use]
  pub fn foreign_key(
    mut self,
    column: &'static str,
    references_table: &'static str,
    references_column: &'static str,
  ) -> Self {
    self.foreign_keys.push(ForeignKey {
      column,
      references_table,
      references_column,
    });
    self
  }

  pub fn get_column(&self, name: &str) -> Option<&Column> {
    self.columns.iter().find(|c| c.name == name)
  }

  pub fn column_names(&self) -> impl Iterator<Item = &str> {
    self.columns.iter().map(|c| c.name.as_ref())
  }

  /// Tables this one must be declared after.
  pub fn referenced_tables(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.foreign_keys.iter().map(|fk| fk.references_table)
  }

  /// Idempotent DDL for this table. Running it against a store that already
  /// has a table of this name is a no-op, whatever that table looks like.
  pub fn create_sql(&self) -> String {
    let mut lines: Vec<String> =
      self.columns.iter().map(ToString::to_string).collect();

    if !self.primary_key.is_empty() {
      lines.push(format!("PRIMARY KEY ({})", self.primary_key.join(", ")));
    }
    lines.extend(self.foreign_keys.iter().map(ForeignKey::to_sql));

    format!(
      "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);",
      self.name,
      lines.join(",\n    ")
    )
  }
}
