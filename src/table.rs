//! Rectangular record sets
//!
//! Vega-Lite wants one list of records per layer with the same keys in
//! every record. A [`Table`] keeps its column list and pads each row with
//! `null` for attributes the row's node or edge did not have.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

/// One row of a record set
pub type Record = Map<String, Value>;

/// Vega-Lite measurement type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Nominal,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// Build a table whose columns are `generated` (in order) followed by
    /// every other key found in `rows` (sorted). Missing keys become `null`.
    pub fn from_rows(generated: &[&str], rows: Vec<Record>) -> Self {
        let extra: BTreeSet<&String> = rows
            .iter()
            .flat_map(|row| row.keys())
            .filter(|key| !generated.contains(&key.as_str()))
            .collect();

        let columns: Vec<String> = generated
            .iter()
            .map(|c| c.to_string())
            .chain(extra.into_iter().cloned())
            .collect();

        let rows = rows
            .into_iter()
            .map(|mut row| {
                for column in &columns {
                    row.entry(column.clone()).or_insert(Value::Null);
                }
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Values of one column, `null` for rows without it
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(name).unwrap_or(&Value::Null))
    }

    /// A column is numeric when all of its non-null values are numbers
    pub fn is_numeric(&self, name: &str) -> bool {
        self.has_column(name) && self.column(name).all(|v| v.is_number() || v.is_null())
    }

    pub fn field_type(&self, name: &str) -> FieldType {
        if self.is_numeric(name) && self.column(name).any(Value::is_number) {
            FieldType::Quantitative
        } else {
            FieldType::Nominal
        }
    }

    /// Keep only rows whose `column` value is one of `keep`.
    ///
    /// Values are compared by their string form, so numeric identifiers
    /// match their decimal spelling. Identifiers that match nothing are
    /// ignored.
    pub fn retain_matching(&self, column: &str, keep: &[String]) -> Table {
        let rows = self
            .rows
            .iter()
            .filter(|row| {
                row.get(column)
                    .map(value_key)
                    .is_some_and(|key| keep.contains(&key))
            })
            .cloned()
            .collect();

        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    pub fn to_values(&self) -> Value {
        Value::Array(self.rows.iter().cloned().map(Value::Object).collect())
    }
}

fn value_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
