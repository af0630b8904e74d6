//! Allow-list and merge policy for partial updates.
//!
//! A [`FieldSet`] is a sparse, ordered list of `(column, value)` pairs. Merging
//! it against an entity's [`AllowedColumns`] decides which pairs become SET
//! assignments: unknown columns fail the whole update, absent values and empty
//! strings are skipped.

use crate::error::AppError;
use crate::sql::{SqlValue, UpdateBuilder};
use serde_json::{Map, Value};

/// Columns an entity permits in a partial update.
#[derive(Debug, Clone, Copy)]
pub struct AllowedColumns(pub &'static [&'static str]);

impl AllowedColumns {
    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|c| *c == column)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Vec<(String, Option<SqlValue>)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; `None` means "not provided".
    pub fn with<V: Into<SqlValue>>(mut self, column: &str, value: Option<V>) -> Self {
        self.fields.push((column.to_string(), value.map(Into::into)));
        self
    }

    /// Build from a JSON object. Keys come out in sorted order, so iteration is
    /// deterministic; `null` maps to "not provided".
    pub fn from_json(map: &Map<String, Value>) -> Result<Self, AppError> {
        let mut set = FieldSet::new();
        for (column, value) in map {
            let value = match value {
                Value::Null => None,
                v => Some(SqlValue::from_json(v)?),
            };
            set.fields.push((column.clone(), value));
        }
        Ok(set)
    }
}

impl IntoIterator for FieldSet {
    type Item = (String, Option<SqlValue>);
    type IntoIter = std::vec::IntoIter<(String, Option<SqlValue>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Whether a provided value counts as an update. Empty strings mean
/// "leave unchanged", not "clear".
pub fn is_present(value: &SqlValue) -> bool {
    match value {
        SqlValue::Null => false,
        v => v.as_str().map_or(true, |s| !s.is_empty()),
    }
}

/// Apply the merge policy and return a populated builder.
pub fn merge(allowed: &AllowedColumns, fields: FieldSet) -> Result<UpdateBuilder, AppError> {
    let mut qb = UpdateBuilder::new();
    for (column, value) in fields {
        if !allowed.contains(&column) {
            return Err(AppError::DisallowedColumn(column));
        }
        let Some(value) = value else { continue };
        if !is_present(&value) {
            continue;
        }
        qb.add_field(&column, value);
    }
    if !qb.has_updates() {
        return Err(AppError::NoFieldsToUpdate);
    }
    Ok(qb)
}

/// Target of a partial update: table, natural key and allow-list.
#[derive(Debug, Clone, Copy)]
pub struct PartialUpdate {
    pub table: &'static str,
    pub key_column: &'static str,
    pub allowed: AllowedColumns,
}

impl PartialUpdate {
    /// Render `UPDATE <table> SET ... WHERE <key> = $N` and its bind list,
    /// with the key bound last.
    pub fn statement(&self, fields: FieldSet, key: SqlValue) -> Result<(String, Vec<SqlValue>), AppError> {
        let qb = merge(&self.allowed, fields)?;
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${}",
            self.table,
            qb.build_set_clause(),
            self.key_column,
            qb.next_position()
        );
        let mut args = qb.into_args();
        args.push(key);
        Ok((sql, args))
    }
}
