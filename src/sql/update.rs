//! Accumulates `column = $n` assignments for a single-table UPDATE.

use crate::sql::SqlValue;

/// Single-use SET clause builder. Placeholders are allocated from one counter,
/// so the caller takes `next_position()` for the trailing WHERE placeholder.
#[derive(Debug)]
pub struct UpdateBuilder {
    clauses: Vec<String>,
    args: Vec<SqlValue>,
    position: usize,
}

impl Default for UpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateBuilder {
    pub fn new() -> Self {
        UpdateBuilder {
            clauses: Vec::new(),
            args: Vec::new(),
            position: 1,
        }
    }

    /// The column is not validated here; callers pass allow-listed names only.
    pub fn add_field(&mut self, column: &str, value: SqlValue) {
        self.clauses.push(format!("{} = ${}", column, self.position));
        self.args.push(value);
        self.position += 1;
    }

    pub fn has_updates(&self) -> bool {
        !self.clauses.is_empty()
    }

    pub fn build_set_clause(&self) -> String {
        self.clauses.join(", ")
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    pub fn into_args(self) -> Vec<SqlValue> {
        self.args
    }

    pub fn next_position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder() {
        let qb = UpdateBuilder::new();
        assert!(!qb.has_updates());
        assert_eq!(qb.build_set_clause(), "");
        assert!(qb.args().is_empty());
        assert_eq!(qb.next_position(), 1);
    }

    #[test]
    fn placeholders_follow_call_order() {
        let columns = ["warehouse_name", "location_description", "price", "id_role"];
        for n in 1..=columns.len() {
            let mut qb = UpdateBuilder::new();
            for (i, col) in columns.iter().take(n).enumerate() {
                qb.add_field(col, SqlValue::I64(i as i64));
            }
            let clause = qb.build_set_clause();
            let parts: Vec<&str> = clause.split(", ").collect();
            assert_eq!(parts.len(), n);
            for (i, part) in parts.iter().enumerate() {
                assert_eq!(*part, format!("{} = ${}", columns[i], i + 1));
            }
            assert_eq!(qb.args().len(), n);
            for (i, arg) in qb.args().iter().enumerate() {
                assert_eq!(*arg, SqlValue::I64(i as i64));
            }
            assert_eq!(qb.next_position(), n + 1);
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        let mut qb = UpdateBuilder::new();
        qb.add_field("warehouse_name", "Central".into());
        assert_eq!(qb.build_set_clause(), qb.build_set_clause());
        assert_eq!(qb.next_position(), 2);
    }
}
