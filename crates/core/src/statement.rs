//! Parameter-bound INSERT / UPDATE construction for runtime column sets.
//!
//! Identifiers come only from a [`Table`] allow-list and are double-quoted.
//! Values are never written into the SQL text: each one becomes a `$n`
//! placeholder and travels in [`Statement::params`].

use crate::fields::{field_names, FieldMap, FieldSpec};
use crate::types::SqlValue;

/// A table and the columns a request is allowed to write.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    /// Primary key column, always allowed as an update filter.
    pub key: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Table {
    pub fn field(&self, column: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == column)
    }

    pub fn keys(&self) -> Vec<&'static str> {
        field_names(self.fields)
    }

    fn allows_filter(&self, column: &str) -> bool {
        column == self.key || self.field(column).is_some()
    }
}

/// `WHERE <column> = $1` for updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: SqlValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Update(Filter),
}

/// SQL text plus its positional parameters, in `$1..$n` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub params: Vec<SqlValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatementError {
    #[error("no columns to write on {table}")]
    EmptyFieldSet {
        table: &'static str,
        keys: Vec<&'static str>,
    },

    #[error("column {column} is not writable on {table}")]
    UnknownColumn {
        table: &'static str,
        column: String,
    },
}

/// Quote a SQL identifier with double quotes (PostgreSQL convention).
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Build an INSERT or UPDATE for `table` writing exactly the columns in
/// `fields`, in their iteration order.
pub fn build(
    table: &Table,
    operation: Operation,
    fields: &FieldMap,
) -> Result<Statement, StatementError> {
    if fields.is_empty() {
        return Err(StatementError::EmptyFieldSet {
            table: table.name,
            keys: table.keys(),
        });
    }

    if let Some((column, _)) = fields.iter().find(|(c, _)| table.field(c).is_none()) {
        return Err(StatementError::UnknownColumn {
            table: table.name,
            column: column.to_string(),
        });
    }

    let columns = fields
        .iter()
        .map(|(c, _)| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");

    match operation {
        Operation::Insert => {
            let placeholders = placeholders(1, fields.len());
            Ok(Statement {
                text: format!(
                    "INSERT INTO {} ({columns}) VALUES ({placeholders}) RETURNING *",
                    quote_ident(table.name)
                ),
                params: fields.iter().map(|(_, v)| v.clone()).collect(),
            })
        }
        Operation::Update(filter) => {
            if !table.allows_filter(filter.column) {
                return Err(StatementError::UnknownColumn {
                    table: table.name,
                    column: filter.column.to_string(),
                });
            }
            let placeholders = placeholders(2, fields.len());
            let mut params = Vec::with_capacity(fields.len() + 1);
            params.push(filter.value);
            params.extend(fields.iter().map(|(_, v)| v.clone()));
            Ok(Statement {
                text: format!(
                    "UPDATE {} SET ({columns}) = ROW({placeholders}) WHERE {} = $1 RETURNING *",
                    quote_ident(table.name),
                    quote_ident(filter.column)
                ),
                params,
            })
        }
    }
}

fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}
