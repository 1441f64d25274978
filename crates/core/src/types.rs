use chrono::NaiveDate;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A typed value ready to be bound as a positional SQL parameter.
///
/// The inner `Option` carries SQL `NULL` while keeping the column type, so
/// PostgreSQL never has to guess the type of an untyped null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(Option<String>),
    BigInt(Option<i64>),
    Date(Option<NaiveDate>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        match self {
            SqlValue::Text(v) => v.is_none(),
            SqlValue::BigInt(v) => v.is_none(),
            SqlValue::Date(v) => v.is_none(),
        }
    }
}

impl From<DbId> for SqlValue {
    fn from(id: DbId) -> Self {
        SqlValue::BigInt(Some(id))
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(Some(s.to_string()))
    }
}
