//! Request body validation against a per-table field allow-list.
//!
//! [`validate`] is a pure function: it reads a JSON object, checks that the
//! fields the operation needs are present, converts each recognised value to
//! a typed [`SqlValue`] and returns them in the allow-list's declared order.
//! Keys outside the allow-list never reach the statement builder.

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::policy::UnknownKeyPolicy;
use crate::types::SqlValue;

/// The value shape a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text that must parse as an e-mail address.
    Email,
    /// `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is kept.
    Date,
    /// A JSON integer, or a string holding one.
    BigInt,
}

impl FieldKind {
    fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "a non-empty string",
            FieldKind::Email => "a valid e-mail address",
            FieldKind::Date => "a date (YYYY-MM-DD)",
            FieldKind::BigInt => "an integer",
        }
    }

    fn null(self) -> SqlValue {
        match self {
            FieldKind::Text | FieldKind::Email => SqlValue::Text(None),
            FieldKind::Date => SqlValue::Date(None),
            FieldKind::BigInt => SqlValue::BigInt(None),
        }
    }
}

/// One entry of a table's allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be present when creating a row.
    pub required: bool,
    /// Accepts an explicit JSON `null`.
    pub nullable: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: true,
        }
    }
}

/// Whether the operation creates a row or patches an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every required field must be present.
    Create,
    /// At least one recognised field must carry a value.
    Patch,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Request must contain information!")]
    EmptyBody,

    #[error("Required keys are: {}", keys.join(","))]
    MissingRequiredFields {
        missing: Vec<&'static str>,
        keys: Vec<&'static str>,
    },

    #[error("Please insert at least one valid key: {}", keys.join(","))]
    EmptyFieldSet { keys: Vec<&'static str> },

    #[error("Unrecognized keys: {}", unknown.join(","))]
    UnknownFields {
        unknown: Vec<String>,
        keys: Vec<&'static str>,
    },

    #[error("Invalid value for {field}: expected {expected}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
    },
}

impl FieldError {
    /// The accepted key list to echo back to the client, if relevant.
    pub fn keys(&self) -> Option<&[&'static str]> {
        match self {
            FieldError::MissingRequiredFields { keys, .. }
            | FieldError::EmptyFieldSet { keys }
            | FieldError::UnknownFields { keys, .. } => Some(keys),
            FieldError::EmptyBody | FieldError::InvalidValue { .. } => None,
        }
    }
}

/// Validated, typed fields in allow-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(Vec<(&'static str, SqlValue)>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: SqlValue) {
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SqlValue)> {
        self.0.iter().map(|(n, v)| (*n, v))
    }
}

/// Names of every field in an allow-list, in declared order.
pub fn field_names(fields: &[FieldSpec]) -> Vec<&'static str> {
    fields.iter().map(|f| f.name).collect()
}

/// Reject a body with no keys at all.
pub fn ensure_not_empty(body: &Map<String, Value>) -> Result<(), FieldError> {
    if body.is_empty() {
        Err(FieldError::EmptyBody)
    } else {
        Ok(())
    }
}

/// Validate `body` against `fields` and return the recognised, typed values.
pub fn validate(
    body: &Map<String, Value>,
    fields: &[FieldSpec],
    mode: ValidationMode,
    policy: UnknownKeyPolicy,
) -> Result<FieldMap, FieldError> {
    if policy == UnknownKeyPolicy::Reject {
        let unknown: Vec<String> = body
            .keys()
            .filter(|k| !fields.iter().any(|f| f.name == k.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(FieldError::UnknownFields {
                unknown,
                keys: field_names(fields),
            });
        }
    }

    if mode == ValidationMode::Create {
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|f| f.required && !body.contains_key(f.name))
            .map(|f| f.name)
            .collect();
        if !missing.is_empty() {
            return Err(FieldError::MissingRequiredFields {
                missing,
                keys: fields.iter().filter(|f| f.required).map(|f| f.name).collect(),
            });
        }
    }

    let mut out = FieldMap::new();
    for spec in fields {
        if let Some(raw) = body.get(spec.name) {
            out.insert(spec.name, convert(spec, raw)?);
        }
    }

    if out.is_empty() {
        return Err(FieldError::EmptyFieldSet {
            keys: field_names(fields),
        });
    }

    Ok(out)
}

fn convert(spec: &FieldSpec, raw: &Value) -> Result<SqlValue, FieldError> {
    let invalid = || FieldError::InvalidValue {
        field: spec.name,
        expected: spec.kind.describe(),
    };

    if raw.is_null() {
        return if spec.nullable {
            Ok(spec.kind.null())
        } else {
            Err(invalid())
        };
    }

    match spec.kind {
        // Required text must not be blank.
        FieldKind::Text => match raw.as_str() {
            Some(s) if !s.trim().is_empty() || spec.nullable => {
                Ok(SqlValue::Text(Some(s.to_string())))
            }
            _ => Err(invalid()),
        },
        FieldKind::Email => match raw.as_str() {
            Some(s) if s.validate_email() => Ok(SqlValue::Text(Some(s.to_string()))),
            _ => Err(invalid()),
        },
        FieldKind::Date => raw
            .as_str()
            .and_then(parse_date)
            .map(|d| SqlValue::Date(Some(d)))
            .ok_or_else(invalid),
        FieldKind::BigInt => json_to_id(raw)
            .map(|n| SqlValue::BigInt(Some(n)))
            .ok_or_else(invalid),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Read an integer id from a JSON number or numeric string.
pub fn json_to_id(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::optional("since", FieldKind::Date),
    ];

    fn body(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn create_requires_every_required_field() {
        let err = validate(
            &body(json!({"name": "Ana"})),
            FIELDS,
            ValidationMode::Create,
            UnknownKeyPolicy::Ignore,
        )
        .unwrap_err();

        assert_matches!(err, FieldError::MissingRequiredFields { ref missing, ref keys }
            if missing == &["email"] && keys == &["name", "email"]);
        assert_eq!(err.to_string(), "Required keys are: name,email");
    }

    #[test]
    fn create_keeps_declared_order_and_drops_unknown_keys() {
        let out = validate(
            &body(json!({"email": "ana@x.com", "id": 99, "name": "Ana"})),
            FIELDS,
            ValidationMode::Create,
            UnknownKeyPolicy::Ignore,
        )
        .unwrap();

        let names: Vec<_> = out.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "email"]);
        assert!(!out.contains("id"));
    }

    #[test]
    fn patch_accepts_a_single_field() {
        let out = validate(
            &body(json!({"name": "Bea"})),
            FIELDS,
            ValidationMode::Patch,
            UnknownKeyPolicy::Ignore,
        )
        .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out.get("name"), Some(&SqlValue::Text(Some("Bea".into()))));
    }

    #[test]
    fn patch_with_only_unknown_keys_is_empty() {
        let err = validate(
            &body(json!({"colour": "red"})),
            FIELDS,
            ValidationMode::Patch,
            UnknownKeyPolicy::Ignore,
        )
        .unwrap_err();

        assert_matches!(err, FieldError::EmptyFieldSet { .. });
        assert_eq!(err.keys(), Some(&["name", "email", "since"][..]));
    }

    #[test]
    fn reject_policy_lists_unknown_keys() {
        let err = validate(
            &body(json!({"name": "Ana", "admin": true})),
            FIELDS,
            ValidationMode::Patch,
            UnknownKeyPolicy::Reject,
        )
        .unwrap_err();

        assert_matches!(err, FieldError::UnknownFields { ref unknown, .. } if unknown == &["admin"]);
    }

    #[test]
    fn null_only_allowed_on_nullable_fields() {
        let out = validate(
            &body(json!({"since": null})),
            FIELDS,
            ValidationMode::Patch,
            UnknownKeyPolicy::Ignore,
        )
        .unwrap();
        assert_eq!(out.get("since"), Some(&SqlValue::Date(None)));

        let err = validate(
            &body(json!({"name": null})),
            FIELDS,
            ValidationMode::Patch,
            UnknownKeyPolicy::Ignore,
        )
        .unwrap_err();
        assert_matches!(err, FieldError::InvalidValue { field: "name", .. });
    }

    #[test]
    fn rejects_malformed_email_and_date() {
        let err = validate(
            &body(json!({"email": "not-an-address"})),
            FIELDS,
            ValidationMode::Patch,
            UnknownKeyPolicy::Ignore,
        )
        .unwrap_err();
        assert_matches!(err, FieldError::InvalidValue { field: "email", .. });

        let err = validate(
            &body(json!({"since": "yesterday"})),
            FIELDS,
            ValidationMode::Patch,
            UnknownKeyPolicy::Ignore,
        )
        .unwrap_err();
        assert_matches!(err, FieldError::InvalidValue { field: "since", .. });
    }

    #[test]
    fn blank_text_is_rejected_for_required_fields() {
        let err = validate(
            &body(json!({"name": "  "})),
            FIELDS,
            ValidationMode::Patch,
            UnknownKeyPolicy::Ignore,
        )
        .unwrap_err();
        assert_matches!(err, FieldError::InvalidValue { field: "name", .. });
        assert_eq!(err.to_string(), "Invalid value for name: expected a non-empty string");
    }

    #[test]
    fn dates_accept_plain_and_rfc3339_forms() {
        assert_eq!(parse_date("2023-02-01"), NaiveDate::from_ymd_opt(2023, 2, 1));
        assert_eq!(
            parse_date("2023-02-01T10:00:00Z"),
            NaiveDate::from_ymd_opt(2023, 2, 1)
        );
    }

    #[test]
    fn ids_parse_from_numbers_and_strings() {
        assert_eq!(json_to_id(&json!(7)), Some(7));
        assert_eq!(json_to_id(&json!("12")), Some(12));
        assert_eq!(json_to_id(&json!("x")), None);
        assert_eq!(json_to_id(&json!(1.5)), None);
    }

    #[test]
    fn empty_body_is_rejected() {
        assert_eq!(ensure_not_empty(&Map::new()), Err(FieldError::EmptyBody));
        assert!(ensure_not_empty(&body(json!({"a": 1}))).is_ok());
    }
}
