//! Request handlers.
//!
//! Each handler validates its body against a table allow-list, hands the
//! resulting field map to a repository in `devfolio_db`, and maps errors
//! via [`AppError`](crate::error::AppError). Existence gates run before the
//! handler body as extractors.

pub mod developer;
pub mod project;

use devfolio_core::fields::{validate, FieldMap, FieldSpec, ValidationMode};

use crate::error::AppResult;
use crate::extract::Body;
use crate::state::AppState;

/// Validate a body with the configured unknown-key policy.
fn validate_body(
    state: &AppState,
    body: &Body,
    fields: &[FieldSpec],
    mode: ValidationMode,
) -> AppResult<FieldMap> {
    Ok(validate(body, fields, mode, state.config.unknown_key_policy)?)
}
