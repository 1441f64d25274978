//! Row structs returned by the repositories.
//!
//! Column names are camelCase in the schema, so every struct renames its
//! fields for both sqlx and serde.

pub mod developer;
pub mod project;
pub mod technology;
