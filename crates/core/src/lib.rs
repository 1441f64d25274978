//! Domain logic for the developer portfolio service.
//!
//! Nothing in this crate touches the database or HTTP layer: it validates
//! request bodies against per-table allow-lists, turns the result into
//! parameter-bound SQL, and models the existence checks that guard handlers.

pub mod error;
pub mod fields;
pub mod gate;
pub mod policy;
pub mod statement;
pub mod tables;
pub mod technology;
pub mod types;
