//! Developer portfolio API server library.
//!
//! Exposes the building blocks (config, state, error handling, existence
//! gates, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
