//! Pre-handler guards, expressed as extractors.
//!
//! - [`exists::DeveloperExists`] -- 404 unless the `{id}` developer exists.
//! - [`exists::ProjectExists`] -- 404 unless the `{id}` project exists.
//! - [`exists::ReferencedDeveloper`] -- 404 unless the body's `developerId` exists.
//! - [`exists::InfoAvailable`] -- developer exists and has no info row yet.

pub mod exists;
