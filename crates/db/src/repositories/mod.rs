//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Writes take a validated
//! [`FieldMap`](devfolio_core::fields::FieldMap) and go through the dynamic
//! statement builder; reads use fixed SQL.

pub mod developer_info_repo;
pub mod developer_repo;
pub mod existence_repo;
pub mod project_repo;
pub mod technology_repo;

pub use developer_info_repo::DeveloperInfoRepo;
pub use developer_repo::DeveloperRepo;
pub use existence_repo::ExistenceRepo;
pub use project_repo::ProjectRepo;
pub use technology_repo::TechnologyRepo;
