//! Writable column allow-lists for every table the API mutates.
//!
//! Column names are the quoted camelCase identifiers used by the schema and
//! double as the JSON body keys.

use crate::fields::{FieldKind, FieldSpec};
use crate::statement::Table;

pub const DEVELOPERS: Table = Table {
    name: "developers",
    key: "id",
    fields: &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Email),
    ],
};

pub const DEVELOPER_INFOS: Table = Table {
    name: "developer_infos",
    key: "id",
    fields: &[
        FieldSpec::required("developerSince", FieldKind::Date),
        FieldSpec::required("preferedOS", FieldKind::Text),
    ],
};

pub const PROJECTS: Table = Table {
    name: "projects",
    key: "id",
    fields: &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("description", FieldKind::Text),
        FieldSpec::required("estimatedTime", FieldKind::Text),
        FieldSpec::required("repository", FieldKind::Text),
        FieldSpec::required("startDate", FieldKind::Date),
        FieldSpec::optional("endDate", FieldKind::Date),
        FieldSpec::required("developerId", FieldKind::BigInt),
    ],
};

/// Body of `POST /projects/{id}/technologies`. Not a table: the name is
/// resolved to a technology id before the link row is written.
pub const TECHNOLOGY_REQUEST: &[FieldSpec] = &[FieldSpec::required("name", FieldKind::Text)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_end_date_is_the_only_optional_column() {
        let optional: Vec<_> = PROJECTS
            .fields
            .iter()
            .filter(|f| !f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(optional, vec!["endDate"]);
    }

    #[test]
    fn generated_ids_are_never_writable() {
        for table in [DEVELOPERS, DEVELOPER_INFOS, PROJECTS] {
            assert!(table.field("id").is_none(), "{} exposes id", table.name);
        }
        assert!(DEVELOPERS.field("developerInfoId").is_none());
    }
}
