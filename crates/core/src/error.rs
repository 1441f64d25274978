use crate::fields::FieldError;
use crate::statement::StatementError;
use crate::technology::LinkOp;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found!")]
    NotFound {
        entity: &'static str,
        id: Option<DbId>,
    },

    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error("{0}")]
    Conflict(String),

    #[error(
        "Please insert technologies exactly as one of the following examples: {}",
        known.join(", ")
    )]
    UnknownTechnology {
        name: String,
        known: Vec<String>,
        op: LinkOp,
    },

    #[error("Technology is already applied to this project!")]
    DuplicateTechnology { name: String },

    #[error("Technology not found in project applied technologies!")]
    TechnologyNotLinked { name: String },

    #[error("Please insert all required fields to update uncreated information!")]
    IncompleteInfoCreation { keys: Vec<&'static str> },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StatementError> for CoreError {
    fn from(err: StatementError) -> Self {
        match err {
            StatementError::EmptyFieldSet { keys, .. } => {
                CoreError::Validation(FieldError::EmptyFieldSet { keys })
            }
            other => CoreError::Internal(other.to_string()),
        }
    }
}
