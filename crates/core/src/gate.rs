//! Existence checks that run ahead of a handler.
//!
//! A gate starts `Unchecked`, resolves the entity id from the request, and
//! moves to `Present` or `Absent` once the row count is known. Only a
//! `Present` gate lets the request through.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::fields::json_to_id;
use crate::types::DbId;

/// Entities that can be guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Developer,
    Project,
}

impl EntityKind {
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Developer => "developers",
            EntityKind::Project => "projects",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Developer => "Developer",
            EntityKind::Project => "Project",
        }
    }
}

/// Body key consulted when the path carries no id.
pub const BODY_DEVELOPER_ID: &str = "developerId";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unchecked,
    Present(DbId),
    Absent,
}

#[derive(Debug, Clone, Copy)]
pub struct ExistenceGate {
    kind: EntityKind,
    state: GateState,
}

impl ExistenceGate {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            state: GateState::Unchecked,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Record the outcome of the existence query. An id that could not be
    /// resolved is treated as absent without querying.
    pub fn observe(&mut self, id: Option<DbId>, rows: u64) {
        self.state = match id {
            Some(id) if rows > 0 => GateState::Present(id),
            _ => GateState::Absent,
        };
    }

    /// Let the request through, or short-circuit it with a not-found error.
    pub fn into_result(self) -> Result<DbId, CoreError> {
        match self.state {
            GateState::Present(id) => Ok(id),
            GateState::Absent => Err(CoreError::NotFound {
                entity: self.kind.label(),
                id: None,
            }),
            GateState::Unchecked => Err(CoreError::Internal(format!(
                "{} gate consulted before the existence check",
                self.kind.label()
            ))),
        }
    }
}

/// Pick the id from the path parameter, falling back to `developerId` in
/// the body only when the path does not carry one.
pub fn resolve_id(path: Option<&str>, body: Option<&Map<String, Value>>) -> Option<DbId> {
    match path {
        Some(raw) => raw.trim().parse().ok(),
        None => body
            .and_then(|b| b.get(BODY_DEVELOPER_ID))
            .and_then(json_to_id),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn path_wins_over_body() {
        let body = json!({"developerId": 9}).as_object().cloned().unwrap();
        assert_eq!(resolve_id(Some("3"), Some(&body)), Some(3));
        assert_eq!(resolve_id(None, Some(&body)), Some(9));
    }

    #[test]
    fn unparsable_path_does_not_fall_back() {
        let body = json!({"developerId": 9}).as_object().cloned().unwrap();
        assert_eq!(resolve_id(Some("abc"), Some(&body)), None);
        assert_eq!(resolve_id(None, None), None);
    }

    #[test]
    fn present_after_a_matching_row() {
        let mut gate = ExistenceGate::new(EntityKind::Project);
        assert_eq!(gate.state(), GateState::Unchecked);
        gate.observe(Some(4), 1);
        assert_eq!(gate.state(), GateState::Present(4));
        assert_eq!(gate.into_result().unwrap(), 4);
    }

    #[test]
    fn absent_short_circuits_with_not_found() {
        let mut gate = ExistenceGate::new(EntityKind::Developer);
        gate.observe(Some(4), 0);
        let err = gate.into_result().unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Developer", .. });
        assert_eq!(err.to_string(), "Developer not found!");

        let mut gate = ExistenceGate::new(EntityKind::Developer);
        gate.observe(None, 1);
        assert_eq!(gate.state(), GateState::Absent);
    }

    #[test]
    fn unchecked_gate_never_passes() {
        let gate = ExistenceGate::new(EntityKind::Project);
        assert_matches!(gate.into_result(), Err(CoreError::Internal(_)));
    }
}
