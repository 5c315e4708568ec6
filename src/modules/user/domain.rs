use super::entity;
use serde::{Deserialize, Serialize};

/// A registered person, keyed by national ID (`cedula`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub cedula: String,
    pub nombre: String,
}

impl User {
    pub fn new(cedula: impl Into<String>, nombre: impl Into<String>) -> Self {
        Self {
            cedula: cedula.into(),
            nombre: nombre.into(),
        }
    }
}

impl From<entity::Model> for User {
    fn from(model: entity::Model) -> Self {
        Self {
            cedula: model.cedula,
            nombre: model.nombre,
        }
    }
}

/// Fields are optional so an absent `nombre` reaches the table as NULL and
/// is rejected by its NOT NULL constraint.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub cedula: Option<String>,
    pub nombre: Option<String>,
}

/// Only the name is mutable; the `cedula` comes from the path.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub nombre: Option<String>,
}
