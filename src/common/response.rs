use serde::{Deserialize, Serialize};

/// Body of responses that only confirm an outcome, e.g. `{"message": "Usuario eliminado"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Confirmation that also echoes the stored user.
///
/// Create and update both answer with this shape:
/// `{"message": "...", "cedula": "...", "nombre": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessageResponse {
    pub message: String,
    pub cedula: String,
    pub nombre: String,
}

impl UserMessageResponse {
    pub fn new(
        message: impl Into<String>,
        cedula: impl Into<String>,
        nombre: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            cedula: cedula.into(),
            nombre: nombre.into(),
        }
    }
}
