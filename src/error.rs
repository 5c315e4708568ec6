use sea_orm::DbErr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UsuariosError>;

#[derive(Debug, Error)]
pub enum UsuariosError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl UsuariosError {
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}
