use crate::common::MessageResponse;
use crate::error::UsuariosError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Usuario no encontrado";

/// The storage operation a request was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    /// Client-facing message for a storage failure. Driver details stay in the logs.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Error al crear el usuario",
            Operation::List => "Error al obtener los usuarios",
            Operation::Get => "Error al obtener el usuario",
            Operation::Update => "Error al actualizar el usuario",
            Operation::Delete => "Error al eliminar el usuario",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user not found")]
    NotFound,

    #[error("{operation} failed: {source}")]
    Failed {
        operation: Operation,
        #[source]
        source: UsuariosError,
    },
}

impl ApiError {
    pub fn failed(operation: Operation) -> impl FnOnce(UsuariosError) -> Self {
        move |source| ApiError::Failed { operation, source }
    }

    /// A body axum could not parse never reaches storage; the client sees the
    /// operation's generic failure like any other 500.
    pub fn rejected(operation: Operation) -> impl FnOnce(JsonRejection) -> Self {
        move |rejection| ApiError::Failed {
            operation,
            source: UsuariosError::InvalidBody(rejection.body_text()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound => {
                (status, Json(MessageResponse::new(NOT_FOUND_MESSAGE))).into_response()
            }
            ApiError::Failed { operation, source } => {
                let operation_name: &'static str = operation.into();
                tracing::error!(
                    operation = operation_name,
                    error = %source,
                    "Storage operation failed"
                );
                (
                    status,
                    Json(json!({ "error": operation.failure_message() })),
                )
                    .into_response()
            }
        }
    }
}
