use super::domain::{CreateUserRequest, UpdateUserRequest, User};
use super::repository::UserRepository;
use crate::common::{MessageResponse, UserMessageResponse};
use crate::di::{Container, Injectable};
use crate::error::{Result, UsuariosError};
use crate::exception::{ApiError, Operation};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;

type ApiResult<T> = std::result::Result<T, ApiError>;

/// HTTP surface of the `usuarios` resource.
///
/// Each handler runs one repository call and maps the outcome straight to a
/// response; there is no service layer in between.
pub struct UserController {
    repository: Arc<dyn UserRepository>,
}

impl Injectable for UserController {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self::new(container.resolve_trait::<dyn UserRepository>()?))
    }
}

impl UserController {
    pub const BASE_PATH: &'static str = "/usuarios";

    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn router(self: Arc<Self>) -> Router {
        let item_path = format!("{}/{{cedula}}", Self::BASE_PATH);
        Router::new()
            .route(Self::BASE_PATH, get(Self::list).post(Self::create))
            .route(
                &item_path,
                get(Self::get_one).put(Self::update).delete(Self::delete),
            )
            .with_state(self)
    }

    async fn create(
        State(this): State<Arc<Self>>,
        body: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
    ) -> ApiResult<(StatusCode, Json<UserMessageResponse>)> {
        let Json(req) = body.map_err(ApiError::rejected(Operation::Create))?;
        let cedula = req
            .cedula
            .ok_or(UsuariosError::MissingField("cedula"))
            .map_err(ApiError::failed(Operation::Create))?;

        this.repository
            .create(&cedula, req.nombre.as_deref())
            .await
            .map_err(ApiError::failed(Operation::Create))?;

        tracing::info!(%cedula, "Usuario creado");
        // NOT NULL on the column: a stored row always had a name.
        let nombre = req.nombre.unwrap_or_default();
        Ok((
            StatusCode::CREATED,
            Json(UserMessageResponse::new("Usuario creado", cedula, nombre)),
        ))
    }

    async fn list(State(this): State<Arc<Self>>) -> ApiResult<Json<Vec<User>>> {
        let users = this
            .repository
            .find_all()
            .await
            .map_err(ApiError::failed(Operation::List))?;
        Ok(Json(users))
    }

    async fn get_one(
        State(this): State<Arc<Self>>,
        Path(cedula): Path<String>,
    ) -> ApiResult<Json<User>> {
        this.repository
            .find_by_cedula(&cedula)
            .await
            .map_err(ApiError::failed(Operation::Get))?
            .map(Json)
            .ok_or(ApiError::NotFound)
    }

    async fn update(
        State(this): State<Arc<Self>>,
        Path(cedula): Path<String>,
        body: std::result::Result<Json<UpdateUserRequest>, JsonRejection>,
    ) -> ApiResult<Json<UserMessageResponse>> {
        let Json(req) = body.map_err(ApiError::rejected(Operation::Update))?;

        let updated = this
            .repository
            .update_nombre(&cedula, req.nombre.as_deref())
            .await
            .map_err(ApiError::failed(Operation::Update))?;
        if updated == 0 {
            return Err(ApiError::NotFound);
        }

        tracing::info!(%cedula, "Usuario actualizado");
        Ok(Json(UserMessageResponse::new(
            "Usuario actualizado",
            cedula,
            req.nombre.unwrap_or_default(),
        )))
    }

    async fn delete(
        State(this): State<Arc<Self>>,
        Path(cedula): Path<String>,
    ) -> ApiResult<Json<MessageResponse>> {
        let deleted = this
            .repository
            .delete(&cedula)
            .await
            .map_err(ApiError::failed(Operation::Delete))?;
        if deleted == 0 {
            return Err(ApiError::NotFound);
        }

        tracing::info!(%cedula, "Usuario eliminado");
        Ok(Json(MessageResponse::new("Usuario eliminado")))
    }
}
