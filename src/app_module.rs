use crate::di::{Container, ContainerBuilder, Injectable};
use crate::error::Result;
use crate::infrastructure::Database;
use crate::module::Module;
use crate::modules::user::{UserController, UserModule};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Root application module
pub struct AppModule;

impl Module for AppModule {
    fn register(container: &mut Container) -> Result<()> {
        UserModule::register(container)
    }
}

/// Container with the database pool registered and every module bound
pub fn build_container(database: &Database) -> Result<Container> {
    let mut container = ContainerBuilder::new()
        .register(database.connection().clone())
        .build();
    AppModule::register(&mut container)?;
    Ok(container)
}

/// HTTP router for every controller, wrapped in request tracing and permissive CORS
pub fn build_router(container: &Container) -> Result<Router> {
    let users = Arc::new(UserController::inject(container)?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(users.router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    ))
}
