use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::module::Module;
use std::sync::Arc;

pub mod controller;
pub mod domain;
pub mod entity;
pub mod repository;

pub use controller::UserController;
pub use domain::{CreateUserRequest, UpdateUserRequest, User};
pub use repository::{SeaOrmUserRepository, UserRepository};

/// Registers the SeaORM repository and binds it as `dyn UserRepository`.
///
/// Expects a `DatabaseConnection` to already be in the container.
pub struct UserModule;

impl Module for UserModule {
    fn register(container: &mut Container) -> Result<()> {
        let repository = SeaOrmUserRepository::inject(container)?;
        container
            .register(repository)
            .register_trait::<dyn UserRepository, SeaOrmUserRepository, _>(|r| {
                r as Arc<dyn UserRepository>
            });
        Ok(())
    }
}
