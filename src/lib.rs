//! # usuarios
//!
//! HTTP user registry keyed by national ID (`cedula`), persisted in SQLite.
//!
//! | Route                       | Statement                                       |
//! |-----------------------------|-------------------------------------------------|
//! | `POST /usuarios`            | `INSERT INTO usuarios (cedula, nombre)`         |
//! | `GET /usuarios`             | `SELECT * FROM usuarios`                        |
//! | `GET /usuarios/{cedula}`    | `SELECT * FROM usuarios WHERE cedula = ?`       |
//! | `PUT /usuarios/{cedula}`    | `UPDATE usuarios SET nombre = ? WHERE cedula = ?` |
//! | `DELETE /usuarios/{cedula}` | `DELETE FROM usuarios WHERE cedula = ?`         |
//!
//! The database handle is built once at startup, placed in a [`Container`],
//! and injected into the [`UserController`](modules::user::UserController)
//! through the [`UserRepository`](modules::user::UserRepository) trait.
//!
//! ```rust,no_run
//! use usuarios::{app_module, infrastructure::Database};
//!
//! # async fn run() -> usuarios::Result<()> {
//! let database = Database::connect("sqlite://usuarios.db?mode=rwc").await?;
//! database.ensure_schema().await?;
//!
//! let container = app_module::build_container(&database)?;
//! let router = app_module::build_router(&container)?;
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

pub mod app_module;
pub mod common;
pub mod config;
pub mod di;
pub mod error;
pub mod exception;
pub mod infrastructure;
pub mod lifecycle;
pub mod module;
pub mod modules;

pub use config::{AppConfig, ConfigService};
pub use di::{Container, ContainerBuilder, Injectable};
pub use error::{Result, UsuariosError};
pub use module::Module;
