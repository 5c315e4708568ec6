use crate::lifecycle::{LifecycleError, OnModuleDestroy, OnModuleInit};
use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr};

pub const CREATE_USUARIOS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS usuarios (cedula TEXT PRIMARY KEY, nombre TEXT NOT NULL)";

/// Owner of the SQLite connection pool.
///
/// The pool itself is cheap to clone; repositories receive their own clone
/// through the container while this value drives schema creation and close.
#[derive(Clone)]
pub struct Database {
    conn: DatabaseConnection,
}

impl Database {
    pub async fn connect(url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url.to_owned());
        options.sqlx_logging(false);

        let conn = SeaDatabase::connect(options).await?;
        tracing::info!(url, "Connected to SQLite database");
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        self.conn.execute_unprepared(CREATE_USUARIOS_TABLE).await?;
        Ok(())
    }
}

#[async_trait]
impl OnModuleInit for Database {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError> {
        tracing::info!("Database: ensuring usuarios table exists");
        self.ensure_schema()
            .await
            .map_err(|e| LifecycleError::init_failed(e.to_string()))
    }
}

#[async_trait]
impl OnModuleDestroy for Database {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError> {
        tracing::info!("Database: closing connection pool");
        self.conn
            .clone()
            .close()
            .await
            .map_err(|e| LifecycleError::shutdown_failed(e.to_string()))
    }
}
