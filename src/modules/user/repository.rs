use super::domain::User;
use super::entity;
use crate::di::{Container, Injectable};
use crate::error::Result;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, Statement,
};
use std::sync::Arc;

/// Storage port for users. Every method issues exactly one statement.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails if the `cedula` is already taken or `nombre` is absent.
    async fn create(&self, cedula: &str, nombre: Option<&str>) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<User>>;

    async fn find_by_cedula(&self, cedula: &str) -> Result<Option<User>>;

    /// Returns the number of rows updated (0 or 1). An absent `nombre` only
    /// fails when a row matches.
    async fn update_nombre(&self, cedula: &str, nombre: Option<&str>) -> Result<u64>;

    /// Returns the number of rows deleted (0 or 1).
    async fn delete(&self, cedula: &str) -> Result<u64>;
}

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Injectable for SeaOrmUserRepository {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self::new(container.resolve::<DatabaseConnection>()?))
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, cedula: &str, nombre: Option<&str>) -> Result<()> {
        // Raw so a missing name binds as NULL and trips the NOT NULL constraint.
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            "INSERT INTO usuarios (cedula, nombre) VALUES (?, ?)",
            [cedula.into(), nombre.map(str::to_owned).into()],
        );
        self.db.execute(stmt).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = entity::Entity::find().all(self.db.as_ref()).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_cedula(&self, cedula: &str) -> Result<Option<User>> {
        let row = entity::Entity::find_by_id(cedula.to_owned())
            .one(self.db.as_ref())
            .await?;
        Ok(row.map(User::from))
    }

    async fn update_nombre(&self, cedula: &str, nombre: Option<&str>) -> Result<u64> {
        let result = entity::Entity::update_many()
            .col_expr(
                entity::Column::Nombre,
                Expr::value(nombre.map(str::to_owned)),
            )
            .filter(entity::Column::Cedula.eq(cedula))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete(&self, cedula: &str) -> Result<u64> {
        let result = entity::Entity::delete_by_id(cedula.to_owned())
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}
