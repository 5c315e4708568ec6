//! Lifecycle hook traits

use super::LifecycleError;
use async_trait::async_trait;

/// Called once before the server starts accepting requests
///
/// The database uses this to make sure its schema exists.
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError>;
}

/// Called once after the server has stopped accepting requests
///
/// Services are destroyed in reverse order of their initialization.
#[async_trait]
pub trait OnModuleDestroy: Send + Sync {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError>;
}
