//! Startup and shutdown hooks
//!
//! ```text
//! 1. Configuration loading
//! 2. Database connection + DI container
//! 3. OnModuleInit      (schema creation)
//! 4. Server start
//!    [running...]
//! 5. Shutdown signal   (SIGTERM/SIGINT)
//! 6. OnModuleDestroy   (pool close), reverse order
//! ```

mod application;
mod error;
mod manager;
mod shutdown;
mod traits;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use manager::LifecycleManager;
pub use shutdown::shutdown_signal;
pub use traits::{OnModuleDestroy, OnModuleInit};
