//! Lifecycle-specific error types

use thiserror::Error;

/// Errors raised while starting up or tearing down services
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Shutdown failed: {0}")]
    ShutdownFailed(String),

    #[error("Timeout during {phase}: {message}")]
    Timeout { phase: String, message: String },

    #[error("Hook execution failed for {service}: {message}")]
    HookFailed { service: String, message: String },
}

impl LifecycleError {
    pub fn init_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }

    pub fn shutdown_failed(msg: impl Into<String>) -> Self {
        Self::ShutdownFailed(msg.into())
    }

    pub fn timeout(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Timeout {
            phase: phase.into(),
            message: message.into(),
        }
    }

    pub fn hook_failed(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HookFailed {
            service: service.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LifecycleError>;
