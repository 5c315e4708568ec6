use crate::di::Container;
use crate::error::Result;

/// A group of providers and controllers registered together
///
/// A module binds its traits to implementations and registers any services
/// it owns. Modules can register other modules they depend on.
pub trait Module {
    fn register(container: &mut Container) -> Result<()>;
}
