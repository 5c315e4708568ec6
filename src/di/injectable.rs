use crate::di::Container;
use crate::error::Result;

/// Types that can be constructed from the DI container
///
/// Repositories and controllers implement this to pull their collaborators
/// (`Arc<T>` or `Arc<dyn Trait>`) out of an already populated [`Container`].
pub trait Injectable: Sized + Send + Sync + 'static {
    /// # Errors
    /// Returns an error if any required dependency is not registered.
    fn inject(container: &Container) -> Result<Self>;
}
