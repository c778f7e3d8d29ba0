use async_trait::async_trait;

use crate::collectable::Collectable;
use crate::error::RepositoryResult;

/// Repository port for one collection (images, journal entries or quotes).
///
/// Storage, auth scoping and blob handling live behind this trait; the
/// gallery only relies on `list` returning a stable order.
#[async_trait]
pub trait ItemRepository<T: Collectable>: Send + Sync {
    /// All items, newest first.
    async fn list(&self) -> RepositoryResult<Vec<T>>;

    async fn get(&self, id: T::Id) -> RepositoryResult<T>;

    async fn create(&self, draft: T::Draft) -> RepositoryResult<T>;

    /// Remove an item; `NotFound` when the id is unknown.
    async fn delete(&self, id: T::Id) -> RepositoryResult<()>;
}
