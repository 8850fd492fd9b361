//! Base repository trait for database operations.
//!
//! A repository is the data access layer for one table. It provides methods
//! for creating, reading, updating, and soft-deleting entities. Each
//! repository has separate associated types for create requests, update
//! requests, and responses.

use crate::db::errors::Result;

/// Base repository trait providing common database operations
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity, returning it with its generated id
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID; absent when no active row matches
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List all active entities, in no guaranteed order
    async fn list(&mut self) -> Result<Vec<Self::Response>>;

    /// Overwrite the mutable fields of the active row matching `id`.
    ///
    /// An id that matches no active row makes the write a no-op; the echoed
    /// entity is returned either way and no error is raised at this layer.
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response>;

    /// Soft-delete an entity by ID, reporting whether exactly one row was
    /// affected. Unknown and already-deleted ids report false.
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;
}
