// Generic repository port.
//
// Purpose
// - Uniform CRUD over a homogeneous collection of records of one entity type.
//
// Responsibilities
// - Describe the capabilities every storage backend offers (add, get, get all, exists, update, remove).
// - Keep services independent of the storage technology by coding against this trait.
//
// Boundaries
// - No concrete storage here. Each backend implements `Repository<T>` in its own module.
// - Typed repositories extend this trait with at most one entity specific query.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id {0}")]
    Missing(i32),

    #[error("backend error: {0}")]
    Backend(String),
}

/// A record that carries a store assigned integer identity.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

/// Boolean test over a record's fields.
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Inserts a new record and returns it with its assigned identity.
    async fn add(&self, entity: T) -> Result<T, StoreError>;

    /// First record matching `predicate`, `None` when nothing matches.
    async fn get(&self, predicate: Predicate<'_, T>) -> Result<Option<T>, StoreError>;

    async fn get_all(&self) -> Result<Vec<T>, StoreError>;

    async fn get_all_where(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, StoreError>;

    async fn exists(&self, predicate: Predicate<'_, T>) -> Result<bool, StoreError>;

    /// Replaces the stored record with the same identity.
    async fn update(&self, entity: T) -> Result<(), StoreError>;

    /// Deletes the stored record with the same identity.
    async fn remove(&self, entity: &T) -> Result<(), StoreError>;
}
