// In memory implementation of the Repository port.
//
// Purpose
// - Back the service in local runs and tests without a database.
//
// Responsibilities
// - Store records in a map keyed by identity, in ascending identity order.
// - Assign identities from a monotonic sequence on insert.

use crate::shared::infrastructure::repository::{Entity, Predicate, Repository, StoreError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use tokio::sync::RwLock;

pub struct InMemoryRepository<T: Entity> {
    name: &'static str,
    rows: RwLock<BTreeMap<i32, T>>,
    last_id: AtomicI32,
    write_calls: AtomicUsize,
    is_offline: bool,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(BTreeMap::new()),
            last_id: AtomicI32::new(0),
            write_calls: AtomicUsize::new(0),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Number of add, update and remove calls that reached the store.
    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend(format!("{} repository offline", self.name)));
        }
        Ok(())
    }

    fn next_id(&self) -> Result<i32, StoreError> {
        self.last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|last| last + 1)
            .map_err(|_| {
                let error = StoreError::Backend(format!("{} identity sequence exhausted", self.name));
                tracing::error!(repository = self.name, operation = "add", %error, "write failed");
                error
            })
    }

    fn record_write(&self, operation: &'static str) -> Result<(), StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online().inspect_err(|error| {
            tracing::error!(repository = self.name, operation, %error, "write failed");
        })
    }
}

#[async_trait::async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn add(&self, mut entity: T) -> Result<T, StoreError> {
        self.record_write("add")?;
        let id = self.next_id()?;
        entity.set_id(id);
        self.rows.write().await.insert(id, entity.clone());
        Ok(entity)
    }

    async fn get(&self, predicate: Predicate<'_, T>) -> Result<Option<T>, StoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard.values().find(|row| predicate(*row)).cloned())
    }

    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get_all_where(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, StoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard.values().filter(|row| predicate(*row)).cloned().collect())
    }

    async fn exists(&self, predicate: Predicate<'_, T>) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().any(|row| predicate(row)))
    }

    async fn update(&self, entity: T) -> Result<(), StoreError> {
        self.record_write("update")?;
        let mut guard = self.rows.write().await;
        match guard.get_mut(&entity.id()) {
            Some(stored) => {
                *stored = entity;
                Ok(())
            }
            None => {
                let error = StoreError::Missing(entity.id());
                tracing::error!(repository = self.name, operation = "update", %error, "write failed");
                Err(error)
            }
        }
    }

    async fn remove(&self, entity: &T) -> Result<(), StoreError> {
        self.record_write("remove")?;
        match self.rows.write().await.remove(&entity.id()) {
            Some(_) => Ok(()),
            None => {
                let error = StoreError::Missing(entity.id());
                tracing::error!(repository = self.name, operation = "remove", %error, "write failed");
                Err(error)
            }
        }
    }
}
