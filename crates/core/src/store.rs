//! Persistence gateway for projects.
//!
//! [`ProjectStore`] is the seam between the service and durable storage.
//! Each method is a single atomic operation from the caller's point of view;
//! no cross-operation transaction is offered. The PostgreSQL adapter lives in
//! `tracker-db`; [`MemoryProjectStore`] backs local runs and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::project::{NewProject, Project};
use crate::types::DbId;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Persist a new record and return its freshly assigned id.
    async fn insert(&self, project: &NewProject) -> Result<DbId, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, CoreError>;

    /// Full scan. Callers must not depend on the order.
    async fn find_all(&self) -> Result<Vec<Project>, CoreError>;

    /// Overwrite every mutable field of `id`. Returns `false` if no such row.
    async fn replace(&self, id: DbId, project: &NewProject) -> Result<bool, CoreError>;

    /// Returns `true` if a row existed and was removed.
    async fn remove(&self, id: DbId) -> Result<bool, CoreError>;

    /// Cheap liveness probe of the backing storage.
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: DbId,
    rows: BTreeMap<DbId, NewProject>,
}

/// Process-local store. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    state: RwLock<MemoryState>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn insert(&self, project: &NewProject) -> Result<DbId, CoreError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id;
        state.rows.insert(id, project.clone());
        Ok(id)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, CoreError> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .get(&id)
            .map(|row| row.clone().into_project(id)))
    }

    async fn find_all(&self) -> Result<Vec<Project>, CoreError> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .iter()
            .map(|(id, row)| row.clone().into_project(*id))
            .collect())
    }

    async fn replace(&self, id: DbId, project: &NewProject) -> Result<bool, CoreError> {
        let mut state = self.state.write().await;
        match state.rows.get_mut(&id) {
            Some(row) => {
                *row = project.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: DbId) -> Result<bool, CoreError> {
        let mut state = self.state.write().await;
        Ok(state.rows.remove(&id).is_some())
    }
}
