//! Project lifecycle operations consumed by the HTTP boundary.
//!
//! The service validates input, delegates to a [`ProjectStore`], and reports
//! absence as `None`/`false` instead of an error. It keeps no state of its
//! own beyond the store handle, so clones are cheap and safe to share.

use std::sync::Arc;

use crate::error::CoreError;
use crate::project::{Project, ProjectInput};
use crate::store::ProjectStore;
use crate::types::DbId;

#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip_all)]
    pub async fn list_projects(&self) -> Result<Vec<Project>, CoreError> {
        self.store.find_all().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_project(&self, id: DbId) -> Result<Option<Project>, CoreError> {
        self.store.find_by_id(id).await
    }

    /// Validate and insert. Nothing is written if any rule fails.
    #[tracing::instrument(skip_all, fields(name = %input.name))]
    pub async fn create_project(&self, input: &ProjectInput) -> Result<Project, CoreError> {
        let new = input.validate_new()?;
        let id = self.store.insert(&new).await?;
        Ok(new.into_project(id))
    }

    /// Replace every mutable field of project `id`.
    ///
    /// The body id must equal `id`. Returns `Ok(None)` when no such project
    /// exists.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<Project>, CoreError> {
        if input.id != id {
            return Err(CoreError::invalid_field(
                "id",
                format!("Project ID mismatch: path has {id}, body has {}", input.id),
            ));
        }

        let new = input.validate_new()?;
        if self.store.replace(id, &new).await? {
            Ok(Some(new.into_project(id)))
        } else {
            Ok(None)
        }
    }

    /// Returns `false` if there was nothing to delete.
    #[tracing::instrument(skip(self))]
    pub async fn delete_project(&self, id: DbId) -> Result<bool, CoreError> {
        self.store.remove(id).await
    }

    pub async fn check_storage(&self) -> Result<(), CoreError> {
        self.store.ping().await
    }
}
