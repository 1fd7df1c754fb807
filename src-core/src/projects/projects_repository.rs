use std::sync::Arc;

use crate::constants::PROJECTS_COLLECTION;
use crate::store::{CollectionStore, Result};

use super::projects_model::Project;
use super::projects_traits::ProjectRepositoryTrait;

/// Repository for the projects collection
pub struct ProjectRepository {
    store: Arc<CollectionStore>,
}

impl ProjectRepository {
    /// Creates a new ProjectRepository instance
    pub fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }
}

impl ProjectRepositoryTrait for ProjectRepository {
    fn load(&self) -> Result<Vec<Project>> {
        self.store.read(PROJECTS_COLLECTION)
    }

    fn save(&self, projects: &[Project]) -> Result<()> {
        self.store.write(PROJECTS_COLLECTION, projects)
    }
}
