use super::projects_model::Project;
use crate::store::Result;

/// Trait defining the contract for Project repository operations.
pub trait ProjectRepositoryTrait: Send + Sync {
    fn load(&self) -> Result<Vec<Project>>;
    fn save(&self, projects: &[Project]) -> Result<()>;
}
