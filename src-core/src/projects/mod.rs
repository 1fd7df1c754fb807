// Module declarations
pub(crate) mod projects_model;
pub(crate) mod projects_repository;
pub(crate) mod projects_traits;

// Re-export the public interface
pub use projects_model::Project;
pub use projects_repository::ProjectRepository;
pub use projects_traits::ProjectRepositoryTrait;
