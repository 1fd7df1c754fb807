// Module declarations
pub(crate) mod social_errors;
pub(crate) mod social_model;
pub(crate) mod social_repository;
pub(crate) mod social_service;
pub(crate) mod social_traits;

// Re-export the public interface
pub use social_model::{Comment, Event, NewEvent, NewPost, Post};
pub use social_repository::{EventRepository, PostRepository};
pub use social_service::SocialService;
pub use social_traits::{EventRepositoryTrait, PostRepositoryTrait, SocialServiceTrait};

// Re-export error types for convenience
pub use social_errors::{Result, SocialError};
