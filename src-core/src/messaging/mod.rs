// Module declarations
pub(crate) mod messaging_errors;
pub(crate) mod messaging_model;
pub(crate) mod messaging_repository;
pub(crate) mod messaging_service;
pub(crate) mod messaging_traits;

// Re-export the public interface
pub use messaging_model::{ChatThread, Message, NewMessage};
pub use messaging_repository::ChatRepository;
pub use messaging_service::MessagingService;
pub use messaging_traits::{ChatRepositoryTrait, MessagingServiceTrait};

// Re-export error types for convenience
pub use messaging_errors::{MessagingError, Result};
