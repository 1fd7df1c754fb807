use async_trait::async_trait;

use super::messaging_model::{ChatThread, Message, NewMessage};
use crate::messaging::Result;

/// Trait defining the contract for chat-thread repository operations.
pub trait ChatRepositoryTrait: Send + Sync {
    fn load(&self) -> crate::store::Result<Vec<ChatThread>>;
    fn save(&self, threads: &[ChatThread]) -> crate::store::Result<()>;
}

/// Trait defining the contract for Messaging service operations.
#[async_trait]
pub trait MessagingServiceTrait: Send + Sync {
    async fn resolve_or_create_direct(&self, a: &str, b: &str) -> Result<ChatThread>;
    async fn create_group(
        &self,
        name: &str,
        participants: Vec<String>,
        creator: &str,
    ) -> Result<ChatThread>;
    async fn append_message(&self, thread_id: &str, new_message: NewMessage) -> Result<Message>;
    fn list_threads_for(&self, participant: &str) -> Result<Vec<ChatThread>>;
}
