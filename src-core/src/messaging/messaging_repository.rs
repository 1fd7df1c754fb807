use std::sync::Arc;

use crate::constants::CHATS_COLLECTION;
use crate::store::{CollectionStore, Result};

use super::messaging_model::ChatThread;
use super::messaging_traits::ChatRepositoryTrait;

/// Repository for the chat threads collection
pub struct ChatRepository {
    store: Arc<CollectionStore>,
}

impl ChatRepository {
    /// Creates a new ChatRepository instance
    pub fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }
}

impl ChatRepositoryTrait for ChatRepository {
    fn load(&self) -> Result<Vec<ChatThread>> {
        self.store.read(CHATS_COLLECTION)
    }

    fn save(&self, threads: &[ChatThread]) -> Result<()> {
        self.store.write(CHATS_COLLECTION, threads)
    }
}
