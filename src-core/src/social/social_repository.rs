use std::sync::Arc;

use crate::constants::{EVENTS_COLLECTION, POSTS_COLLECTION};
use crate::store::{CollectionStore, Result};

use super::social_model::{Event, Post};
use super::social_traits::{EventRepositoryTrait, PostRepositoryTrait};

/// Repository for the posts collection
pub struct PostRepository {
    store: Arc<CollectionStore>,
}

impl PostRepository {
    /// Creates a new PostRepository instance
    pub fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }
}

impl PostRepositoryTrait for PostRepository {
    fn load(&self) -> Result<Vec<Post>> {
        self.store.read(POSTS_COLLECTION)
    }

    fn save(&self, posts: &[Post]) -> Result<()> {
        self.store.write(POSTS_COLLECTION, posts)
    }
}

/// Repository for the events collection
pub struct EventRepository {
    store: Arc<CollectionStore>,
}

impl EventRepository {
    /// Creates a new EventRepository instance
    pub fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }
}

impl EventRepositoryTrait for EventRepository {
    fn load(&self) -> Result<Vec<Event>> {
        self.store.read(EVENTS_COLLECTION)
    }

    fn save(&self, events: &[Event]) -> Result<()> {
        self.store.write(EVENTS_COLLECTION, events)
    }
}
