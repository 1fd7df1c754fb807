use async_trait::async_trait;

use super::social_model::{Event, NewEvent, NewPost, Post};
use crate::social::Result;

/// Trait defining the contract for Post repository operations.
pub trait PostRepositoryTrait: Send + Sync {
    fn load(&self) -> crate::store::Result<Vec<Post>>;
    fn save(&self, posts: &[Post]) -> crate::store::Result<()>;
}

/// Trait defining the contract for Event repository operations.
pub trait EventRepositoryTrait: Send + Sync {
    fn load(&self) -> crate::store::Result<Vec<Event>>;
    fn save(&self, events: &[Event]) -> crate::store::Result<()>;
}

/// Trait defining the contract for Social service operations.
#[async_trait]
pub trait SocialServiceTrait: Send + Sync {
    async fn create_post(&self, new_post: NewPost) -> Result<Post>;
    fn list_posts(&self) -> Result<Vec<Post>>;
    fn list_posts_by(&self, author: &str) -> Result<Vec<Post>>;
    async fn toggle_like(&self, post_id: &str, account: &str) -> Result<Post>;
    async fn add_comment(&self, post_id: &str, author: &str, body: &str) -> Result<Post>;
    async fn create_event(&self, new_event: NewEvent) -> Result<Event>;
    fn list_events(&self) -> Result<Vec<Event>>;
    async fn rsvp(&self, event_id: &str, account: &str) -> Result<Event>;
}
