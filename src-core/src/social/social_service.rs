use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::constants::{EVENTS_COLLECTION, POSTS_COLLECTION};
use crate::store::LockManager;

use super::social_errors::{Result, SocialError};
use super::social_model::{Comment, Event, NewEvent, NewPost, Post};
use super::social_traits::{EventRepositoryTrait, PostRepositoryTrait, SocialServiceTrait};

/// Service for the posts/events surface. Every mutation is a
/// single-collection read-modify-write under the lock manager.
pub struct SocialService {
    posts: Arc<dyn PostRepositoryTrait>,
    events: Arc<dyn EventRepositoryTrait>,
    locks: Arc<LockManager>,
}

impl SocialService {
    /// Creates a new SocialService instance
    pub fn new(
        posts: Arc<dyn PostRepositoryTrait>,
        events: Arc<dyn EventRepositoryTrait>,
        locks: Arc<LockManager>,
    ) -> Self {
        Self {
            posts,
            events,
            locks,
        }
    }
}

#[async_trait]
impl SocialServiceTrait for SocialService {
    async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        new_post.validate()?;

        let post = Post {
            id: Uuid::new_v4().to_string(),
            author: new_post.author,
            body: new_post.body.unwrap_or_default(),
            image: new_post.image,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        };

        let _guard = self.locks.acquire(&[POSTS_COLLECTION]).await?;
        let mut posts = self.posts.load()?;
        posts.push(post.clone());
        self.posts.save(&posts)?;
        Ok(post)
    }

    fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.load()?)
    }

    fn list_posts_by(&self, author: &str) -> Result<Vec<Post>> {
        let posts = self.posts.load()?;
        Ok(posts.into_iter().filter(|p| p.author == author).collect())
    }

    /// Adds the account to the post's likes, or removes it if present
    async fn toggle_like(&self, post_id: &str, account: &str) -> Result<Post> {
        let _guard = self.locks.acquire(&[POSTS_COLLECTION]).await?;
        let mut posts = self.posts.load()?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| SocialError::PostNotFound(post_id.to_string()))?;

        if post.likes.iter().any(|l| l == account) {
            post.likes.retain(|l| l != account);
        } else {
            post.likes.push(account.to_string());
        }
        let updated = post.clone();
        self.posts.save(&posts)?;
        Ok(updated)
    }

    async fn add_comment(&self, post_id: &str, author: &str, body: &str) -> Result<Post> {
        if body.trim().is_empty() {
            return Err(SocialError::InvalidInput(
                "Comment body cannot be empty".to_string(),
            ));
        }

        let _guard = self.locks.acquire(&[POSTS_COLLECTION]).await?;
        let mut posts = self.posts.load()?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| SocialError::PostNotFound(post_id.to_string()))?;

        post.comments.push(Comment {
            id: Uuid::new_v4().to_string(),
            author: author.to_string(),
            body: body.to_string(),
            created_at: Utc::now(),
        });
        let updated = post.clone();
        self.posts.save(&posts)?;
        Ok(updated)
    }

    async fn create_event(&self, new_event: NewEvent) -> Result<Event> {
        new_event.validate()?;

        let event = Event {
            id: Uuid::new_v4().to_string(),
            name: new_event.name.trim().to_string(),
            description: new_event.description.unwrap_or_default(),
            organizer: new_event.organizer,
            starts_at: new_event.starts_at,
            attendees: Vec::new(),
            created_at: Utc::now(),
        };

        let _guard = self.locks.acquire(&[EVENTS_COLLECTION]).await?;
        let mut events = self.events.load()?;
        events.push(event.clone());
        self.events.save(&events)?;
        Ok(event)
    }

    fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.events.load()?)
    }

    /// Adds the account to the event's deduplicated attendee list
    async fn rsvp(&self, event_id: &str, account: &str) -> Result<Event> {
        let _guard = self.locks.acquire(&[EVENTS_COLLECTION]).await?;
        let mut events = self.events.load()?;
        let event = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| SocialError::EventNotFound(event_id.to_string()))?;

        if !event.attendees.iter().any(|a| a == account) {
            event.attendees.push(account.to_string());
        }
        let updated = event.clone();
        self.events.save(&events)?;
        Ok(updated)
    }
}
