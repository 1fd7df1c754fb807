use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::social_errors::{Result, SocialError};

/// A feed post with its likes and comments inlined, the way the collection
/// persists them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

/// A comment appended to a post, immutable once stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A community event accounts can RSVP to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub organizer: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a post
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub author: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewPost {
    /// Validates the post data: an author plus a body, an image, or both
    pub fn validate(&self) -> Result<()> {
        if self.author.trim().is_empty() {
            return Err(SocialError::InvalidInput(
                "Author cannot be empty".to_string(),
            ));
        }
        let has_body = self.body.as_deref().is_some_and(|b| !b.trim().is_empty());
        let has_image = self
            .image
            .as_deref()
            .is_some_and(|i| !i.trim().is_empty());
        if !has_body && !has_image {
            return Err(SocialError::InvalidInput(
                "A post needs a body or an image".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for creating an event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub organizer: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
}

impl NewEvent {
    /// Validates the event data
    pub fn validate(&self) -> Result<()> {
        if self.organizer.trim().is_empty() {
            return Err(SocialError::InvalidInput(
                "Organizer cannot be empty".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(SocialError::InvalidInput(
                "Event name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
