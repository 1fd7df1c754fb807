use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::messaging_errors::{MessagingError, Result};

/// A single chat message.
///
/// Exactly one of `body` and `attachment` is populated; `event_id`
/// optionally references the event the message originated from. Messages are
/// immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A direct or group chat thread.
///
/// Direct threads hold exactly two distinct participants and are unique per
/// unordered pair; group threads are named, hold two or more, and are never
/// deduplicated against each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatThread {
    pub id: String,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub participants: Vec<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}

impl ChatThread {
    /// Whether this is the direct thread for the unordered pair `{a, b}`
    pub fn is_direct_between(&self, a: &str, b: &str) -> bool {
        !self.is_group
            && self.participants.len() == 2
            && self.participants.iter().any(|p| p == a)
            && self.participants.iter().any(|p| p == b)
    }

    pub fn has_participant(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }
}

/// Input model for appending a message to a thread
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub sender: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
}

impl NewMessage {
    /// Validates the message payload: a non-empty sender and exactly one of
    /// {text body, attachment reference}
    pub fn validate(&self) -> Result<()> {
        if self.sender.trim().is_empty() {
            return Err(MessagingError::InvalidInput(
                "Sender cannot be empty".to_string(),
            ));
        }
        match (&self.body, &self.attachment) {
            (Some(body), None) if !body.trim().is_empty() => Ok(()),
            (None, Some(attachment)) if !attachment.trim().is_empty() => Ok(()),
            _ => Err(MessagingError::InvalidInput(
                "A message carries either a text body or an attachment reference".to_string(),
            )),
        }
    }
}
