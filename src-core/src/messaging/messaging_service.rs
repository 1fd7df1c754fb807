use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::debug;
use uuid::Uuid;

use crate::constants::CHATS_COLLECTION;
use crate::store::LockManager;

use super::messaging_errors::{MessagingError, Result};
use super::messaging_model::{ChatThread, Message, NewMessage};
use super::messaging_traits::{ChatRepositoryTrait, MessagingServiceTrait};

/// Service resolving, creating, and extending chat threads.
///
/// All thread mutation runs under the chats collection lock, so two requests
/// racing to open the same direct conversation observe each other's commit
/// instead of creating duplicates.
pub struct MessagingService {
    repository: Arc<dyn ChatRepositoryTrait>,
    locks: Arc<LockManager>,
}

impl MessagingService {
    /// Creates a new MessagingService instance
    pub fn new(repository: Arc<dyn ChatRepositoryTrait>, locks: Arc<LockManager>) -> Self {
        Self { repository, locks }
    }
}

#[async_trait]
impl MessagingServiceTrait for MessagingService {
    /// Returns the direct thread for the unordered pair `{a, b}`, creating
    /// it if none exists. Repeated calls never create duplicates.
    async fn resolve_or_create_direct(&self, a: &str, b: &str) -> Result<ChatThread> {
        if a.trim().is_empty() || b.trim().is_empty() {
            return Err(MessagingError::InvalidParticipants(
                "Participants cannot be empty".to_string(),
            ));
        }
        if a == b {
            return Err(MessagingError::InvalidParticipants(
                "A direct thread needs two distinct participants".to_string(),
            ));
        }

        let _guard = self.locks.acquire(&[CHATS_COLLECTION]).await?;
        let mut threads = self.repository.load()?;
        if let Some(existing) = threads.iter().find(|t| t.is_direct_between(a, b)) {
            return Ok(existing.clone());
        }

        let thread = ChatThread {
            id: Uuid::new_v4().to_string(),
            is_group: false,
            group_name: None,
            created_by: None,
            participants: vec![a.to_string(), b.to_string()],
            messages: Vec::new(),
            created_at: Utc::now(),
        };
        debug!("Creating direct thread {} for {} and {}", thread.id, a, b);
        threads.push(thread.clone());
        self.repository.save(&threads)?;
        Ok(thread)
    }

    /// Creates a named group thread. Groups with identical membership are
    /// allowed; the name disambiguates.
    async fn create_group(
        &self,
        name: &str,
        participants: Vec<String>,
        creator: &str,
    ) -> Result<ChatThread> {
        if name.trim().is_empty() {
            return Err(MessagingError::InvalidInput(
                "Group name cannot be empty".to_string(),
            ));
        }
        if participants.iter().any(|p| p.trim().is_empty()) {
            return Err(MessagingError::InvalidParticipants(
                "Participants cannot be empty".to_string(),
            ));
        }

        let mut members: Vec<String> = Vec::with_capacity(participants.len());
        for participant in participants {
            if !members.contains(&participant) {
                members.push(participant);
            }
        }
        if members.len() < 2 {
            return Err(MessagingError::InvalidParticipants(
                "A group thread needs at least two distinct participants".to_string(),
            ));
        }

        let thread = ChatThread {
            id: Uuid::new_v4().to_string(),
            is_group: true,
            group_name: Some(name.trim().to_string()),
            created_by: Some(creator.to_string()),
            participants: members,
            messages: Vec::new(),
            created_at: Utc::now(),
        };
        debug!("Creating group thread {} ('{}')", thread.id, name.trim());

        let _guard = self.locks.acquire(&[CHATS_COLLECTION]).await?;
        let mut threads = self.repository.load()?;
        threads.push(thread.clone());
        self.repository.save(&threads)?;
        Ok(thread)
    }

    /// Appends a message to a thread, keeping timestamps non-decreasing in
    /// storage order: a clock reading that would not exceed the last
    /// message's is advanced past it by one microsecond.
    async fn append_message(&self, thread_id: &str, new_message: NewMessage) -> Result<Message> {
        new_message.validate()?;

        let _guard = self.locks.acquire(&[CHATS_COLLECTION]).await?;
        let mut threads = self.repository.load()?;
        let thread = threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or_else(|| MessagingError::ThreadNotFound(thread_id.to_string()))?;

        let mut timestamp = Utc::now();
        if let Some(last) = thread.messages.last() {
            if timestamp <= last.timestamp {
                timestamp = last.timestamp + Duration::microseconds(1);
            }
        }

        let message = Message {
            id: Uuid::new_v4().to_string(),
            sender: new_message.sender,
            body: new_message.body,
            attachment: new_message.attachment,
            event_id: new_message.event_id,
            timestamp,
        };
        thread.messages.push(message.clone());
        self.repository.save(&threads)?;
        Ok(message)
    }

    /// All threads the participant belongs to, in store order
    fn list_threads_for(&self, participant: &str) -> Result<Vec<ChatThread>> {
        let threads = self.repository.load()?;
        Ok(threads
            .into_iter()
            .filter(|t| t.has_participant(participant))
            .collect())
    }
}
