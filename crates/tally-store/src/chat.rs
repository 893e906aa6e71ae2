use chrono::Utc;
use uuid::Uuid;

use tally_shared::{ChatMessage, ChatRole, UserId};

use crate::error::{Result, StoreError};
use crate::store::Store;

impl Store {
    /// Append one side of an assistant conversation.
    pub fn create_chat_message(
        &mut self,
        user_id: &UserId,
        role: ChatRole,
        content: impl Into<String>,
    ) -> Result<ChatMessage> {
        if !self.users.contains_key(user_id) {
            return Err(StoreError::UserNotFound(user_id.clone()));
        }

        let message = ChatMessage {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        };
        self.chat_messages.push(message.clone());
        Ok(message)
    }

    /// A user's conversation history, oldest first.
    pub fn chat_messages_for(&self, user_id: &UserId) -> Vec<ChatMessage> {
        let mut messages: Vec<ChatMessage> = self
            .chat_messages
            .iter()
            .filter(|message| &message.user_id == user_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        messages
    }
}
