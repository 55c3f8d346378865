//! Conversation message types.

use crate::specialist::SpecialistId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
///
/// This is a closed two-value tag: sessions only record what the student
/// asked and what a specialist answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the student.
    User,
    /// Message produced by a specialist.
    Assistant,
}

/// A single message in a conversation history.
///
/// Messages are immutable once appended to a session. Assistant messages
/// carry the specialist that produced them; user messages do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Timestamp when the message was created.
    pub timestamp: DateTime<Utc>,
    /// The specialist that produced this message (assistant messages only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist: Option<SpecialistId>,
}

impl ConversationMessage {
    /// Creates a user message timestamped now.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            specialist: None,
        }
    }

    /// Creates an assistant message attributed to a specialist.
    pub fn assistant(content: impl Into<String>, specialist: SpecialistId) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            specialist: Some(specialist),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_has_no_specialist() {
        let msg = ConversationMessage::user("How do I apply for FAFSA?");
        assert_eq!(msg.role, MessageRole::User);
        assert!(msg.specialist.is_none());
    }

    #[test]
    fn test_assistant_message_carries_specialist() {
        let msg = ConversationMessage::assistant("Start at studentaid.gov", SpecialistId::FinancialAid);
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.specialist, Some(SpecialistId::FinancialAid));
    }
}
