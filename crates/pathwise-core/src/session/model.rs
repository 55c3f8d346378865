//! Session domain model.
//!
//! This module contains the core Session entity that represents one
//! durable conversation thread between a student and the specialists.

use super::message::ConversationMessage;
use crate::specialist::SpecialistId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A durable, ordered conversation thread.
///
/// A session contains:
/// - The full conversation history (insertion order IS the timeline)
/// - An open-ended shared-context map for cross-turn state
/// - The specialists that have participated so far
/// - Timestamps for creation and last update
///
/// The message sequence is append-only: once appended, a message is never
/// edited or reordered. `updated_at` is non-decreasing and bumped on every
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Optional identifier of the student who owns this session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation
    pub updated_at: DateTime<Utc>,
    /// Specialists that have answered in this session
    #[serde(default)]
    pub active_specialists: Vec<SpecialistId>,
    /// Ordered conversation history
    #[serde(default)]
    pub conversation_history: Vec<ConversationMessage>,
    /// Cross-turn key-value side channel
    #[serde(default)]
    pub shared_context: HashMap<String, serde_json::Value>,
}

impl Session {
    /// Creates an empty session with both timestamps set to now.
    pub fn new(id: impl Into<String>, user_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            user_id,
            created_at: now,
            updated_at: now,
            active_specialists: Vec::new(),
            conversation_history: Vec::new(),
            shared_context: HashMap::new(),
        }
    }

    /// Appends a message and bumps `updated_at`.
    pub fn append(&mut self, message: ConversationMessage) {
        self.conversation_history.push(message);
        self.touch();
    }

    /// Records a specialist as a participant in this session.
    pub fn record_specialist(&mut self, specialist: SpecialistId) {
        if !self.active_specialists.contains(&specialist) {
            self.active_specialists.push(specialist);
        }
        self.touch();
    }

    /// Returns the most recent `limit` messages in original order, or the
    /// full history when `limit` is `None`.
    pub fn recent_history(&self, limit: Option<usize>) -> &[ConversationMessage] {
        match limit {
            Some(n) => {
                let start = self.conversation_history.len().saturating_sub(n);
                &self.conversation_history[start..]
            }
            None => &self.conversation_history,
        }
    }

    /// Bumps `updated_at`, keeping it monotonically non-decreasing even if
    /// the wall clock steps backwards.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut session = Session::new("s-1", None);
        session.append(ConversationMessage::user("first"));
        session.append(ConversationMessage::user("second"));
        session.append(ConversationMessage::user("third"));

        let contents: Vec<_> = session
            .conversation_history
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_recent_history_limit() {
        let mut session = Session::new("s-2", None);
        for i in 0..5 {
            session.append(ConversationMessage::user(format!("q{}", i)));
        }

        let last_two = session.recent_history(Some(2));
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[0].content, "q3");
        assert_eq!(last_two[1].content, "q4");

        assert_eq!(session.recent_history(None).len(), 5);
        // Limit larger than history returns everything.
        assert_eq!(session.recent_history(Some(100)).len(), 5);
    }

    #[test]
    fn test_record_specialist_dedupes() {
        let mut session = Session::new("s-3", None);
        session.record_specialist(SpecialistId::FinancialAid);
        session.record_specialist(SpecialistId::FinancialAid);
        session.record_specialist(SpecialistId::Coordinator);
        assert_eq!(session.active_specialists.len(), 2);
    }

    #[test]
    fn test_append_bumps_updated_at() {
        let mut session = Session::new("s-4", None);
        let created = session.updated_at;
        session.append(ConversationMessage::user("hello"));
        assert!(session.updated_at >= created);
    }
}
