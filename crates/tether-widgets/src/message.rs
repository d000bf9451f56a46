//! Chat message model.
//!
//! Messages are produced by an external collaborator (the project's
//! message transport) and are rendering-only here: ordered by arrival,
//! immutable once received, never mutated by the widget.

use serde::{Deserialize, Serialize};

/// Identity of a message author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Stable user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub avatar: String,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Stable message id.
    pub id: String,
    /// Author identity.
    pub sender: Sender,
    /// Message body.
    pub content: String,
}

/// Which side of the panel a message bubble aligns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageAlignment {
    /// Other participants' messages, leading edge.
    Start,
    /// The current user's own messages, trailing edge.
    End,
}

impl MessageAlignment {
    /// Alignment for a message relative to the viewing user.
    #[must_use]
    pub fn for_message(message: &ChatMessage, current_user_id: &str) -> Self {
        if message.sender.id == current_user_id {
            Self::End
        } else {
            Self::Start
        }
    }
}

/// Ordered, append-only view over the collaborator's message list.
///
/// The widget's only contract on delivery is to scroll the rendered
/// list to the latest entry when it grows; [`MessageLog::sync`] reports
/// exactly that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Replace the log with the collaborator's current list.
    ///
    /// Returns `true` when the list grew, i.e. the rendered view should
    /// scroll to the latest message.
    pub fn sync(&mut self, messages: Vec<ChatMessage>) -> bool {
        let grew = messages.len() > self.messages.len();
        self.messages = messages;
        grew
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate the messages in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str, sender_id: &str, content: &str) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            sender: Sender {
                id: sender_id.to_string(),
                name: format!("user-{sender_id}"),
                avatar: format!("https://avatars.example/{sender_id}.png"),
            },
            content: content.to_string(),
        }
    }

    #[test]
    fn test_alignment_own_message() {
        let msg = message("m1", "u1", "hello");
        assert_eq!(
            MessageAlignment::for_message(&msg, "u1"),
            MessageAlignment::End
        );
    }

    #[test]
    fn test_alignment_other_message() {
        let msg = message("m1", "u2", "hello");
        assert_eq!(
            MessageAlignment::for_message(&msg, "u1"),
            MessageAlignment::Start
        );
    }

    #[test]
    fn test_log_sync_growth() {
        let mut log = MessageLog::new();
        assert!(log.sync(vec![message("m1", "u1", "a")]));
        assert!(log.sync(vec![
            message("m1", "u1", "a"),
            message("m2", "u2", "b")
        ]));
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().map(|m| m.id.as_str()), Some("m2"));
    }

    #[test]
    fn test_log_sync_same_length_does_not_scroll() {
        let mut log = MessageLog::new();
        log.sync(vec![message("m1", "u1", "a")]);
        assert!(!log.sync(vec![message("m1", "u1", "a")]));
        assert!(!log.sync(vec![]));
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_iter_order() {
        let mut log = MessageLog::new();
        log.sync(vec![
            message("m1", "u1", "first"),
            message("m2", "u2", "second"),
        ]);
        let ids: Vec<&str> = log.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn test_message_serde_roundtrip() {
        let msg = message("m1", "u1", "hello there");
        let json = serde_json::to_string(&msg).expect("serializes");
        let back: ChatMessage = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, msg);
    }
}
