use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Agent,
    User,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Agent => "agent",
            Sender::User => "user",
        }
    }
}

/// Inline form a message can carry instead of text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Estimate,
    Update,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: Option<String>,
    pub form: Option<FormKind>,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: Option<String>, form: Option<FormKind>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text,
            form,
            sent_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, Some(text.into()), None)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Sender::Agent, Some(text.into()), None)
    }

    /// Agent message that renders the given form and nothing else.
    pub fn form(kind: FormKind) -> Self {
        Self::new(Sender::Agent, None, Some(kind))
    }

    pub fn is_form(&self, kind: FormKind) -> bool {
        self.form == Some(kind)
    }

    /// Local wall-clock time the message was added, e.g. `14:05`.
    pub fn time_label(&self) -> String {
        self.sent_at.with_timezone(&Local).format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_label_is_hours_and_minutes() {
        let message = ChatMessage::agent("Hi");
        let label = message.time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
        assert_eq!(label, message.sent_at.with_timezone(&Local).format("%H:%M").to_string());
    }

    #[test]
    fn form_messages_carry_no_text() {
        let message = ChatMessage::form(FormKind::Update);
        assert_eq!(message.sender, Sender::Agent);
        assert!(message.text.is_none());
        assert!(message.is_form(FormKind::Update));
        assert!(!message.is_form(FormKind::Estimate));
    }
}
