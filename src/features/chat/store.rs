use crate::core::models::{AgentContext, ChatMessage, FormKind};

/// Snapshot of everything the chat panel renders.
///
/// Every operation consumes the snapshot and returns the next one, so the
/// reactive layer can swap whole values into its signal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversationStore {
    messages: Vec<ChatMessage>,
    quick_replies: Vec<String>,
    context: AgentContext,
}

impl ConversationStore {
    pub fn new(welcome: Vec<String>, quick_replies: Vec<String>, context: AgentContext) -> Self {
        Self {
            messages: welcome.into_iter().map(ChatMessage::agent).collect(),
            quick_replies,
            context,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn quick_replies(&self) -> &[String] {
        &self.quick_replies
    }

    pub fn context(&self) -> &AgentContext {
        &self.context
    }

    pub fn has_form(&self, kind: FormKind) -> bool {
        self.messages.iter().any(|message| message.is_form(kind))
    }

    #[must_use]
    pub fn append(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    #[must_use]
    pub fn replace_quick_replies(mut self, quick_replies: Vec<String>) -> Self {
        self.quick_replies = quick_replies;
        self
    }

    #[must_use]
    pub fn update_context(mut self, update: impl FnOnce(AgentContext) -> AgentContext) -> Self {
        self.context = update(self.context);
        self
    }

    #[must_use]
    pub fn remove_forms_of_kind(mut self, kind: FormKind) -> Self {
        self.messages.retain(|message| !message.is_form(kind));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Flow, Locale, Sender};

    #[test]
    fn welcome_lines_become_agent_messages() {
        let store = ConversationStore::new(
            vec!["Hi".into(), "How can I help?".into()],
            vec!["Request an estimate".into()],
            AgentContext::default(),
        );
        assert_eq!(store.messages().len(), 2);
        assert!(store.messages().iter().all(|m| m.sender == Sender::Agent));
        assert_eq!(store.messages()[1].text.as_deref(), Some("How can I help?"));
        assert_eq!(store.quick_replies().to_vec(), vec!["Request an estimate".to_string()]);
    }

    #[test]
    fn remove_forms_only_drops_the_requested_kind() {
        let store = ConversationStore::default()
            .append(ChatMessage::agent("before"))
            .append(ChatMessage::form(FormKind::Estimate))
            .append(ChatMessage::form(FormKind::Update))
            .append(ChatMessage::form(FormKind::Estimate));

        let store = store.remove_forms_of_kind(FormKind::Estimate);
        assert!(!store.has_form(FormKind::Estimate));
        assert!(store.has_form(FormKind::Update));
        assert_eq!(store.messages().len(), 2);
        assert_eq!(store.messages()[0].text.as_deref(), Some("before"));
    }

    #[test]
    fn operations_leave_the_previous_snapshot_intact() {
        let before = ConversationStore::default().append(ChatMessage::user("hi"));
        let after = before
            .clone()
            .append(ChatMessage::agent("hello"))
            .replace_quick_replies(vec!["a".into()])
            .update_context(|context| context.with_flow(Flow::Update).with_locale(Locale::Af));

        assert_eq!(before.messages().len(), 1);
        assert!(before.quick_replies().is_empty());
        assert_eq!(before.context().flow, Flow::Idle);
        assert_eq!(after.messages().len(), 2);
        assert_eq!(after.context().locale, Locale::Af);
    }
}
