pub mod copy;
pub mod error;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::core::models::{AgentContext, EstimateDetails, Locale};

pub use error::AgentError;
pub use rules::PanelbeatingAgent;

/// Effects of one agent turn, applied by the chat dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub context: AgentContext,
    #[serde(default)]
    pub replies: Vec<String>,
    #[serde(default)]
    pub quick_replies: Option<Vec<String>>,
    #[serde(default)]
    pub trigger_estimate_form: bool,
    #[serde(default)]
    pub trigger_update_form: bool,
}

impl AgentResponse {
    pub fn new(context: AgentContext) -> Self {
        Self {
            context,
            ..Default::default()
        }
    }

    pub fn reply(mut self, text: impl Into<String>) -> Self {
        self.replies.push(text.into());
        self
    }

    pub fn quick_replies(mut self, labels: Vec<String>) -> Self {
        self.quick_replies = Some(labels);
        self
    }

    pub fn estimate_form(mut self) -> Self {
        self.trigger_estimate_form = true;
        self
    }

    pub fn update_form(mut self) -> Self {
        self.trigger_update_form = true;
        self
    }
}

/// The dialogue logic behind the chat widget.
///
/// Implementations decide what the assistant says; the chat store only
/// applies the returned effects. `respond` may fail for bridged agents, in
/// which case the conversation must be left untouched.
pub trait ResponseGenerator {
    fn initial_context(&self) -> AgentContext {
        AgentContext::default()
    }

    fn welcome_messages(&self, locale: Locale) -> Vec<String>;

    /// Quick replies offered before the first turn.
    fn starter_quick_replies(&self, locale: Locale) -> Vec<String>;

    fn respond(&self, input: &str, context: &AgentContext) -> Result<AgentResponse, AgentError>;

    fn summarize_estimate(&self, details: &EstimateDetails, locale: Locale) -> String;

    fn summarize_update_request(&self, identifier: &str, locale: Locale) -> String;
}
