use crate::core::agent::{AgentError, AgentResponse, ResponseGenerator};
use crate::core::models::{AgentContext, ChatMessage, EstimateDetails, Flow, FormKind, Locale};

use super::store::ConversationStore;

#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Blank input; nothing changed.
    Ignored,
    Applied(ConversationStore),
}

/// Opening state of the widget: welcome lines, starter quick replies and
/// the agent's default context.
pub fn start_conversation(agent: &dyn ResponseGenerator) -> ConversationStore {
    let context = agent.initial_context();
    let locale = context.locale;
    ConversationStore::new(
        agent.welcome_messages(locale),
        agent.starter_quick_replies(locale),
        context,
    )
}

/// Sends free text or a quick-reply label to the agent.
///
/// If the agent fails the store is left as it was and the error is returned.
pub fn handle_send(
    store: &ConversationStore,
    text: &str,
    agent: &dyn ResponseGenerator,
) -> Result<SendOutcome, AgentError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(SendOutcome::Ignored);
    }

    let response = agent.respond(trimmed, store.context())?;
    let store = store.clone().append(ChatMessage::user(trimmed));
    Ok(SendOutcome::Applied(apply_response(store, response)))
}

fn apply_response(store: ConversationStore, response: AgentResponse) -> ConversationStore {
    let AgentResponse {
        context,
        replies,
        quick_replies,
        trigger_estimate_form,
        trigger_update_form,
    } = response;

    let mut store = store.update_context(|_| context);
    for reply in replies {
        store = store.append(ChatMessage::agent(reply));
    }
    store = store.replace_quick_replies(quick_replies.unwrap_or_default());

    if trigger_estimate_form && !store.has_form(FormKind::Estimate) {
        store = store.append(ChatMessage::form(FormKind::Estimate));
    }
    if trigger_update_form && !store.has_form(FormKind::Update) {
        store = store.append(ChatMessage::form(FormKind::Update));
    }
    store
}

pub fn submit_estimate(
    store: ConversationStore,
    details: EstimateDetails,
    agent: &dyn ResponseGenerator,
) -> ConversationStore {
    let locale = store.context().locale;
    let echo = format!(
        "{} - {}",
        details.car_model.as_deref().unwrap_or(""),
        details.damage_type.as_deref().unwrap_or("")
    )
    .trim()
    .to_string();
    let summary = agent.summarize_estimate(&details, locale);

    store
        .update_context(|context| AgentContext {
            estimate: Some(details),
            flow: Flow::Idle,
            ..context
        })
        .remove_forms_of_kind(FormKind::Estimate)
        .append(ChatMessage::user(echo))
        .append(ChatMessage::agent(summary))
}

/// Takes the raw form values; whichever is non-empty identifies the job.
pub fn submit_update(
    store: ConversationStore,
    job_card: &str,
    registration: &str,
    agent: &dyn ResponseGenerator,
) -> ConversationStore {
    let locale = store.context().locale;
    let joined = [job_card, registration]
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" / ");
    let identifier = if job_card.is_empty() { registration } else { job_card };
    let summary = agent.summarize_update_request(identifier, locale);

    // Closes the update flow like the estimate path does, so later free text
    // with digits is not read as another job number.
    let mut store = store
        .update_context(|context| context.with_flow(Flow::Idle))
        .remove_forms_of_kind(FormKind::Update);
    if !joined.is_empty() {
        store = store.append(ChatMessage::user(joined));
    }
    store.append(ChatMessage::agent(summary))
}

pub fn cancel_estimate(store: ConversationStore) -> ConversationStore {
    store
        .update_context(|context| context.with_flow(Flow::Idle))
        .remove_forms_of_kind(FormKind::Estimate)
}

/// Changes the UI language. Sent messages keep their text; the starter
/// quick replies are swapped for their translation if still showing.
pub fn switch_locale(
    store: ConversationStore,
    locale: Locale,
    agent: &dyn ResponseGenerator,
) -> ConversationStore {
    let previous = store.context().locale;
    let showing_starters = store.quick_replies() == agent.starter_quick_replies(previous).as_slice();
    let store = store.update_context(|context| context.with_locale(locale));
    if showing_starters {
        store.replace_quick_replies(agent.starter_quick_replies(locale))
    } else {
        store
    }
}
