use leptos::prelude::*;

use crate::core::agent::{PanelbeatingAgent, ResponseGenerator};
use crate::core::models::{EstimateDetails, Locale};
use crate::core::services::scroll_to_bottom_soon;
use crate::features::chat::dispatcher::{
    cancel_estimate, handle_send, start_conversation, submit_estimate, submit_update, switch_locale,
    SendOutcome,
};
use crate::features::chat::store::ConversationStore;

pub const MESSAGE_LIST_ID: &str = "chat-messages";

struct Agents {
    primary: Box<dyn ResponseGenerator>,
    fallback: PanelbeatingAgent,
}

pub struct ConversationHook {
    pub store: ReadSignal<ConversationStore>,
    pub locale: Signal<Locale>,
    pub input: RwSignal<String>,
    pub send: Callback<String>,
    pub submit_estimate: Callback<EstimateDetails>,
    pub submit_update: Callback<(String, String)>,
    pub cancel_estimate: Callback<()>,
    pub switch_locale: Callback<Locale>,
}

/// Owns the conversation for the chat panel. `primary` answers every turn;
/// if it fails, `fallback` answers instead so the user always gets a reply.
pub fn use_conversation(
    primary: Box<dyn ResponseGenerator>,
    fallback: PanelbeatingAgent,
) -> ConversationHook {
    let store = RwSignal::new(start_conversation(primary.as_ref()));
    let input = RwSignal::new(String::new());
    let agents = StoredValue::new_local(Agents { primary, fallback });

    let locale = Signal::derive(move || store.with(|store| store.context().locale));

    // Keep the newest message in view
    Effect::new(move |_| {
        store.with(|store| store.messages().len());
        scroll_to_bottom_soon(MESSAGE_LIST_ID);
    });

    let send = Callback::new(move |text: String| {
        let current = store.get_untracked();
        let outcome = agents.with_value(|agents| {
            match handle_send(&current, &text, agents.primary.as_ref()) {
                Ok(outcome) => outcome,
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[chat] agent failed, answering with built-in rules: {}", e).into(),
                    );
                    handle_send(&current, &text, &agents.fallback).unwrap_or(SendOutcome::Ignored)
                }
            }
        });

        if let SendOutcome::Applied(next) = outcome {
            store.set(next);
            input.set(String::new());
        }
    });

    let submit_estimate_fn = Callback::new(move |details: EstimateDetails| {
        web_sys::console::log_1(
            &format!("[chat] estimate submitted with {} photo link(s)", details.photo_urls.len()).into(),
        );
        let current = store.get_untracked();
        let next = agents.with_value(|agents| submit_estimate(current, details, agents.primary.as_ref()));
        store.set(next);
    });

    let submit_update_fn = Callback::new(move |(job_card, registration): (String, String)| {
        web_sys::console::log_1(&"[chat] status update requested".into());
        let current = store.get_untracked();
        let next = agents.with_value(|agents| {
            submit_update(current, &job_card, &registration, agents.primary.as_ref())
        });
        store.set(next);
    });

    let cancel_estimate_fn = Callback::new(move |_: ()| {
        store.set(cancel_estimate(store.get_untracked()));
    });

    let switch_locale_fn = Callback::new(move |locale: Locale| {
        let current = store.get_untracked();
        let next = agents.with_value(|agents| switch_locale(current, locale, agents.primary.as_ref()));
        store.set(next);
    });

    ConversationHook {
        store: store.read_only(),
        locale,
        input,
        send,
        submit_estimate: submit_estimate_fn,
        submit_update: submit_update_fn,
        cancel_estimate: cancel_estimate_fn,
        switch_locale: switch_locale_fn,
    }
}
