use leptos::prelude::*;

use crate::core::agent::{PanelbeatingAgent, ResponseGenerator};
use crate::core::config::SiteConfig;
use crate::core::models::Locale;
use crate::features::chat::components::{ChatInput, MessageList, QuickReplyButton};
use crate::features::chat::hooks::use_conversation;

/// The assistant: message history, quick replies and the free-text input.
#[component]
pub fn ChatPanel(primary: Box<dyn ResponseGenerator>, fallback: PanelbeatingAgent) -> impl IntoView {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let chat = use_conversation(primary, fallback);
    let store = chat.store;
    let locale = chat.locale;
    let switch_locale = chat.switch_locale;
    let send = chat.send;

    let initials: String = site
        .business_name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect();

    view! {
        <div class="chat-panel">
            <div class="chat-header">
                <div class="chat-avatar">{initials}</div>
                <div class="chat-identity">
                    <p class="chat-name">{format!("{} (Digital Assistant)", site.assistant_name)}</p>
                    <p class="chat-tagline">
                        {move || locale.get().pick("Here to guide you every step", "Hier om jou elke stap te help")}
                    </p>
                </div>
                <div class="locale-toggle">
                    <button
                        type="button"
                        class:active=move || locale.get() == Locale::En
                        on:click=move |_| switch_locale.run(Locale::En)
                    >"EN"</button>
                    <button
                        type="button"
                        class:active=move || locale.get() == Locale::Af
                        on:click=move |_| switch_locale.run(Locale::Af)
                    >"AF"</button>
                </div>
            </div>

            <MessageList
                store=store
                locale=locale
                on_estimate=chat.submit_estimate
                on_estimate_cancel=chat.cancel_estimate
                on_update=chat.submit_update
            />

            <div class="chat-controls">
                <Show when=move || store.with(|store| !store.quick_replies().is_empty())>
                    <div class="quick-replies">
                        <For
                            each=move || store.with(|store| store.quick_replies().to_vec())
                            key=|label| label.clone()
                            children=move |label: String| view! {
                                <QuickReplyButton label=label on_select=send />
                            }
                        />
                    </div>
                </Show>
                <ChatInput value=chat.input on_send=send />
            </div>
        </div>
    }
}
