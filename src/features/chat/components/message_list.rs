use leptos::prelude::*;

use crate::core::models::{ChatMessage, EstimateDetails, FormKind, Locale};
use crate::features::chat::components::{ChatBubble, EstimateForm, UpdateForm};
use crate::features::chat::hooks::MESSAGE_LIST_ID;
use crate::features::chat::store::ConversationStore;

#[component]
pub fn MessageList(
    #[prop(into)] store: ReadSignal<ConversationStore>,
    #[prop(into)] locale: Signal<Locale>,
    #[prop(into)] on_estimate: Callback<EstimateDetails>,
    #[prop(into)] on_estimate_cancel: Callback<()>,
    #[prop(into)] on_update: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="message-list" id=MESSAGE_LIST_ID>
            <For
                each=move || store.with(|store| store.messages().to_vec())
                key=|message| message.id.clone()
                children=move |message: ChatMessage| {
                    let form = message.form.map(|kind| match kind {
                        FormKind::Estimate => view! {
                            <EstimateForm locale=locale on_submit=on_estimate on_cancel=on_estimate_cancel />
                        }.into_any(),
                        FormKind::Update => view! {
                            <UpdateForm locale=locale on_submit=on_update />
                        }.into_any(),
                    });
                    view! {
                        <ChatBubble sender=message.sender sent_at=message.time_label()>
                            {message.text.clone().map(|text| view! { <p class="message-text">{text}</p> })}
                            {form}
                        </ChatBubble>
                    }
                }
            />
        </div>
    }
}
