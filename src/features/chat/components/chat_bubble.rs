use leptos::prelude::*;
use crate::core::models::Sender;

#[component]
pub fn ChatBubble(
    sender: Sender,
    #[prop(into)] sent_at: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("chat-bubble {}", sender.as_str()) title=sent_at>
            {children()}
        </div>
    }
}
