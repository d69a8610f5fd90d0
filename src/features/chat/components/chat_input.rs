use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn ChatInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] on_send: Callback<String>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_send.run(value.get_untracked());
    };

    view! {
        <form class="chat-input" on:submit=handle_submit>
            <input
                type="text"
                placeholder="Type your message..."
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button type="submit" class="btn-primary">"Send"</button>
        </form>
    }
}
