use leptos::prelude::*;

#[component]
pub fn QuickReplyButton(
    #[prop(into)] label: String,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let text = label.clone();
    view! {
        <button type="button" class="quick-reply" on:click=move |_| on_select.run(label.clone())>
            {text}
        </button>
    }
}
