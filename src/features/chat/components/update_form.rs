use leptos::ev;
use leptos::prelude::*;

use crate::core::models::Locale;
use crate::features::chat::forms::UpdateLabels;

#[component]
pub fn UpdateForm(
    #[prop(into)] locale: Signal<Locale>,
    #[prop(into)] on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let (job_card, set_job_card) = signal(String::new());
    let (registration, set_registration) = signal(String::new());
    let labels = move || UpdateLabels::for_locale(locale.get());

    // Values go out untrimmed; either may be empty.
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run((job_card.get_untracked(), registration.get_untracked()));
    };

    view! {
        <form class="chat-form update-form" on:submit=handle_submit>
            <label class="form-group">
                <span class="form-label">{move || labels().job_card}</span>
                <input
                    type="text"
                    placeholder=move || labels().job_card_placeholder
                    prop:value=move || job_card.get()
                    on:input=move |ev| set_job_card.set(event_target_value(&ev))
                />
            </label>
            <label class="form-group">
                <span class="form-label">
                    {move || labels().registration}
                    " "
                    <span class="form-hint">{move || format!("({})", labels().optional)}</span>
                </span>
                <input
                    type="text"
                    placeholder=move || labels().registration_placeholder
                    prop:value=move || registration.get()
                    on:input=move |ev| set_registration.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="btn-light">{move || labels().submit}</button>
        </form>
    }
}
