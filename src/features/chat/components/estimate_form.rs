use leptos::ev;
use leptos::prelude::*;

use crate::core::models::{EstimateDetails, Locale};
use crate::features::chat::forms::{EstimateDraft, EstimateField, EstimateLabels};

#[component]
pub fn EstimateForm(
    #[prop(into)] locale: Signal<Locale>,
    #[prop(into)] on_submit: Callback<EstimateDetails>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let draft = RwSignal::new(EstimateDraft::default());
    let labels = move || EstimateLabels::for_locale(locale.get());

    let value_of = move |field: EstimateField| move || draft.with(|d| d.field(field).to_string());
    let set_field = move |field: EstimateField| {
        move |ev: web_sys::Event| draft.update(|d| d.set(field, event_target_value(&ev)))
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = draft.get_untracked();
        let details = current.take();
        draft.set(current);
        on_submit.run(details);
    };

    view! {
        <form class="chat-form estimate-form" on:submit=handle_submit>
            <label class="form-group">
                <span class="form-label">{move || labels().car_model}</span>
                <input
                    type="text"
                    required
                    placeholder=move || labels().car_model_placeholder
                    prop:value=value_of(EstimateField::CarModel)
                    on:input=set_field(EstimateField::CarModel)
                />
            </label>
            <label class="form-group">
                <span class="form-label">{move || labels().year}</span>
                <input
                    type="text"
                    required
                    placeholder=move || labels().year_placeholder
                    prop:value=value_of(EstimateField::Year)
                    on:input=set_field(EstimateField::Year)
                />
            </label>
            <label class="form-group">
                <span class="form-label">{move || labels().damage_type}</span>
                <input
                    type="text"
                    required
                    placeholder=move || labels().damage_type_placeholder
                    prop:value=value_of(EstimateField::DamageType)
                    on:input=set_field(EstimateField::DamageType)
                />
            </label>
            <label class="form-group">
                <span class="form-label">{move || labels().damage_description}</span>
                <textarea
                    rows="3"
                    required
                    placeholder=move || labels().damage_description_placeholder
                    prop:value=value_of(EstimateField::DamageDescription)
                    on:input=set_field(EstimateField::DamageDescription)
                ></textarea>
            </label>
            <label class="form-group">
                <span class="form-label">{move || labels().photo_urls}</span>
                <textarea
                    rows="2"
                    placeholder=move || labels().photo_urls_placeholder
                    prop:value=move || draft.with(|d| d.photo_field().to_string())
                    on:input=move |ev| draft.update(|d| d.set_photo_field(event_target_value(&ev)))
                ></textarea>
            </label>
            <div class="form-actions">
                <button
                    type="submit"
                    class="btn-primary"
                    prop:disabled=move || !draft.with(EstimateDraft::is_complete)
                >{move || labels().submit}</button>
                {on_cancel.map(|cancel| view! {
                    <button type="button" class="btn-secondary" on:click=move |_| cancel.run(())>
                        {move || labels().cancel}
                    </button>
                })}
            </div>
        </form>
    }
}
