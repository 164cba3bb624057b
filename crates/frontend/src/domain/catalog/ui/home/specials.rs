use catalog::{
    SpecialRequest, SPECIAL_COLOR_OPTIONS, SPECIAL_COVER_OPTIONS, SPECIAL_FABRIC_OPTIONS,
};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Select};

fn options_from(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|value| (value.to_string(), value.to_string()))
        .collect()
}

/// The "Specials: Custom Cover" request form. Nothing is sent anywhere; a
/// submit echoes the captured request back and logs it.
#[component]
pub fn SpecialsSection() -> impl IntoView {
    let request = RwSignal::new(SpecialRequest::default());
    let (submitted, set_submitted) = signal(false);

    // Any edit invalidates a previous confirmation.
    let touch = move || {
        if submitted.get_untracked() {
            set_submitted.set(false);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);

        if let Ok(payload) = serde_json::to_string(&request.get_untracked()) {
            log::info!("special request captured: {payload}");
        }
    };

    view! {
        <section id="specials" class="specials reveal" data-reveal="" style="--reveal-delay: 160ms">
            <div class="specials__panel">
                <div class="specials__header">
                    <div>
                        <h2 class="specials__title">"Specials: Custom Cover"</h2>
                        <p class="specials__subtitle">
                            "Enter your measurements and preferences for a custom special cover request."
                        </p>
                    </div>
                    <span class="chip chip--accent">"Custom Specials"</span>
                </div>

                <form class="specials__form" on:submit=on_submit>
                    <div class="field">
                        <label class="field__label" for="special-length">
                            "Length (cm)"
                        </label>
                        <input
                            id="special-length"
                            class="field__input"
                            type="number"
                            min="0"
                            step="0.1"
                            placeholder="e.g. 210"
                            required
                            prop:value=move || request.with(|r| r.length.clone())
                            on:input=move |ev| {
                                request.update(|r| r.length = event_target_value(&ev));
                                touch();
                            }
                        />
                    </div>

                    <div class="field">
                        <label class="field__label" for="special-height">
                            "Height (cm)"
                        </label>
                        <input
                            id="special-height"
                            class="field__input"
                            type="number"
                            min="0"
                            step="0.1"
                            placeholder="e.g. 95"
                            required
                            prop:value=move || request.with(|r| r.height.clone())
                            on:input=move |ev| {
                                request.update(|r| r.height = event_target_value(&ev));
                                touch();
                            }
                        />
                    </div>

                    <div class="field">
                        <label class="field__label" for="special-width">
                            "Width (cm)"
                        </label>
                        <input
                            id="special-width"
                            class="field__input"
                            type="number"
                            min="0"
                            step="0.1"
                            placeholder="e.g. 140"
                            required
                            prop:value=move || request.with(|r| r.width.clone())
                            on:input=move |ev| {
                                request.update(|r| r.width = event_target_value(&ev));
                                touch();
                            }
                        />
                    </div>

                    <Select
                        id="special-fabric"
                        label="Fabric"
                        value=Signal::derive(move || request.with(|r| r.fabric.clone()))
                        options=options_from(&SPECIAL_FABRIC_OPTIONS)
                        on_change=Callback::new(move |value: String| {
                            request.update(|r| r.fabric = value);
                            touch();
                        })
                    />

                    <Select
                        id="special-color"
                        label="Color"
                        value=Signal::derive(move || request.with(|r| r.color.clone()))
                        options=options_from(&SPECIAL_COLOR_OPTIONS)
                        on_change=Callback::new(move |value: String| {
                            request.update(|r| r.color = value);
                            touch();
                        })
                    />

                    <Select
                        id="special-cover-option"
                        label="Cover Option"
                        value=Signal::derive(move || request.with(|r| r.cover_option.clone()))
                        options=options_from(&SPECIAL_COVER_OPTIONS)
                        on_change=Callback::new(move |value: String| {
                            request.update(|r| r.cover_option = value);
                            touch();
                        })
                    />

                    <div class="specials__actions">
                        <Button button_type="submit">"Submit Specials Request"</Button>
                        <p class="specials__note">
                            "These details can be used to prepare a quote and production plan."
                        </p>
                    </div>
                </form>

                <Show when=move || submitted.get()>
                    <p class="specials__confirmation">
                        {move || request.with(|r| r.confirmation())}
                        <br />
                        "A representative will be in contact with a quote."
                    </p>
                </Show>
            </div>
        </section>
    }
}
