use leptos::prelude::*;

use crate::shared::icons::icon;

/// Select with optional label and a decorative caret
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: (value, label) pairs
    options: Vec<(String, String)>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let options = StoredValue::new(options);

    view! {
        <div class="select">
            {move || {
                label
                    .get()
                    .map(|text| {
                        view! {
                            <label class="select__label" for=select_id>
                                {text}
                            </label>
                        }
                    })
            }}
            <div class="select__control">
                <select
                    id=select_id
                    class="select__field"
                    prop:value=move || value.get()
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_value(&ev));
                        }
                    }
                >
                    <For
                        each=move || options.get_value()
                        key=|(option_value, _)| option_value.clone()
                        children=move |(option_value, option_label)| {
                            let this_value = option_value.clone();
                            let is_selected = move || value.get() == this_value;
                            view! {
                                <option value=option_value selected=is_selected>
                                    {option_label}
                                </option>
                            }
                        }
                    />
                </select>
                <span class="select__caret">{icon("caret-down")}</span>
            </div>
        </div>
    }
}
