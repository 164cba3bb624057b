use leptos::prelude::*;

/// Range slider over whole-unit values (price bounds)
#[component]
pub fn RangeSlider(
    /// Lower bound of the track
    min: u32,
    /// Upper bound of the track
    max: u32,
    /// Current value
    #[prop(into)]
    value: Signal<u32>,
    /// Input event handler; receives the parsed slider value
    #[prop(optional)]
    on_input: Option<Callback<u32>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <input
            type="range"
            class=move || format!("range {}", class.get().unwrap_or_default())
            min=min.to_string()
            max=max.to_string()
            prop:value=move || value.get().to_string()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    if let Ok(parsed) = event_target_value(&ev).parse::<u32>() {
                        handler.run(parsed);
                    }
                }
            }
        />
    }
}
