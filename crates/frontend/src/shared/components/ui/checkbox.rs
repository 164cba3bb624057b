use leptos::prelude::*;

/// Checkbox with trailing label
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Additional CSS classes for the wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let wrapper_class = move || format!("checkbox {}", class.get().unwrap_or_default());

    view! {
        <label class=wrapper_class>
            <input
                type="checkbox"
                class="checkbox__input"
                checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="checkbox__label">{label}</span>
        </label>
    }
}
