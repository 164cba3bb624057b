use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Search box with a debounced change callback and a clear button.
///
/// The input keeps its own local value while typing; `on_change` fires once
/// typing pauses. An external reset (e.g. the filter Reset button) flows back
/// into the input through `value`.
#[component]
pub fn SearchInput(
    /// Committed filter value.
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value after the debounce interval.
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
    /// ID for the input element.
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let cancel_pending = move || {
        pending.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
    };

    // Follow external changes (reset) without clobbering in-flight typing.
    Effect::new(move |_| {
        let external = value.get();
        if external != input_value.get_untracked() {
            set_input_value.set(external);
        }
    });

    let handle_input = move |text: String| {
        set_input_value.set(text.clone());
        cancel_pending();
        let timer = Timeout::new(DEBOUNCE_MS, move || on_change.run(text));
        pending.set_value(Some(timer));
    };

    let clear = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                id=move || id.get().unwrap_or_default()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    type="button"
                    class="search-input__clear"
                    title="Clear search"
                    on:click=clear
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
