//! One-shot image fallback.
//!
//! Each image element carries a two-state flag: pristine until its first
//! error, fallback-applied afterwards. The flag is never revisited, which
//! also guards against an endless substitution loop if the placeholder
//! itself fails to load.

use catalog::IMAGE_FALLBACK;
use leptos::prelude::*;

/// An `<img>` that swaps to the shared placeholder exactly once on error.
#[component]
pub fn FallbackImage(
    /// Image URL; may be reactive (the product gallery swaps it).
    #[prop(into)]
    src: Signal<String>,
    /// Alt text.
    #[prop(into)]
    alt: Signal<String>,
    /// CSS classes for the element.
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let fallback_applied = StoredValue::new(false);

    view! {
        <img
            src=move || src.get()
            alt=move || alt.get()
            class=move || class.get().unwrap_or_default()
            loading="lazy"
            on:error=move |ev| {
                if fallback_applied.get_value() {
                    return;
                }
                fallback_applied.set_value(true);
                let element: web_sys::HtmlImageElement = event_target(&ev);
                element.set_src(IMAGE_FALLBACK);
            }
        />
    }
}
